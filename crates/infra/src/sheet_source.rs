// crates/infra/src/sheet_source.rs
use absence_days_ports::credentials::Credentials;
use absence_days_ports::trip_source::{TripRowDto, TripSource};
use absence_days_shared_kernel::{InfrastructureError, Result};
use serde::Deserialize;
use tracing::debug;

use crate::schema::ColumnMap;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Trip source fetching one spreadsheet tab through the sheet values API.
///
/// Authenticates with whatever material the credential chain resolved: an
/// API key goes in the query string, a bearer token in the Authorization
/// header.
pub struct SheetTripSource {
    sheet_id: String,
    tab: String,
    credentials: Credentials,
    base_url: String,
    client: reqwest::blocking::Client,
}

/// Body shape of the values endpoint: a grid of strings, header row first.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetTripSource {
    pub fn new(
        sheet_id: impl Into<String>,
        tab: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            tab: tab.into(),
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Points the source at a different endpoint; test servers use this.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.sheet_id, self.tab
        )
    }
}

impl TripSource for SheetTripSource {
    fn fetch_rows(&self) -> Result<Vec<TripRowDto>> {
        let mut request = self.client.get(self.values_url());
        if let Some(key) = &self.credentials.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        if let Some(token) = &self.credentials.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|err| {
            InfrastructureError::SourceUnavailable {
                reason: format!("sheet {} unreachable: {err}", self.sheet_id),
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(InfrastructureError::AuthenticationFailure {
                reason: format!(
                    "sheet {} rejected the supplied credentials ({status})",
                    self.sheet_id
                ),
            }
            .into());
        }
        if !status.is_success() {
            return Err(InfrastructureError::SourceUnavailable {
                reason: format!("sheet {} returned {status}", self.sheet_id),
            }
            .into());
        }

        let body: ValuesResponse =
            response
                .json()
                .map_err(|err| InfrastructureError::SerializationError {
                    format: "JSON".to_string(),
                    details: err.to_string(),
                })?;

        let rows = ColumnMap::map_values(&body.values)?;
        debug!(
            rows = rows.len(),
            sheet = %self.sheet_id,
            tab = %self.tab,
            "fetched sheet trip rows"
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_url_embeds_sheet_and_tab() {
        let source = SheetTripSource::new("sheet123", "trips", Credentials::default())
            .with_base_url("http://127.0.0.1:9");
        assert_eq!(
            source.values_url(),
            "http://127.0.0.1:9/v4/spreadsheets/sheet123/values/trips"
        );
    }

    #[test]
    fn unreachable_endpoint_is_source_unavailable() {
        // Port 9 (discard) refuses connections on loopback.
        let source = SheetTripSource::new("sheet123", "trips", Credentials::default())
            .with_base_url("http://127.0.0.1:9");
        let err = source.fetch_rows().unwrap_err();
        assert!(err.to_string().contains("sheet123"));
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn values_response_defaults_to_an_empty_grid() {
        let body: ValuesResponse = serde_json::from_str("{}").unwrap();
        assert!(body.values.is_empty());

        let body: ValuesResponse = serde_json::from_str(
            r#"{"range":"trips!A1:C3","values":[["start_date","end_date"],["2023-01-01","2023-01-10"]]}"#,
        )
        .unwrap();
        assert_eq!(body.values.len(), 2);
    }
}
