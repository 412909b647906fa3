// crates/infra/src/credentials.rs
//! Ordered credential resolution.
//!
//! Each provider is one strategy for locating access material; the
//! resolver walks the chain in order and only reports an authentication
//! failure once every strategy has come back empty.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs};

use absence_days_ports::credentials::{CredentialProvider, Credentials};
use absence_days_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

/// Env var holding a path to a credentials JSON file.
pub const CREDENTIALS_PATH_ENV: &str = "GOOGLE_CREDENTIALS_JSON";

/// Env var holding the credentials JSON document itself.
pub const CREDENTIALS_JSON_ENV: &str = "GOOGLE_CREDENTIALS";

/// Default secrets directory probed by [`SecretDirProvider`].
pub const DEFAULT_SECRET_DIR: &str = "/run/secrets/absence_days";

const SECRET_FILE_NAME: &str = "credentials.json";

fn parse_credentials(provider: &'static str, raw: &str) -> Result<Credentials> {
    let credentials: Credentials = serde_json::from_str(raw).map_err(|err| {
        InfrastructureError::AuthenticationFailure {
            reason: format!("{provider}: credentials are not valid JSON: {err}"),
        }
    })?;
    if credentials.is_empty() {
        return Err(InfrastructureError::AuthenticationFailure {
            reason: format!("{provider}: credentials carry neither api_key nor bearer_token"),
        }
        .into());
    }
    Ok(credentials)
}

/// Reads credentials from an explicit JSON file path, falling back to the
/// path named by `GOOGLE_CREDENTIALS_JSON`.
#[derive(Debug, Default)]
pub struct FileCredentialProvider {
    path: Option<PathBuf>,
}

impl FileCredentialProvider {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn effective_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| env::var_os(CREDENTIALS_PATH_ENV).map(PathBuf::from))
    }
}

impl CredentialProvider for FileCredentialProvider {
    fn name(&self) -> &'static str {
        "credentials file"
    }

    fn resolve(&self) -> Result<Option<Credentials>> {
        let Some(path) = self.effective_path() else {
            return Ok(None);
        };
        let raw = fs::read_to_string(&path).map_err(|err| {
            InfrastructureError::AuthenticationFailure {
                reason: format!("{}: cannot read {}: {err}", self.name(), path.display()),
            }
        })?;
        parse_credentials("credentials file", &raw).map(Some)
    }
}

/// Reads the credentials JSON blob straight out of `GOOGLE_CREDENTIALS`.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn name(&self) -> &'static str {
        "environment blob"
    }

    fn resolve(&self) -> Result<Option<Credentials>> {
        match env::var(CREDENTIALS_JSON_ENV) {
            Ok(raw) if !raw.trim().is_empty() => parse_credentials("environment blob", &raw).map(Some),
            _ => Ok(None),
        }
    }
}

/// Reads `credentials.json` from a secrets directory, the shape used by
/// container secret mounts.
#[derive(Debug)]
pub struct SecretDirProvider {
    dir: PathBuf,
}

impl SecretDirProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for SecretDirProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_DIR)
    }
}

impl CredentialProvider for SecretDirProvider {
    fn name(&self) -> &'static str {
        "secrets directory"
    }

    fn resolve(&self) -> Result<Option<Credentials>> {
        let path = self.dir.join(SECRET_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(raw) => parse_credentials("secrets directory", &raw).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfrastructureError::AuthenticationFailure {
                reason: format!("{}: cannot read {}: {err}", self.name(), path.display()),
            }
            .into()),
        }
    }
}

/// Tries each provider in order; the first hit wins.
pub struct CredentialResolver {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialResolver {
    /// The standard chain: explicit file, env JSON blob, secrets directory.
    pub fn standard(file_path: Option<PathBuf>) -> Self {
        Self::new(vec![
            Box::new(FileCredentialProvider::new(file_path)),
            Box::new(EnvCredentialProvider),
            Box::new(SecretDirProvider::default()),
        ])
    }

    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// # Errors
    /// [`InfrastructureError::AuthenticationFailure`] when every provider
    /// comes back empty, or immediately when a provider finds material it
    /// cannot use.
    pub fn resolve(&self) -> Result<Credentials> {
        for provider in &self.providers {
            if let Some(credentials) = provider.resolve()? {
                debug!(provider = provider.name(), "resolved sheet credentials");
                return Ok(credentials);
            }
        }
        Err(InfrastructureError::AuthenticationFailure {
            reason: "no credential provider produced usable material".to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    struct FixedProvider(Option<Credentials>);

    impl CredentialProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn resolve(&self) -> Result<Option<Credentials>> {
            Ok(self.0.clone())
        }
    }

    fn api_key(key: &str) -> Credentials {
        Credentials {
            api_key: Some(key.to_string()),
            bearer_token: None,
        }
    }

    #[test]
    fn file_provider_parses_a_json_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"api_key": "k-123"}"#).unwrap();

        let provider = FileCredentialProvider::new(Some(file.path().to_path_buf()));
        let credentials = provider.resolve().unwrap().unwrap();
        assert_eq!(credentials.api_key.as_deref(), Some("k-123"));
    }

    #[test]
    fn file_provider_with_no_path_is_not_found() {
        // No explicit path, and the env var is absent in the test harness.
        let provider = FileCredentialProvider::new(None);
        assert!(provider.resolve().unwrap().is_none());
    }

    #[test]
    fn unreadable_file_is_an_authentication_failure() {
        let provider = FileCredentialProvider::new(Some(PathBuf::from("/nonexistent/creds.json")));
        let err = provider.resolve().unwrap_err();
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn empty_material_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let provider = FileCredentialProvider::new(Some(file.path().to_path_buf()));
        let err = provider.resolve().unwrap_err();
        assert!(err.to_string().contains("neither api_key nor bearer_token"));
    }

    #[test]
    fn secret_dir_provider_reads_credentials_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SECRET_FILE_NAME),
            br#"{"bearer_token": "t-456"}"#,
        )
        .unwrap();

        let provider = SecretDirProvider::new(dir.path());
        let credentials = provider.resolve().unwrap().unwrap();
        assert_eq!(credentials.bearer_token.as_deref(), Some("t-456"));
    }

    #[test]
    fn secret_dir_without_the_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SecretDirProvider::new(dir.path());
        assert!(provider.resolve().unwrap().is_none());
    }

    #[test]
    fn resolver_takes_the_first_hit_in_order() {
        let resolver = CredentialResolver::new(vec![
            Box::new(FixedProvider(None)),
            Box::new(FixedProvider(Some(api_key("second")))),
            Box::new(FixedProvider(Some(api_key("third")))),
        ]);
        let credentials = resolver.resolve().unwrap();
        assert_eq!(credentials.api_key.as_deref(), Some("second"));
    }

    #[test]
    fn exhausted_chain_is_an_authentication_failure() {
        let resolver = CredentialResolver::new(vec![
            Box::new(FixedProvider(None)),
            Box::new(FixedProvider(None)),
        ]);
        let err = resolver.resolve().unwrap_err();
        assert!(err.to_string().contains("no credential provider"));
    }
}
