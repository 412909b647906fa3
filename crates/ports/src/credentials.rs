// crates/ports/src/credentials.rs
use absence_days_shared_kernel::Result;
use serde::Deserialize;

/// Access material for an authenticated trip source, parsed from a JSON
/// document. At least one field must be present for the material to be
/// usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// API key sent as a query parameter.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Bearer token sent in the Authorization header.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Credentials {
    /// True when the document carried no usable material.
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.bearer_token.is_none()
    }
}

/// One strategy for locating credentials.
///
/// `Ok(None)` means "nothing found here" and the resolver moves on to the
/// next provider; an error means material was found but could not be used.
pub trait CredentialProvider: Send + Sync {
    /// Short name used in authentication failure messages.
    fn name(&self) -> &'static str;

    fn resolve(&self) -> Result<Option<Credentials>>;
}
