use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token endpoint response.
///
/// Expiry is reported but not tracked; callers decide when to refresh.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
