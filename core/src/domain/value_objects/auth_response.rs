//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

/// Tokens returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    /// Username the tokens were issued for
    pub username: String,

    /// Signed access token for `Authorization: Bearer`
    pub access_token: String,

    /// Opaque refresh token; echoed unchanged on refresh
    pub refresh_token: String,
}

impl JwtResponse {
    pub fn new(username: String, access_token: String, refresh_token: String) -> Self {
        Self {
            username,
            access_token,
            refresh_token,
        }
    }
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
