//! Request DTOs for the login API.

use serde::{Deserialize, Deserializer};

/// Login request: `{ "email": string, "senha": string }`.
///
/// Absent fields, `null`, and non-string values all deserialize to `None`.
#[derive(Default, Deserialize)]
pub struct LoginRequest {
    /// Email.
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    /// Password.
    #[serde(default, rename = "senha", deserialize_with = "string_or_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}
