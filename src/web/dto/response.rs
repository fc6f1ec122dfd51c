//! Response DTOs for the login API.

use serde::Serialize;

use crate::auth::AuthenticatedAccount;

/// Message returned with a successful login.
pub const MSG_LOGIN_SUCCESS: &str = "Login realizado com sucesso";

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Confirmation message.
    pub message: String,
    /// Profile summary.
    pub user: UserSummary,
}

impl LoginResponse {
    /// Build the success payload for a verified account.
    pub fn success(account: AuthenticatedAccount) -> Self {
        Self {
            message: MSG_LOGIN_SUCCESS.to_string(),
            user: account.into(),
        }
    }
}

/// User information in login responses.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    /// Account ID.
    pub id: i64,
    /// Full name.
    #[serde(rename = "nome")]
    pub full_name: String,
    /// Email as stored.
    pub email: String,
    /// Organization name; serialized as `null` when absent.
    #[serde(rename = "condominio")]
    pub organization_name: Option<String>,
}

impl From<AuthenticatedAccount> for UserSummary {
    fn from(account: AuthenticatedAccount) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name,
            email: account.email,
            organization_name: account.organization_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_wire_format() {
        let response = LoginResponse::success(AuthenticatedAccount {
            id: 3,
            full_name: "Ana Souza".to_string(),
            email: "ana@x.com".to_string(),
            organization_name: Some("Residencial Aurora".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "message": "Login realizado com sucesso",
                "user": {
                    "id": 3,
                    "nome": "Ana Souza",
                    "email": "ana@x.com",
                    "condominio": "Residencial Aurora"
                }
            })
        );
    }

    #[test]
    fn test_login_response_without_condominio() {
        let response = LoginResponse::success(AuthenticatedAccount {
            id: 4,
            full_name: "Bruno Lima".to_string(),
            email: "bruno@x.com".to_string(),
            organization_name: None,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["user"]["condominio"].is_null());
        assert!(value["user"].as_object().unwrap().contains_key("condominio"));
    }
}
