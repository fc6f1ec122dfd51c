//! Account record as read for login.

/// An account row joined with its organization's display name.
#[derive(Clone, sqlx::FromRow)]
pub struct AccountRecord {
    /// Unique account ID.
    pub id: i64,
    /// Full name (`nome_completo`).
    #[sqlx(rename = "nome_completo")]
    pub full_name: String,
    /// Email exactly as stored.
    pub email: String,
    /// Salted password hash (`senha_hash`), opaque to this crate.
    #[sqlx(rename = "senha_hash")]
    pub password_hash: String,
    /// Organization display name, if the account belongs to one.
    #[sqlx(rename = "condominio_nome")]
    pub organization_name: Option<String>,
}

impl std::fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountRecord")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("organization_name", &self.organization_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let record = AccountRecord {
            id: 1,
            full_name: "Ana Souza".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "pbkdf2:sha256:1000$salt$deadbeef".to_string(),
            organization_name: None,
        };

        let debug = format!("{:?}", record);
        assert!(debug.contains("ana@x.com"));
        assert!(!debug.contains("deadbeef"));
    }
}
