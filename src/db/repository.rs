//! Account repository for ScanExpress.
//!
//! Read-only: accounts are created and maintained by the registration system.

use super::account::AccountRecord;
use super::DbPool;
use crate::Result;

/// Repository for account lookups.
pub struct AccountRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new AccountRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get an account by email (case-insensitive), with its organization name.
    ///
    /// Accounts without an organization still resolve through the left join.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            "SELECT CAST(u.id AS BIGINT) AS id, u.nome_completo, u.email, u.senha_hash,
                    c.nome AS condominio_nome
             FROM usuarios u
             LEFT JOIN condominios c ON u.condominio_id = c.id
             WHERE LOWER(u.email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(account)
    }
}
