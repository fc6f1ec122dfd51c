//! Store-access seam for the credential verifier.

use async_trait::async_trait;

use super::account::AccountRecord;
use super::repository::AccountRepository;
use super::{Database, DbPool};
use crate::Result;

/// Read access to accounts, injected into the verifier.
///
/// Implementations must issue a single read-only lookup per call and must
/// never splice `email` into query text.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find the account registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>>;
}

/// `AccountStore` backed by the sqlx pool.
///
/// Each lookup checks a connection out of the pool for the duration of the
/// query; it returns to the pool when the query future completes or is dropped.
#[derive(Clone)]
pub struct SqlAccountStore {
    pool: DbPool,
}

impl SqlAccountStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a store sharing the pool of `db`.
    pub fn from_database(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }
}

#[async_trait]
impl AccountStore for SqlAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        AccountRepository::new(&self.pool).get_by_email(email).await
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sql_store_delegates_to_repository() {
        let db = Database::open_in_memory().await.unwrap();
        sqlx::query("INSERT INTO usuarios (nome_completo, email, senha_hash) VALUES ($1, $2, $3)")
            .bind("Ana Souza")
            .bind("ana@x.com")
            .bind("hash")
            .execute(db.pool())
            .await
            .unwrap();

        let store: Box<dyn AccountStore> = Box::new(SqlAccountStore::from_database(&db));

        let found = store.find_by_email("ana@x.com").await.unwrap();
        assert_eq!(found.unwrap().full_name, "Ana Souza");
        assert!(store.find_by_email("ghost@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sql_store_closed_pool_is_error() {
        let db = Database::open_in_memory().await.unwrap();
        let store = SqlAccountStore::from_database(&db);
        db.close().await;

        let result = store.find_by_email("ana@x.com").await;
        assert!(matches!(
            result,
            Err(crate::ScanExpressError::DatabaseConnection(_))
        ));
    }
}
