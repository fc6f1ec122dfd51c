//! Credential verification for login.
//!
//! One call is one independent check: presence of both fields, a single
//! account lookup, then a one-way hash comparison.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use super::password::{verify_password, PasswordError};
use crate::db::{AccountRecord, AccountStore};
use crate::ScanExpressError;

/// Profile summary returned after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// Account ID.
    pub id: i64,
    /// Full name.
    pub full_name: String,
    /// Email exactly as stored.
    pub email: String,
    /// Organization display name, if any.
    pub organization_name: Option<String>,
}

impl From<AccountRecord> for AuthenticatedAccount {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            organization_name: record.organization_name,
        }
    }
}

/// Classified login failures.
#[derive(Error, Debug)]
pub enum LoginError {
    /// Email or password missing.
    #[error("email and password are required")]
    MissingCredentials,

    /// No account has this email.
    #[error("account not found")]
    AccountNotFound,

    /// The password does not match the stored hash.
    #[error("incorrect password")]
    WrongPassword,

    /// The stored hash cannot be checked.
    #[error("stored password hash is unusable: {0}")]
    UnusableHash(PasswordError),

    /// The account store failed.
    #[error(transparent)]
    Store(#[from] ScanExpressError),

    /// The hashing task panicked or was cancelled.
    #[error("password check did not complete: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

/// Verifies email/password pairs against an injected [`AccountStore`].
#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn AccountStore>,
}

impl CredentialVerifier {
    /// Create a verifier reading accounts from `store`.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Check `password` for the account registered under `email`.
    ///
    /// The email is matched case-insensitively but otherwise as given, and
    /// so is the password. Missing fields fail before the store is touched.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, LoginError> {
        if email.is_empty() || password.is_empty() {
            debug!("Login rejected: missing email or password");
            return Err(LoginError::MissingCredentials);
        }

        let account = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| {
                error!(error = %e, "Account lookup failed");
                LoginError::Store(e)
            })?
            .ok_or_else(|| {
                debug!(email = %email, "Login rejected: unknown email");
                LoginError::AccountNotFound
            })?;

        // Argon2/scrypt/PBKDF2 are CPU-bound; keep them off the async workers.
        let password = password.to_owned();
        let hash = account.password_hash.clone();
        let outcome = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?;

        match outcome {
            Ok(()) => {
                info!(account_id = account.id, "Login succeeded");
                Ok(account.into())
            }
            Err(PasswordError::VerificationFailed) => {
                debug!(account_id = account.id, "Login rejected: wrong password");
                Err(LoginError::WrongPassword)
            }
            Err(e) => {
                error!(account_id = account.id, error = %e, "Stored password hash is unusable");
                Err(LoginError::UnusableHash(e))
            }
        }
    }
}
