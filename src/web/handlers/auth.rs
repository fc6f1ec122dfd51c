//! Authentication handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::db::{Database, SqlAccountStore};
use crate::web::dto::{LoginJson, LoginResponse};
use crate::web::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential verifier over the injected account store.
    pub verifier: CredentialVerifier,
}

impl AppState {
    /// Create a new application state.
    pub fn new(verifier: CredentialVerifier) -> Self {
        Self { verifier }
    }

    /// Create an application state reading accounts from `db`.
    pub fn from_database(db: &Database) -> Self {
        Self::new(CredentialVerifier::new(Arc::new(
            SqlAccountStore::from_database(db),
        )))
    }
}

/// POST /auth/login - Verify email and password.
pub async fn login(
    State(state): State<Arc<AppState>>,
    LoginJson(req): LoginJson,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let account = state.verifier.verify(&email, &password).await?;

    Ok(Json(LoginResponse::success(account)))
}
