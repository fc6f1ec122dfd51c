//! Lenient JSON extractor for the login body.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use super::request::LoginRequest;
use crate::web::error::{ApiError, MSG_MISSING_CREDENTIALS};

/// Extracts a [`LoginRequest`] from the request body.
///
/// Unlike `axum::Json`, a body that is not a JSON object (or has no JSON
/// content type) is not rejected here: it yields an empty request, which the
/// verifier classifies as missing credentials.
///
/// # Example
///
/// ```ignore
/// async fn login(LoginJson(req): LoginJson) -> impl IntoResponse {
///     // req.email / req.password are Option<String>
/// }
/// ```
pub struct LoginJson(pub LoginRequest);

#[async_trait]
impl<S> FromRequest<S> for LoginJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read login body");
            ApiError::bad_request(MSG_MISSING_CREDENTIALS)
        })?;

        let payload = match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_default()
            }
            Ok(_) => {
                tracing::debug!("Login body is not a JSON object");
                LoginRequest::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Login body is not valid JSON");
                LoginRequest::default()
            }
        };

        Ok(LoginJson(payload))
    }
}
