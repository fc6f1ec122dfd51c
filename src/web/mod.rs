//! Web API module for ScanExpress.
//!
//! Exposes `POST /auth/login` for the mobile client, plus `GET /health`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
