//! ScanExpress login service
//!
//! Verifies account credentials by email and password against the
//! relational store shared with the ScanExpress registration backend.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, validate_password, verify_password, AuthenticatedAccount, CredentialVerifier,
    LoginError, PasswordError,
};
pub use config::Config;
pub use db::{AccountRecord, AccountStore, Database, SqlAccountStore};
pub use error::{Result, ScanExpressError};
pub use web::WebServer;
