//! Authentication module for ScanExpress.
//!
//! This module provides:
//! - Password hashing and verification (Argon2id, werkzeug PBKDF2/scrypt)
//! - Credential verification for the login endpoint

mod password;
mod verifier;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH, WERKZEUG_DEFAULT_PBKDF2_ITERATIONS,
};
pub use verifier::{AuthenticatedAccount, CredentialVerifier, LoginError};
