//! Middleware for the login API.

pub mod cors;

pub use cors::create_cors_layer;
