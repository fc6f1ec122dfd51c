//! Data Transfer Objects for the login API.

pub mod extract;
pub mod request;
pub mod response;

pub use extract::LoginJson;
pub use request::*;
pub use response::*;
