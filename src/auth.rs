//! Credential, secret, and access-token models plus the Basic-Auth encoder.

pub mod basic;
pub mod credentials;
pub mod secret;
pub mod token;

pub use basic::*;
pub use credentials::*;
pub use secret::*;
pub use token::*;
