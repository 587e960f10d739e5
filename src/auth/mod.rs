pub mod credentials;
pub mod token;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use token::{TokenClaims, issue, validate};
