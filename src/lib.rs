pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod source;

// Re-exports for convenient access
pub use auth::{AuthFamily, AuthType, ConnectionType};
pub use config::{ParseOptions, ParseOptionsBuilder};
pub use credentials::{parse, validate_for_auth_type, Credential};
pub use error::CredentialError;
pub use source::{FieldKind, FieldSource, FieldValue};
