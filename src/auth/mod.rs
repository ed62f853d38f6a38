mod auth_type;
mod connection_type;

pub use auth_type::{AuthFamily, AuthType};
pub use connection_type::ConnectionType;
