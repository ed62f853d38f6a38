use derive_builder::Builder;

use crate::auth::ConnectionType;

// Field keys of the host structure
pub const HOSTNAME_KEY: &str = "hostname";
pub const PORT_KEY: &str = "port";
pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const AUTH_TYPE_KEY: &str = "authType";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const CONNECTION_TYPE_KEY: &str = "connectionType";

pub const PORT_MIN: i64 = 1;
pub const PORT_MAX: i64 = 65535;

/// Used when the host leaves `connectionType` out.
pub const DEFAULT_CONNECTION_TYPE: ConnectionType = ConnectionType::Tls;

/// Knobs for [`Credential::parse_with`](crate::Credential::parse_with).
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(pattern = "owned")]
pub struct ParseOptions {
    /// Connection type for sources without a `connectionType` key.
    #[builder(default = "DEFAULT_CONNECTION_TYPE")]
    default_connection_type: ConnectionType,
}

impl ParseOptions {
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }

    pub fn default_connection_type(&self) -> ConnectionType {
        self.default_connection_type
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_connection_type: DEFAULT_CONNECTION_TYPE,
        }
    }
}
