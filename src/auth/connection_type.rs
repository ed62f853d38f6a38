use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;

/// Transport security mode of the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ConnectionType {
    /// TLS from the first byte.
    Tls,
    /// Plaintext upgraded with STARTTLS.
    StartTls,
    /// No transport encryption.
    Plain,
}

impl ConnectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionType::Tls => "tls",
            ConnectionType::StartTls => "starttls",
            ConnectionType::Plain => "plain",
        }
    }

    pub fn is_encrypted(self) -> bool {
        !matches!(self, ConnectionType::Plain)
    }
}

impl Default for ConnectionType {
    fn default() -> Self {
        crate::config::DEFAULT_CONNECTION_TYPE
    }
}

impl FromStr for ConnectionType {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tls" => Ok(ConnectionType::Tls),
            "starttls" => Ok(ConnectionType::StartTls),
            "plain" | "clear" => Ok(ConnectionType::Plain),
            _ => Err(CredentialError::UnknownConnectionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ConnectionType {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConnectionType> for &'static str {
    fn from(connection_type: ConnectionType) -> Self {
        connection_type.as_str()
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
