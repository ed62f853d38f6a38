use zeroize::ZeroizeOnDrop;

use crate::auth::{AuthType, ConnectionType};
use crate::config::{
    ParseOptions, ACCESS_TOKEN_KEY, AUTH_TYPE_KEY, CONNECTION_TYPE_KEY, HOSTNAME_KEY,
    PASSWORD_KEY, PORT_KEY, PORT_MAX, PORT_MIN, USERNAME_KEY,
};
use crate::error::CredentialError;
use crate::source::FieldSource;

/// Connection and authentication parameters for a single connection attempt.
///
/// Only built by parsing a host structure; there are no setters. Secret
/// fields are wiped on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct Credential {
    hostname: String,
    #[zeroize(skip)]
    port: u16,
    username: String,
    password: String,
    #[zeroize(skip)]
    auth_type: AuthType,
    access_token: String,
    #[zeroize(skip)]
    connection_type: ConnectionType,
}

impl Credential {
    /// Parse with [`ParseOptions::default`].
    pub fn parse<S: FieldSource + ?Sized>(source: &S) -> Result<Self, CredentialError> {
        Self::parse_with(source, &ParseOptions::default())
    }

    /// Extract every field from `source`. Fields are read in a fixed order
    /// and the first problem is reported; nothing is returned on error.
    ///
    /// This checks shapes and ranges only. Whether the fields needed by the
    /// auth type are filled in is left to [`Credential::validate_for_auth_type`].
    pub fn parse_with<S: FieldSource + ?Sized>(
        source: &S,
        options: &ParseOptions,
    ) -> Result<Self, CredentialError> {
        let hostname = required_text(source, HOSTNAME_KEY)?;
        let port = required_port(source)?;
        let username = required_text(source, USERNAME_KEY)?;
        let password = required_text(source, PASSWORD_KEY)?;
        let auth_type = AuthType::try_from(required_int(source, AUTH_TYPE_KEY)?)?;
        let access_token = required_text(source, ACCESS_TOKEN_KEY)?;
        let connection_type = match source.get_text(CONNECTION_TYPE_KEY)? {
            Some(raw) => raw.parse()?,
            None => options.default_connection_type(),
        };

        let credential = Self {
            hostname,
            port,
            username,
            password,
            auth_type,
            access_token,
            connection_type,
        };

        log::debug!(
            "Parsed credential {} ({}, {})",
            credential.fingerprint(),
            auth_type,
            connection_type
        );
        Ok(credential)
    }

    /// Parse, then reject the result unless it is complete for its auth type.
    pub fn parse_validated<S: FieldSource + ?Sized>(source: &S) -> Result<Self, CredentialError> {
        let credential = Self::parse(source)?;
        credential.validate_for_auth_type()?;
        Ok(credential)
    }

    /// Keys of the fields the auth type needs but which are empty, in
    /// declaration order. `hostname` is needed by every auth type.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let family = self.auth_type.family();

        [
            (HOSTNAME_KEY, self.hostname.as_str()),
            (USERNAME_KEY, self.username.as_str()),
            (PASSWORD_KEY, self.password.as_str()),
            (ACCESS_TOKEN_KEY, self.access_token.as_str()),
        ]
        .into_iter()
        .filter(|(key, _)| *key == HOSTNAME_KEY || family.requires(key))
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    pub fn validate_for_auth_type(&self) -> Result<(), CredentialError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            log::warn!(
                "Credential {} incomplete for {}: empty {}",
                self.fingerprint(),
                self.auth_type,
                missing.join(", ")
            );
            return Err(CredentialError::IncompleteCredential {
                auth_type: self.auth_type,
                missing,
            });
        }

        log::debug!(
            "Credential {} complete for {} ({})",
            self.fingerprint(),
            self.auth_type,
            self.auth_type.family()
        );
        Ok(())
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    /// `host:port`, with IPv6 literals in brackets.
    pub fn endpoint(&self) -> String {
        if self.hostname.contains(':') && !self.hostname.starts_with('[') {
            format!("[{}]:{}", self.hostname, self.port)
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// Stable identifier for logs. Covers auth type, user and endpoint but
    /// no secrets.
    pub fn fingerprint(&self) -> String {
        let digest = md5::compute(format!(
            "{}:{}@{}:{}",
            self.auth_type.code(),
            self.username,
            self.hostname,
            self.port
        ));
        hex::encode(digest.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("auth_type", &self.auth_type)
            .field("access_token", &redacted(&self.access_token))
            .field("connection_type", &self.connection_type)
            .finish()
    }
}

/// Free-function form of [`Credential::parse`].
pub fn parse<S: FieldSource + ?Sized>(source: &S) -> Result<Credential, CredentialError> {
    Credential::parse(source)
}

/// Free-function form of [`Credential::validate_for_auth_type`].
pub fn validate_for_auth_type(credential: &Credential) -> Result<(), CredentialError> {
    credential.validate_for_auth_type()
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

fn required_text<S: FieldSource + ?Sized>(
    source: &S,
    key: &'static str,
) -> Result<String, CredentialError> {
    source
        .get_text(key)?
        .ok_or(CredentialError::MissingField(key))
}

fn required_int<S: FieldSource + ?Sized>(
    source: &S,
    key: &'static str,
) -> Result<i64, CredentialError> {
    source.get_int(key)?.ok_or(CredentialError::MissingField(key))
}

fn required_port<S: FieldSource + ?Sized>(source: &S) -> Result<u16, CredentialError> {
    let value = required_int(source, PORT_KEY)?;
    if !(PORT_MIN..=PORT_MAX).contains(&value) {
        return Err(CredentialError::InvalidRange {
            key: PORT_KEY,
            value,
            min: PORT_MIN,
            max: PORT_MAX,
        });
    }
    Ok(value as u16)
}
