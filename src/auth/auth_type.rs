use serde::{Deserialize, Serialize};

use crate::config::{ACCESS_TOKEN_KEY, PASSWORD_KEY, USERNAME_KEY};
use crate::error::CredentialError;

/// Authentication mechanism requested by the host.
///
/// Discriminants are the integer codes the host sends in `authType`; they are
/// single bits so hosts can keep using them as a mechanism mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum AuthType {
    None = 0,
    CramMd5 = 0x01,
    Plain = 0x02,
    Gssapi = 0x04,
    DigestMd5 = 0x08,
    Login = 0x10,
    Srp = 0x20,
    Ntlm = 0x40,
    KerberosV4 = 0x80,
    XOAuth2 = 0x100,
    XOAuth2Outlook = 0x200,
}

/// Groups auth types by the fields they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthFamily {
    /// No secret at all.
    None,
    /// Username and password.
    Password,
    /// Bearer/OAuth access token.
    Token,
    /// Ticket or key held by the platform, nothing carried here.
    KeyBased,
}

impl AuthType {
    pub const ALL: [AuthType; 11] = [
        AuthType::None,
        AuthType::CramMd5,
        AuthType::Plain,
        AuthType::Gssapi,
        AuthType::DigestMd5,
        AuthType::Login,
        AuthType::Srp,
        AuthType::Ntlm,
        AuthType::KerberosV4,
        AuthType::XOAuth2,
        AuthType::XOAuth2Outlook,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn family(self) -> AuthFamily {
        match self {
            AuthType::None => AuthFamily::None,
            AuthType::CramMd5
            | AuthType::Plain
            | AuthType::DigestMd5
            | AuthType::Login
            | AuthType::Srp
            | AuthType::Ntlm => AuthFamily::Password,
            AuthType::Gssapi | AuthType::KerberosV4 => AuthFamily::KeyBased,
            AuthType::XOAuth2 | AuthType::XOAuth2Outlook => AuthFamily::Token,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::CramMd5 => "cram-md5",
            AuthType::Plain => "plain",
            AuthType::Gssapi => "gssapi",
            AuthType::DigestMd5 => "digest-md5",
            AuthType::Login => "login",
            AuthType::Srp => "srp",
            AuthType::Ntlm => "ntlm",
            AuthType::KerberosV4 => "kerberos-v4",
            AuthType::XOAuth2 => "xoauth2",
            AuthType::XOAuth2Outlook => "xoauth2-outlook",
        }
    }
}

impl AuthFamily {
    /// Credential fields, by wire key, that must be non-empty for this family.
    /// `hostname` is required by every family and is not listed.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            AuthFamily::Password => &[USERNAME_KEY, PASSWORD_KEY],
            AuthFamily::Token => &[ACCESS_TOKEN_KEY],
            AuthFamily::None | AuthFamily::KeyBased => &[],
        }
    }

    pub fn requires(self, key: &str) -> bool {
        self.required_fields().contains(&key)
    }
}

impl TryFrom<i64> for AuthType {
    type Error = CredentialError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        AuthType::ALL
            .into_iter()
            .find(|auth_type| auth_type.code() == code)
            .ok_or(CredentialError::UnknownAuthType(code))
    }
}

impl From<AuthType> for i64 {
    fn from(auth_type: AuthType) -> Self {
        auth_type.code()
    }
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for AuthFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthFamily::None => write!(f, "None"),
            AuthFamily::Password => write!(f, "Password"),
            AuthFamily::Token => write!(f, "Token"),
            AuthFamily::KeyBased => write!(f, "KeyBased"),
        }
    }
}
