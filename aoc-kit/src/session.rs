//! Session credential lookup

use crate::error::KitError;
use std::env::VarError;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie by default
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

/// Where the session token comes from
///
/// The token is looked up fresh for every network operation and never cached.
pub trait CredentialSource {
    /// The token, or `None` when it is not available
    fn lookup(&self) -> Option<Zeroizing<String>>;

    /// Name of the variable the user should set when the token is missing
    fn origin(&self) -> &str;

    /// Like [`lookup`](Self::lookup), but a missing token is an error
    fn require(&self) -> Result<Zeroizing<String>, KitError> {
        self.lookup().ok_or_else(|| KitError::MissingCredential {
            var: self.origin().to_string(),
        })
    }
}

/// Reads the token from an environment variable
///
/// An unset or empty variable counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(SESSION_ENV_VAR)
    }
}

impl CredentialSource for EnvCredentials {
    fn lookup(&self) -> Option<Zeroizing<String>> {
        token_from(std::env::var(&self.var))
    }

    fn origin(&self) -> &str {
        &self.var
    }
}

/// An unset, non-unicode or empty variable yields no token
fn token_from(var: Result<String, VarError>) -> Option<Zeroizing<String>> {
    var.ok().filter(|s| !s.is_empty()).map(Zeroizing::new)
}

/// A token handed over directly, mostly useful for embedding and tests
#[derive(Clone, Default)]
pub struct StaticCredentials {
    token: Option<Zeroizing<String>>,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(Zeroizing::new(token.into())),
        }
    }

    /// A source that never has a token
    pub fn absent() -> Self {
        Self { token: None }
    }
}

impl CredentialSource for StaticCredentials {
    fn lookup(&self) -> Option<Zeroizing<String>> {
        self.token.clone()
    }

    fn origin(&self) -> &str {
        SESSION_ENV_VAR
    }
}
