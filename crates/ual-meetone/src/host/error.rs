/*
[INPUT]:  Failure causes from the bridge, the environment probe, or unsupported calls
[OUTPUT]: AuthenticatorError envelope with kind, message, cause, and source name
[POS]:    Host layer - error envelope shared by every authenticator
[UPDATE]: When the host adds error kinds or envelope fields
*/

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed underlying cause carried by an envelope
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Category of an authenticator failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Initialization,
    Login,
    Signing,
    /// The wallet does not offer the requested capability
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Initialization => "initialization",
            ErrorKind::Login => "login",
            ErrorKind::Signing => "signing",
            ErrorKind::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

/// Error envelope returned (or recorded) at every authenticator failure boundary
#[derive(Error, Debug)]
#[error("{message}")]
pub struct AuthenticatorError {
    message: String,
    kind: ErrorKind,
    #[source]
    cause: Option<Cause>,
    source_name: String,
}

impl AuthenticatorError {
    pub fn new(
        message: impl Into<String>,
        kind: ErrorKind,
        cause: Option<Cause>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            cause,
            source_name: source_name.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Display name of the authenticator that raised the error
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Downcast the underlying cause to a concrete error type
    pub fn cause_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.as_deref().and_then(|cause| cause.downcast_ref::<E>())
    }
}

/// Result type alias for host-facing operations
pub type Result<T> = std::result::Result<T, AuthenticatorError>;
