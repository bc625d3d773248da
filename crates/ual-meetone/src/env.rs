/*
[INPUT]:  Runtime signals (user agent, injected wallet extension object)
[OUTPUT]: Environment accessor trait and the initialization probe
[POS]:    Environment layer - replaces ambient browser globals
[UPDATE]: When detection heuristics or runtime signals change
*/

use thiserror::Error;

/// Wallet extension object injected into the page by a browser extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedExtension {
    /// Set when the object was injected by the wallet's own webview
    pub is_inject: bool,
}

/// Read-only view of the runtime the adapter is embedded in
pub trait Environment: Send + Sync {
    fn user_agent(&self) -> String;

    fn injected_extension(&self) -> Option<InjectedExtension>;
}

/// Environment probe failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// A different wallet extension has claimed the injected object
    #[error("Unable to connect")]
    ConflictingExtension,
}

/// Check for a foreign wallet extension shadowing the wallet's injected object
pub fn probe(environment: &dyn Environment) -> Result<(), ProbeError> {
    match environment.injected_extension() {
        Some(extension) if !extension.is_inject => Err(ProbeError::ConflictingExtension),
        _ => Ok(()),
    }
}

/// Case-insensitive substring match of the user agent against `marker`
pub fn user_agent_contains(environment: &dyn Environment, marker: &str) -> bool {
    environment
        .user_agent()
        .to_lowercase()
        .contains(&marker.to_lowercase())
}

/// Fixed environment, for tests and hosts that know their runtime up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    user_agent: String,
    injected_extension: Option<InjectedExtension>,
}

impl StaticEnvironment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            injected_extension: None,
        }
    }

    pub fn with_extension(mut self, extension: InjectedExtension) -> Self {
        self.injected_extension = Some(extension);
        self
    }
}

impl Environment for StaticEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn injected_extension(&self) -> Option<InjectedExtension> {
        self.injected_extension
    }
}
