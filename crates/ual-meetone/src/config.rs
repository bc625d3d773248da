/*
[INPUT]:  YAML configuration file or string
[OUTPUT]: Parsed authenticator configuration
[POS]:    Configuration layer - chains handed to the authenticator
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::host::Chain;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Authenticator configuration
///
/// ```yaml
/// chains:
///   - chainId: aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906
///     rpcEndpoints:
///       - protocol: https
///         host: eos.greymass.com
///         port: 443
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthenticatorConfig {
    /// Chains the host wants to use; the first one is bound to logged-in users
    pub chains: Vec<Chain>,
}

impl AuthenticatorConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.chains.is_empty() {
            return Err(ConfigError::Invalid("at least one chain is required".to_string()));
        }
        if let Some(chain) = self.chains.iter().find(|chain| chain.chain_id.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "chain id must not be empty (endpoints: {:?})",
                chain.rpc_endpoints
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chains() {
        let yaml = r#"
chains:
  - chainId: aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906
    rpcEndpoints:
      - protocol: https
        host: eos.greymass.com
        port: 443
  - chain_id: telos
"#;
        let config = AuthenticatorConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.chains.len(), 2);
        assert_eq!(config.chains[0].rpc_endpoints[0].host, "eos.greymass.com");
        assert_eq!(config.chains[1].chain_id, "telos");
        assert!(config.chains[1].rpc_endpoints.is_empty());
    }

    #[test]
    fn test_empty_chain_list_is_rejected() {
        let err = AuthenticatorConfig::from_yaml_str("chains: []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_chain_id_is_rejected() {
        let err = AuthenticatorConfig::from_yaml_str("chains:\n  - chainId: ' '\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = AuthenticatorConfig::from_yaml_str("chains: {").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AuthenticatorConfig::from_file("/nonexistent/ual-meetone.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
