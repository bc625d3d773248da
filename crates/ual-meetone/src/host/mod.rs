/*
[INPUT]:  Host framework expectations for wallet authenticators
[OUTPUT]: Authenticator/User traits and shared host data types
[POS]:    Host layer - contract every wallet plugin implements
[UPDATE]: When the host framework changes its capability set
*/

pub mod error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::{AuthenticatorError, Cause, ErrorKind, Result};

/// RPC endpoint advertised for a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoint {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

/// Chain the host wants an authenticator to operate on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    #[serde(rename = "chainId", alias = "chain_id")]
    pub chain_id: String,
    #[serde(rename = "rpcEndpoints", alias = "rpc_endpoints", default)]
    pub rpc_endpoints: Vec<RpcEndpoint>,
}

impl Chain {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            rpc_endpoints: Vec::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: RpcEndpoint) -> Self {
        self.rpc_endpoints.push(endpoint);
        self
    }
}

/// How the host renders an authenticator's login button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    pub icon: &'static str,
    pub text: &'static str,
    pub text_color: &'static str,
    pub background: &'static str,
}

/// Options the host passes along with a transaction to sign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks_behind: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_seconds: Option<u32>,
}

/// Outcome of a signed (and possibly broadcast) transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionResponse {
    pub was_broadcast: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Value>,
}

/// Session capability handed back to the host after a successful login
#[async_trait]
pub trait User: Send + Sync {
    /// Sign (and, depending on the wallet, broadcast) a transaction
    async fn sign_transaction(
        &self,
        transaction: &Value,
        config: &SignTransactionConfig,
    ) -> Result<SignTransactionResponse>;

    /// Sign an arbitrary string with the given public key
    async fn sign_arbitrary(
        &self,
        public_key: &str,
        data: &str,
        help_text: &str,
    ) -> Result<String>;

    /// Prove the user controls the session's key
    async fn verify_key_ownership(&self, challenge: &str) -> Result<bool>;

    fn account_name(&self) -> &str;

    fn chain_id(&self) -> &str;

    fn keys(&self) -> &[String];
}

/// Wallet plugin contract driven polymorphically by the host
///
/// Mutating lifecycle calls take `&mut self`; the host drives one instance
/// from one session context at a time.
#[async_trait]
pub trait Authenticator: Send + Sync {
    type User: User;

    /// Display name, also stamped on every error envelope
    fn name(&self) -> &str;

    fn chains(&self) -> &[Chain];

    /// Run any async setup; `is_loading` stays true until this completes
    async fn init(&mut self);

    /// Clear recorded errors and initialize again
    ///
    /// Resolves only after the re-run of `init` has completed.
    async fn reset(&mut self);

    fn style(&self) -> ButtonStyle;

    fn should_render(&self) -> bool;

    fn should_auto_login(&self) -> bool;

    async fn should_request_account_name(&self) -> bool;

    async fn login(&mut self, account_name: Option<&str>) -> Result<&[Self::User]>;

    async fn logout(&mut self) -> Result<()>;

    fn is_loading(&self) -> bool;

    fn is_errored(&self) -> bool;

    fn error(&self) -> Option<&AuthenticatorError>;

    fn onboarding_link(&self) -> &str;

    fn requires_get_key_confirmation(&self, account_name: Option<&str>) -> bool;

    /// Seconds a cached login may be reused client-side. Advisory only.
    fn should_invalidate_after(&self) -> u64;
}
