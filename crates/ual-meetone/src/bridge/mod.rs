/*
[INPUT]:  Requests from the adapter and session user
[OUTPUT]: Wallet bridge responses (account info, transaction receipts, signatures)
[POS]:    Bridge layer - abstraction over the wallet's in-webview bridge object
[UPDATE]: When the wallet bridge adds operations or changes response shapes
*/

pub mod error;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::BridgeError;
pub use mock::{BridgeCall, MockBridge};

/// Outcome of a single bridge request
pub type BridgeResult<T> = Result<BridgeResponse<T>, BridgeError>;

/// Status code the bridge uses for a successful request
pub const SUCCESS_CODE: i64 = 0;

/// Response envelope returned by every bridge request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse<T> {
    pub code: i64,
    pub data: Option<T>,
}

impl<T> BridgeResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
        }
    }

    /// A response carrying neither an error nor data
    pub fn empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            data: None,
        }
    }

    pub fn failed(code: i64) -> Self {
        Self { code, data: None }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload of a successful response
    ///
    /// A non-zero code becomes `Rejected`; success without data becomes `NoResult`.
    pub fn into_data(self) -> Result<T, BridgeError> {
        if !self.is_success() {
            return Err(BridgeError::Rejected { code: self.code });
        }
        self.data.ok_or(BridgeError::NoResult)
    }
}

/// Active account reported by the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Result of a transaction the wallet signed and pushed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    pub signature: String,
}

/// Signature request forwarded to the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRequest {
    /// Purpose label shown by the wallet
    pub whatfor: String,
    pub data: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(rename = "isArbitrary")]
    pub is_arbitrary: bool,
}

/// Request/response API exposed by the wallet's embedded runtime
///
/// Each call is awaited to completion; implementations should not retry.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    async fn invoke_account_info(&self) -> BridgeResult<AccountInfo>;

    /// Sign and push a transaction; `payload` is the transaction plus an `options` key
    async fn invoke_transaction(&self, payload: Value) -> BridgeResult<TransactionReceipt>;

    async fn invoke_signature(&self, request: SignatureRequest) -> BridgeResult<SignatureData>;
}
