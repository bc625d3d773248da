/*
[INPUT]:  Scripted bridge responses
[OUTPUT]: WalletBridge implementation that records every call
[POS]:    Bridge layer - test double for the wallet bridge
[UPDATE]: When WalletBridge gains operations
*/

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{
    AccountInfo, BridgeResponse, BridgeResult, SignatureData, SignatureRequest,
    TransactionReceipt, WalletBridge,
};

/// A request received by [`MockBridge`]
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    AccountInfo,
    Transaction(Value),
    Signature(SignatureRequest),
}

/// Mock wallet bridge for testing
///
/// Every operation answers with an empty success response unless scripted.
#[derive(Debug)]
pub struct MockBridge {
    account_info: BridgeResult<AccountInfo>,
    transaction: BridgeResult<TransactionReceipt>,
    signature: BridgeResult<SignatureData>,
    calls: Mutex<Vec<BridgeCall>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            account_info: Ok(BridgeResponse::empty()),
            transaction: Ok(BridgeResponse::empty()),
            signature: Ok(BridgeResponse::empty()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Report `account` / `public_key` as the active wallet account
    pub fn with_account(self, account: &str, public_key: &str) -> Self {
        self.with_account_response(Ok(BridgeResponse::ok(AccountInfo {
            account: account.to_string(),
            public_key: public_key.to_string(),
        })))
    }

    pub fn with_account_response(mut self, response: BridgeResult<AccountInfo>) -> Self {
        self.account_info = response;
        self
    }

    /// Accept every transaction and report `transaction_id`
    pub fn with_transaction_id(self, transaction_id: &str) -> Self {
        self.with_transaction_response(Ok(BridgeResponse::ok(TransactionReceipt {
            transaction_id: transaction_id.to_string(),
        })))
    }

    pub fn with_transaction_response(mut self, response: BridgeResult<TransactionReceipt>) -> Self {
        self.transaction = response;
        self
    }

    /// Answer every signature request with `signature`
    pub fn with_signature(self, signature: &str) -> Self {
        self.with_signature_response(Ok(BridgeResponse::ok(SignatureData {
            signature: signature.to_string(),
        })))
    }

    pub fn with_signature_response(mut self, response: BridgeResult<SignatureData>) -> Self {
        self.signature = response;
        self
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn record(&self, call: BridgeCall) {
        debug!(?call, "mock bridge call");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletBridge for MockBridge {
    async fn invoke_account_info(&self) -> BridgeResult<AccountInfo> {
        self.record(BridgeCall::AccountInfo);
        self.account_info.clone()
    }

    async fn invoke_transaction(&self, payload: Value) -> BridgeResult<TransactionReceipt> {
        self.record(BridgeCall::Transaction(payload));
        self.transaction.clone()
    }

    async fn invoke_signature(&self, request: SignatureRequest) -> BridgeResult<SignatureData> {
        self.record(BridgeCall::Signature(request));
        self.signature.clone()
    }
}
