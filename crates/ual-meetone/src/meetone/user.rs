/*
[INPUT]:  Logged-in wallet account and the shared wallet bridge
[OUTPUT]: Session user that signs transactions and arbitrary data through the bridge
[POS]:    MEET.ONE layer - host User implementation
[UPDATE]: When signing requests or the User contract change
*/

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::bridge::{BridgeError, SignatureRequest, WalletBridge};
use crate::host::{
    Chain, ErrorKind, Result, SignTransactionConfig, SignTransactionResponse, User,
};

use super::meetone_error;

/// Purpose label the wallet shows for arbitrary signature requests
const SIGNATURE_PURPOSE: &str = "Universal Authenticator";

/// Account reported by the wallet at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    pub name: String,
    /// Public key the wallet uses for this account
    pub address: String,
}

/// Session user backed by the MEET.ONE bridge
pub struct MeetOneUser {
    wallet: WalletAccount,
    chain_id: String,
    keys: OnceLock<Vec<String>>,
    bridge: Arc<dyn WalletBridge>,
}

impl std::fmt::Debug for MeetOneUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetOneUser")
            .field("wallet", &self.wallet)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl MeetOneUser {
    pub fn new(chain: Option<&Chain>, wallet: WalletAccount, bridge: Arc<dyn WalletBridge>) -> Self {
        let chain_id = chain.map(|chain| chain.chain_id.clone()).unwrap_or_default();
        Self {
            wallet,
            chain_id,
            keys: OnceLock::new(),
            bridge,
        }
    }

    async fn push_transaction(
        &self,
        transaction: &Value,
        config: &SignTransactionConfig,
    ) -> std::result::Result<String, BridgeError> {
        let mut payload = transaction.clone();
        let Value::Object(fields) = &mut payload else {
            return Err(BridgeError::InvalidPayload(
                "transaction must be a JSON object".to_string(),
            ));
        };
        fields.insert("options".to_string(), serde_json::to_value(config)?);

        let receipt = self.bridge.invoke_transaction(payload).await?.into_data()?;
        Ok(receipt.transaction_id)
    }

    async fn request_signature(
        &self,
        request: SignatureRequest,
    ) -> std::result::Result<String, BridgeError> {
        let data = self.bridge.invoke_signature(request).await?.into_data()?;
        Ok(data.signature)
    }
}

#[async_trait]
impl User for MeetOneUser {
    async fn sign_transaction(
        &self,
        transaction: &Value,
        config: &SignTransactionConfig,
    ) -> Result<SignTransactionResponse> {
        match self.push_transaction(transaction, config).await {
            Ok(transaction_id) => {
                debug!(account = %self.wallet.name, %transaction_id, "transaction signed");
                Ok(SignTransactionResponse {
                    was_broadcast: true,
                    transaction_id: Some(transaction_id),
                    transaction: Some(transaction.clone()),
                })
            }
            Err(err) => {
                warn!(account = %self.wallet.name, error = %err, "transaction signing failed");
                Err(meetone_error(
                    "Unable to sign the given transaction",
                    ErrorKind::Signing,
                    Some(Box::new(err)),
                ))
            }
        }
    }

    async fn sign_arbitrary(
        &self,
        public_key: &str,
        data: &str,
        _help_text: &str,
    ) -> Result<String> {
        let request = SignatureRequest {
            whatfor: SIGNATURE_PURPOSE.to_string(),
            data: data.to_string(),
            public_key: public_key.to_string(),
            is_arbitrary: true,
        };

        self.request_signature(request).await.map_err(|err| {
            warn!(account = %self.wallet.name, error = %err, "arbitrary signing failed");
            meetone_error(
                "Unable to sign arbitrary string",
                ErrorKind::Signing,
                Some(Box::new(err)),
            )
        })
    }

    async fn verify_key_ownership(&self, _challenge: &str) -> Result<bool> {
        Err(meetone_error(
            "MeetOne does not currently support verifyKeyOwnership",
            ErrorKind::Unsupported,
            None,
        ))
    }

    fn account_name(&self) -> &str {
        &self.wallet.name
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn keys(&self) -> &[String] {
        self.keys.get_or_init(|| vec![self.wallet.address.clone()])
    }
}
