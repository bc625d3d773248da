/*
[INPUT]:  Logged-in session users over scripted bridges
[OUTPUT]: Test results for transaction and arbitrary signing
[POS]:    Integration tests - session user signing
[UPDATE]: When signing requests or responses change
*/

mod common;

use std::sync::Arc;

use common::meetone_with;
use tokio_test::{assert_err, assert_ok};
use ual_meetone::{
    Authenticator, BridgeCall, BridgeError, BridgeResponse, ErrorKind, MockBridge,
    SignTransactionConfig, User,
};

fn transfer() -> serde_json::Value {
    serde_json::json!({
        "actions": [{
            "account": "eosio.token",
            "name": "transfer",
            "authorization": [{"actor": "alice", "permission": "active"}],
            "data": {
                "from": "alice",
                "to": "g.f.w",
                "quantity": "0.0001 EOS",
                "memo": "UAL works!",
            },
        }],
    })
}

fn broadcast() -> SignTransactionConfig {
    SignTransactionConfig {
        broadcast: Some(true),
        blocks_behind: Some(3),
        expire_seconds: Some(30),
    }
}

#[tokio::test]
async fn test_sign_transaction_success() {
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6abc")
            .with_transaction_id("tx123"),
    );
    let mut auth = meetone_with(bridge.clone());
    let users = assert_ok!(auth.login(None).await);
    let transaction = transfer();

    let response = assert_ok!(users[0].sign_transaction(&transaction, &broadcast()).await);

    assert!(response.was_broadcast);
    assert_eq!(response.transaction_id.as_deref(), Some("tx123"));
    assert_eq!(response.transaction, Some(transaction.clone()));
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({
            "wasBroadcast": true,
            "transactionId": "tx123",
            "transaction": transaction,
        })
    );

    let mut expected_payload = transfer();
    expected_payload["options"] =
        serde_json::json!({"broadcast": true, "blocksBehind": 3, "expireSeconds": 30});
    assert_eq!(
        bridge.calls(),
        vec![BridgeCall::AccountInfo, BridgeCall::Transaction(expected_payload)]
    );
}

#[tokio::test]
async fn test_sign_transaction_rejected_code() {
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6abc")
            .with_transaction_response(Ok(BridgeResponse::failed(500))),
    );
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let err = assert_err!(users[0].sign_transaction(&transfer(), &broadcast()).await);

    assert_eq!(err.kind(), ErrorKind::Signing);
    assert_eq!(err.message(), "Unable to sign the given transaction");
    assert_eq!(err.source_name(), "MEETONE");
    assert_eq!(err.cause_as::<BridgeError>(), Some(&BridgeError::Rejected { code: 500 }));
}

#[tokio::test]
async fn test_sign_transaction_success_without_receipt() {
    let bridge = Arc::new(MockBridge::new().with_account("alice", "EOS6abc"));
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let err = assert_err!(users[0].sign_transaction(&transfer(), &broadcast()).await);

    assert_eq!(err.kind(), ErrorKind::Signing);
    assert_eq!(err.cause_as::<BridgeError>(), Some(&BridgeError::NoResult));
}

#[tokio::test]
async fn test_sign_transaction_transport_error() {
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6abc")
            .with_transaction_response(Err(BridgeError::Transport("webview gone".to_string()))),
    );
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let err = assert_err!(users[0].sign_transaction(&transfer(), &broadcast()).await);

    assert_eq!(err.kind(), ErrorKind::Signing);
    assert!(err.cause().unwrap().to_string().contains("webview gone"));
}

#[tokio::test]
async fn test_sign_arbitrary_success() {
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6abc")
            .with_signature("SIG_K1_abc"),
    );
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let signature = assert_ok!(users[0].sign_arbitrary("EOS6abc", "nonce:42", "Sign in").await);

    assert_eq!(signature, "SIG_K1_abc");
}

#[tokio::test]
async fn test_sign_arbitrary_failure() {
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6abc")
            .with_signature_response(Ok(BridgeResponse::failed(1))),
    );
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let err = assert_err!(users[0].sign_arbitrary("EOS6abc", "nonce:42", "Sign in").await);

    assert_eq!(err.kind(), ErrorKind::Signing);
    assert_eq!(err.message(), "Unable to sign arbitrary string");
}

#[tokio::test]
async fn test_verify_key_ownership_is_unsupported() {
    let bridge = Arc::new(MockBridge::new().with_account("alice", "EOS6abc"));
    let mut auth = meetone_with(bridge.clone());
    let users = assert_ok!(auth.login(None).await);

    for challenge in ["", "challenge", "EOS6abc"] {
        let err = assert_err!(users[0].verify_key_ownership(challenge).await);
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(err.cause().is_none());
    }
    assert_eq!(bridge.call_count(), 1);
}

#[tokio::test]
async fn test_keys_are_stable() {
    let bridge = Arc::new(MockBridge::new().with_account("alice", "EOS6abc"));
    let mut auth = meetone_with(bridge);
    let users = assert_ok!(auth.login(None).await);

    let first = users[0].keys().to_vec();
    let second = users[0].keys().to_vec();

    assert_eq!(first, vec!["EOS6abc".to_string()]);
    assert_eq!(first, second);
}
