/*
[INPUT]:  Mock wallet bridge and a MEET.ONE user agent
[OUTPUT]: Logged-in session user and a signed eosio.token transfer
[POS]:    Examples - host-side login and signing flow
[UPDATE]: When the authenticator lifecycle changes
*/

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ual_meetone::*;

/// Example: drive the authenticator the way a host framework would
///
/// 1. Construct the authenticator with chains, bridge, and environment
/// 2. Initialize and check render eligibility
/// 3. Log in and sign a demo transfer
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // In the wallet's webview the bridge is provided by the runtime; here it is scripted.
    let bridge = Arc::new(
        MockBridge::new()
            .with_account("alice", "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV")
            .with_transaction_id("a5c7f5b06f53b7e0e4c2b3e5e1f1f3b5"),
    );
    let environment = Arc::new(StaticEnvironment::new(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) MEET.ONE/2.5.0",
    ));
    let chains = vec![Chain::new(SupportedChain::EosMainnet.chain_id())];

    let mut authenticator = MeetOne::new(chains, bridge, environment);
    authenticator.init().await;

    if let Some(err) = authenticator.error() {
        error!(error = %err, "authenticator failed to initialize");
        return;
    }
    if !authenticator.should_render() {
        info!("not running inside MEET.ONE; nothing to offer");
        return;
    }

    let users = match authenticator.login(None).await {
        Ok(users) => users,
        Err(err) => {
            error!(error = %err, "login failed");
            return;
        }
    };
    let user = &users[0];
    info!(account = user.account_name(), keys = ?user.keys(), "logged in");

    let transaction = serde_json::json!({
        "actions": [{
            "account": "eosio.token",
            "name": "transfer",
            "authorization": [{"actor": user.account_name(), "permission": "active"}],
            "data": {
                "from": user.account_name(),
                "to": "g.f.w",
                "quantity": "0.0001 EOS",
                "memo": "UAL works!",
            },
        }],
    });
    let config = SignTransactionConfig {
        broadcast: Some(true),
        blocks_behind: Some(3),
        expire_seconds: Some(30),
    };

    match user.sign_transaction(&transaction, &config).await {
        Ok(response) => info!(
            transaction_id = ?response.transaction_id,
            was_broadcast = response.was_broadcast,
            "transfer signed"
        ),
        Err(err) => error!(error = %err, "transfer failed"),
    }
}
