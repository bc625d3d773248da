/*
[INPUT]:  Host chains, injected wallet bridge and runtime environment
[OUTPUT]: Host Authenticator lifecycle (init, render checks, login/logout)
[POS]:    MEET.ONE layer - adapter between the host contract and the bridge
[UPDATE]: When the host lifecycle or MEET.ONE login flow change
*/

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::bridge::{BridgeError, WalletBridge};
use crate::config::AuthenticatorConfig;
use crate::env::{self, Environment};
use crate::host::{Authenticator, AuthenticatorError, ButtonStyle, Chain, ErrorKind, Result};

use super::chains::supports_all;
use super::user::{MeetOneUser, WalletAccount};
use super::{
    BUTTON_STYLE, INVALIDATE_AFTER_SECONDS, NAME, ONBOARDING_LINK, USER_AGENT_MARKER,
    meetone_error,
};

/// Authenticator for the MEET.ONE mobile wallet
///
/// Only usable inside the wallet's embedded browser, where the bridge is
/// available and the wallet always knows the active account.
pub struct MeetOne {
    chains: Vec<Chain>,
    bridge: Arc<dyn WalletBridge>,
    environment: Arc<dyn Environment>,
    users: Vec<MeetOneUser>,
    loading: bool,
    init_error: Option<AuthenticatorError>,
}

impl std::fmt::Debug for MeetOne {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetOne")
            .field("chains", &self.chains)
            .field("users", &self.users)
            .field("loading", &self.loading)
            .field("init_error", &self.init_error)
            .finish_non_exhaustive()
    }
}

impl MeetOne {
    pub fn new(
        chains: Vec<Chain>,
        bridge: Arc<dyn WalletBridge>,
        environment: Arc<dyn Environment>,
    ) -> Self {
        Self {
            chains,
            bridge,
            environment,
            users: Vec::new(),
            loading: true,
            init_error: None,
        }
    }

    pub fn from_config(
        config: AuthenticatorConfig,
        bridge: Arc<dyn WalletBridge>,
        environment: Arc<dyn Environment>,
    ) -> Self {
        Self::new(config.chains, bridge, environment)
    }

    /// Whether the page is running inside the MEET.ONE embedded browser
    pub fn is_meetone_webview(&self) -> bool {
        env::user_agent_contains(self.environment.as_ref(), USER_AGENT_MARKER)
    }

    async fn fetch_account(&self) -> std::result::Result<WalletAccount, BridgeError> {
        let response = self.bridge.invoke_account_info().await?;
        // Only the payload matters here; a response without data is a failed login.
        let info = response.data.ok_or(BridgeError::NoResult)?;
        Ok(WalletAccount {
            name: info.account,
            address: info.public_key,
        })
    }
}

#[async_trait]
impl Authenticator for MeetOne {
    type User = MeetOneUser;

    fn name(&self) -> &str {
        NAME
    }

    fn chains(&self) -> &[Chain] {
        &self.chains
    }

    async fn init(&mut self) {
        self.loading = true;
        self.init_error = match env::probe(self.environment.as_ref()) {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "meetone environment probe failed");
                Some(meetone_error(
                    "Error occurred during autologin",
                    ErrorKind::Initialization,
                    Some(Box::new(err)),
                ))
            }
        };
        self.loading = false;
    }

    async fn reset(&mut self) {
        self.init_error = None;
        self.init().await;
    }

    fn style(&self) -> ButtonStyle {
        BUTTON_STYLE
    }

    fn should_render(&self) -> bool {
        supports_all(&self.chains) && self.is_meetone_webview()
    }

    fn should_auto_login(&self) -> bool {
        // Rendering is only allowed inside the wallet browser, where autologin always applies.
        self.should_render()
    }

    async fn should_request_account_name(&self) -> bool {
        false
    }

    async fn login(&mut self, _account_name: Option<&str>) -> Result<&[MeetOneUser]> {
        if self.users.is_empty() {
            let wallet = self.fetch_account().await.map_err(|err| {
                warn!(error = %err, "meetone account request failed");
                meetone_error(
                    "Unable to get the current account during login",
                    ErrorKind::Login,
                    Some(Box::new(err)),
                )
            })?;

            info!(account = %wallet.name, "meetone login");
            let user = MeetOneUser::new(self.chains.first(), wallet, self.bridge.clone());
            self.users.push(user);
        } else {
            debug!("meetone user already logged in");
        }

        Ok(self.users.as_slice())
    }

    /// Forget the session user
    ///
    /// The wallet's own session is untouched; the next login asks the bridge again.
    async fn logout(&mut self) -> Result<()> {
        info!(users = self.users.len(), "meetone logout");
        self.users.clear();
        Ok(())
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_errored(&self) -> bool {
        self.init_error.is_some()
    }

    fn error(&self) -> Option<&AuthenticatorError> {
        self.init_error.as_ref()
    }

    fn onboarding_link(&self) -> &str {
        ONBOARDING_LINK
    }

    fn requires_get_key_confirmation(&self, _account_name: Option<&str>) -> bool {
        false
    }

    fn should_invalidate_after(&self) -> u64 {
        INVALIDATE_AFTER_SECONDS
    }
}
