/*
[INPUT]:  Host chains, wallet bridge, runtime environment
[OUTPUT]: MEET.ONE authenticator and its session users
[POS]:    MEET.ONE layer - wallet-specific plugin
[UPDATE]: When MEET.ONE presentation, chains, or error wording change
*/

pub mod authenticator;
pub mod chains;
pub mod user;

pub use authenticator::MeetOne;
pub use chains::SupportedChain;
pub use user::{MeetOneUser, WalletAccount};

use crate::host::{AuthenticatorError, ButtonStyle, Cause, ErrorKind};

/// Display name, also the source name on every error envelope
pub const NAME: &str = "MEETONE";

pub const ONBOARDING_LINK: &str = "https://meet.one/";

/// Seconds a cached login may be reused (one day)
pub const INVALIDATE_AFTER_SECONDS: u64 = 24 * 60 * 60;

/// Marker the wallet's embedded browser puts in its user agent
pub const USER_AGENT_MARKER: &str = "meet.one";

pub const LOGO_SVG: &str = include_str!("../../assets/meetone-logo.svg");

pub const BUTTON_STYLE: ButtonStyle = ButtonStyle {
    icon: LOGO_SVG,
    text: NAME,
    text_color: "#FFFFFF",
    background: "#4A4A4A",
};

pub(crate) fn meetone_error(
    message: &str,
    kind: ErrorKind,
    cause: Option<Cause>,
) -> AuthenticatorError {
    AuthenticatorError::new(message, kind, cause, NAME)
}
