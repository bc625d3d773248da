/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MEET.ONE authenticator crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod bridge;
pub mod config;
pub mod env;
pub mod host;
pub mod meetone;

// Re-export the host contract
pub use host::{
    Authenticator,
    AuthenticatorError,
    ButtonStyle,
    Chain,
    ErrorKind,
    Result,
    RpcEndpoint,
    SignTransactionConfig,
    SignTransactionResponse,
    User,
};

// Re-export commonly used types from bridge
pub use bridge::{
    AccountInfo,
    BridgeCall,
    BridgeError,
    BridgeResponse,
    BridgeResult,
    MockBridge,
    SignatureData,
    SignatureRequest,
    TransactionReceipt,
    WalletBridge,
};

pub use config::{AuthenticatorConfig, ConfigError};
pub use env::{Environment, InjectedExtension, ProbeError, StaticEnvironment};

pub use meetone::{MeetOne, MeetOneUser, SupportedChain, WalletAccount};
