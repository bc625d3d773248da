/*
[INPUT]:  Test scenarios (user agents, chains, scripted bridge answers)
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ual-meetone tests

use std::sync::Arc;

use ual_meetone::{Chain, MeetOne, MockBridge, StaticEnvironment, SupportedChain};

/// User agent reported by the MEET.ONE embedded browser
pub const MEETONE_USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) AppleWebKit/605.1.15 MEET.ONE/2.5.0";

/// User agent of a regular desktop browser
#[allow(dead_code)]
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_2) AppleWebKit/605.1.15 Safari/605.1.15";

pub fn eos_mainnet() -> Chain {
    Chain::new(SupportedChain::EosMainnet.chain_id())
}

/// Build an authenticator over EOS mainnet inside the wallet browser
pub fn meetone_with(bridge: Arc<MockBridge>) -> MeetOne {
    MeetOne::new(
        vec![eos_mainnet()],
        bridge,
        Arc::new(StaticEnvironment::new(MEETONE_USER_AGENT)),
    )
}
