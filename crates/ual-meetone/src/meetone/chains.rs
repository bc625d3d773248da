/*
[INPUT]:  Chain identifiers configured by the host
[OUTPUT]: Supported-chain lookups
[POS]:    MEET.ONE layer - static set of chains the wallet can sign for
[UPDATE]: When the wallet adds chain support
*/

use crate::host::Chain;

/// Chains MEET.ONE can sign for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedChain {
    EosMainnet,
}

impl SupportedChain {
    // MEET.ONE only supports EOS mainnet for now.
    pub const ALL: [SupportedChain; 1] = [SupportedChain::EosMainnet];

    pub fn chain_id(self) -> &'static str {
        match self {
            SupportedChain::EosMainnet => {
                "aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906"
            }
        }
    }

    pub fn from_chain_id(chain_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.chain_id() == chain_id)
    }
}

/// True when `chains` is non-empty and every entry is supported
pub fn supports_all(chains: &[Chain]) -> bool {
    !chains.is_empty()
        && chains
            .iter()
            .all(|chain| SupportedChain::from_chain_id(&chain.chain_id).is_some())
}
