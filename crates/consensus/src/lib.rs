//! Network identities, consensus constants and per-network parameter records.

pub mod constants;
pub mod params;
pub mod seeds;

pub use params::{
    chain_params, hash256_from_hex, hash256_to_hex, pow_limit, Base58Prefixes,
    Base58Type, ChainParams, ConsensusParams, DnsSeed, GenesisParams, Hash256, HexError, Network,
};
