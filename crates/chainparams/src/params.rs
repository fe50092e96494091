use bscd_consensus::{
    chain_params, Base58Prefixes, Base58Type, ChainParams, ConsensusParams, DnsSeed, Hash256,
    Network,
};
use bscd_primitives::Block;

use crate::error::ChainParamsError;
use crate::genesis::verify_genesis;
use crate::seeds::{materialize_seeds, SeedAddress};

/// Immutable parameter set of one network: the literal record plus the
/// verified genesis block and materialized seed addresses.
#[derive(Clone, Debug)]
pub struct NetworkParams {
    pub chain: ChainParams,
    pub genesis: Block,
    pub genesis_hash: Hash256,
    pub fixed_seeds: Vec<SeedAddress>,
}

impl NetworkParams {
    pub fn build(network: Network) -> Result<Self, ChainParamsError> {
        let chain = chain_params(network).ok_or(ChainParamsError::UnsupportedNetwork(network))?;
        Self::from_chain_params(chain)
    }

    pub fn from_chain_params(chain: ChainParams) -> Result<Self, ChainParamsError> {
        let (genesis, genesis_hash) =
            verify_genesis(chain.network, &chain.genesis, &chain.consensus.pow_limit)?;
        let fixed_seeds = materialize_seeds(chain.fixed_seeds, chain.default_port);
        Ok(Self {
            chain,
            genesis,
            genesis_hash,
            fixed_seeds,
        })
    }

    pub fn network(&self) -> Network {
        self.chain.network
    }

    pub fn name(&self) -> &'static str {
        self.chain.network.as_str()
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.chain.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.chain.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.chain.rpc_port
    }

    pub fn data_dir(&self) -> &'static str {
        self.chain.data_dir
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.chain.consensus
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.chain.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.chain.base58_prefixes.get(kind)
    }

    pub fn dns_seeds(&self) -> &'static [DnsSeed] {
        self.chain.dns_seeds
    }

    pub fn pow_limit(&self) -> &Hash256 {
        &self.chain.consensus.pow_limit
    }
}
