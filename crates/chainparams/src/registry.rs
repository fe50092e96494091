//! Selection of the active network parameter set.
//!
//! A [`ParamsRegistry`] owns one built [`NetworkParams`] per supported
//! network. Components should be handed the `Arc<NetworkParams>` they need;
//! the process-wide registry behind [`init_global`] exists for code that
//! cannot be threaded a value.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use bscd_consensus::{chain_params, ChainParams, Network};
use bscd_log::log_info;

use crate::error::ChainParamsError;
use crate::params::NetworkParams;

pub struct ParamsRegistry {
    // Index 0 is always the main network.
    sets: Vec<Arc<NetworkParams>>,
    selected: AtomicUsize,
}

impl ParamsRegistry {
    /// Builds every supported network's parameter set and checks that the
    /// identifiers which keep networks apart do not collide.
    pub fn new() -> Result<Self, ChainParamsError> {
        let records: Vec<ChainParams> = Network::ALL
            .iter()
            .filter_map(|network| chain_params(*network))
            .collect();
        check_distinct(&records)?;
        let sets = records
            .into_iter()
            .map(|record| NetworkParams::from_chain_params(record).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            sets,
            selected: AtomicUsize::new(0),
        })
    }

    /// The active parameter set; the main network until something else is selected.
    pub fn current(&self) -> Arc<NetworkParams> {
        Arc::clone(&self.sets[self.selected.load(Ordering::Acquire)])
    }

    /// Makes `network` the active set. Unsupported networks leave the
    /// selection unchanged.
    pub fn select(&self, network: Network) -> Result<(), ChainParamsError> {
        let index = self
            .index_of(network)
            .ok_or(ChainParamsError::UnsupportedNetwork(network))?;
        let previous = self.selected.swap(index, Ordering::AcqRel);
        if previous != index {
            log_info!("selected {network} network parameters");
        }
        Ok(())
    }

    pub fn select_from_flag(&self, testnet: bool) -> Result<(), ChainParamsError> {
        self.select(if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        })
    }

    pub fn get(&self, network: Network) -> Option<Arc<NetworkParams>> {
        self.index_of(network).map(|index| Arc::clone(&self.sets[index]))
    }

    pub fn networks(&self) -> impl Iterator<Item = Network> + '_ {
        self.sets.iter().map(|set| set.network())
    }

    fn index_of(&self, network: Network) -> Option<usize> {
        self.sets.iter().position(|set| set.network() == network)
    }
}

/// Checks message start, ports and base58 prefixes are pairwise distinct
/// across `records`, and that prefixes of different kinds differ within each
/// record.
pub fn check_distinct(records: &[ChainParams]) -> Result<(), ChainParamsError> {
    for (i, a) in records.iter().enumerate() {
        for (kind, prefix) in a.base58_prefixes.iter() {
            if let Some((other, _)) = a
                .base58_prefixes
                .iter()
                .find(|(other, other_prefix)| *other != kind && *other_prefix == prefix)
            {
                return Err(ChainParamsError::DuplicateParameter {
                    field: "base58 prefix",
                    first: format!("{} {}", a.network, kind.as_str()),
                    second: format!("{} {}", a.network, other.as_str()),
                });
            }
        }

        for b in &records[i + 1..] {
            let duplicate = |field: &'static str| ChainParamsError::DuplicateParameter {
                field,
                first: a.network.to_string(),
                second: b.network.to_string(),
            };
            if a.message_start == b.message_start {
                return Err(duplicate("message start"));
            }
            if a.default_port == b.default_port {
                return Err(duplicate("default port"));
            }
            if a.rpc_port == b.rpc_port {
                return Err(duplicate("rpc port"));
            }
            for (kind, prefix) in a.base58_prefixes.iter() {
                if b.base58_prefixes.get(kind) == prefix {
                    return Err(ChainParamsError::DuplicateParameter {
                        field: "base58 prefix",
                        first: format!("{} {}", a.network, kind.as_str()),
                        second: format!("{} {}", b.network, kind.as_str()),
                    });
                }
            }
        }
    }
    Ok(())
}

static GLOBAL: OnceLock<ParamsRegistry> = OnceLock::new();

/// Builds and installs the process-wide registry. Fails with
/// `AlreadyInitialized` on every call after the first successful one.
pub fn init_global() -> Result<&'static ParamsRegistry, ChainParamsError> {
    if GLOBAL.get().is_some() {
        return Err(ChainParamsError::AlreadyInitialized);
    }
    let registry = ParamsRegistry::new()?;
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        registry
    });
    if installed {
        Ok(global)
    } else {
        Err(ChainParamsError::AlreadyInitialized)
    }
}

pub fn global() -> Option<&'static ParamsRegistry> {
    GLOBAL.get()
}

/// Current parameter set of the process-wide registry, if installed.
pub fn params() -> Option<Arc<NetworkParams>> {
    global().map(ParamsRegistry::current)
}
