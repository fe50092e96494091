//! Built, verified parameter sets for every supported network and the
//! registry that selects the active one.

pub mod error;
pub mod genesis;
pub mod params;
pub mod registry;
pub mod seeds;

pub use error::{ChainParamsError, GenesisField};
pub use genesis::{build_genesis_block, genesis_coinbase, verify_genesis};
pub use params::NetworkParams;
pub use registry::{check_distinct, global, init_global, params, ParamsRegistry};
pub use seeds::{materialize_seeds, materialize_seeds_at, SeedAddress};
