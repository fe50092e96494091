//! Constants shared by every network's parameter set.

/// Right shift applied to the all-ones 256-bit value to obtain the proof-of-work limit.
pub const POW_LIMIT_SHIFT: u32 = 16;

/// Script number pushed after `OP_0` in the genesis coinbase input.
pub const GENESIS_SCRIPT_MARKER: i64 = 42;
/// Version of the genesis coinbase transaction.
pub const GENESIS_TX_VERSION: i32 = 1;
pub const GENESIS_TX_LOCK_TIME: u32 = 0;

/// Service bit advertised for full nodes.
pub const NODE_NETWORK: u64 = 1;

pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Proof-of-work never ends on the test network.
pub const TESTNET_LAST_POW_BLOCK: i32 = 0x7fff_ffff;
