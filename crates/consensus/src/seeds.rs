//! Bootstrap peers shipped with the node.
//!
//! Fixed seed entries pack an IPv4 address into a `u32` with the first
//! dotted-quad octet in the most significant byte.

use crate::params::DnsSeed;

pub const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("0", "95.216.33.137"),
    DnsSeed::new("1", "207.180.245.239"),
    DnsSeed::new("2", "95.216.38.85"),
    DnsSeed::new("3", "188.42.33.124"),
    DnsSeed::new("4", "95.216.38.5"),
    DnsSeed::new("5", "124.59.73.108"),
    DnsSeed::new("6", "46.4.178.67"),
    DnsSeed::new("7", "95.216.125.226"),
    DnsSeed::new("8", "145.239.39.138"),
];

pub const MAINNET_FIXED_SEEDS: &[u32] = &[
    0x5fd8_2189, // 95.216.33.137
    0xcfb4_f5ef, // 207.180.245.239
    0x5fd8_2655, // 95.216.38.85
    0xbc2a_217c, // 188.42.33.124
    0x5fd8_2605, // 95.216.38.5
    0x7c3b_496c, // 124.59.73.108
    0x2e04_b243, // 46.4.178.67
    0x5fd8_7de2, // 95.216.125.226
    0x91ef_278a, // 145.239.39.138
];

// Test network peers are configured manually.
pub const TESTNET_DNS_SEEDS: &[DnsSeed] = &[];
pub const TESTNET_FIXED_SEEDS: &[u32] = &[];
