//! Per-network parameter records.
//!
//! Every value here must match across all nodes of a network. The records are
//! plain literals; building the genesis block and materializing seed addresses
//! happens in `bscd-chainparams`.

use primitive_types::U256;

use crate::constants::{POW_LIMIT_SHIFT, TESTNET_LAST_POW_BLOCK};
use crate::seeds::{
    MAINNET_DNS_SEEDS, MAINNET_FIXED_SEEDS, TESTNET_DNS_SEEDS, TESTNET_FIXED_SEEDS,
};

/// 256-bit hash stored in internal (little-endian) byte order.
pub type Hash256 = [u8; 32];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Some(Network::Mainnet),
            "test" | "testnet" => Some(Network::Testnet),
            "regtest" => Some(Network::Regtest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of base58check payloads distinguished by their leading prefix bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Base58Type::PubkeyAddress => "pubkey_address",
            Base58Type::ScriptAddress => "script_address",
            Base58Type::SecretKey => "secret_key",
            Base58Type::StealthAddress => "stealth_address",
            Base58Type::ExtPublicKey => "ext_public_key",
            Base58Type::ExtSecretKey => "ext_secret_key",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Base58Prefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub stealth_address: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::StealthAddress => self.stealth_address,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &'static [u8])> + '_ {
        Base58Type::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

const MAINNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[26],
    script_address: &[85],
    secret_key: &[154],
    stealth_address: &[50],
    ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
};

const TESTNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[127],
    script_address: &[196],
    secret_key: &[239],
    stealth_address: &[40],
    ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// Literal inputs of the genesis block plus the identity it must hash to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenesisParams {
    pub timestamp: &'static str,
    /// Time field of the coinbase transaction. Test networks reuse the main
    /// network's transaction, so this can differ from `time`.
    pub coinbase_time: u32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub version: i32,
    pub merkle_root: Hash256,
    pub hash: Hash256,
}

/// Tunables consumed by validation code outside this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConsensusParams {
    pub network: Network,
    pub pow_limit: Hash256,
    pub last_pow_block: i32,
    pub pos_start_block: i32,
    pub pool_max_transactions: u32,
    pub pool_dummy_address: &'static str,
}

#[derive(Clone, Debug)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub genesis: GenesisParams,
    pub message_start: [u8; 4],
    pub alert_pubkey: &'static [u8],
    pub default_port: u16,
    pub rpc_port: u16,
    pub data_dir: &'static str,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [u32],
}

/// Returns the literal record for `network`, or `None` when no parameter set
/// is defined for it.
pub fn chain_params(network: Network) -> Option<ChainParams> {
    match network {
        Network::Mainnet => Some(mainnet_chain_params()),
        Network::Testnet => Some(testnet_chain_params()),
        Network::Regtest => None,
    }
}

/// Easiest target permitted on any network: `!0 >> 16`.
pub fn pow_limit() -> Hash256 {
    (U256::MAX >> POW_LIMIT_SHIFT).to_little_endian()
}

/// Uncompressed secp256k1 key that signs network alerts.
const ALERT_PUBKEY: [u8; 65] = [
    0x04, 0x44, 0x5d, 0xaa, 0xe4, 0x49, 0x24, 0xc1, 0xee, 0x1e, 0x71, 0x56,
    0x29, 0xc3, 0x25, 0x4c, 0x92, 0xc0, 0xc0, 0x6a, 0x77, 0x71, 0x6d, 0xbb,
    0xd8, 0x55, 0x10, 0x36, 0x55, 0x1f, 0x4f, 0x23, 0xb4, 0xd5, 0xbf, 0xf6,
    0x03, 0xf0, 0x64, 0xac, 0x55, 0x16, 0x52, 0x9d, 0x25, 0xe4, 0xc5, 0x82,
    0xe6, 0x5c, 0x48, 0x4e, 0x15, 0x95, 0x03, 0x36, 0x5f, 0xb6, 0x94, 0xad,
    0xd9, 0xf4, 0xcd, 0x23, 0x34,
];

fn mainnet_chain_params() -> ChainParams {
    ChainParams {
        network: Network::Mainnet,
        consensus: ConsensusParams {
            network: Network::Mainnet,
            pow_limit: pow_limit(),
            last_pow_block: 10_000_000,
            pos_start_block: 5_000,
            pool_max_transactions: 3,
            pool_dummy_address: "hFoQDUrp63QWqFhjEr3Fmc4ubHRhyzjKUC",
        },
        genesis: GenesisParams {
            timestamp: "start BuySellCoin coin on Sunday 19th of August 2018 12-35-14 AM",
            coinbase_time: 1_534_245_522,
            time: 1_534_245_522,
            bits: 0x1e0f_fff0,
            nonce: 150_507,
            version: 1,
            merkle_root: hash256_from_hex(
                "62a0badc16b3c6bb78842344b0d241c1c81fb7ae9478331aa05eff9656480235",
            )
            .expect("mainnet genesis merkle root"),
            hash: hash256_from_hex(
                "7c85ab0d795a48bf8bd3ab82904decdbb94ae641198fd812d9a3325199303831",
            )
            .expect("mainnet genesis hash"),
        },
        message_start: [0xbe, 0x2a, 0x53, 0x6b],
        alert_pubkey: &ALERT_PUBKEY,
        default_port: 42_515,
        rpc_port: 42_516,
        data_dir: "",
        base58_prefixes: MAINNET_BASE58_PREFIXES,
        dns_seeds: MAINNET_DNS_SEEDS,
        fixed_seeds: MAINNET_FIXED_SEEDS,
    }
}

fn testnet_chain_params() -> ChainParams {
    let main = mainnet_chain_params();
    ChainParams {
        network: Network::Testnet,
        consensus: ConsensusParams {
            network: Network::Testnet,
            last_pow_block: TESTNET_LAST_POW_BLOCK,
            ..main.consensus
        },
        // Same coinbase transaction, later header time.
        genesis: GenesisParams {
            time: 1_534_245_523,
            nonce: 216_893,
            hash: hash256_from_hex(
                "43abf28608e00e5fa810cdff37c96d48b4c69029454456bba1058c6798519180",
            )
            .expect("testnet genesis hash"),
            ..main.genesis
        },
        message_start: [0x1d, 0x7e, 0xa6, 0x2c],
        default_port: 31_318,
        rpc_port: 31_319,
        data_dir: "testnet",
        base58_prefixes: TESTNET_BASE58_PREFIXES,
        dns_seeds: TESTNET_DNS_SEEDS,
        fixed_seeds: TESTNET_FIXED_SEEDS,
        ..main
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::InvalidLength => write!(f, "invalid hex length"),
            HexError::InvalidHex => write!(f, "invalid hex character"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parses a display-order (big-endian) hex string, optionally `0x`-prefixed
/// and shorter than 64 digits, into internal byte order.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, HexError> {
    let hex = input.trim();
    let hex = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if hex.is_empty() || hex.len() > 64 {
        return Err(HexError::InvalidLength);
    }

    let mut out = [0u8; 32];
    // Walk from the least significant digit so short inputs are zero-extended.
    for (index, digit) in hex.bytes().rev().enumerate() {
        let nibble = hex_value(digit).ok_or(HexError::InvalidHex)?;
        out[index / 2] |= if index % 2 == 0 { nibble } else { nibble << 4 };
    }
    Ok(out)
}

pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut out = String::with_capacity(64);
    for byte in hash.iter().rev() {
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte & 0x0f));
    }
    out
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn hex_digit(value: u8) -> char {
    match value {
        0..=9 => (b'0' + value) as char,
        _ => (b'a' + (value - 10)) as char,
    }
}
