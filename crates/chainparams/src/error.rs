use bscd_consensus::{hash256_to_hex, Hash256, Network};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenesisField {
    MerkleRoot,
    BlockHash,
}

impl GenesisField {
    pub fn as_str(self) -> &'static str {
        match self {
            GenesisField::MerkleRoot => "merkle root",
            GenesisField::BlockHash => "block hash",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChainParamsError {
    UnsupportedNetwork(Network),
    GenesisMismatch {
        network: Network,
        field: GenesisField,
        expected: Hash256,
        actual: Hash256,
    },
    InvalidGenesisBits {
        network: Network,
        bits: u32,
    },
    DuplicateParameter {
        field: &'static str,
        first: String,
        second: String,
    },
    AlreadyInitialized,
}

impl std::fmt::Display for ChainParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainParamsError::UnsupportedNetwork(network) => {
                write!(f, "no parameter set for network {network}")
            }
            ChainParamsError::GenesisMismatch {
                network,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{network} genesis {} mismatch: expected {}, computed {}",
                field.as_str(),
                hash256_to_hex(expected),
                hash256_to_hex(actual)
            ),
            ChainParamsError::InvalidGenesisBits { network, bits } => {
                write!(f, "{network} genesis bits {bits:#010x} are not a valid target")
            }
            ChainParamsError::DuplicateParameter {
                field,
                first,
                second,
            } => write!(f, "{field} of {first} collides with {second}"),
            ChainParamsError::AlreadyInitialized => {
                write!(f, "global parameter registry already initialized")
            }
        }
    }
}

impl std::error::Error for ChainParamsError {}
