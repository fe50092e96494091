use bscd_consensus::Hash256;
use primitive_types::U256;

use crate::difficulty::{compact_to_u256, CompactError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowError {
    InvalidBits(&'static str),
    Compact(CompactError),
}

impl std::fmt::Display for PowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowError::InvalidBits(message) => write!(f, "{message}"),
            PowError::Compact(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PowError {}

impl From<CompactError> for PowError {
    fn from(err: CompactError) -> Self {
        PowError::Compact(err)
    }
}

/// Decodes `bits` and checks the target is non-zero and not easier than `pow_limit`.
pub fn check_bits(bits: u32, pow_limit: &Hash256) -> Result<U256, PowError> {
    let target = compact_to_u256(bits)?;
    if target.is_zero() {
        return Err(PowError::InvalidBits("pow target is zero"));
    }
    if target > U256::from_little_endian(pow_limit) {
        return Err(PowError::InvalidBits("pow target above limit"));
    }
    Ok(target)
}
