//! Difficulty and compact target utilities.

use bscd_consensus::Hash256;
use primitive_types::U256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactError {
    Negative,
    Overflow,
}

impl std::fmt::Display for CompactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompactError::Negative => write!(f, "compact target has negative sign bit"),
            CompactError::Overflow => write!(f, "compact target overflows 256-bit range"),
        }
    }
}

impl std::error::Error for CompactError {}

pub fn compact_to_u256(bits: u32) -> Result<U256, CompactError> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;
    let negative = (bits & 0x0080_0000) != 0;

    if negative && word != 0 {
        return Err(CompactError::Negative);
    }

    if word != 0 {
        let overflow = size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32);
        if overflow {
            return Err(CompactError::Overflow);
        }
    }

    let value = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    Ok(value)
}

pub fn u256_to_compact(value: U256) -> u32 {
    if value.is_zero() {
        return 0;
    }

    let mut size = value.bits().div_ceil(8) as u32;
    let mut compact = if size <= 3 {
        value.low_u32() << (8 * (3 - size))
    } else {
        (value >> (8 * (size - 3))).low_u32()
    };

    // Keep the mantissa positive by moving the sign bit into the exponent.
    if (compact & 0x0080_0000) != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & 0x007f_ffff)
}

pub fn target_to_compact(target: &Hash256) -> u32 {
    u256_to_compact(U256::from_little_endian(target))
}
