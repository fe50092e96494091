//! Reference to a previous transaction output.

use bscd_consensus::Hash256;

use crate::encoding::{Encodable, Encoder};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OutPoint {
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    /// The placeholder spent by coinbase inputs.
    pub fn null() -> Self {
        Self {
            hash: [0u8; 32],
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX && self.hash == [0u8; 32]
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        encoder.write_hash_le(&self.hash);
        encoder.write_u32_le(self.index);
    }
}
