//! Block header and block types.

use bscd_consensus::Hash256;

use crate::encoding::{Encodable, Encoder};
use crate::hash::{scrypt_hash, sha256d};
use crate::merkle::compute_merkle_root;
use crate::transaction::Transaction;

pub const HEADER_SIZE: usize = 80;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn consensus_encode(&self) -> Vec<u8> {
        let mut encoder = Encoder::with_capacity(HEADER_SIZE);
        Encodable::consensus_encode(self, &mut encoder);
        encoder.into_inner()
    }

    /// Block identity hash (scrypt over the 80 header bytes).
    pub fn hash(&self) -> Hash256 {
        scrypt_hash(&self.consensus_encode())
    }

    /// SHA-256d of the header bytes; not the block identity on this chain.
    pub fn sha256d(&self) -> Hash256 {
        sha256d(&self.consensus_encode())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        encoder.write_i32_le(self.version);
        encoder.write_hash_le(&self.prev_block);
        encoder.write_hash_le(&self.merkle_root);
        encoder.write_u32_le(self.time);
        encoder.write_u32_le(self.bits);
        encoder.write_u32_le(self.nonce);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    /// Staker signature; empty for proof-of-work blocks.
    pub block_sig: Vec<u8>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    pub fn txids(&self) -> Vec<Hash256> {
        self.transactions.iter().map(Transaction::txid).collect()
    }

    pub fn compute_merkle_root(&self) -> Hash256 {
        compute_merkle_root(&self.txids())
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        let mut encoder = Encoder::new();
        Encodable::consensus_encode(self, &mut encoder);
        encoder.into_inner()
    }
}

impl Encodable for Block {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        Encodable::consensus_encode(&self.header, encoder);
        encoder.write_varint(self.transactions.len() as u64);
        for tx in &self.transactions {
            Encodable::consensus_encode(tx, encoder);
        }
        encoder.write_var_bytes(&self.block_sig);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block: [0u8; 32],
            merkle_root: [0x11u8; 32],
            time: 1_534_245_522,
            bits: 0x1e0f_fff0,
            nonce: 150_507,
        }
    }

    #[test]
    fn header_is_eighty_bytes() {
        let bytes = header().consensus_encode();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[76..], &150_507u32.to_le_bytes());
    }

    #[test]
    fn header_hash_changes_with_nonce() {
        let mut other = header();
        other.nonce += 1;
        assert_ne!(header().hash(), other.hash());
    }

    #[test]
    fn block_without_transactions_has_zero_root() {
        let block = Block {
            header: header(),
            transactions: Vec::new(),
            block_sig: Vec::new(),
        };
        assert_eq!(block.compute_merkle_root(), [0u8; 32]);
        let bytes = block.consensus_encode();
        assert_eq!(bytes.len(), HEADER_SIZE + 2);
        assert_eq!(&bytes[HEADER_SIZE..], &[0x00, 0x00]);
    }
}
