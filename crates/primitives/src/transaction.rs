//! Timestamped transaction type and serialization.

use bscd_consensus::Hash256;

use crate::encoding::{encode, Encodable, Encoder};
use crate::hash::sha256d;
use crate::outpoint::OutPoint;

pub const SEQUENCE_FINAL: u32 = u32::MAX;

#[derive(Clone, Debug, PartialEq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    pub fn coinbase(script_sig: Vec<u8>) -> Self {
        Self {
            prevout: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        self.prevout.consensus_encode(encoder);
        encoder.write_var_bytes(&self.script_sig);
        encoder.write_u32_le(self.sequence);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    /// Output carrying no value and no script.
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        encoder.write_i64_le(self.value);
        encoder.write_var_bytes(&self.script_pubkey);
    }
}

/// A transaction carrying its own creation time after the version field.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.vin.len() == 1 && self.vin[0].prevout.is_null()
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn txid(&self) -> Hash256 {
        sha256d(&self.consensus_encode())
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        encoder.write_i32_le(self.version);
        encoder.write_u32_le(self.time);
        encoder.write_varint(self.vin.len() as u64);
        for input in &self.vin {
            input.consensus_encode(encoder);
        }
        encoder.write_varint(self.vout.len() as u64);
        for output in &self.vout {
            output.consensus_encode(encoder);
        }
        encoder.write_u32_le(self.lock_time);
    }
}
