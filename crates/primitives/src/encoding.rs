//! Consensus byte encoding: little-endian integers, CompactSize lengths and
//! length-prefixed byte strings.

use bscd_consensus::Hash256;

#[derive(Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32_le(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64_le(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_varint(&mut self, value: u64) {
        match value {
            0..=0xfc => self.write_u8(value as u8),
            0xfd..=0xffff => {
                self.write_u8(0xfd);
                self.write_u16_le(value as u16);
            }
            0x1_0000..=0xffff_ffff => {
                self.write_u8(0xfe);
                self.write_u32_le(value as u32);
            }
            _ => {
                self.write_u8(0xff);
                self.write_u64_le(value);
            }
        }
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    pub fn write_hash_le(&mut self, hash: &Hash256) {
        self.buf.extend_from_slice(hash);
    }
}

pub trait Encodable {
    fn consensus_encode(&self, encoder: &mut Encoder);
}

pub fn encode<T: Encodable>(value: &T) -> Vec<u8> {
    let mut encoder = Encoder::new();
    value.consensus_encode(&mut encoder);
    encoder.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_boundaries() {
        let cases: [(u64, &[u8]); 5] = [
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0xffff, &[0xfd, 0xff, 0xff]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (
                0x1_0000_0000,
                &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (value, expected) in cases {
            let mut encoder = Encoder::new();
            encoder.write_varint(value);
            assert_eq!(encoder.into_inner(), expected);
        }
    }

    #[test]
    fn var_bytes_are_length_prefixed() {
        let mut encoder = Encoder::with_capacity(4);
        encoder.write_var_bytes(&[0xaa, 0xbb]);
        encoder.write_var_bytes(&[]);
        assert_eq!(encoder.into_inner(), vec![0x02, 0xaa, 0xbb, 0x00]);
    }
}
