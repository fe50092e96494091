use bscd_consensus::Hash256;
use scrypt::Params as ScryptParams;
use sha2::{Digest, Sha256};

// scrypt(N = 1024, r = 1, p = 1) with a 32-byte output.
const SCRYPT_LOG_N: u8 = 10;
const SCRYPT_R: u32 = 1;
const SCRYPT_P: u32 = 1;

pub fn sha256(data: &[u8]) -> Hash256 {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// Block-header hash: scrypt with the serialized header as both password and salt.
pub fn scrypt_hash(data: &[u8]) -> Hash256 {
    let params = ScryptParams::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32)
        .expect("static scrypt parameters");
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, &params, &mut out).expect("32-byte scrypt output");
    out
}
