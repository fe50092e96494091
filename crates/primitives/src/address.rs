//! Base58check encoding keyed by a network's prefix table.

use bscd_consensus::{Base58Prefixes, Base58Type};

use crate::hash::sha256d;
use crate::script::{p2pkh_hash, p2pkh_script, p2sh_hash, p2sh_script};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    InvalidLength,
    InvalidCharacter,
    InvalidChecksum,
    UnknownPrefix,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::InvalidLength => write!(f, "invalid payload length"),
            AddressError::InvalidCharacter => write!(f, "invalid base58 character"),
            AddressError::InvalidChecksum => write!(f, "base58 checksum mismatch"),
            AddressError::UnknownPrefix => write!(f, "prefix does not belong to this network"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Prepends the prefix for `kind` and base58check-encodes the result.
pub fn encode_with_prefix(prefixes: &Base58Prefixes, kind: Base58Type, payload: &[u8]) -> String {
    let prefix = prefixes.get(kind);
    let mut data = Vec::with_capacity(prefix.len() + payload.len());
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    base58check_encode(&data)
}

/// Decodes `input` and strips the prefix for `kind`, returning the payload.
pub fn decode_with_prefix(
    prefixes: &Base58Prefixes,
    kind: Base58Type,
    input: &str,
) -> Result<Vec<u8>, AddressError> {
    let data = base58check_decode(input)?;
    let prefix = prefixes.get(kind);
    match data.strip_prefix(prefix) {
        Some(payload) => Ok(payload.to_vec()),
        None => Err(AddressError::UnknownPrefix),
    }
}

pub fn address_to_script_pubkey(
    address: &str,
    prefixes: &Base58Prefixes,
) -> Result<Vec<u8>, AddressError> {
    let data = base58check_decode(address)?;
    if let Some(hash) = data.strip_prefix(prefixes.get(Base58Type::PubkeyAddress)) {
        return Ok(p2pkh_script(hash160_payload(hash)?));
    }
    if let Some(hash) = data.strip_prefix(prefixes.get(Base58Type::ScriptAddress)) {
        return Ok(p2sh_script(hash160_payload(hash)?));
    }
    Err(AddressError::UnknownPrefix)
}

fn hash160_payload(payload: &[u8]) -> Result<&[u8; 20], AddressError> {
    payload.try_into().map_err(|_| AddressError::InvalidLength)
}

pub fn script_pubkey_to_address(script: &[u8], prefixes: &Base58Prefixes) -> Option<String> {
    if let Some(hash) = p2pkh_hash(script) {
        return Some(encode_with_prefix(prefixes, Base58Type::PubkeyAddress, &hash));
    }
    p2sh_hash(script).map(|hash| encode_with_prefix(prefixes, Base58Type::ScriptAddress, &hash))
}

pub fn secret_key_to_wif(secret: &[u8; 32], prefixes: &Base58Prefixes, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(secret.len() + usize::from(compressed));
    payload.extend_from_slice(secret);
    if compressed {
        payload.push(0x01);
    }
    encode_with_prefix(prefixes, Base58Type::SecretKey, &payload)
}

pub fn wif_to_secret_key(
    wif: &str,
    prefixes: &Base58Prefixes,
) -> Result<([u8; 32], bool), AddressError> {
    let payload = decode_with_prefix(prefixes, Base58Type::SecretKey, wif)?;
    let compressed = match payload.len() {
        32 => false,
        33 if payload[32] == 0x01 => true,
        _ => return Err(AddressError::InvalidLength),
    };
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&payload[..32]);
    Ok((secret, compressed))
}

pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    let checksum = sha256d(payload);
    data.extend_from_slice(&checksum[..4]);
    base58_encode(&data)
}

pub fn base58check_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = base58_decode(input)?;
    if bytes.len() < 4 {
        return Err(AddressError::InvalidLength);
    }
    let (payload, checksum) = bytes.split_at(bytes.len() - 4);
    if checksum != &sha256d(payload)[..4] {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(payload.to_vec())
}

fn base58_encode(data: &[u8]) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for byte in data {
        let mut carry = u32::from(*byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    let leading_zeros = data.iter().take_while(|byte| **byte == 0).count();
    let mut out = String::with_capacity(leading_zeros + digits.len());
    out.extend(std::iter::repeat('1').take(leading_zeros));
    out.extend(digits.iter().rev().map(|digit| ALPHABET[*digit as usize] as char));
    out
}

fn base58_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    if input.is_empty() {
        return Err(AddressError::InvalidLength);
    }
    // Little-endian base-256 accumulator.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for ch in input.bytes() {
        let mut carry = u32::from(base58_value(ch).ok_or(AddressError::InvalidCharacter)?);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let leading_zeros = input.bytes().take_while(|ch| *ch == b'1').count();
    let mut out = vec![0u8; leading_zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

fn base58_value(ch: u8) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|value| *value == ch)
        .map(|pos| pos as u8)
}
