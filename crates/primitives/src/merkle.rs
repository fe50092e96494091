//! Merkle root over transaction ids.

use bscd_consensus::Hash256;

use crate::hash::sha256d;

/// Pairwise SHA-256d reduction, duplicating the last entry of odd-length
/// layers. A single txid is its own root; an empty list yields the zero hash.
pub fn compute_merkle_root(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return [0u8; 32];
    }
    let mut layer = txids.to_vec();
    while layer.len() > 1 {
        if layer.len() % 2 == 1 {
            let last = layer[layer.len() - 1];
            layer.push(last);
        }
        layer = layer
            .chunks(2)
            .map(|pair| merkle_hash_pair(&pair[0], &pair[1]))
            .collect();
    }
    layer[0]
}

fn merkle_hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    sha256d(&buf)
}
