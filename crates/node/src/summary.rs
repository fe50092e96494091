//! Human and JSON renderings of the active parameter set.

use std::fmt::Write as _;

use bscd_chainparams::NetworkParams;
use bscd_consensus::{hash256_to_hex, Base58Type};
use bscd_pow::difficulty::target_to_compact;
use bscd_primitives::script_pubkey_to_address;
use bscd_primitives::script::p2pkh_script;
use serde_json::{json, Value};

fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}

/// Pay-to-pubkey-hash address of the all-zero key hash, a quick visual check
/// of the pubkey prefix.
fn zero_address(params: &NetworkParams) -> String {
    script_pubkey_to_address(&p2pkh_script(&[0u8; 20]), params.base58_prefixes())
        .unwrap_or_default()
}

pub fn render_text(params: &NetworkParams, include_seeds: bool) -> String {
    let consensus = params.consensus();
    let header = &params.genesis.header;
    let mut out = String::new();
    let _ = writeln!(out, "network: {}", params.name());
    let _ = writeln!(out, "message start: {}", hex_bytes(&params.message_start()));
    let _ = writeln!(out, "default port: {}", params.default_port());
    let _ = writeln!(out, "rpc port: {}", params.rpc_port());
    let _ = writeln!(out, "data dir: {:?}", params.data_dir());
    let _ = writeln!(out, "genesis hash: {}", hash256_to_hex(&params.genesis_hash));
    let _ = writeln!(out, "genesis merkle root: {}", hash256_to_hex(&header.merkle_root));
    let _ = writeln!(
        out,
        "genesis time: {} nonce: {} bits: {:#010x}",
        header.time, header.nonce, header.bits
    );
    let _ = writeln!(
        out,
        "pow limit: {} ({:#010x})",
        hash256_to_hex(params.pow_limit()),
        target_to_compact(params.pow_limit())
    );
    let _ = writeln!(out, "last pow block: {}", consensus.last_pow_block);
    let _ = writeln!(out, "pos start block: {}", consensus.pos_start_block);
    let _ = writeln!(out, "pool max transactions: {}", consensus.pool_max_transactions);
    for (kind, prefix) in params.base58_prefixes().iter() {
        let _ = writeln!(out, "prefix {}: {}", kind.as_str(), hex_bytes(prefix));
    }
    let _ = writeln!(out, "zero pubkey address: {}", zero_address(params));
    let _ = writeln!(out, "dns seeds: {}", params.dns_seeds().len());
    let _ = writeln!(out, "fixed seeds: {}", params.fixed_seeds.len());
    if include_seeds {
        for seed in params.dns_seeds() {
            let _ = writeln!(out, "  dns {} {}", seed.name, seed.host);
        }
        for seed in &params.fixed_seeds {
            let _ = writeln!(out, "  fixed {} last_seen={}", seed.addr, seed.last_seen);
        }
    }
    out
}

pub fn render_json(params: &NetworkParams, include_seeds: bool) -> Value {
    let consensus = params.consensus();
    let header = &params.genesis.header;
    let prefixes: serde_json::Map<String, Value> = Base58Type::ALL
        .iter()
        .map(|kind| {
            (
                kind.as_str().to_string(),
                Value::from(hex_bytes(params.base58_prefix(*kind))),
            )
        })
        .collect();
    let mut value = json!({
        "network": params.name(),
        "message_start": hex_bytes(&params.message_start()),
        "default_port": params.default_port(),
        "rpc_port": params.rpc_port(),
        "data_dir": params.data_dir(),
        "genesis": {
            "hash": hash256_to_hex(&params.genesis_hash),
            "merkle_root": hash256_to_hex(&header.merkle_root),
            "time": header.time,
            "nonce": header.nonce,
            "bits": format!("{:08x}", header.bits),
        },
        "pow_limit": hash256_to_hex(params.pow_limit()),
        "pow_limit_bits": format!("{:08x}", target_to_compact(params.pow_limit())),
        "last_pow_block": consensus.last_pow_block,
        "pos_start_block": consensus.pos_start_block,
        "pool_max_transactions": consensus.pool_max_transactions,
        "base58_prefixes": prefixes,
        "zero_pubkey_address": zero_address(params),
        "dns_seed_count": params.dns_seeds().len(),
        "fixed_seed_count": params.fixed_seeds.len(),
    });
    if include_seeds {
        value["dns_seeds"] = params
            .dns_seeds()
            .iter()
            .map(|seed| json!({ "name": seed.name, "host": seed.host }))
            .collect();
        value["fixed_seeds"] = params
            .fixed_seeds
            .iter()
            .map(|seed| {
                json!({
                    "addr": seed.addr.to_string(),
                    "services": seed.services,
                    "last_seen": seed.last_seen,
                })
            })
            .collect();
    }
    value
}
