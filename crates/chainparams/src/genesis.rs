//! Genesis block construction and verification.

use bscd_consensus::constants::{GENESIS_SCRIPT_MARKER, GENESIS_TX_LOCK_TIME, GENESIS_TX_VERSION};
use bscd_consensus::{hash256_to_hex, GenesisParams, Hash256, Network};
use bscd_log::log_debug;
use bscd_pow::validation::check_bits;
use bscd_primitives::{
    compute_merkle_root, Block, BlockHeader, ScriptBuilder, Transaction, TxIn, TxOut,
};

use crate::error::{ChainParamsError, GenesisField};

/// Coinbase carrying the timestamp message in place of a prevout; its only
/// output is empty.
pub fn genesis_coinbase(genesis: &GenesisParams) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_script_num(GENESIS_SCRIPT_MARKER)
        .push_slice(genesis.timestamp.as_bytes())
        .into_bytes();
    Transaction {
        version: GENESIS_TX_VERSION,
        time: genesis.coinbase_time,
        vin: vec![TxIn::coinbase(script_sig)],
        vout: vec![TxOut::empty()],
        lock_time: GENESIS_TX_LOCK_TIME,
    }
}

/// Assembles the genesis block without checking it against the expected hashes.
pub fn build_genesis_block(genesis: &GenesisParams) -> Block {
    let transactions = vec![genesis_coinbase(genesis)];
    let txids: Vec<Hash256> = transactions.iter().map(Transaction::txid).collect();
    let header = BlockHeader {
        version: genesis.version,
        prev_block: [0u8; 32],
        merkle_root: compute_merkle_root(&txids),
        time: genesis.time,
        bits: genesis.bits,
        nonce: genesis.nonce,
    };
    Block {
        header,
        transactions,
        block_sig: Vec::new(),
    }
}

/// Builds the genesis block and checks its Merkle root, hash and difficulty
/// bits. Returns the block together with its hash.
pub fn verify_genesis(
    network: Network,
    genesis: &GenesisParams,
    pow_limit: &Hash256,
) -> Result<(Block, Hash256), ChainParamsError> {
    let block = build_genesis_block(genesis);

    if block.header.merkle_root != genesis.merkle_root {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: GenesisField::MerkleRoot,
            expected: genesis.merkle_root,
            actual: block.header.merkle_root,
        });
    }

    let hash = block.hash();
    if hash != genesis.hash {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: GenesisField::BlockHash,
            expected: genesis.hash,
            actual: hash,
        });
    }

    if check_bits(genesis.bits, pow_limit).is_err() {
        return Err(ChainParamsError::InvalidGenesisBits {
            network,
            bits: genesis.bits,
        });
    }

    log_debug!("{network} genesis hash {}", hash256_to_hex(&hash));
    log_debug!(
        "{network} genesis merkle root {}",
        hash256_to_hex(&block.header.merkle_root)
    );
    log_debug!(
        "{network} genesis time {} nonce {} bits {:#010x}",
        block.header.time,
        block.header.nonce,
        block.header.bits
    );

    Ok((block, hash))
}
