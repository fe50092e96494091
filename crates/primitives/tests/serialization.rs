use bscd_consensus::{hash256_from_hex, hash256_to_hex};
use bscd_primitives::script::ScriptBuilder;
use bscd_primitives::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};

const TIMESTAMP: &str = "start BuySellCoin coin on Sunday 19th of August 2018 12-35-14 AM";

const COINBASE_HEX: &str = "0100000092ba725b010000000000000000000000000000000000000000000000000000000000000000ffffffff4400012a4073746172742042757953656c6c436f696e20636f696e206f6e2053756e6461792031397468206f662041756775737420323031382031322d33352d313420414dffffffff0100000000000000000000000000";

fn coinbase() -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_script_num(42)
        .push_slice(TIMESTAMP.as_bytes())
        .into_bytes();
    Transaction {
        version: 1,
        time: 1_534_245_522,
        vin: vec![TxIn::coinbase(script_sig)],
        vout: vec![TxOut::empty()],
        lock_time: 0,
    }
}

fn decode_hex(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("hex"))
        .collect()
}

#[test]
fn timestamped_coinbase_layout() {
    let bytes = coinbase().consensus_encode();
    assert_eq!(bytes.len(), 132);
    assert_eq!(bytes, decode_hex(COINBASE_HEX));
}

#[test]
fn timestamped_coinbase_txid() {
    let tx = coinbase();
    assert!(tx.is_coinbase());
    assert_eq!(
        hash256_to_hex(&tx.txid()),
        "62a0badc16b3c6bb78842344b0d241c1c81fb7ae9478331aa05eff9656480235"
    );
}

#[test]
fn transaction_fields_follow_version_and_time() {
    let bytes = coinbase().consensus_encode();
    assert_eq!(&bytes[..4], &1i32.to_le_bytes());
    assert_eq!(&bytes[4..8], &1_534_245_522u32.to_le_bytes());
    assert_eq!(bytes[8], 0x01);
    assert!(bytes[9..41].iter().all(|byte| *byte == 0));
    assert_eq!(&bytes[41..45], &[0xff; 4]);
    assert_eq!(usize::from(bytes[45]), 4 + TIMESTAMP.len());
    assert_eq!(&bytes[bytes.len() - 4..], &[0u8; 4]);
}

#[test]
fn empty_output_encodes_zero_value_and_script() {
    let mut tx = coinbase();
    let base = tx.consensus_encode();
    tx.vout.push(TxOut {
        value: 5,
        script_pubkey: vec![0x51],
    });
    let bytes = tx.consensus_encode();
    assert_eq!(bytes.len(), base.len() + 8 + 2);
    let tail = &bytes[bytes.len() - 4 - 19..bytes.len() - 4];
    assert_eq!(&tail[..9], &[0u8; 9]);
    assert_eq!(&tail[9..17], &5i64.to_le_bytes());
    assert_eq!(&tail[17..], &[0x01, 0x51]);
}

#[test]
fn block_carries_signature_after_transactions() {
    let tx = coinbase();
    let header = BlockHeader {
        version: 1,
        prev_block: [0u8; 32],
        merkle_root: tx.txid(),
        time: 1_534_245_522,
        bits: 0x1e0f_fff0,
        nonce: 150_507,
    };
    let block = Block {
        header,
        transactions: vec![tx],
        block_sig: vec![0xaa, 0xbb],
    };
    let bytes = block.consensus_encode();
    assert_eq!(bytes.len(), 80 + 1 + 132 + 3);
    assert_eq!(&bytes[bytes.len() - 3..], &[0x02, 0xaa, 0xbb]);
    assert_eq!(&bytes[..80], block.header.consensus_encode().as_slice());
    assert_eq!(bytes[80], 0x01);
    assert_eq!(block.compute_merkle_root(), block.header.merkle_root);
    assert_eq!(block.hash(), block.header.hash());
}

#[test]
fn header_fields_are_little_endian() {
    let header = BlockHeader {
        version: 1,
        prev_block: hash256_from_hex("01").expect("hash"),
        merkle_root: [0u8; 32],
        time: 0x0102_0304,
        bits: 0x1e0f_fff0,
        nonce: 7,
    };
    let bytes = header.consensus_encode();
    assert_eq!(bytes.len(), 80);
    assert_eq!(bytes[4], 0x01);
    assert!(bytes[5..68].iter().all(|byte| *byte == 0));
    assert_eq!(&bytes[68..72], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[72..76], &[0xf0, 0xff, 0x0f, 0x1e]);
    assert_eq!(&bytes[76..], &[0x07, 0x00, 0x00, 0x00]);
}

#[test]
fn null_outpoint_is_coinbase_marker() {
    let outpoint = OutPoint::null();
    assert!(outpoint.is_null());
    assert!(!OutPoint {
        hash: [0u8; 32],
        index: 0
    }
    .is_null());
}
