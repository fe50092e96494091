//! Block/transaction types, consensus serialization and address encoding.

pub mod address;
pub mod block;
pub mod encoding;
pub mod hash;
pub mod merkle;
pub mod outpoint;
pub mod script;
pub mod transaction;

pub use address::{
    address_to_script_pubkey, base58check_decode, base58check_encode, decode_with_prefix,
    encode_with_prefix, script_pubkey_to_address, secret_key_to_wif, wif_to_secret_key,
    AddressError,
};
pub use block::{Block, BlockHeader};
pub use hash::{scrypt_hash, sha256, sha256d};
pub use merkle::compute_merkle_root;
pub use outpoint::OutPoint;
pub use script::ScriptBuilder;
pub use transaction::{Transaction, TxIn, TxOut};
