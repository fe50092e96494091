use bscd_chainparams::NetworkParams;
use bscd_consensus::{hash256_to_hex, Network};
use bscd_log::{
    capture_snapshot, clear_captured_logs, enable_capture, init, set_stderr_enabled, Format,
    Level, LogConfig,
};

#[test]
fn building_mainnet_logs_genesis_details() {
    set_stderr_enabled(false);
    init(LogConfig {
        level: Level::Debug,
        format: Format::Text,
        timestamps: false,
    });
    enable_capture(64);
    clear_captured_logs();

    let params = NetworkParams::build(Network::Mainnet).expect("mainnet");

    let records = capture_snapshot(64);
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|record| record.level == Level::Debug && record.target == "bscd_chainparams::genesis"));
    let messages: Vec<&str> = records.iter().map(|record| record.msg.as_str()).collect();
    let hash = format!("main genesis hash {}", hash256_to_hex(&params.genesis_hash));
    let merkle = format!(
        "main genesis merkle root {}",
        hash256_to_hex(&params.genesis.header.merkle_root)
    );
    assert!(messages.contains(&hash.as_str()), "{messages:?}");
    assert!(messages.contains(&merkle.as_str()), "{messages:?}");
    assert!(messages.contains(&"main genesis time 1534245522 nonce 150507 bits 0x1e0ffff0"));
}
