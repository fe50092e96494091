use bscd_log::{
    capture_snapshot, clear_captured_logs, enable_capture, init, log_debug, log_info,
    set_stderr_enabled, Format, Level, LogConfig,
};

#[test]
fn capture_keeps_newest_records_at_enabled_level() {
    set_stderr_enabled(false);
    init(LogConfig {
        level: Level::Info,
        format: Format::Text,
        timestamps: false,
    });
    enable_capture(2);
    clear_captured_logs();

    log_info!("first");
    log_debug!("filtered {}", 1);
    log_info!("second");
    log_info!("third {}", 3);

    let records = capture_snapshot(10);
    let messages: Vec<&str> = records.iter().map(|record| record.msg.as_str()).collect();
    assert_eq!(messages, vec!["second", "third 3"]);
    assert!(records.iter().all(|record| record.level == Level::Info));
    assert_eq!(records[0].target, module_path!());

    assert_eq!(capture_snapshot(1).len(), 1);
    assert!(!bscd_log::config().timestamps);
}
