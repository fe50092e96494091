use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use crate::{timestamp, Level, Record};

#[derive(Clone, Debug)]
pub struct CapturedLog {
    pub ts_ms: u64,
    pub level: Level,
    pub target: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub msg: String,
}

static ENABLED: AtomicBool = AtomicBool::new(false);
static CAPACITY: AtomicUsize = AtomicUsize::new(0);
static RING: OnceLock<Mutex<VecDeque<CapturedLog>>> = OnceLock::new();

/// Starts retaining the newest `capacity` records; zero disables capture.
pub fn enable_capture(capacity: usize) {
    if capacity == 0 {
        disable_capture();
        return;
    }
    CAPACITY.store(capacity, Ordering::Relaxed);
    RING.get_or_init(|| Mutex::new(VecDeque::with_capacity(capacity.min(1024))));
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn disable_capture() {
    ENABLED.store(false, Ordering::Relaxed);
}

pub fn clear_captured_logs() {
    if let Some(Ok(mut ring)) = RING.get().map(Mutex::lock) {
        ring.clear();
    }
}

/// Returns up to `limit` of the most recent captured records, oldest first.
pub fn capture_snapshot(limit: usize) -> Vec<CapturedLog> {
    let Some(Ok(ring)) = RING.get().map(Mutex::lock) else {
        return Vec::new();
    };
    let start = ring.len().saturating_sub(limit);
    ring.iter().skip(start).cloned().collect()
}

pub(crate) fn push(record: &Record<'_>, now: Duration) {
    if !ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let Some(Ok(mut ring)) = RING.get().map(Mutex::lock) else {
        return;
    };
    let capacity = CAPACITY.load(Ordering::Relaxed);
    ring.push_back(CapturedLog {
        ts_ms: timestamp::millis(now),
        level: record.level,
        target: record.target,
        file: record.file,
        line: record.line,
        msg: record.args.to_string(),
    });
    while ring.len() > capacity {
        ring.pop_front();
    }
}
