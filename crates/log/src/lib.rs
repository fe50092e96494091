//! Process-wide leveled logger writing text or JSON lines to stderr, with an
//! optional in-memory ring used by tests and diagnostics.

mod capture;
mod macros;
mod timestamp;

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::json;

pub use capture::{
    capture_snapshot, clear_captured_logs, disable_capture, enable_capture, CapturedLog,
};
pub use timestamp::Timestamp;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Level {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Text = 0,
    Json = 1,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogConfig {
    pub level: Level,
    pub format: Format,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Text,
            timestamps: true,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);
static FORMAT: AtomicU8 = AtomicU8::new(Format::Text as u8);
static TIMESTAMPS: AtomicBool = AtomicBool::new(true);
static STDERR: AtomicBool = AtomicBool::new(true);

pub fn init(config: LogConfig) {
    LEVEL.store(config.level as u8, Ordering::Relaxed);
    FORMAT.store(config.format as u8, Ordering::Relaxed);
    TIMESTAMPS.store(config.timestamps, Ordering::Relaxed);
}

pub fn config() -> LogConfig {
    LogConfig {
        level: Level::from_u8(LEVEL.load(Ordering::Relaxed)),
        format: if FORMAT.load(Ordering::Relaxed) == Format::Json as u8 {
            Format::Json
        } else {
            Format::Text
        },
        timestamps: TIMESTAMPS.load(Ordering::Relaxed),
    }
}

pub fn set_stderr_enabled(enabled: bool) {
    STDERR.store(enabled, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

/// A single formatted log event.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub target: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub args: fmt::Arguments<'a>,
}

pub fn log(
    level: Level,
    target: &'static str,
    file: &'static str,
    line: u32,
    args: fmt::Arguments<'_>,
) {
    if !enabled(level) {
        return;
    }
    let record = Record {
        level,
        target,
        file,
        line,
        args,
    };
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let config = config();

    if STDERR.load(Ordering::Relaxed) {
        let rendered = render(&record, config, now);
        let _ = writeln!(io::stderr().lock(), "{rendered}");
    }
    capture::push(&record, now);
}

/// Renders `record` as one output line without the trailing newline.
pub fn render(record: &Record<'_>, config: LogConfig, now: Duration) -> String {
    match config.format {
        Format::Text => {
            let mut out = String::new();
            if config.timestamps {
                out.push_str(&Timestamp::from_duration(now).to_string());
                out.push(' ');
            }
            out.push_str(&format!(
                "{} {}: {}",
                record.level, record.target, record.args
            ));
            out
        }
        Format::Json => json!({
            "ts_ms": timestamp::millis(now),
            "level": record.level.as_str(),
            "target": record.target,
            "file": record.file,
            "line": record.line,
            "msg": record.args.to_string(),
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level() {
        assert_eq!(Level::parse("info"), Some(Level::Info));
        assert_eq!(Level::parse(" WARN "), Some(Level::Warn));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("trace"), Some(Level::Trace));
        assert_eq!(Level::parse("verbose"), None);
    }

    #[test]
    fn parse_format() {
        assert_eq!(Format::parse("text"), Some(Format::Text));
        assert_eq!(Format::parse("JSON"), Some(Format::Json));
        assert_eq!(Format::parse("yaml"), None);
        assert_eq!(Format::Json.as_str(), "json");
    }

    #[test]
    fn level_ordering_filters_verbose_levels() {
        assert!(Level::Error < Level::Debug);
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn text_line_layout() {
        let line = render(
            &Record {
                level: Level::Info,
                target: "bscd::startup",
                file: "main.rs",
                line: 7,
                args: format_args!("network {}", "main"),
            },
            LogConfig {
                level: Level::Info,
                format: Format::Text,
                timestamps: true,
            },
            Duration::from_millis(1_534_245_522_042),
        );
        assert_eq!(
            line,
            "2018-08-14T11:18:42.042Z INFO bscd::startup: network main"
        );
    }

    #[test]
    fn json_line_fields() {
        let line = render(
            &Record {
                level: Level::Debug,
                target: "bscd_chainparams::genesis",
                file: "genesis.rs",
                line: 42,
                args: format_args!("genesis nonce {}", 150_507),
            },
            LogConfig {
                format: Format::Json,
                ..LogConfig::default()
            },
            Duration::from_millis(5),
        );
        let value: serde_json::Value = serde_json::from_str(&line).expect("json");
        assert_eq!(value["level"], "DEBUG");
        assert_eq!(value["line"], 42);
        assert_eq!(value["ts_ms"], 5);
        assert_eq!(value["msg"], "genesis nonce 150507");
    }
}
