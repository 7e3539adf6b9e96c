//! Logging bridge for profile-board.
//!
//! Routes `log::info!()` etc. from all crates to stderr with timestamps.
//! The level is selected by the RUST_LOG environment variable
//! (off/error/warn/info/debug/trace); unset or unrecognized values fall
//! back to info.

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    level: LevelFilter,
}

impl LogBridge {
    fn from_env() -> Self {
        let level = match std::env::var("RUST_LOG") {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "off" => LevelFilter::Off,
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "info" => LevelFilter::Info,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => LevelFilter::Info,
            },
            Err(_) => LevelFilter::Info,
        };
        Self { level }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] [{:5}] [{}] {}",
                get_timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install the bridge as the global `log` consumer.
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init_log_bridge() {
    let bridge = BRIDGE.get_or_init(LogBridge::from_env);
    let _ = log::set_logger(bridge);
    log::set_max_level(bridge.level);
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
