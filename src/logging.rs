//! Pass-through for engine log events onto the process logger.

use crate::engine::protocol::LogEvent;

pub fn emit(event: &LogEvent) {
    log::log!(level_for(&event.level), "engine: {}", event.message);
}

fn level_for(level: &str) -> log::Level {
    match level.to_ascii_uppercase().as_str() {
        "ERROR" => log::Level::Error,
        "WARN" | "WARNING" => log::Level::Warn,
        "DEBUG" => log::Level::Debug,
        "TRACE" => log::Level::Trace,
        _ => log::Level::Info,
    }
}
