use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "VIGENERE_LOG";

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

fn logging_level() -> LevelFilter {
    // Marker files next to the executable win over the environment
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    std::env::var(LOG_ENV)
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(LevelFilter::Warn)
}

/// Route `log` records to stderr. Stdout carries only the plaintext.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().map_or(0, |l| l);

            match level_filter {
                LevelFilter::Debug | LevelFilter::Trace => {
                    out.finish(format_args!(
                        "[{}][{}]: {} <{}:{}>",
                        Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                        record.level(),
                        message,
                        file,
                        line,
                    ));
                }
                LevelFilter::Off
                | LevelFilter::Error
                | LevelFilter::Warn
                | LevelFilter::Info => {
                    out.finish(format_args!("[{}]: {}", record.level(), message));
                }
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
