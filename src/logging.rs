//! Logging configuration for Album Planner
//!
//! Logs are written to both the terminal and a file at:
//! - macOS: `~/Library/Logs/Album-Planner/album-planner.log`
//! - elsewhere: `<local data dir>/Album-Planner/logs/album-planner.log`
//!
//! Users can find this log file to send for debugging purposes.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "album-planner.log";

/// Log files above this size are moved aside on startup
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Get the log directory path
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join("Album-Planner"))
    } else {
        dirs::data_local_dir().map(|d| d.join("Album-Planner").join("logs"))
    }
}

/// Get the current log file path
pub fn get_log_file_path() -> Option<PathBuf> {
    get_log_directory().map(|d| d.join(LOG_FILE_NAME))
}

/// Initialize the logging system
///
/// Terminal output at info level, file output at debug level. Falls back
/// to terminal-only logging if the log file cannot be opened.
///
/// Returns the path to the log file on success
pub fn init_logging() -> Option<PathBuf> {
    let Some(log_dir) = get_log_directory() else {
        eprintln!("Warning: Could not determine log directory");
        init_terminal_only();
        return None;
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only();
        return None;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);
    rotate_if_large(&log_path, MAX_LOG_SIZE);

    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_terminal_only();
            return None;
        }
    };

    let config = log_config();
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(LevelFilter::Info, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    log::info!("=== Album Planner session started ===");
    log::info!("Log file: {}", log_path.display());

    Some(log_path)
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initialize terminal-only logging (fallback if file logging fails)
fn init_terminal_only() {
    let term_logger = TermLogger::new(
        LevelFilter::Info,
        log_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let _ = CombinedLogger::init(vec![term_logger]);
}

/// Move `log_path` to `<name>.old` if it has grown past `max_size`
///
/// Returns true if the file was rotated.
fn rotate_if_large(log_path: &Path, max_size: u64) -> bool {
    let Ok(metadata) = fs::metadata(log_path) else {
        return false;
    };
    if metadata.len() <= max_size {
        return false;
    }
    let mut backup = log_path.as_os_str().to_owned();
    backup.push(".old");
    fs::rename(log_path, PathBuf::from(backup)).is_ok()
}
