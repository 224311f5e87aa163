use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

use crate::constants::APP_NAME;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Directory holding the daily log files.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
        .join("logs")
}

pub fn init_logging() -> std::io::Result<PathBuf> {
    init_logging_in(log_dir())
}

pub fn init_logging_in(log_dir: PathBuf) -> std::io::Result<PathBuf> {
    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("{}-{}.log", APP_NAME, Local::now().format("%Y%m%d")));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_debug(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let path = match LOG_FILE.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };

    // Output stays off the terminal; command output owns stdout/stderr.
    if let Some(log_file) = path {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
