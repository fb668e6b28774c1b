use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub url: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

/// Append-only activity log under `~/.larder/activity.log`. Progress meant
/// for the operator goes to stdout; this file keeps the durable trail.
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            crate::LarderError::storage_error("initialization", "could not determine home directory")
        })?;
        let larder_dir = user_dirs.home_dir().join(".larder");
        fs::create_dir_all(&larder_dir)?;

        Ok(Self {
            log_path: larder_dir.join("activity.log"),
        })
    }

    /// Log to an explicit file instead of the home directory.
    pub fn with_path(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log(
        &self,
        level: LogLevel,
        url: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            url: url.map(|u| u.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let level_str = match entry.level {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        };

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            level_str,
            entry.event,
            entry.url.as_deref().unwrap_or("*"),
            entry.details.as_deref().unwrap_or("")
        )?;

        Ok(())
    }

    pub fn info(&self, url: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Info, url, event, details)
    }

    pub fn error(&self, url: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Error, url, event, details)
    }
}
