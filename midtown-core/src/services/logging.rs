//! Logging service - structured event logging to DuckDB
//!
//! Events are stored in `logs.duckdb` in the app directory. Only event names
//! and applet/command context are recorded: no plaintext, cipher keys,
//! player names or numbers typed by the user ever reach the log.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use duckdb::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::log_migrations::{LOG_MIGRATIONS, MIGRATIONS_TABLE};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Lower 48 bits hold the timestamp, upper 16 a per-millisecond counter
fn generate_id() -> u64 {
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((now_ms() as u64) << 16) | counter
}

/// Current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// How the app was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// One-shot subcommand
    Cli,
    /// Interactive hub menu
    Hub,
}

impl EntryPoint {
    fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Hub => "hub",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            applet: None,
            command: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the applet context (rps, table, cipher)
    pub fn with_applet(mut self, applet: impl Into<String>) -> Self {
        self.applet = Some(applet.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Record a failure; `kind` is a fixed category such as `validation`
    pub fn with_error(mut self, kind: impl Into<String>) -> Self {
        self.error_message = Some(kind.into());
        self
    }

    /// Extra failure context. Must never carry text the user typed.
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A log entry as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    pub applet: Option<String>,
    pub command: Option<String>,
    pub error_message: Option<String>,
    pub error_details: Option<String>,
}

impl LogEntry {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            entry_point: row.get(2)?,
            app_version: row.get(3)?,
            platform: row.get(4)?,
            event: row.get(5)?,
            applet: row.get(6)?,
            command: row.get(7)?,
            error_message: row.get(8)?,
            error_details: row.get(9)?,
        })
    }
}

/// Which entries `LoggingService::query` returns, newest first
#[derive(Debug, Clone)]
pub struct LogFilter {
    pub applet: Option<String>,
    pub errors_only: bool,
    pub limit: usize,
}

impl LogFilter {
    pub fn recent(limit: usize) -> Self {
        Self {
            applet: None,
            errors_only: false,
            limit,
        }
    }

    /// Only entries for one applet (`rps`, `table` or `cipher`)
    pub fn for_applet(mut self, applet: impl Into<String>) -> Self {
        self.applet = Some(applet.into());
        self
    }

    pub fn only_errors(mut self) -> Self {
        self.errors_only = true;
        self
    }
}

/// Event and failure counts for one applet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppletActivity {
    pub applet: String,
    pub events: u64,
    pub errors: u64,
}

/// Service for structured event logging
pub struct LoggingService {
    conn: Mutex<Connection>,
    db_path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Open or create logs.duckdb in the app directory and apply pending
    /// migrations
    pub fn new(
        app_dir: &Path,
        entry_point: EntryPoint,
        app_version: impl Into<String>,
    ) -> Result<Self> {
        let db_path = app_dir.join("logs.duckdb");
        let conn = Connection::open(&db_path)?;

        let service = Self {
            conn: Mutex::new(conn),
            db_path,
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        };
        service.migrate()?;

        Ok(service)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))
    }

    fn migrate(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(MIGRATIONS_TABLE)?;

        let mut stmt = conn.prepare("SELECT migration_name FROM sys_migrations")?;
        let applied: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<duckdb::Result<_>>()?;

        for (name, sql) in LOG_MIGRATIONS {
            if applied.iter().any(|a| a == name) {
                continue;
            }
            conn.execute_batch(sql)?;
            conn.execute("INSERT INTO sys_migrations (migration_name) VALUES (?)", [name])?;
        }
        Ok(())
    }

    /// Record an event, stamped with entry point, version and platform
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO sys_logs (
                id, timestamp, entry_point, app_version, platform,
                event, applet, command, error_message, error_details
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            duckdb::params![
                generate_id(),
                now_ms(),
                self.entry_point.as_str(),
                &self.app_version,
                self.platform,
                &event.event,
                &event.applet,
                &event.command,
                &event.error_message,
                &event.error_details,
            ],
        )?;
        Ok(())
    }

    pub fn query(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, timestamp, entry_point, app_version, platform,
                   event, applet, command, error_message, error_details
            FROM sys_logs
            WHERE (CAST(? AS VARCHAR) IS NULL OR applet = CAST(? AS VARCHAR))
              AND (NOT CAST(? AS BOOLEAN) OR error_message IS NOT NULL)
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )?;
        let entries = stmt
            .query_map(
                duckdb::params![
                    &filter.applet,
                    &filter.applet,
                    filter.errors_only,
                    filter.limit as i64,
                ],
                LogEntry::from_row,
            )?
            .collect::<duckdb::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Total entries and how many of them record a failure
    pub fn totals(&self) -> Result<(u64, u64)> {
        let conn = self.conn()?;
        let totals = conn.query_row(
            "SELECT COUNT(*), COUNT(error_message) FROM sys_logs",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(totals)
    }

    /// Per-applet activity, in applet order
    pub fn applet_activity(&self) -> Result<Vec<AppletActivity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT applet, COUNT(*), COUNT(error_message)
            FROM sys_logs
            WHERE applet IS NOT NULL
            GROUP BY applet
            ORDER BY applet
            "#,
        )?;
        let activity = stmt
            .query_map([], |row| {
                Ok(AppletActivity {
                    applet: row.get(0)?,
                    events: row.get(1)?,
                    errors: row.get(2)?,
                })
            })?
            .collect::<duckdb::Result<Vec<_>>>()?;
        Ok(activity)
    }

    /// Delete logs older than the given unix timestamp in milliseconds
    pub fn delete_before(&self, timestamp_ms: i64) -> Result<u64> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM sys_logs WHERE timestamp < ?", [timestamp_ms])?;
        Ok(deleted as u64)
    }

    /// Copy the logs database to `output_path`
    pub fn export(&self, output_path: &Path) -> Result<PathBuf> {
        let conn = self.conn()?;
        conn.execute_batch("CHECKPOINT")?;
        std::fs::copy(&self.db_path, output_path)?;
        Ok(output_path.to_path_buf())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
