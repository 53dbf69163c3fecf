//! CLI command implementations

pub mod cipher;
pub mod hub;
pub mod logs;
pub mod rps;
pub mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use midtown_core::{EntryPoint, LogEvent, LoggingService, MidtownContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    let app_dir = get_app_dir().ok()?;
    std::fs::create_dir_all(&app_dir).ok()?;
    LoggingService::new(&app_dir, entry_point, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the app directory from MIDTOWN_DIR or default to ~/.midtown
pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MIDTOWN_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".midtown"))
        .context("Could not find home directory; set MIDTOWN_DIR")
}

/// Get or create the MidTown context
pub fn get_context() -> Result<MidtownContext> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create app directory: {:?}", app_dir))?;
    MidtownContext::new(&app_dir).context("Failed to initialize MidTown context")
}

/// Name to use when none was given on the command line
pub fn fallback_name(configured: Option<&str>, default: &str) -> String {
    configured
        .map(str::to_string)
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("USERNAME").ok())
        .unwrap_or_else(|| default.to_string())
}

/// Error category for the log, without any of the user's input
fn error_kind(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<midtown_core::Error>() {
        Some(midtown_core::Error::InvalidChoice(_)) => "invalid_choice",
        Some(midtown_core::Error::InvalidRange(_)) => "invalid_range",
        Some(midtown_core::Error::Overflow(_)) => "overflow",
        Some(midtown_core::Error::Validation(_)) => "validation",
        Some(_) => "core_error",
        None => "other",
    }
}

/// Labels of the fields a form rejected, e.g. "Username empty"
///
/// Only validation errors have details; their labels never echo input.
pub fn error_details(e: &anyhow::Error) -> Option<String> {
    match e.downcast_ref::<midtown_core::Error>() {
        Some(midtown_core::Error::Validation(fields)) => Some(fields.clone()),
        _ => None,
    }
}

/// Failure event with its kind and, for validation errors, the field labels
pub fn failure_event(event: &str, e: &anyhow::Error) -> LogEvent {
    let failure = LogEvent::new(event).with_error(error_kind(e));
    match error_details(e) {
        Some(details) => failure.with_error_details(details),
        None => failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midtown_core::services::TableService;

    #[test]
    fn test_failure_event_keeps_field_labels_only() {
        let e = anyhow::Error::from(TableService::parse_base("seven").unwrap_err());
        let event = failure_event("applet_failed", &e);
        assert_eq!(event.error_message.as_deref(), Some("validation"));
        assert_eq!(event.error_details.as_deref(), Some("Multiplier not an integer"));
        assert!(!format!("{:?}", event).contains("seven"));
    }

    #[test]
    fn test_failure_event_without_details() {
        let e = anyhow::anyhow!("disk full");
        let event = failure_event("command_failed", &e);
        assert_eq!(event.error_message.as_deref(), Some("other"));
        assert!(event.error_details.is_none());
    }
}
