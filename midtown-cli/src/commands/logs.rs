//! Logs command - what happened in each applet

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use clap::{Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::Confirm;

use super::get_app_dir;
use crate::output;
use midtown_core::services::{AppletActivity, LogEntry};
use midtown_core::{EntryPoint, LogFilter, LoggingService, Panel};

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent events, newest first
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Only events from one applet
        #[arg(long, value_enum)]
        applet: Option<AppletArg>,
        /// Only failures
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete old events
    Clear {
        /// Delete events older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u32,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Show totals and activity per applet
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the log database to a file
    Export {
        /// Destination file
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppletArg {
    Rps,
    Table,
    Cipher,
}

impl AppletArg {
    fn panel(self) -> Panel {
        match self {
            AppletArg::Rps => Panel::RockPaperScissors,
            AppletArg::Table => Panel::MultiplicationTable,
            AppletArg::Cipher => Panel::CaesarCipher,
        }
    }
}

pub fn run(command: LogsCommands) -> Result<()> {
    let app_dir = get_app_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    let service = LoggingService::new(&app_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))?;

    match command {
        LogsCommands::List {
            limit,
            applet,
            errors,
            json,
        } => list(&service, list_filter(limit, applet, errors), json),
        LogsCommands::Clear {
            older_than_days,
            force,
        } => clear(&service, older_than_days, force),
        LogsCommands::Stats { json } => stats(&service, json),
        LogsCommands::Export { output: path } => {
            let written = service.export(&path)?;
            output::success(&format!("Logs exported to {}", written.display()));
            Ok(())
        }
    }
}

fn list_filter(limit: usize, applet: Option<AppletArg>, errors: bool) -> LogFilter {
    let mut filter = LogFilter::recent(limit);
    if let Some(applet) = applet {
        filter = filter.for_applet(applet.panel().slug());
    }
    if errors {
        filter = filter.only_errors();
    }
    filter
}

fn list(service: &LoggingService, filter: LogFilter, json: bool) -> Result<()> {
    let entries = service.query(&filter)?;

    if json {
        return output::print_json(&entries);
    }
    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Via", "Event", "Applet", "Failure"]);
    for entry in &entries {
        table.add_row(entry_row(entry));
    }
    println!("{}", table);
    Ok(())
}

fn entry_row(entry: &LogEntry) -> Vec<String> {
    let applet = entry
        .applet
        .as_deref()
        .and_then(Panel::from_slug)
        .map(|p| p.title().to_string())
        .unwrap_or_default();
    let failure = match (&entry.error_message, &entry.error_details) {
        (Some(kind), Some(details)) => format!("{}: {}", kind, details),
        (Some(kind), None) => kind.clone(),
        _ => String::new(),
    };
    vec![
        format_timestamp(entry.timestamp),
        entry.entry_point.clone(),
        entry.event.clone(),
        applet,
        failure,
    ]
}

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Millisecond cutoff for "older than N days"; a cutoff before the
/// representable calendar deletes nothing
fn cutoff_ms(now: DateTime<Utc>, older_than_days: u32) -> i64 {
    now.checked_sub_signed(Duration::days(i64::from(older_than_days)))
        .map(|t| t.timestamp_millis())
        .unwrap_or(i64::MIN)
}

fn clear(service: &LoggingService, older_than_days: u32, force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete events older than {} days?", older_than_days))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = service.delete_before(cutoff_ms(Utc::now(), older_than_days))?;
    output::success(&format!("Deleted {} log entries", deleted));
    Ok(())
}

/// One row per applet, including applets with no events yet
fn applet_rows(activity: &[AppletActivity]) -> Vec<AppletActivity> {
    Panel::APPLETS
        .iter()
        .map(|panel| {
            activity
                .iter()
                .find(|a| a.applet == panel.slug())
                .cloned()
                .unwrap_or_else(|| AppletActivity {
                    applet: panel.slug().to_string(),
                    events: 0,
                    errors: 0,
                })
        })
        .collect()
}

fn stats(service: &LoggingService, json: bool) -> Result<()> {
    let (total, errors) = service.totals()?;
    let applets = applet_rows(&service.applet_activity()?);
    let db_path = service.db_path();
    let size_bytes = std::fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    if json {
        return output::print_json(serde_json::json!({
            "total_entries": total,
            "error_count": errors,
            "applets": applets,
            "database_path": db_path.to_string_lossy(),
            "database_size_bytes": size_bytes,
        }));
    }

    println!("{}", "Log Statistics".bold());
    println!("  Events: {} ({} failed)", total, errors);
    println!("  Database: {} ({})", db_path.display(), output::format_size(size_bytes));
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Applet", "Events", "Failures"]);
    for row in &applets {
        let title = Panel::from_slug(&row.applet).map_or(row.applet.as_str(), |p| p.title());
        let failures = if row.errors > 0 {
            row.errors.to_string().red().to_string()
        } else {
            "0".to_string()
        };
        table.add_row(vec![title.to_string(), row.events.to_string(), failures]);
    }
    println!("{}", table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(applet: Option<&str>, error: Option<&str>, details: Option<&str>) -> LogEntry {
        LogEntry {
            id: 1,
            timestamp: 0,
            entry_point: "hub".to_string(),
            app_version: "2.0.1".to_string(),
            platform: "linux".to_string(),
            event: "applet_failed".to_string(),
            applet: applet.map(str::to_string),
            command: None,
            error_message: error.map(str::to_string),
            error_details: details.map(str::to_string),
        }
    }

    #[test]
    fn test_list_filter_from_flags() {
        let filter = list_filter(20, Some(AppletArg::Cipher), true);
        assert_eq!(filter.applet.as_deref(), Some("cipher"));
        assert!(filter.errors_only);
        assert_eq!(filter.limit, 20);

        let filter = list_filter(50, None, false);
        assert!(filter.applet.is_none());
        assert!(!filter.errors_only);
    }

    #[test]
    fn test_entry_row_shows_applet_title_and_failure() {
        let row = entry_row(&entry(Some("table"), Some("validation"), Some("Username empty")));
        assert_eq!(row[0], "1970-01-01 00:00:00");
        assert_eq!(row[3], "Multiplication Table");
        assert_eq!(row[4], "validation: Username empty");

        let row = entry_row(&entry(None, None, None));
        assert_eq!(row[3], "");
        assert_eq!(row[4], "");
    }

    #[test]
    fn test_cutoff_ms() {
        let now = Utc.timestamp_millis_opt(10 * 86_400_000).unwrap();
        assert_eq!(cutoff_ms(now, 1), 9 * 86_400_000);
        assert_eq!(cutoff_ms(now, 0), 10 * 86_400_000);
        assert_eq!(cutoff_ms(Utc::now(), u32::MAX), i64::MIN);
    }

    #[test]
    fn test_applet_rows_include_idle_applets() {
        let rows = applet_rows(&[AppletActivity {
            applet: "cipher".to_string(),
            events: 4,
            errors: 1,
        }]);
        let slugs: Vec<&str> = rows.iter().map(|r| r.applet.as_str()).collect();
        assert_eq!(slugs, vec!["rps", "table", "cipher"]);
        assert_eq!(rows[0].events, 0);
        assert_eq!(rows[2].errors, 1);
    }
}
