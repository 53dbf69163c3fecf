//! Table service - validated multiplication tables for display

use serde::Serialize;

use crate::config::{Config, MAX_ROWS_LIMIT};
use crate::domain::result::{Error, Result};
use crate::domain::table::{generate, render, TableRow};

/// Table service for the multiplication table applet
pub struct TableService {
    default_rows: i64,
    max_rows: i64,
}

impl TableService {
    pub fn new(config: &Config) -> Self {
        let max_rows = config.max_rows.clamp(1, MAX_ROWS_LIMIT);
        Self {
            default_rows: config.default_rows.clamp(1, max_rows),
            max_rows,
        }
    }

    pub fn default_rows(&self) -> i64 {
        self.default_rows
    }

    pub fn max_rows(&self) -> i64 {
        self.max_rows
    }

    /// Build a table for `username`
    ///
    /// `rows` falls back to the configured default and must lie within
    /// 1..=max_rows.
    pub fn build(&self, username: &str, base: i64, rows: Option<i64>) -> Result<GeneratedTable> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::validation(["Username empty"]));
        }

        let rows = rows.unwrap_or(self.default_rows);
        if rows > self.max_rows {
            return Err(Error::invalid_range(format!(
                "row count must be between 1 and {}, got {}",
                self.max_rows, rows
            )));
        }

        let table = generate(base, rows)?;
        let title = format!("{}'s Table:", username);
        let text = render(&title, base, &table);

        Ok(GeneratedTable {
            username: username.to_string(),
            base,
            rows: table,
            text,
        })
    }

    /// Parse a multiplier as typed into a form
    pub fn parse_base(raw: &str) -> Result<i64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::validation(["Multiplier empty"]));
        }
        raw.parse()
            .map_err(|_| Error::validation(["Multiplier not an integer"]))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTable {
    pub username: String,
    pub base: i64,
    pub rows: Vec<TableRow>,
    #[serde(skip)]
    pub text: String,
}
