//! Multiplication table generation

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// One line of a multiplication table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub multiplier: i64,
    pub product: i64,
}

impl From<TableRow> for (i64, i64) {
    fn from(row: TableRow) -> Self {
        (row.multiplier, row.product)
    }
}

/// Generate `base x 1` through `base x rows`
///
/// Zero and negative bases are fine; `rows` must be at least 1.
pub fn generate(base: i64, rows: i64) -> Result<Vec<TableRow>> {
    if rows < 1 {
        return Err(Error::invalid_range(format!(
            "row count must be at least 1, got {}",
            rows
        )));
    }

    (1..=rows)
        .map(|multiplier| {
            multiplier
                .checked_mul(base)
                .map(|product| TableRow { multiplier, product })
                .ok_or_else(|| Error::Overflow(format!("{} x {}", multiplier, base)))
        })
        .collect()
}

/// Render a table as display lines under a title
pub fn render(title: &str, base: i64, rows: &[TableRow]) -> String {
    let mut text = format!("{}\n\n", title);
    for row in rows {
        text.push_str(&format!("{} x {} = {}\n", row.multiplier, base, row.product));
    }
    text
}
