//! Table command - generate a multiplication table

use anyhow::Result;
use colored::Colorize;

use midtown_core::services::GeneratedTable;

use super::{fallback_name, get_context};
use crate::output;

pub fn run(
    base: i64,
    rows: Option<i64>,
    user: Option<String>,
    plain: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let username = user.unwrap_or_else(|| {
        fallback_name(ctx.config.default_player_one.as_deref(), "MidTown")
    });

    let table = ctx.table_service.build(&username, base, rows)?;

    if json {
        return output::print_json(&table);
    }

    if plain {
        print!("{}", table.text);
        return Ok(());
    }

    print_table(&table);
    Ok(())
}

pub fn print_table(table: &GeneratedTable) {
    println!("{}", format!("{}'s Table:", table.username).bold());

    let mut out = output::create_table();
    out.set_header(vec!["Multiplicand", "Multiplier", "Product"]);
    for row in &table.rows {
        out.add_row(vec![
            row.multiplier.to_string(),
            table.base.to_string(),
            row.product.to_string(),
        ]);
    }
    println!("{}", out);
    output::success("Multiplication Table has been generated");
}
