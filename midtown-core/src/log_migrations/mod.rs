//! Log database migrations - embedded SQL files
//!
//! `000_migrations.sql` creates the bookkeeping table and runs on every open.
//! The rest are applied once each, in order. When adding one, create
//! `NNN_description.sql` and list it in `LOG_MIGRATIONS`.

pub const MIGRATIONS_TABLE: &str = include_str!("000_migrations.sql");

pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_initial_schema.sql",
        include_str!("001_initial_schema.sql"),
    ),
    ("002_applet_index.sql", include_str!("002_applet_index.sql")),
];
