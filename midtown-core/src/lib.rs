//! MidTown Core - applet logic for the MidTown IT training hub
//!
//! - **domain**: the three pure applets (Rock Paper Scissors, multiplication
//!   table, Caesar cipher) and the error type
//! - **services**: validation, game sessions and event logging
//! - **hub**: which panel is currently shown
//! - **config**: settings.json handling

pub mod config;
pub mod domain;
pub mod hub;
mod log_migrations;
pub mod services;

use std::path::{Path, PathBuf};

use anyhow::Result;

use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{CipherKey, CipherMode, Choice, RoundResult, TableRow};
pub use hub::{Hub, Panel};
pub use services::{EntryPoint, LogEvent, LogFilter, LoggingService};

/// Main context for MidTown operations
///
/// Holds the configuration, the hub state and one service per applet.
pub struct MidtownContext {
    app_dir: Option<PathBuf>,
    pub config: Config,
    pub hub: Hub,
    pub rps_service: RpsService,
    pub table_service: TableService,
    pub cipher_service: CipherService,
}

impl MidtownContext {
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;
        Ok(Self {
            app_dir: Some(app_dir.to_path_buf()),
            ..Self::with_config(config)
        })
    }

    /// Context that never writes settings back to disk
    pub fn with_config(config: Config) -> Self {
        let table_service = TableService::new(&config);
        Self {
            app_dir: None,
            config,
            hub: Hub::new(),
            rps_service: RpsService::new(),
            table_service,
            cipher_service: CipherService::new(),
        }
    }

    /// Switch panels, returning the one that was showing
    ///
    /// Applet state is kept while hidden: a game of Rock Paper Scissors
    /// picks up where it left off when its panel is opened again.
    pub fn open(&mut self, panel: Panel) -> Panel {
        self.hub.select(panel)
    }

    /// Sign both Rock Paper Scissors players in
    ///
    /// The accepted names become the defaults offered next time.
    pub fn sign_in(&mut self, player_one: &str, player_two: &str) -> Result<()> {
        self.rps_service.start(player_one, player_two)?;

        if let Some((one, two)) = self.rps_service.names() {
            self.config.default_player_one = Some(one.to_string());
            self.config.default_player_two = Some(two.to_string());
        }
        match &self.app_dir {
            Some(dir) => self.config.save(dir),
            None => Ok(()),
        }
    }
}
