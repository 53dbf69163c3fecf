//! MidTown CLI - the MidTown IT training hub in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use midtown_core::{EntryPoint, LogEvent, Panel};

mod commands;
mod output;

use commands::{cipher, failure_event, get_logger, hub, log_event, logs, rps, table};

/// MidTown IT Training Solutions - Rock Paper Scissors, multiplication
/// tables and the Caesar cipher
#[derive(Parser)]
#[command(name = "midtown", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive hub (default)
    Hub,

    /// Play one round of Rock Paper Scissors
    Rps {
        /// Player 1's move (rock, paper, scissors); prompts when omitted
        p1_choice: Option<String>,
        /// Player 2's move; prompts when omitted
        p2_choice: Option<String>,
        /// Player 1's name
        #[arg(long)]
        p1: Option<String>,
        /// Player 2's name
        #[arg(long)]
        p2: Option<String>,
        /// Let the computer choose for player 2
        #[arg(long, conflicts_with = "p2_choice")]
        cpu: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a multiplication table
    Table {
        /// Number to multiply
        #[arg(allow_negative_numbers = true)]
        base: i64,
        /// Number of rows (defaults to the configured value)
        #[arg(short, long, allow_negative_numbers = true)]
        rows: Option<i64>,
        /// Name shown in the table heading
        #[arg(short, long)]
        user: Option<String>,
        /// Print plain text lines instead of a table
        #[arg(long)]
        plain: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt or decrypt text with the Caesar cipher
    Cipher {
        #[command(subcommand)]
        command: cipher::CipherCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Hub => "hub",
            Commands::Rps { .. } => "rps",
            Commands::Table { .. } => "table",
            Commands::Cipher { .. } => "cipher",
            Commands::Logs { .. } => "logs",
        }
    }

    /// The applet a one-shot command runs
    fn applet(&self) -> Option<Panel> {
        match self {
            Commands::Rps { .. } => Some(Panel::RockPaperScissors),
            Commands::Table { .. } => Some(Panel::MultiplicationTable),
            Commands::Cipher { .. } => Some(Panel::CaesarCipher),
            Commands::Hub | Commands::Logs { .. } => None,
        }
    }
}

fn command_event(event: LogEvent, name: &str, applet: Option<Panel>) -> LogEvent {
    let event = event.with_command(name);
    match applet {
        Some(panel) => event.with_applet(panel.slug()),
        None => event,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Hub);
    let name = command.name();
    let applet = command.applet();

    // The hub keeps its own log; logs commands shouldn't log themselves
    let logger = match command {
        Commands::Hub | Commands::Logs { .. } => None,
        _ => get_logger(EntryPoint::Cli),
    };
    log_event(
        &logger,
        command_event(LogEvent::new("command_executed"), name, applet),
    );

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_event(
                &logger,
                command_event(failure_event("command_failed", &e), name, applet),
            );
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Hub => hub::run(),
        Commands::Rps { p1_choice, p2_choice, p1, p2, cpu, json } => rps::run(rps::RpsArgs {
            p1_choice,
            p2_choice,
            p1,
            p2,
            cpu,
            json,
        }),
        Commands::Table { base, rows, user, plain, json } => table::run(base, rows, user, plain, json),
        Commands::Cipher { command } => cipher::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_hub() {
        let cli = Cli::try_parse_from(["midtown"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_table_accepts_negative_base() {
        let cli = Cli::try_parse_from(["midtown", "table", "-4", "--rows", "3"]).unwrap();
        match cli.command {
            Some(Commands::Table { base, rows, .. }) => {
                assert_eq!(base, -4);
                assert_eq!(rows, Some(3));
            }
            _ => panic!("expected table command"),
        }
    }

    #[test]
    fn test_cpu_excludes_player_two_move() {
        assert!(Cli::try_parse_from(["midtown", "rps", "rock", "paper", "--cpu"]).is_err());

        let cli = Cli::try_parse_from(["midtown", "rps", "rock", "--cpu"]).unwrap();
        match cli.command {
            Some(Commands::Rps { p1_choice, p2_choice, cpu, .. }) => {
                assert_eq!(p1_choice.as_deref(), Some("rock"));
                assert!(p2_choice.is_none());
                assert!(cpu);
            }
            _ => panic!("expected rps command"),
        }
    }

    #[test]
    fn test_one_shot_commands_name_their_applet() {
        let cli = Cli::try_parse_from(["midtown", "table", "3"]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(command.applet(), Some(Panel::MultiplicationTable));

        let event = command_event(LogEvent::new("command_executed"), command.name(), command.applet());
        assert_eq!(event.command.as_deref(), Some("table"));
        assert_eq!(event.applet.as_deref(), Some("table"));

        let cli = Cli::try_parse_from(["midtown", "logs", "stats"]).unwrap();
        assert_eq!(cli.command.unwrap().applet(), None);
    }

    #[test]
    fn test_cipher_accepts_negative_key() {
        let cli = Cli::try_parse_from(["midtown", "cipher", "decrypt", "-3", "Khoor"]).unwrap();
        assert_eq!(cli.command.unwrap().name(), "cipher");
    }
}
