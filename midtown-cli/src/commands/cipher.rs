//! Cipher command - Caesar cipher encryption and decryption

use std::io::{self, Read};

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Input;

use midtown_core::services::{CipherOutcome, CipherRequest};
use midtown_core::CipherMode;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum CipherCommands {
    /// Encrypt plaintext
    Encrypt(CipherArgs),
    /// Decrypt ciphertext
    Decrypt(CipherArgs),
}

#[derive(clap::Args)]
pub struct CipherArgs {
    /// Cipher key: an integer shift, or any text (its character codes are summed)
    #[arg(allow_negative_numbers = true)]
    key: String,
    /// Text to transform (read from stdin when omitted)
    text: Option<String>,
    /// Uppercase, turn '.' into 'X' and drop other non-letters first
    #[arg(long)]
    classic: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(command: CipherCommands) -> Result<()> {
    let (mode, args) = match command {
        CipherCommands::Encrypt(args) => (CipherMode::Encrypt, args),
        CipherCommands::Decrypt(args) => (CipherMode::Decrypt, args),
    };
    let ctx = get_context()?;

    let source = TextSource::resolve(args.text, atty::is(atty::Stream::Stdin));
    let text = source.read(mode)?;

    let request = CipherRequest {
        key: args.key,
        text,
        mode,
        classic: args.classic,
    };
    let outcome = ctx.cipher_service.run(&request)?;

    if args.json {
        return output::print_json(&outcome);
    }

    print_outcome(&outcome);
    Ok(())
}

/// Where the text to transform comes from
#[derive(Debug, PartialEq, Eq)]
enum TextSource {
    Given(String),
    Stdin,
    Prompt,
}

impl TextSource {
    /// An argument wins; otherwise piped stdin, or a prompt on a terminal
    fn resolve(text: Option<String>, stdin_is_terminal: bool) -> Self {
        match text {
            Some(text) => TextSource::Given(text),
            None if stdin_is_terminal => TextSource::Prompt,
            None => TextSource::Stdin,
        }
    }

    fn read(self, mode: CipherMode) -> Result<String> {
        match self {
            TextSource::Given(text) => Ok(text),
            TextSource::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(strip_line_ending(&buffer).to_string())
            }
            TextSource::Prompt => prompt_text(mode),
        }
    }
}

/// Drop the newline `echo` and editors leave at the end of piped text
fn strip_line_ending(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

pub fn prompt_text(mode: CipherMode) -> Result<String> {
    let prompt = match mode {
        CipherMode::Encrypt => "Plaintext",
        CipherMode::Decrypt => "Ciphertext",
    };
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

pub fn print_outcome(outcome: &CipherOutcome) {
    println!("{}", outcome.output);
    println!();
    if outcome.unchanged {
        output::warning("Using a cipher key divisible by 26 results in no change!");
        output::warning("Alpha characters remain unchanged");
        return;
    }
    let done = match outcome.mode {
        CipherMode::Encrypt => "Plaintext has been encrypted with the cipher key",
        CipherMode::Decrypt => "Ciphertext has been decrypted with the cipher key",
    };
    println!("{} {}", "✓".green(), done);
}
