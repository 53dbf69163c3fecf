//! Rps command - play a round of Rock Paper Scissors

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Select;

use midtown_core::config::Config;
use midtown_core::services::{Player, RoundOutcome};
use midtown_core::Choice;

use super::get_context;
use crate::output;

pub struct RpsArgs {
    pub p1_choice: Option<String>,
    pub p2_choice: Option<String>,
    pub p1: Option<String>,
    pub p2: Option<String>,
    pub cpu: bool,
    pub json: bool,
}

/// Where a player's move comes from
#[derive(Debug, PartialEq, Eq)]
enum MoveSource {
    Given(Choice),
    Computer,
    Prompt,
}

impl MoveSource {
    fn resolve(raw: Option<&str>, computer: bool) -> Result<Self> {
        if computer {
            return Ok(MoveSource::Computer);
        }
        match raw {
            Some(raw) => Ok(MoveSource::Given(raw.parse()?)),
            None => Ok(MoveSource::Prompt),
        }
    }

    fn choose(self, player: &str) -> Result<Choice> {
        match self {
            MoveSource::Given(choice) => Ok(choice),
            MoveSource::Computer => Ok(Choice::random()),
            MoveSource::Prompt => prompt_choice(player),
        }
    }
}

/// Names from the flags, then settings.json, then "Player N"
fn player_names(args: &RpsArgs, config: &Config) -> (String, String) {
    let one = args
        .p1
        .clone()
        .or_else(|| config.default_player_one.clone())
        .unwrap_or_else(|| "Player 1".to_string());
    let two = if args.cpu {
        "Computer".to_string()
    } else {
        args.p2
            .clone()
            .or_else(|| config.default_player_two.clone())
            .unwrap_or_else(|| "Player 2".to_string())
    };
    (one, two)
}

pub fn run(args: RpsArgs) -> Result<()> {
    let mut ctx = get_context()?;
    let (p1_name, p2_name) = player_names(&args, &ctx.config);

    // Bad moves are rejected before anyone is prompted
    let first = MoveSource::resolve(args.p1_choice.as_deref(), false)?;
    let second = MoveSource::resolve(args.p2_choice.as_deref(), args.cpu)?;
    let choice_one = first.choose(&p1_name)?;
    let choice_two = second.choose(&p2_name)?;

    ctx.rps_service.start(&p1_name, &p2_name)?;
    ctx.rps_service.select(Player::One, choice_one)?;
    let outcome = ctx
        .rps_service
        .select(Player::Two, choice_two)?
        .context("Round did not complete")?;

    if args.json {
        return output::print_json(&outcome);
    }

    print_outcome(&outcome);
    Ok(())
}

/// Ask a player for their move
pub fn prompt_choice(player: &str) -> Result<Choice> {
    let items: Vec<&str> = Choice::ALL.iter().map(|c| c.as_str()).collect();
    let index = Select::new()
        .with_prompt(format!("{}, choose your move", player))
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Choice::from_index(index)?)
}

pub fn print_outcome(outcome: &RoundOutcome) {
    println!(
        "{} chose {}  |  {} chose {}",
        outcome.player_one.bold(),
        outcome.choice_one,
        outcome.player_two.bold(),
        outcome.choice_two
    );
    match outcome.winner() {
        Some(_) => output::success(&outcome.message()),
        None => output::info(&outcome.message()),
    }
    println!(
        "Score: {} {} - {} {}",
        outcome.player_one, outcome.score_one, outcome.score_two, outcome.player_two
    );
}
