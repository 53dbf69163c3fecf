//! Rock Paper Scissors rules

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// A player's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Map a menu index (0, 1, 2) to a choice
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::invalid_choice(index.to_string()))
    }

    /// Pick a choice uniformly at random
    pub fn random() -> Self {
        Self::ALL[rand::thread_rng().gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// The choice this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(Error::invalid_choice(s)),
        }
    }
}

/// Outcome of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    Player1Wins,
    Player2Wins,
    Draw,
}

/// Decide a round between player 1 (`a`) and player 2 (`b`)
pub fn judge(a: Choice, b: Choice) -> RoundResult {
    if a == b {
        RoundResult::Draw
    } else if a.beats() == b {
        RoundResult::Player1Wins
    } else {
        RoundResult::Player2Wins
    }
}

/// Decide a round from raw text, failing on anything outside the three moves
pub fn judge_names(a: &str, b: &str) -> Result<RoundResult> {
    Ok(judge(a.parse()?, b.parse()?))
}
