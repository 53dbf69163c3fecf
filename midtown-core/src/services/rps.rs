//! Rock Paper Scissors service - a two-player game session
//!
//! The session moves through three phases: players sign in (`Login`), pick
//! their moves (`Game`), then see the result (`Postgame`). Scores carry over
//! between rounds until the players quit.

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::rps::{judge, Choice, RoundResult};

/// Longest accepted player name
pub const MAX_NAME_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Login,
    Game,
    Postgame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

/// Everything a front end needs to show after a round
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutcome {
    pub player_one: String,
    pub player_two: String,
    pub choice_one: Choice,
    pub choice_two: Choice,
    pub result: RoundResult,
    pub score_one: u32,
    pub score_two: u32,
}

impl RoundOutcome {
    /// Name of the winner, if the round wasn't a tie
    pub fn winner(&self) -> Option<&str> {
        match self.result {
            RoundResult::Player1Wins => Some(&self.player_one),
            RoundResult::Player2Wins => Some(&self.player_two),
            RoundResult::Draw => None,
        }
    }

    pub fn message(&self) -> String {
        match self.winner() {
            Some(name) => format!("{} is the victor!", name),
            None => "It's a tie!".to_string(),
        }
    }
}

/// Rock Paper Scissors game session
#[derive(Debug)]
pub struct RpsService {
    phase: Phase,
    names: Option<(String, String)>,
    choice_one: Option<Choice>,
    choice_two: Option<Choice>,
    score_one: u32,
    score_two: u32,
}

impl Default for RpsService {
    fn default() -> Self {
        Self::new()
    }
}

impl RpsService {
    pub fn new() -> Self {
        Self {
            phase: Phase::Login,
            names: None,
            choice_one: None,
            choice_two: None,
            score_one: 0,
            score_two: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score_one, self.score_two)
    }

    pub fn names(&self) -> Option<(&str, &str)> {
        self.names.as_ref().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Sign both players in and move to the game screen
    pub fn start(&mut self, player_one: &str, player_two: &str) -> Result<()> {
        let p1 = player_one.trim();
        let p2 = player_two.trim();

        let mut invalid_fields = Vec::new();
        check_name("Player 1", p1, &mut invalid_fields);
        check_name("Player 2", p2, &mut invalid_fields);
        if !invalid_fields.is_empty() {
            return Err(Error::validation(&invalid_fields));
        }

        self.names = Some((p1.to_string(), p2.to_string()));
        self.phase = Phase::Game;
        Ok(())
    }

    /// Record a player's move
    ///
    /// Returns the round outcome once both players have chosen.
    pub fn select(&mut self, player: Player, choice: Choice) -> Result<Option<RoundOutcome>> {
        if self.phase != Phase::Game {
            return Err(Error::Other(format!(
                "Choices can only be made during a round (currently {:?})",
                self.phase
            )));
        }

        match player {
            Player::One => self.choice_one = Some(choice),
            Player::Two => self.choice_two = Some(choice),
        }

        let (Some(choice_one), Some(choice_two)) = (self.choice_one, self.choice_two) else {
            return Ok(None);
        };

        let result = judge(choice_one, choice_two);
        match result {
            RoundResult::Player1Wins => self.score_one += 1,
            RoundResult::Player2Wins => self.score_two += 1,
            RoundResult::Draw => {}
        }

        self.choice_one = None;
        self.choice_two = None;
        self.phase = Phase::Postgame;

        let (player_one, player_two) = self.names.clone().unwrap_or_default();
        Ok(Some(RoundOutcome {
            player_one,
            player_two,
            choice_one,
            choice_two,
            result,
            score_one: self.score_one,
            score_two: self.score_two,
        }))
    }

    /// Start another round with the same players
    pub fn replay(&mut self) {
        if self.names.is_some() {
            self.choice_one = None;
            self.choice_two = None;
            self.phase = Phase::Game;
        }
    }

    /// End the game and return to the sign-in screen
    pub fn quit(&mut self) {
        *self = Self::new();
    }
}

fn check_name(field: &str, name: &str, invalid_fields: &mut Vec<String>) {
    if name.is_empty() {
        invalid_fields.push(format!("{} empty", field));
    } else if name.chars().count() > MAX_NAME_LEN {
        invalid_fields.push(format!("{} longer than {} characters", field, MAX_NAME_LEN));
    }
}
