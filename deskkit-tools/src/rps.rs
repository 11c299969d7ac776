//! Rock-Paper-Scissors against a uniformly random computer.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        })
    }
}

impl FromStr for Move {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            other => Err(ToolError::UnknownMove(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    UserWins,
    ComputerWins,
}

impl Outcome {
    pub fn decide(user: Move, computer: Move) -> Self {
        if user == computer {
            Outcome::Tie
        } else if user.beats(computer) {
            Outcome::UserWins
        } else {
            Outcome::ComputerWins
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Tie => "It's a tie!",
            Outcome::UserWins => "You win!",
            Outcome::ComputerWins => "Computer wins!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub user: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

/// Running score for one session. Ties don't count for either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub user: u32,
    pub computer: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play one round with a random computer move and record the result.
    pub fn play<R: Rng>(&mut self, user: Move, rng: &mut R) -> Round {
        self.record(user, Move::random(rng))
    }

    pub fn record(&mut self, user: Move, computer: Move) -> Round {
        let outcome = Outcome::decide(user, computer);
        match outcome {
            Outcome::UserWins => self.user += 1,
            Outcome::ComputerWins => self.computer += 1,
            Outcome::Tie => {}
        }
        Round {
            user,
            computer,
            outcome,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
