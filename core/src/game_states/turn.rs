use serde::{Deserialize, Serialize};

use crate::types::LetterGuess;

/// What the active player chose from the turn menu.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum TurnAction {
    Spin,
    Solve,
}

impl TurnAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(TurnAction::Spin),
            "2" => Some(TurnAction::Solve),
            _ => None,
        }
    }
}

/// A letter guess must be exactly one alphabetic character.
pub fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

/// How a turn ended.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum TurnOutcome {
    Bankrupt,
    LostTurn,
    Guessed {
        letter: char,
        result: LetterGuess,
        points: u32,
    },
    Solved {
        bonus: u32,
    },
    FailedSolve,
}

impl TurnOutcome {
    /// Points this turn added to the player's round score.
    pub fn points_earned(self) -> u32 {
        match self {
            TurnOutcome::Guessed {
                result: LetterGuess::Revealed { .. },
                points,
                ..
            } => points,
            TurnOutcome::Solved { bonus } => bonus,
            _ => 0,
        }
    }
}
