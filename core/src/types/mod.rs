//! Generic types used throughout the core codebase.

use serde::{Deserialize, Serialize};

mod players;
mod puzzle;
mod scoreboard;
mod wheel;

pub use players::{PlayerError, Players, MAX_NAME_LEN};
pub use puzzle::{hide_puzzle_solution, LetterGuess, Puzzle, PLACEHOLDER};
pub use scoreboard::Scoreboard;
pub use wheel::{SpinWheel, WheelError, WheelSegment};

/// A unique identifier for a player.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct PlayerID(pub u32);

/// Information tracked about a player throughout the game. The round score
/// lives on the `Scoreboard`; `total_score` only holds what has been banked by
/// winning rounds.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Player {
    pub(crate) player_id: PlayerID,
    pub(crate) name: String,
    pub(crate) total_score: u32,
}

impl Player {
    #[must_use]
    pub fn new(player_id: PlayerID, name: String) -> Self {
        Self {
            player_id,
            name,
            total_score: 0,
        }
    }

    pub fn player_id(&self) -> PlayerID {
        self.player_id
    }

    pub fn name(&self) -> &'_ str {
        &self.name
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn update_total_score(&mut self, round_score: u32) {
        self.total_score = self.total_score.saturating_add(round_score);
    }
}
