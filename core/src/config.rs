use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ROUNDS: u32 = 3;
pub const DEFAULT_SOLVE_BONUS: u32 = 800;
pub const DEFAULT_PUZZLE: &str = "pineapples";

/// Knobs for a single game. Every field falls back to its default when
/// missing from a config file.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of solved rounds after which the game is over.
    pub rounds: u32,
    pub solve_bonus: u32,
    /// Puzzle phrases, played in order and cycled when there are more rounds
    /// than puzzles.
    pub puzzles: Vec<String>,
    /// Seed for the wheel, for reproducible games.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            solve_bonus: DEFAULT_SOLVE_BONUS,
            puzzles: vec![DEFAULT_PUZZLE.to_string()],
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.puzzles.is_empty() {
            return Err(ConfigError::NoPuzzles);
        }
        if let Some(puzzle) = self
            .puzzles
            .iter()
            .find(|p| !p.chars().any(char::is_alphabetic))
        {
            return Err(ConfigError::InvalidPuzzle(puzzle.clone()));
        }
        Ok(())
    }

    /// The puzzle for the zero-based `round`. Only valid on a validated config.
    pub fn puzzle_for_round(&self, round: u32) -> &'_ str {
        &self.puzzles[round as usize % self.puzzles.len()]
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No input provider was supplied")]
    MissingInput,
    #[error("No output provider was supplied")]
    MissingOutput,
    #[error("A game needs at least one round")]
    NoRounds,
    #[error("The puzzle list is empty")]
    NoPuzzles,
    #[error("Puzzle {0:?} has no letters to guess")]
    InvalidPuzzle(String),
}
