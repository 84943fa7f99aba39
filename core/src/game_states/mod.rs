use serde::{Deserialize, Serialize};

pub mod initialize;
pub mod turn;

/// The phase the game is in. Only `GameManager` moves between phases.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum GameState {
    WaitingToStart,
    /// Blocked on a menu answer, a player name, or the add-another prompt.
    WaitingForUserInput,
    GuessingLetter,
    RoundStarted,
    RoundOver,
    GameOver,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self == GameState::GameOver
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::WaitingToStart
    }
}
