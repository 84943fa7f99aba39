//! Core rules for a text-based Wheel of Fortune: the wheel, the scoreboard,
//! the hidden puzzle, and the `GameManager` state machine that runs setup,
//! rounds and turns against pluggable line-based input and output.

pub mod config;
pub mod game_states;
pub mod io;
pub mod manager;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use game_states::GameState;
pub use manager::{GameError, GameManager, GameManagerBuilder, GameSummary};
