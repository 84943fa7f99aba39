//! Parsing for the setup phase, where the table is assembled one name at a
//! time.

use serde::{Deserialize, Serialize};

/// Answer to "Add another player?".
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum SetupAnswer {
    AddAnother,
    Done,
}

impl SetupAnswer {
    /// Accepts `y`/`yes` and `n`/`no` in any case. Anything else is `None`
    /// and the question has to be asked again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(SetupAnswer::AddAnother),
            "n" | "no" => Some(SetupAnswer::Done),
            _ => None,
        }
    }
}
