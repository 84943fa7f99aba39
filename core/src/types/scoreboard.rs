use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::io::{IoError, OutputProvider};

/// Round scores, keyed by player name. Names that were never added are
/// ignored by every update: they are neither created nor reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Scoreboard {
    /// Registration order, used when listing scores.
    names: Vec<String>,
    scores: HashMap<String, u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` at zero. Adding a name twice keeps the existing score.
    pub fn add_player(&mut self, name: &str) {
        if !self.scores.contains_key(name) {
            self.names.push(name.to_string());
            self.scores.insert(name.to_string(), 0);
        }
    }

    pub fn update_score(&mut self, name: &str, points: u32) {
        if let Some(score) = self.scores.get_mut(name) {
            *score = score.saturating_add(points);
        }
    }

    pub fn reset_score(&mut self, name: &str) {
        if let Some(score) = self.scores.get_mut(name) {
            *score = 0;
        }
    }

    /// Zero out `name` and tell the table about it.
    pub fn bankrupt<O: OutputProvider + ?Sized>(
        &mut self,
        name: &str,
        output: &mut O,
    ) -> Result<(), IoError> {
        if self.scores.contains_key(name) {
            self.reset_score(name);
            output.write_line(&format!(
                "Bankrupt! {} loses everything earned this round.",
                name
            ))?;
        }
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
    }

    pub fn score(&self, name: &str) -> u32 {
        self.scores.get(name).copied().unwrap_or(0)
    }

    /// `(name, score)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'_ str, u32)> {
        self.names
            .iter()
            .map(move |name| (name.as_str(), self.score(name)))
    }

    pub fn display_scores<O: OutputProvider + ?Sized>(&self, output: &mut O) -> Result<(), IoError> {
        for (name, score) in self.entries() {
            output.write_line(&format!("{}: {}", name, score))?;
        }
        Ok(())
    }
}
