use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Player, PlayerID};

/// Longest player name accepted at setup.
pub const MAX_NAME_LEN: usize = 128;

/// The set of players playing the game.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Players {
    /// The ordered list of player IDs, used to determine turn order.
    player_ids: Vec<PlayerID>,
    /// The storage for player-state. The ID ordering lives in `player_ids` so
    /// that registration order survives ser/de.
    players: HashMap<PlayerID, Player>,
    /// A holding area for the ID to be allocated to the next player.
    next_player_id: PlayerID,
}

impl Players {
    pub fn new() -> Self {
        Self {
            player_ids: vec![],
            players: HashMap::new(),
            next_player_id: PlayerID(1),
        }
    }

    pub fn player_ids(&self) -> &'_ [PlayerID] {
        &self.player_ids
    }

    pub fn len(&self) -> usize {
        self.player_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_ids.is_empty()
    }

    /// Get all of the players, in registration (and therefore turn) order.
    pub fn players(&self) -> impl Iterator<Item = &'_ Player> {
        self.player_ids
            .iter()
            .flat_map(move |id| self.players.get(id))
    }

    /// Get the player after the provided `player_id`, wrapping around to the
    /// first player. Returns `None` if the player is not found.
    pub fn next_player(&self, player_id: PlayerID) -> Option<&'_ Player> {
        let index = self.player_ids.iter().position(|p| *p == player_id)?;
        let next_player = self.player_ids[(index + 1) % self.player_ids.len()];
        self.players.get(&next_player)
    }

    /// Get the player by PlayerID. Returns `PlayerDoesntExist` if not found.
    pub fn player(&self, id: PlayerID) -> Result<&'_ Player, PlayerError> {
        self.players.get(&id).ok_or(PlayerError::PlayerDoesntExist)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&'_ Player> {
        self.players().find(|p| p.name == name)
    }

    /// Add a player to the game (by name), returning the new `Players` and the
    /// newly allocated `PlayerID`. Names must be non-empty and unique.
    pub fn add_player(&self, name: String) -> Result<(Self, PlayerID), PlayerError> {
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(PlayerError::PlayerNameTooLong);
        }
        if self.player_by_name(&name).is_some() {
            return Err(PlayerError::NameTaken(name));
        }

        let player_id = self.next_player_id;
        let mut self_ = self.clone();
        self_
            .players
            .insert(player_id, Player::new(player_id, name));
        self_.player_ids.push(player_id);
        self_.next_player_id = PlayerID(player_id.0 + 1);
        Ok((self_, player_id))
    }

    /// Move a round score into the player's banked total.
    pub fn bank_score(&self, player_id: PlayerID, round_score: u32) -> Result<Self, PlayerError> {
        let mut self_ = self.clone();
        self_
            .players
            .get_mut(&player_id)
            .ok_or(PlayerError::PlayerDoesntExist)?
            .update_total_score(round_score);
        Ok(self_)
    }

    /// Players ordered by banked total, highest first. Ties keep turn order.
    pub fn standings(&self) -> Vec<&'_ Player> {
        let mut standings: Vec<_> = self.players().collect();
        standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        standings
    }

    /// Every player sharing the highest banked total.
    pub fn winners(&self) -> Vec<&'_ Player> {
        let best = self.players().map(|p| p.total_score).max();
        self.players()
            .filter(|p| Some(p.total_score) == best)
            .collect()
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Player does not exist")]
    PlayerDoesntExist,
    #[error("Player name can't be empty")]
    EmptyName,
    #[error("Player name is too long")]
    PlayerNameTooLong,
    #[error("A player named {0} is already playing")]
    NameTaken(String),
}
