use game_types::{GameError, Player, PlayerId};

use crate::MIN_PLAYERS;

pub const DEFAULT_PLAYER_NAMES: [&str; 4] = ["Agente 1", "Agente 2", "Agente 3", "Agente 4"];

/// The active players of a session. Names are unique ignoring case.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self {
            players: DEFAULT_PLAYER_NAMES.iter().map(|name| Player::new(*name)).collect(),
        }
    }

    /// Adds a player under a fresh id. The name is trimmed first.
    pub fn add(&mut self, name: &str) -> Result<&Player, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::BlankPlayerName);
        }

        let lowered = name.to_lowercase();
        if self.players.iter().any(|p| p.name.to_lowercase() == lowered) {
            return Err(GameError::DuplicatePlayer {
                name: name.to_string(),
            });
        }

        self.players.push(Player::new(name));
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn remove(&mut self, player_id: PlayerId) -> Result<Player, GameError> {
        let pos = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound { player_id })?;
        Ok(self.players.remove(pos))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn can_start(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    pub fn max_impostors(&self) -> usize {
        self.players.len().saturating_sub(1).max(1)
    }

    pub fn clamp_impostor_count(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_impostors())
    }
}
