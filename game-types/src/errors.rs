use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("unknown category: {category}")]
    UnknownCategory { category: String },
    #[error("word bank has no categories")]
    EmptyWordBank,
    #[error("category {category} has no words")]
    EmptyCategory { category: String },
    #[error("a player named {name} is already in the roster")]
    DuplicatePlayer { name: String },
    #[error("player name must not be blank")]
    BlankPlayerName,
    #[error("player {player_id} not found")]
    PlayerNotFound { player_id: PlayerId },
    #[error("malformed word bank: {message}")]
    WordBankFormat { message: String },
}

impl GameError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
