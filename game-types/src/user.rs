use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type PlayerId = Uuid;

/// A member of the active roster. Immutable once created: renaming is
/// done by removing the player and adding them again under a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Per-player impostor history used by the fairness weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerStats {
    pub total_impostor_count: u32,
    /// Round index of the most recent impostor pick, `None` if never picked.
    pub last_impostor_round: Option<u32>,
}

impl PlayerStats {
    /// Stats after being chosen impostor in `round`, `None` if the count would overflow.
    pub fn picked_in(self, round: u32) -> Option<Self> {
        Some(Self {
            total_impostor_count: self.total_impostor_count.checked_add(1)?,
            last_impostor_round: Some(round),
        })
    }
}
