use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{HistoryStore, Player, PlayerId};

/// What an impostor sees when hint mode is off.
pub const IMPOSTOR_MARKER: &str = "ERES EL IMPOSTOR";

/// Prefix of every hint shown on an impostor card.
pub const HINT_PREFIX: &str = "PISTA: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    Civil,
    Impostor,
}

/// One player's card for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// What the player sees on the card: the civilian word, the marker, or a hint.
    pub word: String,
    /// The true civilian word of the round, shown on the results screen.
    pub real_word: String,
    pub is_imp: bool,
    pub category: String,
    /// Fairness weight at selection time. Always 0 in troll rounds.
    pub are_score: f64,
}

impl GamePlayer {
    pub fn civil(player: &Player, category: &str, real_word: &str, are_score: f64) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role: Role::Civil,
            word: real_word.to_string(),
            real_word: real_word.to_string(),
            is_imp: false,
            category: category.to_string(),
            are_score,
        }
    }

    pub fn impostor(
        player: &Player,
        category: &str,
        real_word: &str,
        shown: String,
        are_score: f64,
    ) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role: Role::Impostor,
            word: shown,
            real_word: real_word.to_string(),
            is_imp: true,
            category: category.to_string(),
            are_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrollScenario {
    /// Everyone is an impostor.
    EspejoTotal,
    /// Everyone but one player is an impostor.
    CivilSolitario,
    /// Nobody is an impostor, despite the troll flag.
    FalsaAlarma,
}

impl TrollScenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrollScenario::EspejoTotal => "espejo_total",
            TrollScenario::CivilSolitario => "civil_solitario",
            TrollScenario::FalsaAlarma => "falsa_alarma",
        }
    }
}

/// A generated round. Each variant's players satisfy that mode's role invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Round {
    Normal {
        category: String,
        real_word: String,
        players: Vec<GamePlayer>,
    },
    Troll {
        scenario: TrollScenario,
        category: String,
        real_word: String,
        players: Vec<GamePlayer>,
    },
}

impl Round {
    pub fn players(&self) -> &[GamePlayer] {
        match self {
            Round::Normal { players, .. } | Round::Troll { players, .. } => players,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Round::Normal { category, .. } | Round::Troll { category, .. } => category,
        }
    }

    pub fn real_word(&self) -> &str {
        match self {
            Round::Normal { real_word, .. } | Round::Troll { real_word, .. } => real_word,
        }
    }

    pub fn is_troll_event(&self) -> bool {
        matches!(self, Round::Troll { .. })
    }

    pub fn troll_scenario(&self) -> Option<TrollScenario> {
        match self {
            Round::Troll { scenario, .. } => Some(*scenario),
            Round::Normal { .. } => None,
        }
    }

    pub fn impostors(&self) -> impl Iterator<Item = &GamePlayer> {
        self.players().iter().filter(|p| p.is_imp)
    }
}

/// Everything a single call to the round generator hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundOutcome {
    pub round: Round,
    /// Replaces the caller's previous snapshot.
    pub history: HistoryStore,
    /// Who opens the discussion.
    pub starting_player: PlayerId,
}

impl RoundOutcome {
    pub fn players(&self) -> &[GamePlayer] {
        self.round.players()
    }

    pub fn is_troll_event(&self) -> bool {
        self.round.is_troll_event()
    }

    pub fn troll_scenario(&self) -> Option<TrollScenario> {
        self.round.troll_scenario()
    }
}
