use game_types::{
    Category, GameError, GamePlayer, HINT_PREFIX, HistoryStore, IMPOSTOR_MARKER, Player,
    TrollScenario,
};
use tracing::{debug, warn};

use crate::{RandomSource, WordBank};

/// Chance of a troll event ("Protocolo Pandora") in an eligible round.
///
/// A troll round replaces normal role assignment with one of three chaotic
/// scenarios and never touches fairness stats or word recency.
pub const TROLL_PROBABILITY: f64 = 0.15;
/// Rounds after a troll event during which no other may trigger.
pub const TROLL_COOLDOWN_ROUNDS: u32 = 5;
/// Chance that a regular impostor's hint is just the category name.
const CATEGORY_HINT_PROBABILITY: f64 = 0.5;

pub fn cooldown_active(history: &HistoryStore, current_round: u32) -> bool {
    history
        .last_troll_round
        .is_some_and(|last| current_round.saturating_sub(last) <= TROLL_COOLDOWN_ROUNDS)
}

/// Decides whether `current_round` is a troll round.
///
/// No random value is consumed unless troll mode is on and the cooldown has expired.
pub fn troll_gate<R: RandomSource + ?Sized>(
    troll_mode: bool,
    history: &HistoryStore,
    current_round: u32,
    rng: &mut R,
) -> bool {
    if !troll_mode {
        return false;
    }
    if cooldown_active(history, current_round) {
        debug!(
            "Troll cooldown active in round {} (last troll event in round {:?})",
            current_round, history.last_troll_round
        );
        return false;
    }
    rng.next_f64() < TROLL_PROBABILITY
}

/// 70% espejo total, 20% civil solitario, 10% falsa alarma.
pub fn roll_scenario<R: RandomSource + ?Sized>(rng: &mut R) -> TrollScenario {
    let roll = rng.next_f64() * 100.0;
    if roll < 70.0 {
        TrollScenario::EspejoTotal
    } else if roll < 90.0 {
        TrollScenario::CivilSolitario
    } else {
        TrollScenario::FalsaAlarma
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Hint mode off: the flat impostor marker.
    Marker,
    /// Deliberately unrelated hint from another category.
    Noise,
    /// Just the round's category name.
    Category,
    /// Hint of a random pair from the round's category.
    SamePool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    pub kind: HintKind,
}

/// Babylon hint engine: synthesises what each impostor sees during a troll round.
pub struct HintEngine<'a> {
    word_bank: &'a WordBank,
    category: &'a Category,
    noise_victim: Option<usize>,
}

impl<'a> HintEngine<'a> {
    /// Picks this round's noise victim among `player_count` indices when hint mode is on.
    pub fn new<R: RandomSource + ?Sized>(
        word_bank: &'a WordBank,
        category: &'a Category,
        hint_mode: bool,
        player_count: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if category.pairs.is_empty() {
            return Err(GameError::EmptyCategory {
                category: category.name.clone(),
            });
        }

        let noise_victim = (hint_mode && player_count > 0).then(|| rng.next_index(player_count));
        if let Some(victim) = noise_victim {
            debug!("Noise victim for this round: player index {}", victim);
        }

        Ok(Self {
            word_bank,
            category,
            noise_victim,
        })
    }

    pub fn noise_victim(&self) -> Option<usize> {
        self.noise_victim
    }

    pub fn hint_for<R: RandomSource + ?Sized>(&self, index: usize, rng: &mut R) -> Hint {
        let Some(victim) = self.noise_victim else {
            return Hint {
                text: IMPOSTOR_MARKER.to_string(),
                kind: HintKind::Marker,
            };
        };

        if index == victim {
            return self.noise_hint(rng);
        }

        if rng.next_f64() < CATEGORY_HINT_PROBABILITY {
            Hint {
                text: format!("{}{}", HINT_PREFIX, self.category.name),
                kind: HintKind::Category,
            }
        } else {
            let pair = &self.category.pairs[rng.next_index(self.category.pairs.len())];
            Hint {
                text: format!("{}{}", HINT_PREFIX, pair.hint),
                kind: HintKind::SamePool,
            }
        }
    }

    // Always the first pair of the other category.
    fn noise_hint<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Hint {
        let source = match self.word_bank.random_other_category(&self.category.name, rng) {
            Some(other) => other,
            None => {
                warn!(
                    "No category other than {} to draw noise from, reusing it",
                    self.category.name
                );
                self.category
            }
        };

        Hint {
            text: format!("{}{}", HINT_PREFIX, source.pairs[0].hint),
            kind: HintKind::Noise,
        }
    }
}

/// Builds every player's card for a troll round of the given scenario.
pub fn assign_troll_players<R: RandomSource + ?Sized>(
    scenario: TrollScenario,
    players: &[Player],
    word_bank: &WordBank,
    category: &Category,
    real_word: &str,
    hint_mode: bool,
    rng: &mut R,
) -> Result<Vec<GamePlayer>, GameError> {
    if category.pairs.is_empty() {
        return Err(GameError::EmptyCategory {
            category: category.name.clone(),
        });
    }

    if scenario == TrollScenario::FalsaAlarma {
        return Ok(players
            .iter()
            .map(|p| GamePlayer::civil(p, &category.name, real_word, 0.0))
            .collect());
    }

    let hints = HintEngine::new(word_bank, category, hint_mode, players.len(), rng)?;
    let lone_civil = match scenario {
        TrollScenario::CivilSolitario => Some(rng.next_index(players.len())),
        _ => None,
    };

    Ok(players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if lone_civil == Some(i) {
                GamePlayer::civil(p, &category.name, real_word, 0.0)
            } else {
                let hint = hints.hint_for(i, rng);
                debug!("{} gets a {:?} hint", p.name, hint.kind);
                GamePlayer::impostor(p, &category.name, real_word, hint.text, 0.0)
            }
        })
        .collect())
}
