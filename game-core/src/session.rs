use game_types::{GameError, HistoryStore, RoundOutcome, RoundSettings};
use tracing::info;

use crate::{MIN_PLAYERS, RandomSource, Roster, RoundGenerator, WordBank};

/// Single-writer owner of the session state a UI shell would hold.
///
/// Each round is generated from the stored history and the returned
/// snapshot replaces it. History lives as long as the session does.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub roster: Roster,
    pub settings: RoundSettings,
    history: HistoryStore,
    last_round: Option<RoundOutcome>,
}

impl GameSession {
    pub fn new(roster: Roster, settings: RoundSettings) -> Self {
        Self {
            roster,
            settings,
            history: HistoryStore::new(),
            last_round: None,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn last_round(&self) -> Option<&RoundOutcome> {
        self.last_round.as_ref()
    }

    /// Generates the next round. The impostor count is clamped to what the
    /// roster allows before generation.
    pub fn start_round<R: RandomSource + ?Sized>(
        &mut self,
        word_bank: &WordBank,
        rng: &mut R,
    ) -> Result<&RoundOutcome, GameError> {
        if !self.roster.can_start() {
            return Err(GameError::invalid_configuration(format!(
                "need at least {} players to start, have {}",
                MIN_PLAYERS,
                self.roster.len()
            )));
        }

        self.settings.impostor_count = self
            .roster
            .clamp_impostor_count(self.settings.impostor_count);

        let outcome = RoundGenerator::new(word_bank).generate(
            self.roster.players(),
            &self.settings,
            &self.history,
            rng,
        )?;

        info!("Session advanced to round {}", outcome.history.round_counter);
        self.history = outcome.history.clone();
        Ok(&*self.last_round.insert(outcome))
    }

    /// Plays another round with the same roster and settings.
    pub fn replay<R: RandomSource + ?Sized>(
        &mut self,
        word_bank: &WordBank,
        rng: &mut R,
    ) -> Result<&RoundOutcome, GameError> {
        self.start_round(word_bank, rng)
    }

    /// Back to setup: drops the current round but keeps the history.
    pub fn return_to_setup(&mut self) {
        self.last_round = None;
    }
}
