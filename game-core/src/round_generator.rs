use game_types::{
    GameError, GamePlayer, HINT_PREFIX, HistoryStore, IMPOSTOR_MARKER, Player, PlayerId, Round,
    RoundOutcome, RoundSettings,
};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::{
    RandomSource, WordBank, are_weight, assign_troll_players, roll_scenario, select_impostors,
    troll_gate,
};

pub const MIN_PLAYERS: usize = 3;

/// Turns a roster, settings and history snapshot into the next round.
///
/// Holds no state between calls: the returned `RoundOutcome` carries the
/// history the caller must pass into the following call.
pub struct RoundGenerator<'a> {
    word_bank: &'a WordBank,
}

impl<'a> RoundGenerator<'a> {
    pub fn new(word_bank: &'a WordBank) -> Self {
        Self { word_bank }
    }

    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        players: &[Player],
        settings: &RoundSettings,
        history: &HistoryStore,
        rng: &mut R,
    ) -> Result<RoundOutcome, GameError> {
        validate_round(players, settings)?;
        self.word_bank
            .validate_selection(&settings.selected_categories)?;

        let round_number = history.round_counter.checked_add(1).ok_or_else(|| {
            GameError::invalid_configuration("round counter is exhausted")
        })?;
        let is_troll = troll_gate(settings.troll_mode, history, round_number, rng);
        debug!("Round {}: troll gate {}", round_number, is_troll);

        let (round, next_history) = if is_troll {
            self.troll_round(players, settings, history, round_number, rng)?
        } else {
            self.normal_round(players, settings, history, round_number, rng)?
        };

        let starting_player = players[rng.next_index(players.len())].id;

        info!(
            "Round {} generated: {}, {} impostor(s) among {} players",
            round_number,
            round
                .troll_scenario()
                .map_or("normal", |scenario| scenario.as_str()),
            round.impostors().count(),
            players.len()
        );

        Ok(RoundOutcome {
            round,
            history: next_history,
            starting_player,
        })
    }

    fn normal_round<R: RandomSource + ?Sized>(
        &self,
        players: &[Player],
        settings: &RoundSettings,
        history: &HistoryStore,
        round_number: u32,
        rng: &mut R,
    ) -> Result<(Round, HistoryStore), GameError> {
        let (category, pair) =
            self.word_bank
                .pick_word(&settings.selected_categories, &history.last_words, rng)?;

        let weight_of = |p: &Player| are_weight(history.stats_for(&p.id), round_number);
        for player in players {
            debug!("ARE weight for {}: {:.2}", player.name, weight_of(player));
        }

        let impostor_ids: HashSet<PlayerId> =
            select_impostors(players, settings.impostor_count, weight_of, rng)
                .into_iter()
                .map(|p| p.id)
                .collect();

        let impostor_view = if settings.hint_mode {
            format!("{}{}", HINT_PREFIX, pair.hint)
        } else {
            IMPOSTOR_MARKER.to_string()
        };

        let cards = players
            .iter()
            .map(|p| {
                let score = weight_of(p);
                if impostor_ids.contains(&p.id) {
                    GamePlayer::impostor(p, &category.name, &pair.civ, impostor_view.clone(), score)
                } else {
                    GamePlayer::civil(p, &category.name, &pair.civ, score)
                }
            })
            .collect();

        let mut next = history.clone();
        next.round_counter = round_number;
        for player in players {
            let stats = next.player_stats.entry(player.id).or_default();
            if impostor_ids.contains(&player.id) {
                *stats = stats.picked_in(round_number).ok_or_else(|| {
                    GameError::invalid_configuration(format!(
                        "impostor count of {} is exhausted",
                        player.name
                    ))
                })?;
            }
        }
        next.remember_word(pair.civ.clone());

        Ok((
            Round::Normal {
                category: category.name.clone(),
                real_word: pair.civ.clone(),
                players: cards,
            },
            next,
        ))
    }

    fn troll_round<R: RandomSource + ?Sized>(
        &self,
        players: &[Player],
        settings: &RoundSettings,
        history: &HistoryStore,
        round_number: u32,
        rng: &mut R,
    ) -> Result<(Round, HistoryStore), GameError> {
        let scenario = roll_scenario(rng);
        let (category, pair) =
            self.word_bank
                .pick_word(&settings.selected_categories, &history.last_words, rng)?;
        debug!("Troll scenario {} in category {}", scenario.as_str(), category.name);

        let cards = assign_troll_players(
            scenario,
            players,
            self.word_bank,
            category,
            &pair.civ,
            settings.hint_mode,
            rng,
        )?;

        // Stats and word recency stay untouched
        let mut next = history.clone();
        next.round_counter = round_number;
        next.last_troll_round = Some(round_number);

        Ok((
            Round::Troll {
                scenario,
                category: category.name.clone(),
                real_word: pair.civ.clone(),
                players: cards,
            },
            next,
        ))
    }
}

/// Checks the caller-side preconditions: at least three players with unique
/// ids and an impostor count in `1..players.len()`.
pub fn validate_round(players: &[Player], settings: &RoundSettings) -> Result<(), GameError> {
    if players.len() < MIN_PLAYERS {
        return Err(GameError::invalid_configuration(format!(
            "need at least {} players, got {}",
            MIN_PLAYERS,
            players.len()
        )));
    }

    if settings.impostor_count == 0 || settings.impostor_count >= players.len() {
        return Err(GameError::invalid_configuration(format!(
            "impostor count must be between 1 and {}, got {}",
            players.len() - 1,
            settings.impostor_count
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = players.iter().find(|p| !seen.insert(p.id)) {
        return Err(GameError::invalid_configuration(format!(
            "duplicate player id {}",
            dup.id
        )));
    }

    Ok(())
}
