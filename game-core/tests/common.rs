#![allow(dead_code)]

use game_core::{RngSource, WordBank};
use game_types::{HistoryStore, Player, PlayerStats, RoundSettings};
use rand::rngs::StdRng;

/// A compact bank with known contents
pub fn create_test_bank() -> WordBank {
    WordBank::from_json(
        r#"[
            {"name": "Lugares", "pairs": [
                {"civ": "Playa", "hint": "Arena y olas"},
                {"civ": "Hospital", "hint": "Batas blancas"},
                {"civ": "Biblioteca", "hint": "Silencio"},
                {"civ": "Cine", "hint": "Palomitas"}
            ]},
            {"name": "Comida", "pairs": [
                {"civ": "Paella", "hint": "Sartén grande"},
                {"civ": "Tortilla", "hint": "Huevo y patata"},
                {"civ": "Gazpacho", "hint": "Sopa fría"}
            ]},
            {"name": "Animales", "pairs": [
                {"civ": "Jirafa", "hint": "Cuello largo"},
                {"civ": "Pulpo", "hint": "Ocho brazos"}
            ]}
        ]"#,
    )
    .expect("test bank is valid")
}

/// Creates `n` players named "Agente 1".."Agente n"
pub fn create_roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("Agente {}", i + 1))).collect()
}

pub fn create_settings(impostor_count: usize, hint_mode: bool, troll_mode: bool) -> RoundSettings {
    RoundSettings {
        impostor_count,
        hint_mode,
        troll_mode,
        selected_categories: Vec::new(),
    }
}

pub fn seeded(seed: u64) -> RngSource<StdRng> {
    RngSource::seeded(seed)
}

/// History where `player` was impostor in every one of the first `rounds` rounds
pub fn history_with_repeat_impostor(player: &Player, rounds: u32) -> HistoryStore {
    let mut history = HistoryStore::new();
    history.round_counter = rounds;
    history.player_stats.insert(
        player.id,
        PlayerStats {
            total_impostor_count: rounds,
            last_impostor_round: Some(rounds),
        },
    );
    history
}

/// Asserts the output mirrors the input roster one-to-one, in order
pub fn assert_mirrors_roster(players: &[Player], cards: &[game_types::GamePlayer]) {
    assert_eq!(players.len(), cards.len(), "Card count differs from roster");
    for (player, card) in players.iter().zip(cards) {
        assert_eq!(player.id, card.id);
        assert_eq!(player.name, card.name);
    }
}
