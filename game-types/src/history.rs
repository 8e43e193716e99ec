use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::{PlayerId, PlayerStats};

/// How many recent civilian words are remembered for recency avoidance.
pub const RECENT_WORDS_CAPACITY: usize = 15;

/// Session-lifetime state threaded through every round generation.
///
/// The caller owns this value. The generator never mutates it in place;
/// each round returns a fresh snapshot that replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryStore {
    /// Incremented once per generated round, normal or troll.
    pub round_counter: u32,
    /// Most recent civilian words, newest first, at most `RECENT_WORDS_CAPACITY` long.
    pub last_words: Vec<String>,
    pub player_stats: HashMap<PlayerId, PlayerStats>,
    /// Round of the last troll event, `None` if none happened this session.
    pub last_troll_round: Option<u32>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats_for(&self, player_id: &PlayerId) -> Option<&PlayerStats> {
        self.player_stats.get(player_id)
    }

    pub fn was_recently_used(&self, word: &str) -> bool {
        self.last_words.iter().any(|w| w == word)
    }

    /// Pushes `word` to the front of the recency list and truncates it.
    pub fn remember_word(&mut self, word: impl Into<String>) {
        self.last_words.insert(0, word.into());
        self.last_words.truncate(RECENT_WORDS_CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_word_keeps_newest_first() {
        let mut history = HistoryStore::new();
        history.remember_word("Playa");
        history.remember_word("Montaña");

        assert_eq!(history.last_words, vec!["Montaña", "Playa"]);
        assert!(history.was_recently_used("Playa"));
        assert!(!history.was_recently_used("Desierto"));
    }

    #[test]
    fn test_remember_word_caps_at_capacity() {
        let mut history = HistoryStore::new();
        for i in 0..40 {
            history.remember_word(format!("word-{}", i));
        }

        assert_eq!(history.last_words.len(), RECENT_WORDS_CAPACITY);
        assert_eq!(history.last_words[0], "word-39");
        assert_eq!(history.last_words[RECENT_WORDS_CAPACITY - 1], "word-25");
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = HistoryStore::new();
        assert_eq!(history.round_counter, 0);
        assert!(history.last_words.is_empty());
        assert!(history.player_stats.is_empty());
        assert_eq!(history.last_troll_round, None);
    }
}
