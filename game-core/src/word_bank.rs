use game_types::{Category, GameError, WordPair};
use std::path::Path;
use tracing::{debug, warn};

use crate::RandomSource;

static BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");

/// Static mapping from category name to word pairs, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The Spanish word bank shipped with the game.
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_json(BUILTIN_CATEGORIES)
    }

    /// Parse a bank from a JSON array of `{ name, pairs: [{ civ, imp?, hint }] }`.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let categories: Vec<Category> =
            serde_json::from_str(json).map_err(|e| GameError::WordBankFormat {
                message: e.to_string(),
            })?;

        if let Some(blank) = categories.iter().find(|c| c.name.trim().is_empty()) {
            return Err(GameError::WordBankFormat {
                message: format!("category with blank name ({} pairs)", blank.pairs.len()),
            });
        }

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(GameError::WordBankFormat {
                    message: format!("duplicate category {}", category.name),
                });
            }
        }

        Ok(Self::new(categories))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GameError::WordBankFormat {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.pairs.len()).sum()
    }

    /// Rejects selected names the bank does not know. An empty selection is always valid.
    pub fn validate_selection(&self, selected: &[String]) -> Result<(), GameError> {
        if self.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        match selected.iter().find(|name| self.category(name).is_none()) {
            Some(unknown) => Err(GameError::UnknownCategory {
                category: unknown.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Choose the round's category and word pair.
    ///
    /// An empty `selected` list means every category is a candidate. Words in
    /// `recent` are avoided unless that would leave the category empty.
    pub fn pick_word<R: RandomSource + ?Sized>(
        &self,
        selected: &[String],
        recent: &[String],
        rng: &mut R,
    ) -> Result<(&Category, &WordPair), GameError> {
        self.validate_selection(selected)?;

        let category = if selected.is_empty() {
            &self.categories[rng.next_index(self.categories.len())]
        } else {
            let name = &selected[rng.next_index(selected.len())];
            self.category(name)
                .ok_or_else(|| GameError::UnknownCategory {
                    category: name.clone(),
                })?
        };

        if category.pairs.is_empty() {
            return Err(GameError::EmptyCategory {
                category: category.name.clone(),
            });
        }

        let fresh: Vec<&WordPair> = category
            .pairs
            .iter()
            .filter(|pair| !recent.contains(&pair.civ))
            .collect();

        let pair = if fresh.is_empty() {
            warn!(
                "Every word in {} was used recently, ignoring recency filter",
                category.name
            );
            &category.pairs[rng.next_index(category.pairs.len())]
        } else {
            fresh[rng.next_index(fresh.len())]
        };

        debug!("Picked word '{}' from category {}", pair.civ, category.name);
        Ok((category, pair))
    }

    /// A uniformly chosen category other than `exclude`, if the bank has one.
    pub fn random_other_category<R: RandomSource + ?Sized>(
        &self,
        exclude: &str,
        rng: &mut R,
    ) -> Option<&Category> {
        let others: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.name != exclude && !c.pairs.is_empty())
            .collect();

        if others.is_empty() {
            None
        } else {
            Some(others[rng.next_index(others.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    fn small_bank() -> WordBank {
        WordBank::from_json(
            r#"[
                {"name": "Lugares", "pairs": [
                    {"civ": "Playa", "hint": "Arena"},
                    {"civ": "Montaña", "hint": "Cumbre"},
                    {"civ": "Desierto", "hint": "Dunas"}
                ]},
                {"name": "Comida", "pairs": [
                    {"civ": "Paella", "imp": "Arroz", "hint": "Sartén"}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_bank_loads() {
        let bank = WordBank::builtin().unwrap();
        assert!(bank.len() >= 5);
        for category in bank.categories() {
            assert!(
                category.pairs.len() >= 5,
                "Category {} is too small",
                category.name
            );
            for pair in &category.pairs {
                assert!(!pair.hint.is_empty(), "{} has no hint", pair.civ);
            }
        }
    }

    #[test]
    fn test_imp_field_is_optional() {
        let bank = small_bank();
        assert_eq!(bank.category("Lugares").unwrap().pairs[0].imp, "");
        assert_eq!(bank.category("Comida").unwrap().pairs[0].imp, "Arroz");
        assert_eq!(bank.word_count(), 4);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = WordBank::from_json("{ not json");
        assert!(matches!(result, Err(GameError::WordBankFormat { .. })));
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let result = WordBank::from_json(
            r#"[{"name": "A", "pairs": []}, {"name": "A", "pairs": []}]"#,
        );
        assert!(matches!(result, Err(GameError::WordBankFormat { .. })));
    }

    #[test]
    fn test_empty_selection_means_all_categories() {
        let bank = small_bank();
        // 0.99 lands on the last category when all are candidates
        let mut rng = ScriptedSource::constant(0.99);
        let (category, pair) = bank.pick_word(&[], &[], &mut rng).unwrap();
        assert_eq!(category.name, "Comida");
        assert_eq!(pair.civ, "Paella");
    }

    #[test]
    fn test_selection_restricts_categories() {
        let bank = small_bank();
        let selected = vec!["Lugares".to_string()];
        for step in 0..10 {
            let mut rng = ScriptedSource::constant(step as f64 / 10.0);
            let (category, _) = bank.pick_word(&selected, &[], &mut rng).unwrap();
            assert_eq!(category.name, "Lugares");
        }
    }

    #[test]
    fn test_recent_words_are_avoided() {
        let bank = small_bank();
        let selected = vec!["Lugares".to_string()];
        let recent = vec!["Playa".to_string(), "Montaña".to_string()];
        for step in 0..10 {
            let mut rng = ScriptedSource::constant(step as f64 / 10.0);
            let (_, pair) = bank.pick_word(&selected, &recent, &mut rng).unwrap();
            assert_eq!(pair.civ, "Desierto");
        }
    }

    #[test]
    fn test_exhausted_category_falls_back_to_full_list() {
        let bank = small_bank();
        let selected = vec!["Comida".to_string()];
        let recent = vec!["Paella".to_string()];
        let mut rng = ScriptedSource::constant(0.5);
        let (_, pair) = bank.pick_word(&selected, &recent, &mut rng).unwrap();
        assert_eq!(pair.civ, "Paella");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let bank = small_bank();
        let selected = vec!["Planetas".to_string()];
        let mut rng = ScriptedSource::constant(0.0);
        let result = bank.pick_word(&selected, &[], &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GameError::UnknownCategory {
                category: "Planetas".to_string()
            }
        );
    }

    #[test]
    fn test_empty_bank() {
        let bank = WordBank::new(Vec::new());
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(
            bank.pick_word(&[], &[], &mut rng).unwrap_err(),
            GameError::EmptyWordBank
        );
    }

    #[test]
    fn test_empty_category() {
        let bank = WordBank::from_json(r#"[{"name": "Vacía", "pairs": []}]"#).unwrap();
        let mut rng = ScriptedSource::constant(0.0);
        assert!(matches!(
            bank.pick_word(&[], &[], &mut rng),
            Err(GameError::EmptyCategory { .. })
        ));
    }

    #[test]
    fn test_random_other_category_excludes_current() {
        let bank = small_bank();
        let mut rng = ScriptedSource::constant(0.0);
        let other = bank.random_other_category("Lugares", &mut rng).unwrap();
        assert_eq!(other.name, "Comida");

        let single =
            WordBank::from_json(r#"[{"name": "Solo", "pairs": [{"civ": "A", "hint": "a"}]}]"#)
                .unwrap();
        assert!(single.random_other_category("Solo", &mut rng).is_none());
    }
}
