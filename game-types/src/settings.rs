use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-round options chosen on the setup screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundSettings {
    pub impostor_count: usize,
    /// Impostors see a hint instead of the flat marker.
    pub hint_mode: bool,
    /// Allows troll events.
    pub troll_mode: bool,
    /// Empty means every category is playable.
    pub selected_categories: Vec<String>,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            impostor_count: 1,
            hint_mode: false,
            troll_mode: false,
            selected_categories: Vec::new(),
        }
    }
}

impl RoundSettings {
    pub fn toggle_category(&mut self, name: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == name) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(name.to_string());
        }
    }

    /// Selects every category, or clears the filter if all of them are already selected.
    pub fn toggle_all_categories<S: AsRef<str>>(&mut self, all: &[S]) {
        let all_selected = !all.is_empty()
            && all
                .iter()
                .all(|name| self.selected_categories.iter().any(|c| c == name.as_ref()));

        self.selected_categories = if all_selected {
            Vec::new()
        } else {
            all.iter().map(|name| name.as_ref().to_string()).collect()
        };
    }
}
