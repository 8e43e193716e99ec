use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordPair {
    /// The word civilians see.
    pub civ: String,
    /// Legacy impostor word, kept for content compatibility. Unused by round generation.
    #[serde(default)]
    pub imp: String,
    /// Describes the civilian word without stating it.
    pub hint: String,
}

impl WordPair {
    pub fn new(civ: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            civ: civ.into(),
            imp: String::new(),
            hint: hint.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub pairs: Vec<WordPair>,
}
