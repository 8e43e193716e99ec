use anyhow::{Context, Result, anyhow};
use game_core::DEFAULT_PLAYER_NAMES;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub players: Vec<String>,
    pub impostor_count: usize,
    pub hint_mode: bool,
    pub troll_mode: bool,
    /// Empty means every category.
    pub categories: Vec<String>,
    pub rounds: u32,
    /// JSON word bank to load instead of the built-in one.
    pub words_file: Option<PathBuf>,
    /// Fixed seed for a reproducible session.
    pub rng_seed: Option<u64>,
    /// Print each round as JSON instead of the results summary.
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYER_NAMES.iter().map(|s| s.to_string()).collect(),
            impostor_count: 1,
            hint_mode: false,
            troll_mode: false,
            categories: Vec::new(),
            rounds: 5,
            words_file: None,
            rng_seed: None,
            json_output: false,
        }
    }
}

impl Config {
    /// Reads the configuration from environment variables.
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            players: lookup("IMPOSTOR_PLAYERS")
                .map(|raw| split_list(&raw))
                .unwrap_or(defaults.players),
            impostor_count: parse_or(&lookup, "IMPOSTOR_COUNT", defaults.impostor_count)?,
            hint_mode: parse_flag(&lookup, "HINT_MODE", defaults.hint_mode)?,
            troll_mode: parse_flag(&lookup, "TROLL_MODE", defaults.troll_mode)?,
            categories: lookup("CATEGORIES")
                .map(|raw| split_list(&raw))
                .unwrap_or(defaults.categories),
            rounds: parse_or(&lookup, "ROUNDS", defaults.rounds)?,
            words_file: lookup("WORDS_FILE").map(PathBuf::from),
            rng_seed: lookup("RNG_SEED")
                .map(|raw| {
                    raw.parse::<u64>()
                        .with_context(|| format!("Invalid RNG_SEED: {}", raw))
                })
                .transpose()?,
            json_output: parse_flag(&lookup, "JSON_OUTPUT", defaults.json_output)?,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", key, raw)),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1") | Some("true") | Some("yes") | Some("on") => Ok(true),
        Some("0") | Some("false") | Some("no") | Some("off") => Ok(false),
        Some(other) => Err(anyhow!("Invalid {}: {}", key, other)),
    }
}
