//! Table configuration: seed, foundation rule strictness, and key layout.
//!
//! Loaded from JSON. Every field has a default, so `{}` is a valid config.
//!
//! ```
//! use rust_klondike::core::{PileSelector, TableConfig};
//!
//! let config = TableConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.keymap.resolve('q'), Some(PileSelector::Stock));
//! assert_eq!(config.keymap.resolve('j'), Some(PileSelector::Tableau(6)));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::GameRng;
use super::selector::PileSelector;

/// Errors raised while loading a [`TableConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("key layout must have exactly {expected} keys, got {actual}")]
    LayoutLength { expected: usize, actual: usize },

    #[error("key {0:?} is bound to more than one pile")]
    DuplicateKey(char),
}

/// Table configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Deal seed. `None` draws a fresh random seed at deal time.
    pub seed: Option<u64>,

    /// Require an empty foundation's Ace to match the suit at the
    /// foundation's index. Off by default: any Ace opens any foundation.
    pub strict_foundation_suits: bool,

    /// Keys that name each pile.
    pub keymap: KeyMap,
}

impl TableConfig {
    /// Set a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable strict foundation suits.
    #[must_use]
    pub fn with_strict_foundation_suits(mut self, strict: bool) -> Self {
        self.strict_foundation_suits = strict;
        self
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The RNG to deal with: seeded when `seed` is set, random otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

/// Mapping from input characters to piles.
///
/// Stored as a 13-character layout string in [`PileSelector::ALL`] order:
/// stock, talon, four foundations, seven tableau piles. The default is
/// `"qwertyasdfghj"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyMap {
    keys: [char; 13],
}

impl KeyMap {
    pub const DEFAULT_LAYOUT: &'static str = "qwertyasdfghj";

    /// Build a key map from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = layout.chars().collect();
        let keys: [char; 13] = chars
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::LayoutLength {
                expected: PileSelector::ALL.len(),
                actual: chars.len(),
            })?;

        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }

        Ok(Self { keys })
    }

    /// Resolve a key to the pile it names, if any.
    #[must_use]
    pub fn resolve(&self, key: char) -> Option<PileSelector> {
        self.keys
            .iter()
            .position(|&k| k == key)
            .and_then(PileSelector::from_index)
    }

    /// The key bound to a pile.
    #[must_use]
    pub fn key_for(&self, pile: PileSelector) -> char {
        self.keys[pile.index()]
    }

    /// The layout string.
    #[must_use]
    pub fn layout(&self) -> String {
        self.keys.iter().collect()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut keys = [' '; 13];
        for (slot, key) in keys.iter_mut().zip(Self::DEFAULT_LAYOUT.chars()) {
            *slot = key;
        }
        Self { keys }
    }
}

impl TryFrom<String> for KeyMap {
    type Error = ConfigError;

    fn try_from(layout: String) -> Result<Self, Self::Error> {
        Self::from_layout(&layout)
    }
}

impl From<KeyMap> for String {
    fn from(map: KeyMap) -> String {
        map.layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let map = KeyMap::default();
        assert_eq!(map.layout(), "qwertyasdfghj");
        assert_eq!(map.resolve('w'), Some(PileSelector::Talon));
        assert_eq!(map.resolve('e'), Some(PileSelector::Foundation(0)));
        assert_eq!(map.resolve('y'), Some(PileSelector::Foundation(3)));
        assert_eq!(map.resolve('a'), Some(PileSelector::Tableau(0)));
        assert_eq!(map.resolve('z'), None);
        assert_eq!(map.key_for(PileSelector::Tableau(3)), 'f');
    }

    #[test]
    fn test_layout_errors() {
        assert!(matches!(
            KeyMap::from_layout("qwe"),
            Err(ConfigError::LayoutLength {
                expected: 13,
                actual: 3,
            })
        ));
        assert!(matches!(
            KeyMap::from_layout("qwertyasdfghq"),
            Err(ConfigError::DuplicateKey('q'))
        ));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TableConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert!(!config.strict_foundation_suits);
    }

    #[test]
    fn test_custom_keymap_from_json() {
        let json = r#"{ "keymap": "1234567890abc", "strict_foundation_suits": true }"#;
        let config = TableConfig::from_json_str(json).unwrap();
        assert!(config.strict_foundation_suits);
        assert_eq!(config.keymap.resolve('1'), Some(PileSelector::Stock));
        assert_eq!(config.keymap.resolve('c'), Some(PileSelector::Tableau(6)));
        assert_eq!(config.keymap.resolve('q'), None);
    }

    #[test]
    fn test_bad_keymap_is_parse_error() {
        let result = TableConfig::from_json_str(r#"{ "keymap": "abc" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = TableConfig::default().with_seed(99).with_strict_foundation_suits(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"qwertyasdfghj\""));
        assert_eq!(TableConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_seeded_rng() {
        let config = TableConfig::default().with_seed(5);
        assert_eq!(config.rng().seed(), 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TableConfig::load("/nonexistent/klondike.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
