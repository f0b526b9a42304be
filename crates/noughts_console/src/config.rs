//! Game configuration from defaults, a TOML file, and the command line.

use crate::cli::Cli;
use crate::symbols::Symbols;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Resolved game settings.
///
/// Every field defaults to the classic game: a 3x3 board, players `X` and
/// `O`, a space for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of one board side.
    #[serde(default = "default_size")]
    size: usize,

    /// One glyph per player, in turn order.
    #[serde(default = "default_symbols")]
    symbols: String,

    /// Glyph shown for an empty cell.
    #[serde(default = "default_empty")]
    empty: char,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_symbols() -> String {
    "XO".to_string()
}

#[instrument]
fn default_empty() -> char {
    ' '
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            symbols: default_symbols(),
            empty: default_empty(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves settings with command line over file over defaults.
    ///
    /// A missing file means defaults; an unreadable or unparsable one is an
    /// error. The result is validated before being returned.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            debug!(path = %cli.config.display(), "No config file, using defaults");
            Self::default()
        };
        if let Some(size) = cli.size {
            config.size = size;
        }
        if let Some(symbols) = &cli.symbols {
            config.symbols = symbols.clone();
        }
        config.validate()?;
        info!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Checks that the settings describe a playable game.
    ///
    /// The board side must be in `1..=100`, the roster needs two to 255
    /// distinct glyphs, and the empty glyph may not double as a player
    /// glyph.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > 100 {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and 100, got {}",
                self.size
            )));
        }
        let roster: Vec<char> = self.symbols.chars().collect();
        if roster.len() < 2 {
            return Err(ConfigError::new(
                "At least two player symbols are required".to_string(),
            ));
        }
        if roster.len() > usize::from(u8::MAX) {
            return Err(ConfigError::new(
                "At most 255 player symbols are supported".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if !roster.iter().all(|glyph| seen.insert(glyph)) {
            return Err(ConfigError::new("Player symbols must be distinct".to_string()));
        }
        if roster.contains(&self.empty) {
            return Err(ConfigError::new(format!(
                "Empty glyph {:?} collides with a player symbol",
                self.empty
            )));
        }
        Ok(())
    }

    /// The glyph table these settings describe.
    pub fn to_symbols(&self) -> Symbols {
        Symbols::from_roster(self.empty, &self.symbols)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
