//! Trainer configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::parser::ParseOptions;
use crate::session::DEFAULT_CYCLE_LENGTH;

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "vocabtrainer.toml";

/// Environment variable overriding the cycle length.
pub const CYCLE_LENGTH_ENV: &str = "VOCABTRAINER_CYCLE_LENGTH";

/// Top-level vocabtrainer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Vocabulary file to train with.
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: PathBuf,
    /// Prompts per training cycle.
    #[serde(default = "default_cycle_length")]
    pub cycle_length: usize,
    /// Field separator for delimited vocabulary files.
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Whether delimited vocabulary files start with a header line.
    #[serde(default = "default_true")]
    pub has_header: bool,
    /// Column label for the native word in statistics.
    #[serde(default = "default_word_label")]
    pub word_label: String,
    /// Column label for the translation in statistics.
    #[serde(default = "default_translation_label")]
    pub translation_label: String,
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("data/translations.csv")
}
fn default_cycle_length() -> usize {
    DEFAULT_CYCLE_LENGTH
}
fn default_separator() -> char {
    ';'
}
fn default_true() -> bool {
    true
}
fn default_word_label() -> String {
    "Word".to_string()
}
fn default_translation_label() -> String {
    "Translation".to_string()
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: default_vocabulary_path(),
            cycle_length: default_cycle_length(),
            separator: default_separator(),
            has_header: true,
            word_label: default_word_label(),
            translation_label: default_translation_label(),
        }
    }
}

impl TrainerConfig {
    /// Parser settings derived from this config.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            separator: self.separator,
            has_header: self.has_header,
        }
    }

    /// Reject values no training run can work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.cycle_length >= 1, "cycle_length must be at least 1");
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `vocabtrainer.toml` in the current directory
/// 2. `~/.config/vocabtrainer/config.toml`
///
/// `VOCABTRAINER_CYCLE_LENGTH` overrides the cycle length.
pub fn load_config() -> Result<TrainerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TrainerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("reading config from {}", path.display());
            parse_config(&path)?
        }
        None => TrainerConfig::default(),
    };

    if let Ok(value) = std::env::var(CYCLE_LENGTH_ENV) {
        config.cycle_length = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {CYCLE_LENGTH_ENV}: '{value}'"))?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_config(path: &Path) -> Result<TrainerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<TrainerConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vocabtrainer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TrainerConfig::default();
        assert_eq!(config.cycle_length, 3);
        assert_eq!(config.separator, ';');
        assert!(config.has_header);
        assert_eq!(config.word_label, "Word");
    }

    #[test]
    fn parse_partial_config() {
        let config: TrainerConfig = toml::from_str(
            r#"
vocabulary_path = "lists/german.csv"
cycle_length = 5
word_label = "English"
translation_label = "German"
"#,
        )
        .unwrap();
        assert_eq!(config.vocabulary_path, PathBuf::from("lists/german.csv"));
        assert_eq!(config.cycle_length, 5);
        assert_eq!(config.separator, ';');
        assert_eq!(config.translation_label, "German");
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("definitely/missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "separator = \",\"\nhas_header = false\n").unwrap();

        let config = parse_config(&path).unwrap();
        let options = config.parse_options();
        assert_eq!(options.separator, ',');
        assert!(!options.has_header);
    }

    #[test]
    fn zero_cycle_length_is_invalid() {
        let config = TrainerConfig {
            cycle_length: 0,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
