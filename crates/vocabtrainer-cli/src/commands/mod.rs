pub mod init;
pub mod train;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use vocabtrainer_core::config::{load_config_from, TrainerConfig};
use vocabtrainer_core::parser::{parse_vocabulary, Vocabulary};

/// Load the config and the vocabulary it points to, with the CLI path taking precedence.
pub fn load_vocabulary(
    vocabulary_path: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(TrainerConfig, PathBuf, Vocabulary)> {
    let config = load_config_from(config_path)?;
    let path = vocabulary_path.unwrap_or_else(|| config.vocabulary_path.clone());
    let vocabulary = parse_vocabulary(&path, &config.parse_options())?;
    Ok((config, path, vocabulary))
}
