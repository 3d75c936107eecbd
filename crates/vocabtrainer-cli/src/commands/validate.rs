//! The `vocabtrainer validate` command.

use std::path::PathBuf;

use anyhow::Result;

use vocabtrainer_core::parser::validate_vocabulary;

pub fn execute(vocabulary_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, path, vocabulary) =
        super::load_vocabulary(vocabulary_path, config_path.as_deref())?;

    println!("Vocabulary: {} ({} words)", path.display(), vocabulary.len());

    let warnings = validate_vocabulary(&vocabulary);
    for w in &warnings {
        let prefix = w
            .line
            .map(|line| format!("  [line {line}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Vocabulary valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
