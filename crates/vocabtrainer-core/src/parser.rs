//! Vocabulary file parser.
//!
//! Loads word/translation pairs from delimited text files (one pair per
//! line, `;`-separated by default, first line is a header) or from TOML
//! files with a `[[words]]` array, and validates them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// How delimited text files are read.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field separator between word and translation.
    pub separator: char,
    /// Whether the first line is a header to skip.
    pub has_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: ';',
            has_header: true,
        }
    }
}

/// A loaded vocabulary, in file order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub pairs: Vec<(String, String)>,
    /// Problems found while reading that did not stop the load.
    pub skipped: Vec<ValidationWarning>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct TomlVocabularyFile {
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    word: String,
    translation: String,
}

/// Parse a vocabulary file. Files ending in `.toml` are read as TOML,
/// everything else as delimited text.
pub fn parse_vocabulary(path: &Path, options: &ParseOptions) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        parse_vocabulary_toml(&content, path)
    } else {
        parse_vocabulary_str(&content, path, options)
    }
}

/// Parse delimited text (useful for testing).
pub fn parse_vocabulary_str(
    content: &str,
    source_path: &Path,
    options: &ParseOptions,
) -> Result<Vocabulary> {
    let mut vocabulary = Vocabulary::default();
    let skip = usize::from(options.has_header);

    for (number, line) in content.lines().enumerate().skip(skip) {
        let line_number = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(options.separator).map(str::trim);
        match (fields.next(), fields.next()) {
            (Some(word), Some(translation)) if !word.is_empty() && !translation.is_empty() => {
                vocabulary
                    .pairs
                    .push((word.to_string(), translation.to_string()));
            }
            _ => {
                tracing::warn!(
                    "skipping {}:{line_number}: expected `word{}translation`",
                    source_path.display(),
                    options.separator
                );
                vocabulary.skipped.push(ValidationWarning {
                    line: Some(line_number),
                    message: format!("malformed line: {line:?}"),
                });
            }
        }
    }

    tracing::debug!(
        words = vocabulary.len(),
        skipped = vocabulary.skipped.len(),
        "loaded {}",
        source_path.display()
    );
    Ok(vocabulary)
}

/// Parse a TOML vocabulary (useful for testing).
pub fn parse_vocabulary_toml(content: &str, source_path: &Path) -> Result<Vocabulary> {
    let parsed: TomlVocabularyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut vocabulary = Vocabulary::default();
    for (number, entry) in parsed.words.iter().enumerate() {
        let word = entry.word.trim();
        let translation = entry.translation.trim();
        if word.is_empty() || translation.is_empty() {
            tracing::warn!(
                "skipping {}: [[words]] entry {} has an empty word or translation",
                source_path.display(),
                number + 1
            );
            vocabulary.skipped.push(ValidationWarning {
                line: None,
                message: format!("empty word or translation: {word:?} = {translation:?}"),
            });
            continue;
        }
        vocabulary.pairs.push((word.to_string(), translation.to_string()));
    }

    Ok(vocabulary)
}

/// A warning from vocabulary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Line number in the source file (if known).
    pub line: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a vocabulary for common issues.
pub fn validate_vocabulary(vocabulary: &Vocabulary) -> Vec<ValidationWarning> {
    let mut warnings = vocabulary.skipped.clone();

    if vocabulary.is_empty() {
        warnings.push(ValidationWarning {
            line: None,
            message: "vocabulary contains no words".into(),
        });
    }

    // Duplicate words, ignoring case
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (word, _) in &vocabulary.pairs {
        if let Some(first) = seen.insert(word.to_lowercase(), word) {
            warnings.push(ValidationWarning {
                line: None,
                message: format!("duplicate word: {word} (also listed as {first})"),
            });
        }
    }

    warnings
}
