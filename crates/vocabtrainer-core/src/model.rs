//! Core data model types for vocabtrainer.
//!
//! A [`VocabularyEntry`] is one word/translation pair together with the
//! statistics gathered while training it.

use std::cmp::Ordering;
use std::fmt;

/// Width of the word and translation columns in the plain text layout.
pub const WORD_COLUMN_WIDTH: usize = 10;
/// Width of the asked column in the plain text layout.
pub const ASKED_COLUMN_WIDTH: usize = 5;

/// One word of the vocabulary and its training statistics.
///
/// The counters are private so that `correct_count <= asked_count` holds for
/// the whole lifetime of the entry; they only change through
/// [`VocabularyEntry::record_attempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    native_word: String,
    translation: String,
    asked_count: u32,
    correct_count: u32,
}

impl VocabularyEntry {
    /// Create a fresh entry with zeroed statistics.
    pub fn new(native_word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            native_word: native_word.into(),
            translation: translation.into(),
            asked_count: 0,
            correct_count: 0,
        }
    }

    pub fn native_word(&self) -> &str {
        &self.native_word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// How many times this entry has been asked.
    pub fn asked_count(&self) -> u32 {
        self.asked_count
    }

    /// How many of those answers were correct.
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Check a translation attempt and update the statistics.
    ///
    /// The comparison is exact and case-sensitive. An empty answer is a
    /// valid, incorrect attempt.
    pub fn record_attempt(&mut self, answer: &str) -> bool {
        self.asked_count += 1;
        if answer == self.translation {
            self.correct_count += 1;
            true
        } else {
            false
        }
    }

    /// Three-way comparison in report order.
    ///
    /// Entries with more correct answers come first. Ties are broken by the
    /// native word, lowercased and compared by code point.
    pub fn compare(&self, other: &VocabularyEntry) -> Ordering {
        other
            .correct_count
            .cmp(&self.correct_count)
            .then_with(|| compare_words(&self.native_word, &other.native_word))
    }

    /// Structured fields for a rendering collaborator.
    pub fn display(&self) -> EntryRow<'_> {
        EntryRow {
            native_word: &self.native_word,
            translation: &self.translation,
            asked: self.asked_count,
            correct: self.correct_count,
        }
    }
}

/// Compare two words by code point, ignoring case.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Borrowed view of an entry's fields, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRow<'a> {
    pub native_word: &'a str,
    pub translation: &'a str,
    pub asked: u32,
    pub correct: u32,
}

impl fmt::Display for EntryRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<word$} {:<word$} {:<asked$} {}",
            self.native_word,
            self.translation,
            self.asked,
            self.correct,
            word = WORD_COLUMN_WIDTH,
            asked = ASKED_COLUMN_WIDTH,
        )
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display().fmt(f)
    }
}
