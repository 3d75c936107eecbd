//! Answer scoring.

use crate::model::VocabularyEntry;

/// Score `answer` against `entry`, updating the entry's statistics.
pub fn evaluate(entry: &mut VocabularyEntry, answer: &str) -> bool {
    let correct = entry.record_attempt(answer);
    tracing::debug!(
        word = entry.native_word(),
        correct,
        asked = entry.asked_count(),
        "scored answer"
    );
    correct
}
