//! Statistics ordering and report snapshots.

use serde::{Deserialize, Serialize};

use crate::model::VocabularyEntry;

/// Sort entries in place into report order.
///
/// Uses a stable sort, so entries that compare equal keep their relative
/// pool order.
pub fn sort_entries(entries: &mut [VocabularyEntry]) {
    entries.sort_by(VocabularyEntry::compare);
}

/// Report order as references to the original entries.
pub fn sorted_view(entries: &[VocabularyEntry]) -> Vec<&VocabularyEntry> {
    let mut view: Vec<&VocabularyEntry> = entries.iter().collect();
    view.sort_by(|a, b| a.compare(b));
    view
}

/// One row of a statistics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsRow {
    pub native_word: String,
    pub translation: String,
    pub asked: u32,
    pub correct: u32,
}

/// Owned snapshot of the statistics, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub rows: Vec<StatisticsRow>,
    pub totals: Totals,
}

/// Totals over all entries of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of words in the vocabulary.
    pub words: usize,
    /// Number of words asked at least once.
    pub practiced: usize,
    pub asked: u64,
    pub correct: u64,
}

impl Totals {
    /// Share of correct answers, `0.0` when nothing was asked yet.
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 / self.asked as f64
        }
    }
}

impl StatisticsReport {
    /// Build a report from entries that are already in report order.
    pub fn from_ordered<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a VocabularyEntry>,
    {
        let mut totals = Totals {
            words: 0,
            practiced: 0,
            asked: 0,
            correct: 0,
        };
        let rows = entries
            .into_iter()
            .map(|entry| {
                let row = entry.display();
                totals.words += 1;
                if row.asked > 0 {
                    totals.practiced += 1;
                }
                totals.asked += u64::from(row.asked);
                totals.correct += u64::from(row.correct);
                StatisticsRow {
                    native_word: row.native_word.to_string(),
                    translation: row.translation.to_string(),
                    asked: row.asked,
                    correct: row.correct,
                }
            })
            .collect();
        Self { rows, totals }
    }

    /// Build a report from entries in any order.
    pub fn from_entries(entries: &[VocabularyEntry]) -> Self {
        Self::from_ordered(sorted_view(entries))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
