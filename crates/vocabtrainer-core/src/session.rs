//! Training session orchestrator.
//!
//! A [`TrainingSession`] owns the vocabulary pool and runs fixed-length quiz
//! cycles over it. Answers come from an [`AnswerSource`] and every prompt and
//! outcome is reported to a [`QuizObserver`], so the session itself never
//! touches the terminal.

use std::io::BufRead;

use crate::error::TrainerError;
use crate::model::VocabularyEntry;
use crate::report::{self, StatisticsReport};
use crate::scoring;
use crate::selection::{SelectionPolicy, UsedSet};

/// Number of prompts per cycle when nothing else is configured.
pub const DEFAULT_CYCLE_LENGTH: usize = 3;

/// Supplies one raw answer per prompt.
pub trait AnswerSource {
    /// Read the answer for `entry`. `Ok(None)` means the input has ended.
    fn next_answer(&mut self, entry: &VocabularyEntry) -> std::io::Result<Option<String>>;
}

/// Answers read line by line from any buffered reader.
///
/// Only the line terminator is stripped; surrounding whitespace is part of
/// the answer.
pub struct BufReadAnswers<R> {
    reader: R,
}

impl<R: BufRead> BufReadAnswers<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one line, `None` at end of input.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> AnswerSource for BufReadAnswers<R> {
    fn next_answer(&mut self, _entry: &VocabularyEntry) -> std::io::Result<Option<String>> {
        self.read_line()
    }
}

/// Answers from a fixed list, handed out in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: std::collections::VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, _entry: &VocabularyEntry) -> std::io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

/// Answers with the correct translation every time.
pub struct PerfectRecall;

impl AnswerSource for PerfectRecall {
    fn next_answer(&mut self, entry: &VocabularyEntry) -> std::io::Result<Option<String>> {
        Ok(Some(entry.translation().to_string()))
    }
}

/// Result of a single quiz prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    /// Position of the entry in the pool when it was asked.
    pub index: usize,
    pub native_word: String,
    pub translation: String,
    pub answer: String,
    pub correct: bool,
}

/// Counts for one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub asked: usize,
    pub correct: usize,
    pub outcomes: Vec<QuizOutcome>,
}

/// Receives progress of a running cycle.
pub trait QuizObserver {
    fn on_cycle_start(&self, length: usize);
    fn on_prompt(&self, entry: &VocabularyEntry);
    fn on_outcome(&self, outcome: &QuizOutcome);
    fn on_cycle_complete(&self, summary: &CycleSummary);
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl QuizObserver for NoopObserver {
    fn on_cycle_start(&self, _: usize) {}
    fn on_prompt(&self, _: &VocabularyEntry) {}
    fn on_outcome(&self, _: &QuizOutcome) {}
    fn on_cycle_complete(&self, _: &CycleSummary) {}
}

/// Owns the vocabulary pool and runs training cycles over it.
pub struct TrainingSession<P> {
    entries: Vec<VocabularyEntry>,
    policy: P,
}

impl<P: SelectionPolicy> TrainingSession<P> {
    /// Build a session from `(native_word, translation)` pairs.
    pub fn new<I, W, T>(pairs: I, policy: P) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, translation)| VocabularyEntry::new(word, translation))
            .collect();
        Self::from_entries(entries, policy)
    }

    pub fn from_entries(entries: Vec<VocabularyEntry>, policy: P) -> Self {
        tracing::debug!(words = entries.len(), "training session created");
        Self { entries, policy }
    }

    /// Entries in their current pool order.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one cycle of `length` prompts, each on a different entry.
    ///
    /// Attempts answered before an error keep their statistics.
    pub fn run_cycle(
        &mut self,
        length: usize,
        answers: &mut dyn AnswerSource,
        observer: &dyn QuizObserver,
    ) -> Result<CycleSummary, TrainerError> {
        if self.entries.is_empty() {
            return Err(TrainerError::EmptyPool);
        }
        if length == 0 {
            return Err(TrainerError::InvalidCycleLength);
        }

        tracing::info!(length, pool_size = self.entries.len(), "starting training cycle");
        observer.on_cycle_start(length);

        let mut used = UsedSet::new(self.entries.len());
        let mut outcomes = Vec::with_capacity(length);

        for _ in 0..length {
            let index = self.policy.pick_next(&mut used).ok_or(
                TrainerError::SelectionExhausted {
                    requested: length,
                    pool_size: self.entries.len(),
                },
            )?;
            let pool_size = self.entries.len();
            let Some(entry) = self.entries.get_mut(index) else {
                tracing::warn!(
                    index,
                    pool_size,
                    "selection policy returned an index outside the pool"
                );
                return Err(TrainerError::InvalidSelection { index, pool_size });
            };

            observer.on_prompt(entry);
            let answer = answers
                .next_answer(entry)?
                .ok_or(TrainerError::InputClosed {
                    answered: outcomes.len(),
                    requested: length,
                })?;

            let correct = scoring::evaluate(entry, &answer);
            let outcome = QuizOutcome {
                index,
                native_word: entry.native_word().to_string(),
                translation: entry.translation().to_string(),
                answer,
                correct,
            };
            observer.on_outcome(&outcome);
            outcomes.push(outcome);
        }

        let summary = CycleSummary {
            asked: outcomes.len(),
            correct: outcomes.iter().filter(|o| o.correct).count(),
            outcomes,
        };
        tracing::info!(
            asked = summary.asked,
            correct = summary.correct,
            "training cycle complete"
        );
        observer.on_cycle_complete(&summary);
        Ok(summary)
    }

    /// Sort the pool into report order and return it.
    pub fn statistics_report(&mut self) -> &[VocabularyEntry] {
        report::sort_entries(&mut self.entries);
        &self.entries
    }

    /// Owned snapshot of the statistics in report order.
    pub fn statistics_snapshot(&mut self) -> StatisticsReport {
        StatisticsReport::from_ordered(self.statistics_report())
    }
}
