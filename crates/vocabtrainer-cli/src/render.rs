//! Console rendering of prompts, outcomes, and statistics.

use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table};

use vocabtrainer_core::model::{VocabularyEntry, ASKED_COLUMN_WIDTH, WORD_COLUMN_WIDTH};
use vocabtrainer_core::report::StatisticsReport;
use vocabtrainer_core::session::{CycleSummary, QuizObserver, QuizOutcome};

/// Prints the quiz to stdout.
pub struct ConsoleObserver;

impl QuizObserver for ConsoleObserver {
    fn on_cycle_start(&self, length: usize) {
        println!("Starting a new training cycle with {length} tries ...");
    }

    fn on_prompt(&self, entry: &VocabularyEntry) {
        print!("{:<width$}= ", entry.native_word(), width = WORD_COLUMN_WIDTH);
        // prompt has no newline
        if let Err(e) = std::io::stdout().flush() {
            tracing::debug!("failed to flush prompt: {e}");
        }
    }

    fn on_outcome(&self, outcome: &QuizOutcome) {
        if outcome.correct {
            println!("OK!");
        } else {
            println!("No, {} = {}", outcome.native_word, outcome.translation);
        }
    }

    fn on_cycle_complete(&self, summary: &CycleSummary) {
        println!("{}/{} correct\n", summary.correct, summary.asked);
    }
}

/// Column labels for the statistics table.
pub struct Labels<'a> {
    pub word: &'a str,
    pub translation: &'a str,
}

/// Build the statistics table in report order.
pub fn statistics_table(report: &StatisticsReport, labels: &Labels<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![labels.word, labels.translation, "Asked", "Correct"]);

    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.native_word),
            Cell::new(&row.translation),
            Cell::new(row.asked).set_alignment(CellAlignment::Right),
            Cell::new(row.correct).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Fixed-width statistics, one entry per line in report order.
pub fn plain_statistics(entries: &[VocabularyEntry], labels: &Labels<'_>) -> String {
    let header = format!(
        "{:<word$} {:<word$} {:<asked$} Correct",
        labels.word,
        labels.translation,
        "Asked",
        word = WORD_COLUMN_WIDTH,
        asked = ASKED_COLUMN_WIDTH,
    );
    let mut out = format!("{header}\n{}\n", "-".repeat(header.chars().count()));
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// One-line totals shown under the table.
pub fn totals_line(report: &StatisticsReport) -> String {
    let totals = &report.totals;
    format!(
        "{} of {} words practiced, {}/{} correct ({:.1}%)",
        totals.practiced,
        totals.words,
        totals.correct,
        totals.asked,
        totals.accuracy() * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> StatisticsReport {
        let mut haus = VocabularyEntry::new("Haus", "house");
        haus.record_attempt("house");
        let mut auto = VocabularyEntry::new("Auto", "car");
        auto.record_attempt("bus");
        StatisticsReport::from_entries(&[auto, haus])
    }

    #[test]
    fn table_uses_labels_and_report_order() {
        let labels = Labels {
            word: "English",
            translation: "German",
        };
        let rendered = statistics_table(&sample_report(), &labels).to_string();
        assert!(rendered.contains("English"));
        assert!(rendered.contains("German"));
        let haus = rendered.find("Haus").unwrap();
        let auto = rendered.find("Auto").unwrap();
        assert!(haus < auto);
    }

    #[test]
    fn plain_statistics_uses_fixed_columns() {
        let mut haus = VocabularyEntry::new("Haus", "house");
        haus.record_attempt("house");
        let auto = VocabularyEntry::new("Auto", "car");
        let labels = Labels {
            word: "Word",
            translation: "Translation",
        };

        let rendered = plain_statistics(&[haus, auto], &labels);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Word       Translation Asked Correct");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
        assert_eq!(lines[2], "Haus       house      1     1");
        assert_eq!(lines[3], "Auto       car        0     0");
    }

    #[test]
    fn totals_line_formats_accuracy() {
        assert_eq!(
            totals_line(&sample_report()),
            "2 of 2 words practiced, 1/2 correct (50.0%)"
        );
    }
}
