//! The `vocabtrainer train` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use vocabtrainer_core::error::TrainerError;
use vocabtrainer_core::report::StatisticsReport;
use vocabtrainer_core::selection::{RandomSelection, SelectionPolicy};
use vocabtrainer_core::session::{BufReadAnswers, TrainingSession};

use crate::render::{plain_statistics, statistics_table, totals_line, ConsoleObserver, Labels};

/// Entries of the menu shown between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    AnotherTry,
    Statistics,
    Quit,
}

impl MenuOption {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::AnotherTry),
            "2" => Some(MenuOption::Statistics),
            "3" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

pub fn execute(
    vocabulary_path: Option<PathBuf>,
    cycle_length: Option<usize>,
    seed: Option<u64>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "table" | "json" | "plain"),
        "unknown statistics format: '{format}' (expected table, json or plain)"
    );

    let (config, path, vocabulary) =
        super::load_vocabulary(vocabulary_path, config_path.as_deref())?;
    for w in &vocabulary.skipped {
        eprintln!("Warning: {}: {}", path.display(), w.message);
    }

    let cycle_length = cycle_length.unwrap_or(config.cycle_length);
    anyhow::ensure!(cycle_length >= 1, "cycle length must be at least 1");
    if vocabulary.is_empty() {
        return Err(TrainerError::EmptyPool.into());
    }
    if cycle_length > vocabulary.len() {
        return Err(TrainerError::SelectionExhausted {
            requested: cycle_length,
            pool_size: vocabulary.len(),
        }
        .into());
    }

    tracing::info!(
        path = %path.display(),
        words = vocabulary.len(),
        cycle_length,
        seeded = seed.is_some(),
        "vocabulary loaded"
    );

    let policy = match seed {
        Some(seed) => RandomSelection::seeded(seed),
        None => RandomSelection::from_entropy(),
    };
    let mut session = TrainingSession::new(vocabulary.pairs, policy);
    let labels = Labels {
        word: &config.word_label,
        translation: &config.translation_label,
    };

    println!("*** Vocabulary Trainer ***\n");

    let stdin = std::io::stdin();
    let mut input = BufReadAnswers::new(stdin.lock());

    let mut option = MenuOption::AnotherTry;
    loop {
        match option {
            MenuOption::AnotherTry => {
                match session.run_cycle(cycle_length, &mut input, &ConsoleObserver) {
                    Ok(_) => {}
                    Err(TrainerError::InputClosed { .. }) => break,
                    Err(e) => return Err(e.into()),
                }
            }
            MenuOption::Statistics => print_statistics(&mut session, &labels, &format)?,
            MenuOption::Quit => break,
        }

        match read_option(&mut input)? {
            Some(next) => option = next,
            None => break,
        }
    }

    println!("\nBye!");
    Ok(())
}

/// Show the menu and read a valid choice. `None` once input has ended.
fn read_option<R: BufRead>(input: &mut BufReadAnswers<R>) -> Result<Option<MenuOption>> {
    println!("(1) Another try?");
    println!("(2) Print Statistics");
    println!("(3) Quit");
    print!("Please select an option: ");
    std::io::stdout().flush()?;

    loop {
        let Some(line) = input.read_line()? else {
            return Ok(None);
        };
        match MenuOption::parse(&line) {
            Some(option) => return Ok(Some(option)),
            None => println!("Invalid input, try again"),
        }
    }
}

fn print_statistics<P: SelectionPolicy>(
    session: &mut TrainingSession<P>,
    labels: &Labels<'_>,
    format: &str,
) -> Result<()> {
    let report: StatisticsReport = session.statistics_snapshot();

    match format {
        "json" => println!("{}", report.to_json()?),
        "plain" => {
            println!("\nTraining Statistics");
            // the snapshot left the pool in report order
            print!("{}", plain_statistics(session.entries(), labels));
            println!("{}\n", totals_line(&report));
        }
        _ => {
            println!("\nTraining Statistics");
            println!("{}", statistics_table(&report, labels));
            println!("{}\n", totals_line(&report));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_option_parsing() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::AnotherTry));
        assert_eq!(MenuOption::parse(" 2 "), Some(MenuOption::Statistics));
        assert_eq!(MenuOption::parse("3"), Some(MenuOption::Quit));
        assert_eq!(MenuOption::parse("4"), None);
        assert_eq!(MenuOption::parse(""), None);
        assert_eq!(MenuOption::parse("quit"), None);
    }
}
