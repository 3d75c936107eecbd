//! The `vocabtrainer init` command.

use std::path::Path;

use anyhow::Result;

use vocabtrainer_core::config::LOCAL_CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    std::fs::create_dir_all("data")?;
    let vocabulary_path = Path::new("data/translations.csv");
    if vocabulary_path.exists() {
        println!("data/translations.csv already exists, skipping.");
    } else {
        std::fs::write(vocabulary_path, SAMPLE_VOCABULARY)?;
        println!("Created data/translations.csv");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to data/translations.csv");
    println!("  2. Run: vocabtrainer validate");
    println!("  3. Run: vocabtrainer train");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# vocabtrainer configuration

vocabulary_path = "data/translations.csv"
cycle_length = 3
separator = ";"
has_header = true
word_label = "English"
translation_label = "German"
"#;

const SAMPLE_VOCABULARY: &str = "English;German
house;Haus
car;Auto
tree;Baum
dog;Hund
cat;Katze
book;Buch
water;Wasser
bread;Brot
";
