//! Command-line interface for tex2anki.
//!
//! Reads a LaTeX file, extracts `\newglossaryentry` and `\newacronym`
//! definitions, and writes them as a two-column CSV ready for Anki import.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use glossary_core::{parse_entries, write_csv_file};

#[derive(Parser)]
#[command(
    name = "tex2anki",
    version,
    about = "Convert LaTeX glossary entries and acronyms to Anki flashcards",
    after_help = "Examples:\n    tex2anki glossary.tex\n    tex2anki glossary.tex flashcards.csv"
)]
struct Cli {
    /// Input LaTeX file (.tex)
    input_file: PathBuf,

    /// Output CSV file (defaults to the input path with a .csv extension)
    output_file: Option<PathBuf>,

    /// List each extracted entry after writing
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if !cli.input_file.exists() {
        eprintln!(
            "Error: Input file '{}' not found.",
            cli.input_file.display()
        );
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output_path = cli
        .output_file
        .clone()
        .unwrap_or_else(|| cli.input_file.with_extension("csv"));

    println!("Reading LaTeX file: {}", cli.input_file.display());
    let source = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;

    println!("Parsing glossary entries and acronyms...");
    let entries = parse_entries(&source);

    if entries.is_empty() {
        println!("Warning: No glossary entries or acronyms found in the input file.");
        println!("Make sure the file contains \\newglossaryentry or \\newacronym commands.");
        process::exit(1);
    }

    println!("Writing {} entries to: {}", entries.len(), output_path.display());
    write_csv_file(&entries, &output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if cli.verbose {
        println!("\nProcessed entries:");
        for (i, entry) in entries.iter().enumerate() {
            println!("{:2}. {}", i + 1, entry.name);
        }
    }

    println!("\nSuccess! Created Anki flashcard file: {}", output_path.display());
    Ok(())
}
