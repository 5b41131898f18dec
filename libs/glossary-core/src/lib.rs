//! Core library for converting LaTeX glossaries into Anki flashcards.
//!
//! Provides:
//! - Brace-balanced scanning over LaTeX source
//! - Extractors for `\newglossaryentry` and `\newacronym` commands
//! - Inline markup cleanup (bold, emphasis, ellipses, bare commands)
//! - CSV output in the two-field format Anki imports

pub mod error;
pub mod export;
pub mod normalize;
pub mod parser;
pub mod scan;
pub mod types;

pub use error::{ExportError, Result};
pub use export::{write_csv, write_csv_file};
pub use normalize::clean_text;
pub use parser::{parse_acronym_entries, parse_entries, parse_glossary_entries};
pub use scan::{find_matching_brace, find_open_brace};
pub use types::Entry;
