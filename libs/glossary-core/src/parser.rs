//! Extractors for glossary and acronym commands in LaTeX source.
//!
//! # Format
//! ```latex
//! \newglossaryentry{rust}{
//!     name={Rust},
//!     description={A systems programming language}
//! }
//! \newacronym{cpu}{CPU}{Central Processing Unit}
//! ```

use crate::normalize::clean_text;
use crate::scan::{find_matching_brace, find_open_brace};
use crate::types::Entry;
use once_cell::sync::Lazy;
use regex::Regex;

const GLOSSARY_COMMAND: &str = r"\newglossaryentry";
const ACRONYM_COMMAND: &str = r"\newacronym";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"name\s*=\s*\{([^}]*)\}|name\s*=\s*([^,}]+)").unwrap());
static DESC_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"description\s*=\s*\{").unwrap());

/// Extract every entry in the source: glossary terms first, then acronyms.
///
/// Each group keeps source order. Malformed occurrences contribute nothing.
pub fn parse_entries(source: &str) -> Vec<Entry> {
    let mut entries = parse_glossary_entries(source);
    entries.extend(parse_acronym_entries(source));
    entries
}

/// Extract `\newglossaryentry{key}{params}` definitions.
///
/// A single forward pass. On a malformed occurrence the cursor resumes just
/// past the command name; after a parsed parameter block it resumes past the
/// block's closing brace.
pub fn parse_glossary_entries(source: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find(GLOSSARY_COMMAND) {
        let start = pos + found;
        pos = start + GLOSSARY_COMMAND.len();

        let Some(key_open) = find_open_brace(source, start) else {
            continue;
        };
        let Some(key_close) = find_matching_brace(source, key_open) else {
            continue;
        };
        let key = source[key_open + 1..key_close].trim();

        let Some(params_open) = find_open_brace(source, key_close + 1) else {
            continue;
        };
        let Some(params_close) = find_matching_brace(source, params_open) else {
            continue;
        };
        let params = &source[params_open + 1..params_close];

        if let Some(entry) = entry_from_params(key, params) {
            entries.push(entry);
        }
        pos = params_close + 1;
    }

    entries
}

/// Resolve the name and description fields of one parameter block.
///
/// The name falls back to the key when the field is absent or empty. The
/// description value is a balanced brace span, so it may itself contain
/// braces. Emptiness is checked on the raw values before normalization.
fn entry_from_params(key: &str, params: &str) -> Option<Entry> {
    let name = NAME_RE
        .captures(params)
        .and_then(|caps| caps.get(1).or(caps.get(2)))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(key);

    let description = DESC_OPEN_RE.find(params).and_then(|m| {
        let open = m.end() - 1;
        let close = find_matching_brace(params, open)?;
        Some(params[open + 1..close].trim())
    })?;

    if name.is_empty() || description.is_empty() {
        return None;
    }

    Some(Entry {
        name: clean_text(name),
        description: clean_text(description),
    })
}

/// Extract `\newacronym{key}{short}{long}` definitions.
///
/// The key only anchors the scan; the short form becomes the entry name and
/// the long form its description. Both are normalized before the emptiness
/// check.
pub fn parse_acronym_entries(source: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find(ACRONYM_COMMAND) {
        let start = pos + found;
        pos = start + ACRONYM_COMMAND.len();

        let Some(key_open) = find_open_brace(source, start) else {
            continue;
        };
        let Some(key_close) = find_matching_brace(source, key_open) else {
            continue;
        };

        let Some(short_open) = find_open_brace(source, key_close + 1) else {
            continue;
        };
        let Some(short_close) = find_matching_brace(source, short_open) else {
            continue;
        };

        let Some(long_open) = find_open_brace(source, short_close + 1) else {
            continue;
        };
        let Some(long_close) = find_matching_brace(source, long_open) else {
            continue;
        };

        let short_form = clean_text(source[short_open + 1..short_close].trim());
        let long_form = clean_text(source[long_open + 1..long_close].trim());

        if !short_form.is_empty() && !long_form.is_empty() {
            entries.push(Entry {
                name: short_form,
                description: long_form,
            });
        }
        pos = long_close + 1;
    }

    entries
}
