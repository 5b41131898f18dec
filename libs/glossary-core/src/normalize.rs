//! Inline LaTeX markup cleanup for extracted text.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\textbf\{([^}]+)\}").unwrap());
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\emph\{([^}]+)\}").unwrap());
static COMMAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([a-zA-Z]+)").unwrap());

/// Normalize a raw LaTeX fragment for flashcard display.
///
/// Collapses whitespace runs to single spaces, rewrites `\textbf`/`\emph`
/// to the HTML tags Anki renders, turns `\dots`/`\ldots` into `...`, and
/// strips the backslash from any remaining word command. `$...$` math
/// delimiters pass through untouched.
pub fn clean_text(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = BOLD_RE.replace_all(&text, "<b>$1</b>");
    let text = ITALIC_RE.replace_all(&text, "<i>$1</i>");
    let text = text.replace("\\dots", "...").replace("\\ldots", "...");
    let text = COMMAND_RE.replace_all(&text, "$1");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(clean_text("  a\n  b\t c  "), "a b c");
    }

    #[test]
    fn rewrites_bold_to_html() {
        assert_eq!(clean_text(r"\textbf{Hi}"), "<b>Hi</b>");
    }

    #[test]
    fn rewrites_emphasis_to_html() {
        assert_eq!(clean_text(r"\emph{x}"), "<i>x</i>");
    }

    #[test]
    fn rewrites_ellipsis_commands() {
        assert_eq!(clean_text(r"a\dots b"), "a... b");
        assert_eq!(clean_text(r"a\ldots b"), "a... b");
    }

    #[test]
    fn strips_backslash_from_bare_commands() {
        assert_eq!(clean_text(r"\alpha"), "alpha");
    }

    #[test]
    fn math_delimiters_pass_through() {
        assert_eq!(clean_text(r"$\alpha + \beta$"), "$alpha + beta$");
    }

    #[test]
    fn bold_stops_at_nested_brace() {
        assert_eq!(clean_text(r"\textbf{a{b}c}"), "<b>a{b</b>c}");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn clean_input_is_unchanged() {
        let text = "An <b>important</b> term... $x + y$";
        assert_eq!(clean_text(text), text);
    }
}
