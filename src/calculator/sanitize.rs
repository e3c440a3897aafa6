//! Input sanitization for expression payloads.
//!
//! A payload arrives as free text and is reduced to something the tokenizer
//! can work with:
//! - Strip every character outside the arithmetic alphabet
//! - Rewrite `<digit>%` as `<digit>/100` (percentage-as-division)
//! - Collapse runs of adjacent operators down to the last one

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything that is not a digit, `.`, `%`, an operator, or a paren.
    static ref DISALLOWED: Regex = Regex::new(r"[^\d%/*+\-().]").unwrap();

    /// A digit immediately followed by a percent sign.
    static ref PERCENT: Regex = Regex::new(r"(\d)%").unwrap();
}

/// Reduce a payload to a plain arithmetic string.
///
/// Parens are not balanced here and numbers are not validated; anything
/// still malformed surfaces later as an evaluation fault.
pub fn sanitize(payload: &str) -> String {
    let stripped = DISALLOWED.replace_all(payload, "");
    let percents = PERCENT.replace_all(&stripped, "${1}/100");
    collapse_operator_runs(&percents)
}

/// Collapse each run of two or more adjacent `+ - * /` characters to the
/// run's last operator (`5+-3` becomes `5-3`, `1+-*/2` becomes `1/2`).
///
/// This is adjacent-operator collapsing only, not sign handling; `%` and
/// parens never participate in a run.
fn collapse_operator_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if is_run_operator(c) && chars.peek().copied().is_some_and(is_run_operator) {
            continue;
        }
        out.push(c);
    }
    out
}

fn is_run_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes_through() {
        assert_eq!(sanitize("2+3*4"), "2+3*4");
        assert_eq!(sanitize("(1.5/0.5)"), "(1.5/0.5)");
    }

    #[test]
    fn test_disallowed_characters_are_stripped() {
        assert_eq!(sanitize("2 + 3"), "2+3");
        assert_eq!(sanitize("1,000+1"), "1000+1");
        assert_eq!(sanitize("total*2€"), "*2");
        assert_eq!(sanitize("abc"), "");
    }

    #[test]
    fn test_percent_becomes_division_by_hundred() {
        assert_eq!(sanitize("50%"), "50/100");
        assert_eq!(sanitize("200*10%"), "200*10/100");
    }

    #[test]
    fn test_percent_without_leading_digit_is_kept() {
        // No digit in front, so the rewrite does not apply; the remainder
        // operator meaning is decided downstream.
        assert_eq!(sanitize("10%3"), "10/1003");
        assert_eq!(sanitize("(%5)"), "(%5)");
    }

    #[test]
    fn test_operator_runs_collapse_to_the_last_operator() {
        assert_eq!(sanitize("5+-3"), "5-3");
        assert_eq!(sanitize("5--3"), "5-3");
        assert_eq!(sanitize("5+*3"), "5*3");
        assert_eq!(sanitize("1+-*/2"), "1/2");
    }

    #[test]
    fn test_operators_next_to_parens_do_not_collapse() {
        assert_eq!(sanitize("5+(3)"), "5+(3)");
        assert_eq!(sanitize("(2+3)*4"), "(2+3)*4");
    }

    #[test]
    fn test_error_sentinel_text_strips_to_operators() {
        // A nested failure splices in "ERROR"; the letters vanish here and
        // the leftover shape fails evaluation downstream.
        assert_eq!(sanitize("1+ERROR"), "1+");
    }
}
