//! Answer extraction from free-form model text.
//!
//! Pure text matching; no I/O.

use regex::Regex;
use std::sync::LazyLock;

static FINAL_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Final answer:\s*(-?\d+)").expect("valid regex"));

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("valid regex"));

/// Extract an integer answer token from model output.
///
/// 1. The first `Final answer: <integer>` marker wins.
/// 2. Otherwise the last integer-like substring in the text.
/// 3. Otherwise `None`.
///
/// # Examples
///
/// ```
/// use router_domain::answer::extract_integer;
///
/// assert_eq!(extract_integer("Step 1: ...\nFinal answer: -7").as_deref(), Some("-7"));
/// assert_eq!(extract_integer("3 apples and 4 oranges").as_deref(), Some("4"));
/// assert_eq!(extract_integer("no digits here"), None);
/// ```
pub fn extract_integer(text: &str) -> Option<String> {
    if let Some(caps) = FINAL_ANSWER.captures(text) {
        return Some(caps[1].trim().to_string());
    }

    INTEGER
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_line_wins_over_later_numbers() {
        let text = "1. 10 - 3 = 7\n2. negate\nFinal answer: -7\n(checked 3 times)";
        assert_eq!(extract_integer(text), Some("-7".to_string()));
    }

    #[test]
    fn test_first_marker_is_used() {
        let text = "Final answer: 5\nFinal answer: 6";
        assert_eq!(extract_integer(text), Some("5".to_string()));
    }

    #[test]
    fn test_marker_tolerates_whitespace() {
        assert_eq!(
            extract_integer("Final answer:\n   12"),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_last_number() {
        assert_eq!(
            extract_integer("I have 3 apples and 4 oranges"),
            Some("4".to_string())
        );
    }

    #[test]
    fn test_fallback_keeps_sign() {
        assert_eq!(
            extract_integer("the result is -15"),
            Some("-15".to_string())
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        // Lower-case marker is not the marker; the last number still applies.
        assert_eq!(
            extract_integer("final answer: 9 (or maybe 10)"),
            Some("10".to_string())
        );
    }

    #[test]
    fn test_no_digits_returns_none() {
        assert_eq!(extract_integer("I am not sure."), None);
        assert_eq!(extract_integer(""), None);
    }
}
