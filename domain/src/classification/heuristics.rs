//! Text heuristics used when the classifier gives no usable label.

/// Option markers that indicate a lettered multiple-choice question.
///
/// Matched against the lower-cased question text.
const OPTION_MARKERS: [&str; 12] = [
    " a.", " b.", " c.", " d.", " a)", " b)", " c)", " d)", "\na.", "\nb.", "\nc.", "\nd.",
];

/// Check whether a question looks like multiple choice (options A–D).
///
/// ```
/// use router_domain::classification::looks_like_multiple_choice;
///
/// assert!(looks_like_multiple_choice("Pick one:\nA. foo\nB. bar"));
/// assert!(!looks_like_multiple_choice("How many legs does a spider have?"));
/// ```
pub fn looks_like_multiple_choice(text: &str) -> bool {
    let lowered = text.to_lowercase();
    OPTION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Check whether a question is shorter than `threshold` characters.
///
/// Short problems are presumed easy enough for a single chain-of-thought pass.
pub fn is_short_problem(text: &str, threshold: usize) -> bool {
    text.chars().count() < threshold
}
