//! Frequency tally for self-consistency voting

use serde::{Deserialize, Serialize};

/// Insertion-ordered count of candidate answers.
///
/// Built and discarded within one aggregation. The sum of counts always
/// equals the number of candidates recorded, and [`FrequencyTally::winner`]
/// breaks ties by first-seen order.
///
/// # Example
///
/// ```
/// use router_domain::answer::FrequencyTally;
///
/// let tally: FrequencyTally = ["3", "3", "5"].into_iter().collect();
/// assert_eq!(tally.winner(), Some("3"));
/// assert_eq!(tally.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTally {
    entries: Vec<(String, usize)>,
}

impl FrequencyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `candidate`
    pub fn record(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        match self.entries.iter_mut().find(|(c, _)| *c == candidate) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((candidate, 1)),
        }
    }

    /// Record a possibly-missing candidate; `None` is discarded
    pub fn record_opt(&mut self, candidate: Option<String>) {
        if let Some(candidate) = candidate {
            self.record(candidate);
        }
    }

    /// The candidate with the highest count, first-seen on ties
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (candidate, count) in &self.entries {
            if best.is_none_or(|(_, best_count)| *count > best_count) {
                best = Some((candidate.as_str(), *count));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Count for a specific candidate
    pub fn count(&self, candidate: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == candidate)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of recorded observations
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct candidates
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Compact summary such as `12×2, 7×1`
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(c, n)| format!("{c}×{n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = FrequencyTally::new();
        for candidate in iter {
            tally.record(candidate);
        }
        tally
    }
}
