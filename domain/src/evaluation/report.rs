//! Dev-set evaluation report
//!
//! Exact-match scoring of predictions against gold answers, overall and per
//! dataset domain. Domains are kept in first-seen order.

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Default number of mistakes retained for display
pub const DEFAULT_MISTAKE_LIMIT: usize = 20;

/// Domain used when a question carries none
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Correct/total counts for one domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStats {
    pub domain: String,
    pub total: usize,
    pub correct: usize,
}

impl DomainStats {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// One wrong prediction kept for inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    /// 1-based position in the evaluated set
    pub index: usize,
    pub domain: String,
    pub input: String,
    pub gold: String,
    pub predicted: String,
}

/// Aggregated evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    /// Questions without a gold answer (not scored)
    pub skipped: usize,
    pub per_domain: Vec<DomainStats>,
    pub mistakes: Vec<Mistake>,
    #[serde(skip)]
    mistake_limit: usize,
}

impl Default for EvaluationReport {
    fn default() -> Self {
        Self::new(DEFAULT_MISTAKE_LIMIT)
    }
}

impl EvaluationReport {
    pub fn new(mistake_limit: usize) -> Self {
        Self {
            total: 0,
            correct: 0,
            skipped: 0,
            per_domain: Vec::new(),
            mistakes: Vec::new(),
            mistake_limit,
        }
    }

    /// Score one prediction. `index` is 1-based.
    ///
    /// Prediction and gold are compared after trimming; no other
    /// normalization is applied.
    pub fn record(&mut self, index: usize, question: &Question, predicted: &str) {
        let Some(gold) = question.gold() else {
            self.skipped += 1;
            return;
        };

        let gold = gold.trim();
        let predicted = predicted.trim();
        let domain = question.domain().unwrap_or(UNKNOWN_DOMAIN);
        let is_correct = predicted == gold;

        self.total += 1;
        let stats = self.domain_entry(domain);
        stats.total += 1;
        if is_correct {
            stats.correct += 1;
            self.correct += 1;
        } else if self.mistakes.len() < self.mistake_limit {
            self.mistakes.push(Mistake {
                index,
                domain: domain.to_string(),
                input: question.input().to_string(),
                gold: gold.to_string(),
                predicted: predicted.to_string(),
            });
        }
    }

    fn domain_entry(&mut self, domain: &str) -> &mut DomainStats {
        let pos = match self.per_domain.iter().position(|s| s.domain == domain) {
            Some(pos) => pos,
            None => {
                self.per_domain.push(DomainStats {
                    domain: domain.to_string(),
                    ..Default::default()
                });
                self.per_domain.len() - 1
            }
        };
        &mut self.per_domain[pos]
    }

    /// Overall accuracy (0.0 to 1.0)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn domain(&self, domain: &str) -> Option<&DomainStats> {
        self.per_domain.iter().find(|s| s.domain == domain)
    }
}
