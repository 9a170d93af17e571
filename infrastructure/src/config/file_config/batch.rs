//! Batch configuration from TOML (`[batch]` section)

use super::ConfigIssue;
use router_application::BatchParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Every saved answer must be strictly shorter than this.
    pub max_answer_chars: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            max_answer_chars: BatchParams::default().max_answer_chars,
        }
    }
}

impl FileBatchConfig {
    pub fn to_params(&self) -> BatchParams {
        BatchParams::default().with_max_answer_chars(self.max_answer_chars)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.max_answer_chars == 0 {
            vec![ConfigIssue::error(
                "batch.max_answer_chars",
                "no answer can be shorter than 0 characters",
            )]
        } else {
            Vec::new()
        }
    }
}
