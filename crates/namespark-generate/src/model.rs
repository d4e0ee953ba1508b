use serde::{Deserialize, Serialize};

use crate::patterns::{PatternId, PatternOutcome, SkipReason};

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for reproducible choices; fresh randomness when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Outcome of one pattern in a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReport {
    pub pattern: PatternId,
    #[serde(flatten)]
    pub outcome: PatternOutcome,
}

/// How a name set came to be.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub concept_words: Vec<String>,
    pub keywords: Vec<String>,
    pub patterns: Vec<PatternReport>,
    pub duplicates_removed: usize,
}

impl GenerationReport {
    pub fn record(&mut self, pattern: PatternId, outcome: PatternOutcome) {
        self.patterns.push(PatternReport { pattern, outcome });
    }

    pub fn record_duplicate(&mut self) {
        self.duplicates_removed += 1;
    }

    pub fn produced_count(&self) -> usize {
        self.patterns
            .iter()
            .filter(|report| matches!(report.outcome, PatternOutcome::Produced { .. }))
            .count()
    }

    /// Patterns that produced nothing, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (PatternId, SkipReason)> + '_ {
        self.patterns.iter().filter_map(|report| match report.outcome {
            PatternOutcome::Skipped { reason } => Some((report.pattern, reason)),
            PatternOutcome::Produced { .. } => None,
        })
    }

    pub fn outcome(&self, pattern: PatternId) -> Option<&PatternOutcome> {
        self.patterns
            .iter()
            .find(|report| report.pattern == pattern)
            .map(|report| &report.outcome)
    }
}

/// Distinct candidate names in generation order, plus the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedNameSet {
    pub names: Vec<String>,
    pub report: GenerationReport,
}
