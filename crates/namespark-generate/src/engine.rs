use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use namespark_core::FormInput;

use crate::chooser::{Chooser, RngChooser};
use crate::model::{GenerateOptions, GeneratedNameSet, GenerationReport};
use crate::patterns::{PatternId, PatternInputs, PatternOutcome};

/// Candidate names for `input`, drawing every choice from `chooser`.
pub fn generate_names<C>(input: &FormInput, chooser: &mut C) -> Vec<String>
where
    C: Chooser + ?Sized,
{
    generate_with_report(input, chooser).names
}

/// Evaluate every pattern in order and keep the first occurrence of each
/// name.
pub fn generate_with_report<C>(input: &FormInput, chooser: &mut C) -> GeneratedNameSet
where
    C: Chooser + ?Sized,
{
    let inputs = PatternInputs::new(input);
    let mut report = GenerationReport {
        concept_words: inputs.concept_words.iter().map(|w| w.to_string()).collect(),
        keywords: inputs.keywords.iter().map(|k| k.to_string()).collect(),
        ..GenerationReport::default()
    };

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(PatternId::ALL.len());

    for pattern in PatternId::ALL {
        match pattern.build(&inputs, chooser) {
            Ok(name) => {
                if seen.insert(name.clone()) {
                    names.push(name.clone());
                } else {
                    debug!(pattern = pattern.id(), name = %name, "duplicate name dropped");
                    report.record_duplicate();
                }
                report.record(pattern, PatternOutcome::Produced { name });
            }
            Err(reason) => {
                debug!(pattern = pattern.id(), reason = reason.as_str(), "pattern skipped");
                report.record(pattern, PatternOutcome::Skipped { reason });
            }
        }
    }

    debug!(
        names = names.len(),
        duplicates = report.duplicates_removed,
        "names generated"
    );

    GeneratedNameSet { names, report }
}

/// Entry point that owns the choice of random source.
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    options: GenerateOptions,
}

impl NameGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Seeded runs use `ChaCha8Rng`, so equal seeds give equal names.
    pub fn generate(&self, input: &FormInput) -> GeneratedNameSet {
        match self.options.seed {
            Some(seed) => {
                let mut chooser = RngChooser::new(ChaCha8Rng::seed_from_u64(seed));
                generate_with_report(input, &mut chooser)
            }
            None => {
                let mut chooser = RngChooser::new(rand::rng());
                generate_with_report(input, &mut chooser)
            }
        }
    }
}
