//! Startup name generation for NameSpark.
//!
//! This crate turns a [`FormInput`](namespark_core::FormInput) into a
//! deduplicated list of candidate names by filling a fixed catalogue of
//! patterns with concept words, keywords and lexicon fragments. Randomness is
//! injected through [`Chooser`], so a seeded or scripted source yields
//! reproducible output.

pub mod chooser;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod patterns;
pub mod tokenize;

pub use chooser::{Chooser, RngChooser, ScriptedChooser};
pub use engine::{NameGenerator, generate_names, generate_with_report};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GeneratedNameSet, GenerationReport, PatternReport};
pub use patterns::{PatternId, PatternOutcome, SkipReason};
