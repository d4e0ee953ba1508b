//! Core contracts for NameSpark.
//!
//! This crate defines the form input handed to the name generator, the
//! read-only vibe and industry lexicons, and the step-by-step form model
//! shared by front ends.

pub mod error;
pub mod form;
pub mod input;
pub mod lexicon;

pub use error::{Error, Result};
pub use form::{DEFAULT_KEYWORD_PLACEHOLDER, FormField, FormState, FormStep};
pub use input::FormInput;
pub use lexicon::{
    Industry, OptionEntry, Vibe, industry_options, industry_words, vibe_options, vibe_prefixes,
    vibe_suffixes,
};
