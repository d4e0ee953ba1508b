use serde::{Deserialize, Serialize};

use namespark_core::{FormInput, industry_words, vibe_prefixes, vibe_suffixes};

use crate::chooser::{Chooser, pick};
use crate::tokenize::{capitalize, concept_words, keyword_list, leading_chars};

/// Fallback stem for the concept-based fixed name.
pub const CONCEPT_FALLBACK: &str = "Neo";
/// Fallback stem for the keyword-based fixed name.
pub const KEYWORD_FALLBACK: &str = "Spark";

/// Name templates, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    /// `{prefix}{Concept}`
    PrefixConcept,
    /// `{industry}{suffix}`
    IndustrySuffix,
    /// `{vibe}{industry word}`
    VibeIndustryWord,
    /// `{Concept}{industry word}`
    ConceptIndustryWord,
    /// `The {industry} {Concept}`
    TheIndustryConcept,
    /// `{Keyword}{suffix}`
    KeywordSuffix,
    /// `{vibe}HQ`
    VibeHq,
    /// `{industry}Spark`
    IndustrySpark,
    /// `{vibe}Wave`
    VibeWave,
    /// `{first 3 chars of concept}X`
    ConceptX,
    /// `{first 4 chars of keyword}ify`
    KeywordIfy,
}

impl PatternId {
    pub const ALL: [PatternId; 11] = [
        PatternId::PrefixConcept,
        PatternId::IndustrySuffix,
        PatternId::VibeIndustryWord,
        PatternId::ConceptIndustryWord,
        PatternId::TheIndustryConcept,
        PatternId::KeywordSuffix,
        PatternId::VibeHq,
        PatternId::IndustrySpark,
        PatternId::VibeWave,
        PatternId::ConceptX,
        PatternId::KeywordIfy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PatternId::PrefixConcept => "prefix_concept",
            PatternId::IndustrySuffix => "industry_suffix",
            PatternId::VibeIndustryWord => "vibe_industry_word",
            PatternId::ConceptIndustryWord => "concept_industry_word",
            PatternId::TheIndustryConcept => "the_industry_concept",
            PatternId::KeywordSuffix => "keyword_suffix",
            PatternId::VibeHq => "vibe_hq",
            PatternId::IndustrySpark => "industry_spark",
            PatternId::VibeWave => "vibe_wave",
            PatternId::ConceptX => "concept_x",
            PatternId::KeywordIfy => "keyword_ify",
        }
    }

    /// Fill the template, or report which input was missing.
    ///
    /// Random draws happen only once every requirement is met, so a skipped
    /// pattern never consumes a choice.
    pub fn build<C>(self, inputs: &PatternInputs<'_>, chooser: &mut C) -> Result<String, SkipReason>
    where
        C: Chooser + ?Sized,
    {
        let industry = inputs.industry();
        let vibe = inputs.vibe();

        match self {
            PatternId::PrefixConcept => {
                let concept = inputs.first_concept_word()?;
                let prefixes = inputs.prefixes.ok_or(SkipReason::UnknownVibe)?;
                let prefix = pick(chooser, prefixes).ok_or(SkipReason::UnknownVibe)?;
                Ok(format!("{prefix}{}", capitalize(concept)))
            }
            PatternId::IndustrySuffix => {
                let suffixes = inputs.suffixes.ok_or(SkipReason::UnknownVibe)?;
                let suffix = pick(chooser, suffixes).ok_or(SkipReason::UnknownVibe)?;
                Ok(format!("{industry}{suffix}"))
            }
            PatternId::VibeIndustryWord => {
                let words = inputs.industry_words.ok_or(SkipReason::UnknownIndustry)?;
                let word = pick(chooser, words).ok_or(SkipReason::UnknownIndustry)?;
                Ok(format!("{vibe}{word}"))
            }
            PatternId::ConceptIndustryWord => {
                let concept = inputs.first_concept_word()?;
                let words = inputs.industry_words.ok_or(SkipReason::UnknownIndustry)?;
                let word = pick(chooser, words).ok_or(SkipReason::UnknownIndustry)?;
                Ok(format!("{}{word}", capitalize(concept)))
            }
            PatternId::TheIndustryConcept => {
                let concept = inputs.first_concept_word()?;
                Ok(format!("The {industry} {}", capitalize(concept)))
            }
            PatternId::KeywordSuffix => {
                if inputs.keywords.is_empty() {
                    return Err(SkipReason::NoKeywords);
                }
                let suffixes = inputs.suffixes.ok_or(SkipReason::UnknownVibe)?;
                let keyword = pick(chooser, &inputs.keywords).ok_or(SkipReason::NoKeywords)?;
                let suffix = pick(chooser, suffixes).ok_or(SkipReason::UnknownVibe)?;
                Ok(format!("{}{suffix}", capitalize(keyword)))
            }
            PatternId::VibeHq => Ok(format!("{vibe}HQ")),
            PatternId::IndustrySpark => Ok(format!("{industry}Spark")),
            PatternId::VibeWave => Ok(format!("{vibe}Wave")),
            PatternId::ConceptX => {
                let stem = inputs
                    .concept_words
                    .first()
                    .map_or(CONCEPT_FALLBACK, |word| leading_chars(word, 3));
                Ok(format!("{stem}X"))
            }
            PatternId::KeywordIfy => {
                let stem = inputs
                    .keywords
                    .first()
                    .map_or(KEYWORD_FALLBACK, |keyword| leading_chars(keyword, 4));
                Ok(format!("{stem}ify"))
            }
        }
    }
}

/// Why a pattern produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoConceptWords,
    UnknownVibe,
    UnknownIndustry,
    NoKeywords,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoConceptWords => "no_concept_words",
            SkipReason::UnknownVibe => "unknown_vibe",
            SkipReason::UnknownIndustry => "unknown_industry",
            SkipReason::NoKeywords => "no_keywords",
        }
    }
}

/// Result of evaluating one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatternOutcome {
    Produced { name: String },
    Skipped { reason: SkipReason },
}

/// Tokenized input and lexicon lookups shared by every pattern.
#[derive(Debug, Clone)]
pub struct PatternInputs<'a> {
    input: &'a FormInput,
    pub concept_words: Vec<&'a str>,
    pub keywords: Vec<&'a str>,
    pub prefixes: Option<&'static [&'static str]>,
    pub suffixes: Option<&'static [&'static str]>,
    pub industry_words: Option<&'static [&'static str]>,
}

impl<'a> PatternInputs<'a> {
    pub fn new(input: &'a FormInput) -> Self {
        Self {
            input,
            concept_words: concept_words(&input.core_concept),
            keywords: keyword_list(&input.keywords),
            prefixes: vibe_prefixes(&input.vibe),
            suffixes: vibe_suffixes(&input.vibe),
            industry_words: industry_words(&input.industry),
        }
    }

    /// Industry as typed, used verbatim even when not a lexicon key.
    pub fn industry(&self) -> &'a str {
        &self.input.industry
    }

    /// Vibe as typed, used verbatim even when not a lexicon key.
    pub fn vibe(&self) -> &'a str {
        &self.input.vibe
    }

    fn first_concept_word(&self) -> Result<&'a str, SkipReason> {
        self.concept_words
            .first()
            .copied()
            .ok_or(SkipReason::NoConceptWords)
    }
}
