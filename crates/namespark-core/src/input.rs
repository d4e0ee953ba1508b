use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four answers collected by the form.
///
/// `industry` and `vibe` are expected to be one of the enumerated lexicon
/// keys, but any string is accepted; the generator degrades instead of
/// failing on unknown values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    /// Free-text description of the startup concept.
    #[serde(default)]
    pub core_concept: String,
    /// Industry key, ex.: `Tech` or `E-commerce`.
    #[serde(default)]
    pub industry: String,
    /// Vibe key, ex.: `Modern` or `Playful`.
    #[serde(default)]
    pub vibe: String,
    /// Comma-separated keywords.
    #[serde(default)]
    pub keywords: String,
}

impl FormInput {
    pub fn new(
        core_concept: impl Into<String>,
        industry: impl Into<String>,
        vibe: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            core_concept: core_concept.into(),
            industry: industry.into(),
            vibe: vibe.into(),
            keywords: keywords.into(),
        }
    }
}
