use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::input::FormInput;

/// Keywords submitted when the keywords step is left blank.
pub const DEFAULT_KEYWORD_PLACEHOLDER: &str = "None specified";

/// Steps of the naming form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormStep {
    Concept,
    Industry,
    Vibe,
    Keywords,
    Results,
}

impl FormStep {
    pub const ALL: [FormStep; 5] = [
        FormStep::Concept,
        FormStep::Industry,
        FormStep::Vibe,
        FormStep::Keywords,
        FormStep::Results,
    ];

    /// One-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            FormStep::Concept => 1,
            FormStep::Industry => 2,
            FormStep::Vibe => 3,
            FormStep::Keywords => 4,
            FormStep::Results => 5,
        }
    }

    pub fn from_number(number: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|step| step.number() == number)
            .ok_or(Error::UnknownStep(number))
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1).ok()
    }

    pub fn previous(self) -> Option<Self> {
        self.number()
            .checked_sub(1)
            .and_then(|number| Self::from_number(number).ok())
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Field of [`FormInput`] edited by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CoreConcept,
    Industry,
    Vibe,
    Keywords,
}

/// State of a form being filled in step by step.
///
/// Required-field policy lives here rather than in the generator: the
/// concept, industry and vibe steps refuse to advance while empty, and the
/// keywords step substitutes a placeholder when left blank.
#[derive(Debug, Clone)]
pub struct FormState {
    current: FormStep,
    data: FormInput,
    completed: BTreeSet<FormStep>,
    keyword_placeholder: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::with_keyword_placeholder(Some(DEFAULT_KEYWORD_PLACEHOLDER.to_string()))
    }

    /// Build a form whose blank keywords become `placeholder`, or stay blank
    /// when `None`.
    pub fn with_keyword_placeholder(placeholder: Option<String>) -> Self {
        Self {
            current: FormStep::Concept,
            data: FormInput::default(),
            completed: BTreeSet::new(),
            keyword_placeholder: placeholder,
        }
    }

    /// Start from already collected answers, positioned on the first step.
    pub fn prefilled(mut self, data: FormInput) -> Self {
        self.data = data;
        self
    }

    pub fn current_step(&self) -> FormStep {
        self.current
    }

    pub fn is_completed(&self, step: FormStep) -> bool {
        self.completed.contains(&step)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CoreConcept => self.data.core_concept = value,
            FormField::Industry => self.data.industry = value,
            FormField::Vibe => self.data.vibe = value,
            FormField::Keywords => self.data.keywords = value,
        }
    }

    /// Validate the current step and move to the next one.
    ///
    /// Returns the step now shown. Advancing from the results step is a
    /// no-op.
    pub fn advance(&mut self) -> Result<FormStep> {
        self.validate_current()?;
        self.completed.insert(self.current);

        let Some(next) = self.current.next() else {
            return Ok(self.current);
        };

        if self.current == FormStep::Keywords {
            let trimmed = self.data.keywords.trim();
            self.data.keywords = match (&self.keyword_placeholder, trimmed.is_empty()) {
                (Some(placeholder), true) => placeholder.clone(),
                _ => trimmed.to_string(),
            };
        }

        self.current = next;
        Ok(next)
    }

    pub fn back(&mut self) -> FormStep {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
        self.current
    }

    /// Advance through every remaining step and return the finalized input.
    pub fn submit(&mut self) -> Result<FormInput> {
        while self.current != FormStep::Results {
            self.advance()?;
        }
        Ok(self.data.clone())
    }

    fn validate_current(&self) -> Result<()> {
        let message = match self.current {
            FormStep::Concept if self.data.core_concept.trim().is_empty() => {
                "Please describe your core concept."
            }
            FormStep::Industry if self.data.industry.is_empty() => "Please select an industry.",
            FormStep::Vibe if self.data.vibe.is_empty() => "Please select a vibe.",
            _ => return Ok(()),
        };
        Err(Error::Validation {
            step: self.current,
            message: message.to_string(),
        })
    }
}
