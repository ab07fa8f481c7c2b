//! Diagnostic progress - step-indexed record of the answers given so far.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

use super::{Category, DiagnosticAnswer, Material, Priority, Question, Usage};

/// Number of questions in one diagnostic run.
pub const DIAGNOSTIC_STEPS: u8 = 4;

/// Answers recorded during one run. Fields are filled strictly in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticAnswers {
    pub category: Option<Category>,
    pub usage: Option<Usage>,
    pub material: Option<Material>,
    pub priority: Option<Priority>,
}

impl DiagnosticAnswers {
    /// Number of answers recorded.
    pub fn count(&self) -> usize {
        [
            self.category.is_some(),
            self.usage.is_some(),
            self.material.is_some(),
            self.priority.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == DIAGNOSTIC_STEPS as usize
    }
}

/// What happened after an answer was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Move on to the given step.
    Next(u8),
    /// The last question was answered.
    Complete,
}

/// Progress through the diagnostic.
///
/// # Invariants
///
/// - `step` is 0 before the first run, then 1..=4 (the question being asked)
/// - each accepted answer sets exactly one field, never overwriting one
/// - `begin()` resets to step 1 with no answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticProgress {
    step: u8,
    answers: DiagnosticAnswers,
}

impl DiagnosticProgress {
    /// Progress that has not started yet (step 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, discarding any previous answers.
    pub fn begin(&mut self) {
        self.step = 1;
        self.answers = DiagnosticAnswers::default();
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn answers(&self) -> &DiagnosticAnswers {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// The question awaiting an answer, if a run is in progress.
    pub fn current_question(&self) -> Option<Question> {
        if self.is_complete() {
            return None;
        }
        Question::for_step(self.step)
    }

    /// Records the answer to the current question.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if no run is in progress or the answer targets
    ///   another question than the current one
    /// - `NotAnOption` if the value is not offered for the recorded category
    pub fn record(&mut self, answer: DiagnosticAnswer) -> Result<StepOutcome, ValidationError> {
        let expected = self.current_question().ok_or_else(|| {
            ValidationError::invalid_format("diagnostic", "no diagnostic question is pending")
        })?;

        if answer.question() != expected {
            return Err(ValidationError::invalid_format(
                expected.field_name(),
                format!(
                    "step {} expects a {} answer, got {}",
                    self.step,
                    expected,
                    answer.question()
                ),
            ));
        }

        match answer {
            DiagnosticAnswer::Category(category) => {
                self.answers.category = Some(category);
            }
            DiagnosticAnswer::Usage(usage) => {
                let category = self.recorded_category()?;
                if !category.usage_options().contains(&usage) {
                    return Err(ValidationError::not_an_option("usage", usage.label()));
                }
                self.answers.usage = Some(usage);
            }
            DiagnosticAnswer::Material(material) => {
                let category = self.recorded_category()?;
                if !category.material_options().contains(&material) {
                    return Err(ValidationError::not_an_option("material", material.label()));
                }
                self.answers.material = Some(material);
            }
            DiagnosticAnswer::Priority(priority) => {
                self.answers.priority = Some(priority);
            }
        }

        if self.step < DIAGNOSTIC_STEPS {
            self.step += 1;
            Ok(StepOutcome::Next(self.step))
        } else {
            Ok(StepOutcome::Complete)
        }
    }

    fn recorded_category(&self) -> Result<Category, ValidationError> {
        self.answers
            .category
            .ok_or_else(|| ValidationError::empty_field("category"))
    }
}
