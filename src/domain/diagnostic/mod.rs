//! Diagnostic module - the four-step questionnaire and its decision tree.

mod answers;
mod progress;
mod tree;

pub use answers::{Category, DiagnosticAnswer, Material, Priority, Question, Usage};
pub use progress::{DiagnosticAnswers, DiagnosticProgress, StepOutcome, DIAGNOSTIC_STEPS};
pub use tree::{DiagnosticTree, ItemTemplate, QuestionView, ALMA, PILLOW};
