//! Workflow error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, ValidationError};

use super::{PageState, Trigger};

/// Errors surfaced by session workflow actions.
///
/// None of these is fatal: each leaves the session exactly as it was
/// before the action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    /// Credentials were not accepted.
    #[error("Identifiants non reconnus")]
    AuthenticationFailed,

    /// The action is not listed for the current page.
    #[error("'{trigger}' is not valid on the {page} page")]
    InvalidTransition { page: PageState, trigger: Trigger },

    /// A user-supplied value was missing or not allowed.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// The action requires a signed-in session.
    #[error("No user is signed in")]
    NotSignedIn,

    /// No collection item has this id.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The external assistant call failed.
    #[error("Assistant call failed: {0}")]
    Assistant(String),

    /// The passport artifact could not be produced.
    #[error("Passport unavailable: {0}")]
    Passport(String),

    /// Broken internal invariant.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkflowError {
    pub fn invalid_transition(page: PageState, trigger: Trigger) -> Self {
        WorkflowError::InvalidTransition { page, trigger }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkflowError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::AuthenticationFailed => ErrorCode::AuthenticationFailed,
            WorkflowError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            WorkflowError::Validation { .. } => ErrorCode::ValidationFailed,
            WorkflowError::NotSignedIn => ErrorCode::NotSignedIn,
            WorkflowError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            WorkflowError::Assistant(_) => ErrorCode::AssistantFailed,
            WorkflowError::Passport(_) => ErrorCode::PassportFailed,
            WorkflowError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Returns true for errors meant to be shown to the user.
    ///
    /// Invalid transitions indicate a UI bug rather than user error.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            WorkflowError::InvalidTransition { .. } | WorkflowError::Internal(_)
        )
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        WorkflowError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for WorkflowError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => WorkflowError::Validation {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::AuthenticationFailed => WorkflowError::AuthenticationFailed,
            ErrorCode::NotSignedIn => WorkflowError::NotSignedIn,
            ErrorCode::AssistantFailed => WorkflowError::Assistant(err.message),
            ErrorCode::PassportFailed => WorkflowError::Passport(err.message),
            _ => WorkflowError::Internal(err.to_string()),
        }
    }
}
