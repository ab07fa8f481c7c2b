//! State machine trait for workflow enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions. The page workflow is the main implementor.

use super::{DomainError, ErrorCode};

/// Trait for enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PageState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Login, Home) | (Home, AddProduct) /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Login => vec![Home],
///             // ... etc
///         }
///     }
/// }
///
/// let next = current.transition_to(PageState::Home)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Closed,
        Open,
        Locked,
    }

    impl StateMachine for Door {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Door::*;
            matches!((self, target), (Closed, Open) | (Open, Closed) | (Closed, Locked))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Door::*;
            match self {
                Closed => vec![Open, Locked],
                Open => vec![Closed],
                Locked => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Door::Closed.transition_to(Door::Open).unwrap(), Door::Open);
    }

    #[test]
    fn transition_to_fails_with_invalid_state_code() {
        let err = Door::Open.transition_to(Door::Locked).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn is_terminal_follows_valid_transitions() {
        assert!(Door::Locked.is_terminal());
        assert!(!Door::Closed.is_terminal());
    }
}
