//! Page workflow states and the triggers that move between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The page the session is currently on.
///
/// `Login` is initial. There is no terminal page: a successful ownership
/// form returns to `Home`, closing the acquisition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    #[default]
    Login,
    Home,
    AddProduct,
    Quiz,
    Result,
    BlockchainForm,
}

impl PageState {
    pub const ALL: [PageState; 6] = [
        PageState::Login,
        PageState::Home,
        PageState::AddProduct,
        PageState::Quiz,
        PageState::Result,
        PageState::BlockchainForm,
    ];

    /// Returns true if the trigger is listed for this page.
    pub fn accepts(&self, trigger: Trigger) -> bool {
        use PageState::*;
        matches!(
            (self, trigger),
            (Login, Trigger::SubmitCredentials)
                | (Home, Trigger::StartAcquisition)
                | (Home, Trigger::ViewPassport)
                | (AddProduct, Trigger::BeginDiagnostic)
                | (Quiz, Trigger::AnswerStep)
                | (Result, Trigger::ConfirmAcquisition)
                | (BlockchainForm, Trigger::SubmitOwnershipForm)
        )
    }

    /// Triggers accepted on this page.
    pub fn accepted_triggers(&self) -> Vec<Trigger> {
        Trigger::ALL
            .iter()
            .copied()
            .filter(|t| self.accepts(*t))
            .collect()
    }

    /// Returns true once a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        !matches!(self, PageState::Login)
    }
}

impl StateMachine for PageState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PageState::*;
        matches!(
            (self, target),
            (Login, Home)
                | (Home, AddProduct)
                | (AddProduct, Quiz)
                // Each accepted answer before the last stays on the quiz
                | (Quiz, Quiz)
                | (Quiz, Result)
                | (Result, BlockchainForm)
                | (BlockchainForm, Home)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PageState::*;
        match self {
            Login => vec![Home],
            Home => vec![AddProduct],
            AddProduct => vec![Quiz],
            Quiz => vec![Quiz, Result],
            Result => vec![BlockchainForm],
            BlockchainForm => vec![Home],
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageState::Login => "login",
            PageState::Home => "home",
            PageState::AddProduct => "add_product",
            PageState::Quiz => "quiz",
            PageState::Result => "result",
            PageState::BlockchainForm => "blockchain_form",
        };
        write!(f, "{}", s)
    }
}

/// User-triggered events, stripped of their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    SubmitCredentials,
    StartAcquisition,
    BeginDiagnostic,
    AnswerStep,
    ConfirmAcquisition,
    SubmitOwnershipForm,
    ViewPassport,
}

impl Trigger {
    pub const ALL: [Trigger; 7] = [
        Trigger::SubmitCredentials,
        Trigger::StartAcquisition,
        Trigger::BeginDiagnostic,
        Trigger::AnswerStep,
        Trigger::ConfirmAcquisition,
        Trigger::SubmitOwnershipForm,
        Trigger::ViewPassport,
    ];
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trigger::SubmitCredentials => "submit_credentials",
            Trigger::StartAcquisition => "start_acquisition",
            Trigger::BeginDiagnostic => "begin_diagnostic",
            Trigger::AnswerStep => "answer_step",
            Trigger::ConfirmAcquisition => "confirm_acquisition",
            Trigger::SubmitOwnershipForm => "submit_ownership_form",
            Trigger::ViewPassport => "view_passport",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_login() {
        assert_eq!(PageState::default(), PageState::Login);
    }

    #[test]
    fn no_page_is_terminal() {
        for page in PageState::ALL {
            assert!(!page.is_terminal(), "{} should not be terminal", page);
        }
    }

    #[test]
    fn every_page_accepts_exactly_its_triggers() {
        assert_eq!(
            PageState::Login.accepted_triggers(),
            vec![Trigger::SubmitCredentials]
        );
        assert_eq!(
            PageState::Home.accepted_triggers(),
            vec![Trigger::StartAcquisition, Trigger::ViewPassport]
        );
        assert_eq!(PageState::Quiz.accepted_triggers(), vec![Trigger::AnswerStep]);
        assert_eq!(
            PageState::BlockchainForm.accepted_triggers(),
            vec![Trigger::SubmitOwnershipForm]
        );
    }

    #[test]
    fn acquisition_cycle_returns_home() {
        let page = PageState::Login
            .transition_to(PageState::Home)
            .and_then(|p| p.transition_to(PageState::AddProduct))
            .and_then(|p| p.transition_to(PageState::Quiz))
            .and_then(|p| p.transition_to(PageState::Result))
            .and_then(|p| p.transition_to(PageState::BlockchainForm))
            .and_then(|p| p.transition_to(PageState::Home))
            .unwrap();
        assert_eq!(page, PageState::Home);
    }

    #[test]
    fn skipping_the_diagnostic_is_invalid() {
        assert!(PageState::Home.transition_to(PageState::Result).is_err());
        assert!(PageState::AddProduct.transition_to(PageState::BlockchainForm).is_err());
        assert!(PageState::Home.transition_to(PageState::Login).is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for page in PageState::ALL {
            for target in PageState::ALL {
                assert_eq!(
                    page.can_transition_to(&target),
                    page.valid_transitions().contains(&target),
                    "{} -> {}",
                    page,
                    target
                );
            }
        }
    }

    #[test]
    fn page_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PageState::BlockchainForm).unwrap(),
            "\"blockchain_form\""
        );
    }
}
