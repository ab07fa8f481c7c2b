//! ConciergeService - the single session slot and its action surface.
//!
//! One `SessionContext` lives behind an async mutex. Every action,
//! assistant calls included, holds the lock until it completes, so actions
//! never interleave and the commit latency blocks further actions for the
//! session.
//!
//! An ownership submission runs on its own task: once submitted it completes
//! even if the caller stops waiting.

use std::sync::Arc;

use secrecy::Secret;
use tokio::sync::Mutex;

use crate::domain::acquisition::{CommitReceipt, OwnershipForm};
use crate::domain::diagnostic::{DiagnosticAnswer, QuestionView};
use crate::domain::foundation::{DomainError, ItemId};
use crate::domain::session::{SessionContext, SessionSnapshot, Trigger, WorkflowError};
use crate::ports::PassportArtifact;

use super::{ActionOutcome, AssistantReply, AssistantSessionAdapter, PageStateMachine, UserAction};

/// Application service for one process-wide session.
pub struct ConciergeService {
    session: Arc<Mutex<SessionContext>>,
    machine: Arc<PageStateMachine>,
    assistant: AssistantSessionAdapter,
    default_credential: Option<Secret<String>>,
}

impl ConciergeService {
    /// Creates the service with a signed-out, seeded session.
    pub fn new(
        machine: PageStateMachine,
        assistant: AssistantSessionAdapter,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            session: Arc::new(Mutex::new(SessionContext::seeded()?)),
            machine: Arc::new(machine),
            assistant,
            default_credential: None,
        })
    }

    /// Assistant credential used when a request carries none.
    pub fn with_default_credential(mut self, credential: Option<Secret<String>>) -> Self {
        self.default_credential = credential;
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Session lifecycle
    // ───────────────────────────────────────────────────────────────

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn login(
        &self,
        identity: impl Into<String>,
        secret: Secret<String>,
    ) -> Result<SessionSnapshot, WorkflowError> {
        let action = UserAction::SubmitCredentials {
            identity: identity.into(),
            secret,
        };
        self.apply(action).await.map(|(_, snapshot)| snapshot)
    }

    /// Discards the session and starts a fresh, signed-out one.
    pub async fn logout(&self) -> Result<SessionSnapshot, WorkflowError> {
        let mut session = self.session.lock().await;
        let fresh = SessionContext::seeded()?;
        tracing::info!(
            session_id = %session.id(),
            new_session_id = %fresh.id(),
            "Session discarded"
        );
        *session = fresh;
        Ok(session.snapshot())
    }

    // ───────────────────────────────────────────────────────────────
    // Page actions
    // ───────────────────────────────────────────────────────────────

    pub async fn start_acquisition(&self) -> Result<SessionSnapshot, WorkflowError> {
        self.apply(UserAction::StartAcquisition)
            .await
            .map(|(_, snapshot)| snapshot)
    }

    pub async fn begin_diagnostic(&self) -> Result<SessionSnapshot, WorkflowError> {
        self.apply(UserAction::BeginDiagnostic)
            .await
            .map(|(_, snapshot)| snapshot)
    }

    /// The question awaiting an answer. Only valid on the quiz page.
    pub async fn current_question(&self) -> Result<QuestionView, WorkflowError> {
        let session = self.session.lock().await;
        session.ensure_accepts(Trigger::AnswerStep)?;
        session
            .current_question()
            .ok_or_else(|| WorkflowError::Internal("quiz page without a pending question".to_string()))
    }

    pub async fn answer(&self, answer: DiagnosticAnswer) -> Result<SessionSnapshot, WorkflowError> {
        self.apply(UserAction::AnswerStep(answer))
            .await
            .map(|(_, snapshot)| snapshot)
    }

    pub async fn confirm_acquisition(&self) -> Result<SessionSnapshot, WorkflowError> {
        self.apply(UserAction::ConfirmAcquisition)
            .await
            .map(|(_, snapshot)| snapshot)
    }

    /// Submits the ownership form and waits for the commit.
    ///
    /// Pending, latency and commit run on a spawned task, so dropping the
    /// returned future does not cancel an acquisition.
    pub async fn submit_ownership(
        &self,
        form: OwnershipForm,
    ) -> Result<(CommitReceipt, SessionSnapshot), WorkflowError> {
        let session = Arc::clone(&self.session);
        let machine = Arc::clone(&self.machine);
        let commit = tokio::spawn(async move {
            let mut session = session.lock_owned().await;
            let outcome = machine
                .dispatch(&mut session, UserAction::SubmitOwnershipForm(form))
                .await?;
            Ok::<_, WorkflowError>((outcome, session.snapshot()))
        });

        let (outcome, snapshot) = commit.await.map_err(|err| {
            tracing::error!("Acquisition task failed: {}", err);
            WorkflowError::Internal(format!("acquisition task failed: {}", err))
        })??;
        let receipt = outcome
            .receipt
            .ok_or_else(|| WorkflowError::Internal("commit produced no receipt".to_string()))?;
        Ok((receipt, snapshot))
    }

    pub async fn view_passport(&self, item_id: &ItemId) -> Result<PassportArtifact, WorkflowError> {
        let session = self.session.lock().await;
        self.machine.view_passport(&session, item_id).await
    }

    // ───────────────────────────────────────────────────────────────
    // Assistant
    // ───────────────────────────────────────────────────────────────

    /// Asks the assistant, using `credential` or the configured default.
    pub async fn ask(
        &self,
        prompt: &str,
        credential: Option<Secret<String>>,
    ) -> Result<AssistantReply, WorkflowError> {
        let credential = credential.or_else(|| self.default_credential.clone());
        let mut session = self.session.lock().await;
        self.assistant
            .ask(&mut session, prompt, credential.as_ref())
            .await
    }

    async fn apply(
        &self,
        action: UserAction,
    ) -> Result<(ActionOutcome, SessionSnapshot), WorkflowError> {
        let mut session = self.session.lock().await;
        let outcome = self.machine.dispatch(&mut session, action).await?;
        Ok((outcome, session.snapshot()))
    }
}
