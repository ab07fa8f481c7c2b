//! PageStateMachine - dispatches user actions against a session.
//!
//! Validates that the action is listed for the current page, runs the
//! collaborator work the action needs (credential check, commit latency,
//! passport rendering) and applies the result to the `SessionContext`.

use std::sync::Arc;

use secrecy::Secret;

use crate::domain::acquisition::{CommitReceipt, OwnershipForm};
use crate::domain::diagnostic::DiagnosticAnswer;
use crate::domain::foundation::ItemId;
use crate::domain::session::{Identity, PageState, SessionContext, Trigger, WorkflowError};
use crate::ports::{CommitLatency, CredentialVerifier, PassportArtifact, PassportArtifactService};

/// A page-level user action with its payload.
#[derive(Debug, Clone)]
pub enum UserAction {
    SubmitCredentials {
        identity: String,
        secret: Secret<String>,
    },
    StartAcquisition,
    BeginDiagnostic,
    AnswerStep(DiagnosticAnswer),
    ConfirmAcquisition,
    SubmitOwnershipForm(OwnershipForm),
}

impl UserAction {
    pub fn trigger(&self) -> Trigger {
        match self {
            UserAction::SubmitCredentials { .. } => Trigger::SubmitCredentials,
            UserAction::StartAcquisition => Trigger::StartAcquisition,
            UserAction::BeginDiagnostic => Trigger::BeginDiagnostic,
            UserAction::AnswerStep(_) => Trigger::AnswerStep,
            UserAction::ConfirmAcquisition => Trigger::ConfirmAcquisition,
            UserAction::SubmitOwnershipForm(_) => Trigger::SubmitOwnershipForm,
        }
    }
}

/// Result of an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// Page after the action.
    pub page: PageState,
    /// Set when the action committed an acquisition.
    pub receipt: Option<CommitReceipt>,
}

impl ActionOutcome {
    fn page(page: PageState) -> Self {
        Self {
            page,
            receipt: None,
        }
    }
}

/// Dispatcher for page actions.
pub struct PageStateMachine {
    verifier: Arc<dyn CredentialVerifier>,
    latency: Arc<dyn CommitLatency>,
    passport: Arc<dyn PassportArtifactService>,
}

impl PageStateMachine {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        latency: Arc<dyn CommitLatency>,
        passport: Arc<dyn PassportArtifactService>,
    ) -> Self {
        Self {
            verifier,
            latency,
            passport,
        }
    }

    /// Applies `action` to `ctx`.
    ///
    /// On error the context is unchanged.
    pub async fn dispatch(
        &self,
        ctx: &mut SessionContext,
        action: UserAction,
    ) -> Result<ActionOutcome, WorkflowError> {
        let from = ctx.page();
        let trigger = action.trigger();

        if let Err(err) = ctx.ensure_accepts(trigger) {
            tracing::warn!(page = %from, trigger = %trigger, "Rejected action for current page");
            return Err(err);
        }

        let outcome = match action {
            UserAction::SubmitCredentials { identity, secret } => {
                self.sign_in(ctx, &identity, &secret).await?
            }
            UserAction::StartAcquisition => ActionOutcome::page(ctx.start_acquisition()?),
            UserAction::BeginDiagnostic => ActionOutcome::page(ctx.begin_diagnostic()?),
            UserAction::AnswerStep(answer) => ActionOutcome::page(ctx.answer_step(answer)?),
            UserAction::ConfirmAcquisition => ActionOutcome::page(ctx.confirm_acquisition()?),
            UserAction::SubmitOwnershipForm(form) => self.acquire(ctx, &form).await?,
        };

        tracing::info!(
            session_id = %ctx.id(),
            trigger = %trigger,
            from = %from,
            to = %outcome.page,
            "Page transition"
        );
        Ok(outcome)
    }

    async fn sign_in(
        &self,
        ctx: &mut SessionContext,
        login: &str,
        secret: &Secret<String>,
    ) -> Result<ActionOutcome, WorkflowError> {
        let identity = match Identity::from_login(login) {
            Ok(identity) => identity,
            Err(_) => {
                tracing::warn!("Login rejected: no display name derivable from identity");
                return Err(WorkflowError::AuthenticationFailed);
            }
        };

        if !self.verifier.verify(identity.login(), secret).await {
            tracing::warn!(login = %identity.login(), "Login rejected by credential verifier");
            return Err(WorkflowError::AuthenticationFailed);
        }

        Ok(ActionOutcome::page(ctx.sign_in(identity)?))
    }

    /// Pending → wait → Commit.
    async fn acquire(
        &self,
        ctx: &mut SessionContext,
        form: &OwnershipForm,
    ) -> Result<ActionOutcome, WorkflowError> {
        let pending = ctx.stage_acquisition(form)?;
        tracing::debug!(
            item_id = %pending.item().id(),
            latency_ms = self.latency.duration().as_millis() as u64,
            "Acquisition pending"
        );

        self.latency.settle().await;

        let receipt = ctx.commit_acquisition(pending)?;
        tracing::info!(
            item_id = %receipt.item.id(),
            transaction_id = %receipt.certificate.transaction_id,
            total_carbon_kg = receipt.total_carbon_kg,
            "Acquisition committed"
        );

        Ok(ActionOutcome {
            page: ctx.page(),
            receipt: Some(receipt),
        })
    }

    /// Renders the passport of an item in the collection.
    ///
    /// Valid on `Home` only; the page does not change.
    pub async fn view_passport(
        &self,
        ctx: &SessionContext,
        item_id: &ItemId,
    ) -> Result<PassportArtifact, WorkflowError> {
        let item = ctx.passport_item(item_id).map_err(|err| {
            tracing::warn!(page = %ctx.page(), item_id = %item_id, "Passport request rejected");
            err
        })?;

        self.passport.generate(item).await.map_err(|err| {
            tracing::error!(item_id = %item_id, "Passport generation failed: {}", err);
            WorkflowError::Passport(err.to_string())
        })
    }
}
