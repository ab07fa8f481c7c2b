//! SessionContext aggregate - everything one signed-in user owns.
//!
//! Every mutator checks that its trigger is accepted on the current page
//! before touching any field, and mutates only once all fallible work is
//! done. A rejected action therefore leaves the context untouched.

use serde::Serialize;

use crate::domain::acquisition::{
    AcquisitionCommitProtocol, CommitReceipt, OwnershipForm, PendingAcquisition,
};
use crate::domain::collection::{seeded_ledger, CollectionItem, CollectionLedger};
use crate::domain::conversation::{Conversation, Message};
use crate::domain::diagnostic::{
    DiagnosticAnswer, DiagnosticProgress, DiagnosticTree, ItemTemplate, QuestionView,
    StepOutcome,
};
use crate::domain::foundation::{DomainError, ItemId, SessionId, StateMachine, Timestamp};

use super::{Identity, PageState, Trigger, WorkflowError};

/// The session aggregate.
///
/// # Invariants
///
/// - `identity` is bound once, by the only `Login → Home` transition
/// - `page` only changes through `PageState::transition_to`
/// - `ledger` and `conversation` are append-only
/// - `recommendation` is set exactly when the diagnostic has completed and
///   the acquisition has not been committed yet
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: SessionId,
    identity: Option<Identity>,
    page: PageState,
    diagnostic: DiagnosticProgress,
    recommendation: Option<ItemTemplate>,
    ledger: CollectionLedger,
    conversation: Conversation,
    created_at: Timestamp,
}

impl SessionContext {
    /// Creates a signed-out context on the login page.
    pub fn new(ledger: CollectionLedger) -> Self {
        Self {
            id: SessionId::new(),
            identity: None,
            page: PageState::Login,
            diagnostic: DiagnosticProgress::new(),
            recommendation: None,
            ledger,
            conversation: Conversation::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a signed-out context holding the house collection.
    pub fn seeded() -> Result<Self, DomainError> {
        Ok(Self::new(seeded_ledger()?))
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn diagnostic(&self) -> &DiagnosticProgress {
        &self.diagnostic
    }

    pub fn recommendation(&self) -> Option<&ItemTemplate> {
        self.recommendation.as_ref()
    }

    pub fn ledger(&self) -> &CollectionLedger {
        &self.ledger
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// The pending diagnostic question, only while on the quiz page.
    pub fn current_question(&self) -> Option<QuestionView> {
        if self.page != PageState::Quiz {
            return None;
        }
        DiagnosticTree::question_at(self.diagnostic.step(), self.diagnostic.answers())
    }

    // ───────────────────────────────────────────────────────────────
    // Guards
    // ───────────────────────────────────────────────────────────────

    /// Rejects triggers that are not listed for the current page.
    pub fn ensure_accepts(&self, trigger: Trigger) -> Result<(), WorkflowError> {
        if self.page.accepts(trigger) {
            Ok(())
        } else {
            Err(WorkflowError::invalid_transition(self.page, trigger))
        }
    }

    /// Returns the signed-in identity.
    pub fn require_identity(&self) -> Result<&Identity, WorkflowError> {
        match (&self.identity, self.page.is_signed_in()) {
            (Some(identity), true) => Ok(identity),
            _ => Err(WorkflowError::NotSignedIn),
        }
    }

    fn next_page(&self, target: PageState) -> Result<PageState, WorkflowError> {
        self.page
            .transition_to(target)
            .map_err(|err| WorkflowError::Internal(err.to_string()))
    }

    // ───────────────────────────────────────────────────────────────
    // Page actions
    // ───────────────────────────────────────────────────────────────

    /// Binds the verified identity and moves to `Home`.
    ///
    /// Credential checking happens before this call; this only records
    /// the outcome.
    pub fn sign_in(&mut self, identity: Identity) -> Result<PageState, WorkflowError> {
        self.ensure_accepts(Trigger::SubmitCredentials)?;
        if self.identity.is_some() {
            return Err(WorkflowError::Internal(
                "identity is already bound".to_string(),
            ));
        }
        let next = self.next_page(PageState::Home)?;

        self.identity = Some(identity);
        self.page = next;
        Ok(next)
    }

    /// `Home → AddProduct`.
    pub fn start_acquisition(&mut self) -> Result<PageState, WorkflowError> {
        self.ensure_accepts(Trigger::StartAcquisition)?;
        let next = self.next_page(PageState::AddProduct)?;
        self.page = next;
        Ok(next)
    }

    /// `AddProduct → Quiz`, starting a fresh diagnostic run at step 1.
    pub fn begin_diagnostic(&mut self) -> Result<PageState, WorkflowError> {
        self.ensure_accepts(Trigger::BeginDiagnostic)?;
        let next = self.next_page(PageState::Quiz)?;

        self.diagnostic.begin();
        self.recommendation = None;
        self.page = next;
        Ok(next)
    }

    /// Records the answer to the current question.
    ///
    /// Stays on `Quiz` until the fourth answer, which computes the
    /// recommendation and moves to `Result`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the answer is of the wrong kind or not offered for
    ///   the recorded category; nothing is recorded
    pub fn answer_step(&mut self, answer: DiagnosticAnswer) -> Result<PageState, WorkflowError> {
        self.ensure_accepts(Trigger::AnswerStep)?;

        let mut progress = self.diagnostic.clone();
        let outcome = progress.record(answer)?;

        let (next, recommendation) = match outcome {
            StepOutcome::Next(_) => (self.next_page(PageState::Quiz)?, None),
            StepOutcome::Complete => {
                let template = DiagnosticTree::recommend(progress.answers()).ok_or_else(|| {
                    WorkflowError::Internal("completed diagnostic without category".to_string())
                })?;
                (self.next_page(PageState::Result)?, Some(template))
            }
        };

        self.diagnostic = progress;
        self.recommendation = recommendation;
        self.page = next;
        Ok(next)
    }

    /// `Result → BlockchainForm`.
    pub fn confirm_acquisition(&mut self) -> Result<PageState, WorkflowError> {
        self.ensure_accepts(Trigger::ConfirmAcquisition)?;
        let next = self.next_page(PageState::BlockchainForm)?;
        self.page = next;
        Ok(next)
    }

    /// Validates the ownership form and builds the pending acquisition.
    ///
    /// Does not change the context: on error the page stays on
    /// `BlockchainForm` and the ledger is untouched.
    pub fn stage_acquisition(
        &self,
        form: &OwnershipForm,
    ) -> Result<PendingAcquisition, WorkflowError> {
        self.ensure_accepts(Trigger::SubmitOwnershipForm)?;
        let pending = AcquisitionCommitProtocol::stage(
            &self.ledger,
            self.recommendation.as_ref(),
            self.diagnostic.answers().material,
            form,
        )?;
        Ok(pending)
    }

    /// Appends the pending item and returns to `Home` in one step.
    ///
    /// Either both the append and the page change are applied or neither.
    pub fn commit_acquisition(
        &mut self,
        pending: PendingAcquisition,
    ) -> Result<CommitReceipt, WorkflowError> {
        self.ensure_accepts(Trigger::SubmitOwnershipForm)?;
        let next = self.next_page(PageState::Home)?;

        let receipt = AcquisitionCommitProtocol::commit(&mut self.ledger, pending)?;
        self.recommendation = None;
        self.page = next;
        Ok(receipt)
    }

    /// Looks up a collection item for its passport. Valid on `Home` only.
    pub fn passport_item(&self, id: &ItemId) -> Result<&CollectionItem, WorkflowError> {
        self.ensure_accepts(Trigger::ViewPassport)?;
        self.ledger
            .get(id)
            .ok_or_else(|| WorkflowError::ItemNotFound(id.clone()))
    }

    // ───────────────────────────────────────────────────────────────
    // Conversation
    // ───────────────────────────────────────────────────────────────

    /// Appends a completed assistant turn. Independent of the page.
    pub fn record_exchange(&mut self, prompt: Message, reply: Message) -> Result<(), WorkflowError> {
        self.require_identity()?;
        self.conversation.record_exchange(prompt, reply);
        Ok(())
    }

    /// Read-only view for callers outside the domain.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            page: self.page,
            identity: self.identity.clone(),
            diagnostic: self.diagnostic.clone(),
            question: self.current_question(),
            recommendation: self.recommendation,
            items: self.ledger.items().to_vec(),
            total_carbon_kg: self.ledger.total_carbon_kg(),
            conversation: self.conversation.messages().to_vec(),
            accepted_triggers: self.page.accepted_triggers(),
        }
    }
}

/// Point-in-time copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub page: PageState,
    pub identity: Option<Identity>,
    pub diagnostic: DiagnosticProgress,
    pub question: Option<QuestionView>,
    pub recommendation: Option<ItemTemplate>,
    pub items: Vec<CollectionItem>,
    pub total_carbon_kg: f64,
    pub conversation: Vec<Message>,
    pub accepted_triggers: Vec<Trigger>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::acquisition::Boutique;
    use crate::domain::diagnostic::{Category, Material, Priority, Usage, ALMA, PILLOW};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn signed_in() -> SessionContext {
        let mut ctx = SessionContext::seeded().unwrap();
        ctx.sign_in(Identity::from_login("yannick.v@maison.com").unwrap())
            .unwrap();
        ctx
    }

    fn on_result(category: Category, usage: Usage, material: Material) -> SessionContext {
        let mut ctx = signed_in();
        ctx.start_acquisition().unwrap();
        ctx.begin_diagnostic().unwrap();
        ctx.answer_step(DiagnosticAnswer::Category(category)).unwrap();
        ctx.answer_step(DiagnosticAnswer::Usage(usage)).unwrap();
        ctx.answer_step(DiagnosticAnswer::Material(material)).unwrap();
        ctx.answer_step(DiagnosticAnswer::Priority(Priority::Balance))
            .unwrap();
        ctx
    }

    fn form(holder: &str) -> OwnershipForm {
        OwnershipForm::new(
            holder,
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            Boutique::PlaceVendome,
        )
    }

    // ════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn new_context_starts_signed_out_on_login() {
        let ctx = SessionContext::seeded().unwrap();
        assert_eq!(ctx.page(), PageState::Login);
        assert!(ctx.identity().is_none());
        assert_eq!(ctx.diagnostic().step(), 0);
        assert_eq!(ctx.ledger().len(), 2);
        assert!(ctx.conversation().is_empty());
    }

    #[test]
    fn sign_in_binds_identity_and_goes_home() {
        let ctx = signed_in();
        assert_eq!(ctx.page(), PageState::Home);
        assert_eq!(ctx.identity().unwrap().display_name(), "Yannick");
    }

    #[test]
    fn second_sign_in_is_an_invalid_transition() {
        let mut ctx = signed_in();
        let err = ctx
            .sign_in(Identity::from_login("camille@maison.com").unwrap())
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
        assert_eq!(ctx.identity().unwrap().display_name(), "Yannick");
    }

    // ════════════════════════════════════════════════════════════════
    // Diagnostic
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn begin_diagnostic_resets_progress() {
        let mut ctx = signed_in();
        ctx.start_acquisition().unwrap();
        ctx.begin_diagnostic().unwrap();
        assert_eq!(ctx.page(), PageState::Quiz);
        assert_eq!(ctx.diagnostic().step(), 1);
        assert_eq!(ctx.diagnostic().answers().count(), 0);
        assert_eq!(ctx.current_question().unwrap().step, 1);
    }

    #[test]
    fn answers_advance_then_complete() {
        let mut ctx = signed_in();
        ctx.start_acquisition().unwrap();
        ctx.begin_diagnostic().unwrap();

        let page = ctx
            .answer_step(DiagnosticAnswer::Category(Category::TechnicalReadyToWear))
            .unwrap();
        assert_eq!(page, PageState::Quiz);
        assert_eq!(ctx.diagnostic().step(), 2);
        assert!(ctx.recommendation().is_none());

        ctx.answer_step(DiagnosticAnswer::Usage(Usage::ColdPerformance))
            .unwrap();
        ctx.answer_step(DiagnosticAnswer::Material(Material::RecycledDownFill))
            .unwrap();
        let page = ctx
            .answer_step(DiagnosticAnswer::Priority(Priority::ReducedImpact))
            .unwrap();

        assert_eq!(page, PageState::Result);
        assert_eq!(ctx.diagnostic().step(), 4);
        assert_eq!(ctx.recommendation(), Some(&PILLOW));
        assert!(ctx.current_question().is_none());
    }

    #[test]
    fn invalid_answer_leaves_context_unchanged() {
        let mut ctx = signed_in();
        ctx.start_acquisition().unwrap();
        ctx.begin_diagnostic().unwrap();
        ctx.answer_step(DiagnosticAnswer::Category(Category::IconicLeatherGoods))
            .unwrap();

        let before = ctx.snapshot();
        let err = ctx
            .answer_step(DiagnosticAnswer::Usage(Usage::MidSeason))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Validation { .. }));
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn answering_outside_quiz_is_rejected() {
        let mut ctx = signed_in();
        let err = ctx
            .answer_step(DiagnosticAnswer::Category(Category::IconicLeatherGoods))
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::invalid_transition(PageState::Home, Trigger::AnswerStep)
        );
        assert_eq!(ctx.page(), PageState::Home);
    }

    // ════════════════════════════════════════════════════════════════
    // Acquisition
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn commit_appends_item_and_returns_home() {
        let mut ctx = on_result(Category::IconicLeatherGoods, Usage::Travel, Material::MonogramCanvas);
        assert_eq!(ctx.recommendation(), Some(&ALMA));
        ctx.confirm_acquisition().unwrap();

        let pending = ctx.stage_acquisition(&form("Yannick V.")).unwrap();
        let receipt = ctx.commit_acquisition(pending).unwrap();

        assert_eq!(ctx.page(), PageState::Home);
        assert_eq!(ctx.ledger().len(), 3);
        assert_eq!(receipt.item.material(), "Toile Monogram");
        assert!((ctx.ledger().total_carbon_kg() - 63.0).abs() < 1e-9);
        assert!(ctx.recommendation().is_none());
    }

    #[test]
    fn blank_holder_keeps_blockchain_form() {
        let mut ctx = on_result(
            Category::TechnicalReadyToWear,
            Usage::MidSeason,
            Material::RecycledNylon,
        );
        ctx.confirm_acquisition().unwrap();

        let err = ctx.stage_acquisition(&form("   ")).unwrap_err();
        assert!(matches!(err, WorkflowError::Validation { ref field, .. } if field == "holder_name"));
        assert_eq!(ctx.page(), PageState::BlockchainForm);
        assert_eq!(ctx.ledger().len(), 2);
    }

    #[test]
    fn staging_from_result_page_is_rejected() {
        let ctx = on_result(Category::IconicLeatherGoods, Usage::Daily, Material::EpiLeather);
        assert!(matches!(
            ctx.stage_acquisition(&form("Yannick V.")),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn passport_lookup_only_on_home() {
        let mut ctx = signed_in();
        let alma = ItemId::new("alma").unwrap();
        assert_eq!(ctx.passport_item(&alma).unwrap().name(), "Alma BB");

        let missing = ItemId::new("speedy").unwrap();
        assert_eq!(
            ctx.passport_item(&missing).unwrap_err(),
            WorkflowError::ItemNotFound(missing)
        );

        ctx.start_acquisition().unwrap();
        assert!(matches!(
            ctx.passport_item(&alma),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    // ════════════════════════════════════════════════════════════════
    // Conversation
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn exchange_requires_sign_in() {
        let mut ctx = SessionContext::seeded().unwrap();
        let err = ctx
            .record_exchange(Message::user("Bonjour").unwrap(), Message::assistant("Bonjour"))
            .unwrap_err();
        assert_eq!(err, WorkflowError::NotSignedIn);
        assert!(ctx.conversation().is_empty());
    }

    #[test]
    fn exchange_is_allowed_on_any_signed_in_page() {
        let mut ctx = signed_in();
        ctx.start_acquisition().unwrap();
        ctx.record_exchange(Message::user("Bonjour").unwrap(), Message::assistant("Bonjour"))
            .unwrap();
        assert_eq!(ctx.conversation().len(), 2);
        assert_eq!(ctx.page(), PageState::AddProduct);
    }

    // ════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════

    #[derive(Debug, Clone)]
    enum Action {
        Start,
        Begin,
        Answer(DiagnosticAnswer),
        Confirm,
        Submit(bool),
    }

    fn any_answer() -> impl Strategy<Value = DiagnosticAnswer> {
        prop_oneof![
            Just(DiagnosticAnswer::Category(Category::IconicLeatherGoods)),
            Just(DiagnosticAnswer::Category(Category::TechnicalReadyToWear)),
            Just(DiagnosticAnswer::Usage(Usage::Daily)),
            Just(DiagnosticAnswer::Usage(Usage::ColdPerformance)),
            Just(DiagnosticAnswer::Material(Material::EpiLeather)),
            Just(DiagnosticAnswer::Material(Material::RecycledNylon)),
            Just(DiagnosticAnswer::Priority(Priority::Aesthetics)),
            Just(DiagnosticAnswer::Priority(Priority::ReducedImpact)),
        ]
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Start),
            Just(Action::Begin),
            any_answer().prop_map(Action::Answer),
            Just(Action::Confirm),
            any::<bool>().prop_map(Action::Submit),
        ]
    }

    fn apply(ctx: &mut SessionContext, action: Action) {
        let _ = match action {
            Action::Start => ctx.start_acquisition().map(|_| ()),
            Action::Begin => ctx.begin_diagnostic().map(|_| ()),
            Action::Answer(answer) => ctx.answer_step(answer).map(|_| ()),
            Action::Confirm => ctx.confirm_acquisition().map(|_| ()),
            Action::Submit(valid) => {
                let holder = if valid { "Yannick V." } else { "" };
                ctx.stage_acquisition(&form(holder))
                    .and_then(|pending| ctx.commit_acquisition(pending))
                    .map(|_| ())
            }
        };
    }

    proptest! {
        #[test]
        fn page_stays_defined_and_carbon_never_decreases(
            actions in prop::collection::vec(any_action(), 0..60)
        ) {
            let mut ctx = signed_in();
            let mut last_total = ctx.ledger().total_carbon_kg();
            let mut last_len = ctx.ledger().len();

            for action in actions {
                apply(&mut ctx, action);

                prop_assert!(PageState::ALL.contains(&ctx.page()));

                let total = ctx.ledger().total_carbon_kg();
                let sum: f64 = ctx.ledger().items().iter().map(|i| i.carbon_kg()).sum();
                prop_assert!(total >= last_total);
                prop_assert!((total - sum).abs() < 1e-9);

                let len = ctx.ledger().len();
                prop_assert!(len == last_len || len == last_len + 1);
                last_total = total;
                last_len = len;
            }
        }
    }
}
