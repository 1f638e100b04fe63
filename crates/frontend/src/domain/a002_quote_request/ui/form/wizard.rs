//! Quote request wizard state machine.
//!
//! Pure state: the view model copies it out of its signals, applies one
//! action and writes it back.

use super::model::QuoteStore;
use crate::shared::components::stepper::StepSequence;
use contracts::domain::a002_quote_request::{QuoteFields, QuoteRequestDto};

pub const SUBMIT_FAILED_NOTICE: &str = "Failed to send message. Please try again.";
pub const SUBMIT_OK_NOTICE: &str = "Message sent successfully! We'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePhase {
    Editing,
    Submitting,
    Submitted,
}

/// What an action did, so the caller can raise the right notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Moved,
    /// The validation gate refused to leave the current step
    Blocked,
    Sent,
    Failed(String),
    /// Action not available in the current phase
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteWizard {
    pub steps: StepSequence,
    pub fields: QuoteFields,
    pub phase: QuotePhase,
}

impl QuoteWizard {
    pub fn new(fields: QuoteFields) -> Self {
        Self {
            steps: StepSequence::new(QuoteFields::STEP_COUNT),
            fields,
            phase: QuotePhase::Editing,
        }
    }

    pub fn active_step(&self) -> usize {
        self.steps.active_step()
    }

    /// "Next": only leaves a step whose required fields are filled
    pub fn advance(&mut self) -> WizardEvent {
        if self.phase != QuotePhase::Editing {
            return WizardEvent::Ignored;
        }
        if !self.fields.validate_step(self.active_step()) {
            return WizardEvent::Blocked;
        }
        self.steps.go_to_next_step();
        WizardEvent::Moved
    }

    pub fn back(&mut self) -> WizardEvent {
        if self.phase != QuotePhase::Editing || self.steps.is_first() {
            return WizardEvent::Ignored;
        }
        self.steps.go_to_prev_step();
        WizardEvent::Moved
    }

    pub fn can_submit(&self) -> bool {
        self.phase == QuotePhase::Editing
            && self.steps.is_last()
            && self.fields.validate_step(self.active_step())
    }

    /// Enter `Submitting` and hand out the request body
    pub fn begin_submit(&mut self) -> Result<QuoteRequestDto, WizardEvent> {
        if self.phase != QuotePhase::Editing || !self.steps.is_last() {
            return Err(WizardEvent::Ignored);
        }
        if !self.fields.validate_all() {
            return Err(WizardEvent::Blocked);
        }
        self.phase = QuotePhase::Submitting;
        Ok(self.fields.to_dto())
    }

    /// Apply the store's answer to a request started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(&mut self, result: Result<(), String>) -> WizardEvent {
        if self.phase != QuotePhase::Submitting {
            return WizardEvent::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = QuotePhase::Submitted;
                self.fields.clear();
                WizardEvent::Sent
            }
            Err(e) => {
                self.phase = QuotePhase::Editing;
                WizardEvent::Failed(e)
            }
        }
    }

    pub async fn submit<S: QuoteStore>(&mut self, store: &S) -> WizardEvent {
        let dto = match self.begin_submit() {
            Ok(dto) => dto,
            Err(event) => return event,
        };
        let result = store.create(&dto).await;
        self.finish_submit(result)
    }

    /// "Send another message": back to an empty first step
    pub fn reset(&mut self) {
        self.steps.reset();
        self.fields.clear();
        self.phase = QuotePhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every request and answers with a fixed result
    struct MockStore {
        result: Result<(), String>,
        received: RefCell<Vec<QuoteRequestDto>>,
    }

    impl MockStore {
        fn answering(result: Result<(), String>) -> Self {
            Self {
                result,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl QuoteStore for MockStore {
        async fn create(&self, dto: &QuoteRequestDto) -> Result<(), String> {
            self.received.borrow_mut().push(dto.clone());
            self.result.clone()
        }
    }

    fn filled() -> QuoteFields {
        QuoteFields {
            name: "Ana Cruz".into(),
            email: "ana@example.com".into(),
            phone: String::new(),
            company: "Cruz Builders".into(),
            subject: "Bulk order".into(),
            message: "Need 40 sheets of marine plywood".into(),
        }
    }

    fn at_last_step() -> QuoteWizard {
        let mut wizard = QuoteWizard::new(filled());
        assert_eq!(wizard.advance(), WizardEvent::Moved);
        assert_eq!(wizard.advance(), WizardEvent::Moved);
        assert_eq!(wizard.active_step(), 2);
        wizard
    }

    #[test]
    fn test_gate_blocks_on_empty_subject() {
        let mut wizard = QuoteWizard::new(QuoteFields::new());
        wizard.fields.name = "Ana".into();
        wizard.fields.email = "ana@example.com".into();

        assert_eq!(wizard.advance(), WizardEvent::Moved);
        assert_eq!(wizard.active_step(), 1);

        assert_eq!(wizard.advance(), WizardEvent::Blocked);
        assert_eq!(wizard.active_step(), 1);
    }

    #[test]
    fn test_gate_ignores_optional_fields() {
        let mut wizard = QuoteWizard::new(QuoteFields::new());
        wizard.fields.phone = "0915".into();
        wizard.fields.company = "Acme".into();
        assert_eq!(wizard.advance(), WizardEvent::Blocked);

        wizard.fields.name = "  ".into();
        wizard.fields.email = "ana@example.com".into();
        assert_eq!(wizard.advance(), WizardEvent::Blocked);
        assert_eq!(wizard.active_step(), 0);
    }

    #[test]
    fn test_back_at_first_step_is_ignored() {
        let mut wizard = QuoteWizard::new(filled());
        assert_eq!(wizard.back(), WizardEvent::Ignored);
        assert_eq!(wizard.active_step(), 0);
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut wizard = QuoteWizard::new(filled());
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(), Err(WizardEvent::Ignored));
        assert_eq!(wizard.phase, QuotePhase::Editing);
    }

    #[test]
    fn test_submit_disabled_while_outstanding() {
        let mut wizard = at_last_step();
        assert!(wizard.can_submit());
        assert!(wizard.begin_submit().is_ok());
        assert_eq!(wizard.phase, QuotePhase::Submitting);
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(), Err(WizardEvent::Ignored));
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let store = MockStore::answering(Ok(()));
        let mut wizard = at_last_step();

        let event = pollster::block_on(wizard.submit(&store));

        assert_eq!(event, WizardEvent::Sent);
        assert_eq!(wizard.phase, QuotePhase::Submitted);
        assert!(wizard.fields.is_empty());

        let received = store.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].phone, None);
        assert_eq!(received[0].company.as_deref(), Some("Cruz Builders"));
    }

    #[test]
    fn test_submit_failure_keeps_state() {
        let store = MockStore::answering(Err("HTTP 500".into()));
        let mut wizard = at_last_step();

        let event = pollster::block_on(wizard.submit(&store));

        assert_eq!(event, WizardEvent::Failed("HTTP 500".into()));
        assert_eq!(wizard.phase, QuotePhase::Editing);
        assert_eq!(wizard.active_step(), 2);
        assert_eq!(wizard.fields, filled());
    }

    #[test]
    fn test_reset_after_submission() {
        let store = MockStore::answering(Ok(()));
        let mut wizard = at_last_step();
        pollster::block_on(wizard.submit(&store));

        wizard.reset();
        assert_eq!(wizard.phase, QuotePhase::Editing);
        assert_eq!(wizard.active_step(), 0);
        assert!(wizard.fields.is_empty());
    }

    #[test]
    fn test_product_prefill_reaches_store() {
        let store = MockStore::answering(Ok(()));
        let mut wizard = QuoteWizard::new(QuoteFields::from_product_ref(Some("roofing-tilespan-1")));
        assert_eq!(wizard.fields.subject, "Quote Request: Tilespan Roofing");

        wizard.fields.name = "Ana".into();
        wizard.fields.email = "ana@example.com".into();
        wizard.advance();
        wizard.advance();
        pollster::block_on(wizard.submit(&store));

        let received = store.received.borrow();
        assert!(received[0].message.contains("Product: Tilespan Roofing"));
    }
}
