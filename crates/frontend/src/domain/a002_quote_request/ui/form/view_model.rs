use super::model::{HttpQuoteStore, QuoteStore};
use super::wizard::{QuotePhase, QuoteWizard, WizardEvent, SUBMIT_FAILED_NOTICE, SUBMIT_OK_NOTICE};
use crate::layout::notice_service::NoticeKind;
use crate::layout::NoticeService;
use crate::shared::components::stepper::StepperHandle;
use contracts::domain::a002_quote_request::{FieldName, QuoteFields, REQUIRED_FIELDS_NOTICE};
use leptos::prelude::*;

/// Notice raised for a wizard outcome, as `(kind, title, message)`
pub fn notice_for(event: &WizardEvent) -> Option<(NoticeKind, &'static str, &'static str)> {
    match event {
        WizardEvent::Blocked => Some((NoticeKind::Error, "Missing information", REQUIRED_FIELDS_NOTICE)),
        WizardEvent::Failed(_) => Some((NoticeKind::Error, "Not sent", SUBMIT_FAILED_NOTICE)),
        WizardEvent::Sent => Some((NoticeKind::Success, "Message sent", SUBMIT_OK_NOTICE)),
        WizardEvent::Moved | WizardEvent::Ignored => None,
    }
}

/// ViewModel for the quote request form.
///
/// Field values, step position and phase live in signals so the inputs can
/// bind to them directly; every command runs on a [`QuoteWizard`] snapshot.
#[derive(Clone, Copy)]
pub struct QuoteFormVm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub company: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub message: RwSignal<String>,
    pub steps: StepperHandle,
    pub phase: RwSignal<QuotePhase>,
    notices: NoticeService,
}

impl QuoteFormVm {
    pub fn new(initial: QuoteFields, notices: NoticeService) -> Self {
        Self {
            name: RwSignal::new(initial.name),
            email: RwSignal::new(initial.email),
            phone: RwSignal::new(initial.phone),
            company: RwSignal::new(initial.company),
            subject: RwSignal::new(initial.subject),
            message: RwSignal::new(initial.message),
            steps: StepperHandle::new(QuoteFields::STEP_COUNT),
            phase: RwSignal::new(QuotePhase::Editing),
            notices,
        }
    }

    fn field(&self, field: FieldName) -> RwSignal<String> {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Phone => self.phone,
            FieldName::Company => self.company,
            FieldName::Subject => self.subject,
            FieldName::Message => self.message,
        }
    }

    /// Field values, tracked
    pub fn fields(&self) -> QuoteFields {
        let mut fields = QuoteFields::new();
        for f in FieldName::ALL {
            fields.set(f, self.field(f).get());
        }
        fields
    }

    fn snapshot(&self) -> QuoteWizard {
        let mut fields = QuoteFields::new();
        for f in FieldName::ALL {
            fields.set(f, self.field(f).get_untracked());
        }
        QuoteWizard {
            steps: self.steps.snapshot(),
            fields,
            phase: self.phase.get_untracked(),
        }
    }

    fn commit(&self, wizard: &QuoteWizard) {
        for f in FieldName::ALL {
            let signal = self.field(f);
            let value = wizard.fields.get(f);
            if signal.with_untracked(|current| current != value) {
                signal.set(value.to_string());
            }
        }
        if self.steps.snapshot() != wizard.steps {
            self.steps.replace(wizard.steps);
        }
        if self.phase.get_untracked() != wizard.phase {
            self.phase.set(wizard.phase);
        }
        self.steps.set_locked(wizard.phase == QuotePhase::Submitting);
    }

    /// Replace subject and message with a pre-filled set, keeping contact details
    pub fn prefill(&self, prefill: &QuoteFields) {
        if prefill.subject.is_empty() && prefill.message.is_empty() {
            return;
        }
        if self.phase.get_untracked() == QuotePhase::Submitting {
            return;
        }
        self.subject.set(prefill.subject.clone());
        self.message.set(prefill.message.clone());
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == QuotePhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase.get() == QuotePhase::Submitted
    }

    /// Tracked version of [`QuoteWizard::can_submit`]
    pub fn can_submit(&self) -> bool {
        let active = self.steps.active_step();
        self.phase.get() == QuotePhase::Editing
            && self.steps.is_last()
            && self.fields().validate_step(active)
    }

    fn report(&self, event: &WizardEvent) {
        match event {
            WizardEvent::Blocked => {
                log::warn!("step {} blocked by validation", self.steps.snapshot().active_step());
            }
            WizardEvent::Failed(reason) => log::error!("quote request failed: {}", reason),
            _ => {}
        }
        if let Some((kind, title, message)) = notice_for(event) {
            match kind {
                NoticeKind::Success => self.notices.success(title, message),
                NoticeKind::Error => self.notices.error(title, message),
            }
        }
    }

    pub fn next_command(&self) {
        let mut wizard = self.snapshot();
        let event = wizard.advance();
        self.commit(&wizard);
        self.report(&event);
    }

    pub fn back_command(&self) {
        let mut wizard = self.snapshot();
        wizard.back();
        self.commit(&wizard);
    }

    pub fn submit_command(&self) {
        let mut wizard = self.snapshot();
        let dto = match wizard.begin_submit() {
            Ok(dto) => dto,
            Err(event) => {
                self.report(&event);
                return;
            }
        };
        self.commit(&wizard);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = HttpQuoteStore.create(&dto).await;
            let mut wizard = this.snapshot();
            let event = wizard.finish_submit(result);
            this.commit(&wizard);
            this.report(&event);
        });
    }

    pub fn reset_command(&self) {
        let mut wizard = self.snapshot();
        wizard.reset();
        self.commit(&wizard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteFields {
        QuoteFields {
            name: "Ana Cruz".into(),
            email: "ana@example.com".into(),
            phone: String::new(),
            company: String::new(),
            subject: "Bulk order".into(),
            message: "Need 40 sheets of marine plywood".into(),
        }
    }

    #[test]
    fn test_blocked_and_failed_raise_error_notices() {
        assert_eq!(
            notice_for(&WizardEvent::Blocked),
            Some((NoticeKind::Error, "Missing information", REQUIRED_FIELDS_NOTICE))
        );
        assert_eq!(
            notice_for(&WizardEvent::Failed("HTTP 500".into())),
            Some((NoticeKind::Error, "Not sent", SUBMIT_FAILED_NOTICE))
        );
        assert_eq!(
            notice_for(&WizardEvent::Sent).map(|(kind, _, message)| (kind, message)),
            Some((NoticeKind::Success, SUBMIT_OK_NOTICE))
        );
        assert_eq!(notice_for(&WizardEvent::Moved), None);
        assert_eq!(notice_for(&WizardEvent::Ignored), None);
    }

    #[test]
    fn test_step_change_during_submit_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = QuoteFormVm::new(filled(), NoticeService::new());
            vm.next_command();
            vm.next_command();
            assert_eq!(vm.steps.snapshot().active_step(), 2);

            let mut wizard = vm.snapshot();
            assert!(wizard.begin_submit().is_ok());
            vm.commit(&wizard);
            assert!(vm.steps.is_locked());

            // what an indicator click does
            assert!(!vm.steps.is_clickable(0));
            vm.steps.set_active_step(0);

            let mut wizard = vm.snapshot();
            wizard.finish_submit(Err("HTTP 500".into()));
            vm.commit(&wizard);

            assert_eq!(vm.steps.snapshot().active_step(), 2);
            assert_eq!(vm.phase.get_untracked(), QuotePhase::Editing);
            assert!(!vm.steps.is_locked());
            assert_eq!(vm.snapshot().fields, filled());
        });
    }
}
