use super::sequence::{StepSequence, StepStatus};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Copyable handle over a reactive [`StepSequence`].
///
/// Created by the form that owns the steps and passed explicitly to every
/// stepper component that needs it. While locked, navigation requests are
/// ignored; only the owner's [`replace`](Self::replace) still applies.
#[derive(Clone, Copy)]
pub struct StepperHandle {
    sequence: RwSignal<StepSequence>,
    locked: RwSignal<bool>,
}

impl StepperHandle {
    pub fn new(total_steps: usize) -> Self {
        Self {
            sequence: RwSignal::new(StepSequence::new(total_steps)),
            locked: RwSignal::new(false),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn set_locked(&self, locked: bool) {
        if self.locked.get_untracked() != locked {
            self.locked.set(locked);
        }
    }

    pub fn active_step(&self) -> usize {
        self.sequence.with(|s| s.active_step())
    }

    pub fn total_steps(&self) -> usize {
        self.sequence.with_untracked(|s| s.total_steps())
    }

    /// Current position without subscribing
    pub fn snapshot(&self) -> StepSequence {
        self.sequence.get_untracked()
    }

    pub fn replace(&self, sequence: StepSequence) {
        self.sequence.set(sequence);
    }

    pub fn set_active_step(&self, step: usize) {
        if self.locked.get_untracked() {
            return;
        }
        self.sequence.maybe_update(|s| s.set_active_step(step));
    }

    pub fn go_to_next_step(&self) {
        if self.locked.get_untracked() {
            return;
        }
        self.sequence.update(|s| s.go_to_next_step());
    }

    pub fn go_to_prev_step(&self) {
        if self.locked.get_untracked() {
            return;
        }
        self.sequence.update(|s| s.go_to_prev_step());
    }

    pub fn is_first(&self) -> bool {
        self.sequence.with(|s| s.is_first())
    }

    pub fn is_last(&self) -> bool {
        self.sequence.with(|s| s.is_last())
    }

    pub fn is_active(&self, step: usize) -> bool {
        self.sequence.with(|s| s.is_active(step))
    }

    pub fn is_clickable(&self, step: usize) -> bool {
        !self.locked.get() && self.sequence.with(|s| s.is_clickable(step))
    }

    pub fn status(&self, step: usize) -> StepStatus {
        self.sequence.with(|s| s.status(step))
    }

    pub fn progress_percent(&self) -> f64 {
        self.sequence.with(|s| s.progress_percent())
    }
}

#[component]
pub fn Stepper(handle: StepperHandle, children: Children) -> impl IntoView {
    view! {
        <div class="stepper" data-active-step=move || handle.active_step().to_string()>
            {children()}
        </div>
    }
}

/// Indicator row with the progress track behind it
#[component]
pub fn StepperHeader(handle: StepperHandle, children: Children) -> impl IntoView {
    let progress_style = move || format!("width: {}%;", handle.progress_percent());

    view! {
        <div class="stepper__header">
            <div class="stepper__track">
                <div class="stepper__progress" style=progress_style></div>
            </div>
            <div class="stepper__indicators">{children()}</div>
        </div>
    }
}

#[component]
pub fn StepIndicator(
    handle: StepperHandle,
    step: usize,
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    let status = move || handle.status(step);
    let clickable = move || handle.is_clickable(step);

    let class = move || {
        let mut class = format!("stepper__step {}", status().css_class());
        if clickable() {
            class.push_str(" stepper__step--clickable");
        }
        class
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if clickable() {
                    handle.set_active_step(step);
                }
            }
        >
            <div class="stepper__circle">
                {move || {
                    if status() == StepStatus::Completed {
                        icon("check")
                    } else {
                        view! { <span class="stepper__number">{step + 1}</span> }.into_any()
                    }
                }}
            </div>
            <div class="stepper__label">
                <p class="stepper__title">{label}</p>
                {description.map(|d| view! { <p class="stepper__description">{d}</p> })}
            </div>
        </div>
    }
}

/// Body of one step. Inactive bodies are not rendered at all.
#[component]
pub fn StepContent(handle: StepperHandle, step: usize, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || handle.is_active(step)>
            <div class="stepper__content">{children()}</div>
        </Show>
    }
}

#[component]
pub fn StepperFooter(children: Children) -> impl IntoView {
    view! { <div class="stepper__footer">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_handle_ignores_navigation() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = StepperHandle::new(3);
            handle.set_active_step(2);
            handle.set_locked(true);

            assert!(!handle.is_clickable(0));
            handle.set_active_step(0);
            handle.go_to_prev_step();
            assert_eq!(handle.snapshot().active_step(), 2);

            handle.set_locked(false);
            assert!(handle.is_clickable(0));
            handle.set_active_step(0);
            assert_eq!(handle.snapshot().active_step(), 0);
        });
    }

    #[test]
    fn test_replace_applies_while_locked() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = StepperHandle::new(3);
            handle.set_locked(true);

            let mut seq = handle.snapshot();
            seq.go_to_next_step();
            handle.replace(seq);
            assert_eq!(handle.snapshot().active_step(), 1);
        });
    }
}
