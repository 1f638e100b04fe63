use super::view_model::QuoteFormVm;
use crate::shared::components::stepper::{
    StepContent, StepIndicator, Stepper, StepperFooter, StepperHeader,
};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
fn FieldLabel(#[prop(into)] text: String, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <label class="form__label">
            {text}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

fn summary_row(label: &'static str, value: String) -> impl IntoView {
    let shown = if value.trim().is_empty() { "—".to_string() } else { value };
    view! {
        <p><strong>{label}": "</strong>{shown}</p>
    }
}

/// Read-only recap shown next to the message field
#[component]
fn Summary(vm: QuoteFormVm) -> impl IntoView {
    view! {
        <div class="quote-form__summary">
            <h4>"Summary"</h4>
            {move || summary_row("Name", vm.name.get())}
            {move || summary_row("Email", vm.email.get())}
            {move || {
                let phone = vm.phone.get();
                (!phone.is_empty()).then(|| summary_row("Phone", phone))
            }}
            {move || {
                let company = vm.company.get();
                (!company.is_empty()).then(|| summary_row("Company", company))
            }}
            {move || summary_row("Subject", vm.subject.get())}
        </div>
    }
}

#[component]
fn SubmittedView(vm: QuoteFormVm) -> impl IntoView {
    view! {
        <div class="quote-form__done">
            <div class="quote-form__done-icon">{icon("circle-check")}</div>
            <h3>"Message Sent!"</h3>
            <p>"Thank you for contacting us. Our team will get back to you within 24 hours."</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.reset_command()>
                "Send Another Message"
            </Button>
        </div>
    }
}

/// Three-step quote request form: contact details, subject, message
#[component]
pub fn QuoteForm(vm: QuoteFormVm, #[prop(into)] is_quote: Signal<bool>) -> impl IntoView {
    let steps = vm.steps;
    let locked = Signal::derive(move || steps.is_locked());

    view! {
        <Show when=move || !vm.is_submitted() fallback=move || view! { <SubmittedView vm=vm /> }>
            <h2 class="quote-form__title">
                {move || if is_quote.get() { "Request a Quote" } else { "Send us a Message" }}
            </h2>
            <p class="quote-form__lead">
                "Fill out the form below and we'll get back to you as soon as possible."
            </p>

            <Stepper handle=steps>
                <StepperHeader handle=steps>
                    <StepIndicator handle=steps step=0 label="Your Info" />
                    <StepIndicator handle=steps step=1 label="Subject" />
                    <StepIndicator handle=steps step=2 label="Message" />
                </StepperHeader>

                <StepContent handle=steps step=0>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <FieldLabel text="Full Name" required=true />
                            <Input value=vm.name placeholder="Enter your full name" disabled=locked />
                        </div>
                        <div class="form__group">
                            <FieldLabel text="Email Address" required=true />
                            <Input value=vm.email placeholder="your@email.com" disabled=locked />
                        </div>
                        <div class="form__group">
                            <FieldLabel text="Phone Number" />
                            <Input value=vm.phone placeholder="+63 XXX XXX XXXX" disabled=locked />
                        </div>
                        <div class="form__group">
                            <FieldLabel text="Company Name" />
                            <Input value=vm.company placeholder="Your company (optional)" disabled=locked />
                        </div>
                    </Flex>
                </StepContent>

                <StepContent handle=steps step=1>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <FieldLabel text="Subject" required=true />
                            <Input value=vm.subject placeholder="What is your inquiry about?" disabled=locked />
                        </div>
                        <div class="quote-form__tip">
                            <strong>"Tip: "</strong>
                            "Be specific about your needs. For example: \"Bulk order of roofing materials\" or \"Quote for construction project\""
                        </div>
                    </Flex>
                </StepContent>

                <StepContent handle=steps step=2>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <FieldLabel text="Your Message" required=true />
                            <Textarea
                                value=vm.message
                                placeholder="Tell us about your project or inquiry..."
                                disabled=locked
                                attr:rows=6
                            />
                        </div>
                        <Summary vm=vm />
                    </Flex>
                </StepContent>

                <StepperFooter>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || steps.is_first() || vm.is_submitting())
                        on_click=move |_| vm.back_command()
                    >
                        {icon("arrow-left")}
                        "Back"
                    </Button>

                    <Show
                        when=move || steps.is_last()
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next_command()>
                                "Next"
                                {icon("arrow-right")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_submit())
                            on_click=move |_| vm.submit_command()
                        >
                            {move || if vm.is_submitting() {
                                view! { <Spinner size=SpinnerSize::Tiny /> "Sending..." }.into_any()
                            } else {
                                view! { "Send Message" {icon("send")} }.into_any()
                            }}
                        </Button>
                    </Show>
                </StepperFooter>
            </Stepper>
        </Show>
    }
}
