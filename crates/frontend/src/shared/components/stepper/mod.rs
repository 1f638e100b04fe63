//! Multi-step form primitives
//!
//! - sequence.rs: pure step bookkeeping (tested)
//! - view.rs: `StepperHandle` and the Leptos components built on it

pub mod sequence;
pub mod view;

pub use sequence::{StepSequence, StepStatus};
pub use view::{StepContent, StepIndicator, Stepper, StepperFooter, StepperHandle, StepperHeader};
