//! Account-Setup Wizard
//!
//! The TUI onboarding flow for crabmail: welcome, tutorial, account
//! chooser (or self-hosting configuration when the environment is
//! self-hosted), account details, done. Page state is owned by a single
//! [`FlowController`]; views request transitions, they never write state.

mod controller;
mod input;
mod navigation;
mod types;
mod wizard;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use types::{
    ACCOUNT_TYPES, AccountTypeInfo, FlowEvent, StepView, TUTORIAL_PAGES, WizardAction, WizardStep,
};

pub use controller::FlowController;
pub use wizard::OnboardingWizard;
