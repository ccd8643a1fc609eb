//! Wizard flow controller.
//!
//! Single owner of "which page is active" and of the pending account-type
//! selection. Step views never write state directly; they call
//! [`FlowController::move_to_page`] / [`FlowController::set_account_type`]
//! and get re-rendered off the resulting notification.

use super::types::{FlowEvent, WizardStep};

type Subscriber = Box<dyn FnMut(&FlowEvent)>;

/// Owns the wizard's current-step state and transition handling.
///
/// Both mutating operations are fire-and-forget: no validation against a
/// transition graph, no error returns. Callers are trusted to request
/// reachable pages; a bad request is a caller bug, not a crash (see
/// [`FlowController::move_to_page_named`]).
pub struct FlowController {
    step: WizardStep,
    account_type: Option<String>,
    subscribers: Vec<Subscriber>,
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowController {
    /// Create a controller at the wizard entry point
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            account_type: None,
            subscribers: Vec::new(),
        }
    }

    /// The currently active step
    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// The currently selected account type, if any. Passthrough state for
    /// downstream account linking — nothing in the wizard consumes it
    /// beyond the confirmation copy on the final page.
    pub fn account_type(&self) -> Option<&str> {
        self.account_type.as_deref()
    }

    /// Unconditionally set the current step. Last write wins; transitions
    /// are applied in call order and each one notifies subscribers before
    /// the call returns.
    pub fn move_to_page(&mut self, step: WizardStep) {
        tracing::debug!(from = %self.step.name(), to = %step.name(), "move_to_page");
        self.step = step.clone();
        self.notify(FlowEvent::PageChanged(step));
    }

    /// Set the current step by page name (deep links, config-driven entry).
    ///
    /// Unknown names are accepted rather than rejected — the step becomes a
    /// placeholder the views can render — but logged as a caller bug.
    pub fn move_to_page_named(&mut self, name: &str) {
        match WizardStep::from_name(name) {
            Some(step) => self.move_to_page(step),
            None => {
                tracing::warn!(requested = name, "unknown wizard page requested");
                self.move_to_page(WizardStep::Unknown(name.to_string()));
            }
        }
    }

    /// Record the chosen account provider. Overwrites any earlier choice
    /// and does NOT change the current step; the follow-up transition is a
    /// separate request by whoever needs it.
    pub fn set_account_type(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(account_type = %id, "set_account_type");
        self.account_type = Some(id.clone());
        self.notify(FlowEvent::AccountTypeSelected(id));
    }

    /// Register a state-change callback. Callbacks run synchronously after
    /// each mutation, in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&FlowEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&mut self, event: FlowEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}
