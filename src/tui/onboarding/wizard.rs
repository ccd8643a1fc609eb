use crate::config::{Config, EnvironmentMode};

use super::controller::FlowController;
use super::types::*;

/// Main onboarding wizard state
///
/// Composes the flow controller (canonical step + selection state) with the
/// per-step UI state the views need: focus, text inputs, tutorial paging.
pub struct OnboardingWizard {
    pub controller: FlowController,
    /// Deployment environment, read once at startup; consulted only for
    /// view selection, never mutated
    pub environment: EnvironmentMode,

    /// Index of the focused control on the current view
    pub focused_field: usize,

    /// Tutorial: current page index
    pub tutorial_page: usize,

    /// AccountSettings: email address input
    pub email_input: String,

    /// SelfHostingConfig: sync engine URL input
    pub sync_url_input: String,

    pub error_message: Option<String>,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl OnboardingWizard {
    /// Create a new wizard at the welcome page, pre-filling inputs from
    /// existing config where available
    pub fn new(config: &Config) -> Self {
        Self {
            controller: FlowController::new(),
            environment: config.environment_mode(),
            focused_field: 0,
            tutorial_page: 0,
            email_input: String::new(),
            sync_url_input: config
                .self_hosting
                .sync_engine_url
                .clone()
                .unwrap_or_default(),
            error_message: None,
        }
    }

    /// The canonical current step
    pub fn step(&self) -> &WizardStep {
        self.controller.step()
    }

    /// The view to render for the current state. This is where the
    /// self-hosted environment substitutes the chooser's visual realization
    /// without touching the step value.
    pub fn view(&self) -> StepView {
        StepView::for_state(self.controller.step(), self.environment)
    }

    /// Request a page transition, resetting per-view UI state first
    pub(super) fn goto(&mut self, step: WizardStep) {
        self.error_message = None;
        self.focused_field = 0;
        self.controller.move_to_page(step);
    }

    /// Display name for the selected account type (Done page confirmation).
    /// Unknown ids pass through verbatim — they're opaque to the wizard.
    pub fn selected_account_display(&self) -> Option<&str> {
        let id = self.controller.account_type()?;
        Some(
            ACCOUNT_TYPES
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.display_name)
                .unwrap_or(id),
        )
    }
}
