use super::types::*;
use super::wizard::OnboardingWizard;

impl OnboardingWizard {
    /// Go back one step.
    ///
    /// Returns `true` when there is nowhere left to go (cancel the wizard).
    /// Back-navigation walks the canonical step, not the rendered view, so
    /// a self-hosted chooser backs out the same way a standard one does.
    pub fn prev_step(&mut self) -> bool {
        self.error_message = None;
        self.focused_field = 0;

        match self.step().clone() {
            WizardStep::Welcome => {
                // Can't go back further — signal "cancel wizard"
                return true;
            }
            WizardStep::Tutorial => {
                self.tutorial_page = 0;
                self.controller.move_to_page(WizardStep::Welcome);
            }
            WizardStep::AccountChoose => {
                self.controller.move_to_page(WizardStep::Welcome);
            }
            WizardStep::SelfHostingRestrictions => {
                self.controller.move_to_page(WizardStep::Welcome);
            }
            WizardStep::SelfHostingConfig => {
                self.controller
                    .move_to_page(WizardStep::SelfHostingRestrictions);
            }
            WizardStep::AccountSettings => {
                self.controller.move_to_page(WizardStep::AccountChoose);
            }
            WizardStep::Done => {
                self.controller.move_to_page(WizardStep::AccountSettings);
            }
            WizardStep::Unknown(_) => {
                // Placeholder page: the only safe direction is home
                self.controller.move_to_page(WizardStep::Welcome);
            }
        }
        false
    }
}
