use crossterm::event::{KeyCode, KeyEvent};

use super::types::*;
use super::wizard::OnboardingWizard;

impl OnboardingWizard {
    /// Handle key events for the current view
    /// Returns `WizardAction` indicating what the app should do
    pub fn handle_key(&mut self, event: KeyEvent) -> WizardAction {
        // Global: Escape goes back
        if event.code == KeyCode::Esc {
            if self.prev_step() {
                return WizardAction::Cancel;
            }
            return WizardAction::None;
        }

        match self.view() {
            StepView::Welcome => self.handle_welcome_key(event),
            StepView::Tutorial => self.handle_tutorial_key(event),
            StepView::AccountChoose => self.handle_account_choose_key(event),
            StepView::AccountSettings => self.handle_account_settings_key(event),
            StepView::SelfHostingConfig => self.handle_self_hosting_config_key(event),
            StepView::SelfHostingRestrictions => self.handle_self_hosting_restrictions_key(event),
            StepView::Done => self.handle_done_key(event),
            StepView::UnknownStep => self.handle_unknown_key(event),
        }
    }

    /// Handle paste events - appends to whichever text input is active
    pub fn handle_paste(&mut self, text: &str) {
        // Take the first line only, stripped of surrounding whitespace
        let clean = text.split(['\r', '\n']).next().unwrap_or("").trim();
        if clean.is_empty() {
            return;
        }

        match self.view() {
            StepView::AccountSettings => self.email_input.push_str(clean),
            StepView::SelfHostingConfig => self.sync_url_input.push_str(clean),
            _ => {}
        }
    }

    /// Welcome: two actions — "Get Started" and the self-hosting link
    fn handle_welcome_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focused_field = self.focused_field.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focused_field = (self.focused_field + 1).min(1);
            }
            KeyCode::Char('1') => self.focused_field = 0,
            KeyCode::Char('2') => self.focused_field = 1,
            KeyCode::Enter => {
                if self.focused_field == 0 {
                    self.goto(WizardStep::Tutorial);
                } else {
                    self.goto(WizardStep::SelfHostingRestrictions);
                }
            }
            _ => {}
        }
        WizardAction::None
    }

    /// Tutorial: page through, then on to the account chooser
    fn handle_tutorial_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Left => {
                self.tutorial_page = self.tutorial_page.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Enter => {
                if self.tutorial_page + 1 < TUTORIAL_PAGES.len() {
                    self.tutorial_page += 1;
                } else {
                    self.tutorial_page = 0;
                    self.goto(WizardStep::AccountChoose);
                }
            }
            _ => {}
        }
        WizardAction::None
    }

    /// Account chooser: pick a provider from the registry.
    /// Enter records the selection, then requests the settings page as a
    /// separate follow-up — the selection itself never moves the wizard.
    fn handle_account_choose_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Up => {
                self.focused_field = self.focused_field.saturating_sub(1);
            }
            KeyCode::Down => {
                self.focused_field = (self.focused_field + 1).min(ACCOUNT_TYPES.len() - 1);
            }
            KeyCode::Enter => {
                let id = ACCOUNT_TYPES[self.focused_field].id;
                self.controller.set_account_type(id);
                self.goto(WizardStep::AccountSettings);
            }
            _ => {}
        }
        WizardAction::None
    }

    /// Account settings: email address entry
    fn handle_account_settings_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Char(c) => {
                self.error_message = None;
                self.email_input.push(c);
            }
            KeyCode::Backspace => {
                self.email_input.pop();
            }
            KeyCode::Enter => {
                if !self.email_input.contains('@') {
                    self.error_message = Some("Enter a valid email address".to_string());
                } else {
                    self.goto(WizardStep::Done);
                }
            }
            _ => {}
        }
        WizardAction::None
    }

    /// Self-hosting config: sync engine URL entry
    fn handle_self_hosting_config_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Char(c) => {
                self.error_message = None;
                self.sync_url_input.push(c);
            }
            KeyCode::Backspace => {
                self.sync_url_input.pop();
            }
            KeyCode::Enter => {
                if self.sync_url_input.trim().is_empty() {
                    self.error_message = Some("Sync engine URL is required".to_string());
                } else {
                    self.goto(WizardStep::AccountSettings);
                }
            }
            _ => {}
        }
        WizardAction::None
    }

    /// Self-hosting restrictions: informational, Enter continues
    fn handle_self_hosting_restrictions_key(&mut self, event: KeyEvent) -> WizardAction {
        if event.code == KeyCode::Enter {
            self.goto(WizardStep::SelfHostingConfig);
        }
        WizardAction::None
    }

    fn handle_done_key(&mut self, event: KeyEvent) -> WizardAction {
        if event.code == KeyCode::Enter {
            return WizardAction::Complete;
        }
        WizardAction::None
    }

    /// Unknown page placeholder: any confirm key recovers to Welcome
    fn handle_unknown_key(&mut self, event: KeyEvent) -> WizardAction {
        if event.code == KeyCode::Enter {
            self.goto(WizardStep::Welcome);
        }
        WizardAction::None
    }
}
