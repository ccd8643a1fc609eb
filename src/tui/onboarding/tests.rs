use super::*;
use crate::config::{Config, EnvironmentMode};
use crate::tui::onboarding_render::render_onboarding;
use crossterm::event::{KeyCode, KeyEvent};
use std::cell::RefCell;
use std::rc::Rc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, crossterm::event::KeyModifiers::empty())
}

/// Wizard with an explicit environment mode, independent of whatever
/// config/env vars exist on the machine running the tests
fn wizard_with_mode(mode: EnvironmentMode) -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new(&Config::default());
    wizard.environment = mode;
    wizard
}

#[test]
fn test_wizard_creation() {
    let wizard = wizard_with_mode(EnvironmentMode::Standard);
    assert_eq!(*wizard.step(), WizardStep::Welcome);
    assert_eq!(wizard.view(), StepView::Welcome);
    assert!(wizard.controller.account_type().is_none());
    assert!(wizard.error_message.is_none());
}

// ── flow controller ──

#[test]
fn test_move_to_page_last_write_wins() {
    let mut controller = FlowController::new();
    let sequence = [
        WizardStep::Tutorial,
        WizardStep::Done,
        WizardStep::AccountChoose,
        WizardStep::AccountChoose,
        WizardStep::Welcome,
    ];
    for step in &sequence {
        controller.move_to_page(step.clone());
        assert_eq!(controller.step(), step);
    }
    assert_eq!(*controller.step(), WizardStep::Welcome);
}

#[test]
fn test_set_account_type_overwrites_without_transition() {
    let mut controller = FlowController::new();
    controller.move_to_page(WizardStep::AccountChoose);

    controller.set_account_type("gmail");
    assert_eq!(controller.account_type(), Some("gmail"));
    assert_eq!(*controller.step(), WizardStep::AccountChoose);

    controller.set_account_type("yahoo");
    assert_eq!(controller.account_type(), Some("yahoo"));
    assert_eq!(*controller.step(), WizardStep::AccountChoose);
}

#[test]
fn test_subscribers_run_in_registration_order() {
    let mut controller = FlowController::new();
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second"] {
        let log = log.clone();
        controller.subscribe(move |event| {
            let what = match event {
                FlowEvent::PageChanged(step) => format!("{}:page:{}", tag, step.name()),
                FlowEvent::AccountTypeSelected(id) => format!("{}:type:{}", tag, id),
            };
            log.borrow_mut().push(what);
        });
    }

    controller.move_to_page(WizardStep::Tutorial);
    controller.set_account_type("imap");

    assert_eq!(
        *log.borrow(),
        vec![
            "first:page:tutorial",
            "second:page:tutorial",
            "first:type:imap",
            "second:type:imap",
        ]
    );
}

#[test]
fn test_unknown_page_accepted_as_placeholder() {
    let mut controller = FlowController::new();
    controller.move_to_page_named("bogus-page");
    assert_eq!(*controller.step(), WizardStep::Unknown("bogus-page".into()));
    assert_eq!(controller.step().name(), "bogus-page");
    assert_eq!(
        StepView::for_state(controller.step(), EnvironmentMode::Standard),
        StepView::UnknownStep
    );
}

#[test]
fn test_known_page_names_round_trip() {
    for name in [
        "welcome",
        "tutorial",
        "account-choose",
        "account-settings",
        "self-hosting-config",
        "self-hosting-restrictions",
        "done",
    ] {
        let step = WizardStep::from_name(name).expect(name);
        assert_eq!(step.name(), name);
    }
    assert!(WizardStep::from_name("nope").is_none());
}

// ── view selection ──

#[test]
fn test_self_hosted_env_substitutes_chooser_view() {
    for mode in [EnvironmentMode::Custom, EnvironmentMode::Local] {
        assert_eq!(
            StepView::for_state(&WizardStep::AccountChoose, mode),
            StepView::SelfHostingConfig
        );
    }
    assert_eq!(
        StepView::for_state(&WizardStep::AccountChoose, EnvironmentMode::Standard),
        StepView::AccountChoose
    );
    // Substitution only applies to the chooser
    assert_eq!(
        StepView::for_state(&WizardStep::Welcome, EnvironmentMode::Custom),
        StepView::Welcome
    );
}

#[test]
fn test_substitution_is_render_time_only() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Custom);
    wizard.controller.move_to_page(WizardStep::AccountChoose);

    assert_eq!(wizard.view(), StepView::SelfHostingConfig);
    // The canonical step value is untouched by view substitution
    assert_eq!(*wizard.step(), WizardStep::AccountChoose);
}

// ── account type registry ──

#[test]
fn test_registry_order_is_display_order() {
    let ids: Vec<&str> = ACCOUNT_TYPES.iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec!["gmail", "exchange", "outlook", "yahoo", "icloud", "imap"]
    );
    for account_type in ACCOUNT_TYPES {
        assert!(!account_type.display_name.is_empty());
        assert!(!account_type.icon.is_empty());
    }
}

// ── welcome page ──

#[test]
fn test_welcome_primary_action_moves_to_tutorial() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    let transitions: Rc<RefCell<Vec<WizardStep>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let transitions = transitions.clone();
        wizard.controller.subscribe(move |event| {
            if let FlowEvent::PageChanged(step) = event {
                transitions.borrow_mut().push(step.clone());
            }
        });
    }

    wizard.handle_key(key(KeyCode::Enter));

    assert_eq!(*wizard.step(), WizardStep::Tutorial);
    // Exactly one transition per click, no other side effects
    assert_eq!(*transitions.borrow(), vec![WizardStep::Tutorial]);
    assert!(wizard.controller.account_type().is_none());
}

#[test]
fn test_welcome_secondary_action_moves_to_self_hosting() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::SelfHostingRestrictions);
}

#[test]
fn test_welcome_focus_clamps() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.handle_key(key(KeyCode::Up));
    assert_eq!(wizard.focused_field, 0);
    for _ in 0..5 {
        wizard.handle_key(key(KeyCode::Down));
    }
    assert_eq!(wizard.focused_field, 1);
}

// ── tutorial ──

#[test]
fn test_tutorial_pages_through_to_chooser() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.handle_key(key(KeyCode::Enter)); // Welcome -> Tutorial

    for page in 1..TUTORIAL_PAGES.len() {
        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.tutorial_page, page);
        assert_eq!(*wizard.step(), WizardStep::Tutorial);
    }
    wizard.handle_key(key(KeyCode::Enter)); // last page -> chooser
    assert_eq!(*wizard.step(), WizardStep::AccountChoose);
}

// ── account chooser ──

#[test]
fn test_account_choose_selection_records_then_advances() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountChoose);

    let events: Rc<RefCell<Vec<FlowEvent>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let events = events.clone();
        wizard
            .controller
            .subscribe(move |event| events.borrow_mut().push(event.clone()));
    }

    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Enter));

    assert_eq!(wizard.controller.account_type(), Some("exchange"));
    assert_eq!(*wizard.step(), WizardStep::AccountSettings);
    // Selection is recorded first; the page transition is a separate call
    assert_eq!(
        *events.borrow(),
        vec![
            FlowEvent::AccountTypeSelected("exchange".into()),
            FlowEvent::PageChanged(WizardStep::AccountSettings),
        ]
    );
}

#[test]
fn test_account_choose_focus_clamps_to_registry() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountChoose);
    for _ in 0..20 {
        wizard.handle_key(key(KeyCode::Down));
    }
    assert_eq!(wizard.focused_field, ACCOUNT_TYPES.len() - 1);
    for _ in 0..20 {
        wizard.handle_key(key(KeyCode::Up));
    }
    assert_eq!(wizard.focused_field, 0);
}

// ── back navigation ──

#[test]
fn test_escape_from_welcome_cancels() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    assert_eq!(wizard.handle_key(key(KeyCode::Esc)), WizardAction::Cancel);
}

#[test]
fn test_escape_steps_back() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.handle_key(key(KeyCode::Enter)); // Welcome -> Tutorial
    let action = wizard.handle_key(key(KeyCode::Esc));
    assert_eq!(action, WizardAction::None);
    assert_eq!(*wizard.step(), WizardStep::Welcome);
}

#[test]
fn test_escape_from_settings_returns_to_chooser() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountSettings);
    wizard.handle_key(key(KeyCode::Esc));
    assert_eq!(*wizard.step(), WizardStep::AccountChoose);
}

// ── account settings ──

#[test]
fn test_account_settings_requires_email() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountSettings);

    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::AccountSettings);
    assert!(wizard.error_message.is_some());

    for c in "crab@example.com".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    assert!(wizard.error_message.is_none());
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::Done);
}

#[test]
fn test_paste_into_email_field() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountSettings);
    wizard.handle_paste("  crab@example.com\nignored second line");
    assert_eq!(wizard.email_input, "crab@example.com");
}

// ── self-hosting track ──

#[test]
fn test_self_hosting_track() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Enter)); // Welcome -> SelfHostingRestrictions
    wizard.handle_key(key(KeyCode::Enter)); // -> SelfHostingConfig
    assert_eq!(*wizard.step(), WizardStep::SelfHostingConfig);

    // Empty URL is rejected
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::SelfHostingConfig);
    assert!(wizard.error_message.is_some());

    for c in "http://localhost:5555".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::AccountSettings);
}

#[test]
fn test_sync_url_prefilled_from_config() {
    let mut config = Config::default();
    config.self_hosting.sync_engine_url = Some("http://10.0.0.2:5555".to_string());
    let wizard = OnboardingWizard::new(&config);
    assert_eq!(wizard.sync_url_input, "http://10.0.0.2:5555");
}

// ── done / unknown ──

#[test]
fn test_done_returns_complete() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::Done);
    assert_eq!(wizard.handle_key(key(KeyCode::Enter)), WizardAction::Complete);
}

#[test]
fn test_unknown_page_recovers_to_welcome() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page_named("not-a-page");
    assert_eq!(wizard.view(), StepView::UnknownStep);
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::Welcome);
}

#[test]
fn test_selected_account_display_passthrough() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    assert!(wizard.selected_account_display().is_none());

    wizard.controller.set_account_type("exchange");
    assert_eq!(wizard.selected_account_display(), Some("Microsoft Exchange"));

    // Opaque ids pass through verbatim
    wizard.controller.set_account_type("carrier-pigeon");
    assert_eq!(wizard.selected_account_display(), Some("carrier-pigeon"));
}

// ── rendering ──

fn rendered_text(wizard: &OnboardingWizard) -> String {
    let backend = ratatui::backend::TestBackend::new(80, 40);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|f| render_onboarding(f, wizard)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_chooser_renders_all_registry_entries_in_order() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page(WizardStep::AccountChoose);
    let text = rendered_text(&wizard);

    let mut last = 0;
    for account_type in ACCOUNT_TYPES {
        let pos = text
            .find(account_type.display_name)
            .unwrap_or_else(|| panic!("missing entry: {}", account_type.display_name));
        assert!(pos > last, "entries out of registry order");
        last = pos;
    }
}

#[test]
fn test_chooser_renders_self_hosting_config_when_custom() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Custom);
    wizard.controller.move_to_page(WizardStep::AccountChoose);
    let text = rendered_text(&wizard);

    assert!(text.contains("Sync engine URL"));
    assert!(!text.contains("Gmail or Google Apps"));
}

#[test]
fn test_unknown_page_renders_placeholder() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);
    wizard.controller.move_to_page_named("mystery");
    let text = rendered_text(&wizard);
    assert!(text.contains("No such page"));
    assert!(text.contains("mystery"));
}

// ── end to end ──

#[test]
fn test_full_standard_flow() {
    let mut wizard = wizard_with_mode(EnvironmentMode::Standard);

    wizard.handle_key(key(KeyCode::Enter)); // Welcome -> Tutorial
    for _ in 0..TUTORIAL_PAGES.len() {
        wizard.handle_key(key(KeyCode::Enter)); // page through -> chooser
    }
    assert_eq!(*wizard.step(), WizardStep::AccountChoose);

    wizard.handle_key(key(KeyCode::Down)); // focus "exchange"
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.controller.account_type(), Some("exchange"));

    for c in "crab@corp.example".chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(*wizard.step(), WizardStep::Done);

    let text = rendered_text(&wizard);
    assert!(text.contains("Microsoft Exchange"));

    assert_eq!(wizard.handle_key(key(KeyCode::Enter)), WizardAction::Complete);
}
