use crate::config::EnvironmentMode;

/// Account provider definitions. Slice order is display order — the chooser
/// renders entries exactly in this sequence.
pub const ACCOUNT_TYPES: &[AccountTypeInfo] = &[
    AccountTypeInfo {
        id: "gmail",
        display_name: "Gmail or Google Apps",
        icon: "ic-settings-account-gmail.png",
    },
    AccountTypeInfo {
        id: "exchange",
        display_name: "Microsoft Exchange",
        icon: "ic-settings-account-exchange.png",
    },
    AccountTypeInfo {
        id: "outlook",
        display_name: "Outlook.com",
        icon: "ic-settings-account-outlook.png",
    },
    AccountTypeInfo {
        id: "yahoo",
        display_name: "Yahoo",
        icon: "ic-settings-account-yahoo.png",
    },
    AccountTypeInfo {
        id: "icloud",
        display_name: "iCloud",
        icon: "ic-settings-account-icloud.png",
    },
    AccountTypeInfo {
        id: "imap",
        display_name: "IMAP / SMTP Setup",
        icon: "ic-settings-account-imap.png",
    },
];

/// One selectable provider in the account chooser
pub struct AccountTypeInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Asset reference for the provider logo (unused in the TUI rendition,
    /// kept as part of the registry contract for downstream consumers)
    pub icon: &'static str,
}

/// Tutorial pages shown between Welcome and the account chooser
pub const TUTORIAL_PAGES: &[(&str, &str)] = &[
    (
        "One inbox, every account",
        "Crabmail unifies all of your mail accounts into a single, fast \
         terminal inbox. Add as many accounts as you like.",
    ),
    (
        "Keyboard first",
        "Everything is reachable from the keyboard. Arrow keys move, Enter \
         confirms, Esc always takes you back one step.",
    ),
    (
        "Sync your way",
        "Mail syncs through the cloud by default. Running your own sync \
         engine? Set env = \"custom\" in config.toml and crabmail will talk \
         to it instead.",
    ),
];

/// Current page in the setup wizard.
///
/// Names mirror the page identifiers used in deep links and logs
/// (`welcome`, `account-choose`, ...). Any step may be requested at any
/// time; the controller does not enforce a transition graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Tutorial,
    AccountChoose,
    AccountSettings,
    SelfHostingConfig,
    SelfHostingRestrictions,
    Done,
    /// A named page we don't recognize. Accepted (last-write-wins) and
    /// rendered as a placeholder rather than crashing the wizard.
    Unknown(String),
}

impl WizardStep {
    /// Page identifier as used by deep links and logging
    pub fn name(&self) -> &str {
        match self {
            Self::Welcome => "welcome",
            Self::Tutorial => "tutorial",
            Self::AccountChoose => "account-choose",
            Self::AccountSettings => "account-settings",
            Self::SelfHostingConfig => "self-hosting-config",
            Self::SelfHostingRestrictions => "self-hosting-restrictions",
            Self::Done => "done",
            Self::Unknown(name) => name,
        }
    }

    /// Resolve a page identifier. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "welcome" => Some(Self::Welcome),
            "tutorial" => Some(Self::Tutorial),
            "account-choose" => Some(Self::AccountChoose),
            "account-settings" => Some(Self::AccountSettings),
            "self-hosting-config" => Some(Self::SelfHostingConfig),
            "self-hosting-restrictions" => Some(Self::SelfHostingRestrictions),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Step number (1-based) for the progress header
    pub fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::Tutorial => 2,
            Self::AccountChoose => 3,
            Self::SelfHostingRestrictions => 3, // variant of the chooser track
            Self::SelfHostingConfig => 3,       // variant of the chooser track
            Self::AccountSettings => 4,
            Self::Done => 5,
            Self::Unknown(_) => 0,
        }
    }

    /// Total number of steps in the progress header
    pub fn total() -> usize {
        5
    }

    /// Step title
    pub fn title(&self) -> &str {
        match self {
            Self::Welcome => "Welcome to Crabmail",
            Self::Tutorial => "How It Works",
            Self::AccountChoose => "Connect an Email Account",
            Self::AccountSettings => "Account Details",
            Self::SelfHostingConfig => "Self-Hosted Sync Engine",
            Self::SelfHostingRestrictions => "Hosting Your Own Sync Engine",
            Self::Done => "All Set",
            Self::Unknown(_) => "Unknown Page",
        }
    }

    /// Step subtitle
    pub fn subtitle(&self) -> &str {
        match self {
            Self::Welcome => "Mail at terminal speed",
            Self::Tutorial => "A 30-second tour before we connect your mail",
            Self::AccountChoose => "Crabmail syncs your mail through the cloud",
            Self::AccountSettings => "Tell us where to find your mailbox",
            Self::SelfHostingConfig => "Point crabmail at your own sync engine",
            Self::SelfHostingRestrictions => "What changes when you self-host",
            Self::Done => "Your account is ready to sync",
            Self::Unknown(_) => "This page doesn't exist — going back is safe",
        }
    }
}

/// Which view renders for the current state.
///
/// Mostly 1:1 with `WizardStep`, except the account chooser: in a
/// self-hosted environment it is replaced by the self-hosting config view
/// at render time without touching the canonical step value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepView {
    Welcome,
    Tutorial,
    AccountChoose,
    AccountSettings,
    SelfHostingConfig,
    SelfHostingRestrictions,
    Done,
    UnknownStep,
}

impl StepView {
    /// Derive the view for a step under the given environment mode.
    /// Pure function: step state is never mutated by view selection.
    pub fn for_state(step: &WizardStep, mode: EnvironmentMode) -> Self {
        match step {
            WizardStep::AccountChoose if mode.is_self_hosted() => Self::SelfHostingConfig,
            WizardStep::AccountChoose => Self::AccountChoose,
            WizardStep::Welcome => Self::Welcome,
            WizardStep::Tutorial => Self::Tutorial,
            WizardStep::AccountSettings => Self::AccountSettings,
            WizardStep::SelfHostingConfig => Self::SelfHostingConfig,
            WizardStep::SelfHostingRestrictions => Self::SelfHostingRestrictions,
            WizardStep::Done => Self::Done,
            WizardStep::Unknown(_) => Self::UnknownStep,
        }
    }
}

/// State-change notification delivered to flow controller subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The current step changed
    PageChanged(WizardStep),
    /// An account type was selected (no step change implied)
    AccountTypeSelected(String),
}

/// What the app should do after handling a wizard key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Nothing special
    None,
    /// User cancelled the wizard (Esc from the welcome page)
    Cancel,
    /// Wizard completed successfully
    Complete,
}
