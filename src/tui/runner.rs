//! TUI Runner
//!
//! Main event loop and terminal setup for the setup wizard.

use super::onboarding::{OnboardingWizard, WizardAction};
use super::onboarding_render::render_onboarding;
use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Terminal events fed to the wizard loop
pub enum TuiEvent {
    Key(KeyEvent),
    Paste(String),
    Resize,
}

/// Run the setup wizard TUI until completion or cancellation
pub async fn run(mut wizard: OnboardingWizard) -> Result<WizardAction> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut wizard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    wizard: &mut OnboardingWizard,
) -> Result<WizardAction> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    start_terminal_listener(tx);

    // Redraw when the flow controller reports a state change. Focus and
    // text-input changes don't go through the controller, so key/paste
    // handling below also marks the frame dirty.
    let dirty = Rc::new(Cell::new(true));
    {
        let flag = dirty.clone();
        wizard.controller.subscribe(move |_| flag.set(true));
    }

    let outcome = loop {
        if dirty.replace(false) {
            terminal.draw(|f| render_onboarding(f, wizard))?;
        }

        // Wait for an event, with a timeout so resize redraws stay snappy
        let event =
            tokio::time::timeout(tokio::time::Duration::from_millis(100), rx.recv()).await;

        if let Ok(Some(event)) = event {
            match event {
                TuiEvent::Key(key) => {
                    let action = wizard.handle_key(key);
                    dirty.set(true);
                    match action {
                        WizardAction::None => {}
                        action => break action,
                    }
                }
                TuiEvent::Paste(text) => {
                    wizard.handle_paste(&text);
                    dirty.set(true);
                }
                TuiEvent::Resize => dirty.set(true),
            }
        }
    };

    Ok(outcome)
}

/// Blocking crossterm reader on its own thread, feeding the async loop
fn start_terminal_listener(tx: mpsc::UnboundedSender<TuiEvent>) {
    std::thread::spawn(move || {
        loop {
            let event = match crossterm::event::read() {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!("terminal event read failed: {}", e);
                    break;
                }
            };
            let sent = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    tx.send(TuiEvent::Key(key))
                }
                Event::Paste(text) => tx.send(TuiEvent::Paste(text)),
                Event::Resize(_, _) => tx.send(TuiEvent::Resize),
                _ => Ok(()),
            };
            if sent.is_err() {
                // Receiver gone, the wizard loop has exited
                break;
            }
        }
    });
}
