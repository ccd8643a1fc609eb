//! Account-Setup Wizard Rendering
//!
//! Render functions for each view of the setup wizard.

use super::onboarding::{
    ACCOUNT_TYPES, OnboardingWizard, StepView, TUTORIAL_PAGES, WizardStep,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Main color palette
const BRAND_ORANGE: Color = Color::Rgb(215, 100, 20);
const BRAND_BLUE: Color = Color::Rgb(70, 130, 180);
const DIM: Color = Color::DarkGray;

/// Render the entire setup wizard
pub fn render_onboarding(f: &mut Frame, wizard: &OnboardingWizard) {
    let area = f.area();
    let view = wizard.view();
    let step = wizard.step();

    // Build wizard content first so we know the actual height
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Header: progress dots, title, subtitle
    let (title, subtitle) = heading(view, step);
    if step.number() > 0 && view != StepView::Done {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            progress_dots(step),
            Style::default().fg(BRAND_BLUE),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(BRAND_ORANGE)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(subtitle, Style::default().fg(DIM))));
    lines.push(Line::from(""));

    match view {
        StepView::Welcome => render_welcome(&mut lines, wizard),
        StepView::Tutorial => render_tutorial(&mut lines, wizard),
        StepView::AccountChoose => render_account_choose(&mut lines, wizard),
        StepView::AccountSettings => render_account_settings(&mut lines, wizard),
        StepView::SelfHostingConfig => render_self_hosting_config(&mut lines, wizard),
        StepView::SelfHostingRestrictions => render_self_hosting_restrictions(&mut lines),
        StepView::Done => render_done(&mut lines, wizard),
        StepView::UnknownStep => render_unknown(&mut lines, step),
    }

    // Error message
    if let Some(ref err) = wizard.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  ! {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    // Navigation footer
    lines.push(Line::from(""));
    lines.push(footer_line(view));
    lines.push(Line::from(""));

    // Centered box layout
    let box_width = 64u16.min(area.width.saturating_sub(2)).max(20);
    let box_height = (lines.len() as u16 + 2).min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(box_height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(box_width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    // Shift the content block as a whole toward the center of the box
    let inner_width = box_width.saturating_sub(2) as usize;
    let content_max = lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.width()).sum::<usize>())
        .max()
        .unwrap_or(0);
    let pad = if content_max > 0 && content_max < inner_width {
        (inner_width - content_max) / 2
    } else {
        0
    };
    let padded: Vec<Line<'static>> = lines
        .into_iter()
        .map(|mut l| {
            l.spans.insert(0, Span::raw(" ".repeat(pad)));
            l
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_BLUE))
        .title(" crabmail setup ");
    f.render_widget(Paragraph::new(padded).block(block), horizontal[1]);
}

/// Title/subtitle for the rendered view. The unknown placeholder keeps the
/// requested step's copy so the bad page name stays visible.
fn heading(view: StepView, step: &WizardStep) -> (String, String) {
    let copy_step = match view {
        StepView::Welcome => WizardStep::Welcome,
        StepView::Tutorial => WizardStep::Tutorial,
        StepView::AccountChoose => WizardStep::AccountChoose,
        StepView::AccountSettings => WizardStep::AccountSettings,
        StepView::SelfHostingConfig => WizardStep::SelfHostingConfig,
        StepView::SelfHostingRestrictions => WizardStep::SelfHostingRestrictions,
        StepView::Done => WizardStep::Done,
        StepView::UnknownStep => step.clone(),
    };
    (
        copy_step.title().to_string(),
        copy_step.subtitle().to_string(),
    )
}

fn progress_dots(step: &WizardStep) -> String {
    let current = step.number();
    (1..=WizardStep::total())
        .map(|n| if n <= current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn footer_line(view: StepView) -> Line<'static> {
    let mut footer: Vec<Span<'static>> = vec![
        Span::styled(
            " [Esc] ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Back  ", Style::default().fg(Color::White)),
    ];

    let confirm = match view {
        StepView::Welcome => "Confirm",
        StepView::Tutorial => "Next",
        StepView::AccountChoose => "Select",
        StepView::Done => "Finish",
        _ => "Continue",
    };
    footer.push(Span::styled(
        "[Enter] ",
        Style::default()
            .fg(BRAND_ORANGE)
            .add_modifier(Modifier::BOLD),
    ));
    footer.push(Span::styled(confirm, Style::default().fg(Color::White)));
    Line::from(footer)
}

fn button(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(BRAND_ORANGE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(BRAND_ORANGE)),
        Span::styled(format!(" {} ", label), style),
    ])
}

fn input_field(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let cursor = if focused { "█" } else { "" };
    vec![
        Line::from(Span::styled(
            format!("{}:", label),
            Style::default().fg(BRAND_BLUE),
        )),
        Line::from(Span::styled(
            format!("  {}{}", value, cursor),
            Style::default().fg(Color::White),
        )),
    ]
}

fn render_welcome(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    let logo_style = Style::default()
        .fg(BRAND_ORANGE)
        .add_modifier(Modifier::BOLD);
    for art in [
        "   ____           _                    _ _",
        "  / ___|_ __ __ _| |__  _ __ ___   __ _(_) |",
        " | |   | '__/ _` | '_ \\| '_ ` _ \\ / _` | | |",
        " | |___| | | (_| | |_) | | | | | | (_| | | |",
        r"  \____|_|  \__,_|_.__/|_| |_| |_|\__,_|_|_|",
    ] {
        lines.push(Line::from(Span::styled(art.to_string(), logo_style)));
    }
    lines.push(Line::from(""));
    lines.push(button("Get Started", wizard.focused_field == 0));
    lines.push(Line::from(""));
    lines.push(button(
        "Hosting your own sync engine?",
        wizard.focused_field == 1,
    ));
}

fn render_tutorial(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    let page = wizard.tutorial_page.min(TUTORIAL_PAGES.len() - 1);
    let (title, body) = TUTORIAL_PAGES[page];
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    // Manual wrap keeps the centering math honest
    for chunk in wrap_text(body, 52) {
        lines.push(Line::from(Span::styled(
            chunk,
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Page {}/{}", page + 1, TUTORIAL_PAGES.len()),
        Style::default().fg(DIM),
    )));
}

fn render_account_choose(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    for (i, account_type) in ACCOUNT_TYPES.iter().enumerate() {
        lines.push(button(account_type.display_name, wizard.focused_field == i));
    }
}

fn render_account_settings(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    if let Some(name) = wizard.selected_account_display() {
        lines.push(Line::from(Span::styled(
            format!("Provider: {}", name),
            Style::default().fg(DIM),
        )));
        lines.push(Line::from(""));
    }
    lines.extend(input_field("Email address", &wizard.email_input, true));
}

fn render_self_hosting_config(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    lines.push(Line::from(Span::styled(
        "Where is your sync engine running?",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));
    lines.extend(input_field(
        "Sync engine URL",
        &wizard.sync_url_input,
        true,
    ));
}

fn render_self_hosting_restrictions(lines: &mut Vec<Line<'static>>) {
    for text in [
        "Running your own sync engine means:",
        "",
        "  - you operate and update the engine yourself",
        "  - mail never transits the crabmail cloud",
        "  - provider OAuth must be configured on your host",
    ] {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White),
        )));
    }
}

fn render_done(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    lines.push(Line::from(Span::styled(
        "✓ Setup complete",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(name) = wizard.selected_account_display() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Account type: {}", name),
            Style::default().fg(Color::White),
        )));
    }
}

fn render_unknown(lines: &mut Vec<Line<'static>>, step: &WizardStep) {
    lines.push(Line::from(Span::styled(
        format!("No such page: \"{}\"", step.name()),
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to return to the welcome page.",
        Style::default().fg(DIM),
    )));
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
