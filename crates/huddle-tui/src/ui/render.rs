//! Frame chrome: header, status bar, and screen dispatch.

use super::theme::Theme;
use super::views;
use crate::app::{App, Screen};
use huddle_core::playback::Phase;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render a frame of the UI
pub(crate) fn render_frame(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, outer[0], app, &theme);

    match app.screen {
        Screen::Scenarios => views::render_scenarios(frame, outer[1], app, &theme),
        Screen::Setup => views::render_setup(frame, outer[1], app, &theme),
        Screen::Execution => views::render_execution(frame, outer[1], app, &theme),
    }

    render_status(frame, outer[2], app, &theme);
}

/// Short label for the controller phase.
pub(crate) fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::ScenarioChosen => "scenario chosen",
        Phase::Setup => "setup",
        Phase::Ready => "ready",
        Phase::Running => "executing",
        Phase::AwaitingDecision => "awaiting decision",
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        Span::styled(" ◆ ", Style::default().fg(theme.accent)),
        Span::styled(
            "HUDDLE",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(scenario) = app.controller.scenario() {
        spans.push(Span::styled("  ·  ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(
            scenario.name.clone(),
            Style::default().fg(theme.text),
        ));
    }

    spans.push(Span::styled("  ·  ", Style::default().fg(theme.muted)));
    spans.push(Span::styled(
        phase_label(app.controller.phase()),
        Style::default().fg(theme.accent),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if app.quit_pending {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " press ctrl+c again to quit",
                Style::default().fg(theme.warning),
            ))),
            area,
        );
        return;
    }

    let hints = match app.screen {
        Screen::Scenarios => " ↑↓ select · enter choose · q quit".to_string(),
        Screen::Setup => {
            if app.endpoint_input.is_some() {
                " type url · enter save · esc cancel".to_string()
            } else {
                " ↑↓ select · shift+↑↓ reorder · a add · d remove · c connect · x disconnect \
                 · e endpoint · enter done · esc back"
                    .to_string()
            }
        },
        Screen::Execution => {
            let total = app
                .controller
                .scenario()
                .map_or(0, |s| s.log.len());
            let progress = format!(
                " step {}/{} · ",
                app.controller.cursor().min(total),
                total
            );
            let keys = if app.controller.phase() == Phase::AwaitingDecision {
                "↑↓ choose · enter decide · esc back"
            } else if app.controller.phase() == Phase::Running {
                "↑↓ scroll · esc back"
            } else {
                "space start · ↑↓ scroll · esc back"
            };
            format!("{progress}{keys}")
        },
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(theme.muted),
        ))),
        area,
    );
}
