//! Execution screen: revealed log on the left, interaction graph on the right.

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::render_graph;
use huddle_core::display;
use huddle_core::playback::{HUMAN_ACTOR, Phase};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub(crate) fn render_execution(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_log(frame, columns[0], app, theme);
    render_graph(frame, columns[1], app, theme);
}

#[allow(clippy::too_many_lines)]
fn render_log(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    if app.controller.log_prefix().is_empty() {
        lines.push(Line::from(Span::styled(
            "press space to start execution",
            Style::default().fg(theme.muted),
        )));
    }

    for row in display::render(app.controller.log_prefix()) {
        let is_human = row.agent_name == HUMAN_ACTOR;
        let name_color = if is_human { theme.human } else { theme.heading };

        lines.push(Line::from(vec![
            Span::styled(
                row.agent_name.clone(),
                Style::default().fg(name_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", row.timestamp),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format!("  Risk: {}", row.risk_label),
                Style::default().fg(theme.risk_color(row.risk_class)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", row.action),
            Style::default().fg(theme.text),
        )));

        if let Some(note) = &row.supervisor_note {
            lines.push(Line::from(vec![
                Span::styled("  ✦ ", Style::default().fg(theme.supervisor)),
                Span::styled(
                    format!("Supervisor: {note}"),
                    Style::default().fg(theme.supervisor),
                ),
            ]));
        }

        if row.chooser.is_some() {
            lines.push(Line::from(Span::styled(
                "  ⚠ Human intervention required",
                Style::default().fg(theme.warning),
            )));
        }
        lines.push(Line::from(""));
    }

    // Interactive chooser for the pending intervention.
    if app.controller.phase() == Phase::AwaitingDecision
        && let Some(intervention) = app.controller.pending_intervention()
    {
        lines.push(Line::from(Span::styled(
            "Choose how to proceed:",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, option) in intervention.options.iter().enumerate() {
            let selected = index == app.decision_selected;
            let marker = if selected { "  ❯ " } else { "    " };
            let label_style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.heading)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(option.label.clone(), label_style),
                Span::styled(
                    format!(" — {}", option.description),
                    Style::default().fg(theme.muted),
                ),
            ]));
            if selected && let Some(link) = &option.link {
                lines.push(Line::from(Span::styled(
                    format!("      details: {link}"),
                    Style::default().fg(theme.muted),
                )));
            }
        }
    }

    // Window the lines so the newest stay visible unless scrolled.
    let visible_height = area.height.saturating_sub(2) as usize;
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);
    let effective_scroll = app.log_scroll.min(max_scroll);
    let start_line = max_scroll.saturating_sub(effective_scroll);
    let visible: Vec<Line> = lines.into_iter().skip(start_line).collect();

    let paragraph = Paragraph::new(visible)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Execution Log "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
