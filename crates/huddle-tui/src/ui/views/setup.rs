//! Agent setup screen: team list, connections, and supervisor briefing.

use crate::app::App;
use crate::ui::theme::{Theme, badge_glyph};
use huddle_core::playback::Phase;
use huddle_core::scenario::AgentId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub(crate) fn render_setup(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    render_agent_list(frame, columns[0], app, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);

    render_connections(frame, right[0], app, theme);
    render_briefing(frame, right[1], app, theme);
}

#[allow(clippy::too_many_lines)]
fn render_agent_list(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    let editable = app.controller.phase() == Phase::Setup;

    if !editable {
        lines.push(Line::from(Span::styled(
            "setup locked — press enter to return to execution",
            Style::default().fg(theme.warning),
        )));
        lines.push(Line::from(""));
    }

    for (index, agent) in app.controller.agents().iter().enumerate() {
        let selected = index == app.setup_selected;
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.heading)
        };

        let mut header = vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(format!("[{}] ", agent.id), Style::default().fg(theme.muted)),
            Span::styled(agent.name.clone(), name_style),
        ];
        if agent.coordinator {
            header.push(Span::styled(
                "  (coordinator)",
                Style::default().fg(theme.success),
            ));
        }
        if let Some(tag) = &agent.tag {
            header.push(Span::styled(
                format!("  {tag}"),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!("    {}", agent.role),
            Style::default().fg(theme.text),
        )));

        if selected && app.endpoint_input.is_some() {
            let buffer = app.endpoint_input.clone().unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled("    endpoint> ", Style::default().fg(theme.accent)),
                Span::styled(buffer, Style::default().fg(theme.heading)),
                Span::styled("▌", Style::default().fg(theme.accent)),
            ]));
        } else if let Some(endpoint) = &agent.endpoint {
            lines.push(Line::from(Span::styled(
                format!("    endpoint: {endpoint}"),
                Style::default().fg(theme.accent),
            )));
        }
        lines.push(Line::from(""));
    }

    // Connect gesture banner
    if let Some(from) = &app.connecting_from {
        let name = app
            .controller
            .agents()
            .iter()
            .find(|a| a.id == *from)
            .map_or_else(|| from.to_string(), |a| a.name.clone());
        lines.push(Line::from(Span::styled(
            format!("connecting from {name} — select a target and press c"),
            Style::default().fg(theme.warning),
        )));
        lines.push(Line::from(""));
    }

    // Roster hint
    if editable {
        let next = app.controller.scenario().and_then(|scenario| {
            scenario
                .roster
                .iter()
                .find(|candidate| {
                    !app.controller
                        .agents()
                        .iter()
                        .any(|a| a.id == candidate.id)
                })
                .cloned()
        });
        let hint = match next {
            Some(agent) => format!("a: add {} — {}", agent.name, agent.role),
            None => "roster exhausted".to_string(),
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.muted),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Agents "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_connections(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    for connection in app.controller.connections() {
        let resolved = |id: &AgentId| app.controller.agents().iter().any(|a| a.id == *id);
        let style = if resolved(&connection.from) && resolved(&connection.to) {
            Style::default().fg(theme.text)
        } else {
            // Dangling edges stay listed; the graph just skips drawing them.
            Style::default().fg(theme.muted)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} → {}", connection.from, connection.to),
            style,
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no connections",
            Style::default().fg(theme.muted),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Connections "),
    );
    frame.render_widget(paragraph, area);
}

fn render_briefing(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(scenario) = app.controller.scenario() {
        lines.push(Line::from(Span::styled(
            "Supervisor protocols",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )));
        for protocol in &scenario.briefing.protocols {
            lines.push(Line::from(Span::styled(
                format!("  • {protocol}"),
                Style::default().fg(theme.text),
            )));
        }
        lines.push(Line::from(""));
        for certificate in &scenario.briefing.certificates {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", badge_glyph(certificate.badge)),
                    Style::default().fg(theme.success),
                ),
                Span::styled(
                    certificate.name.clone(),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Briefing "),
    );
    frame.render_widget(paragraph, area);
}
