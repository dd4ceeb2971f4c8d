//! Scenario selection screen: one card per catalog entry.

use crate::app::App;
use crate::ui::theme::{Theme, scenario_glyph};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub(crate) fn render_scenarios(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Select a scenario",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let chosen_id = app.controller.scenario().map(|s| s.id.clone());

    for (index, scenario) in app.catalog.iter().enumerate() {
        let selected = index == app.scenario_selected;
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
            Span::styled(
                format!("{} ", scenario_glyph(scenario.icon)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(scenario.name.clone(), name_style),
        ];
        if chosen_id.as_deref() == Some(scenario.id.as_str()) {
            header.push(Span::styled(
                "  ✓ selected",
                Style::default().fg(theme.success),
            ));
        }
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!("    {}", scenario.description),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} agents · {} roster · {} steps",
                scenario.default_agents.len(),
                scenario.roster.len(),
                scenario.log.len()
            ),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Scenarios "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
