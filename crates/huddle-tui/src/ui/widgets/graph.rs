//! Agent interaction graph on a canvas.
//!
//! Draws the circular layout from `huddle_core::layout`: connection lines
//! first, then one circle per agent with its id, an action-count badge, and
//! an intervention marker on the active node while playback is paused.

use crate::app::App;
use crate::ui::theme::Theme;
use huddle_core::layout::{self, FrameSize};
use huddle_core::playback::Phase;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};

/// Logical frame the layout is computed in; the canvas scales it to cells.
const GRAPH_FRAME: FrameSize = FrameSize::new(400.0, 400.0);
/// Node circle radius in logical units.
const NODE_RADIUS: f64 = 26.0;

pub(crate) fn render_graph(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let graph_layout = layout::project(app.controller.agents(), GRAPH_FRAME);
    let edges = layout::project_edges(app.controller.connections(), &graph_layout);
    let paused = app.controller.phase() == Phase::AwaitingDecision;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Agent Interaction "),
        )
        .x_bounds([0.0, GRAPH_FRAME.width])
        .y_bounds([0.0, GRAPH_FRAME.height])
        .paint(|ctx| paint_graph(ctx, app, theme, &graph_layout, &edges, paused));

    frame.render_widget(canvas, area);
}

#[allow(clippy::arithmetic_side_effects)] // float geometry
fn paint_graph(
    ctx: &mut Context<'_>,
    app: &App,
    theme: &Theme,
    graph_layout: &layout::Layout,
    edges: &[layout::Edge],
    paused: bool,
) {
    // Canvas y grows upward; the layout frame grows downward.
    let flip = |y: f64| GRAPH_FRAME.height - y;

    for edge in edges {
        ctx.draw(&CanvasLine {
            x1: edge.from.x,
            y1: flip(edge.from.y),
            x2: edge.to.x,
            y2: flip(edge.to.y),
            color: theme.edge,
        });
    }
    ctx.layer();

    for (id, point) in graph_layout.iter() {
        let active = app.controller.active_agent() == Some(id);
        let color = if active { theme.node_active } else { theme.node };

        ctx.draw(&Circle {
            x: point.x,
            y: flip(point.y),
            radius: NODE_RADIUS,
            color,
        });
        ctx.print(
            point.x,
            flip(point.y),
            Line::from(Span::styled(
                id.as_str().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        );

        // Action-count badge, hidden while the active node shows the
        // intervention marker.
        let count = app.controller.action_count(id);
        if count > 0 && !(paused && active) {
            ctx.print(
                point.x + NODE_RADIUS,
                flip(point.y - NODE_RADIUS),
                Line::from(Span::styled(
                    count.to_string(),
                    Style::default().fg(theme.error),
                )),
            );
        }

        if paused && active {
            ctx.print(
                point.x,
                flip(point.y - NODE_RADIUS - 12.0),
                Line::from(Span::styled(
                    "!",
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                )),
            );
        }
    }
}
