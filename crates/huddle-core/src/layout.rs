//! Circular graph layout projector.
//!
//! Pure geometry: N agents are placed evenly around a circle of fixed
//! radius centered in the frame, in list order. The projection is fully
//! recomputed whenever the agent list changes; at this scale incremental
//! layout would be noise.

use crate::scenario::{Agent, AgentId, Connection};
use std::f64::consts::TAU;

/// Distance of every node from the frame center.
pub const CIRCLE_RADIUS: f64 = 150.0;

/// Logical frame the layout is centered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
}

impl FrameSize {
    /// Create a frame size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The frame's center point.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // float division by literal
    pub fn center(self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// A 2D position in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Computed node positions, preserving agent list order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    positions: Vec<(AgentId, Point)>,
}

impl Layout {
    /// Position of an agent, if it was in the projected list.
    #[must_use]
    pub fn position(&self, id: &AgentId) -> Option<Point> {
        self.positions
            .iter()
            .find(|(agent_id, _)| agent_id == id)
            .map(|(_, point)| *point)
    }

    /// Iterate positions in agent list order.
    pub fn iter(&self) -> impl Iterator<Item = &(AgentId, Point)> {
        self.positions.iter()
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A drawable connection between two resolved positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source position.
    pub from: Point,
    /// Target position.
    pub to: Point,
}

/// Place agents evenly around the circle: agent at list position `i` sits
/// at angle `i * 2π/N` from the frame center.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)] // pure float geometry, len checked non-zero
pub fn project(agents: &[Agent], frame: FrameSize) -> Layout {
    if agents.is_empty() {
        return Layout::default();
    }
    let step = TAU / agents.len() as f64;
    let center = frame.center();
    let positions = agents
        .iter()
        .enumerate()
        .map(|(i, agent)| {
            let angle = step * i as f64;
            let point = Point {
                x: center.x + CIRCLE_RADIUS * angle.cos(),
                y: center.y + CIRCLE_RADIUS * angle.sin(),
            };
            (agent.id.clone(), point)
        })
        .collect();
    Layout { positions }
}

/// Resolve connections against a layout. Any edge whose endpoint has no
/// computed position is silently dropped — the permissive counterpart of
/// the Setup phase's unvalidated graph editing.
#[must_use]
pub fn project_edges(connections: &[Connection], layout: &Layout) -> Vec<Edge> {
    connections
        .iter()
        .filter_map(|connection| {
            let from = layout.position(&connection.from)?;
            let to = layout.position(&connection.to)?;
            Some(Edge { from, to })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // float assertions
mod tests {
    use super::*;
    use crate::fixtures;

    const EPSILON: f64 = 1e-9;

    fn frame() -> FrameSize {
        FrameSize::new(400.0, 400.0)
    }

    fn agents(n: usize) -> Vec<Agent> {
        (0..n)
            .map(|i| Agent::new(format!("A{i}"), format!("Agent {i}"), "Role"))
            .collect()
    }

    /// Angle of a point around the frame center, normalized to [0, 2π).
    fn angle_of(point: Point, center: Point) -> f64 {
        let angle = (point.y - center.y).atan2(point.x - center.x);
        if angle < 0.0 { angle + TAU } else { angle }
    }

    #[test]
    fn test_empty_agent_list() {
        let layout = project(&[], frame());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_positions_distinct_and_on_circle() {
        for n in 1..=8 {
            let layout = project(&agents(n), frame());
            assert_eq!(layout.len(), n);
            let center = frame().center();

            let points: Vec<Point> = layout.iter().map(|(_, p)| *p).collect();
            for (i, point) in points.iter().enumerate() {
                let distance =
                    ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
                assert!(
                    (distance - CIRCLE_RADIUS).abs() < EPSILON,
                    "n={n} i={i} distance={distance}"
                );
                for (j, other) in points.iter().enumerate().skip(i + 1) {
                    assert!(
                        (point.x - other.x).abs() > EPSILON
                            || (point.y - other.y).abs() > EPSILON,
                        "n={n}: positions {i} and {j} coincide"
                    );
                }
            }
        }
    }

    #[test]
    fn test_angular_spacing_is_uniform() {
        for n in 2..=8 {
            let layout = project(&agents(n), frame());
            let center = frame().center();
            let expected = TAU / n as f64;

            let angles: Vec<f64> = layout.iter().map(|(_, p)| angle_of(*p, center)).collect();
            for window in angles.windows(2) {
                let mut delta = window[1] - window[0];
                if delta < 0.0 {
                    delta += TAU;
                }
                assert!((delta - expected).abs() < EPSILON, "n={n} delta={delta}");
            }
        }
    }

    #[test]
    fn test_first_agent_sits_at_angle_zero() {
        let layout = project(&agents(4), frame());
        let center = frame().center();
        let (_, first) = layout.iter().next().unwrap();
        assert!((first.x - (center.x + CIRCLE_RADIUS)).abs() < EPSILON);
        assert!((first.y - center.y).abs() < EPSILON);
    }

    #[test]
    fn test_dangling_edges_are_dropped() {
        let team = agents(3);
        let layout = project(&team, frame());
        let connections = vec![
            Connection::new("A0", "A1"),
            Connection::new("A0", "GONE"),
            Connection::new("GONE", "A2"),
        ];
        let edges = project_edges(&connections, &layout);
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let team = agents(2);
        let layout = project(&team, frame());
        let connections = vec![Connection::new("A0", "A1"), Connection::new("A0", "A1")];
        assert_eq!(project_edges(&connections, &layout).len(), 2);
    }

    #[test]
    fn test_default_scenario_graph_projects_fully() {
        for scenario in fixtures::catalog() {
            let layout = project(&scenario.default_agents, frame());
            let connections = crate::playback::default_connections(&scenario.default_agents);
            let edges = project_edges(&connections, &layout);
            assert_eq!(edges.len(), connections.len(), "scenario {}", scenario.id);
        }
    }
}
