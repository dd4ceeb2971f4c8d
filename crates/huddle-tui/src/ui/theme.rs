//! Color theme for the TUI.

use huddle_core::display::RiskClass;
use huddle_core::scenario::{Badge, ScenarioIcon};
use ratatui::style::Color;

/// Color theme - works on both light and dark terminals
#[derive(Debug, Clone)]
pub(crate) struct Theme {
    /// Headings and selected items
    pub heading: Color,
    /// Regular text
    pub text: Color,
    /// Muted/metadata text
    pub muted: Color,
    /// Borders and separators
    pub border: Color,
    /// Accents (keys, markers)
    pub accent: Color,
    /// Low risk / success
    pub success: Color,
    /// Medium risk / warnings
    pub warning: Color,
    /// High risk / errors
    pub error: Color,
    /// Supervisor annotations
    pub supervisor: Color,
    /// Synthetic human log entries
    pub human: Color,
    /// Graph node fill
    pub node: Color,
    /// Active graph node fill
    pub node_active: Color,
    /// Graph edges
    pub edge: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Color::White,
            text: Color::Gray,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            supervisor: Color::LightCyan,
            human: Color::LightMagenta,
            node: Color::Blue,
            node_active: Color::Green,
            edge: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Color for a risk annotation.
    pub(crate) fn risk_color(&self, class: RiskClass) -> Color {
        match class {
            RiskClass::Low => self.success,
            RiskClass::Medium => self.warning,
            RiskClass::High => self.error,
            RiskClass::Neutral => self.muted,
        }
    }
}

/// Glyph for a scenario icon key.
pub(crate) fn scenario_glyph(icon: ScenarioIcon) -> &'static str {
    match icon {
        ScenarioIcon::SourceControl => "⎇",
        ScenarioIcon::Document => "✎",
        ScenarioIcon::Calendar => "▦",
    }
}

/// Glyph for a certificate badge key.
pub(crate) fn badge_glyph(badge: Badge) -> &'static str {
    match badge {
        Badge::Shield => "✦",
        Badge::Award => "★",
    }
}
