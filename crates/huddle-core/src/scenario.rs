//! Fixture data model: scenarios, agents, connections, and log entries.
//!
//! All types here are immutable fixture data, built once by [`crate::fixtures`]
//! and never mutated afterwards. The playback controller takes its own
//! mutable copies of the agent/connection graph during Setup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an agent within a scenario instance.
///
/// Short display handles like `D1` or `QA1` — rendered directly inside the
/// graph nodes, so they stay terse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Create an agent id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AgentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A participant node in the collaboration graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique id within the current agent set.
    pub id: AgentId,
    /// Display name, also the key log entries are attributed by.
    pub name: String,
    /// One-line role description.
    pub role: String,
    /// Optional badge text ("Core Team", "API: Snyk", ...).
    pub tag: Option<String>,
    /// Optional endpoint URL, editable during Setup.
    pub endpoint: Option<String>,
    /// The designated coordinator is never removable and is the source of
    /// all default connections.
    pub coordinator: bool,
}

impl Agent {
    /// Create a regular (non-coordinator) agent.
    #[must_use]
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            tag: None,
            endpoint: None,
            coordinator: false,
        }
    }

    /// Attach a badge tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Mark this agent as the coordinator.
    #[must_use]
    pub fn as_coordinator(mut self) -> Self {
        self.coordinator = true;
        self
    }
}

/// A directed edge between two agent ids.
///
/// Endpoints are not validated against the agent set: a connection may
/// reference a removed agent, and duplicates are permitted. The layout
/// projector skips anything it cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Source agent id.
    pub from: AgentId,
    /// Target agent id.
    pub to: AgentId,
}

impl Connection {
    /// Create a connection between two agent ids.
    #[must_use]
    pub fn new(from: impl Into<AgentId>, to: impl Into<AgentId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Risk level attached to every log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Routine step.
    Low,
    /// Step the supervisor annotates or watches.
    Medium,
    /// Step that typically demands a human decision.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// One human-selectable choice at an intervention point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// Machine value, unique per option list.
    pub value: String,
    /// Short label shown on the chooser.
    pub label: String,
    /// One-line explanation.
    pub description: String,
    /// Optional reference link.
    pub link: Option<String>,
}

impl DecisionOption {
    /// Create an option without a reference link.
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Attach a reference link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// A scripted pause point: playback halts until one of the options is chosen.
///
/// Presence of this struct on a [`LogEntry`] *is* the human-intervention
/// flag; fixture tests assert the options list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    /// The enumerated choices presented to the human.
    pub options: Vec<DecisionOption>,
}

impl Intervention {
    /// Create an intervention from its option list.
    #[must_use]
    pub fn new(options: Vec<DecisionOption>) -> Self {
        Self { options }
    }
}

/// One fixed, pre-authored playback step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Opaque display label ("00:25"). Never parsed or ordered on; log
    /// order is array order.
    pub timestamp: String,
    /// Name of the acting agent, resolved against the *current* graph at
    /// playback time. An unmatched name is tolerated.
    pub agent_name: String,
    /// What the agent did.
    pub action: String,
    /// Risk level for styling.
    pub risk: RiskLevel,
    /// Optional supervisor annotation shown under the entry.
    pub supervisor_note: Option<String>,
    /// Optional pause point with decision options.
    pub intervention: Option<Intervention>,
}

impl LogEntry {
    /// Create a plain entry.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        agent_name: impl Into<String>,
        action: impl Into<String>,
        risk: RiskLevel,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            agent_name: agent_name.into(),
            action: action.into(),
            risk,
            supervisor_note: None,
            intervention: None,
        }
    }

    /// Attach a supervisor annotation.
    #[must_use]
    pub fn with_supervisor_note(mut self, note: impl Into<String>) -> Self {
        self.supervisor_note = Some(note.into());
        self
    }

    /// Mark the entry as a pause point with the given decision options.
    #[must_use]
    pub fn with_intervention(mut self, options: Vec<DecisionOption>) -> Self {
        self.intervention = Some(Intervention::new(options));
        self
    }

    /// Whether playback must pause at this entry.
    #[must_use]
    pub fn requires_intervention(&self) -> bool {
        self.intervention.is_some()
    }
}

/// Symbolic icon key per scenario, resolved to a glyph by the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioIcon {
    /// Source-control collaboration.
    SourceControl,
    /// Document/manuscript work.
    Document,
    /// Scheduling and events.
    Calendar,
}

/// Symbolic badge key for supervisor certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// Compliance/safety shield.
    Shield,
    /// Accreditation award.
    Award,
}

/// A certificate shown in the supervisor briefing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate display name.
    pub name: String,
    /// Badge rendered next to it.
    pub badge: Badge,
}

impl Certificate {
    /// Create a certificate.
    #[must_use]
    pub fn new(name: impl Into<String>, badge: Badge) -> Self {
        Self {
            name: name.into(),
            badge,
        }
    }
}

/// The coordinator's standing protocols and certificates for a scenario,
/// shown on the Setup screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupervisorBriefing {
    /// Protocol names the coordinator enforces.
    pub protocols: Vec<String>,
    /// Certificates backing the protocols.
    pub certificates: Vec<Certificate>,
}

/// A fixed collaboration template: default team, addable roster, briefing,
/// and the canned execution log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique id across the fixture set ("github", "research", "event").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Card description.
    pub description: String,
    /// Symbolic icon key.
    pub icon: ScenarioIcon,
    /// Agents pre-selected when the scenario is chosen.
    pub default_agents: Vec<Agent>,
    /// Extra agents the user may add during Setup.
    pub roster: Vec<Agent>,
    /// Supervisor briefing for the Setup screen.
    pub briefing: SupervisorBriefing,
    /// The fixed, ordered execution log.
    pub log: Vec<LogEntry>,
}

impl Scenario {
    /// The designated coordinator among the default agents, if any.
    #[must_use]
    pub fn coordinator(&self) -> Option<&Agent> {
        self.default_agents.iter().find(|a| a.coordinator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn test_risk_level_serde_lowercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: RiskLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, RiskLevel::Medium);
    }

    #[test]
    fn test_log_entry_builders() {
        let entry = LogEntry::new("00:30", "Developer", "Encountered a vulnerability", RiskLevel::High)
            .with_intervention(vec![DecisionOption::new("patch", "Apply patch", "Hotfix it.")]);
        assert!(entry.requires_intervention());
        assert_eq!(entry.intervention.unwrap().options.len(), 1);

        let plain = LogEntry::new("00:00", "Supervisor", "Kickoff", RiskLevel::Low);
        assert!(!plain.requires_intervention());
        assert!(plain.supervisor_note.is_none());
    }

    #[test]
    fn test_decision_option_link() {
        let opt = DecisionOption::new("revert", "Revert", "Roll back.")
            .with_link("https://example.com/version-control-guide");
        assert_eq!(opt.link.as_deref(), Some("https://example.com/version-control-guide"));
    }
}
