//! Log display projector.
//!
//! Maps the revealed log prefix to an ordered render list. Stateless and
//! recomputed fully on every change — append-only input keeps the cost
//! proportional to what is on screen.

use crate::scenario::{DecisionOption, LogEntry, RiskLevel};

/// Visual class for an entry's risk annotation.
///
/// [`RiskClass::Neutral`] is the fallback for anything without a
/// recognized level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskClass {
    /// Routine.
    Low,
    /// Watched.
    Medium,
    /// Critical.
    High,
    /// No recognized level.
    #[default]
    Neutral,
}

impl From<RiskLevel> for RiskClass {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self::Low,
            RiskLevel::Medium => Self::Medium,
            RiskLevel::High => Self::High,
        }
    }
}

/// One renderable row of the execution log.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    /// Opaque timestamp label.
    pub timestamp: String,
    /// Acting agent's display name.
    pub agent_name: String,
    /// Action text.
    pub action: String,
    /// Lowercase risk label ("Risk: low").
    pub risk_label: String,
    /// Visual class for the risk annotation.
    pub risk_class: RiskClass,
    /// Supervisor annotation, if any.
    pub supervisor_note: Option<String>,
    /// Decision options to present as an interactive chooser, for entries
    /// that require human intervention.
    pub chooser: Option<Vec<DecisionOption>>,
}

/// Project the revealed log prefix into its render list, preserving order.
#[must_use]
pub fn render(prefix: &[LogEntry]) -> Vec<DisplayEntry> {
    prefix
        .iter()
        .map(|entry| DisplayEntry {
            timestamp: entry.timestamp.clone(),
            agent_name: entry.agent_name.clone(),
            action: entry.action.clone(),
            risk_label: entry.risk.to_string(),
            risk_class: RiskClass::from(entry.risk),
            supervisor_note: entry.supervisor_note.clone(),
            chooser: entry
                .intervention
                .as_ref()
                .map(|intervention| intervention.options.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_order_preserved() {
        let scenario = fixtures::load("github").unwrap();
        let rendered = render(&scenario.log);
        assert_eq!(rendered.len(), scenario.log.len());
        for (row, entry) in rendered.iter().zip(scenario.log.iter()) {
            assert_eq!(row.action, entry.action);
            assert_eq!(row.agent_name, entry.agent_name);
            assert_eq!(row.timestamp, entry.timestamp);
        }
    }

    #[test]
    fn test_risk_annotations() {
        let scenario = fixtures::load("github").unwrap();
        let rendered = render(&scenario.log);
        assert_eq!(rendered[0].risk_class, RiskClass::Low);
        assert_eq!(rendered[0].risk_label, "low");
        assert_eq!(rendered[2].risk_class, RiskClass::Medium);
        assert_eq!(rendered[6].risk_class, RiskClass::High);
    }

    #[test]
    fn test_neutral_is_default_class() {
        assert_eq!(RiskClass::default(), RiskClass::Neutral);
    }

    #[test]
    fn test_chooser_attached_to_intervention_entries() {
        let scenario = fixtures::load("event").unwrap();
        let rendered = render(&scenario.log);
        for (row, entry) in rendered.iter().zip(scenario.log.iter()) {
            assert_eq!(row.chooser.is_some(), entry.requires_intervention());
        }
        let chooser = rendered[5].chooser.as_ref().unwrap();
        let values: Vec<&str> = chooser.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "city-convention-center",
                "tech-hub-auditorium",
                "riverside-conference-hall"
            ]
        );
    }

    #[test]
    fn test_supervisor_note_carried() {
        let scenario = fixtures::load("research").unwrap();
        let rendered = render(&scenario.log);
        assert!(rendered[2].supervisor_note.is_some());
        assert!(rendered[0].supervisor_note.is_none());
    }

    #[test]
    fn test_empty_prefix() {
        assert!(render(&[]).is_empty());
    }
}
