//! The fixed scenario catalog.
//!
//! Each scenario lives in its own module with a single `build()` function
//! returning the complete fixture: default team, addable roster, supervisor
//! briefing, and the pre-authored execution log. Content is static by
//! design — this is the entire "intelligence" of the dashboard.

mod event;
mod github;
mod research;

use crate::error::{FixtureError, FixtureResult};
use crate::scenario::Scenario;

/// All scenarios, in card display order.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    vec![github::build(), research::build(), event::build()]
}

/// Look up a scenario by id.
#[must_use]
pub fn find(id: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.id == id)
}

/// Look up a scenario by id, with a descriptive error for unknown ids.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownScenario`] when `id` is not in the
/// catalog.
pub fn load(id: &str) -> FixtureResult<Scenario> {
    find(id).ok_or_else(|| FixtureError::UnknownScenario {
        id: id.to_string(),
        available: catalog()
            .iter()
            .map(|s| s.id.clone())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: Vec<String> = catalog().into_iter().map(|s| s.id).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_every_scenario_has_one_coordinator() {
        for scenario in catalog() {
            let coordinators = scenario
                .default_agents
                .iter()
                .filter(|a| a.coordinator)
                .count();
            assert_eq!(coordinators, 1, "scenario {}", scenario.id);
        }
    }

    #[test]
    fn test_agent_ids_unique_within_scenario() {
        for scenario in catalog() {
            let mut ids = HashSet::new();
            for agent in scenario
                .default_agents
                .iter()
                .chain(scenario.roster.iter())
            {
                assert!(ids.insert(agent.id.clone()), "duplicate {} in {}", agent.id, scenario.id);
            }
        }
    }

    #[test]
    fn test_interventions_have_options() {
        for scenario in catalog() {
            for entry in &scenario.log {
                if let Some(intervention) = &entry.intervention {
                    assert!(!intervention.options.is_empty(), "scenario {}", scenario.id);
                    let values: HashSet<&String> =
                        intervention.options.iter().map(|o| &o.value).collect();
                    assert_eq!(values.len(), intervention.options.len());
                }
            }
        }
    }

    #[test]
    fn test_every_scenario_pauses_exactly_once() {
        for scenario in catalog() {
            let pauses = scenario
                .log
                .iter()
                .filter(|e| e.requires_intervention())
                .count();
            assert_eq!(pauses, 1, "scenario {}", scenario.id);
        }
    }

    #[test]
    fn test_load_unknown_id() {
        let err = load("kitchen-sink").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("kitchen-sink"));
        assert!(msg.contains("github"));
    }

    #[test]
    fn test_find_known_ids() {
        for id in ["github", "research", "event"] {
            assert!(find(id).is_some(), "{id}");
        }
    }
}
