//! The scripted playback controller.
//!
//! A [`PlaybackController`] owns every piece of session state: the selected
//! scenario, the editable agent/connection graph, the cursor into the fixed
//! log, the revealed log prefix, per-agent action counters, and the step
//! timer. The frontend calls [`PlaybackController::tick`] from its frame
//! loop; everything else happens through explicit operations.
//!
//! Misuse is a guarded no-op throughout — advancing with no scenario,
//! editing outside Setup, resolving a decision while not paused. The worst
//! failure mode in this component class is a stuck timer, which is
//! prevented structurally: the timer handle is controller-owned state,
//! at most one is ever armed, and every transition out of the running
//! phase disarms it. Because the controller owns the cursor, each step
//! reads live state; there is no snapshot for a timer callback to go
//! stale against.

use crate::scenario::{Agent, AgentId, Connection, Intervention, LogEntry, RiskLevel, Scenario};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Fixed cadence between automatic steps once playback is running.
pub const STEP_INTERVAL: Duration = Duration::from_secs(2);

/// Name the synthetic decision entries are attributed to.
pub const HUMAN_ACTOR: &str = "Human";

/// Lifecycle phase of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No scenario selected yet.
    #[default]
    Idle,
    /// A scenario is selected; the setup screen has not been opened.
    ScenarioChosen,
    /// The graph is editable.
    Setup,
    /// Setup complete; playback can start (also the state after a finished
    /// run, ready to restart).
    Ready,
    /// Stepping through the log on the timer cadence.
    Running,
    /// Halted at an intervention entry until a decision arrives.
    AwaitingDecision,
}

/// Marker for an armed step timer.
#[derive(Debug, Clone, Copy)]
struct StepTimer {
    armed_at: Instant,
}

/// State machine driving the step-by-step reveal of a scenario's log.
#[derive(Debug, Default)]
pub struct PlaybackController {
    scenario: Option<Scenario>,
    agents: Vec<Agent>,
    connections: Vec<Connection>,
    cursor: usize,
    prefix: Vec<LogEntry>,
    counters: HashMap<AgentId, usize>,
    active_agent: Option<AgentId>,
    phase: Phase,
    timer: Option<StepTimer>,
}

/// One edge from the coordinator to every other agent — the connection set
/// every scenario starts from.
#[must_use]
pub fn default_connections(agents: &[Agent]) -> Vec<Connection> {
    let Some(coordinator) = agents.iter().find(|a| a.coordinator) else {
        return Vec::new();
    };
    agents
        .iter()
        .filter(|a| a.id != coordinator.id)
        .map(|a| Connection {
            from: coordinator.id.clone(),
            to: a.id.clone(),
        })
        .collect()
}

impl PlaybackController {
    /// Create an idle controller with no scenario.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Observers ───────────────────────────────────────────────

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The selected scenario, if any.
    #[must_use]
    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// The current (possibly edited) agent list, in display order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The current connection list, dangling references included.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Index of the next log entry to reveal.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The revealed log: entries with index below the cursor, in order,
    /// plus any synthetic [`HUMAN_ACTOR`] decision entries.
    #[must_use]
    pub fn log_prefix(&self) -> &[LogEntry] {
        &self.prefix
    }

    /// How many log entries each agent has acted in during the current run.
    #[must_use]
    pub fn action_counts(&self) -> &HashMap<AgentId, usize> {
        &self.counters
    }

    /// Action count for a single agent (zero if it never acted).
    #[must_use]
    pub fn action_count(&self, id: &AgentId) -> usize {
        self.counters.get(id).copied().unwrap_or(0)
    }

    /// The agent the most recent entry resolved to, if any.
    #[must_use]
    pub fn active_agent(&self) -> Option<&AgentId> {
        self.active_agent.as_ref()
    }

    /// Whether the step timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The intervention playback is currently halted at, if any.
    #[must_use]
    pub fn pending_intervention(&self) -> Option<&Intervention> {
        self.pending_entry()?.intervention.as_ref()
    }

    /// The entry playback is currently halted at, if any.
    #[must_use]
    pub fn pending_entry(&self) -> Option<&LogEntry> {
        if self.phase != Phase::AwaitingDecision {
            return None;
        }
        self.scenario.as_ref()?.log.get(self.cursor)
    }

    // ─── Scenario selection ──────────────────────────────────────

    /// Select a scenario, resetting all session state.
    ///
    /// Valid in any phase. The graph is reset to the scenario's defaults
    /// with connections synthesized from the coordinator; any armed timer
    /// is cancelled.
    pub fn select_scenario(&mut self, scenario: Scenario) {
        debug!(id = %scenario.id, "scenario selected");
        self.agents = scenario.default_agents.clone();
        self.connections = default_connections(&self.agents);
        self.prefix.clear();
        self.counters.clear();
        self.cursor = 0;
        self.active_agent = None;
        self.timer = None;
        self.scenario = Some(scenario);
        self.phase = Phase::ScenarioChosen;
    }

    // ─── Setup phase ─────────────────────────────────────────────

    /// Open the setup phase. No-op unless a scenario is chosen.
    pub fn enter_setup(&mut self) {
        if matches!(self.phase, Phase::ScenarioChosen | Phase::Setup) {
            self.phase = Phase::Setup;
        }
    }

    /// Replace the graph wholesale. Valid only during Setup.
    ///
    /// No validation is performed on connection endpoints: the editing
    /// contract is permissive, and the layout projector skips anything it
    /// cannot resolve.
    pub fn update_graph(&mut self, agents: Vec<Agent>, connections: Vec<Connection>) {
        if self.phase != Phase::Setup {
            return;
        }
        self.agents = agents;
        self.connections = connections;
    }

    /// Add an agent from the scenario's roster. No-op if it is already
    /// present or the id is not in the roster. Setup only.
    pub fn add_roster_agent(&mut self, id: &AgentId) {
        if self.phase != Phase::Setup {
            return;
        }
        if self.agents.iter().any(|a| a.id == *id) {
            return;
        }
        let Some(agent) = self
            .scenario
            .as_ref()
            .and_then(|s| s.roster.iter().find(|a| a.id == *id))
            .cloned()
        else {
            return;
        };
        self.agents.push(agent);
    }

    /// Remove an agent and every connection touching it. The coordinator is
    /// never removable. Setup only.
    pub fn remove_agent(&mut self, id: &AgentId) {
        if self.phase != Phase::Setup {
            return;
        }
        let removable = self
            .agents
            .iter()
            .any(|a| a.id == *id && !a.coordinator);
        if !removable {
            return;
        }
        self.agents.retain(|a| a.id != *id);
        self.connections
            .retain(|c| c.from != *id && c.to != *id);
    }

    /// Add a directed connection. Self-loops are ignored; duplicates are
    /// permitted. Setup only.
    pub fn connect(&mut self, from: &AgentId, to: &AgentId) {
        if self.phase != Phase::Setup || from == to {
            return;
        }
        self.connections.push(Connection {
            from: from.clone(),
            to: to.clone(),
        });
    }

    /// Remove every connection matching the given endpoints. Setup only.
    pub fn disconnect(&mut self, from: &AgentId, to: &AgentId) {
        if self.phase != Phase::Setup {
            return;
        }
        self.connections
            .retain(|c| !(c.from == *from && c.to == *to));
    }

    /// Move an agent within the list (the layout is order-sensitive).
    /// Out-of-range indices are a no-op. Setup only.
    pub fn move_agent(&mut self, from_index: usize, to_index: usize) {
        if self.phase != Phase::Setup {
            return;
        }
        if from_index >= self.agents.len() || to_index >= self.agents.len() {
            return;
        }
        let agent = self.agents.remove(from_index);
        self.agents.insert(to_index, agent);
    }

    /// Set or clear an agent's endpoint URL. Setup only.
    pub fn set_endpoint(&mut self, id: &AgentId, endpoint: Option<String>) {
        if self.phase != Phase::Setup {
            return;
        }
        if let Some(agent) = self.agents.iter_mut().find(|a| a.id == *id) {
            agent.endpoint = endpoint;
        }
    }

    /// Finish setup. No-op guard: requires a non-empty agent list.
    pub fn complete_setup(&mut self) {
        if self.phase != Phase::Setup || self.agents.is_empty() {
            return;
        }
        debug!(agents = self.agents.len(), "setup complete");
        self.phase = Phase::Ready;
    }

    // ─── Execution phase ─────────────────────────────────────────

    /// Start (or restart) playback: reveals the first entry immediately,
    /// then arms the step timer. Starting while already running is a no-op.
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        debug!(cursor = self.cursor, "playback started");
        self.phase = Phase::Running;
        self.advance();
        if self.phase == Phase::Running {
            self.arm_timer();
        }
    }

    /// Drive the step cadence. Called from the frontend's frame loop; fires
    /// [`Self::advance`] once per [`STEP_INTERVAL`] while the timer is armed.
    pub fn tick(&mut self) {
        let Some(timer) = self.timer else {
            return;
        };
        if timer.armed_at.elapsed() < STEP_INTERVAL {
            return;
        }
        self.advance();
        if self.phase == Phase::Running {
            self.arm_timer();
        } else {
            self.timer = None;
        }
    }

    /// Reveal the next log entry.
    ///
    /// No-op unless a scenario is selected and playback is not awaiting a
    /// decision. A fresh run (cursor 0) clears the previous prefix and
    /// counters first. Reaching the end of the log clears the active agent,
    /// resets the cursor, and returns to [`Phase::Ready`].
    pub fn advance(&mut self) {
        if self.scenario.is_none() || self.phase == Phase::AwaitingDecision {
            return;
        }
        if self.cursor == 0 {
            self.prefix.clear();
            self.counters.clear();
        }
        let entry = self
            .scenario
            .as_ref()
            .and_then(|s| s.log.get(self.cursor))
            .cloned();
        let Some(entry) = entry else {
            debug!("log exhausted, ready to restart");
            self.active_agent = None;
            self.cursor = 0;
            self.timer = None;
            self.phase = Phase::Ready;
            return;
        };

        trace!(cursor = self.cursor, agent = %entry.agent_name, "revealing entry");
        // Resolve against the current graph; a miss leaves no active agent.
        self.active_agent = self
            .agents
            .iter()
            .find(|a| a.name == entry.agent_name)
            .map(|a| a.id.clone());
        if let Some(id) = self.active_agent.clone() {
            let count = self.counters.entry(id).or_insert(0);
            *count = count.saturating_add(1);
        }

        let pause = entry.requires_intervention();
        self.prefix.push(entry);
        if pause {
            debug!(cursor = self.cursor, "paused for intervention");
            self.phase = Phase::AwaitingDecision;
            self.timer = None;
        } else {
            self.cursor = self.cursor.saturating_add(1);
        }
    }

    /// Resolve the pending intervention with the chosen option value.
    ///
    /// Valid only while awaiting a decision. Appends a synthetic
    /// [`HUMAN_ACTOR`] entry, moves the cursor past the paused entry, and
    /// re-arms the timer so playback resumes on the next cadence.
    pub fn resolve_decision(&mut self, value: &str, timestamp: &str) {
        if self.phase != Phase::AwaitingDecision {
            return;
        }
        debug!(value, "decision recorded");
        self.prefix.push(LogEntry::new(
            timestamp,
            HUMAN_ACTOR,
            format!("Decision: {value}"),
            RiskLevel::Low,
        ));
        self.cursor = self.cursor.saturating_add(1);
        self.phase = Phase::Running;
        self.arm_timer();
    }

    fn arm_timer(&mut self) {
        self.timer = Some(StepTimer {
            armed_at: Instant::now(),
        });
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ready(id: &str) -> PlaybackController {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load(id).unwrap());
        controller.enter_setup();
        controller.complete_setup();
        controller
    }

    fn advance_until_paused(controller: &mut PlaybackController) {
        while controller.phase() != Phase::AwaitingDecision {
            controller.advance();
        }
    }

    // -----------------------------------------------------------------------
    // Scenario selection
    // -----------------------------------------------------------------------

    #[test]
    fn test_select_scenario_resets_to_defaults() {
        for scenario in fixtures::catalog() {
            let mut controller = PlaybackController::new();
            controller.select_scenario(scenario.clone());

            assert_eq!(controller.phase(), Phase::ScenarioChosen);
            assert_eq!(controller.agents(), scenario.default_agents.as_slice());
            assert!(controller.log_prefix().is_empty());
            assert_eq!(controller.cursor(), 0);
            assert!(controller.active_agent().is_none());

            // Exactly one edge from the coordinator to every other agent.
            let coordinator = scenario.coordinator().unwrap();
            let connections = controller.connections();
            assert_eq!(connections.len(), scenario.default_agents.len() - 1);
            for connection in connections {
                assert_eq!(connection.from, coordinator.id);
                assert_ne!(connection.to, coordinator.id);
            }
            for agent in scenario.default_agents.iter().filter(|a| !a.coordinator) {
                assert!(connections.iter().any(|c| c.to == agent.id));
            }
        }
    }

    #[test]
    fn test_select_scenario_cancels_timer() {
        let mut controller = ready("github");
        controller.start();
        assert!(controller.is_running());

        controller.select_scenario(fixtures::load("event").unwrap());
        assert!(!controller.is_running());
        assert_eq!(controller.phase(), Phase::ScenarioChosen);
    }

    // -----------------------------------------------------------------------
    // Setup editing
    // -----------------------------------------------------------------------

    #[test]
    fn test_update_graph_only_during_setup() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        let before = controller.agents().to_vec();

        // Still in ScenarioChosen: wholesale replacement is refused.
        controller.update_graph(Vec::new(), Vec::new());
        assert_eq!(controller.agents(), before.as_slice());

        controller.enter_setup();
        controller.update_graph(Vec::new(), Vec::new());
        assert!(controller.agents().is_empty());
    }

    #[test]
    fn test_coordinator_not_removable() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let coordinator = AgentId::from("S1");
        controller.remove_agent(&coordinator);
        assert!(controller.agents().iter().any(|a| a.id == coordinator));
    }

    #[test]
    fn test_remove_agent_drops_its_connections() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let dev = AgentId::from("D1");
        controller.remove_agent(&dev);
        assert!(!controller.agents().iter().any(|a| a.id == dev));
        assert!(!controller
            .connections()
            .iter()
            .any(|c| c.from == dev || c.to == dev));
    }

    #[test]
    fn test_connect_permits_duplicates_rejects_self_loop() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();
        let before = controller.connections().len();

        let dev = AgentId::from("D1");
        let qa = AgentId::from("QA1");
        controller.connect(&dev, &qa);
        controller.connect(&dev, &qa);
        assert_eq!(controller.connections().len(), before + 2);

        controller.connect(&dev, &dev);
        assert_eq!(controller.connections().len(), before + 2);
    }

    #[test]
    fn test_disconnect_removes_matching_edges() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let coordinator = AgentId::from("S1");
        let dev = AgentId::from("D1");
        controller.disconnect(&coordinator, &dev);
        assert!(!controller
            .connections()
            .iter()
            .any(|c| c.from == coordinator && c.to == dev));
    }

    #[test]
    fn test_add_roster_agent() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let inspector = AgentId::from("SI1");
        controller.add_roster_agent(&inspector);
        assert!(controller.agents().iter().any(|a| a.id == inspector));

        // Adding again is a no-op.
        let count = controller.agents().len();
        controller.add_roster_agent(&inspector);
        assert_eq!(controller.agents().len(), count);

        // Unknown ids are ignored.
        controller.add_roster_agent(&AgentId::from("ZZ9"));
        assert_eq!(controller.agents().len(), count);
    }

    #[test]
    fn test_move_agent_reorders() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let first = controller.agents()[0].id.clone();
        controller.move_agent(0, 2);
        assert_eq!(controller.agents()[2].id, first);

        // Out of range is a no-op.
        let order: Vec<AgentId> = controller.agents().iter().map(|a| a.id.clone()).collect();
        controller.move_agent(0, 99);
        let after: Vec<AgentId> = controller.agents().iter().map(|a| a.id.clone()).collect();
        assert_eq!(order, after);
    }

    #[test]
    fn test_set_endpoint() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        let dev = AgentId::from("D1");
        controller.set_endpoint(&dev, Some("https://agents.internal/dev".to_string()));
        let agent = controller.agents().iter().find(|a| a.id == dev).unwrap();
        assert_eq!(agent.endpoint.as_deref(), Some("https://agents.internal/dev"));
    }

    #[test]
    fn test_complete_setup_requires_agents() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();
        controller.update_graph(Vec::new(), Vec::new());

        controller.complete_setup();
        assert_eq!(controller.phase(), Phase::Setup);
    }

    // -----------------------------------------------------------------------
    // Advancing
    // -----------------------------------------------------------------------

    #[test]
    fn test_advance_without_scenario_is_noop() {
        let mut controller = PlaybackController::new();
        controller.advance();
        assert_eq!(controller.cursor(), 0);
        assert!(controller.log_prefix().is_empty());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_github_pauses_at_security_entry() {
        let mut controller = ready("github");
        advance_until_paused(&mut controller);

        // The security-vulnerability entry: cursor stays on it.
        assert_eq!(controller.cursor(), 6);
        assert_eq!(controller.log_prefix().len(), 7);

        let options = &controller.pending_intervention().unwrap().options;
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["patch", "revert", "analyze"]);
    }

    #[test]
    fn test_advance_while_paused_mutates_nothing() {
        let mut controller = ready("github");
        advance_until_paused(&mut controller);

        let cursor = controller.cursor();
        let prefix = controller.log_prefix().to_vec();
        controller.advance();
        controller.advance();
        assert_eq!(controller.cursor(), cursor);
        assert_eq!(controller.log_prefix(), prefix.as_slice());
        assert_eq!(controller.phase(), Phase::AwaitingDecision);
    }

    #[test]
    fn test_cursor_monotonic_until_end_reset() {
        let mut controller = ready("github");
        let mut last_cursor = controller.cursor();
        let mut resets = 0;

        for _ in 0..64 {
            if controller.phase() == Phase::AwaitingDecision {
                controller.resolve_decision("patch", "00:30");
            } else {
                controller.advance();
            }
            let cursor = controller.cursor();
            if cursor < last_cursor {
                assert_eq!(cursor, 0, "only the end-of-log reset may decrease the cursor");
                resets += 1;
            }
            last_cursor = cursor;
            if resets == 1 {
                break;
            }
        }
        assert_eq!(resets, 1);
        assert_eq!(controller.phase(), Phase::Ready);
        assert!(controller.active_agent().is_none());
    }

    #[test]
    fn test_prefix_append_only() {
        let mut controller = ready("github");
        let mut previous: Vec<LogEntry> = Vec::new();

        // Across the whole run, each observed prefix extends the last; the
        // only truncation allowed is the fresh-run clear back to one entry.
        for _ in 0..32 {
            if controller.phase() == Phase::AwaitingDecision {
                controller.resolve_decision("analyze", "00:30");
            } else {
                controller.advance();
            }
            let current = controller.log_prefix();
            if controller.cursor() == 0 && controller.phase() == Phase::Ready {
                // End of run: prefix retained for display until restart.
                assert!(!current.is_empty());
                break;
            }
            assert!(current.len() >= previous.len());
            assert_eq!(&current[..previous.len()], previous.as_slice());
            previous = current.to_vec();
        }
    }

    #[test]
    fn test_idle_restart_clears_previous_run() {
        let mut controller = ready("github");
        advance_until_paused(&mut controller);
        controller.resolve_decision("patch", "00:30");
        while controller.phase() != Phase::Ready {
            controller.advance();
        }
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.log_prefix().is_empty());

        // The next advance starts a fresh run: old prefix and counters go.
        controller.advance();
        assert_eq!(controller.log_prefix().len(), 1);
        let scenario = fixtures::load("github").unwrap();
        assert_eq!(controller.log_prefix()[0], scenario.log[0]);
        assert_eq!(controller.action_counts().len(), 1);
        assert_eq!(controller.action_count(&AgentId::from("S1")), 1);
    }

    #[test]
    fn test_action_counters_accumulate() {
        let mut controller = ready("github");
        advance_until_paused(&mut controller);

        // Entries 0..=6: Supervisor x2, Developer x3, QA Engineer, Tester.
        assert_eq!(controller.action_count(&AgentId::from("S1")), 2);
        assert_eq!(controller.action_count(&AgentId::from("D1")), 3);
        assert_eq!(controller.action_count(&AgentId::from("QA1")), 1);
        assert_eq!(controller.action_count(&AgentId::from("T1")), 1);
    }

    #[test]
    fn test_unmatched_agent_name_tolerated() {
        let mut controller = PlaybackController::new();
        controller.select_scenario(fixtures::load("github").unwrap());
        controller.enter_setup();

        // Drop the Developer but keep the (now dangling) connections.
        let agents: Vec<Agent> = controller
            .agents()
            .iter()
            .filter(|a| a.id != AgentId::from("D1"))
            .cloned()
            .collect();
        let connections = controller.connections().to_vec();
        controller.update_graph(agents, connections);
        controller.complete_setup();

        controller.advance(); // Supervisor
        assert_eq!(controller.active_agent(), Some(&AgentId::from("S1")));
        controller.advance(); // Developer entry, no matching agent
        assert!(controller.active_agent().is_none());
        assert_eq!(controller.action_count(&AgentId::from("D1")), 0);
        assert_eq!(controller.cursor(), 2);
    }

    // -----------------------------------------------------------------------
    // Intervention flow
    // -----------------------------------------------------------------------

    #[test]
    fn test_event_end_to_end() {
        let mut controller = ready("event");
        controller.start();
        while controller.phase() == Phase::Running {
            controller.advance();
        }

        assert_eq!(controller.phase(), Phase::AwaitingDecision);
        let options = &controller.pending_intervention().unwrap().options;
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "city-convention-center",
                "tech-hub-auditorium",
                "riverside-conference-hall"
            ]
        );
        assert!(!controller.is_running());

        let paused_cursor = controller.cursor();
        controller.resolve_decision("tech-hub-auditorium", "00:25");

        let human = controller.log_prefix().last().unwrap();
        assert_eq!(human.agent_name, HUMAN_ACTOR);
        assert_eq!(human.action, "Decision: tech-hub-auditorium");
        assert_eq!(human.risk, RiskLevel::Low);
        assert_eq!(human.timestamp, "00:25");

        // Automatic advancement resumes past the paused entry.
        assert_eq!(controller.phase(), Phase::Running);
        assert!(controller.is_running());
        assert_eq!(controller.cursor(), paused_cursor + 1);
        controller.advance();
        assert_eq!(
            controller.log_prefix().last().unwrap().action,
            "Sending out invitations"
        );
    }

    #[test]
    fn test_resolve_decision_noop_when_not_paused() {
        let mut controller = ready("github");
        let cursor = controller.cursor();
        controller.resolve_decision("patch", "00:30");
        assert_eq!(controller.cursor(), cursor);
        assert!(controller.log_prefix().is_empty());
        assert_eq!(controller.phase(), Phase::Ready);
    }

    // -----------------------------------------------------------------------
    // Timer ownership
    // -----------------------------------------------------------------------

    #[test]
    fn test_start_reveals_first_entry_and_arms_timer() {
        let mut controller = ready("github");
        controller.start();
        assert_eq!(controller.phase(), Phase::Running);
        assert!(controller.is_running());
        assert_eq!(controller.log_prefix().len(), 1);
        assert_eq!(controller.cursor(), 1);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut controller = ready("github");
        controller.start();
        let cursor = controller.cursor();
        controller.start();
        assert_eq!(controller.cursor(), cursor);
        assert_eq!(controller.log_prefix().len(), 1);
    }

    #[test]
    fn test_pause_disarms_timer() {
        let mut controller = ready("github");
        controller.start();
        while controller.phase() == Phase::Running {
            controller.advance();
        }
        assert_eq!(controller.phase(), Phase::AwaitingDecision);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_tick_before_cadence_does_not_step() {
        let mut controller = ready("github");
        controller.start();
        let cursor = controller.cursor();
        // Freshly armed: the cadence cannot have elapsed yet.
        controller.tick();
        assert_eq!(controller.cursor(), cursor);
    }
}
