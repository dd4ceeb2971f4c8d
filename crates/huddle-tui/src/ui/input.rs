//! Input handling for the TUI.

use crate::app::{App, Screen};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use huddle_core::playback::Phase;
use huddle_core::scenario::AgentId;
use std::io;

/// Handle input events
pub(crate) fn handle_input(app: &mut App) -> io::Result<()> {
    if let Event::Key(key) = event::read()? {
        // Quit: double Ctrl+C/D to confirm, from any screen
        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c' | 'd'), KeyModifiers::CONTROL)
        ) {
            if app.quit_pending {
                app.should_quit = true;
            } else {
                app.quit_pending = true;
            }
            return Ok(());
        }
        app.quit_pending = false;

        match app.screen {
            Screen::Scenarios => handle_scenarios_input(app, key),
            Screen::Setup => handle_setup_input(app, key),
            Screen::Execution => handle_execution_input(app, key),
        }
        app.clamp_selections();
    }
    Ok(())
}

fn handle_scenarios_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.scenario_selected = app.scenario_selected.saturating_sub(1);
        },
        KeyCode::Down | KeyCode::Char('j') => {
            let max = app.catalog.len().saturating_sub(1);
            app.scenario_selected = app.scenario_selected.saturating_add(1).min(max);
        },
        KeyCode::Enter => {
            if let Some(scenario) = app.catalog.get(app.scenario_selected).cloned() {
                app.open_setup(scenario);
            }
        },
        KeyCode::Char('q') => app.should_quit = true,
        _ => {},
    }
}

#[allow(clippy::too_many_lines)]
fn handle_setup_input(app: &mut App, key: KeyEvent) {
    // Endpoint editing captures all keys until committed or cancelled.
    if let Some(buffer) = app.endpoint_input.as_mut() {
        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            },
            KeyCode::Enter => {
                let buffer = app.endpoint_input.take().unwrap_or_default();
                let endpoint = if buffer.trim().is_empty() {
                    None
                } else {
                    Some(buffer.trim().to_string())
                };
                if let Some(id) = selected_agent_id(app) {
                    app.controller.set_endpoint(&id, endpoint);
                }
            },
            KeyCode::Esc => {
                app.endpoint_input = None;
            },
            _ => {},
        }
        return;
    }

    match (key.code, key.modifiers) {
        // Reorder: Shift+Up / Shift+Down drags the selected agent
        (KeyCode::Up, KeyModifiers::SHIFT) => {
            if app.setup_selected > 0 {
                let target = app.setup_selected.saturating_sub(1);
                app.controller.move_agent(app.setup_selected, target);
                app.setup_selected = target;
            }
        },
        (KeyCode::Down, KeyModifiers::SHIFT) => {
            let target = app.setup_selected.saturating_add(1);
            if target < app.controller.agents().len() {
                app.controller.move_agent(app.setup_selected, target);
                app.setup_selected = target;
            }
        },

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            app.setup_selected = app.setup_selected.saturating_sub(1);
        },
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            let max = app.controller.agents().len().saturating_sub(1);
            app.setup_selected = app.setup_selected.saturating_add(1).min(max);
        },

        // Add the next roster agent not yet on the team
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            if let Some(id) = next_roster_agent(app) {
                app.controller.add_roster_agent(&id);
            }
        },

        // Remove the selected agent (the coordinator silently stays)
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            if let Some(id) = selected_agent_id(app) {
                app.controller.remove_agent(&id);
                if app.connecting_from.as_ref() == Some(&id) {
                    app.connecting_from = None;
                }
            }
        },

        // Two-step connect: first press marks the source, second draws the edge
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            if let Some(id) = selected_agent_id(app) {
                match app.connecting_from.take() {
                    Some(from) if from != id => app.controller.connect(&from, &id),
                    Some(_) => {}, // same agent twice cancels
                    None => app.connecting_from = Some(id),
                }
            }
        },

        // Drop the coordinator's edge to the selected agent
        (KeyCode::Char('x'), KeyModifiers::NONE) => {
            if let (Some(from), Some(to)) = (coordinator_id(app), selected_agent_id(app)) {
                app.controller.disconnect(&from, &to);
            }
        },

        // Edit the selected agent's endpoint URL
        (KeyCode::Char('e'), KeyModifiers::NONE) => {
            if let Some(id) = selected_agent_id(app) {
                let current = app
                    .controller
                    .agents()
                    .iter()
                    .find(|a| a.id == id)
                    .and_then(|a| a.endpoint.clone())
                    .unwrap_or_default();
                app.endpoint_input = Some(current);
            }
        },

        // Complete setup and move to the execution screen
        (KeyCode::Enter, _) => {
            app.controller.complete_setup();
            if !matches!(
                app.controller.phase(),
                Phase::Idle | Phase::ScenarioChosen | Phase::Setup
            ) {
                app.screen = Screen::Execution;
            }
        },

        (KeyCode::Esc, _) => {
            app.connecting_from = None;
            app.screen = Screen::Scenarios;
        },
        (KeyCode::Char('q'), KeyModifiers::NONE) => app.should_quit = true,
        _ => {},
    }
}

fn handle_execution_input(app: &mut App, key: KeyEvent) {
    let deciding = app.controller.phase() == Phase::AwaitingDecision;

    match key.code {
        KeyCode::Char(' ') => app.controller.start(),

        KeyCode::Up if deciding => {
            app.decision_selected = app.decision_selected.saturating_sub(1);
        },
        KeyCode::Down if deciding => {
            let max = app
                .controller
                .pending_intervention()
                .map_or(0, |i| i.options.len())
                .saturating_sub(1);
            app.decision_selected = app.decision_selected.saturating_add(1).min(max);
        },
        KeyCode::Enter if deciding => {
            let choice = app
                .controller
                .pending_intervention()
                .and_then(|i| i.options.get(app.decision_selected))
                .map(|o| o.value.clone());
            let timestamp = app
                .controller
                .pending_entry()
                .map(|e| e.timestamp.clone())
                .unwrap_or_default();
            if let Some(value) = choice {
                app.controller.resolve_decision(&value, &timestamp);
                app.decision_selected = 0;
                app.log_scroll = 0;
            }
        },

        KeyCode::Up => app.log_scroll = app.log_scroll.saturating_add(1),
        KeyCode::Down => app.log_scroll = app.log_scroll.saturating_sub(1),
        KeyCode::PageUp => app.log_scroll = app.log_scroll.saturating_add(10),
        KeyCode::PageDown => app.log_scroll = app.log_scroll.saturating_sub(10),

        KeyCode::Esc => {
            // Re-entering setup only unlocks editing if the controller
            // still allows it; otherwise the screen is a read-only view.
            app.controller.enter_setup();
            app.screen = Screen::Setup;
        },
        KeyCode::Char('q') => app.should_quit = true,
        _ => {},
    }
}

fn selected_agent_id(app: &App) -> Option<AgentId> {
    app.controller
        .agents()
        .get(app.setup_selected)
        .map(|a| a.id.clone())
}

fn coordinator_id(app: &App) -> Option<AgentId> {
    app.controller
        .agents()
        .iter()
        .find(|a| a.coordinator)
        .map(|a| a.id.clone())
}

fn next_roster_agent(app: &App) -> Option<AgentId> {
    let scenario = app.controller.scenario()?;
    scenario
        .roster
        .iter()
        .find(|candidate| !app.controller.agents().iter().any(|a| a.id == candidate.id))
        .map(|a| a.id.clone())
}
