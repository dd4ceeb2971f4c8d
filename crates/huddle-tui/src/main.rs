#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Huddle - a terminal mockup of a multi-agent collaboration dashboard.
//!
//! Pick a scenario, review the agent team and its connections, then watch
//! the scripted execution log play back with a live interaction graph.
//! Everything is canned fixture data; no real agents run anywhere.
//!
//! Run with: `cargo run -p huddle-tui`
//!
//! Jump straight into a scenario:
//! `cargo run -p huddle-tui -- --scenario github`
//!
//! Capture snapshots without interactive mode:
//! `cargo run -p huddle-tui -- --snapshot 8 --scenario event`

use anyhow::Context as _;
use clap::Parser;
use huddle_core::fixtures;
use huddle_core::playback::Phase;
use std::path::PathBuf;

mod app;
mod logging;
mod ui;

use app::{App, Screen};

/// Huddle - multi-agent collaboration dashboard mockup
#[derive(Parser)]
#[command(name = "huddle", version, about)]
struct Cli {
    /// Scenario id to preselect, skipping the scenario screen
    #[arg(short, long)]
    scenario: Option<String>,

    /// Render this many non-interactive snapshot frames to stdout and exit
    #[arg(long, value_name = "STEPS")]
    snapshot: Option<usize>,

    /// Write tracing output to this file (the alternate screen stays clean)
    #[arg(long, value_name = "PATH", env = "HUDDLE_LOG")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    // Snapshot mode - non-interactive, outputs frames to stdout
    if let Some(steps) = cli.snapshot {
        let id = cli.scenario.as_deref().unwrap_or("github");
        return run_snapshot_mode(id, steps);
    }

    let mut app = App::new();
    if let Some(id) = &cli.scenario {
        let scenario = fixtures::load(id).context("resolving --scenario")?;
        app.open_setup(scenario);
    }

    let mut terminal = ui::init_terminal()?;
    let result = app.run(&mut terminal);
    ui::restore_terminal(&mut terminal)?;
    result.map_err(Into::into)
}

/// Drive a scenario without a terminal and print rendered frames.
///
/// Interventions are resolved automatically with their first option so the
/// playback runs unattended.
fn run_snapshot_mode(scenario_id: &str, steps: usize) -> anyhow::Result<()> {
    let scenario = fixtures::load(scenario_id).context("resolving --scenario")?;

    let mut app = App::new();
    app.open_setup(scenario);
    app.controller.complete_setup();
    app.screen = Screen::Execution;

    let width = 100;
    let height = 30;

    println!("=== Snapshot Mode: {scenario_id} ({steps} steps) ===");

    for step in 1..=steps {
        if app.controller.phase() == Phase::AwaitingDecision {
            let choice = app
                .controller
                .pending_intervention()
                .and_then(|i| i.options.first())
                .map(|o| o.value.clone());
            let timestamp = app
                .controller
                .pending_entry()
                .map(|e| e.timestamp.clone())
                .unwrap_or_default();
            if let Some(value) = choice {
                app.controller.resolve_decision(&value, &timestamp);
            }
        } else {
            app.controller.advance();
        }

        println!("\n--- Step {step} (cursor {}) ---", app.controller.cursor());
        print!("{}", ui::render_snapshot(&app, width, height));

        if app.controller.phase() == Phase::Ready && app.controller.cursor() == 0 {
            println!("\n=== Run complete ===");
            break;
        }
    }

    Ok(())
}
