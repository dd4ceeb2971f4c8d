//! Application state and the main run loop.

use crate::ui;
use huddle_core::fixtures;
use huddle_core::playback::PlaybackController;
use huddle_core::scenario::{AgentId, Scenario};
use std::io;
use std::time::{Duration, Instant};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Screen {
    /// Scenario cards.
    #[default]
    Scenarios,
    /// Agent/connection editor.
    Setup,
    /// Playback: log + interaction graph.
    Execution,
}

/// Main application state.
pub(crate) struct App {
    /// The playback engine; owns all session state.
    pub controller: PlaybackController,
    /// Current screen.
    pub screen: Screen,
    /// The fixed scenario catalog, in card order.
    pub catalog: Vec<Scenario>,
    /// Selected card on the Scenarios screen.
    pub scenario_selected: usize,
    /// Selected agent row on the Setup screen.
    pub setup_selected: usize,
    /// First endpoint of an in-progress connect (two-step gesture).
    pub connecting_from: Option<AgentId>,
    /// Endpoint-URL edit buffer; `Some` while editing.
    pub endpoint_input: Option<String>,
    /// Selected option while a decision is pending.
    pub decision_selected: usize,
    /// Log scroll offset from the bottom (0 = most recent).
    pub log_scroll: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether Ctrl+C was pressed once (waiting for confirmation).
    pub quit_pending: bool,
    /// Last render time (for debouncing).
    pub last_render: Instant,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            controller: PlaybackController::new(),
            screen: Screen::default(),
            catalog: fixtures::catalog(),
            scenario_selected: 0,
            setup_selected: 0,
            connecting_from: None,
            endpoint_input: None,
            decision_selected: 0,
            log_scroll: 0,
            should_quit: false,
            quit_pending: false,
            last_render: Instant::now(),
        }
    }

    /// Select a scenario and land on the Setup screen.
    pub(crate) fn open_setup(&mut self, scenario: Scenario) {
        self.controller.select_scenario(scenario);
        self.controller.enter_setup();
        self.screen = Screen::Setup;
        self.setup_selected = 0;
        self.connecting_from = None;
        self.endpoint_input = None;
        self.decision_selected = 0;
        self.log_scroll = 0;
    }

    /// Keep list selections inside their collections after edits.
    pub(crate) fn clamp_selections(&mut self) {
        let agents = self.controller.agents().len();
        self.setup_selected = self.setup_selected.min(agents.saturating_sub(1));

        let options = self
            .controller
            .pending_intervention()
            .map_or(0, |i| i.options.len());
        self.decision_selected = self.decision_selected.min(options.saturating_sub(1));
    }

    /// Main run loop: draw, poll input, tick the playback cadence.
    pub(crate) fn run(&mut self, terminal: &mut ui::Term) -> io::Result<()> {
        let render_interval = Duration::from_millis(16);

        loop {
            if self.last_render.elapsed() >= render_interval {
                terminal.draw(|frame| ui::render_frame(frame, self))?;
                self.last_render = Instant::now();
            }

            // Small poll timeout keeps rendering and the step timer responsive.
            if crossterm::event::poll(Duration::from_millis(10))? {
                ui::handle_input(self)?;
            }

            self.controller.tick();
            self.clamp_selections();

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
