//! Huddle Core - Playback engine for the multi-agent collaboration dashboard.
//!
//! Everything a frontend needs to drive the mockup lives here:
//!
//! - **Fixture data** ([`scenario`], [`fixtures`]): the fixed scenario
//!   catalog with default agent teams, addable rosters, supervisor
//!   briefings, and pre-authored execution logs. All "intelligence" in the
//!   dashboard is this static data — no real agents exist anywhere.
//! - **Playback controller** ([`playback`]): the state machine that walks a
//!   scenario's log step by step on a fixed cadence, pausing at entries
//!   that require a human decision.
//! - **Projectors** ([`layout`], [`display`]): pure functions turning the
//!   current graph into a circular 2D layout and the revealed log into a
//!   styled display list.
//!
//! The crate has no terminal dependencies; `huddle-tui` renders on top.
//!
//! # Example
//!
//! ```
//! use huddle_core::fixtures;
//! use huddle_core::playback::{Phase, PlaybackController};
//!
//! let mut controller = PlaybackController::new();
//! controller.select_scenario(fixtures::load("github").unwrap());
//! controller.enter_setup();
//! controller.complete_setup();
//! assert_eq!(controller.phase(), Phase::Ready);
//!
//! controller.advance();
//! assert_eq!(controller.log_prefix().len(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod display;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod playback;
pub mod scenario;

pub use display::{DisplayEntry, RiskClass, render};
pub use error::FixtureError;
pub use layout::{Edge, FrameSize, Layout, Point, project, project_edges};
pub use playback::{Phase, PlaybackController, STEP_INTERVAL};
pub use scenario::{
    Agent, AgentId, Badge, Certificate, Connection, DecisionOption, Intervention, LogEntry,
    RiskLevel, Scenario, ScenarioIcon, SupervisorBriefing,
};
