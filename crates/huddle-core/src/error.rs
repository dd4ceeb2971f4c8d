//! Error types for the fixture catalog boundary.
//!
//! Playback itself is infallible by design — misuse of the controller is a
//! guarded no-op, unmatched names and dangling edges are tolerated silently.
//! The only fallible surface is looking up a scenario by an id supplied from
//! outside the fixed set (e.g. a `--scenario` CLI flag).

/// Errors raised when resolving fixture data.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The requested scenario id is not in the fixture catalog.
    #[error("unknown scenario: {id} (available: {available})")]
    UnknownScenario {
        /// The id that failed to resolve.
        id: String,
        /// Comma-separated list of valid ids.
        available: String,
    },
}

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
