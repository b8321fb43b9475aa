//! Narration task lifecycle.
//!
//! Narration runs on a spawned task and reports back through an mpsc
//! channel; the cast result never waits on it, and a narration failure never
//! invalidates a resolved hexagram.

use hexcast_types::CastId;

/// Presentation state of the narration request for the current cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationState {
    /// No narration capability was configured at startup.
    Disabled,
    /// Capability present, nothing requested yet.
    Idle,
    /// A request for the current cast is in flight.
    Loading,
    /// Narration text for the current cast.
    Ready(String),
    /// The request failed; the cast result stands.
    Failed(String),
}

impl NarrationState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, NarrationState::Loading)
    }
}

/// Completion message sent by a narration task.
///
/// Tagged with the cast it belongs to so a result that arrives after the
/// user has already cast again is discarded instead of mislabeled.
#[derive(Debug)]
pub struct NarrationEvent {
    pub cast_id: CastId,
    pub result: Result<String, String>,
}
