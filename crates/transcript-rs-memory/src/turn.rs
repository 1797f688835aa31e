//! Turn identifier tracking.

use log::debug;
use uuid::Uuid;

/// Holds the identifier of the currently active turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnTracker {
    current: Option<String>,
}

impl TurnTracker {
    /// Tracker with no active turn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker restored from a persisted turn id.
    pub fn with_turn_id(current: Option<String>) -> Self {
        Self { current }
    }

    /// Start a new turn, replacing the current id, and return it.
    pub fn initialize_turn(&mut self) -> &str {
        let turn_id = Uuid::new_v4().to_string();
        debug!("initialized turn (turn_id={turn_id})");
        self.current.insert(turn_id)
    }

    /// Current turn id, if a turn was ever initialized.
    pub fn get_current_turn_id(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
