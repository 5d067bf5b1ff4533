//! The `Command` record.

use std::cmp::Ordering;
use std::fmt;

use uav_core::{UavId, Vec2};

/// "Fly to `target`", addressed to one vehicle and due at `time`.
///
/// Equality compares every field exactly.  It is only used to drop a command
/// that repeats the one dispatched immediately before it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    pub target: Vec2,
    /// Simulated seconds at which the command becomes due.
    pub time:   f64,
    pub uav:    UavId,
}

impl Command {
    #[inline]
    pub fn new(x: f64, y: f64, time: f64, uav: UavId) -> Self {
        Self { target: Vec2::new(x, y), time, uav }
    }

    /// Storage order of the backlog: later commands first.
    ///
    /// Sorting by this key leaves the earliest-due command at the end of the
    /// `Vec`, where `pop` removes it in O(1).
    #[inline]
    pub fn storage_order(&self, other: &Command) -> Ordering {
        other.time.total_cmp(&self.time)
    }

    /// Whether the command is due at simulated time `now_secs`.
    #[inline]
    pub fn is_due(&self, now_secs: f64) -> bool {
        self.time <= now_secs
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Command time: {} x,y: {},{} for {}",
            self.time, self.target.x, self.target.y, self.uav
        )
    }
}
