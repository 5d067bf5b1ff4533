//! Plain data row written by output backends.

use serde::Serialize;
use uav_sim::TrajectoryRecord;

/// One vehicle's pose at one tick.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryRow {
    pub uav_id:      u32,
    /// Simulated seconds at the start of the tick.
    pub time:        f64,
    pub x:           f64,
    pub y:           f64,
    pub heading_deg: f64,
}

impl TrajectoryRow {
    pub const HEADERS: [&'static str; 5] = ["uav_id", "time", "x", "y", "heading_deg"];
}

impl From<&TrajectoryRecord> for TrajectoryRow {
    fn from(record: &TrajectoryRecord) -> Self {
        Self {
            uav_id:      record.uav.0,
            time:        record.time,
            x:           record.position.x,
            y:           record.position.y,
            heading_deg: record.heading_deg,
        }
    }
}
