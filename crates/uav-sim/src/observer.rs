//! Simulation observer trait and the per-vehicle output record.

use uav_command::Command;
use uav_core::{Tick, UavId, Vec2};

/// One vehicle's state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub uav:         UavId,
    pub tick:        Tick,
    /// Simulated seconds at the start of the tick.
    pub time:        f64,
    pub position:    Vec2,
    pub heading_deg: f64,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any dispatch.
    fn on_tick_start(&mut self, _tick: Tick, _time: f64) {}

    /// Called for each command handed to a vehicle.
    fn on_command(&mut self, _tick: Tick, _command: &Command) {}

    /// Called for a command dropped because it repeats the previous dispatch.
    fn on_duplicate_command(&mut self, _tick: Tick, _command: &Command) {}

    /// Called once per vehicle per tick, in vehicle id order, after the
    /// vehicle has moved.
    fn on_record(&mut self, _record: &TrajectoryRecord) {}

    /// Called at the end of each tick.  `dispatched` counts commands handed
    /// to vehicles this tick.
    fn on_tick_end(&mut self, _tick: Tick, _dispatched: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
