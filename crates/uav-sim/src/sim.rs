//! The `Sim` struct and its tick loop.

use std::path::Path;

use tracing::{debug, info};

use uav_command::{Command, CommandBacklog, load_commands};
use uav_core::{SimClock, SimConfig, Tick, load_config};
use uav_nav::Uav;

use crate::{SimBuilder, SimError, SimObserver, SimResult, TrajectoryRecord};

/// The main simulation runner.
///
/// Owns every vehicle and the pending command backlog for the whole run.
/// The loop runs once: after [`run`](Self::run) returns, the clock sits at
/// the time limit and further calls do nothing.
///
/// Create via [`SimBuilder`] or [`Sim::from_files`].
pub struct Sim {
    /// Run parameters (time limit, tick size, vehicle template).
    pub config: SimConfig,

    /// Simulation clock; tracks the current tick.
    pub clock: SimClock,

    pub(crate) uavs: Vec<Uav>,

    pub(crate) backlog: CommandBacklog,

    /// Most recent command handed to a vehicle; `None` before the first.
    pub(crate) last_dispatched: Option<Command>,
}

impl Sim {
    /// Load the configuration and the command file, then build the sim.
    pub fn from_files(config_path: &Path, commands_path: &Path) -> SimResult<Sim> {
        let config = load_config(config_path)?;
        let backlog = load_commands(commands_path)?;
        SimBuilder::new(config).commands(backlog).build()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation until the time limit.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            uavs = self.uavs.len(),
            commands = self.backlog.len(),
            time_limit = self.config.time_limit,
            dt = self.config.dt,
            "simulation starting"
        );
        while !self.is_finished() {
            self.process_tick(observer)?;
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(ticks = self.clock.current_tick.0, "simulation complete");
        Ok(())
    }

    /// Run at most `n` ticks from the current position, stopping early at
    /// the time limit.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_finished() {
                break;
            }
            self.process_tick(observer)?;
            self.clock.advance();
        }
        Ok(())
    }

    /// Whether the current tick's time has reached the time limit.
    pub fn is_finished(&self) -> bool {
        self.clock.now_secs() >= self.config.time_limit
    }

    /// Vehicles in id order.
    pub fn uavs(&self) -> &[Uav] {
        &self.uavs
    }

    /// Commands not yet dispatched.
    pub fn backlog(&self) -> &CommandBacklog {
        &self.backlog
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let tick = self.clock.current_tick;
        let now = self.clock.now_secs();
        observer.on_tick_start(tick, now);

        let dispatched = self.dispatch_due(tick, now, observer)?;

        for uav in &mut self.uavs {
            uav.flight_step();
            observer.on_record(&TrajectoryRecord {
                uav:         uav.id(),
                tick,
                time:        now,
                position:    uav.position(),
                heading_deg: uav.heading_degrees(),
            });
        }

        observer.on_tick_end(tick, dispatched);
        Ok(())
    }

    /// Hand every command due at `now` to its vehicle, in ascending time.
    fn dispatch_due<O: SimObserver>(
        &mut self,
        tick:     Tick,
        now:      f64,
        observer: &mut O,
    ) -> SimResult<usize> {
        let mut dispatched = 0;
        while let Some(command) = self.backlog.pop_due(now) {
            if self.last_dispatched.as_ref() == Some(&command) {
                debug!(%tick, %command, "skipping repeated command");
                observer.on_duplicate_command(tick, &command);
                continue;
            }

            let count = self.uavs.len();
            let uav = self.uavs.get_mut(command.uav.index()).ok_or(SimError::UnknownVehicle {
                uav:  command.uav,
                time: command.time,
                count,
            })?;
            debug!(%tick, %command, "dispatching command");
            uav.accept_command(&command);
            observer.on_command(tick, &command);

            self.last_dispatched = Some(command);
            dispatched += 1;
        }
        Ok(dispatched)
    }
}
