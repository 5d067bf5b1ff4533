//! `uav-sim`: time-stepping orchestrator for the UAV flight simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0.. while tick · dt < time_limit:
//!   ① Dispatch: pop every backlog command due at tick · dt (ascending time);
//!                skip one that exactly repeats the previous dispatch;
//!                hand the rest to the target vehicle's accept_command.
//!   ② Fly:      for each vehicle in id order: flight_step, then emit one
//!                TrajectoryRecord to the observer.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uav_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::from_files(Path::new("SimParams.ini"), Path::new("SimCmds.txt"))?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TrajectoryRecord};
pub use sim::Sim;
