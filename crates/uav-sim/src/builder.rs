//! Fluent builder for constructing a [`Sim`].

use uav_command::CommandBacklog;
use uav_core::{SimConfig, UavId};
use uav_nav::Uav;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: time limit, tick size, vehicle count and template pose
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default           |
/// |-----------------|-------------------|
/// | `.commands(b)`  | Empty backlog     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .commands(load_commands(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    backlog: Option<CommandBacklog>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, backlog: None }
    }

    /// Supply the command backlog.
    pub fn commands(mut self, backlog: CommandBacklog) -> Self {
        self.backlog = Some(backlog);
        self
    }

    /// Validate inputs, create the vehicles, and return a ready-to-run
    /// [`Sim`].
    ///
    /// Fails if the configuration is out of range or any command targets a
    /// vehicle that does not exist.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let count = self.config.uav_count;
        let backlog = self.backlog.unwrap_or_default();

        if let Some(bad) = backlog.iter().find(|c| c.uav.index() >= count) {
            return Err(SimError::UnknownVehicle { uav: bad.uav, time: bad.time, count });
        }

        let uavs = (0..count)
            .map(|i| {
                let id = UavId::try_from(i).map_err(|_| SimError::TooManyVehicles(count))?;
                Ok(Uav::from_config(id, &self.config))
            })
            .collect::<SimResult<Vec<Uav>>>()?;

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            uavs,
            backlog,
            last_dispatched: None,
        })
    }
}
