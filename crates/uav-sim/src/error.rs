use thiserror::Error;
use uav_command::CommandError;
use uav_core::{CoreError, UavId};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("command loading error: {0}")]
    Commands(#[from] CommandError),

    #[error("command due at {time} targets {uav}, but only {count} vehicle(s) exist")]
    UnknownVehicle {
        uav:   UavId,
        time:  f64,
        count: usize,
    },

    #[error("vehicle count {0} exceeds the id range")]
    TooManyVehicles(usize),
}

pub type SimResult<T> = Result<T, SimError>;
