//! Simulation configuration and its `key=value` loader.
//!
//! # File format
//!
//! ```text
//! # initial pose
//! X0 = 0
//! Y0 = 0
//! Z0 = 100
//! Az = 45        # degrees, stored as radians
//! V0 = 1.0
//! R  = 1.0
//! Dt = 0.1
//! TimeLim = 60
//! N_uav = 3
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.  A line without `=`
//! aborts the load immediately.  An unknown key or a value that does not
//! parse is logged as a warning and the scan continues; if any warning was
//! recorded the whole load is rejected with [`CoreError::ConfigRejected`].

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::warn;

use crate::error::{ConfigWarning, CoreError, CoreResult};
use crate::geo::Vec2;
use crate::time::SimClock;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Immutable parameters of one simulation run.
///
/// Every vehicle starts from the same pose and shares speed, turn radius, and
/// tick size.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Initial position shared by all vehicles.
    pub start: Vec2,
    /// Initial altitude.  Carried for completeness; the flight model is planar.
    pub altitude: f64,
    /// Constant ground speed.  Must be `> 0`.
    pub speed: f64,
    /// Turn-circle radius.  Must be `> 0`.
    pub turn_radius: f64,
    /// Initial heading in radians (loaded from `Az` in degrees).
    pub heading_rad: f64,
    /// The run stops before the first tick whose time reaches this value.
    pub time_limit: f64,
    /// Seconds per tick.  Must be `> 0`.
    pub dt: f64,
    pub uav_count: usize,
}

impl SimConfig {
    /// Angular speed `ω = V0 / R`, identical for every vehicle.
    #[inline]
    pub fn angular_speed(&self) -> f64 {
        self.speed / self.turn_radius
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt)
    }

    /// Check the positivity constraints the flight model relies on.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("Dt", self.dt),
            ("V0", self.speed),
            ("R", self.turn_radius),
            ("TimeLim", self.time_limit),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{key} must be a positive number, got {value}"
                )));
            }
        }
        let finite = [
            ("X0", self.start.x),
            ("Y0", self.start.y),
            ("Z0", self.altitude),
            ("Az", self.heading_rad),
        ];
        for (key, value) in finite {
            if !value.is_finite() {
                return Err(CoreError::Config(format!("{key} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of UAVs: {}", self.uav_count)?;
        writeln!(f, "Turn Radius: {}", self.turn_radius)?;
        writeln!(
            f,
            "Initial Position: ({}, {}, {})",
            self.start.x, self.start.y, self.altitude
        )?;
        writeln!(f, "Velocity: {}", self.speed)?;
        writeln!(f, "Initial Azimuth: {} degrees", self.heading_rad.to_degrees())?;
        writeln!(f, "Simulation Delta: {}", self.dt)?;
        write!(f, "Time Limit: {}", self.time_limit)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Load and validate a [`SimConfig`] from a file.
pub fn load_config(path: &Path) -> CoreResult<SimConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(file)
}

/// Like [`load_config`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_config_reader<R: Read>(reader: R) -> CoreResult<SimConfig> {
    let mut config = SimConfig::default();
    let mut azimuth_deg = 0.0;
    let mut warnings: Vec<ConfigWarning> = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(CoreError::Parse {
                line: line_no,
                msg:  format!("expected `key=value`, got {line:?}"),
            });
        };
        let key = key.trim();
        let value = value.trim();

        let applied = match key {
            "Dt"      => parse_f64(value).map(|v| config.dt = v),
            "N_uav"   => value
                .parse::<usize>()
                .map(|v| config.uav_count = v)
                .map_err(|e| e.to_string()),
            "R"       => parse_f64(value).map(|v| config.turn_radius = v),
            "X0"      => parse_f64(value).map(|v| config.start.x = v),
            "Y0"      => parse_f64(value).map(|v| config.start.y = v),
            "Z0"      => parse_f64(value).map(|v| config.altitude = v),
            "V0"      => parse_f64(value).map(|v| config.speed = v),
            "Az"      => parse_f64(value).map(|v| azimuth_deg = v),
            "TimeLim" => parse_f64(value).map(|v| config.time_limit = v),
            _         => Err("unknown key".to_owned()),
        };

        if let Err(reason) = applied {
            let warning = ConfigWarning { line: line_no, key: key.to_owned(), reason };
            warn!(%warning, "skipping configuration field");
            warnings.push(warning);
        }
    }

    if !warnings.is_empty() {
        return Err(CoreError::ConfigRejected(warnings));
    }

    config.heading_rad = azimuth_deg.to_radians();
    config.validate()?;
    Ok(config)
}

fn parse_f64(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(v) => Err(format!("value {v} is not finite")),
        Err(e) => Err(format!("invalid number {value:?}: {e}")),
    }
}
