//! The `Uav` navigation state machine.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use tracing::{debug, info, warn};

use uav_command::Command;
use uav_core::geo::{self, Vec2};
use uav_core::{SimConfig, UavId};

use crate::NavState;

/// Arrival checks only run once the vehicle is closer to its destination
/// than `(ARRIVAL_RADIUS_FACTOR + dt) · R`.
pub const ARRIVAL_RADIUS_FACTOR: f64 = 1.4;

/// Orbit direction entered on arrival, whatever direction the approach used.
pub const ORBIT_CLOCKWISE: bool = true;

/// One simulated vehicle.
///
/// Speed, turn radius, angular speed, and tick size are fixed at
/// construction.  The heading is kept in `[0, 2π)` after every update.
#[derive(Clone, Debug)]
pub struct Uav {
    id:          UavId,
    position:    Vec2,
    /// Radians, counter-clockwise from +x.
    heading:     f64,
    destination: Vec2,
    speed:       f64,
    turn_radius: f64,
    omega:       f64,
    dt:          f64,
    clockwise:   bool,
    state:       NavState,
    /// Set while a TURN has no tangent solution; limits the warning to once
    /// per episode.
    tangent_lost: bool,
}

impl Uav {
    pub fn new(
        id:          UavId,
        position:    Vec2,
        heading_rad: f64,
        speed:       f64,
        turn_radius: f64,
        dt:          f64,
    ) -> Self {
        let omega = speed / turn_radius;
        Self::with_angular_speed(id, position, heading_rad, speed, turn_radius, omega, dt)
    }

    /// A vehicle at the configured start pose, turning at the run's shared
    /// [`SimConfig::angular_speed`].
    pub fn from_config(id: UavId, config: &SimConfig) -> Self {
        Self::with_angular_speed(
            id,
            config.start,
            config.heading_rad,
            config.speed,
            config.turn_radius,
            config.angular_speed(),
            config.dt,
        )
    }

    fn with_angular_speed(
        id:          UavId,
        position:    Vec2,
        heading_rad: f64,
        speed:       f64,
        turn_radius: f64,
        omega:       f64,
        dt:          f64,
    ) -> Self {
        Self {
            id,
            position,
            heading: geo::wrap_radians(heading_rad),
            destination: Vec2::ZERO,
            speed,
            turn_radius,
            omega,
            dt,
            clockwise: false,
            state: NavState::Cruise,
            tangent_lost: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> UavId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Heading in radians, in `[0, 2π)`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn heading_degrees(&self) -> f64 {
        self.heading.to_degrees()
    }

    #[inline]
    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn turn_radius(&self) -> f64 {
        self.turn_radius
    }

    #[inline]
    pub fn angular_speed(&self) -> f64 {
        self.omega
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Take a new destination, whatever the current state.
    ///
    /// The turn direction is clockwise when the angle from the heading to the
    /// destination, minus the heading itself (both in degrees), exceeds 180.
    pub fn accept_command(&mut self, command: &Command) {
        self.destination = command.target;
        self.state = NavState::PrepTurn;
        self.tangent_lost = false;

        let relative_deg = geo::signed_angle_degrees(
            Vec2::from_heading(self.heading),
            self.destination - self.position,
        );
        self.clockwise = relative_deg - self.heading_degrees() > 180.0;

        debug!(
            uav = %self.id,
            destination = %self.destination,
            clockwise = self.clockwise,
            "command accepted"
        );
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one tick: run the state logic, then move along the heading.
    pub fn flight_step(&mut self) {
        let entered = self.state;
        match self.state {
            NavState::Cruise   => {}
            NavState::PrepTurn => self.prepare_turn(),
            NavState::HasDest  => self.confirm_arrival(),
            NavState::Turn     => self.turn_logic(),
            NavState::Rotate   => self.apply_angle_change(),
        }
        if NavState::rechecks_arrival_on(entered, self.state) {
            self.confirm_arrival();
        }

        self.position = self.position + Vec2::from_heading(self.heading) * (self.dt * self.speed);
    }

    /// Whether turning now can still bring the vehicle onto a tangent of the
    /// destination.
    ///
    /// Always true at `2R` or more.  Closer in, the destination is tested
    /// against the circle the vehicle would trace if it began turning this
    /// tick: the squared center-to-destination distance is compared with the
    /// unsquared radius.
    pub fn turn_is_possible(&self) -> bool {
        if geo::distance(self.destination, self.position) >= 2.0 * self.turn_radius {
            return true;
        }
        let side = if self.clockwise { -FRAC_PI_2 } else { FRAC_PI_2 };
        let center = self.position + Vec2::from_heading(side + self.heading) * self.turn_radius;
        (self.destination - center).length_squared() >= self.turn_radius
    }

    /// Heading (radians) of the tangent line from the current position to the
    /// circle of radius `R` around the destination.
    ///
    /// `None` when the vehicle is inside that circle (`R > d`), where no
    /// tangent exists.  The result is not wrapped into `[0, 2π)`.
    pub fn tangent_heading(&self) -> Option<f64> {
        let to_dest = self.destination - self.position;
        let ratio = self.turn_radius / to_dest.length();
        if ratio.is_nan() || ratio > 1.0 {
            return None;
        }
        // Law of sines with the right angle at the tangent point.
        let bearing = geo::signed_angle_degrees(Vec2::UNIT_X, to_dest).to_radians();
        Some(bearing + ratio.asin())
    }

    // ── State logic ───────────────────────────────────────────────────────

    fn prepare_turn(&mut self) {
        // The new destination may already be tangent to the current track.
        self.confirm_arrival();
        if self.state != NavState::Rotate && self.turn_is_possible() {
            self.state = NavState::Turn;
        }
    }

    /// Enter ROTATE at the tangent point: heading perpendicular to the
    /// destination and the next position farther away than this one.
    fn confirm_arrival(&mut self) {
        let to_dest = self.destination - self.position;
        let current = to_dest.length();
        if current >= (ARRIVAL_RADIUS_FACTOR + self.dt) * self.turn_radius {
            return;
        }

        let next_heading = if self.state == NavState::Turn {
            self.stepped_heading()
        } else {
            self.heading
        };
        let next_position =
            self.position + Vec2::from_heading(next_heading) * (self.dt * self.speed);

        let perpendicular = current > 0.0
            && geo::epsilon_equals(
                geo::normalized_dot(Vec2::from_heading(self.heading), to_dest),
                0.0,
                self.heading_tolerance(),
            );

        if perpendicular && current < geo::distance(next_position, self.destination) {
            self.state = NavState::Rotate;
            self.clockwise = ORBIT_CLOCKWISE;
            info!(
                uav = %self.id,
                position = %self.position,
                destination = %self.destination,
                "arrived at tangent point, orbiting"
            );
        }
    }

    fn turn_logic(&mut self) {
        match self.tangent_heading() {
            Some(target) => {
                self.tangent_lost = false;
                if (self.heading - target).abs() <= self.heading_tolerance() {
                    self.state = NavState::HasDest;
                    return;
                }
            }
            None => {
                if !self.tangent_lost {
                    self.tangent_lost = true;
                    warn!(
                        uav = %self.id,
                        distance = geo::distance(self.position, self.destination),
                        turn_radius = self.turn_radius,
                        "destination inside turn circle, no tangent; holding turn"
                    );
                }
            }
        }
        self.apply_angle_change();
    }

    #[inline]
    fn apply_angle_change(&mut self) {
        self.heading = self.stepped_heading();
    }

    /// Heading after one tick of turning in the recorded direction.
    #[inline]
    fn stepped_heading(&self) -> f64 {
        let delta = self.omega * self.dt;
        geo::wrap_radians(if self.clockwise {
            self.heading - delta
        } else {
            self.heading + delta
        })
    }

    /// Heading error accepted as "on target": one tick of turning.
    #[inline]
    fn heading_tolerance(&self) -> f64 {
        self.dt * self.speed / self.turn_radius
    }
}

impl fmt::Display for Uav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UAV number {}: Coordinates (x,y): ({}, {}) Azimuth: {}",
            self.id.0,
            self.position.x,
            self.position.y,
            self.heading_degrees()
        )
    }
}
