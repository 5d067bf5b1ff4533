//! `uav-nav`: per-vehicle navigation state machine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`state`] | `NavState` and its transition rules                          |
//! | [`uav`]   | `Uav`: pose, heading control, turn geometry, tangent arrival |
//!
//! # Flight model
//!
//! Vehicles fly at constant speed and can only change heading at the fixed
//! angular rate `ω = V / R`.  A waypoint command does not steer the vehicle
//! *onto* the point; it steers it onto a line tangent to a circle of radius
//! `R` around the point, and once the vehicle passes the tangent point it
//! orbits the waypoint clockwise until the next command.
//!
//! ```text
//!            command
//!   CRUISE ──────────► PREP_TURN ──feasible──► TURN ──on tangent──► HAS_DEST
//!                          │                                           │
//!                          └────────────── tangent point ──────────────┴──► ROTATE
//! ```
//!
//! Every tick, after the state logic has (possibly) changed the heading, the
//! position advances by `dt · V` along the heading, in every state.

pub mod state;
pub mod uav;


pub use state::NavState;
pub use uav::{ARRIVAL_RADIUS_FACTOR, ORBIT_CLOCKWISE, Uav};
