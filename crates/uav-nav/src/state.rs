//! Discrete navigation state of a vehicle.

use std::fmt;

/// Where a vehicle is in its approach to the current destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavState {
    /// Flying straight with no destination.  Initial state.
    #[default]
    Cruise,
    /// A command arrived; waiting until a turn toward it is geometrically
    /// possible.
    PrepTurn,
    /// Turning until the heading points along the tangent to the destination
    /// circle.
    Turn,
    /// On the tangent line, flying straight toward the tangent point.
    HasDest,
    /// Orbiting the destination.  Only a new command leaves this state.
    Rotate,
}

impl NavState {
    /// Whether a `from → to` transition taken during a tick must be followed
    /// by an arrival check before that tick's position update.
    ///
    /// Starting a turn can already put the vehicle at the tangent point of a
    /// destination close to its previous track.
    #[inline]
    pub fn rechecks_arrival_on(from: NavState, to: NavState) -> bool {
        matches!((from, to), (NavState::PrepTurn, NavState::Turn))
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NavState::Cruise   => "cruise",
            NavState::PrepTurn => "prep_turn",
            NavState::Turn     => "turn",
            NavState::HasDest  => "has_dest",
            NavState::Rotate   => "rotate",
        };
        f.write_str(s)
    }
}
