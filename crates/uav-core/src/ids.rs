//! Strongly typed vehicle identifier.
//!
//! The inner integer is `pub` so the id can index the vehicle `Vec` directly,
//! but callers should prefer [`UavId::index`].

use std::fmt;

/// Index of a vehicle in the simulation.  Stable for the vehicle's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UavId(pub u32);

impl UavId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UAV#{}", self.0)
    }
}

impl From<UavId> for usize {
    #[inline(always)]
    fn from(id: UavId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for UavId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<UavId, Self::Error> {
        u32::try_from(n).map(UavId)
    }
}
