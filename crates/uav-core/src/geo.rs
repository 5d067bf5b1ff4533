//! Planar vector type and the scalar geometry used by the navigation logic.
//!
//! All angles handed to these helpers are radians unless the function name
//! says otherwise.  [`signed_angle_degrees`] is the one place that works in
//! degrees, because the turn-direction rule is expressed in degrees.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

/// A 2D point or direction in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// The +x axis, reference direction for absolute bearings.
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `radians`.
    #[inline]
    pub fn from_heading(radians: f64) -> Self {
        Self { x: radians.cos(), y: radians.sin() }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `|a - b| < epsilon`.
#[inline]
pub fn epsilon_equals(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (b - a).length()
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Angle from `from` to `to`, in degrees, normalized into `[0, 360)`.
///
/// Computed as `atan2(cross, dot)`, so 90 means `to` lies a quarter turn
/// counter-clockwise of `from` and 270 a quarter turn clockwise.
pub fn signed_angle_degrees(from: Vec2, to: Vec2) -> f64 {
    let cross = from.x * to.y - to.x * from.y;
    let degrees = cross.atan2(dot(from, to)).to_degrees();
    let wrapped = if degrees < 0.0 { degrees % 360.0 + 360.0 } else { degrees % 360.0 };
    // A tiny negative input rounds up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Cosine of the angle between `a` and `b`.
///
/// Both vectors must have non-zero length; the result is NaN otherwise.
#[inline]
pub fn normalized_dot(a: Vec2, b: Vec2) -> f64 {
    let magnitudes = a.length() * b.length();
    (a.x * b.x) / magnitudes + (a.y * b.y) / magnitudes
}

/// Wrap any finite angle into `[0, 2π)`.
#[inline]
pub fn wrap_radians(radians: f64) -> f64 {
    let wrapped = radians - TAU * (radians / TAU).floor();
    if wrapped >= TAU { 0.0 } else { wrapped }
}
