//! Plane and spool data model
//!
//! Positions are measured from the left anchor: x grows towards the right
//! anchor, y grows downwards away from the anchor line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_finite, ensure_positive, ConfigError};

/// Default distance between the anchors, in length units
pub const DEFAULT_SPOOL_DISTANCE: f64 = 400.0;

/// A position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left anchor
    pub x: f64,
    /// Vertical offset below the anchor line
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Ensure both coordinates are finite
    pub fn validated(self) -> Result<Self, ConfigError> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        Ok(self)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// The two string lengths that place the tool at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthPair {
    /// Length of the string on the left spool
    pub left: f64,
    /// Length of the string on the right spool
    pub right: f64,
}

impl LengthPair {
    /// Create a new length pair
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Largest per-spool difference from another pair
    pub fn max_deviation(&self, other: &LengthPair) -> f64 {
        (self.left - other.left)
            .abs()
            .max((self.right - other.right).abs())
    }
}

impl fmt::Display for LengthPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L={:.6} R={:.6}", self.left, self.right)
    }
}

/// Fixed separation between the two anchors
///
/// Always strictly positive and finite; construct through [`SpoolGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SpoolGeometry(f64);

impl SpoolGeometry {
    /// Create a geometry, rejecting non-positive distances
    pub fn new(spool_distance: f64) -> Result<Self, ConfigError> {
        ensure_positive("spool_distance", spool_distance).map(Self)
    }

    /// Distance between the anchors
    pub fn spool_distance(&self) -> f64 {
        self.0
    }
}

impl Default for SpoolGeometry {
    fn default() -> Self {
        Self(DEFAULT_SPOOL_DISTANCE)
    }
}

impl TryFrom<f64> for SpoolGeometry {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpoolGeometry> for f64 {
    fn from(geometry: SpoolGeometry) -> Self {
        geometry.0
    }
}
