//! Spool kinematics
//!
//! Converts between a position on the drawing surface and the pair of
//! string lengths that holds the tool there. The left anchor sits at the
//! origin, the right anchor at `(spool_distance, 0)`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::KinematicsError;
use crate::geometry::{LengthPair, Point, SpoolGeometry};

/// Relative slack allowed on the taut check and the y radicand to absorb
/// rounding noise for points lying on the anchor line.
const RADICAND_TOLERANCE: f64 = 1e-9;

/// What to do when the requested strings are too short to meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TautStringPolicy {
    /// Log a warning and carry on with the algebraic solve
    #[default]
    Warn,
    /// Fail immediately with [`KinematicsError::TautString`]
    Reject,
}

/// String lengths for a point
///
/// Total for finite input: both radicands are sums of squares.
pub fn lengths_from_point(geometry: SpoolGeometry, point: Point) -> LengthPair {
    let d = geometry.spool_distance();
    LengthPair {
        left: point.x.hypot(point.y),
        right: (d - point.x).hypot(point.y),
    }
}

/// Point for a pair of string lengths
///
/// Solves the intersection of the two length circles. The solution below
/// the anchor line (positive y) is returned.
pub fn point_from_lengths(
    geometry: SpoolGeometry,
    lengths: LengthPair,
    policy: TautStringPolicy,
) -> Result<Point, KinematicsError> {
    let d = geometry.spool_distance();
    let LengthPair { left, right } = lengths;

    if left + right < d * (1.0 - RADICAND_TOLERANCE) {
        let err = KinematicsError::TautString {
            left,
            right,
            spool_distance: d,
        };
        match policy {
            TautStringPolicy::Reject => return Err(err),
            TautStringPolicy::Warn => warn!("{err}"),
        }
    }

    let x = (d * d + left * left - right * right) / (2.0 * d);
    let radicand = left * left - x * x;
    if radicand < 0.0 {
        if radicand < -RADICAND_TOLERANCE * (left * left).max(1.0) {
            return Err(KinematicsError::Geometry {
                left,
                right,
                radicand,
            });
        }
        return Ok(Point::new(x, 0.0));
    }

    Ok(Point::new(x, radicand.sqrt()))
}
