//! Cartesian Stepper
//!
//! Walks a straight line in fixed increments along its driving axis. The
//! range is half-open: the end point itself is never produced, so chained
//! segments do not visit a shared vertex twice.

use std::iter::FusedIterator;

use polarplot_core::error::{ensure_positive, ConfigError};
use polarplot_core::Point;

/// Lazy sequence of evenly spaced points from `start` towards `end`
#[derive(Debug, Clone)]
pub struct CartesianStepper {
    current: Point,
    end: Point,
    step: f64,
    inc_x: f64,
    inc_y: f64,
    x_drives: bool,
    finished: bool,
}

impl CartesianStepper {
    /// Create a stepper; fails on non-finite endpoints or a non-positive step
    pub fn new(start: Point, end: Point, step: f64) -> Result<Self, ConfigError> {
        let start = start.validated()?;
        let end = end.validated()?;
        let step = ensure_positive("cart_step", step)?;
        Ok(Self::unchecked(start, end, step))
    }

    /// Build from inputs the caller has already validated
    pub(crate) fn unchecked(start: Point, end: Point, step: f64) -> Self {
        // Halved so that endpoints near f64::MAX cannot overflow the delta.
        let dx = end.x * 0.5 - start.x * 0.5;
        let dy = end.y * 0.5 - start.y * 0.5;
        let (inc_x, inc_y) = if dx == 0.0 && dy == 0.0 {
            (0.0, 0.0)
        } else if dx.abs() >= dy.abs() {
            (step.copysign(dx), (step * (dy / dx).abs()).copysign(dy))
        } else {
            ((step * (dx / dy).abs()).copysign(dx), step.copysign(dy))
        };

        Self {
            current: start,
            end,
            step,
            inc_x,
            inc_y,
            x_drives: dx.abs() >= dy.abs(),
            finished: false,
        }
    }

    /// Per-waypoint increment as `(dx, dy)`
    pub fn increment(&self) -> (f64, f64) {
        (self.inc_x, self.inc_y)
    }

    fn within_one_step(&self) -> bool {
        (self.end.x - self.current.x).abs() < self.step
            && (self.end.y - self.current.y).abs() < self.step
    }
}

/// Advance one coordinate; `None` when the increment is below the precision
/// available at this magnitude.
fn advance(value: f64, increment: f64) -> Option<f64> {
    let next = value + increment;
    if increment != 0.0 && next == value {
        None
    } else {
        Some(next)
    }
}

impl Iterator for CartesianStepper {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.finished {
            return None;
        }
        if self.within_one_step() {
            self.finished = true;
            return None;
        }

        let point = self.current;
        let (x, y) = (advance(point.x, self.inc_x), advance(point.y, self.inc_y));
        let driving = if self.x_drives { x } else { y };
        // Once the driving axis stalls no further waypoint is representable.
        self.current = match driving {
            Some(_) => Point::new(x.unwrap_or(self.end.x), y.unwrap_or(self.end.y)),
            None => self.end,
        };
        Some(point)
    }
}

impl FusedIterator for CartesianStepper {}

/// Waypoints from `start` towards (excluding) `end`
pub fn trace_path(start: Point, end: Point, step: f64) -> Result<CartesianStepper, ConfigError> {
    CartesianStepper::new(start, end, step)
}
