//! Circle Rasterizer
//!
//! Samples a circle into a polygon and draws it as a path. Sampling starts
//! one step past angle zero and stops at a full turn, so the first sample
//! only seeds the lengths and the edge back to it is never drawn.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use polarplot_core::error::{ensure_finite, ConfigError};
use polarplot_core::{lengths_from_point, Point};
use tracing::info;

use crate::config::RasterConfig;
use crate::path::PathRasterizer;

/// Angularly equal samples around a circle
#[derive(Debug, Clone)]
pub struct CircleSampler {
    center: Point,
    radius: f64,
    segments: usize,
    t: usize,
}

impl CircleSampler {
    /// Samples for `t` in `1..=segments`
    pub fn new(center: Point, radius: f64, segments: usize) -> Result<Self, ConfigError> {
        let center = center.validated()?;
        let radius = ensure_finite("radius", radius)?;
        if segments == 0 {
            return Err(ConfigError::NonPositive {
                name: "segments",
                value: 0.0,
            });
        }
        Ok(Self {
            center,
            radius,
            segments,
            t: 1,
        })
    }

    /// Sample at parameter `t`
    pub fn sample(&self, t: usize) -> Point {
        let angle = TAU * t as f64 / self.segments as f64;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

impl Iterator for CircleSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.t > self.segments {
            return None;
        }
        let point = self.sample(self.t);
        self.t += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.segments + 1).saturating_sub(self.t);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CircleSampler {}

impl FusedIterator for CircleSampler {}

/// Lazy command stream for a circle
pub type CircleRasterizer = PathRasterizer<CircleSampler>;

/// Commands drawing a circle of `radius` around `center`
///
/// Uses `config.segments` samples, giving `segments - 1` drawn edges.
pub fn rasterize_circle(
    center: Point,
    radius: f64,
    config: &RasterConfig,
) -> Result<CircleRasterizer, ConfigError> {
    config.validate()?;
    let sampler = CircleSampler::new(center, radius, config.segments)?;
    let seed = sampler.sample(1);
    let circle = PathRasterizer::from_validated(sampler, config)?;

    let lengths = lengths_from_point(config.geometry()?, seed);
    info!(
        len_step = config.len_step,
        left = lengths.left,
        right = lengths.right,
        segments = config.segments,
        "Rasterizing circle r={} around {}",
        radius,
        center
    );
    Ok(circle)
}
