//! Line Rasterizer
//!
//! Walks a line with the Cartesian Stepper, converts every waypoint to
//! string lengths, and emits commands until the commanded lengths are
//! within one length step of each waypoint.

use std::iter::FusedIterator;

use polarplot_core::error::ConfigError;
use polarplot_core::{lengths_from_point, LengthPair, Point, SpoolGeometry, StepCommand};
use tracing::{debug, info};

use crate::config::RasterConfig;
use crate::state::RasterizerState;
use crate::stepper::CartesianStepper;

/// Lazy command stream for one straight line
#[derive(Debug, Clone)]
pub struct LineRasterizer {
    geometry: SpoolGeometry,
    len_step: f64,
    waypoints: CartesianStepper,
    state: Option<RasterizerState>,
    target: Option<LengthPair>,
}

impl LineRasterizer {
    /// Create a rasterizer that adopts the first waypoint as its state
    pub fn new(start: Point, end: Point, config: &RasterConfig) -> Result<Self, ConfigError> {
        Self::with_state(start, end, config, None)
    }

    /// Create a rasterizer continuing from an existing state
    ///
    /// With `Some(state)` the first waypoint is chased like any other
    /// instead of being adopted.
    pub fn with_state(
        start: Point,
        end: Point,
        config: &RasterConfig,
        state: Option<RasterizerState>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let waypoints = CartesianStepper::new(start, end, config.cart_step)?;
        Ok(Self {
            geometry: config.geometry()?,
            len_step: config.len_step,
            waypoints,
            state,
            target: None,
        })
    }

    pub(crate) fn unchecked(
        start: Point,
        end: Point,
        geometry: SpoolGeometry,
        len_step: f64,
        cart_step: f64,
        state: Option<RasterizerState>,
    ) -> Self {
        Self {
            geometry,
            len_step,
            waypoints: CartesianStepper::unchecked(start, end, cart_step),
            state,
            target: None,
        }
    }

    /// State after the commands produced so far; `None` before the first waypoint
    pub fn state(&self) -> Option<RasterizerState> {
        self.state
    }
}

impl Iterator for LineRasterizer {
    type Item = StepCommand;

    fn next(&mut self) -> Option<StepCommand> {
        loop {
            if let (Some(state), Some(target)) = (self.state, self.target) {
                if let Some((command, next)) = state.advance(target, self.len_step) {
                    self.state = Some(next);
                    return Some(command);
                }
            }

            let point = self.waypoints.next()?;
            let lengths = lengths_from_point(self.geometry, point);
            if self.state.is_none() {
                debug!(%point, %lengths, "Adopting first waypoint");
                self.state = Some(RasterizerState::new(lengths));
            }
            self.target = Some(lengths);
        }
    }
}

impl FusedIterator for LineRasterizer {}

/// Commands drawing a straight line from `start` towards `end`
///
/// Fails before producing anything if the configuration or endpoints are
/// invalid. The end point itself is not chased; see [`crate::rasterize_path`]
/// with [`crate::SeamMode::Carried`] for that.
pub fn rasterize_line(
    start: Point,
    end: Point,
    config: &RasterConfig,
) -> Result<LineRasterizer, ConfigError> {
    let line = LineRasterizer::new(start, end, config)?;
    let lengths = lengths_from_point(config.geometry()?, start);
    info!(
        len_step = config.len_step,
        left = lengths.left,
        right = lengths.right,
        "Rasterizing line {} -> {}",
        start,
        end
    );
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polarplot_core::Direction::*;

    #[test]
    fn test_horizontal_line_commands() {
        let config = RasterConfig::default();
        let commands: Vec<StepCommand> =
            rasterize_line(Point::new(100.0, 200.0), Point::new(200.0, 200.0), &config)
                .unwrap()
                .collect();

        assert!(!commands.is_empty());
        // Moving right pays out the left string and reels in the right one.
        assert!(commands.iter().all(|c| c.left != Shorten && c.right != Lengthen));
        assert!(commands.iter().all(|c| !c.is_idle()));
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        let config = RasterConfig::default();
        let mut line =
            rasterize_line(Point::new(50.0, 50.0), Point::new(50.0, 50.0), &config).unwrap();
        assert_eq!(line.next(), None);
        assert!(line.state().is_none());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = RasterConfig::default().with_len_step(0.0);
        assert!(rasterize_line(Point::new(0.0, 10.0), Point::new(10.0, 10.0), &config).is_err());

        let config = RasterConfig::default().with_cart_step(-2.0);
        assert!(rasterize_line(Point::new(0.0, 10.0), Point::new(10.0, 10.0), &config).is_err());
    }

    #[test]
    fn test_state_tracks_last_waypoint() {
        let config = RasterConfig::default();
        let mut line =
            rasterize_line(Point::new(100.0, 100.0), Point::new(100.0, 150.0), &config).unwrap();
        line.by_ref().for_each(drop);

        let last_waypoint = lengths_from_point(config.geometry().unwrap(), Point::new(100.0, 149.0));
        let state = line.state().unwrap();
        assert!(state.lengths().max_deviation(&last_waypoint) <= config.len_step);
    }

    #[test]
    fn test_seeded_state_chases_first_waypoint() {
        let config = RasterConfig::default();
        let start = Point::new(100.0, 100.0);
        let geometry = config.geometry().unwrap();
        let behind = lengths_from_point(geometry, Point::new(100.0, 95.0));

        let end = Point::new(100.0, 101.5);

        let seeded: Vec<StepCommand> =
            LineRasterizer::with_state(start, end, &config, Some(RasterizerState::new(behind)))
                .unwrap()
                .collect();
        let fresh: Vec<StepCommand> = LineRasterizer::new(start, end, &config)
            .unwrap()
            .collect();

        // The seeded run first has to cover the 5 units between y=95 and y=100.
        assert!(!fresh.is_empty());
        assert!(seeded.len() > fresh.len() + 20);
    }
}
