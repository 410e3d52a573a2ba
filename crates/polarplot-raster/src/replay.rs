//! Command replay
//!
//! Runs a command stream back through the kinematics to recover where the
//! pen went. Useful for previewing transcripts and for checking rasterizer
//! output against the geometry it was meant to draw.

use polarplot_core::error::{ensure_finite, ConfigError};
use polarplot_core::{
    point_from_lengths, Direction, KinematicsError, LengthPair, Point, SpoolGeometry, StepCommand,
    TautStringPolicy,
};
use tracing::trace;

use crate::config::RasterConfig;
use crate::state::RasterizerState;

/// Simulated plotter driven by step commands
#[derive(Debug, Clone)]
pub struct Replayer {
    geometry: SpoolGeometry,
    len_step: f64,
    policy: TautStringPolicy,
    state: RasterizerState,
    pen_down: bool,
    steps: usize,
}

impl Replayer {
    /// Start from known string lengths with the pen up
    pub fn new(start: LengthPair, config: &RasterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        ensure_finite("start_left", start.left)?;
        ensure_finite("start_right", start.right)?;
        Ok(Self {
            geometry: config.geometry()?,
            len_step: config.len_step,
            policy: config.taut_policy,
            state: RasterizerState::new(start),
            pen_down: false,
            steps: 0,
        })
    }

    /// Current string lengths
    pub fn lengths(&self) -> LengthPair {
        self.state.lengths()
    }

    /// Whether the pen is on the paper
    pub fn pen_down(&self) -> bool {
        self.pen_down
    }

    /// Commands applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current pen position
    pub fn position(&self) -> Result<Point, KinematicsError> {
        point_from_lengths(self.geometry, self.state.lengths(), self.policy)
    }

    /// Apply one command; returns the pen position when the pen is down
    pub fn apply(&mut self, command: StepCommand) -> Result<Option<Point>, KinematicsError> {
        self.state = self.state.apply(command, self.len_step);
        self.steps += 1;
        match command.pen {
            Direction::Lengthen => self.pen_down = true,
            Direction::Shorten => self.pen_down = false,
            Direction::Hold => {}
        }

        if !self.pen_down {
            return Ok(None);
        }
        let point = self.position()?;
        trace!(step = self.steps, %point, "Pen at");
        Ok(Some(point))
    }

    /// Replay a stream, collecting drawn points without consecutive repeats
    pub fn trace<I>(&mut self, commands: I) -> Result<Vec<Point>, KinematicsError>
    where
        I: IntoIterator<Item = StepCommand>,
    {
        let mut points: Vec<Point> = Vec::new();
        for command in commands {
            if let Some(point) = self.apply(command)? {
                if points.last() != Some(&point) {
                    points.push(point);
                }
            }
        }
        Ok(points)
    }
}
