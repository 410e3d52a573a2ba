//! Rasterizer configuration
//!
//! In-memory settings shared by every rasterization run. Nothing here is
//! read from disk; callers (the CLI, tests) build it directly.

use polarplot_core::error::{ensure_positive, ConfigError};
use polarplot_core::{SpoolGeometry, TautStringPolicy, DEFAULT_SPOOL_DISTANCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default length increment per emitted command
pub const DEFAULT_LEN_STEP: f64 = 0.1;

/// Default Cartesian spacing between waypoints
pub const DEFAULT_CART_STEP: f64 = 1.0;

/// Default number of circle samples
pub const DEFAULT_SEGMENTS: usize = 50;

/// How rasterizer state crosses the vertex between two path segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeamMode {
    /// Every segment restarts from its own first waypoint
    #[default]
    SegmentLocal,
    /// State flows into the next segment and finally catches up to the last vertex
    Carried,
}

impl fmt::Display for SeamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentLocal => write!(f, "segment-local"),
            Self::Carried => write!(f, "carried"),
        }
    }
}

impl FromStr for SeamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "segment-local" | "local" => Ok(Self::SegmentLocal),
            "carried" | "carry" => Ok(Self::Carried),
            _ => Err(format!("Unknown seam mode: {}", s)),
        }
    }
}

/// Settings for a rasterization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Distance between the anchors
    pub spool_distance: f64,
    /// String length change represented by one command
    pub len_step: f64,
    /// Spacing of Cartesian waypoints along a line
    pub cart_step: f64,
    /// Samples taken around a circle
    pub segments: usize,
    /// Handling of rasterizer state at path vertices
    pub seam_mode: SeamMode,
    /// Handling of unreachable length pairs during replay
    pub taut_policy: TautStringPolicy,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            spool_distance: DEFAULT_SPOOL_DISTANCE,
            len_step: DEFAULT_LEN_STEP,
            cart_step: DEFAULT_CART_STEP,
            segments: DEFAULT_SEGMENTS,
            seam_mode: SeamMode::default(),
            taut_policy: TautStringPolicy::default(),
        }
    }
}

impl RasterConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor separation
    pub fn with_spool_distance(mut self, spool_distance: f64) -> Self {
        self.spool_distance = spool_distance;
        self
    }

    /// Set the length step
    pub fn with_len_step(mut self, len_step: f64) -> Self {
        self.len_step = len_step;
        self
    }

    /// Set the Cartesian step
    pub fn with_cart_step(mut self, cart_step: f64) -> Self {
        self.cart_step = cart_step;
        self
    }

    /// Set the circle sample count
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the seam mode
    pub fn with_seam_mode(mut self, seam_mode: SeamMode) -> Self {
        self.seam_mode = seam_mode;
        self
    }

    /// Set the taut string policy
    pub fn with_taut_policy(mut self, taut_policy: TautStringPolicy) -> Self {
        self.taut_policy = taut_policy;
        self
    }

    /// Check every numeric setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry()?;
        ensure_positive("len_step", self.len_step)?;
        ensure_positive("cart_step", self.cart_step)?;
        if self.segments == 0 {
            return Err(ConfigError::NonPositive {
                name: "segments",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Validated spool geometry
    pub fn geometry(&self) -> Result<SpoolGeometry, ConfigError> {
        SpoolGeometry::new(self.spool_distance)
    }
}
