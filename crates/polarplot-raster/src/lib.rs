//! # Polarplot Raster
//!
//! Turns geometry into step command streams for a two-spool plotter.
//!
//! ## Rasterizers
//!
//! - **Cartesian Stepper**: evenly spaced waypoints along a straight line
//! - **Line Rasterizer**: per-waypoint string lengths chased one length step at a time
//! - **Path Rasterizer**: consecutive lines with configurable seam handling
//! - **Circle Rasterizer**: a sampled circle drawn as a path
//!
//! ## Supporting Infrastructure
//!
//! - **Configuration**: step sizes, spool distance, seam mode, taut string policy
//! - **Rasterizer State**: the commanded lengths, passed from step to step
//! - **Replay**: recovers pen positions from a command stream
//!
//! Every rasterizer is a lazy iterator. Dropping one part way through is
//! always safe; each run owns its own state.

pub mod circle;
pub mod config;
pub mod line;
pub mod path;
pub mod replay;
pub mod state;
pub mod stepper;

pub use circle::{rasterize_circle, CircleRasterizer, CircleSampler};
pub use config::{RasterConfig, SeamMode, DEFAULT_CART_STEP, DEFAULT_LEN_STEP, DEFAULT_SEGMENTS};
pub use line::{rasterize_line, LineRasterizer};
pub use path::{rasterize_path, PathRasterizer};
pub use replay::Replayer;
pub use state::{CatchUp, RasterizerState};
pub use stepper::{trace_path, CartesianStepper};
