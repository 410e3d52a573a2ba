//! # Polarplot
//!
//! Drives a two-spool string plotter ("polargraph") from plain geometry:
//! - Converts plane positions to string lengths and back
//! - Rasterizes lines, polylines, and circles into step commands
//! - Reads and writes one-token-per-line command transcripts
//! - Replays transcripts to preview where the pen goes
//!
//! ## Architecture
//!
//! Polarplot is organized as a workspace with multiple crates:
//!
//! 1. **polarplot-core** - Data model, spool kinematics, step command codec, errors
//! 2. **polarplot-raster** - Stepper, line/path/circle rasterizers, replay
//! 3. **polarplot** - Command line driver that integrates both crates

pub mod cli;
pub mod types;

pub use polarplot_core::{
    lengths_from_point, point_from_lengths, ConfigError, Direction, Error, KinematicsError,
    LengthPair, Point, Result, SpoolGeometry, StepCommand, TautStringPolicy, TranscriptError,
};

pub use polarplot_raster::{
    rasterize_circle, rasterize_line, rasterize_path, trace_path, CartesianStepper,
    CircleRasterizer, CircleSampler, LineRasterizer, PathRasterizer, RasterConfig,
    RasterizerState, Replayer, SeamMode,
};

pub use types::RunSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the command transcript
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Filter from a `RUST_LOG` style directive string, `info` when unset or invalid
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
