use polarplot_core::LengthPair;
use polarplot_raster::SeamMode;
use serde::Serialize;

/// What a CLI run produced, for the `--summary` report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Subcommand that produced the stream (`line`, `circle`, `path`)
    pub shape: String,
    /// Distance between the two anchors
    pub spool_distance: f64,
    /// String length change per command
    pub len_step: f64,
    /// Waypoint spacing along each line
    pub cart_step: f64,
    /// How rasterizer state crossed path vertices
    pub seam_mode: SeamMode,
    /// Number of commands written
    pub commands: usize,
    /// String lengths at the first waypoint, if there was one
    pub start_lengths: Option<LengthPair>,
    /// String lengths after applying every command
    pub end_lengths: Option<LengthPair>,
}
