//! Command line driver
//!
//! Maps flags onto a [`RasterConfig`], runs one rasterizer, and writes the
//! transcript (one command per line) to stdout or `--output`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use polarplot_core::{
    lengths_from_point, read_transcript, write_transcript, LengthPair, Point, StepCommand,
    TautStringPolicy, DEFAULT_SPOOL_DISTANCE,
};
use polarplot_raster::{
    rasterize_circle, rasterize_line, rasterize_path, CircleSampler, RasterConfig,
    RasterizerState, Replayer, SeamMode, DEFAULT_CART_STEP, DEFAULT_LEN_STEP, DEFAULT_SEGMENTS,
};
use tracing::info;

use crate::types::RunSummary;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Rasterize geometry into step commands for a two-spool plotter
#[derive(Parser, Debug)]
#[command(name = "polarplot", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Distance between the two anchors
    #[arg(long, global = true, default_value_t = DEFAULT_SPOOL_DISTANCE)]
    pub spool_distance: f64,

    /// String length change per command
    #[arg(long, global = true, default_value_t = DEFAULT_LEN_STEP)]
    pub len_step: f64,

    /// Spacing of waypoints along each line
    #[arg(long, global = true, default_value_t = DEFAULT_CART_STEP)]
    pub cart_step: f64,

    /// Rasterizer state at path vertices: segment-local or carried
    #[arg(long, global = true, default_value_t = SeamMode::SegmentLocal)]
    pub seam: SeamMode,

    /// Fail instead of warning when strings cannot reach
    #[arg(long, global = true)]
    pub reject_taut: bool,

    /// Print a JSON run summary to stderr
    #[arg(long, global = true)]
    pub summary: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Straight line from (X1, Y1) towards (X2, Y2)
    #[command(allow_negative_numbers = true)]
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// Circle around (CX, CY)
    #[command(allow_negative_numbers = true)]
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        /// Samples around the circle
        #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
        segments: usize,
    },

    /// Polyline through X,Y vertices
    Path {
        #[arg(required = true, num_args = 1.., value_parser = parse_point, allow_hyphen_values = true)]
        vertices: Vec<Point>,
    },

    /// Replay a transcript and print the pen positions
    Replay {
        file: PathBuf,
        /// Pen position the transcript starts from, as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
    },
}

impl Cli {
    /// Rasterizer settings described by the flags
    pub fn config(&self) -> RasterConfig {
        let taut_policy = if self.reject_taut {
            TautStringPolicy::Reject
        } else {
            TautStringPolicy::Warn
        };
        let config = RasterConfig::new()
            .with_spool_distance(self.spool_distance)
            .with_len_step(self.len_step)
            .with_cart_step(self.cart_step)
            .with_seam_mode(self.seam)
            .with_taut_policy(taut_policy);

        match &self.command {
            Command::Circle { segments, .. } => config.with_segments(*segments),
            _ => config,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Execute the parsed command, writing to `out` unless `--output` is set
///
/// Returns the run summary for rasterizing commands, `None` for replay.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Option<RunSummary>> {
    let config = cli.config();
    config.validate().context("invalid rasterizer settings")?;
    let geometry = config.geometry()?;

    let mut sink: Box<dyn Write + '_> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(out),
    };

    let summary = match &cli.command {
        Command::Line { x1, y1, x2, y2 } => {
            let start = Point::new(*x1, *y1);
            let commands = rasterize_line(start, Point::new(*x2, *y2), &config)?;
            let start = lengths_from_point(geometry, start);
            emit(cli, "line", Some(start), commands, &config, &mut sink)?
        }
        Command::Circle { cx, cy, radius, .. } => {
            let center = Point::new(*cx, *cy);
            let seed = CircleSampler::new(center, *radius, config.segments)?.sample(1);
            let commands = rasterize_circle(center, *radius, &config)?;
            let start = lengths_from_point(geometry, seed);
            emit(cli, "circle", Some(start), commands, &config, &mut sink)?
        }
        Command::Path { vertices } => {
            let commands = rasterize_path(vertices.iter().copied(), &config)?;
            let start = vertices.first().map(|p| lengths_from_point(geometry, *p));
            emit(cli, "path", start, commands, &config, &mut sink)?
        }
        Command::Replay { file, start } => {
            replay(file, *start, &config, &mut sink)?;
            return Ok(None);
        }
    };

    if cli.summary {
        eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(Some(summary))
}

fn emit<W, I>(
    cli: &Cli,
    shape: &str,
    start: Option<LengthPair>,
    commands: I,
    config: &RasterConfig,
    sink: &mut W,
) -> anyhow::Result<RunSummary>
where
    W: Write,
    I: Iterator<Item = StepCommand>,
{
    let mut state = start.map(RasterizerState::new);
    let len_step = config.len_step;
    let tracked = commands.inspect(|cmd| {
        if let Some(s) = state.as_mut() {
            *s = s.apply(*cmd, len_step);
        }
    });
    let count = write_transcript(sink, tracked).context("failed to write transcript")?;
    info!(commands = count, "Wrote {} transcript", shape);

    Ok(RunSummary {
        shape: shape.to_string(),
        spool_distance: config.spool_distance,
        len_step: config.len_step,
        cart_step: config.cart_step,
        seam_mode: cli.seam,
        commands: count,
        start_lengths: start,
        end_lengths: state.map(|s| s.lengths()),
    })
}

fn replay<W: Write>(
    file: &Path,
    start: Point,
    config: &RasterConfig,
    sink: &mut W,
) -> anyhow::Result<()> {
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("failed to open {}", file.display()))?,
    );
    let commands = read_transcript(reader)
        .with_context(|| format!("failed to read transcript {}", file.display()))?;

    let mut replayer = Replayer::new(lengths_from_point(config.geometry()?, start), config)?;
    let points = replayer.trace(commands)?;
    info!(
        steps = replayer.steps(),
        points = points.len(),
        "Replayed {}",
        file.display()
    );

    for p in &points {
        writeln!(sink, "{:.3} {:.3}", p.x, p.y)?;
    }
    sink.flush()?;
    Ok(())
}
