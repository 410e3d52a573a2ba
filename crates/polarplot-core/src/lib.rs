//! # Polarplot Core
//!
//! Core types and kinematics for a two-spool string plotter.
//! Provides the data model, the conversion between plane positions and
//! string lengths, and the step command codec shared by the rasterizers
//! and anything that consumes their output.

pub mod command;
pub mod error;
pub mod geometry;
pub mod kinematics;
pub mod transcript;

pub use command::{Direction, StepCommand};
pub use error::{ConfigError, Error, KinematicsError, Result, TranscriptError};
pub use geometry::{LengthPair, Point, SpoolGeometry, DEFAULT_SPOOL_DISTANCE};
pub use kinematics::{lengths_from_point, point_from_lengths, TautStringPolicy};
pub use transcript::{parse_transcript, read_transcript, render_transcript, write_transcript};
