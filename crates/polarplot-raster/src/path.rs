//! Path Rasterizer
//!
//! Chains line rasterizers over consecutive vertices. The seam mode decides
//! whether rasterizer state survives from one segment into the next.

use std::iter::FusedIterator;

use polarplot_core::error::ConfigError;
use polarplot_core::{lengths_from_point, Point, SpoolGeometry, StepCommand};
use tracing::{debug, info};

use crate::config::{RasterConfig, SeamMode};
use crate::line::LineRasterizer;
use crate::state::{CatchUp, RasterizerState};

/// Lazy command stream for a polyline
///
/// Vertices are pulled from `I` one at a time; they must already be finite.
#[derive(Debug, Clone)]
pub struct PathRasterizer<I> {
    vertices: I,
    geometry: SpoolGeometry,
    len_step: f64,
    cart_step: f64,
    seam_mode: SeamMode,
    previous: Option<Point>,
    segment: Option<LineRasterizer>,
    segments_started: usize,
    carried: Option<RasterizerState>,
    tail: Option<CatchUp>,
    finished: bool,
}

impl<I> PathRasterizer<I>
where
    I: Iterator<Item = Point>,
{
    pub(crate) fn from_validated(vertices: I, config: &RasterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            vertices,
            geometry: config.geometry()?,
            len_step: config.len_step,
            cart_step: config.cart_step,
            seam_mode: config.seam_mode,
            previous: None,
            segment: None,
            segments_started: 0,
            carried: None,
            tail: None,
            finished: false,
        })
    }

    /// Number of line segments begun so far
    pub fn segments_started(&self) -> usize {
        self.segments_started
    }

    /// Tracked state; only maintained in [`SeamMode::Carried`]
    pub fn carried_state(&self) -> Option<RasterizerState> {
        match &self.tail {
            Some(tail) => Some(tail.state()),
            None => self.carried,
        }
    }

    fn start_segment(&mut self, vertex: Point) {
        let Some(previous) = self.previous.replace(vertex) else {
            if self.seam_mode == SeamMode::Carried {
                let lengths = lengths_from_point(self.geometry, vertex);
                self.carried = Some(RasterizerState::new(lengths));
            }
            return;
        };

        let state = match self.seam_mode {
            SeamMode::Carried => self.carried,
            SeamMode::SegmentLocal => None,
        };
        self.segments_started += 1;
        debug!(
            segment = self.segments_started,
            "Segment {} -> {}", previous, vertex
        );
        self.segment = Some(LineRasterizer::unchecked(
            previous,
            vertex,
            self.geometry,
            self.len_step,
            self.cart_step,
            state,
        ));
    }

    fn finish(&mut self) {
        self.finished = true;
        if self.seam_mode != SeamMode::Carried {
            return;
        }
        if let (Some(state), Some(last)) = (self.carried, self.previous) {
            let target = lengths_from_point(self.geometry, last);
            self.tail = Some(state.catch_up(target, self.len_step));
        }
    }
}

impl<I> Iterator for PathRasterizer<I>
where
    I: Iterator<Item = Point>,
{
    type Item = StepCommand;

    fn next(&mut self) -> Option<StepCommand> {
        loop {
            if let Some(segment) = self.segment.as_mut() {
                if let Some(command) = segment.next() {
                    return Some(command);
                }
                if self.seam_mode == SeamMode::Carried {
                    self.carried = segment.state().or(self.carried);
                }
                self.segment = None;
            }

            if self.finished {
                return self.tail.as_mut().and_then(|tail| tail.next());
            }

            match self.vertices.next() {
                Some(vertex) => self.start_segment(vertex),
                None => self.finish(),
            }
        }
    }
}

impl<I> FusedIterator for PathRasterizer<I> where I: Iterator<Item = Point> {}

/// Commands drawing a polyline through `vertices`
///
/// All vertices are validated up front. Fewer than two vertices produce an
/// empty stream.
pub fn rasterize_path<V>(
    vertices: V,
    config: &RasterConfig,
) -> Result<PathRasterizer<std::vec::IntoIter<Point>>, ConfigError>
where
    V: IntoIterator<Item = Point>,
{
    let vertices = vertices
        .into_iter()
        .map(Point::validated)
        .collect::<Result<Vec<_>, _>>()?;
    let path = PathRasterizer::from_validated(vertices.clone().into_iter(), config)?;

    if let Some(first) = vertices.first() {
        let lengths = lengths_from_point(path.geometry, *first);
        info!(
            len_step = config.len_step,
            left = lengths.left,
            right = lengths.right,
            seam_mode = %config.seam_mode,
            "Rasterizing path of {} vertices",
            vertices.len()
        );
    }
    Ok(path)
}
