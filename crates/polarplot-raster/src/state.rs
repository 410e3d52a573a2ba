//! Rasterizer state
//!
//! The string lengths as last commanded. A value type: each step takes the
//! current state and hands back its successor.

use polarplot_core::{Direction, LengthPair, StepCommand};
use serde::{Deserialize, Serialize};

/// Lengths the plotter has been told to hold so far
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterizerState {
    lengths: LengthPair,
}

impl RasterizerState {
    /// Start tracking from a known length pair
    pub const fn new(lengths: LengthPair) -> Self {
        Self { lengths }
    }

    /// Lengths as last commanded
    pub fn lengths(&self) -> LengthPair {
        self.lengths
    }

    /// Emit one command towards `target`
    ///
    /// Returns `None` once both spools are within `len_step` of the target.
    /// A spool moves only while it is more than `len_step` behind; both can
    /// move in the same command.
    pub fn advance(self, target: LengthPair, len_step: f64) -> Option<(StepCommand, Self)> {
        let (left, left_len) = chase(self.lengths.left, target.left, len_step);
        let (right, right_len) = chase(self.lengths.right, target.right, len_step);
        if left == Direction::Hold && right == Direction::Hold {
            return None;
        }

        let next = Self::new(LengthPair::new(left_len, right_len));
        Some((StepCommand::new(left, right), next))
    }

    /// Apply an already emitted command
    pub fn apply(self, command: StepCommand, len_step: f64) -> Self {
        Self::new(LengthPair::new(
            self.lengths.left + command.left.sign() * len_step,
            self.lengths.right + command.right.sign() * len_step,
        ))
    }

    /// Every command needed to bring this state within `len_step` of `target`
    pub fn catch_up(self, target: LengthPair, len_step: f64) -> CatchUp {
        CatchUp {
            state: self,
            target,
            len_step,
        }
    }
}

fn chase(current: f64, target: f64, len_step: f64) -> (Direction, f64) {
    if target - current > len_step {
        (Direction::Lengthen, current + len_step)
    } else if current - target > len_step {
        (Direction::Shorten, current - len_step)
    } else {
        (Direction::Hold, current)
    }
}

/// Commands closing the gap between a state and one target
#[derive(Debug, Clone)]
pub struct CatchUp {
    state: RasterizerState,
    target: LengthPair,
    len_step: f64,
}

impl CatchUp {
    /// State after the commands produced so far
    pub fn state(&self) -> RasterizerState {
        self.state
    }
}

impl Iterator for CatchUp {
    type Item = StepCommand;

    fn next(&mut self) -> Option<StepCommand> {
        let (command, next) = self.state.advance(self.target, self.len_step)?;
        self.state = next;
        Some(command)
    }
}
