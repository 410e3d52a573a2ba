//! Step command types and the packed wire encoding
//!
//! A command is three symbols: left spool, right spool, pen. Each symbol is
//! `+`, `-`, or `.`. Packed form keeps two bits per symbol:
//!
//! ```text
//!   bit  5 4   3 2   1 0
//!        left  right pen      01 = '+', 10 = '-', 00 = '.'
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TranscriptError;

const LEFT_SHIFT: u8 = 4;
const RIGHT_SHIFT: u8 = 2;
const PEN_SHIFT: u8 = 0;
const SYMBOL_MASK: u8 = 0b11;

/// Motion of one spool (or the pen) for a single time-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Pay out string by one length step, or put the pen down
    Lengthen,
    /// Reel in string by one length step, or lift the pen
    Shorten,
    /// No action this time-step
    #[default]
    Hold,
}

impl Direction {
    /// Transcript symbol for this direction
    pub const fn symbol(self) -> char {
        match self {
            Self::Lengthen => '+',
            Self::Shorten => '-',
            Self::Hold => '.',
        }
    }

    /// Parse a transcript symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Lengthen),
            '-' => Some(Self::Shorten),
            '.' => Some(Self::Hold),
            _ => None,
        }
    }

    /// Signed multiplier applied to the length step
    pub const fn sign(self) -> f64 {
        match self {
            Self::Lengthen => 1.0,
            Self::Shorten => -1.0,
            Self::Hold => 0.0,
        }
    }

    const fn bits(self) -> u8 {
        match self {
            Self::Lengthen => 0b01,
            Self::Shorten => 0b10,
            Self::Hold => 0b00,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & SYMBOL_MASK {
            0b01 => Self::Lengthen,
            0b10 => Self::Shorten,
            _ => Self::Hold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One atomic instruction for the plotter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepCommand {
    /// Left spool motion
    pub left: Direction,
    /// Right spool motion
    pub right: Direction,
    /// Pen symbol; always [`Direction::Lengthen`] for rasterized output
    pub pen: Direction,
}

impl StepCommand {
    /// Create a drawing command for the two spools
    pub const fn new(left: Direction, right: Direction) -> Self {
        Self {
            left,
            right,
            pen: Direction::Lengthen,
        }
    }

    /// Create a command with an explicit pen symbol
    pub const fn with_pen(left: Direction, right: Direction, pen: Direction) -> Self {
        Self { left, right, pen }
    }

    /// True when neither spool moves
    pub fn is_idle(&self) -> bool {
        self.left == Direction::Hold && self.right == Direction::Hold
    }

    /// Pack into the 6-bit wire form
    pub const fn pack(&self) -> u8 {
        (self.left.bits() << LEFT_SHIFT)
            | (self.right.bits() << RIGHT_SHIFT)
            | (self.pen.bits() << PEN_SHIFT)
    }

    /// Unpack from the 6-bit wire form; the unused `0b11` pattern reads as hold
    pub const fn unpack(value: u8) -> Self {
        Self {
            left: Direction::from_bits(value >> LEFT_SHIFT),
            right: Direction::from_bits(value >> RIGHT_SHIFT),
            pen: Direction::from_bits(value >> PEN_SHIFT),
        }
    }

    pub(crate) fn parse_line(line: &str, line_number: usize) -> Result<Self, TranscriptError> {
        let mut chars = line.chars();
        let (Some(l), Some(r), Some(p), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(TranscriptError::InvalidLength {
                line_number,
                line: line.to_string(),
            });
        };

        let symbol = |c: char| {
            Direction::from_symbol(c).ok_or(TranscriptError::InvalidSymbol {
                line_number,
                symbol: c,
            })
        };
        Ok(Self::with_pen(symbol(l)?, symbol(r)?, symbol(p)?))
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.right, self.pen)
    }
}

impl FromStr for StepCommand {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s.trim(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn test_pack_known_value() {
        let cmd: StepCommand = "+-.".parse().unwrap();
        assert_eq!(cmd.pack(), 0b011000);
    }

    #[test]
    fn test_pack_unpack() {
        for token in ["+-.", ".+-", "-.+", "..+", "+++"] {
            let cmd: StepCommand = token.parse().unwrap();
            assert_eq!(StepCommand::unpack(cmd.pack()).to_string(), token);
        }
    }

    #[test]
    fn test_unpack_unused_pattern_is_hold() {
        assert_eq!(StepCommand::unpack(0b111111).to_string(), "...");
    }

    #[test]
    fn test_new_always_ticks_pen() {
        let cmd = StepCommand::new(Shorten, Hold);
        assert_eq!(cmd.to_string(), "-.+");
        assert!(!cmd.is_idle());
        assert!(StepCommand::new(Hold, Hold).is_idle());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            "+-".parse::<StepCommand>(),
            Err(TranscriptError::InvalidLength { .. })
        ));
        assert!(matches!(
            "+-x".parse::<StepCommand>(),
            Err(TranscriptError::InvalidSymbol { symbol: 'x', .. })
        ));
    }
}
