use std::fmt;

use crate::geom::Point;

/// Errors from building or editing a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The map text contains no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no tile meaning was found.
    InvalidRune { ch: char, pos: Point },
    /// Floor cost below 1 or NaN.
    InvalidCost { cost: f32, pos: Point },
    /// The point lies outside the map.
    OutOfRange(Point),
    /// Negative dimensions, or more than [`MAX_CELLS`](crate::MAX_CELLS) cells.
    InvalidSize { width: i32, height: i32 },
    /// Stored tiles do not match the map's size.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty map"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidCost { cost, pos } => {
                write!(f, "grid: floor cost {cost} at {pos} is below 1")
            }
            Self::OutOfRange(p) => write!(f, "grid: {p} is out of range"),
            Self::InvalidSize { width, height } => {
                write!(f, "grid: invalid map size {width}x{height}")
            }
            Self::TileCount { expected, found } => {
                write!(f, "grid: expected {expected} tiles, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
