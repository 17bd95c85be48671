//! ASCII map parsing.
//!
//! ```text
//! #####
//! #..3#
//! #.#.#
//! #####
//! ```
//!
//! `#` is a wall, `.` a unit-cost floor, and a digit `1`–`9` a floor with
//! that entry cost. Every line must have the same width; surrounding
//! whitespace of the whole text is ignored.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::{GridMap, MAX_CELLS, Tile};

impl GridMap {
    /// Parse a map from text. The result uses four-way moves; chain
    /// [`with_connectivity`](Self::with_connectivity) to change that.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut w = 0;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_rune(ch).ok_or(GridError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::InconsistentSize {
                        line: y,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
            if tiles.len() > MAX_CELLS {
                return Err(GridError::InvalidSize {
                    width: w as i32,
                    height,
                });
            }
        }

        let width = width.unwrap_or_default();
        Ok(GridMap::from_tiles(width as i32, height, tiles))
    }
}

impl FromStr for GridMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridMap::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#..3#
#.#.#
#####";

    #[test]
    fn parse_and_size() {
        let g = GridMap::parse(ROOM).unwrap();
        assert_eq!((g.width(), g.height()), (5, 4));
        assert_eq!(g.tile(Point::new(0, 0)), Some(Tile::Wall));
        assert_eq!(g.tile(Point::new(1, 1)), Some(Tile::FLOOR));
        assert_eq!(g.tile(Point::new(3, 1)), Some(Tile::Floor(3.0)));
        assert!(!g.is_passable(Point::new(2, 2)));
    }

    #[test]
    fn display_round_trips() {
        let g: GridMap = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let g = GridMap::parse("\n\n..\n..\n\n").unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
    }

    #[test]
    fn crlf_lines() {
        let g = GridMap::parse("#.\r\n.#").unwrap();
        assert_eq!(g.to_string(), "#.\n.#");
    }

    #[test]
    fn empty_error() {
        assert_eq!(GridMap::parse("  \n "), Err(GridError::Empty));
    }

    #[test]
    fn inconsistent_size_error() {
        let err = GridMap::parse("..\n...").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = GridMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "grid: invalid rune \u{201c}x\u{201d} at (1, 1)");
    }
}
