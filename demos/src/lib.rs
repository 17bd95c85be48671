//! Shared pieces of the terminal demos: random map generation and colour
//! rendering of a map with a path on top.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use keypath_grid::{GridError, GridMap, Point, Tile};
use rand::Rng;

const COL_WALL: Color = Color::Rgb {
    r: 100,
    g: 100,
    b: 130,
};
const COL_FLOOR: Color = Color::Rgb {
    r: 60,
    g: 55,
    b: 50,
};
const COL_WEIGHTED: Color = Color::Rgb {
    r: 160,
    g: 120,
    b: 60,
};
const COL_PATH: Color = Color::Rgb {
    r: 50,
    g: 180,
    b: 255,
};
const COL_ENDPOINT: Color = Color::Rgb {
    r: 255,
    g: 220,
    b: 80,
};

/// Parameters for [`random_map`].
#[derive(Clone, Copy, Debug)]
pub struct MapParams {
    pub width: i32,
    pub height: i32,
    /// Chance of each cell being a wall.
    pub wall_chance: f64,
    /// Chance of each floor cell getting a cost between 2 and 5.
    pub weighted_chance: f64,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            wall_chance: 0.3,
            weighted_chance: 0.1,
        }
    }
}

/// Fill a map at random, keeping `keep` (typically start and goal) as
/// unit-cost floor. Fails only for sizes a [`GridMap`] cannot hold.
pub fn random_map<R: Rng>(
    params: &MapParams,
    keep: &[Point],
    rng: &mut R,
) -> Result<GridMap, GridError> {
    let mut map = GridMap::try_new(params.width, params.height)?;
    for y in 0..params.height {
        for x in 0..params.width {
            let p = Point::new(x, y);
            if keep.contains(&p) {
                continue;
            }
            let tile = if rng.random_bool(params.wall_chance) {
                Tile::Wall
            } else if rng.random_bool(params.weighted_chance) {
                Tile::Floor(f32::from(rng.random_range(2u8..=5)))
            } else {
                continue;
            };
            // Every generated point lies on the map and every cost is >= 1.
            let _ = map.set_tile(p, tile);
        }
    }
    Ok(map)
}

/// Draw `map` with `path` highlighted; the path's first and last points are
/// drawn as `S` and `G`.
pub fn render<W: Write>(out: &mut W, map: &GridMap, path: &[Point]) -> io::Result<()> {
    let start = path.first().copied();
    let goal = path.last().copied();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let (color, ch) = if Some(p) == start {
                (COL_ENDPOINT, 'S')
            } else if Some(p) == goal {
                (COL_ENDPOINT, 'G')
            } else if path.contains(&p) {
                (COL_PATH, '*')
            } else {
                match map.tile(p) {
                    Some(Tile::Floor(c)) if c > 1.0 => (COL_WEIGHTED, Tile::Floor(c).rune()),
                    Some(t @ Tile::Floor(_)) => (COL_FLOOR, t.rune()),
                    Some(Tile::Wall) | None => (COL_WALL, Tile::Wall.rune()),
                }
            };
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    out.flush()
}
