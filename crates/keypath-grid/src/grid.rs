use std::f32::consts::SQRT_2;
use std::fmt;

use keypath::{Heuristic, Key, chebyshev, manhattan, straight};

use crate::error::GridError;
use crate::geom::Point;

/// Content of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    /// Passable cell; entering it costs the given amount (at least 1).
    Floor(f32),
}

impl Tile {
    /// Passable cell with unit cost.
    pub const FLOOR: Tile = Tile::Floor(1.0);

    /// Entry cost, or `None` for walls.
    #[inline]
    pub fn cost(self) -> Option<f32> {
        match self {
            Tile::Wall => None,
            Tile::Floor(c) => Some(c),
        }
    }

    /// `#` wall, `.` unit floor, `1`–`9` floor of that cost.
    pub fn from_rune(ch: char) -> Option<Tile> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::FLOOR),
            '1'..='9' => ch.to_digit(10).map(|d| Tile::Floor(d as f32)),
            _ => None,
        }
    }

    /// Inverse of [`from_rune`](Self::from_rune); `?` for costs with no rune.
    pub fn rune(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor(c) if c == 1.0 => '.',
            Tile::Floor(c) if c.fract() == 0.0 && (2.0..=9.0).contains(&c) => {
                char::from_digit(c as u32, 10).unwrap_or('?')
            }
            Tile::Floor(_) => '?',
        }
    }
}

/// Which moves are allowed between cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinal plus diagonal moves. A diagonal step costs the entered cell's
    /// cost times √2.
    Eight,
}

impl Connectivity {
    /// A metric that is consistent for this connectivity.
    pub fn default_metric(self) -> Metric {
        match self {
            Connectivity::Four => Metric::Manhattan,
            Connectivity::Eight => Metric::Straight,
        }
    }
}

/// Distance estimate used by [`GridMap`] as its heuristic.
///
/// Every floor cost is at least 1, so each metric is consistent for the
/// connectivities it does not overestimate: `Manhattan` for four-way moves,
/// `Straight` and `Chebyshev` for both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Manhattan,
    Straight,
    Chebyshev,
}

impl Metric {
    pub fn distance(self, a: Point, b: Point) -> f32 {
        let (x1, y1, x2, y2) = (a.x as f32, a.y as f32, b.x as f32, b.y as f32);
        match self {
            Metric::Manhattan => manhattan(x1, y1, x2, y2),
            Metric::Straight => straight(x1, y1, x2, y2),
            Metric::Chebyshev => chebyshev(x1, y1, x2, y2),
        }
    }
}

/// Largest number of cells a [`GridMap`] may hold, so that every key and
/// coordinate fits an `i32`.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// A rectangular map of walls and weighted floor, usable as a search space.
///
/// Cell `(x, y)` has key `y * width + x`. Deserialized maps are validated like
/// built ones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGridMap")
)]
pub struct GridMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    connectivity: Connectivity,
    metric: Metric,
    corner_cutting: bool,
}

impl GridMap {
    /// A `width`×`height` map of unit-cost floor with four-way moves.
    /// Negative sizes count as zero.
    ///
    /// # Panics
    ///
    /// If the map would have more than [`MAX_CELLS`] cells. Use
    /// [`try_new`](Self::try_new) for sizes that are not known to be small.
    pub fn new(width: i32, height: i32) -> Self {
        match Self::try_new(width, height) {
            Ok(map) => map,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`new`](Self::new), but reports oversized maps as
    /// [`GridError::InvalidSize`].
    pub fn try_new(width: i32, height: i32) -> Result<Self, GridError> {
        let width = width.max(0);
        let height = height.max(0);
        let cells = cell_count(width, height)?;
        Ok(Self::from_tiles(width, height, vec![Tile::FLOOR; cells]))
    }

    pub(crate) fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Self {
        Self {
            width,
            height,
            tiles,
            connectivity: Connectivity::Four,
            metric: Connectivity::Four.default_metric(),
            corner_cutting: false,
        }
    }

    /// Set the allowed moves, switching to that connectivity's default metric.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self.metric = connectivity.default_metric();
        self
    }

    /// Override the heuristic metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Allow diagonal moves that pass a wall on either side, i.e. where one
    /// of the two orthogonal cells between `from` and `to` is a wall. Off by
    /// default.
    pub fn with_corner_cutting(mut self, allowed: bool) -> Self {
        self.corner_cutting = allowed;
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        matches!(self.tile(p), Some(Tile::Floor(_)))
    }

    /// Replace the tile at `p`. Floor costs below 1 (or NaN) are rejected,
    /// since they would make the distance metrics overestimate.
    pub fn set_tile(&mut self, p: Point, tile: Tile) -> Result<(), GridError> {
        if let Tile::Floor(cost) = tile {
            if !(cost >= 1.0) {
                return Err(GridError::InvalidCost { cost, pos: p });
            }
        }
        let i = self.idx(p).ok_or(GridError::OutOfRange(p))?;
        self.tiles[i] = tile;
        Ok(())
    }

    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        self.set_tile(p, Tile::Wall)
    }

    pub fn set_cost(&mut self, p: Point, cost: f32) -> Result<(), GridError> {
        self.set_tile(p, Tile::Floor(cost))
    }

    /// Search key of `p`, if it lies on the map.
    #[inline]
    pub fn key(&self, p: Point) -> Option<Key> {
        self.idx(p).map(|i| i as Key)
    }

    /// Point named by `key`, if it lies on the map.
    #[inline]
    pub fn point(&self, key: Key) -> Option<Point> {
        if key < 0 || key >= self.tiles.len() as Key {
            return None;
        }
        let w = self.width as Key;
        Some(Point::new((key % w) as i32, (key / w) as i32))
    }

    /// Translate a key path into points, dropping keys not on the map.
    pub fn path_points(&self, keys: &[Key]) -> Vec<Point> {
        keys.iter().filter_map(|&k| self.point(k)).collect()
    }

    /// Cost of stepping from `from` onto the adjacent `to`.
    fn step_cost(&self, from: Point, to: Point) -> Option<f32> {
        let cost = self.tile(to)?.cost()?;
        if !from.is_diagonal_to(to) {
            return Some(cost);
        }
        if !self.corner_cutting
            && !(self.is_passable(Point::new(to.x, from.y))
                && self.is_passable(Point::new(from.x, to.y)))
        {
            return None;
        }
        Some(cost * SQRT_2)
    }
}

/// Number of cells of a `width`×`height` map, if it does not exceed
/// [`MAX_CELLS`].
pub(crate) fn cell_count(width: i32, height: i32) -> Result<usize, GridError> {
    let (w, h) = (width.max(0) as usize, height.max(0) as usize);
    w.checked_mul(h)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(GridError::InvalidSize { width, height })
}

/// Unchecked mirror of [`GridMap`]'s fields, validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    connectivity: Connectivity,
    metric: Metric,
    corner_cutting: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMap> for GridMap {
    type Error = GridError;

    fn try_from(raw: RawGridMap) -> Result<Self, GridError> {
        if raw.width < 0 || raw.height < 0 {
            return Err(GridError::InvalidSize {
                width: raw.width,
                height: raw.height,
            });
        }
        let expected = cell_count(raw.width, raw.height)?;
        if raw.tiles.len() != expected {
            return Err(GridError::TileCount {
                expected,
                found: raw.tiles.len(),
            });
        }

        let mut map = GridMap::from_tiles(raw.width, raw.height, Vec::with_capacity(expected));
        for (i, tile) in raw.tiles.into_iter().enumerate() {
            if let Tile::Floor(cost) = tile {
                if !(cost >= 1.0) {
                    let w = raw.width.max(1) as usize;
                    let pos = Point::new((i % w) as i32, (i / w) as i32);
                    return Err(GridError::InvalidCost { cost, pos });
                }
            }
            map.tiles.push(tile);
        }
        map.connectivity = raw.connectivity;
        map.metric = raw.metric;
        map.corner_cutting = raw.corner_cutting;
        Ok(map)
    }
}

impl Heuristic for GridMap {
    fn estimate_distance(&self, from: Key, to: Key) -> f32 {
        match (self.point(from), self.point(to)) {
            (Some(a), Some(b)) => self.metric.distance(a, b),
            _ => 0.0,
        }
    }

    fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
        let Some(p) = self.point(key) else {
            return;
        };
        let mut push = |n: Point| {
            if let (Some(cost), Some(k)) = (self.step_cost(p, n), self.key(n)) {
                buf.push((k, cost));
            }
        };
        match self.connectivity {
            Connectivity::Four => p.neighbors_4().into_iter().for_each(&mut push),
            Connectivity::Eight => p.neighbors_8().into_iter().for_each(&mut push),
        }
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.width.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.rune())?;
            }
        }
        Ok(())
    }
}
