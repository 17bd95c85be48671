//! 2D grid maps usable as [`keypath`] search spaces.
//!
//! A [`GridMap`] stores walls and weighted floor cells and implements
//! [`keypath::Heuristic`], so it can be handed straight to a query:
//!
//! ```
//! use keypath::{Query, search};
//! use keypath_grid::{GridMap, Point};
//!
//! let map = GridMap::parse("\
//! ....
//! .##.
//! ....").unwrap();
//!
//! let start = map.key(Point::new(0, 1)).unwrap();
//! let goal = map.key(Point::new(3, 1)).unwrap();
//! let result = search(&Query::new(start, goal, &map));
//! assert_eq!(result.cost(), Some(5.0));
//! ```

mod error;
mod geom;
mod grid;
mod parse;

pub use error::GridError;
pub use geom::Point;
pub use grid::{Connectivity, GridMap, MAX_CELLS, Metric, Tile};
