//! A* search over abstract search spaces addressed by integer keys.
//!
//! The engine knows nothing about the space it searches. Callers describe it
//! through a [`Heuristic`], which supplies both the distance estimate and the
//! adjacency (neighbours plus edge costs) of every key. Node storage is
//! pluggable through [`OpenClosedSet`]:
//!
//! | Strategy | `dequeue` | `find_open` |
//! |---|---|---|
//! | [`LinearQueue`] (default) | O(n) | O(n) |
//! | [`HeapQueue`] | O(log n) | O(1) |
//!
//! Both strategies break ties the same way and return identical paths.
//!
//! ```
//! use keypath::{Heuristic, Key, Query, search};
//!
//! struct Line;
//!
//! impl Heuristic for Line {
//!     fn estimate_distance(&self, from: Key, to: Key) -> f32 {
//!         (to - from).abs() as f32
//!     }
//!
//!     fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
//!         if key < 3 {
//!             buf.push((key + 1, 1.0));
//!         }
//!     }
//! }
//!
//! let result = search(&Query::new(1, 3, &Line));
//! assert_eq!(result.keys(), Some(&[1, 2, 3][..]));
//! assert_eq!(result.cost(), Some(2.0));
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod heap;
mod node;
mod query;
mod queue;
mod traits;

/// Opaque identifier of one location in the search space.
pub type Key = i64;

pub use astar::{AStar, search};
pub use config::SearchConfig;
pub use distance::{chebyshev, manhattan, straight};
pub use error::SearchError;
pub use heap::HeapQueue;
pub use node::{NodeArena, NodeId, SearchNode};
pub use query::{Path, Query, QueryBuilder, SearchResult, SearchStats, Termination};
pub use queue::{LinearQueue, OpenClosedSet};
pub use traits::Heuristic;
