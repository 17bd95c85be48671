use std::fmt;

use crate::Key;
use crate::error::SearchError;
use crate::traits::Heuristic;

/// A single start→goal search request.
#[derive(Clone, Copy)]
pub struct Query<'h> {
    pub start: Key,
    pub goal: Key,
    pub heuristic: &'h dyn Heuristic,
}

impl<'h> Query<'h> {
    pub fn new(start: Key, goal: Key, heuristic: &'h dyn Heuristic) -> Self {
        Self {
            start,
            goal,
            heuristic,
        }
    }

    /// Start a query whose heuristic is supplied later.
    pub fn builder(start: Key, goal: Key) -> QueryBuilder<'h> {
        QueryBuilder {
            start,
            goal,
            heuristic: None,
        }
    }
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Query`] whose heuristic may not be known up front.
pub struct QueryBuilder<'h> {
    start: Key,
    goal: Key,
    heuristic: Option<&'h dyn Heuristic>,
}

impl<'h> QueryBuilder<'h> {
    pub fn heuristic(mut self, heuristic: &'h dyn Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Validate and produce the query.
    pub fn build(self) -> Result<Query<'h>, SearchError> {
        let heuristic = self.heuristic.ok_or(SearchError::MissingHeuristic)?;
        Ok(Query::new(self.start, self.goal, heuristic))
    }
}

/// Why a search run stopped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The goal was dequeued; a path is available.
    GoalReached,
    /// The open set emptied without reaching the goal.
    #[default]
    Exhausted,
    /// The configured expansion ceiling was hit first.
    BudgetExhausted,
}

/// Counters collected during one search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes dequeued and closed (the goal itself is not counted).
    pub expanded: usize,
    /// Nodes created, including the start node.
    pub generated: usize,
    /// Open nodes that found a cheaper parent.
    pub reparented: usize,
    pub termination: Termination,
}

/// A path from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub keys: Vec<Key>,
    /// Sum of the edge costs along `keys`.
    pub cost: f32,
}

impl Path {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Outcome of a search.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// `None` when no path exists (or the budget ran out).
    pub path: Option<Path>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The path keys, if a path was found.
    pub fn keys(&self) -> Option<&[Key]> {
        self.path.as_ref().map(|p| p.keys.as_slice())
    }

    /// Accumulated cost of the found path.
    pub fn cost(&self) -> Option<f32> {
        self.path.as_ref().map(|p| p.cost)
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}
