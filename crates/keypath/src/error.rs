use std::fmt;

/// Errors raised while building a search, before any node is allocated.
///
/// An unreachable goal is not an error: it is reported as a
/// [`SearchResult`](crate::SearchResult) without a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query was built without a heuristic.
    MissingHeuristic,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeuristic => write!(f, "invalid A* query: no heuristic supplied"),
        }
    }
}

impl std::error::Error for SearchError {}
