/// Tunables for an [`AStar`](crate::AStar) engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Stop after this many node expansions. `None` searches until the goal is
    /// reached or the open set is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of expansions per search.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Whether `expanded` expansions have used up the budget.
    #[inline]
    pub(crate) fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}
