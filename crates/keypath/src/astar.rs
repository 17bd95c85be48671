use crate::config::SearchConfig;
use crate::node::SearchNode;
use crate::query::{Path, Query, SearchResult, SearchStats, Termination};
use crate::queue::{LinearQueue, OpenClosedSet};

/// A* search engine.
///
/// Closed keys are never reopened: the result is optimal only when the
/// query's heuristic is consistent (see [`Heuristic`](crate::Heuristic)).
/// The engine itself holds no per-search state, so one `AStar` can serve any
/// number of queries, including from several threads as long as each search
/// gets its own queue.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search using the default [`LinearQueue`].
    pub fn search(&self, query: &Query<'_>) -> SearchResult {
        let mut queue = LinearQueue::new();
        self.search_with(query, &mut queue)
    }

    /// Search using a caller-supplied open/closed set.
    ///
    /// `queue` is cleared first. After the call it still holds the run's nodes
    /// and closed keys, which callers may inspect.
    pub fn search_with<Q: OpenClosedSet>(&self, query: &Query<'_>, queue: &mut Q) -> SearchResult {
        let heuristic = query.heuristic;
        let goal = query.goal;

        queue.clear();
        let estimate = heuristic.estimate_distance(query.start, goal);
        queue.enqueue(SearchNode::root(query.start, estimate));

        let mut stats = SearchStats {
            generated: 1,
            ..SearchStats::default()
        };
        log::debug!(
            "astar: start={} goal={} estimate={estimate}",
            query.start,
            goal
        );

        let mut nbuf = Vec::new();

        let found = loop {
            let Some(current) = queue.dequeue() else {
                stats.termination = Termination::Exhausted;
                break None;
            };

            let node = queue.nodes()[current];
            if node.key == goal {
                stats.termination = Termination::GoalReached;
                break Some(current);
            }

            // Reaching the goal is free; only real expansions spend budget.
            if self.config.exhausted(stats.expanded) {
                stats.termination = Termination::BudgetExhausted;
                break None;
            }

            queue.close(node.key);
            stats.expanded += 1;
            log::trace!(
                "astar: expand key={} g={} f={}",
                node.key,
                node.path_cost,
                node.total_cost()
            );

            nbuf.clear();
            heuristic.reachable_neighbours(node.key, &mut nbuf);

            for &(nk, edge_cost) in nbuf.iter() {
                if queue.is_closed(nk) {
                    continue;
                }

                let Some(open) = queue.find_open(nk) else {
                    let estimate = heuristic.estimate_distance(nk, goal);
                    queue.enqueue(SearchNode::child(nk, estimate, current, node.path_cost, edge_cost));
                    stats.generated += 1;
                    continue;
                };

                let neighbour = queue.nodes()[open];
                let tentative = node.path_cost + edge_cost;
                if tentative + neighbour.estimate < neighbour.total_cost() {
                    queue.reparent(open, current, edge_cost);
                    stats.reparented += 1;
                }
            }
        };

        let path = found.map(|id| Path {
            keys: queue.nodes().trace_path(id),
            cost: queue.nodes()[id].path_cost,
        });

        log::debug!(
            "astar: {:?} after {} expansions ({} generated, {} reparented), path length {}",
            stats.termination,
            stats.expanded,
            stats.generated,
            stats.reparented,
            path.as_ref().map_or(0, Path::len)
        );

        SearchResult { path, stats }
    }
}

/// Run one query with default settings and the default queue.
pub fn search(query: &Query<'_>) -> SearchResult {
    AStar::new().search(query)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{HeapQueue, Heuristic, Key};

    /// Directed graph with an explicit per-key heuristic table.
    #[derive(Default)]
    struct Graph {
        edges: BTreeMap<Key, Vec<(Key, f32)>>,
        h: BTreeMap<Key, f32>,
    }

    impl Graph {
        fn edge(mut self, a: Key, b: Key, c: f32) -> Self {
            self.edges.entry(a).or_default().push((b, c));
            self
        }

        fn both(self, a: Key, b: Key, c: f32) -> Self {
            self.edge(a, b, c).edge(b, a, c)
        }

        fn h(mut self, k: Key, v: f32) -> Self {
            self.h.insert(k, v);
            self
        }
    }

    impl Heuristic for Graph {
        fn estimate_distance(&self, from: Key, _to: Key) -> f32 {
            self.h.get(&from).copied().unwrap_or(0.0)
        }

        fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
            if let Some(e) = self.edges.get(&key) {
                buf.extend_from_slice(e);
            }
        }
    }

    /// Keys on a number line; the estimate is the distance along the line.
    struct Line {
        edges: Vec<(Key, Key, f32)>,
    }

    impl Heuristic for Line {
        fn estimate_distance(&self, from: Key, to: Key) -> f32 {
            (to - from).abs() as f32
        }

        fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
            buf.extend(
                self.edges
                    .iter()
                    .filter(|e| e.0 == key)
                    .map(|&(_, b, c)| (b, c)),
            );
        }
    }

    #[test]
    fn three_node_line() {
        let line = Line {
            edges: vec![(1, 2, 1.0), (2, 3, 1.0)],
        };
        let r = search(&Query::new(1, 3, &line));
        assert_eq!(r.keys(), Some(&[1, 2, 3][..]));
        assert_eq!(r.cost(), Some(2.0));
        assert_eq!(r.stats.termination, Termination::GoalReached);
        assert_eq!(r.stats.expanded, 2);
    }

    #[test]
    fn disconnected_has_no_path() {
        let line = Line { edges: vec![] };
        let r = search(&Query::new(1, 2, &line));
        assert!(r.path.is_none());
        assert_eq!(r.stats.termination, Termination::Exhausted);
        assert_eq!(r.stats.expanded, 1);
    }

    #[test]
    fn start_equals_goal() {
        let g = Graph::default().both(1, 2, 1.0);
        let r = search(&Query::new(1, 1, &g));
        assert_eq!(r.keys(), Some(&[1][..]));
        assert_eq!(r.cost(), Some(0.0));
        assert_eq!(r.stats.expanded, 0);
    }

    #[test]
    fn start_equals_goal_without_neighbours() {
        let r = search(&Query::new(9, 9, &Graph::default()));
        assert_eq!(r.keys(), Some(&[9][..]));
    }

    #[test]
    fn cheaper_detour_wins() {
        // 1 -> 4 direct costs 10; 1 -> 2 -> 3 -> 4 costs 3.
        let g = Graph::default()
            .edge(1, 4, 10.0)
            .edge(1, 2, 1.0)
            .edge(2, 3, 1.0)
            .edge(3, 4, 1.0);
        let r = search(&Query::new(1, 4, &g));
        assert_eq!(r.keys(), Some(&[1, 2, 3, 4][..]));
        assert_eq!(r.cost(), Some(3.0));
        assert_eq!(r.stats.reparented, 1);
    }

    #[test]
    fn reparent_keeps_accumulated_cost() {
        // 3 is first discovered from 1 at cost 5, then via 2 at cost 1 + 1.
        let g = Graph::default()
            .edge(1, 3, 5.0)
            .edge(1, 2, 1.0)
            .edge(2, 3, 1.0)
            .edge(3, 4, 1.0);
        let r = search(&Query::new(1, 4, &g));
        assert_eq!(r.keys(), Some(&[1, 2, 3, 4][..]));
        assert_eq!(r.cost(), Some(3.0));
    }

    #[test]
    fn heuristic_guides_expansion() {
        // Two equal-cost branches; the estimate rules out branch 2.
        let g = Graph::default()
            .edge(0, 1, 1.0)
            .edge(0, 2, 1.0)
            .edge(1, 3, 1.0)
            .edge(2, 3, 1.0)
            .h(0, 2.0)
            .h(1, 1.0)
            .h(2, 1.5)
            .h(3, 0.0);
        let r = search(&Query::new(0, 3, &g));
        assert_eq!(r.keys(), Some(&[0, 1, 3][..]));
        assert_eq!(r.stats.expanded, 2);
    }

    #[test]
    fn closed_keys_are_never_reopened() {
        // Inconsistent estimate on 2 delays it until after 3 is closed via the
        // expensive edge; the engine keeps the first resolution.
        let g = Graph::default()
            .edge(1, 2, 1.0)
            .edge(1, 3, 4.0)
            .edge(2, 3, 1.0)
            .edge(3, 4, 10.0)
            .h(2, 9.0);
        let mut q = LinearQueue::new();
        let r = AStar::new().search_with(&Query::new(1, 4, &g), &mut q);
        assert_eq!(r.keys(), Some(&[1, 3, 4][..]));
        assert_eq!(r.cost(), Some(14.0));

        let keys: Vec<Key> = q.nodes().iter().map(|(_, n)| n.key).collect();
        let mut unique = keys.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(keys.len(), unique.len(), "a key was enqueued twice");
    }

    #[test]
    fn self_loops_and_duplicates_are_harmless() {
        let g = Graph::default()
            .edge(1, 1, 0.0)
            .edge(1, 2, 3.0)
            .edge(1, 2, 1.0)
            .edge(2, 3, 1.0);
        let r = search(&Query::new(1, 3, &g));
        assert_eq!(r.keys(), Some(&[1, 2, 3][..]));
        assert_eq!(r.cost(), Some(2.0));
    }

    #[test]
    fn budget_stops_search() {
        let line = Line {
            edges: (0..100).map(|k| (k, k + 1, 1.0)).collect(),
        };
        let engine = AStar::with_config(SearchConfig::new().with_max_expansions(10));
        let r = engine.search(&Query::new(0, 100, &line));
        assert!(r.path.is_none());
        assert_eq!(r.stats.termination, Termination::BudgetExhausted);
        assert_eq!(r.stats.expanded, 10);

        let r = engine.search(&Query::new(0, 5, &line));
        assert_eq!(r.cost(), Some(5.0));
    }

    #[test]
    fn budget_equal_to_needed_expansions_is_enough() {
        let line = Line {
            edges: (0..10).map(|k| (k, k + 1, 1.0)).collect(),
        };
        let query = Query::new(0, 5, &line);

        let r = AStar::with_config(SearchConfig::new().with_max_expansions(5)).search(&query);
        assert_eq!(r.keys(), Some(&[0, 1, 2, 3, 4, 5][..]));
        assert_eq!(r.stats.termination, Termination::GoalReached);
        assert_eq!(r.stats.expanded, 5);

        let r = AStar::with_config(SearchConfig::new().with_max_expansions(4)).search(&query);
        assert!(r.path.is_none());
        assert_eq!(r.stats.termination, Termination::BudgetExhausted);
        assert_eq!(r.stats.expanded, 4);
    }

    #[test]
    fn zero_budget_still_finds_start_as_goal() {
        let g = Graph::default().both(3, 4, 1.0);
        let engine = AStar::with_config(SearchConfig::new().with_max_expansions(0));

        let r = engine.search(&Query::new(3, 3, &g));
        assert_eq!(r.keys(), Some(&[3][..]));
        assert_eq!(r.stats.termination, Termination::GoalReached);

        let r = engine.search(&Query::new(3, 4, &g));
        assert_eq!(r.stats.termination, Termination::BudgetExhausted);
        assert_eq!(r.stats.expanded, 0);
    }

    #[test]
    fn queue_is_reusable_across_runs() {
        let line = Line {
            edges: vec![(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)],
        };
        let engine = AStar::new();
        let mut q = HeapQueue::new();
        let a = engine.search_with(&Query::new(1, 4, &line), &mut q);
        let b = engine.search_with(&Query::new(2, 4, &line), &mut q);
        assert_eq!(a.keys(), Some(&[1, 2, 3, 4][..]));
        assert_eq!(b.keys(), Some(&[2, 3, 4][..]));
        assert!(!q.is_closed(1));
    }

    #[test]
    fn heap_and_linear_agree() {
        let g = Graph::default()
            .both(1, 2, 1.0)
            .both(1, 3, 1.0)
            .both(2, 4, 1.0)
            .both(3, 4, 1.0)
            .both(4, 5, 2.0)
            .both(2, 5, 3.0);
        let query = Query::new(1, 5, &g);
        let engine = AStar::new();
        let linear = engine.search_with(&query, &mut LinearQueue::new());
        let heap = engine.search_with(&query, &mut HeapQueue::new());
        assert_eq!(linear, heap);
    }
}
