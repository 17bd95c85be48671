use crate::Key;

/// Domain knowledge connecting abstract keys to real costs and adjacency.
///
/// The engine never reopens a closed key, so the returned path is only
/// guaranteed optimal when [`estimate_distance`](Self::estimate_distance) is
/// *consistent*: for every edge `a -> b` with cost `c`,
/// `estimate_distance(a, goal) <= c + estimate_distance(b, goal)`.
/// This is not verified; an inconsistent heuristic silently yields a valid but
/// possibly suboptimal path.
pub trait Heuristic {
    /// Lower bound on the cost of travelling from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate_distance(&self, from: Key, to: Key) -> f32;

    /// Append every key directly reachable from `key`, together with the
    /// non-negative cost of that single edge, into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Order does not affect correctness, only tie-breaking among equal-cost
    /// paths; keep it stable for reproducible results.
    fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>);
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate_distance(&self, from: Key, to: Key) -> f32 {
        (**self).estimate_distance(from, to)
    }

    #[inline]
    fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
        (**self).reachable_neighbours(key, buf);
    }
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    #[inline]
    fn estimate_distance(&self, from: Key, to: Key) -> f32 {
        (**self).estimate_distance(from, to)
    }

    #[inline]
    fn reachable_neighbours(&self, key: Key, buf: &mut Vec<(Key, f32)>) {
        (**self).reachable_neighbours(key, buf);
    }
}
