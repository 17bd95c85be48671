use rustc_hash::FxHashSet;

use crate::Key;
use crate::node::{NodeArena, NodeId, SearchNode};

/// Storage for one search run: the open set (discovered, unresolved nodes),
/// the closed set (resolved keys) and the arena owning every node.
///
/// The engine guarantees it never enqueues a key that is already open or
/// closed; implementations don't need to enforce uniqueness themselves.
pub trait OpenClosedSet {
    /// Every node created so far in this run.
    fn nodes(&self) -> &NodeArena;

    /// Add `node` to the open set.
    fn enqueue(&mut self, node: SearchNode) -> NodeId;

    /// Remove and return the open node with the least total cost, or `None`
    /// if the open set is empty. Among equal minima the earliest-enqueued
    /// node wins.
    fn dequeue(&mut self) -> Option<NodeId>;

    /// Re-parent an open node, reached from `parent` over `edge_cost`.
    /// Implementations must restore their ordering afterwards.
    fn reparent(&mut self, id: NodeId, parent: NodeId, edge_cost: f32);

    /// Mark `key` as resolved.
    fn close(&mut self, key: Key);

    fn is_closed(&self, key: Key) -> bool;

    /// The open node for `key`, if any.
    fn find_open(&self, key: Key) -> Option<NodeId>;

    fn is_queued(&self, key: Key) -> bool {
        self.find_open(key).is_some()
    }

    /// Number of nodes currently open.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every node and closed key, ready for a new run.
    fn clear(&mut self);
}

/// The simplest correct open/closed set.
///
/// The open set is an insertion-ordered `Vec` scanned linearly on every
/// `dequeue` and `find_open` (O(n) each); the closed set is a hash set.
/// Fine for small search spaces; use [`HeapQueue`](crate::HeapQueue) when the
/// frontier grows large.
#[derive(Clone, Debug, Default)]
pub struct LinearQueue {
    nodes: NodeArena,
    open: Vec<NodeId>,
    closed: FxHashSet<Key>,
}

impl LinearQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: Key) -> Option<usize> {
        self.open.iter().position(|&id| self.nodes[id].key == key)
    }
}

impl OpenClosedSet for LinearQueue {
    fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    fn enqueue(&mut self, node: SearchNode) -> NodeId {
        let id = self.nodes.insert(node);
        self.open.push(id);
        id
    }

    fn dequeue(&mut self) -> Option<NodeId> {
        let (&first, rest) = self.open.split_first()?;
        let mut index = 0;
        let mut min = self.nodes[first].total_cost();
        for (i, &id) in rest.iter().enumerate() {
            let f = self.nodes[id].total_cost();
            if f < min {
                index = i + 1;
                min = f;
            }
        }
        // `remove`, not `swap_remove`: the scan order is the tie-break order.
        Some(self.open.remove(index))
    }

    fn reparent(&mut self, id: NodeId, parent: NodeId, edge_cost: f32) {
        self.nodes.reparent(id, parent, edge_cost);
    }

    fn close(&mut self, key: Key) {
        self.closed.insert(key);
    }

    fn is_closed(&self, key: Key) -> bool {
        self.closed.contains(&key)
    }

    fn find_open(&self, key: Key) -> Option<NodeId> {
        self.position(key).map(|i| self.open[i])
    }

    fn len(&self) -> usize {
        self.open.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
    }
}
