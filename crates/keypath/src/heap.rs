use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::Key;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::queue::OpenClosedSet;

/// Open/closed set backed by an indexed binary min-heap.
///
/// A key→slot map gives O(1) `find_open` and lets `reparent` restore heap
/// order in O(log n). Nodes are ordered by `(total_cost, NodeId)`, and ids
/// follow enqueue order, so ties break exactly like [`LinearQueue`]:
/// both strategies return identical paths for identical inputs.
///
/// [`LinearQueue`]: crate::LinearQueue
#[derive(Clone, Debug, Default)]
pub struct HeapQueue {
    nodes: NodeArena,
    heap: Vec<NodeId>,
    slots: FxHashMap<Key, usize>,
    closed: FxHashSet<Key>,
}

impl HeapQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `a` must be popped before `b`.
    fn precedes(&self, a: NodeId, b: NodeId) -> bool {
        let fa = self.nodes[a].total_cost();
        let fb = self.nodes[b].total_cost();
        match fa.partial_cmp(&fb) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            // Equal (or unordered NaN): older node first.
            _ => a < b,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots.insert(self.nodes[self.heap[i]].key, i);
        self.slots.insert(self.nodes[self.heap[j]].key, j);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(self.heap[pos], self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.precedes(self.heap[right], self.heap[left]) {
                best = right;
            }
            if !self.precedes(self.heap[best], self.heap[pos]) {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

impl OpenClosedSet for HeapQueue {
    fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    fn enqueue(&mut self, node: SearchNode) -> NodeId {
        let key = node.key;
        let id = self.nodes.insert(node);
        let pos = self.heap.len();
        self.heap.push(id);
        self.slots.insert(key, pos);
        self.sift_up(pos);
        id
    }

    fn dequeue(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        self.slots.remove(&self.nodes[top].key);
        if let Some(&moved) = self.heap.first() {
            self.slots.insert(self.nodes[moved].key, 0);
            self.sift_down(0);
        }
        Some(top)
    }

    fn reparent(&mut self, id: NodeId, parent: NodeId, edge_cost: f32) {
        self.nodes.reparent(id, parent, edge_cost);
        if let Some(&slot) = self.slots.get(&self.nodes[id].key) {
            let slot = self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    fn close(&mut self, key: Key) {
        self.closed.insert(key);
    }

    fn is_closed(&self, key: Key) -> bool {
        self.closed.contains(&key)
    }

    fn find_open(&self, key: Key) -> Option<NodeId> {
        self.slots.get(&key).map(|&slot| self.heap[slot])
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.heap.clear();
        self.slots.clear();
        self.closed.clear();
    }
}
