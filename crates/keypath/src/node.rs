use std::ops::Index;

use crate::Key;

/// Handle to a [`SearchNode`] inside a [`NodeArena`].
///
/// Ids are handed out in creation order, so comparing two ids tells which
/// node was enqueued first. A handle is only meaningful for the arena that
/// produced it and only until that arena is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-key bookkeeping for one search run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub key: Key,
    /// Heuristic estimate from this node to the goal (h). Fixed at creation.
    pub estimate: f32,
    /// Accumulated cost from the start node along the parent chain (g).
    pub path_cost: f32,
    /// Previous step in the path; `None` for the start node.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// The start node of a run: no parent, zero accumulated cost.
    pub fn root(key: Key, estimate: f32) -> Self {
        Self {
            key,
            estimate,
            path_cost: 0.0,
            parent: None,
        }
    }

    /// A node discovered from `parent`, whose accumulated cost is
    /// `parent_cost`, over an edge costing `edge_cost`.
    pub fn child(key: Key, estimate: f32, parent: NodeId, parent_cost: f32, edge_cost: f32) -> Self {
        Self {
            key,
            estimate,
            path_cost: parent_cost + edge_cost,
            parent: Some(parent),
        }
    }

    /// f = h + g, the ordering key of the open set.
    #[inline]
    pub fn total_cost(&self) -> f32 {
        self.estimate + self.path_cost
    }
}

/// Owner of every [`SearchNode`] created during one search run.
///
/// Parent links are [`NodeId`]s into this arena, so tracing a path is an index
/// walk and nodes never outlive the run.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its handle.
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.index())
    }

    /// Point `id` at a new parent reached over `edge_cost`, recomputing its
    /// accumulated cost from the parent's.
    pub fn reparent(&mut self, id: NodeId, parent: NodeId, edge_cost: f32) {
        let parent_cost = self.nodes[parent.index()].path_cost;
        let node = &mut self.nodes[id.index()];
        node.parent = Some(parent);
        node.path_cost = parent_cost + edge_cost;
    }

    /// Keys from the root of `id`'s parent chain down to `id` itself.
    pub fn trace_path(&self, id: NodeId) -> Vec<Key> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self.nodes[ci.index()];
            path.push(node.key);
            cur = node.parent;
        }
        path.reverse();
        path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node, invalidating all outstanding ids.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_creation_order() {
        let mut arena = NodeArena::new();
        let a = arena.insert(SearchNode::root(1, 3.0));
        let b = arena.insert(SearchNode::child(2, 2.0, a, 0.0, 1.0));
        assert!(a < b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[b].parent, Some(a));
    }

    #[test]
    fn total_cost_is_estimate_plus_path_cost() {
        let n = SearchNode {
            key: 7,
            estimate: 4.0,
            path_cost: 2.5,
            parent: None,
        };
        assert_eq!(n.total_cost(), 6.5);
    }

    #[test]
    fn reparent_recomputes_path_cost() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root(0, 0.0));
        let far = arena.insert(SearchNode::child(1, 0.0, root, 0.0, 10.0));
        let near = arena.insert(SearchNode::child(2, 0.0, root, 0.0, 1.0));
        let target = arena.insert(SearchNode::child(3, 0.0, far, 10.0, 1.0));
        assert_eq!(arena[target].path_cost, 11.0);

        arena.reparent(target, near, 1.0);
        assert_eq!(arena[target].parent, Some(near));
        assert_eq!(arena[target].path_cost, 2.0);
        assert_eq!(arena.trace_path(target), vec![0, 2, 3]);
    }

    #[test]
    fn trace_root_is_single_key() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root(42, 0.0));
        assert_eq!(arena.trace_path(root), vec![42]);
    }

    #[test]
    fn clear_empties_arena() {
        let mut arena = NodeArena::new();
        let id = arena.insert(SearchNode::root(1, 0.0));
        arena.clear();
        assert!(arena.is_empty());
        assert!(arena.get(id).is_none());
    }

    #[test]
    fn ids_match_iteration_positions() {
        let mut arena = NodeArena::new();
        let ids: Vec<NodeId> = (0..5)
            .map(|k| arena.insert(SearchNode::root(k, 0.0)))
            .collect();
        for (i, (id, node)) in arena.iter().enumerate() {
            assert_eq!(id, ids[i]);
            assert_eq!(id.index(), i);
            assert_eq!(node.key, i as Key);
        }
    }
}
