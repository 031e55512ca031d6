//! Search nodes, the arena that owns them, and path reconstruction.
//!
//! Children hold a back-reference to their parent, so the discovered nodes
//! form a tree rooted at the initial state. The tree is realized as an arena
//! (`Vec`) with index parent links; the whole arena is dropped together once
//! reconstruction is done.

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One discovered step of a path.
///
/// Invariants (maintained by [`Node::child`]):
/// `child.depth = parent.depth + 1` and
/// `child.cost = parent.cost + action.cost`.
#[derive(Debug, Clone)]
pub struct Node<S> {
    /// Caller-owned state payload.
    pub data: S,
    /// Cumulative path cost from the root.
    pub cost: f64,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Back-reference to the parent (`None` for the root).
    pub parent: Option<NodeId>,
    /// Name of the action that produced this node (`None` for the root).
    pub action: Option<String>,
    /// Whether the payload is a member of the goal set.
    pub is_goal: bool,
}

impl<S> Node<S> {
    /// The root node: zero cost, zero depth, no parent, no action.
    pub fn root(data: S, is_goal: bool) -> Self {
        Self {
            data,
            cost: 0.0,
            depth: 0,
            parent: None,
            action: None,
            is_goal,
        }
    }

    /// A child of `parent`, one level deeper and one action-cost dearer.
    pub fn child(
        parent_id: NodeId,
        parent: &Node<S>,
        data: S,
        action: &str,
        action_cost: f64,
        is_goal: bool,
    ) -> Self {
        Self {
            data,
            cost: parent.cost + action_cost,
            depth: parent.depth + 1,
            parent: Some(parent_id),
            action: Some(action.to_string()),
            is_goal,
        }
    }
}

/// Growable store owning every node discovered during one search.
#[derive(Debug)]
pub(crate) struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node<S>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }
}

/// One emitted element of a reconstructed path.
///
/// Internal bookkeeping (`parent`, `is_goal`) is stripped; only the root
/// element lacks an `action`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep<S> {
    pub data: S,
    pub cost: f64,
    pub depth: u32,
    pub action: Option<String>,
}

/// Walk parent links from `terminal` back to the root, producing the path
/// ordered from initial state to goal.
///
/// Never mutates the node tree; calling it twice on the same terminal yields
/// structurally identical sequences.
pub(crate) fn reconstruct<S: Clone>(arena: &NodeArena<S>, terminal: NodeId) -> Vec<PathStep<S>> {
    let mut path = Vec::new();
    let mut current = Some(terminal);
    while let Some(id) = current {
        let node = arena.get(id);
        path.push(PathStep {
            data: node.data.clone(),
            cost: node.cost,
            depth: node.depth,
            action: node.action.clone(),
        });
        current = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_tree() -> (NodeArena<u32>, NodeId) {
        let mut arena = NodeArena::new();
        let root_id = arena.push(Node::root(0, false));
        let mid = Node::child(root_id, arena.get(root_id), 1, "step", 2.5, false);
        let mid_id = arena.push(mid);
        let leaf = Node::child(mid_id, arena.get(mid_id), 2, "jump", 1.0, true);
        let leaf_id = arena.push(leaf);
        (arena, leaf_id)
    }

    #[test]
    fn child_accumulates_cost_and_depth() {
        let (arena, leaf_id) = tiny_tree();
        let leaf = arena.get(leaf_id);
        assert_eq!(leaf.depth, 2);
        assert!((leaf.cost - 3.5).abs() < f64::EPSILON);
        assert_eq!(leaf.parent, Some(NodeId(1)));
    }

    #[test]
    fn reconstruct_orders_initial_to_goal_and_strips_bookkeeping() {
        let (arena, leaf_id) = tiny_tree();
        let path = reconstruct(&arena, leaf_id);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].data, 0);
        assert_eq!(path[0].action, None, "root step carries no action");
        assert_eq!(path[1].action.as_deref(), Some("step"));
        assert_eq!(path[2].action.as_deref(), Some("jump"));
        assert_eq!(path[2].depth, 2);
    }

    #[test]
    fn reconstruct_is_idempotent() {
        let (arena, leaf_id) = tiny_tree();
        assert_eq!(reconstruct(&arena, leaf_id), reconstruct(&arena, leaf_id));
    }

    #[test]
    fn shared_parent_supports_multiple_children() {
        let mut arena = NodeArena::new();
        let root_id = arena.push(Node::root(0, false));
        let a = arena.push(Node::child(root_id, arena.get(root_id), 1, "a", 1.0, false));
        let b = arena.push(Node::child(root_id, arena.get(root_id), 2, "b", 1.0, false));
        assert_eq!(arena.get(a).parent, Some(root_id));
        assert_eq!(arena.get(b).parent, Some(root_id));
    }
}
