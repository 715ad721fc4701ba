//! Search nodes, frontier ordering keys, and the path arena.

/// An immutable node in the frontier.
///
/// The action path is not stored on the node; it is reconstructed from the
/// [`PathArena`] via `node_id` when a goal is popped.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Monotonic identifier; also the node's index in the [`PathArena`].
    pub node_id: u64,
    /// The state this node reaches.
    pub state: S,
    /// Number of actions from the root (root = 0).
    pub depth: u32,
    /// Accumulated path cost.
    pub g_cost: i64,
    /// Heuristic estimate (0 for strategies that take no heuristic).
    pub h_cost: i64,
}

impl<S> SearchNode<S> {
    /// The start node: empty path, zero cost.
    #[must_use]
    pub fn root(node_id: u64, state: S) -> Self {
        Self {
            node_id,
            state,
            depth: 0,
            g_cost: 0,
            h_cost: 0,
        }
    }
}

/// Priority-mode ordering key: `(priority, insertion_order)`.
///
/// Lower priority first; equal priorities pop in push order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: i64,
    pub insertion_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

#[derive(Debug, Clone)]
struct PathLink<A> {
    parent_id: Option<u64>,
    action: Option<A>,
}

/// Parent links for every node created in one search invocation.
///
/// Node IDs are dense indices into the arena, assigned in creation order.
#[derive(Debug, Clone)]
pub struct PathArena<A> {
    links: Vec<PathLink<A>>,
}

impl<A: Clone> PathArena<A> {
    #[must_use]
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Register the root node and return its ID.
    pub fn push_root(&mut self) -> u64 {
        self.push(PathLink {
            parent_id: None,
            action: None,
        })
    }

    /// Register a child reached from `parent_id` by `action`.
    pub fn push_child(&mut self, parent_id: u64, action: A) -> u64 {
        self.push(PathLink {
            parent_id: Some(parent_id),
            action: Some(action),
        })
    }

    /// Reconstruct the actions from the root to `node_id`, root first.
    ///
    /// Unknown IDs yield an empty path.
    #[must_use]
    pub fn actions_to(&self, node_id: u64) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = Some(node_id);

        while let Some(id) = current {
            let Some(link) = usize::try_from(id).ok().and_then(|i| self.links.get(i)) else {
                break;
            };
            if let Some(action) = &link.action {
                actions.push(action.clone());
            }
            current = link.parent_id;
        }

        actions.reverse();
        actions
    }

    fn push(&mut self, link: PathLink<A>) -> u64 {
        let id = self.links.len() as u64;
        self.links.push(link);
        id
    }
}

impl<A: Clone> Default for PathArena<A> {
    fn default() -> Self {
        Self::new()
    }
}
