use serde::Serialize;
use std::collections::HashMap;

/// Classification of a discovered edge relative to the depth-first forest.
///
/// Returned by [`DfsState::look`](crate::dfs::DfsState::look); the edge itself
/// is never stored, it exists only as "the current node looked at this node".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEdge {
    /// First discovery of the target; its subtree is explored before
    /// `look` returns.
    Tree,
    /// Target is still on the active path (an ancestor or the current node).
    Back,
    /// Target is finished and belongs to an earlier, disjoint subtree.
    Cross,
    /// Target is finished and was reached through an already-explored branch.
    Forward,
}

/// Classification of a discovered edge relative to BFS layering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BfsEdge {
    /// First discovery; the target is assigned the next layer and enqueued.
    Tree,
    /// Target was already discovered at exactly the next layer: a legitimate
    /// cross-edge between consecutive layers.
    Tight,
    /// Target was already discovered at the current layer or an earlier one.
    Loose,
}

/// Completed discovery/finish orders of a DFS run.
///
/// Every visited node has one entry in each map; `exit_times[n]` is always
/// greater than `enter_times[n]`, and any two nodes' intervals are either
/// nested or disjoint.
#[derive(Debug, Clone, Serialize)]
pub struct DfsResult<N>
where
    N: Eq + std::hash::Hash,
{
    /// Sequence number assigned the first time each node was looked at.
    pub enter_times: HashMap<N, u64>,
    /// Sequence number assigned when each node's exploration completed.
    pub exit_times: HashMap<N, u64>,
}

/// Layer of every node discovered by a BFS run. Seed nodes have depth 0.
pub type BfsResult<N> = HashMap<N, u32>;

/// Finalized distance of every node reached by a Dijkstra run.
pub type DijkstraResult<N, D> = HashMap<N, D>;
