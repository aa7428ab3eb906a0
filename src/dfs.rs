//! Depth-first exploration with full edge classification
//!
//! The graph is never materialized: the visitor discovers edges by calling
//! [`DfsState::look`] on successors, and `look` recursively explores newly
//! discovered nodes before returning. Recursion depth equals graph depth, so
//! very deep discovery chains are bounded by the host stack.

use crate::types::{DfsEdge, DfsResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Per-node visit callback for DFS.
///
/// Invoked exactly once per node, in preorder, at the moment of first
/// discovery. The implementation requests further exploration by calling
/// `state.look(self, successor)`; the state handle also exposes the active
/// [`path`](DfsState::path), [`depth`](DfsState::depth) and
/// [`parent`](DfsState::parent) of the node being visited.
///
/// State and visitor are passed alternately down the call stack, which is
/// what makes the reentrant `visit -> look -> visit` protocol expressible
/// without shared mutable captures.
pub trait DfsVisitor<N> {
    fn visit(&mut self, state: &mut DfsState<N>, node: &N);
}

/// Mutable traversal state for one DFS run.
///
/// Owned by the driver; callbacks receive it as a borrowed handle and must
/// not retain it beyond their own dynamic extent.
#[derive(Debug)]
pub struct DfsState<N> {
    time: u64,
    enter_times: HashMap<N, u64>,
    exit_times: HashMap<N, u64>,
    path: Vec<N>,
}

impl<N> DfsState<N>
where
    N: Clone + Eq + Hash,
{
    fn new() -> Self {
        Self {
            time: 0,
            enter_times: HashMap::new(),
            exit_times: HashMap::new(),
            path: Vec::new(),
        }
    }

    /// Tell the search there is an edge from the current node to `node`,
    /// and classify that edge against the depth-first forest.
    ///
    /// On first discovery the node is entered, pushed onto the active path
    /// and visited synchronously; its entire subtree is explored before
    /// `look` returns `Tree`.
    pub fn look<V>(&mut self, visitor: &mut V, node: N) -> DfsEdge
    where
        V: DfsVisitor<N> + ?Sized,
    {
        if !self.enter_times.contains_key(&node) {
            self.enter_times.insert(node.clone(), self.time);
            self.time += 1;
            self.path.push(node.clone());
            visitor.visit(self, &node);
            self.path.pop();
            self.exit_times.insert(node, self.time);
            self.time += 1;
            return DfsEdge::Tree;
        }

        let Some(&exit) = self.exit_times.get(&node) else {
            // Entered but not finished: an ancestor on the active path,
            // or the node currently being visited.
            return DfsEdge::Back;
        };

        let crossed = self
            .path
            .last()
            .and_then(|top| self.enter_times.get(top))
            .is_some_and(|&top_enter| exit < top_enter);
        if crossed {
            DfsEdge::Cross
        } else {
            DfsEdge::Forward
        }
    }

    /// Nodes currently being explored, outermost first. Non-empty for the
    /// whole extent of a visit callback.
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Depth of the node currently being visited (path length minus one).
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The node that discovered the one currently being visited, if any.
    pub fn parent(&self) -> Option<&N> {
        self.path.len().checked_sub(2).map(|i| &self.path[i])
    }
}

/// Run a depth-first traversal.
///
/// `seed` is invoked once to register discovery roots via `look`; the
/// visitor is then driven recursively by the `look` calls it issues itself.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dfs<N, V, S>(seed: S, visitor: &mut V) -> DfsResult<N>
where
    N: Clone + Eq + Hash,
    V: DfsVisitor<N> + ?Sized,
    S: FnOnce(&mut DfsState<N>, &mut V),
{
    let mut state = DfsState::new();
    seed(&mut state, visitor);

    tracing::debug!(visited = state.enter_times.len(), "dfs complete");
    DfsResult {
        enter_times: state.enter_times,
        exit_times: state.exit_times,
    }
}

/// Depth-first traversal from a single start node.
pub fn dfs_from<N, V>(start: N, visitor: &mut V) -> DfsResult<N>
where
    N: Clone + Eq + Hash,
    V: DfsVisitor<N> + ?Sized,
{
    dfs(
        move |state, visitor| {
            state.look(visitor, start);
        },
        visitor,
    )
}
