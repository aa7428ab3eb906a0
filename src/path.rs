//! Point-to-point shortest paths built on the traversal engines
//!
//! These helpers are ordinary engine consumers: they track predecessors from
//! inside the visit callbacks, stop expanding once the target is visited
//! (by simply not issuing further `look` calls), and walk the predecessor
//! map back to reconstruct the route.

use crate::bfs::bfs;
use crate::dijkstra::dijkstra;
use crate::error::Result;
use crate::types::BfsEdge;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

/// Shortest path by hop count between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<N> {
    pub from: N,
    pub to: N,
    pub found: bool,
    /// Nodes along the route, `from` first; empty when not found.
    pub path: Vec<N>,
    pub hops: usize,
}

/// Shortest path by accumulated weight between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedPathResult<N, D> {
    pub from: N,
    pub to: N,
    pub found: bool,
    /// Nodes along the route, `from` first; empty when not found.
    pub path: Vec<N>,
    pub cost: Option<D>,
}

fn walk_back<N>(from: &N, to: &N, predecessors: &HashMap<N, N>) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    let mut path = vec![to.clone()];
    let mut current = to.clone();
    while current != *from {
        let Some(pred) = predecessors.get(&current) else {
            break;
        };
        current = pred.clone();
        path.push(current.clone());
    }
    path.reverse();
    path
}

/// Find a shortest path from `from` to `to` by edge count.
///
/// `successors` lists the out-neighbors of a node; it is only consulted for
/// nodes closer to `from` than `to` is.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bfs_path<N, F, I>(from: N, to: N, mut successors: F) -> PathResult<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut found = false;
    bfs(
        |state| {
            state.look(from.clone());
        },
        |state, node| {
            if *node == to {
                found = true;
            }
            if found {
                return;
            }
            for next in successors(node) {
                if state.look(next.clone()) == BfsEdge::Tree {
                    predecessors.insert(next, node.clone());
                }
            }
        },
    );

    let path = if found {
        walk_back(&from, &to, &predecessors)
    } else {
        Vec::new()
    };
    let hops = path.len().saturating_sub(1);
    PathResult {
        from,
        to,
        found,
        path,
        hops,
    }
}

/// Find a minimum-weight path from `from` to `to`.
///
/// `successors` lists `(neighbor, edge weight)` pairs; `D::default()` is
/// taken as the zero distance for the start node. Weights must be
/// non-negative; a negative weight fails the run fast.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dijkstra_path<N, D, F, I>(from: N, to: N, mut successors: F) -> Result<WeightedPathResult<N, D>>
where
    N: Clone + Eq + Hash,
    D: Copy + PartialOrd + Add<Output = D> + Default,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, D)>,
{
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut found = false;
    let distances = dijkstra(
        |state| {
            state.look(from.clone(), D::default());
        },
        |state, node, dist| {
            if let Some(parent) = state.parent() {
                predecessors.insert(node.clone(), parent.clone());
            }
            if *node == to {
                found = true;
            }
            if found {
                return;
            }
            for (next, weight) in successors(node) {
                state.look(next, dist + weight);
            }
        },
    )?;

    let cost = distances.get(&to).copied();
    let path = if found {
        walk_back(&from, &to, &predecessors)
    } else {
        Vec::new()
    };
    Ok(WeightedPathResult {
        from,
        to,
        found,
        path,
        cost,
    })
}
