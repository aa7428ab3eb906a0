//! Error types for skein traversals
//!
//! DFS and BFS are total and return plain results. Dijkstra returns a
//! `Result`: a negative edge weight is the one precondition violation the
//! engine can observe, and it fails fast rather than finalizing silently
//! wrong distances.

use thiserror::Error;

/// Errors that can occur during a traversal run
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeinError {
    /// A node was finalized at a smaller distance than an earlier one.
    /// With non-negative edge weights finalized distances never decrease,
    /// so this indicates a negative weight was fed to `look`.
    #[error("finalized distance decreased; an edge weight is negative")]
    NegativeWeight,
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;
