//! Lowest common ancestor queries on general directed graphs.
//!
//! An ancestor of `v` is any vertex from which `v` is reachable via zero or
//! more directed edges; every vertex is its own ancestor. The lowest common
//! ancestor of two vertices is the common ancestor minimizing the summed
//! shortest-path distance to both, which matches the usual LCA definition
//! on DAGs while staying well-defined on cyclic and disconnected graphs.

use crate::traverse::{Direction, distances};
use digraph_core::{DiGraph, GraphError};

/// Finds the lowest common ancestor of `a` and `b`.
///
/// Runs one upstream BFS per query vertex, intersects the two ancestor
/// sets, and picks the common ancestor with the smallest
/// `dist(·, a) + dist(·, b)`, breaking ties by smallest vertex id so the
/// answer is deterministic. Returns `Ok(None)` when the vertices share no
/// ancestor (disconnected in the ancestor direction) and
/// `Err(GraphError::InvalidVertex)` when either vertex is out of range.
///
/// O(V + E) per query: two reverse BFS traversals plus an intersection
/// over the smaller ancestor set.
pub fn lowest_common_ancestor(
    graph: &DiGraph,
    a: usize,
    b: usize,
) -> Result<Option<usize>, GraphError> {
    let to_a = distances(graph, a, Direction::Upstream)?;
    let to_b = distances(graph, b, Direction::Upstream)?;

    // Iterate the smaller map; probe the larger.
    let (small, large) = if to_a.len() <= to_b.len() {
        (&to_a, &to_b)
    } else {
        (&to_b, &to_a)
    };

    let mut best: Option<(usize, usize)> = None; // (total distance, vertex)
    for (&ancestor, &d_small) in small {
        if let Some(&d_large) = large.get(&ancestor) {
            let candidate = (d_small + d_large, ancestor);
            if best.is_none_or(|current| candidate < current) {
                best = Some(candidate);
            }
        }
    }

    tracing::debug!(
        a,
        b,
        ancestors_a = to_a.len(),
        ancestors_b = to_b.len(),
        lca = ?best.map(|(_, vertex)| vertex),
        "LCA query complete"
    );
    Ok(best.map(|(_, vertex)| vertex))
}
