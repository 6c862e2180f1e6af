//! BFS traversal along graph edges, forwards or in reverse.

use digraph_core::{DiGraph, GraphError};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges as stored (source → target): descendants.
    Downstream,
    /// Follow edges in reverse (target → source): ancestors.
    Upstream,
}

/// Neighbor lists for the chosen direction, built once per traversal.
///
/// The graph only stores successor sets, so upstream walks need the
/// transpose; one O(V + E) scan up front instead of a scan per dequeued
/// vertex.
fn neighbor_lists(graph: &DiGraph, direction: Direction) -> Vec<Vec<usize>> {
    let mut lists = vec![Vec::new(); graph.vertex_count()];
    for source in graph.vertices() {
        // Vertex indices from vertices() are always in range.
        for target in graph.adjacent(source).unwrap() {
            match direction {
                Direction::Downstream => lists[source].push(target),
                Direction::Upstream => lists[target].push(source),
            }
        }
    }
    lists
}

/// Computes shortest-hop distances from `start` to every reachable vertex.
///
/// BFS from `start` along `direction`; the result maps each reachable
/// vertex to its hop count, with `start` itself at distance 0. Terminates
/// on cyclic graphs — each vertex is enqueued at most once.
pub fn distances(
    graph: &DiGraph,
    start: usize,
    direction: Direction,
) -> Result<HashMap<usize, usize>, GraphError> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidVertex {
            vertex: start,
            vertex_count: graph.vertex_count(),
        });
    }

    let neighbors = neighbor_lists(graph, direction);

    let mut dist = HashMap::new();
    dist.insert(start, 0);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        let depth = dist[&vertex];
        for &neighbor in &neighbors[vertex] {
            if !dist.contains_key(&neighbor) {
                dist.insert(neighbor, depth + 1);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(
        start,
        ?direction,
        reached = dist.len(),
        "BFS traversal complete"
    );
    Ok(dist)
}

/// Computes the set of vertices reachable from `start` along `direction`.
///
/// `start` is always a member of its own reachable set. With
/// [`Direction::Upstream`] this is the ancestor set of `start`: every
/// vertex from which `start` can be reached via zero or more edges. On
/// cyclic graphs that includes vertices reachable through a cycle back to
/// `start`.
pub fn reachable(
    graph: &DiGraph,
    start: usize,
    direction: Direction,
) -> Result<BTreeSet<usize>, GraphError> {
    Ok(distances(graph, start, direction)?.into_keys().collect())
}
