//! Directed graph over integer vertices with adjacency sets and degree tables.

use crate::error::GraphError;
use std::collections::BTreeSet;
use std::fmt;

/// A directed graph G = (V, E) over the vertex set `[0, vertex_count)`.
///
/// Vertices are implicit: any `usize` below the vertex count names a vertex,
/// and the vertex count is fixed at construction. Edges are stored as one
/// ordered successor set per vertex, with a parallel indegree table kept in
/// sync on every insertion. Insertion is idempotent — an edge is stored at
/// most once — and self-loops are allowed.
///
/// Successor sets are `BTreeSet`s, so adjacency iteration and the `Display`
/// dump are deterministic across runs.
///
/// The structure is a plain owned value: mutation goes through `&mut self`,
/// which rules out concurrent writers. Wrap it in a lock externally if
/// multi-threaded mutation is ever needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph {
    vertex_count: usize,
    edge_count: usize,
    /// `adjacency[i]` holds every `j` with an edge `i → j`.
    adjacency: Vec<BTreeSet<usize>>,
    /// `indegrees[j]` counts the distinct `i` with an edge `i → j`.
    indegrees: Vec<usize>,
}

impl DiGraph {
    /// Creates an empty graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            adjacency: vec![BTreeSet::new(); vertex_count],
            indegrees: vec![0; vertex_count],
        }
    }

    /// Creates an empty graph from a signed vertex count.
    ///
    /// Checked counterpart of [`DiGraph::new`] for counts coming from
    /// external input: a negative count is rejected with
    /// [`GraphError::InvalidVertexCount`]. A count of zero is valid and
    /// yields a graph with no valid vertices.
    pub fn try_with_vertices(count: i64) -> Result<Self, GraphError> {
        let vertex_count =
            usize::try_from(count).map_err(|_| GraphError::InvalidVertexCount(count))?;
        Ok(Self::new(vertex_count))
    }

    /// Returns true if `vertex` names a vertex of this graph.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Inserts the directed edge `source → target`.
    ///
    /// Returns `Ok(true)` when the edge was newly inserted, `Ok(false)` when
    /// it was already present (the call changes nothing), and
    /// `Err(GraphError::InvalidVertex)` when either endpoint is out of
    /// range (the graph is left untouched). Self-loops are accepted.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<bool, GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        if !self.adjacency[source].insert(target) {
            return Ok(false);
        }
        self.indegrees[target] += 1;
        self.edge_count += 1;
        Ok(true)
    }

    /// Returns true if the edge `source → target` is present.
    ///
    /// Out-of-range endpoints simply yield false: a vertex that does not
    /// exist has no edges.
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|successors| successors.contains(&target))
    }

    /// Returns the successors of `vertex` in ascending order.
    pub fn adjacent(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().copied())
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn outdegree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Returns the number of edges arriving at `vertex`.
    pub fn indegree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.indegrees[vertex])
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over all vertex indices, in order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        0..self.vertex_count
    }
}

impl fmt::Display for DiGraph {
    /// Diagnostic dump: a header with the vertex and edge counts, then one
    /// line per vertex listing its successors in ascending order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count, self.edge_count)?;
        for vertex in self.vertices() {
            write!(f, "{vertex}:")?;
            for successor in &self.adjacency[vertex] {
                write!(f, " {successor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
