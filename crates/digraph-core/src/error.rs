//! Typed errors for graph construction and queries.

/// Errors from graph construction and vertex-indexed operations.
///
/// Every fallible operation reports through this enum instead of the
/// sentinel values (`-1`, null) common in textbook adjacency-list code;
/// failed calls leave the graph unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid vertex count: {0} (must be non-negative)")]
    InvalidVertexCount(i64),
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },
}
