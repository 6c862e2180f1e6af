//! Core directed-graph data model.
//!
//! Provides the graph type ([`graph::DiGraph`]): fixed vertex count, ordered
//! successor sets, an indegree table, idempotent edge insertion, and degree
//! queries. Traversal and ancestor queries live in the `digraph-nav` crate.

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::DiGraph;
