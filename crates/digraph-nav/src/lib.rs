//! Navigation queries over `digraph-core` graphs.
//!
//! Provides BFS reachability and shortest-hop distance maps in both edge
//! directions ([`traverse`]), and the lowest-common-ancestor query built on
//! top of them ([`lca`]).

pub mod lca;
pub mod traverse;

pub use lca::lowest_common_ancestor;
pub use traverse::{Direction, distances, reachable};
