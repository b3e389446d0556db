//! Graph-aware subset analysis
//!
//! Built on petgraph over the host's project inventory: the "depends on"
//! graph, the reverse transitive closure, and the ancestor re-inclusion
//! that together decide which modules stay loaded.

pub mod closure;
pub mod project_graph;

pub use closure::{ClosureResult, Selection};
pub use project_graph::ProjectGraph;
