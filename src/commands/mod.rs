//! CLI commands for workspace-subset
//!
//! - **candidates**: list modules selectable as seeds, with facet columns
//! - **resolve**: compute the keep/unload plan for one seed
//! - **reset**: plan the return to the fully loaded workspace
//! - **graph**: inspect the dependency graph (counts, cycles, DOT)
//!
//! All commands accept `&WorkspaceContext` built once in main.

pub mod candidates;
pub mod graph;
pub mod reset;
pub mod resolve;

pub use candidates::run_candidates;
pub use graph::run_graph;
pub use reset::run_reset;
pub use resolve::run_resolve;
