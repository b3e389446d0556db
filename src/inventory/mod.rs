//! Host project model: descriptors, inventory, snapshot loading
//!
//! - **project**: `Project` descriptors and the ordered `ProjectInventory`
//! - **snapshot**: JSON snapshot loading from the host environment

pub mod project;
pub mod snapshot;

pub use project::{Project, ProjectInventory};
