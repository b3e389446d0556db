//! Workspace snapshot loading
//!
//! The host environment (IDE plugin, build-tool integration) exports its
//! in-memory project model as a JSON snapshot:
//!
//! ```json
//! {
//!   "roots": ["aggregator"],
//!   "ignored_files": ["runtimes.billing/pom.xml"],
//!   "projects": [
//!     { "id": "runtimes.login", "parent": "aggregator",
//!       "dependencies": ["libs.auth"], "file": "runtimes.login/pom.xml" }
//!   ]
//! }
//! ```
//!
//! `roots` and `ignored_files` are optional. The snapshot is read fresh on
//! every invocation; nothing is cached across runs because modules can be
//! added, removed, or re-parented between user actions.

use crate::core::error::{ResultExt, SnapshotError, SubsetError, SubsetResult};
use crate::inventory::project::{Project, ProjectInventory};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Snapshot {
  #[serde(default)]
  roots: Vec<String>,

  #[serde(default)]
  ignored_files: Vec<PathBuf>,

  projects: Vec<Project>,
}

/// A loaded snapshot: the inventory plus the data-quality warnings
/// encountered while reading it.
#[derive(Debug)]
pub struct LoadedSnapshot {
  pub inventory: ProjectInventory,
  pub warnings: Vec<String>,
}

/// Load a workspace snapshot from a JSON file.
pub fn load(path: &Path) -> SubsetResult<LoadedSnapshot> {
  if !path.exists() {
    return Err(SubsetError::Snapshot(SnapshotError::NotFound {
      path: path.to_path_buf(),
    }));
  }

  let content = fs::read_to_string(path).context("Failed to read workspace snapshot")?;
  parse(&content).map_err(|message| {
    SubsetError::Snapshot(SnapshotError::Parse {
      path: path.to_path_buf(),
      message,
    })
  })
}

fn parse(content: &str) -> Result<LoadedSnapshot, String> {
  let snapshot: Snapshot = serde_json::from_str(content).map_err(|e| e.to_string())?;

  let (inventory, duplicates) = ProjectInventory::new(snapshot.projects, snapshot.roots, snapshot.ignored_files);

  let warnings = duplicates
    .into_iter()
    .map(|id| format!("duplicate project identifier '{}' in snapshot, keeping the first occurrence", id))
    .collect();

  Ok(LoadedSnapshot { inventory, warnings })
}
