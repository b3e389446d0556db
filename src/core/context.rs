//! Unified workspace context - build once, pass everywhere
//!
//! Loads the snapshot, builds the dependency graph, compiles the naming
//! conventions and reads subset.toml in one place, then passes by
//! reference to all commands.
//!
//! Built fresh per invocation by design: the closure is only correct for
//! the snapshot it was computed from, and modules can be added, removed
//! or re-parented between user actions.

use crate::core::config::SubsetConfig;
use crate::core::error::SubsetResult;
use crate::core::naming::NamingConvention;
use crate::graph::ProjectGraph;
use crate::inventory::{ProjectInventory, snapshot};
use std::path::Path;

/// Everything a command needs: the inventory snapshot, its dependency
/// graph, the compiled naming conventions, the configuration, and the
/// data-quality warnings gathered while loading.
pub struct WorkspaceContext {
  pub inventory: ProjectInventory,
  pub graph: ProjectGraph,
  pub naming: NamingConvention,
  pub config: SubsetConfig,
  pub warnings: Vec<String>,
}

impl WorkspaceContext {
  /// Build the context from a snapshot file and a config directory
  /// (usually the current directory).
  pub fn build(snapshot_path: &Path, config_dir: &Path) -> SubsetResult<Self> {
    let config = SubsetConfig::load(config_dir)?;
    let naming = NamingConvention::from_config(&config.naming)?;

    let loaded = snapshot::load(snapshot_path)?;
    let mut warnings = loaded.warnings;

    let graph = ProjectGraph::build(&loaded.inventory);
    for edge in graph.dropped_edges() {
      warnings.push(format!(
        "dependency '{}' of '{}' is not in the inventory, treating as external",
        edge.to, edge.from
      ));
    }

    Ok(Self {
      inventory: loaded.inventory,
      graph,
      naming,
      config,
      warnings,
    })
  }

  /// Print collected data-quality warnings to stderr.
  pub fn report_warnings(&self) {
    for warning in &self.warnings {
      eprintln!("Warning: {}", warning);
    }
  }
}
