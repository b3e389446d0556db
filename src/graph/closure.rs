//! Subset closure resolution
//!
//! Given one seed module, compute every module that must remain loaded to
//! build and test it:
//!
//! 1. Companion expansion: the seed's `.api` and `.web` submodules are
//!    always pulled in when present
//! 2. Facet expansion: the API-test / Selenium-test companions, only when
//!    requested and only for runtime-family seeds
//! 3. Dependency closure: everything any expanded seed depends on,
//!    directly or transitively
//! 4. Ancestor re-inclusion: the parent/aggregator chain of every kept
//!    module up to its workspace root; hierarchical build tools need the
//!    aggregator build files present even when their sources are excluded
//!
//! The resolver is a pure function of one inventory snapshot; the only
//! failure mode is a seed that is not in the inventory.

use crate::core::error::{SubsetError, SubsetResult};
use crate::core::naming::NamingConvention;
use crate::graph::project_graph::ProjectGraph;
use crate::inventory::ProjectInventory;
use std::collections::HashSet;

/// The user's selection: one seed module plus the two facet toggles.
#[derive(Debug, Clone)]
pub struct Selection {
  pub seed: String,
  pub api_tests: bool,
  pub selenium_tests: bool,
}

/// The resolved closure: everything that must remain active.
#[derive(Debug)]
pub struct ClosureResult {
  /// Identifiers of all modules to keep. Always a superset of the seeds,
  /// closed under "depends on" and under the ancestor-chain relation.
  pub kept: HashSet<String>,

  /// The expanded seed list in expansion order (seed, then submodule
  /// companions, then facet companions) for deterministic logging
  pub seeds: Vec<String>,

  /// Facet companions that were requested but absent from the inventory.
  /// Not an error: large workspaces routinely have partial test coverage.
  pub missing_companions: Vec<String>,
}

/// Resolve the keep-closure for a selection.
///
/// Fails only with `InvalidSelection` when the seed is not in the
/// inventory; every other irregularity (missing companions, unresolvable
/// dependencies, cycles) degrades gracefully.
pub fn resolve(
  inventory: &ProjectInventory,
  graph: &ProjectGraph,
  naming: &NamingConvention,
  selection: &Selection,
) -> SubsetResult<ClosureResult> {
  if !inventory.contains(&selection.seed) {
    return Err(SubsetError::InvalidSelection {
      id: selection.seed.clone(),
    });
  }

  let mut seeds = vec![selection.seed.clone()];
  let mut missing_companions = Vec::new();

  // Submodule companions are always pulled in when present
  for companion in [naming.api_submodule(&selection.seed), naming.web_submodule(&selection.seed)] {
    if inventory.contains(&companion) {
      seeds.push(companion);
    }
  }

  // Facet expansion only applies to the runtime family; test-only seeds
  // from the allow-list have no test companions to look for
  if let Some(base) = naming.runtime_base(&selection.seed) {
    if selection.api_tests {
      add_facet(inventory, naming.api_test_module(base), &mut seeds, &mut missing_companions);
    }
    if selection.selenium_tests {
      add_facet(inventory, naming.selenium_test_module(base), &mut seeds, &mut missing_companions);
    }
  }

  let mut kept = graph.reachable_from(&seeds);

  // Re-attach each kept module's aggregator chain. The visited set is
  // shared across chains: once a parent is recorded, the rest of its own
  // chain was already walked, and self-referential parent links terminate.
  let mut ancestors: HashSet<String> = HashSet::new();
  for id in &kept {
    let mut parent_id = inventory.get(id).and_then(|p| p.parent.clone());

    while let Some(current) = parent_id {
      let Some(parent) = inventory.get(&current) else {
        break;
      };
      if !ancestors.insert(parent.id.clone()) {
        break;
      }
      if inventory.is_root(&parent.id) {
        break;
      }
      parent_id = parent.parent.clone();
    }
  }
  kept.extend(ancestors);

  Ok(ClosureResult {
    kept,
    seeds,
    missing_companions,
  })
}

fn add_facet(inventory: &ProjectInventory, id: String, seeds: &mut Vec<String>, missing: &mut Vec<String>) {
  if inventory.contains(&id) {
    seeds.push(id);
  } else {
    missing.push(id);
  }
}
