//! Subset plans: the partition of the inventory plus the apply actions
//!
//! Every resolution produces a `SubsetPlan` rather than mutating anything:
//! the set of modules to keep, the complement to unload, and the
//! sink-facing actions for the chosen apply strategy. Plans are
//! JSON-serializable for logging, review, and consumption by the host's
//! apply integration, and carry a content-hash id so identical inputs are
//! recognizably identical outputs.
//!
//! The module set is computed identically for both strategies; only the
//! sink-facing representation differs.

use crate::graph::ClosureResult;
use crate::inventory::{Project, ProjectInventory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Plan identifier (SHA256 hash of the plan's semantic contents)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
  /// Create a plan ID from plan contents
  pub fn from_contents(contents: &[u8]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    Self(format!("{:x}", result))
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for PlanId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}

/// How the host should apply the unload list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyStrategy {
  /// Interpret the unload list as module identifiers to deactivate in the
  /// IDE's module manager
  ModuleUnload,

  /// Interpret the unload list as build-file paths to mark ignored in the
  /// build-tool integration
  #[default]
  IgnoreFiles,
}

impl ApplyStrategy {
  /// Parse a strategy name from CLI/config input
  pub fn parse(s: &str) -> Result<Self, String> {
    match s.to_lowercase().as_str() {
      "module-unload" | "unload" => Ok(Self::ModuleUnload),
      "ignore-files" | "ignore" => Ok(Self::IgnoreFiles),
      _ => Err(s.to_string()),
    }
  }
}

impl fmt::Display for ApplyStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApplyStrategy::ModuleUnload => write!(f, "module-unload"),
      ApplyStrategy::IgnoreFiles => write!(f, "ignore-files"),
    }
  }
}

/// One sink-facing action for the host to perform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApplyAction {
  /// Replace the set of unloaded modules with these identifiers
  UnloadModules { modules: Vec<String> },

  /// Replace the set of ignored build files with these paths
  IgnoreFiles { paths: Vec<PathBuf> },

  /// Re-sync these previously-ignored modules that are now kept
  ForceRefresh { modules: Vec<String> },
}

/// The result of one subset resolution, ready for the apply sink.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubsetPlan {
  /// Content hash over seed, strategy, keep, unload and actions
  pub id: PlanId,

  /// When the plan was computed
  pub created_at: DateTime<Utc>,

  /// The seed module, absent for reset plans
  pub seed: Option<String>,

  pub strategy: ApplyStrategy,

  /// Modules that remain active, sorted for stable output
  pub keep: Vec<String>,

  /// Modules to unload, in the inventory's enumeration order
  pub unload: Vec<String>,

  pub actions: Vec<ApplyAction>,
}

impl SubsetPlan {
  fn seal(
    seed: Option<String>,
    strategy: ApplyStrategy,
    keep: Vec<String>,
    unload: Vec<String>,
    actions: Vec<ApplyAction>,
  ) -> Self {
    // The id covers semantic content only; created_at changes per run
    let fingerprint = serde_json::json!({
      "seed": &seed,
      "strategy": strategy,
      "keep": &keep,
      "unload": &unload,
      "actions": &actions,
    });
    let id = PlanId::from_contents(fingerprint.to_string().as_bytes());

    Self {
      id,
      created_at: Utc::now(),
      seed,
      strategy,
      keep,
      unload,
      actions,
    }
  }
}

/// Options controlling plan construction, injected by the caller.
///
/// Always explicit configuration, never ambient process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
  pub strategy: ApplyStrategy,

  /// In ignore-files mode, also emit a ForceRefresh action for modules
  /// whose files were ignored before this plan but are kept by it
  pub force_refresh_on_unignore: bool,
}

/// Diff the inventory against a closure into keep/unload and the apply
/// actions for the chosen strategy.
pub fn plan(inventory: &ProjectInventory, closure: &ClosureResult, options: PlanOptions) -> SubsetPlan {
  let mut keep: Vec<String> = closure.kept.iter().cloned().collect();
  keep.sort();

  let unloaded: Vec<&Project> = inventory
    .projects()
    .iter()
    .filter(|p| !closure.kept.contains(&p.id))
    .collect();
  let unload: Vec<String> = unloaded.iter().map(|p| p.id.clone()).collect();

  let actions = match options.strategy {
    ApplyStrategy::ModuleUnload => vec![ApplyAction::UnloadModules { modules: unload.clone() }],
    ApplyStrategy::IgnoreFiles => {
      let mut actions = vec![ApplyAction::IgnoreFiles {
        paths: unloaded.iter().map(|p| p.file.clone()).collect(),
      }];

      if options.force_refresh_on_unignore {
        let refresh = kept_previously_ignored(inventory, &closure.kept);
        if !refresh.is_empty() {
          actions.push(ApplyAction::ForceRefresh { modules: refresh });
        }
      }

      actions
    }
  };

  SubsetPlan::seal(closure.seeds.first().cloned(), options.strategy, keep, unload, actions)
}

/// The plan that restores the default state: nothing unloaded, nothing
/// ignored. In ignore-files mode the previously-ignored modules come back
/// into the build and are re-synced.
pub fn plan_reset(inventory: &ProjectInventory, strategy: ApplyStrategy) -> SubsetPlan {
  let mut keep: Vec<String> = inventory.projects().iter().map(|p| p.id.clone()).collect();
  keep.sort();

  let actions = match strategy {
    ApplyStrategy::ModuleUnload => vec![ApplyAction::UnloadModules { modules: vec![] }],
    ApplyStrategy::IgnoreFiles => {
      let all: HashSet<String> = inventory.projects().iter().map(|p| p.id.clone()).collect();
      let mut actions = vec![ApplyAction::IgnoreFiles { paths: vec![] }];

      let refresh = kept_previously_ignored(inventory, &all);
      if !refresh.is_empty() {
        actions.push(ApplyAction::ForceRefresh { modules: refresh });
      }

      actions
    }
  };

  SubsetPlan::seal(None, strategy, keep, vec![], actions)
}

/// Modules in `kept` whose build file is on the host's current ignore
/// list, in inventory order.
fn kept_previously_ignored(inventory: &ProjectInventory, kept: &HashSet<String>) -> Vec<String> {
  let ignored: HashSet<&PathBuf> = inventory.ignored_files().iter().collect();
  if ignored.is_empty() {
    return vec![];
  }

  inventory
    .projects()
    .iter()
    .filter(|p| kept.contains(&p.id) && ignored.contains(&p.file))
    .map(|p| p.id.clone())
    .collect()
}
