//! Project descriptors and the workspace inventory
//!
//! A `Project` is one buildable unit of the host workspace: a unique
//! artifact identifier, an optional parent (aggregator) identifier, the
//! declared dependency identifiers, and the location of its build file.
//!
//! Identity is the identifier string. Host project models routinely hand
//! out multiple in-memory instances for the same module and do not
//! guarantee structural equality, so every set and map in this crate is
//! keyed by identifier, never by the descriptor value itself.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// One project descriptor from the host's project model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
  /// Unique artifact identifier (e.g. "runtimes.login")
  pub id: String,

  /// Human-readable display name, if the host provides one
  #[serde(default)]
  pub name: Option<String>,

  /// Identifier of the parent/aggregator project, absent for roots
  #[serde(default)]
  pub parent: Option<String>,

  /// Declared dependency identifiers. Identifiers that do not resolve to
  /// another project in the inventory are external dependencies and are
  /// ignored by subset resolution.
  #[serde(default)]
  pub dependencies: Vec<String>,

  /// Location of the project's build file
  pub file: PathBuf,
}

impl Project {
  /// Display name for UI output, falling back to the identifier
  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or(&self.id)
  }
}

/// The full ordered collection of known projects in the workspace.
///
/// Preserves the host's enumeration order: the unload list is emitted in
/// this order so output is stable across runs and diffable in logs.
#[derive(Debug)]
pub struct ProjectInventory {
  projects: Vec<Project>,
  index: HashMap<String, usize>,
  roots: HashSet<String>,
  ignored_files: Vec<PathBuf>,
}

impl ProjectInventory {
  /// Build an inventory from host-supplied descriptors.
  ///
  /// `roots` is the host's set of workspace root identifiers; when empty,
  /// roots are derived as projects with no parent or whose parent is
  /// outside the inventory. `ignored_files` is the host's current ignore
  /// list (used for force-refresh planning), possibly empty.
  ///
  /// Duplicate identifiers are first-wins; the dropped duplicates are
  /// returned so the caller can report them.
  pub fn new(projects: Vec<Project>, roots: Vec<String>, ignored_files: Vec<PathBuf>) -> (Self, Vec<String>) {
    let mut kept: Vec<Project> = Vec::with_capacity(projects.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(projects.len());
    let mut duplicates = Vec::new();

    for project in projects {
      if index.contains_key(&project.id) {
        duplicates.push(project.id);
        continue;
      }
      index.insert(project.id.clone(), kept.len());
      kept.push(project);
    }

    let roots: HashSet<String> = if roots.is_empty() {
      kept
        .iter()
        .filter(|p| match &p.parent {
          None => true,
          Some(parent) => !index.contains_key(parent),
        })
        .map(|p| p.id.clone())
        .collect()
    } else {
      roots.into_iter().filter(|id| index.contains_key(id)).collect()
    };

    (
      Self {
        projects: kept,
        index,
        roots,
        ignored_files,
      },
      duplicates,
    )
  }

  /// All projects, in the host's enumeration order
  pub fn projects(&self) -> &[Project] {
    &self.projects
  }

  /// Look up a project by identifier
  pub fn get(&self, id: &str) -> Option<&Project> {
    self.index.get(id).map(|&i| &self.projects[i])
  }

  /// Whether a project with this identifier exists
  pub fn contains(&self, id: &str) -> bool {
    self.index.contains_key(id)
  }

  /// Whether this identifier is a workspace root
  pub fn is_root(&self, id: &str) -> bool {
    self.roots.contains(id)
  }

  /// Workspace root identifiers, sorted for stable output
  pub fn roots(&self) -> Vec<&str> {
    let mut roots: Vec<&str> = self.roots.iter().map(String::as_str).collect();
    roots.sort_unstable();
    roots
  }

  /// File paths the host currently has marked as ignored
  pub fn ignored_files(&self) -> &[PathBuf] {
    &self.ignored_files
  }

  /// Number of projects in the inventory
  pub fn len(&self) -> usize {
    self.projects.len()
  }

  /// Whether the inventory is empty
  #[allow(dead_code)]
  pub fn is_empty(&self) -> bool {
    self.projects.is_empty()
  }
}
