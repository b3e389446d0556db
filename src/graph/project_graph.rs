//! Project dependency graph built from the inventory + petgraph
//!
//! ## Graph Structure
//!
//! - **Directed Graph**: `A → B` means "A depends on B"
//! - **Nodes**: every project in the inventory
//! - **Edges**: declared dependencies that resolve to another inventory
//!   project; identifiers with no match are external dependencies and are
//!   dropped (recorded as data-quality warnings, never errors)
//! - **Index**: identifier → node, because descriptor values carry no
//!   usable equality
//!
//! The graph is a pure function of one inventory snapshot and is immutable
//! once built. It is rebuilt per invocation; a cached graph would go stale
//! as soon as the host adds, removes, or re-parents a module.

use crate::inventory::ProjectInventory;
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// A dependency edge that could not be resolved inside the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEdge {
  /// Identifier of the declaring project
  pub from: String,
  /// The dependency identifier that did not resolve
  pub to: String,
}

/// Directed "depends on" graph over the project inventory.
pub struct ProjectGraph {
  /// Node weight is the project identifier; edges carry no payload
  graph: DiGraph<String, ()>,

  /// Index: identifier → node index
  id_to_node: HashMap<String, NodeIndex>,

  /// Declared dependencies that resolved to nothing in the inventory
  dropped_edges: Vec<DroppedEdge>,
}

impl ProjectGraph {
  /// Build the graph from an inventory snapshot.
  ///
  /// Total: never fails. Unresolvable dependency identifiers become
  /// dropped-edge records for the command layer to report.
  pub fn build(inventory: &ProjectInventory) -> Self {
    let mut graph = DiGraph::new();
    let mut id_to_node = HashMap::with_capacity(inventory.len());

    for project in inventory.projects() {
      let node_idx = graph.add_node(project.id.clone());
      id_to_node.insert(project.id.clone(), node_idx);
    }

    let mut dropped_edges = Vec::new();
    for project in inventory.projects() {
      let from_idx = id_to_node[&project.id];

      for dep in &project.dependencies {
        match id_to_node.get(dep) {
          Some(&to_idx) => {
            graph.add_edge(from_idx, to_idx, ());
          }
          None => dropped_edges.push(DroppedEdge {
            from: project.id.clone(),
            to: dep.clone(),
          }),
        }
      }
    }

    Self {
      graph,
      id_to_node,
      dropped_edges,
    }
  }

  /// Dependency identifiers that did not resolve inside the inventory
  pub fn dropped_edges(&self) -> &[DroppedEdge] {
    &self.dropped_edges
  }

  /// Number of nodes / edges, for diagnostics output
  pub fn counts(&self) -> (usize, usize) {
    (self.graph.node_count(), self.graph.edge_count())
  }

  /// Direct dependencies of a project (what it depends on).
  pub fn direct_dependencies(&self, id: &str) -> Vec<String> {
    self.neighbors(id, Direction::Outgoing)
  }

  /// Direct dependents of a project (what depends on it), the inverted
  /// edge direction view.
  pub fn direct_dependents(&self, id: &str) -> Vec<String> {
    self.neighbors(id, Direction::Incoming)
  }

  fn neighbors(&self, id: &str, direction: Direction) -> Vec<String> {
    let Some(&node_idx) = self.id_to_node.get(id) else {
      return Vec::new();
    };

    let mut neighbors: Vec<String> = self
      .graph
      .neighbors_directed(node_idx, direction)
      .map(|idx| self.graph[idx].clone())
      .collect();

    neighbors.sort();
    neighbors.dedup();
    neighbors
  }

  /// Everything reachable from the given seeds along "depends on" edges,
  /// seeds included (a node trivially reaches itself).
  ///
  /// Iterative DFS with a visited set: terminates on cyclic input and
  /// never recurses, so pathological graphs cannot blow the stack.
  pub fn reachable_from(&self, seeds: &[String]) -> HashSet<String> {
    let mut stack: Vec<NodeIndex> = seeds.iter().filter_map(|id| self.id_to_node.get(id).copied()).collect();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut reached = HashSet::new();

    while let Some(node_idx) = stack.pop() {
      if !visited.insert(node_idx) {
        continue;
      }
      reached.insert(self.graph[node_idx].clone());

      for neighbor_idx in self.graph.neighbors_directed(node_idx, Direction::Outgoing) {
        if !visited.contains(&neighbor_idx) {
          stack.push(neighbor_idx);
        }
      }
    }

    reached
  }

  /// Detect dependency cycles using Tarjan's SCC algorithm.
  ///
  /// Returns strongly connected components with size > 1. Cycles are a
  /// data-quality condition in the host model, not a failure: traversals
  /// stay cycle-safe, this just makes them visible.
  pub fn find_cycles(&self) -> Vec<Vec<String>> {
    let sccs = algo::tarjan_scc(&self.graph);

    sccs
      .into_iter()
      .filter(|component| component.len() > 1)
      .map(|component| {
        let mut cycle: Vec<String> = component.into_iter().map(|idx| self.graph[idx].clone()).collect();
        cycle.sort();
        cycle
      })
      .collect()
  }

  /// Export the graph in DOT format (Graphviz).
  pub fn to_dot(&self) -> String {
    use petgraph::dot::{Config, Dot};

    let dot = Dot::with_attr_getters(
      &self.graph,
      &[Config::EdgeNoLabel, Config::NodeNoLabel],
      &|_, _| String::new(),
      &|_, (_idx, id)| format!("label=\"{}\" shape=box", id),
    );

    format!("{:?}", dot)
  }
}
