//! `workspace-subset graph` - Inspect the project dependency graph
//!
//! Diagnostic surface for the data-quality conditions the resolver
//! absorbs: dropped external edges and dependency cycles. Also exports
//! DOT for Graphviz and shows the direct edges of a single module.

use crate::core::context::WorkspaceContext;
use crate::core::error::{SubsetError, SubsetResult};

/// Run the graph command
pub fn run_graph(ctx: &WorkspaceContext, dot: bool, cycles: bool, module: Option<String>) -> SubsetResult<()> {
  if let Some(id) = module {
    return show_module(ctx, &id);
  }

  if dot {
    println!("{}", ctx.graph.to_dot());
    return Ok(());
  }

  if cycles {
    let cycles = ctx.graph.find_cycles();
    if cycles.is_empty() {
      println!("No dependency cycles");
    } else {
      println!("Dependency cycles: {}", cycles.len());
      for cycle in cycles {
        println!("  🔁 {}", cycle.join(" → "));
      }
    }
    return Ok(());
  }

  let (_, edges) = ctx.graph.counts();
  println!("Project graph");
  println!("=============");
  println!();
  println!("Modules: {}", ctx.inventory.len());
  println!("Dependency edges: {}", edges);
  println!("Dropped external edges: {}", ctx.graph.dropped_edges().len());
  println!("Roots: {}", ctx.inventory.roots().join(", "));

  Ok(())
}

fn show_module(ctx: &WorkspaceContext, id: &str) -> SubsetResult<()> {
  if !ctx.inventory.contains(id) {
    return Err(SubsetError::InvalidSelection { id: id.to_string() });
  }

  println!("Module: {}", id);

  let dependencies = ctx.graph.direct_dependencies(id);
  println!("Depends on: {} modules", dependencies.len());
  for dep in &dependencies {
    println!("  ⬇  {}", dep);
  }

  let dependents = ctx.graph.direct_dependents(id);
  println!("Depended on by: {} modules", dependents.len());
  for dep in &dependents {
    println!("  ⬆  {}", dep);
  }

  Ok(())
}
