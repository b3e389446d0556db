//! `workspace-subset resolve` - Compute the subset plan for one seed
//!
//! Expands the seed by its naming-convention companions, walks the
//! dependency closure, re-attaches the aggregator chain and emits the
//! keep/unload plan for the apply sink.

use crate::core::context::WorkspaceContext;
use crate::core::error::{ConfigError, SubsetError, SubsetResult};
use crate::core::plan::{self, ApplyStrategy, PlanOptions, SubsetPlan};
use crate::graph::closure::{self, Selection};
use crate::graph::ClosureResult;

/// Output format for resolve/reset commands
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
  Text,
  Json,
  NamesOnly,
}

impl OutputFormat {
  pub fn from_str(s: &str) -> SubsetResult<Self> {
    match s.to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      "names" | "names-only" => Ok(Self::NamesOnly),
      _ => Err(SubsetError::message(format!(
        "Unknown format '{}'. Valid formats: text, json, names-only",
        s
      ))),
    }
  }
}

/// Parse a strategy override from the CLI, falling back to config.
pub fn effective_strategy(ctx: &WorkspaceContext, flag: Option<&str>) -> SubsetResult<ApplyStrategy> {
  match flag {
    Some(s) => {
      ApplyStrategy::parse(s).map_err(|value| SubsetError::Config(ConfigError::UnknownStrategy { value }))
    }
    None => Ok(ctx.config.apply.strategy),
  }
}

/// Run the resolve command
pub fn run_resolve(
  ctx: &WorkspaceContext,
  seed: String,
  api_tests: bool,
  selenium_tests: bool,
  strategy: Option<String>,
  force_refresh: bool,
  format: String,
) -> SubsetResult<()> {
  let output_format = OutputFormat::from_str(&format)?;
  let strategy = effective_strategy(ctx, strategy.as_deref())?;

  let selection = Selection {
    seed,
    api_tests,
    selenium_tests,
  };

  let closure = closure::resolve(&ctx.inventory, &ctx.graph, &ctx.naming, &selection)?;

  for companion in &closure.missing_companions {
    eprintln!("Warning: companion module '{}' not found in snapshot, omitting", companion);
  }

  let plan = plan::plan(&ctx.inventory, &closure, PlanOptions {
    strategy,
    force_refresh_on_unignore: force_refresh || ctx.config.apply.force_refresh_on_unignore,
  });

  display_plan(&plan, Some(&closure), output_format)
}

/// Display a plan in the requested format
pub fn display_plan(plan: &SubsetPlan, closure: Option<&ClosureResult>, format: OutputFormat) -> SubsetResult<()> {
  match format {
    OutputFormat::Text => display_text(plan, closure),
    OutputFormat::Json => {
      println!("{}", serde_json::to_string_pretty(plan)?);
      Ok(())
    }
    OutputFormat::NamesOnly => {
      for id in &plan.unload {
        println!("{}", id);
      }
      Ok(())
    }
  }
}

fn display_text(plan: &SubsetPlan, closure: Option<&ClosureResult>) -> SubsetResult<()> {
  println!("Subset Plan {}", plan.id);
  println!("================");
  println!();

  if let Some(seed) = &plan.seed {
    println!("Seed: {}", seed);
  }
  if let Some(closure) = closure
    && closure.seeds.len() > 1
  {
    println!("Expanded seeds: {}", closure.seeds.join(", "));
  }
  println!("Strategy: {}", plan.strategy);
  println!();

  println!("Keep: {} modules", plan.keep.len());
  for id in &plan.keep {
    println!("  📦 {}", id);
  }
  println!();

  println!("Unload: {} modules", plan.unload.len());
  for id in &plan.unload {
    println!("  🚫 {}", id);
  }

  Ok(())
}
