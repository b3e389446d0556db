mod commands;
mod core;
mod graph;
mod inventory;

use crate::core::error::{SubsetError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compute the minimal module subset needed to work on one module of a
/// large multi-module workspace
#[derive(Parser)]
#[command(name = "workspace-subset")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct SubsetCli {
  /// Workspace snapshot exported by the host IDE/build integration
  #[arg(short, long, global = true, default_value = "workspace-snapshot.json")]
  snapshot: PathBuf,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List modules selectable as seeds, with available test facets
  Candidates {
    /// Output candidates in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Compute the keep/unload plan for a seed module
  Resolve {
    /// Identifier of the module to keep working on
    seed: String,
    /// Also keep the seed's API test module
    #[arg(long)]
    api_tests: bool,
    /// Also keep the seed's Selenium test module
    #[arg(long)]
    selenium_tests: bool,
    /// Apply strategy: module-unload or ignore-files (default: from config)
    #[arg(long)]
    strategy: Option<String>,
    /// Re-sync previously-ignored modules that this plan keeps
    #[arg(long)]
    force_refresh: bool,
    /// Output format: text (default), json, names-only
    #[arg(long, default_value = "text")]
    format: String,
  },

  /// Plan the return to the default state (nothing unloaded or ignored)
  Reset {
    /// Apply strategy: module-unload or ignore-files (default: from config)
    #[arg(long)]
    strategy: Option<String>,
    /// Output format: text (default), json
    #[arg(long, default_value = "text")]
    format: String,
  },

  /// Inspect the project dependency graph
  Graph {
    /// Export the graph in DOT format (Graphviz)
    #[arg(long)]
    dot: bool,
    /// List dependency cycles
    #[arg(long)]
    cycles: bool,
    /// Show direct dependencies and dependents of one module
    #[arg(long)]
    module: Option<String>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
}

fn main() {
  let cli = SubsetCli::parse();

  let config_dir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  // One context per invocation: the snapshot is re-read every time so the
  // plan always reflects the host's current module set
  let ctx = match crate::core::context::WorkspaceContext::build(&cli.snapshot, &config_dir) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  ctx.report_warnings();

  let result = match cli.command {
    Commands::Candidates { json } => commands::run_candidates(&ctx, json),
    Commands::Resolve {
      seed,
      api_tests,
      selenium_tests,
      strategy,
      force_refresh,
      format,
    } => commands::run_resolve(&ctx, seed, api_tests, selenium_tests, strategy, force_refresh, format),
    Commands::Reset { strategy, format } => commands::run_reset(&ctx, strategy, format),
    Commands::Graph { dot, cycles, module } => commands::run_graph(&ctx, dot, cycles, module),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: SubsetError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
