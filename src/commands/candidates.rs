//! `workspace-subset candidates` - List modules selectable as seeds
//!
//! Shows the filterable runtime family plus the configured allow-list,
//! with a column per test facet indicating whether the companion module
//! exists in this snapshot. This is the data the selection UI presents.

use crate::core::context::WorkspaceContext;
use crate::core::error::SubsetResult;
use serde_json::json;

struct CandidateRow<'a> {
  id: &'a str,
  display_name: &'a str,
  api_tests_available: bool,
  selenium_tests_available: bool,
}

/// Run the candidates command
pub fn run_candidates(ctx: &WorkspaceContext, json: bool) -> SubsetResult<()> {
  let rows: Vec<CandidateRow<'_>> = ctx
    .inventory
    .projects()
    .iter()
    .filter(|p| ctx.naming.is_selectable(&p.id))
    .map(|p| {
      let base = ctx.naming.runtime_base(&p.id);
      CandidateRow {
        id: &p.id,
        display_name: p.display_name(),
        api_tests_available: base
          .map(|b| ctx.inventory.contains(&ctx.naming.api_test_module(b)))
          .unwrap_or(false),
        selenium_tests_available: base
          .map(|b| ctx.inventory.contains(&ctx.naming.selenium_test_module(b)))
          .unwrap_or(false),
      }
    })
    .collect();

  if json {
    let output: Vec<_> = rows
      .iter()
      .map(|row| {
        json!({
          "id": row.id,
          "display_name": row.display_name,
          "api_tests_available": row.api_tests_available,
          "selenium_tests_available": row.selenium_tests_available,
        })
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&json!(output))?);
    return Ok(());
  }

  println!("Selectable modules: {}", rows.len());
  for row in &rows {
    let mut facets = Vec::new();
    if row.api_tests_available {
      facets.push("api-tests");
    }
    if row.selenium_tests_available {
      facets.push("selenium-tests");
    }

    if facets.is_empty() {
      println!("  📦 {}", row.id);
    } else {
      println!("  📦 {} [{}]", row.id, facets.join(", "));
    }
  }

  Ok(())
}
