//! Integration tests for `workspace-subset graph`

use crate::helpers::{TestWorkspace, login_snapshot, run_subset};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_graph_summary() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["graph"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Modules: 7"));
  assert!(stdout.contains("Dropped external edges: 1"));
  assert!(stdout.contains("Roots: workspace-root"));

  Ok(())
}

#[test]
fn test_graph_dot_export() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["graph", "--dot"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("digraph"));
  assert!(stdout.contains("runtimes.login"));

  Ok(())
}

#[test]
fn test_graph_reports_cycles() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&json!({
    "projects": [
      { "id": "a", "dependencies": ["b"], "file": "a/pom.xml" },
      { "id": "b", "dependencies": ["a"], "file": "b/pom.xml" }
    ]
  }))?;

  let output = run_subset(&ws.path, &["graph", "--cycles"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Dependency cycles: 1"));
  assert!(stdout.contains("a"));
  assert!(stdout.contains("b"));

  Ok(())
}

#[test]
fn test_graph_module_edges() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["graph", "--module", "runtimes.login.api"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Depends on: 1 modules"));
  assert!(stdout.contains("libs.auth"));
  assert!(stdout.contains("Depended on by: 2 modules"));
  assert!(stdout.contains("runtimes.login.web"));
  assert!(stdout.contains("tests.api-login.client-test"));

  Ok(())
}

#[test]
fn test_graph_no_cycles() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["graph", "--cycles"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("No dependency cycles"));

  Ok(())
}
