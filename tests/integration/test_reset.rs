//! Integration tests for `workspace-subset reset`

use crate::helpers::{TestWorkspace, run_subset};
use anyhow::Result;
use serde_json::{Value, json};

fn snapshot_with_ignored() -> Value {
  json!({
    "ignored_files": ["b/pom.xml"],
    "projects": [
      { "id": "a", "file": "a/pom.xml" },
      { "id": "b", "parent": "a", "file": "b/pom.xml" }
    ]
  })
}

#[test]
fn test_reset_clears_ignore_list_and_refreshes() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&snapshot_with_ignored())?;

  let output = run_subset(&ws.path, &["reset", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["seed"], Value::Null);
  assert_eq!(plan["unload"].as_array().unwrap().len(), 0);
  assert_eq!(plan["keep"].as_array().unwrap().len(), 2);

  assert_eq!(plan["actions"][0]["type"], "ignore_files");
  assert_eq!(plan["actions"][0]["paths"].as_array().unwrap().len(), 0);

  // The previously-ignored module comes back and is re-synced
  assert_eq!(plan["actions"][1]["type"], "force_refresh");
  assert_eq!(plan["actions"][1]["modules"][0], "b");

  Ok(())
}

#[test]
fn test_reset_module_unload_strategy() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&snapshot_with_ignored())?;

  let output = run_subset(&ws.path, &["reset", "--strategy", "module-unload", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["actions"].as_array().unwrap().len(), 1);
  assert_eq!(plan["actions"][0]["type"], "unload_modules");
  assert_eq!(plan["actions"][0]["modules"].as_array().unwrap().len(), 0);

  Ok(())
}

#[test]
fn test_reset_respects_configured_strategy() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("[apply]\nstrategy = \"module-unload\"\n")?;
  ws.write_snapshot(&snapshot_with_ignored())?;

  let output = run_subset(&ws.path, &["reset", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["strategy"], "module-unload");

  Ok(())
}
