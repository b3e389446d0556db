//! Integration tests for `workspace-subset resolve`

use crate::helpers::{TestWorkspace, login_snapshot, run_subset, run_subset_raw};
use anyhow::Result;
use serde_json::{Value, json};

#[test]
fn test_resolve_simple_chain_unloads_nothing() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&json!({
    "projects": [
      { "id": "c", "file": "c/pom.xml" },
      { "id": "b", "parent": "c", "dependencies": ["c"], "file": "b/pom.xml" },
      { "id": "a", "parent": "c", "dependencies": ["b"], "file": "a/pom.xml" }
    ]
  }))?;

  let output = run_subset(&ws.path, &["resolve", "a", "--format", "names"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // The whole chain is kept, so nothing is unloaded
  assert_eq!(stdout.trim(), "");

  Ok(())
}

#[test]
fn test_resolve_companion_expansion() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(
    &ws.path,
    &["resolve", "runtimes.login", "--api-tests", "--format", "json"],
  )?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  let keep: Vec<&str> = plan["keep"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
  for id in [
    "runtimes.login",
    "runtimes.login.api",
    "runtimes.login.web",
    "tests.api-login.client-test",
    "libs.auth",
    "workspace-root",
  ] {
    assert!(keep.contains(&id), "{} should be kept, got {:?}", id, keep);
  }

  // The disjoint module is unloaded
  let unload: Vec<&str> = plan["unload"]
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v.as_str().unwrap())
    .collect();
  assert_eq!(unload, vec!["runtimes.billing"]);

  Ok(())
}

#[test]
fn test_resolve_partition_is_exact() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["resolve", "runtimes.billing", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  let keep = plan["keep"].as_array().unwrap().len();
  let unload = plan["unload"].as_array().unwrap().len();
  assert_eq!(keep + unload, 7, "every project classified exactly once");

  Ok(())
}

#[test]
fn test_resolve_missing_companion_warns_but_succeeds() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let mut snapshot = login_snapshot();
  snapshot["projects"]
    .as_array_mut()
    .unwrap()
    .retain(|p| p["id"] != "tests.api-login.client-test");
  ws.write_snapshot(&snapshot)?;

  let output = run_subset(
    &ws.path,
    &["resolve", "runtimes.login", "--api-tests", "--selenium-tests", "--format", "json"],
  )?;

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("tests.api-login.client-test"), "should warn: {}", stderr);
  assert!(stderr.contains("tests.selenium-login.client-test"), "should warn: {}", stderr);

  let plan: Value = serde_json::from_slice(&output.stdout)?;
  let keep: Vec<&str> = plan["keep"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
  assert!(!keep.contains(&"tests.api-login.client-test"));

  Ok(())
}

#[test]
fn test_resolve_invalid_seed_fails_cleanly() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset_raw(&ws.path, &["resolve", "runtimes.ghost"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("runtimes.ghost"), "should name the missing seed: {}", stderr);

  // No plan is produced
  assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());

  Ok(())
}

#[test]
fn test_resolve_module_unload_strategy() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(
    &ws.path,
    &["resolve", "runtimes.login", "--strategy", "module-unload", "--format", "json"],
  )?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["strategy"], "module-unload");
  assert_eq!(plan["actions"][0]["type"], "unload_modules");
  assert_eq!(plan["actions"][0]["modules"][0], "tests.api-login.client-test");

  Ok(())
}

#[test]
fn test_resolve_ignore_files_maps_to_paths() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["resolve", "runtimes.login", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["actions"][0]["type"], "ignore_files");
  let paths: Vec<&str> = plan["actions"][0]["paths"]
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v.as_str().unwrap())
    .collect();
  assert_eq!(paths, vec!["tests/api-login/client-test/pom.xml", "runtimes.billing/pom.xml"]);

  Ok(())
}

#[test]
fn test_resolve_is_idempotent() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let args = ["resolve", "runtimes.login", "--api-tests", "--format", "json"];
  let first: Value = serde_json::from_slice(&run_subset(&ws.path, &args)?.stdout)?;
  let second: Value = serde_json::from_slice(&run_subset(&ws.path, &args)?.stdout)?;

  assert_eq!(first["id"], second["id"]);
  assert_eq!(first["keep"], second["keep"]);
  assert_eq!(first["unload"], second["unload"]);

  Ok(())
}

#[test]
fn test_resolve_text_output() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["resolve", "runtimes.login"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Seed: runtimes.login"));
  assert!(stdout.contains("Expanded seeds:"));
  assert!(stdout.contains("Keep: 5 modules"));
  assert!(stdout.contains("Unload: 2 modules"));
  assert!(stdout.contains("runtimes.billing"));

  Ok(())
}

#[test]
fn test_resolve_warns_about_external_dependencies() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["resolve", "runtimes.login", "--format", "names"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  // The spring-core coordinate resolves to nothing in the inventory
  assert!(stderr.contains("org.springframework:spring-core"), "got: {}", stderr);

  Ok(())
}

#[test]
fn test_resolve_custom_naming_config() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(
    r#"
[naming]
runtime_prefix = "apps."
api_test_pattern = "qa.{base}-api"
selenium_test_pattern = "qa.{base}-ui"
"#,
  )?;
  ws.write_snapshot(&json!({
    "projects": [
      { "id": "root", "file": "pom.xml" },
      { "id": "apps.shop", "parent": "root", "file": "apps.shop/pom.xml" },
      { "id": "qa.shop-api", "parent": "root", "file": "qa/shop-api/pom.xml" },
      { "id": "other", "parent": "root", "file": "other/pom.xml" }
    ]
  }))?;

  let output = run_subset(&ws.path, &["resolve", "apps.shop", "--api-tests", "--format", "json"])?;
  let plan: Value = serde_json::from_slice(&output.stdout)?;

  let keep: Vec<&str> = plan["keep"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
  assert!(keep.contains(&"qa.shop-api"));
  assert!(!keep.contains(&"other"));

  Ok(())
}
