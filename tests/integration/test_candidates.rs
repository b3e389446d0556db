//! Integration tests for `workspace-subset candidates`

use crate::helpers::{TestWorkspace, login_snapshot, run_subset};
use anyhow::Result;
use serde_json::Value;

#[test]
fn test_candidates_lists_runtime_family_only() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["candidates"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Selectable modules: 2"));
  assert!(stdout.contains("runtimes.login"));
  assert!(stdout.contains("runtimes.billing"));

  // Submodules, libs and test modules are not seeds
  assert!(!stdout.contains("runtimes.login.api"));
  assert!(!stdout.contains("libs.auth"));
  assert!(!stdout.contains("tests.api-login.client-test"));

  Ok(())
}

#[test]
fn test_candidates_marks_available_facets() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&login_snapshot())?;

  let output = run_subset(&ws.path, &["candidates", "--json"])?;
  let rows: Value = serde_json::from_slice(&output.stdout)?;
  let rows = rows.as_array().unwrap();

  let login = rows.iter().find(|r| r["id"] == "runtimes.login").unwrap();
  assert_eq!(login["api_tests_available"], true);
  assert_eq!(login["selenium_tests_available"], false);

  let billing = rows.iter().find(|r| r["id"] == "runtimes.billing").unwrap();
  assert_eq!(billing["api_tests_available"], false);

  Ok(())
}

#[test]
fn test_candidates_includes_allow_list() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_snapshot(&serde_json::json!({
    "projects": [
      { "id": "foo", "file": "foo/pom.xml" },
      { "id": "unrelated", "file": "unrelated/pom.xml" }
    ]
  }))?;

  let output = run_subset(&ws.path, &["candidates"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("foo"));
  assert!(!stdout.contains("unrelated"));

  Ok(())
}
