//! Configuration for workspace-subset (subset.toml)
//!
//! Searched in order: subset.toml, .subset.toml, .config/subset.toml.
//! Everything has a default matching the documented naming-convention
//! contract, so the tool works without a config file in conventionally
//! laid out workspaces.
//!
//! ```toml
//! [naming]
//! runtime_prefix = "runtimes."
//! extra_selectable = ["foo", "bar"]
//! api_test_pattern = "tests.api-{base}.client-test"
//! selenium_test_pattern = "tests.selenium-{base}.client-test"
//!
//! [apply]
//! strategy = "ignore-files"
//! force_refresh_on_unignore = false
//! ```

use crate::core::error::{ResultExt, SubsetResult};
use crate::core::plan::ApplyStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubsetConfig {
  #[serde(default)]
  pub naming: NamingConfig,

  #[serde(default)]
  pub apply: ApplyConfig,
}

/// Naming-convention configuration.
///
/// These patterns are a stable external contract (other tooling derives
/// the same identifiers), so they are configuration rather than code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
  /// Identifier prefix of the filterable runtime family
  #[serde(default = "default_runtime_prefix")]
  pub runtime_prefix: String,

  /// Fixed identifiers that are always selectable (lightweight test
  /// workspaces without the runtime naming structure)
  #[serde(default = "default_extra_selectable")]
  pub extra_selectable: Vec<String>,

  /// Suffix of a runtime module's API submodule
  #[serde(default = "default_api_suffix")]
  pub api_suffix: String,

  /// Suffix of a runtime module's web submodule
  #[serde(default = "default_web_suffix")]
  pub web_suffix: String,

  /// API test module pattern; `{base}` is the seed id minus the runtime prefix
  #[serde(default = "default_api_test_pattern")]
  pub api_test_pattern: String,

  /// Selenium test module pattern; `{base}` as above
  #[serde(default = "default_selenium_test_pattern")]
  pub selenium_test_pattern: String,
}

fn default_runtime_prefix() -> String {
  "runtimes.".to_string()
}

fn default_extra_selectable() -> Vec<String> {
  vec!["foo".to_string(), "bar".to_string()]
}

fn default_api_suffix() -> String {
  ".api".to_string()
}

fn default_web_suffix() -> String {
  ".web".to_string()
}

fn default_api_test_pattern() -> String {
  "tests.api-{base}.client-test".to_string()
}

fn default_selenium_test_pattern() -> String {
  "tests.selenium-{base}.client-test".to_string()
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      runtime_prefix: default_runtime_prefix(),
      extra_selectable: default_extra_selectable(),
      api_suffix: default_api_suffix(),
      web_suffix: default_web_suffix(),
      api_test_pattern: default_api_test_pattern(),
      selenium_test_pattern: default_selenium_test_pattern(),
    }
  }
}

/// Apply-strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplyConfig {
  /// Which sink representation resolve plans use by default
  #[serde(default)]
  pub strategy: ApplyStrategy,

  /// Whether ignore-files plans re-sync previously-ignored modules that
  /// the new plan keeps
  #[serde(default)]
  pub force_refresh_on_unignore: bool,
}

impl SubsetConfig {
  /// Find config file in search order: subset.toml, .subset.toml, .config/subset.toml
  pub fn find_config_path(dir: &Path) -> Option<PathBuf> {
    let candidates = vec![
      dir.join("subset.toml"),
      dir.join(".subset.toml"),
      dir.join(".config").join("subset.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the search path, falling back to defaults when no
  /// config file exists.
  pub fn load(dir: &Path) -> SubsetResult<Self> {
    let Some(config_path) = Self::find_config_path(dir) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: SubsetConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    Ok(config)
  }
}
