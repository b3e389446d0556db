//! Module naming conventions: seed eligibility and companion identifiers
//!
//! The workspace follows a naming-convention contract that other tooling
//! relies on: a runtime module `runtimes.X` has an API submodule
//! `runtimes.X.api`, a web submodule `runtimes.X.web`, an API test module
//! `tests.api-X.client-test` and a Selenium test module
//! `tests.selenium-X.client-test`. All of these are configuration
//! (`[naming]` in subset.toml), not hard-coded literals, so workspaces
//! with different schemes can adapt without touching the algorithm.

use crate::core::config::NamingConfig;
use crate::core::error::{ConfigError, SubsetError, SubsetResult};
use regex::Regex;

/// Placeholder substituted with the seed's base name in test-module patterns
pub const BASE_PLACEHOLDER: &str = "{base}";

/// Compiled naming conventions for one workspace.
pub struct NamingConvention {
  runtime_prefix: String,

  /// Matches the filterable "runtime" family: the prefix followed by one
  /// or more ASCII letters or hyphens and nothing else (exactly one
  /// dot-segment, so `runtimes.login` matches but `runtimes.login.api`
  /// does not)
  selectable: Regex,

  /// Fixed identifiers that are always selectable, for lightweight test
  /// workspaces that do not follow the runtime naming scheme
  extra_selectable: Vec<String>,

  api_suffix: String,
  web_suffix: String,
  api_test_pattern: String,
  selenium_test_pattern: String,
}

impl NamingConvention {
  /// Compile the conventions from configuration.
  pub fn from_config(config: &NamingConfig) -> SubsetResult<Self> {
    if config.runtime_prefix.is_empty() {
      return Err(SubsetError::Config(ConfigError::EmptyRuntimePrefix));
    }

    for (key, pattern) in [
      ("naming.api_test_pattern", &config.api_test_pattern),
      ("naming.selenium_test_pattern", &config.selenium_test_pattern),
    ] {
      if !pattern.contains(BASE_PLACEHOLDER) {
        return Err(SubsetError::Config(ConfigError::MissingPlaceholder {
          key: key.to_string(),
          pattern: pattern.clone(),
        }));
      }
    }

    let selectable = Regex::new(&format!("^{}[A-Za-z-]+$", regex::escape(&config.runtime_prefix)))
      .map_err(|e| SubsetError::message(format!("Failed to compile selectable-module pattern: {}", e)))?;

    Ok(Self {
      runtime_prefix: config.runtime_prefix.clone(),
      selectable,
      extra_selectable: config.extra_selectable.clone(),
      api_suffix: config.api_suffix.clone(),
      web_suffix: config.web_suffix.clone(),
      api_test_pattern: config.api_test_pattern.clone(),
      selenium_test_pattern: config.selenium_test_pattern.clone(),
    })
  }

  /// Whether this identifier is offered as a selectable seed.
  pub fn is_selectable(&self, id: &str) -> bool {
    self.selectable.is_match(id) || self.extra_selectable.iter().any(|extra| extra == id)
  }

  /// The base name of a runtime module (`runtimes.login` → `login`),
  /// or None for identifiers outside the runtime family.
  pub fn runtime_base<'a>(&self, id: &'a str) -> Option<&'a str> {
    id.strip_prefix(&self.runtime_prefix)
  }

  /// Identifier of the seed's API submodule (`runtimes.login.api`)
  pub fn api_submodule(&self, id: &str) -> String {
    format!("{}{}", id, self.api_suffix)
  }

  /// Identifier of the seed's web submodule (`runtimes.login.web`)
  pub fn web_submodule(&self, id: &str) -> String {
    format!("{}{}", id, self.web_suffix)
  }

  /// Identifier of the API test module for a runtime base name
  pub fn api_test_module(&self, base: &str) -> String {
    self.api_test_pattern.replace(BASE_PLACEHOLDER, base)
  }

  /// Identifier of the Selenium test module for a runtime base name
  pub fn selenium_test_module(&self, base: &str) -> String {
    self.selenium_test_pattern.replace(BASE_PLACEHOLDER, base)
  }
}
