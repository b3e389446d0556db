//! Error types for workspace-subset with contextual messages and exit codes
//!
//! A unified error type that categorizes failures and carries a helpful
//! suggestion where one exists. Data-quality conditions (unresolvable
//! dependency identifiers, duplicate identifiers, cycles) are NOT errors:
//! they are collected as warnings and reported by the command layer.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for workspace-subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad config, invalid selection, missing snapshot)
  User = 1,
  /// System error (I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for workspace-subset
#[derive(Debug)]
pub enum SubsetError {
  /// Configuration errors (subset.toml)
  Config(ConfigError),

  /// Snapshot loading errors
  Snapshot(SnapshotError),

  /// The selected seed module is not present in the inventory.
  /// Resolution refuses to proceed rather than return a misleadingly
  /// small closure.
  InvalidSelection { id: String },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl SubsetError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SubsetError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      SubsetError::Message { message, context, help } => SubsetError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SubsetError::Config(_) => ExitCode::User,
      SubsetError::Snapshot(_) => ExitCode::User,
      SubsetError::InvalidSelection { .. } => ExitCode::User,
      SubsetError::Io(_) => ExitCode::System,
      SubsetError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SubsetError::Config(e) => e.help_message(),
      SubsetError::Snapshot(e) => e.help_message(),
      SubsetError::InvalidSelection { .. } => {
        Some("Run `workspace-subset candidates` to list the selectable modules in this snapshot.".to_string())
      }
      SubsetError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for SubsetError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SubsetError::Config(e) => write!(f, "{}", e),
      SubsetError::Snapshot(e) => write!(f, "{}", e),
      SubsetError::InvalidSelection { id } => {
        write!(f, "Module '{}' is not present in the workspace snapshot", id)
      }
      SubsetError::Io(e) => write!(f, "I/O error: {}", e),
      SubsetError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for SubsetError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SubsetError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SubsetError {
  fn from(err: io::Error) -> Self {
    SubsetError::Io(err)
  }
}

impl From<toml_edit::de::Error> for SubsetError {
  fn from(err: toml_edit::de::Error) -> Self {
    SubsetError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for SubsetError {
  fn from(err: serde_json::Error) -> Self {
    SubsetError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// A companion pattern is missing its `{base}` placeholder
  MissingPlaceholder { key: String, pattern: String },

  /// The runtime prefix is empty
  EmptyRuntimePrefix,

  /// Unknown apply strategy name
  UnknownStrategy { value: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingPlaceholder { key, .. } => Some(format!(
        "Companion patterns are instantiated per seed module; `{}` must contain the literal `{{base}}`.",
        key
      )),
      ConfigError::EmptyRuntimePrefix => {
        Some("Set `naming.runtime_prefix` to the identifier prefix of your runtime modules (e.g. \"runtimes.\").".to_string())
      }
      ConfigError::UnknownStrategy { .. } => {
        Some("Valid strategies: module-unload, ignore-files".to_string())
      }
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::MissingPlaceholder { key, pattern } => {
        write!(f, "Pattern '{}' for {} does not contain the {{base}} placeholder", pattern, key)
      }
      ConfigError::EmptyRuntimePrefix => {
        write!(f, "naming.runtime_prefix must not be empty")
      }
      ConfigError::UnknownStrategy { value } => {
        write!(f, "Unknown apply strategy '{}'", value)
      }
    }
  }
}

/// Snapshot loading errors
#[derive(Debug)]
pub enum SnapshotError {
  /// Snapshot file does not exist
  NotFound { path: PathBuf },

  /// Snapshot file is not valid JSON / has the wrong shape
  Parse { path: PathBuf, message: String },
}

impl SnapshotError {
  fn help_message(&self) -> Option<String> {
    match self {
      SnapshotError::NotFound { .. } => Some(
        "Export a workspace snapshot from your IDE or build-tool integration and pass it with --snapshot.".to_string(),
      ),
      SnapshotError::Parse { .. } => Some(
        "The snapshot must be a JSON object with a `projects` array; see the README for the expected shape.".to_string(),
      ),
    }
  }
}

impl fmt::Display for SnapshotError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SnapshotError::NotFound { path } => {
        write!(f, "Workspace snapshot not found: {}", path.display())
      }
      SnapshotError::Parse { path, message } => {
        write!(f, "Failed to parse workspace snapshot {}: {}", path.display(), message)
      }
    }
  }
}

/// Result type alias for workspace-subset
pub type SubsetResult<T> = Result<T, SubsetError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> SubsetResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SubsetResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SubsetError>,
{
  fn context(self, ctx: impl Into<String>) -> SubsetResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> SubsetResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SubsetError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
