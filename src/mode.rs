//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Environment variable consulted when no explicit mode is supplied.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The only environment value that switches the build into production mode.
pub const PRODUCTION_ENV_VALUE: &str = "prod";

/// Two-valued build mode threaded through every resolution step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  /// Hashed filenames, shared chunks injected into every page, minification enabled.
  Production,
  /// Stable filenames, one chunk per page, no minification.
  #[default]
  Development,
}

impl BuildMode {
  /// Interpret a raw environment value.
  ///
  /// Only the exact value `prod` selects production; unset or unknown values fall back to
  /// development so a misconfigured environment never aborts the build.
  pub fn from_env_value(value: Option<&str>) -> Self {
    match value {
      Some(PRODUCTION_ENV_VALUE) => Self::Production,
      _ => Self::Development,
    }
  }

  /// Read the mode from [`MODE_ENV_VAR`].
  pub fn from_env() -> Self {
    let value = std::env::var(MODE_ENV_VAR).ok();
    Self::from_env_value(value.as_deref())
  }

  /// Returns `true` for [`BuildMode::Production`].
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Production => f.write_str("production"),
      Self::Development => f.write_str("development"),
    }
  }
}

/// Error returned when an explicit mode string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl fmt::Display for UnknownModeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "unknown build mode `{}` (expected prod, production, dev or development)",
      self.0
    )
  }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for BuildMode {
  type Err = UnknownModeError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "prod" | "production" => Ok(Self::Production),
      "dev" | "development" => Ok(Self::Development),
      _ => Err(UnknownModeError(value.to_string())),
    }
  }
}
