//! Project configuration loader describing the multi-page source layout.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::ProjectLayout;

/// File name searched for at the project root.
pub const DEFAULT_CONFIG_FILE: &str = "multipage.config.json";

/// Discoverable project configuration describing the filesystem conventions.
///
/// Every path is relative: directories under the source root are relative to
/// [`ProjectConfig::source_root`], asset files to [`ProjectConfig::assets_dir`], and the rest
/// to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Directory holding all authored sources.
  pub source_root: String,
  /// Directory under the source root with one subdirectory per page.
  pub views_dir: String,
  /// Directory under the source root with shared static assets.
  pub assets_dir: String,
  /// Directory under the assets root with vendored libraries.
  pub libs_dir: String,
  /// Favicon injected into every page, relative to the assets root.
  pub favicon_file: String,
  /// Page manifest file name, relative to the views directory.
  pub manifest_file: String,
  /// Directory where third-party dependencies are installed.
  pub dependency_dir: String,
  /// Directory receiving the build output.
  pub dist_dir: String,
  /// File stem of each page's script entry module.
  pub entry_file_stem: String,
  /// Extension of each page's script entry module.
  pub script_extension: String,
  /// HTML template file name inside each page directory.
  pub template_file: String,
  /// Additional script directory linted before transpilation.
  pub lint_script_dir: String,
  /// Public URL prefix of emitted files.
  pub public_path: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      source_root: "src".into(),
      views_dir: "views".into(),
      assets_dir: "assets".into(),
      libs_dir: "libs".into(),
      favicon_file: "img/favicon.ico".into(),
      manifest_file: "views.json".into(),
      dependency_dir: "node_modules".into(),
      dist_dir: "dist".into(),
      entry_file_stem: "index".into(),
      script_extension: "js".into(),
      template_file: "index.html".into(),
      lint_script_dir: "assets/js".into(),
      public_path: "/".into(),
    }
  }
}

/// Errors raised while reading an explicit project configuration file.
#[derive(Debug)]
pub enum ConfigError {
  /// The configuration file exists but could not be read.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The configuration file is not valid JSON for [`ProjectConfig`].
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}

impl ProjectConfig {
  /// Load `multipage.config.json` from the project root.
  ///
  /// A missing file yields the defaults. A file that exists but cannot be read or parsed is an
  /// error, since silently ignoring it would resolve paths against the wrong layout.
  pub fn discover(project_root: &Path) -> Result<Self, ConfigError> {
    let candidate = project_root.join(DEFAULT_CONFIG_FILE);
    match Self::from_path(&candidate) {
      Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
        tracing::debug!(path = %candidate.display(), "no project config, using defaults");
        Ok(Self::default())
      }
      other => other,
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Bind the configuration to a project root.
  pub fn into_layout(self, project_root: impl Into<PathBuf>) -> ProjectLayout {
    ProjectLayout::new(project_root, self)
  }
}
