//! Filesystem conventions bound to a concrete project root.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;

/// Owned layout description used by every resolution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
  root: PathBuf,
  config: ProjectConfig,
}

impl ProjectLayout {
  /// Create a layout for `root` using the provided conventions.
  pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
    Self {
      root: root.into(),
      config,
    }
  }

  /// Create a layout whose root is made absolute against the working directory.
  ///
  /// The bundler compares cache-group roots against absolute module paths and rejects a
  /// relative output directory, so callers taking a root from user input go through here.
  pub fn absolute(root: impl AsRef<Path>, config: ProjectConfig) -> std::io::Result<Self> {
    let root = std::path::absolute(root.as_ref())?;
    Ok(Self::new(root, config))
  }

  /// Layout with default conventions rooted at `root`.
  pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
    Self::new(root, ProjectConfig::default())
  }

  /// Project root every other path is resolved against.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Conventions backing this layout.
  pub fn config(&self) -> &ProjectConfig {
    &self.config
  }

  /// Directory holding all authored sources.
  pub fn source_root(&self) -> PathBuf {
    self.root.join(&self.config.source_root)
  }

  /// Directory with one subdirectory per page.
  pub fn views_root(&self) -> PathBuf {
    self.source_root().join(&self.config.views_dir)
  }

  /// Shared static asset directory.
  pub fn assets_root(&self) -> PathBuf {
    self.source_root().join(&self.config.assets_dir)
  }

  /// Vendored library directory nested inside the assets root.
  pub fn libs_root(&self) -> PathBuf {
    self.assets_root().join(&self.config.libs_dir)
  }

  /// Third-party dependency install directory.
  pub fn dependency_root(&self) -> PathBuf {
    self.root.join(&self.config.dependency_dir)
  }

  /// Build output directory.
  pub fn dist_root(&self) -> PathBuf {
    self.root.join(&self.config.dist_dir)
  }

  /// Default location of the page manifest.
  pub fn manifest_path(&self) -> PathBuf {
    self.views_root().join(&self.config.manifest_file)
  }

  /// Favicon shared by every page.
  pub fn favicon_path(&self) -> PathBuf {
    self.assets_root().join(&self.config.favicon_file)
  }

  /// Source directory of a single page.
  pub fn page_dir(&self, url: &str) -> PathBuf {
    self.views_root().join(url)
  }

  /// `<views>/<url>/index.<ext>`
  pub fn entry_path(&self, url: &str) -> PathBuf {
    self.page_dir(url).join(format!(
      "{}.{}",
      self.config.entry_file_stem, self.config.script_extension
    ))
  }

  /// HTML template of a single page.
  pub fn template_path(&self, url: &str) -> PathBuf {
    self.page_dir(url).join(&self.config.template_file)
  }

  /// `<dist>/<url>.html`
  pub fn output_path(&self, url: &str) -> PathBuf {
    self.dist_root().join(format!("{url}.html"))
  }

  /// Directories whose scripts are linted before any other loader runs.
  pub fn lint_roots(&self) -> Vec<PathBuf> {
    vec![self.views_root(), self.root.join(&self.config.lint_script_dir)]
  }

  /// Public URL prefix of emitted files.
  pub fn public_path(&self) -> &str {
    &self.config.public_path
  }
}
