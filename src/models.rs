//! Data structures produced while resolving a multi-page build.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single page declared in the manifest.
///
/// `url` doubles as the page's directory name under the views root and as the name of its
/// script chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageDescriptor {
  /// Unique page identifier.
  pub url: String,
}

impl PageDescriptor {
  /// Convenience constructor used by callers building manifests in code.
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }
}

/// Page identifier mapped to the page's script entry module.
pub type EntryMap = BTreeMap<String, PathBuf>;

/// Chunk ordering requested from the HTML plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunksSortMode {
  /// Inject chunks exactly in the listed order.
  Manual,
}

/// Minification applied to generated HTML pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
  /// Collapse insignificant whitespace between tags.
  pub collapse_whitespace: bool,
  /// Strip HTML comments.
  pub remove_comments: bool,
}

impl MinifyOptions {
  /// Policy applied to every page in production builds.
  pub const PRODUCTION: Self = Self {
    collapse_whitespace: true,
    remove_comments: true,
  };
}

/// HTML output emitted for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutputSpec {
  /// Identifier of the page this output belongs to.
  pub page: String,
  /// Template rendered into the page.
  pub template_path: PathBuf,
  /// Destination of the generated HTML file.
  pub output_path: PathBuf,
  /// Favicon linked from the page.
  pub favicon_path: PathBuf,
  /// Chunks injected as script tags, in injection order.
  pub injected_chunk_names: Vec<String>,
  /// Always [`ChunksSortMode::Manual`] so the order above is preserved.
  pub chunks_sort_mode: ChunksSortMode,
  /// HTML minification, present only in production.
  pub minify_options: Option<MinifyOptions>,
  /// Emit self-closing link tags.
  pub xhtml: bool,
}
