use std::path::PathBuf;

use serde::Serialize;

use crate::mode::BuildMode;
use crate::project::ProjectLayout;

const SCRIPT_DIR: &str = "static/js/";
const STYLE_DIR: &str = "static/css/";

/// Directory, relative to the output root, receiving emitted images.
pub const IMAGE_OUTPUT_PATH: &str = "static/img/";

/// Filenames used by the CSS extraction plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractNaming {
  /// Stylesheet emitted for each entry chunk.
  pub filename: String,
  /// Stylesheet emitted for each split chunk.
  pub chunk_filename: String,
}

/// Output location and filename templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputNaming {
  /// URL prefix used when referencing emitted files.
  pub public_path: String,
  /// Output root directory.
  pub path: PathBuf,
  /// Script emitted for each entry chunk.
  pub filename: String,
  /// Script emitted for each split chunk.
  pub chunk_filename: String,
  /// Extracted stylesheets.
  pub css: CssExtractNaming,
  /// Name template of emitted images.
  pub image_name: String,
  /// Directory of emitted images, relative to [`OutputNaming::path`].
  pub image_output_path: String,
}

/// Content-hashed minified names in production, stable names in development.
pub fn select_output_naming(layout: &ProjectLayout, mode: BuildMode) -> OutputNaming {
  let (filename, chunk_filename, css_filename, css_chunk_filename, image_name) = match mode {
    BuildMode::Production => (
      "[name].[chunkhash].min.js",
      "[name].chunk.[chunkhash].min.js",
      "[name].[contenthash:8].min.css",
      "[name].chunk.[contenthash:8].min.css",
      "[name].[hash:8].[ext]",
    ),
    BuildMode::Development => (
      "[name].js",
      "[name].chunk.js",
      "[name].css",
      "[name].chunk.css",
      "[name].[ext]",
    ),
  };

  OutputNaming {
    public_path: layout.public_path().to_string(),
    path: layout.dist_root(),
    filename: format!("{SCRIPT_DIR}{filename}"),
    chunk_filename: format!("{SCRIPT_DIR}{chunk_filename}"),
    css: CssExtractNaming {
      filename: format!("{STYLE_DIR}{css_filename}"),
      chunk_filename: format!("{STYLE_DIR}{css_chunk_filename}"),
    },
    image_name: image_name.to_string(),
    image_output_path: IMAGE_OUTPUT_PATH.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn naming(mode: BuildMode) -> OutputNaming {
    select_output_naming(&ProjectLayout::with_defaults("/site"), mode)
  }

  #[test]
  fn production_names_carry_hashes() {
    let naming = naming(BuildMode::Production);
    assert_eq!(naming.filename, "static/js/[name].[chunkhash].min.js");
    assert_eq!(
      naming.chunk_filename,
      "static/js/[name].chunk.[chunkhash].min.js"
    );
    assert_eq!(naming.css.filename, "static/css/[name].[contenthash:8].min.css");
    assert_eq!(
      naming.css.chunk_filename,
      "static/css/[name].chunk.[contenthash:8].min.css"
    );
    assert_eq!(naming.image_name, "[name].[hash:8].[ext]");
  }

  #[test]
  fn development_names_are_stable() {
    let naming = naming(BuildMode::Development);
    for template in [
      &naming.filename,
      &naming.chunk_filename,
      &naming.css.filename,
      &naming.css.chunk_filename,
      &naming.image_name,
    ] {
      assert!(!template.contains("hash"), "{template} should not be hashed");
      assert!(!template.contains(".min."), "{template} should not be minified");
    }
    assert_eq!(naming.filename, "static/js/[name].js");
    assert_eq!(naming.css.chunk_filename, "static/css/[name].chunk.css");
  }

  #[test]
  fn output_root_and_public_path_come_from_layout() {
    let naming = naming(BuildMode::Development);
    assert_eq!(naming.path, PathBuf::from("/site/dist"));
    assert_eq!(naming.public_path, "/");
    assert_eq!(naming.image_output_path, "static/img/");
  }
}
