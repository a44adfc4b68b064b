use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::validation::validate_descriptors;
use crate::models::PageDescriptor;

/// Errors that abort the configuration build while reading the manifest.
#[derive(Debug)]
pub enum ManifestError {
  /// Failed to read the manifest from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON manifest.
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML manifest.
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
  /// A page declared an empty identifier.
  EmptyUrl {
    /// Position of the offending page in the manifest.
    index: usize,
  },
  /// Two pages share the same identifier.
  DuplicateUrl {
    /// The repeated identifier.
    url: String,
    /// Position of the first declaration.
    first: usize,
    /// Position of the repeated declaration.
    duplicate: usize,
  },
}

impl std::fmt::Display for ManifestError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read manifest {}: {}", path.display(), source)
      }
      Self::Json { path, source } => {
        write!(f, "failed to parse manifest {}: {}", path.display(), source)
      }
      Self::Yaml { path, source } => {
        write!(f, "failed to parse manifest {}: {}", path.display(), source)
      }
      Self::EmptyUrl { index } => {
        write!(f, "page #{index} has an empty url")
      }
      Self::DuplicateUrl {
        url,
        first,
        duplicate,
      } => write!(
        f,
        "page url `{url}` is declared twice (#{first} and #{duplicate})"
      ),
    }
  }
}

impl std::error::Error for ManifestError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Json { source, .. } => Some(source),
      Self::Yaml { source, .. } => Some(source),
      Self::EmptyUrl { .. } | Self::DuplicateUrl { .. } => None,
    }
  }
}

/// Read, parse and validate the manifest at `path`.
///
/// A missing or malformed manifest is fatal: no partial configuration is produced.
pub fn load_manifest(path: &Path) -> Result<Vec<PageDescriptor>, ManifestError> {
  let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let pages = parse_manifest(path, &content)?;
  tracing::debug!(path = %path.display(), pages = pages.len(), "loaded page manifest");
  Ok(pages)
}

/// Parse manifest text, choosing YAML for `.yaml`/`.yml` paths and JSON otherwise.
pub fn parse_manifest(path: &Path, content: &str) -> Result<Vec<PageDescriptor>, ManifestError> {
  let pages: Vec<PageDescriptor> = if is_yaml(path) {
    serde_yaml::from_str(content).map_err(|source| ManifestError::Yaml {
      path: path.to_path_buf(),
      source,
    })?
  } else {
    serde_json::from_str(content).map_err(|source| ManifestError::Json {
      path: path.to_path_buf(),
      source,
    })?
  };

  validate_descriptors(&pages)?;
  Ok(pages)
}

fn is_yaml(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn loads_json_manifest_in_declared_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("views.json");
    fs::write(
      &path,
      r#"[{ "url": "home", "title": "Home" }, { "url": "about" }]"#,
    )
    .unwrap();

    let pages = load_manifest(&path).unwrap();
    assert_eq!(
      pages,
      vec![PageDescriptor::new("home"), PageDescriptor::new("about")]
    );
  }

  #[test]
  fn loads_yaml_manifest() {
    let pages = parse_manifest(Path::new("views.yml"), "- url: home\n- url: contact\n").unwrap();
    assert_eq!(
      pages,
      vec![PageDescriptor::new("home"), PageDescriptor::new("contact")]
    );
  }

  #[test]
  fn missing_manifest_is_fatal() {
    let dir = tempdir().unwrap();
    let err = load_manifest(&dir.path().join("views.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
  }

  #[test]
  fn malformed_manifest_is_fatal() {
    let err = parse_manifest(Path::new("views.json"), r#"{ "url": "home" }"#).unwrap_err();
    assert!(matches!(err, ManifestError::Json { .. }));
    assert!(err.to_string().contains("views.json"));
  }

  #[test]
  fn rejects_duplicate_urls_while_loading() {
    let err = parse_manifest(
      Path::new("views.json"),
      r#"[{ "url": "home" }, { "url": "home" }]"#,
    )
    .unwrap_err();
    assert!(matches!(err, ManifestError::DuplicateUrl { .. }));
  }
}
