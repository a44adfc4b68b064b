use std::path::{Path, PathBuf};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::mode::BuildMode;
use crate::project::ProjectLayout;
use crate::resolve::pages::{ASSETS_CHUNK, VENDORS_CHUNK};

/// Which chunks the bundler may split shared modules out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitChunksScope {
  /// Split entry chunks up front so shared bundles exist at build time.
  Initial,
  /// Split lazily loaded chunks only.
  Async,
}

/// Rule assigning modules below a path prefix to a shared chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroupRule {
  /// Stable identifier of the rule; serialised as the map key of
  /// [`SplitChunksPolicy::cache_groups`].
  #[serde(skip)]
  pub key: String,
  /// Modules located under this directory match the rule.
  pub test: PathBuf,
  /// Higher values win when a module matches several rules.
  pub priority: i32,
  /// Chunk receiving matching modules.
  pub name: String,
}

impl CacheGroupRule {
  fn new(key: &str, test: PathBuf, priority: i32, name: &str) -> Self {
    Self {
      key: key.to_string(),
      test,
      priority,
      name: name.to_string(),
    }
  }

  /// Returns `true` when `module_path` lies under [`CacheGroupRule::test`].
  ///
  /// Matching compares whole path components, which is stricter than a plain string prefix:
  /// `src/assets-old/x.js` does not fall under `src/assets`.
  pub fn matches(&self, module_path: &Path) -> bool {
    module_path.starts_with(&self.test)
  }
}

/// Code-splitting settings handed to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksPolicy {
  /// Chunk scope eligible for splitting.
  pub chunks: SplitChunksScope,
  /// Smallest module size, in bytes, worth splitting out.
  pub min_size: u64,
  /// Shared chunk rules, highest priority first, emitted as a map keyed by rule key.
  #[serde(serialize_with = "serialize_cache_groups")]
  pub cache_groups: Vec<CacheGroupRule>,
}

impl SplitChunksPolicy {
  /// Cache group a module would be emitted into, if any.
  pub fn cache_group_for(&self, module_path: &Path) -> Option<&CacheGroupRule> {
    resolve_cache_group(&self.cache_groups, module_path)
  }
}

fn serialize_cache_groups<S: Serializer>(
  rules: &[CacheGroupRule],
  serializer: S,
) -> Result<S::Ok, S::Error> {
  let mut map = serializer.serialize_map(Some(rules.len()))?;
  for rule in rules {
    map.serialize_entry(&rule.key, rule)?;
  }
  map.end()
}

/// Minification and code-splitting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
  /// Minify emitted scripts and styles.
  pub minimize: bool,
  /// Shared chunk extraction.
  pub split_chunks: SplitChunksPolicy,
}

/// Select minification and splitting behaviour for `mode`.
///
/// The three cache groups are identical in both modes: third-party dependencies and vendored
/// libraries end up in `vendors`, every other shared asset in `assets`.
pub fn select_optimization_policy(layout: &ProjectLayout, mode: BuildMode) -> OptimizationPolicy {
  let chunks = if mode.is_production() {
    SplitChunksScope::Initial
  } else {
    SplitChunksScope::Async
  };

  OptimizationPolicy {
    minimize: mode.is_production(),
    split_chunks: SplitChunksPolicy {
      chunks,
      min_size: 0,
      cache_groups: vec![
        CacheGroupRule::new("vendors", layout.dependency_root(), -1, VENDORS_CHUNK),
        CacheGroupRule::new("libs", layout.libs_root(), -5, VENDORS_CHUNK),
        CacheGroupRule::new("assets", layout.assets_root(), -10, ASSETS_CHUNK),
      ],
    },
  }
}

/// Pick the highest-priority rule matching `module_path`.
pub fn resolve_cache_group<'a>(
  rules: &'a [CacheGroupRule],
  module_path: &Path,
) -> Option<&'a CacheGroupRule> {
  rules
    .iter()
    .filter(|rule| rule.matches(module_path))
    .max_by_key(|rule| rule.priority)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn policy(mode: BuildMode) -> OptimizationPolicy {
    select_optimization_policy(&ProjectLayout::with_defaults("/site"), mode)
  }

  #[test]
  fn minimizes_only_in_production() {
    assert!(policy(BuildMode::Production).minimize);
    assert!(!policy(BuildMode::Development).minimize);
  }

  #[test]
  fn split_scope_follows_mode() {
    assert_eq!(
      policy(BuildMode::Production).split_chunks.chunks,
      SplitChunksScope::Initial
    );
    assert_eq!(
      policy(BuildMode::Development).split_chunks.chunks,
      SplitChunksScope::Async
    );
    assert_eq!(policy(BuildMode::Production).split_chunks.min_size, 0);
  }

  #[test]
  fn cache_groups_do_not_depend_on_mode() {
    assert_eq!(
      policy(BuildMode::Production).split_chunks.cache_groups,
      policy(BuildMode::Development).split_chunks.cache_groups
    );
  }

  #[test]
  fn plain_assets_resolve_to_assets_group() {
    let split = policy(BuildMode::Production).split_chunks;
    let rule = split
      .cache_group_for(Path::new("/site/src/assets/js/util.js"))
      .unwrap();
    assert_eq!(rule.key, "assets");
    assert_eq!(rule.name, "assets");
    assert_eq!(rule.priority, -10);
  }

  #[test]
  fn libs_outrank_assets_and_land_in_vendors_chunk() {
    let split = policy(BuildMode::Production).split_chunks;
    let rule = split
      .cache_group_for(Path::new("/site/src/assets/libs/swiper/swiper.js"))
      .unwrap();
    assert_eq!(rule.key, "libs");
    assert_eq!(rule.name, "vendors");
    assert_eq!(rule.priority, -5);
  }

  #[test]
  fn dependencies_always_resolve_to_vendors() {
    let split = policy(BuildMode::Development).split_chunks;
    let rule = split
      .cache_group_for(Path::new("/site/node_modules/jquery/dist/jquery.js"))
      .unwrap();
    assert_eq!(rule.key, "vendors");
    assert_eq!(rule.priority, -1);
  }

  #[test]
  fn vendors_win_even_when_every_rule_matches() {
    let rules = vec![
      CacheGroupRule::new("assets", PathBuf::from("/a"), -10, "assets"),
      CacheGroupRule::new("libs", PathBuf::from("/a/b"), -5, "vendors"),
      CacheGroupRule::new("vendors", PathBuf::from("/a/b/c"), -1, "vendors"),
    ];
    let rule = resolve_cache_group(&rules, Path::new("/a/b/c/mod.js")).unwrap();
    assert_eq!(rule.key, "vendors");
  }

  #[test]
  fn cache_groups_serialise_as_map_in_priority_order() {
    let split = policy(BuildMode::Production).split_chunks;
    let value = serde_json::to_value(&split).unwrap();
    let groups = &value["cacheGroups"];
    assert_eq!(groups["vendors"]["priority"], -1);
    assert_eq!(groups["libs"]["name"], "vendors");
    assert_eq!(groups["assets"]["test"], "/site/src/assets");
    assert!(groups["libs"].get("key").is_none());

    let json = serde_json::to_string(&split).unwrap();
    let vendors = json.find(r#""vendors":{"#).unwrap();
    let libs = json.find(r#""libs":{"#).unwrap();
    let assets = json.find(r#""assets":{"#).unwrap();
    assert!(vendors < libs && libs < assets);
  }

  #[test]
  fn page_sources_match_no_group() {
    let split = policy(BuildMode::Production).split_chunks;
    assert!(
      split
        .cache_group_for(Path::new("/site/src/views/home/index.js"))
        .is_none()
    );
  }

  #[test]
  fn prefix_match_respects_path_components() {
    let split = policy(BuildMode::Production).split_chunks;
    assert!(
      split
        .cache_group_for(Path::new("/site/src/assets-old/legacy.js"))
        .is_none()
    );
  }
}
