use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::project::ProjectLayout;
use crate::resolve::output::OutputNaming;

/// Loader that hands stylesheets to the CSS extraction plugin.
pub const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

/// Images below this size, in bytes, are inlined as data URIs.
pub const INLINE_IMAGE_LIMIT: u64 = 4096;

/// Stage a rule runs in relative to the normal loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
  /// Run before every non-enforced loader.
  Pre,
}

/// One loader invocation inside a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
  /// Loader package name.
  pub loader: String,
  /// Loader options, omitted when the loader runs with its defaults.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl LoaderUse {
  fn plain(loader: &str) -> Self {
    Self {
      loader: loader.to_string(),
      options: None,
    }
  }

  fn with_options(loader: &str, options: Value) -> Self {
    Self {
      loader: loader.to_string(),
      options: Some(options),
    }
  }
}

/// Loader chain applied to modules whose path matches [`ModuleRule::test`].
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRule {
  /// Pattern evaluated against the module path.
  #[serde(serialize_with = "serialize_regex")]
  pub test: Regex,
  /// Optional stage override.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enforce: Option<Enforce>,
  /// Restrict the rule to modules under these directories; empty means everywhere.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub include: Vec<PathBuf>,
  /// Modules whose path matches this pattern are skipped.
  #[serde(
    serialize_with = "serialize_optional_regex",
    skip_serializing_if = "Option::is_none"
  )]
  pub exclude: Option<Regex>,
  /// Loaders in application order as the bundler lists them.
  #[serde(rename = "use")]
  pub uses: Vec<LoaderUse>,
}

impl ModuleRule {
  fn new(test: &str, uses: Vec<LoaderUse>) -> Self {
    Self {
      test: Regex::new(test).expect("invalid module rule pattern"),
      enforce: None,
      include: Vec::new(),
      exclude: None,
      uses,
    }
  }

  /// Returns `true` when the bundler would run this rule's loaders on `module_path`.
  pub fn applies_to(&self, module_path: &Path) -> bool {
    let normalised = module_path.to_string_lossy().replace('\\', "/");
    if !self.test.is_match(&normalised) {
      return false;
    }

    if !self.include.is_empty() && !self.include.iter().any(|root| module_path.starts_with(root)) {
      return false;
    }

    !self
      .exclude
      .as_ref()
      .is_some_and(|pattern| pattern.is_match(&normalised))
  }

  /// Loader names in declaration order.
  pub fn loader_names(&self) -> Vec<&str> {
    self.uses.iter().map(|item| item.loader.as_str()).collect()
  }
}

fn serialize_regex<S: Serializer>(pattern: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(pattern.as_str())
}

fn serialize_optional_regex<S: Serializer>(
  pattern: &Option<Regex>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  match pattern {
    Some(pattern) => serializer.serialize_str(pattern.as_str()),
    None => serializer.serialize_none(),
  }
}

/// Free identifiers rewritten to module imports by the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProvidedGlobals(pub BTreeMap<String, String>);

impl ProvidedGlobals {
  /// `$`, `jQuery` and `window.jQuery` all resolve to the `jquery` package.
  pub fn jquery() -> Self {
    let globals = ["$", "jQuery", "window.jQuery"]
      .into_iter()
      .map(|name| (name.to_string(), "jquery".to_string()))
      .collect();
    Self(globals)
  }

  /// Module providing `identifier`, if any.
  pub fn module_for(&self, identifier: &str) -> Option<&str> {
    self.0.get(identifier).map(String::as_str)
  }
}

/// Loader rules for markup, images, stylesheets and scripts.
///
/// Only the image naming template depends on the build mode, and it is taken from `naming`.
pub fn module_rules(layout: &ProjectLayout, naming: &OutputNaming) -> Vec<ModuleRule> {
  let html = ModuleRule::new(r"\.(html|htm)$", vec![LoaderUse::plain("html-withimg-loader")]);

  let images = ModuleRule::new(
    r"\.(png|jpg|jpe?g|gif|svg)$",
    vec![
      LoaderUse::with_options(
        "url-loader",
        json!({
          "limit": INLINE_IMAGE_LIMIT,
          "name": naming.image_name,
          "outputPath": naming.image_output_path,
        }),
      ),
      LoaderUse::plain("image-webpack-loader"),
    ],
  );

  let css = ModuleRule::new(
    r"\.(css)$",
    vec![
      LoaderUse::plain("css-hot-loader"),
      LoaderUse::plain(CSS_EXTRACT_LOADER),
      LoaderUse::plain("css-loader"),
    ],
  );

  let scss = ModuleRule::new(
    r"\.(scss)$",
    vec![
      LoaderUse::plain("css-hot-loader"),
      LoaderUse::plain(CSS_EXTRACT_LOADER),
      LoaderUse::plain("css-loader"),
      LoaderUse::with_options("postcss-loader", json!({ "plugins": ["autoprefixer"] })),
      LoaderUse::plain("sass-loader"),
    ],
  );

  let mut lint = ModuleRule::new(r"\.js$", vec![LoaderUse::plain("eslint-loader")]);
  lint.enforce = Some(Enforce::Pre);
  lint.include = layout.lint_roots();

  let mut transpile = ModuleRule::new(
    r"\.js$",
    vec![LoaderUse::with_options(
      "babel-loader",
      json!({
        "presets": ["es2015-nostrict"],
        "plugins": ["transform-runtime"],
      }),
    )],
  );
  transpile.exclude = Some(Regex::new("node_modules").expect("invalid exclude pattern"));

  vec![html, images, css, scss, lint, transpile]
}
