//! Configuration resolver composing every resolution step into one bundler configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::manifest::{load_manifest, validate_descriptors};
use crate::mode::BuildMode;
use crate::models::{EntryMap, PageDescriptor, PageOutputSpec};
use crate::project::ProjectLayout;
use crate::resolve::{
  CssExtractNaming, ModuleRule, OptimizationPolicy, OutputNaming, ProvidedGlobals,
  module_rules, resolve_entries, resolve_page_outputs, select_optimization_policy,
  select_output_naming,
};

/// Complete configuration handed to the external bundler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
  /// Mode the configuration was resolved for.
  pub mode: BuildMode,
  /// Page identifier to entry module.
  pub entry: EntryMap,
  /// Output root and filename templates.
  pub output: OutputNaming,
  /// Minification and code splitting.
  pub optimization: OptimizationPolicy,
  /// Loader rules applied to modules.
  pub module_rules: Vec<ModuleRule>,
  /// One generated HTML page per manifest entry, in manifest order.
  pub pages: Vec<PageOutputSpec>,
  /// Globals injected as module imports.
  pub provide: ProvidedGlobals,
  /// Extracted stylesheet naming.
  pub css_extract: CssExtractNaming,
}

impl BuildConfiguration {
  /// Output spec of a page by identifier.
  pub fn page(&self, url: &str) -> Option<&PageOutputSpec> {
    self.pages.iter().find(|page| page.page == url)
  }

  /// Serialise the configuration as JSON.
  pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
    if pretty {
      serde_json::to_string_pretty(self)
    } else {
      serde_json::to_string(self)
    }
  }
}

/// High-level helper resolving manifests against a project layout.
pub struct ConfigurationResolver {
  layout: ProjectLayout,
}

impl ConfigurationResolver {
  /// Create a resolver for the provided layout.
  pub fn new(layout: ProjectLayout) -> Self {
    Self { layout }
  }

  /// Layout every path is resolved against.
  pub fn layout(&self) -> &ProjectLayout {
    &self.layout
  }

  /// Pure `(pages, mode) -> configuration` transform.
  ///
  /// The caller is responsible for validating `pages`; use
  /// [`ConfigurationResolver::resolve_validated`] or
  /// [`ConfigurationResolver::resolve_from_manifest`] for untrusted input.
  pub fn resolve(&self, pages: &[PageDescriptor], mode: BuildMode) -> BuildConfiguration {
    let output = select_output_naming(&self.layout, mode);
    let module_rules = module_rules(&self.layout, &output);
    let css_extract = output.css.clone();

    let configuration = BuildConfiguration {
      mode,
      entry: resolve_entries(&self.layout, pages),
      optimization: select_optimization_policy(&self.layout, mode),
      module_rules,
      pages: resolve_page_outputs(&self.layout, pages, mode),
      provide: ProvidedGlobals::jquery(),
      css_extract,
      output,
    };

    tracing::info!(
      %mode,
      pages = configuration.pages.len(),
      minimize = configuration.optimization.minimize,
      "resolved build configuration"
    );
    configuration
  }

  /// Validate `pages` before resolving, rejecting empty and duplicate identifiers.
  pub fn resolve_validated(
    &self,
    pages: &[PageDescriptor],
    mode: BuildMode,
  ) -> Result<BuildConfiguration> {
    validate_descriptors(pages).context("invalid page manifest")?;
    Ok(self.resolve(pages, mode))
  }

  /// Load the manifest at `manifest_path` and resolve it.
  pub fn resolve_from_manifest(
    &self,
    manifest_path: &Path,
    mode: BuildMode,
  ) -> Result<BuildConfiguration> {
    let pages = load_manifest(manifest_path)
      .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;
    Ok(self.resolve(&pages, mode))
  }

  /// Resolve the manifest at the layout's default manifest location.
  pub fn resolve_default_manifest(&self, mode: BuildMode) -> Result<BuildConfiguration> {
    self.resolve_from_manifest(&self.layout.manifest_path(), mode)
  }
}
