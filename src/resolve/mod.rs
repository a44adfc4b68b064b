//! Pure resolution steps turning page descriptors and a build mode into bundler settings.
//!
//! Each step lives in its own submodule so that entry resolution, page outputs, output
//! naming, code splitting and loader rules can be tested independently. The
//! [`crate::ConfigurationResolver`] composes them into a single configuration.

mod entries;
mod optimization;
mod output;
mod pages;
mod rules;

pub use entries::resolve_entries;
pub use optimization::{
  CacheGroupRule, OptimizationPolicy, SplitChunksPolicy, SplitChunksScope, resolve_cache_group,
  select_optimization_policy,
};
pub use output::{CssExtractNaming, OutputNaming, select_output_naming};
pub use pages::{ASSETS_CHUNK, VENDORS_CHUNK, injected_chunk_names, resolve_page_outputs};
pub use rules::{Enforce, LoaderUse, ModuleRule, ProvidedGlobals, module_rules};
