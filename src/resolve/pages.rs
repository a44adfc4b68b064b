use crate::mode::BuildMode;
use crate::models::{ChunksSortMode, MinifyOptions, PageDescriptor, PageOutputSpec};
use crate::project::ProjectLayout;

/// Shared chunk holding third-party dependencies and vendored libraries.
pub const VENDORS_CHUNK: &str = "vendors";

/// Shared chunk holding the remaining static assets.
pub const ASSETS_CHUNK: &str = "assets";

/// Chunks injected into a page, in script-tag order.
///
/// Production pages load the shared vendor and asset bundles ahead of their own chunk;
/// development pages only load their own chunk.
pub fn injected_chunk_names(mode: BuildMode, url: &str) -> Vec<String> {
  match mode {
    BuildMode::Production => vec![
      VENDORS_CHUNK.to_string(),
      ASSETS_CHUNK.to_string(),
      url.to_string(),
    ],
    BuildMode::Development => vec![url.to_string()],
  }
}

/// Build one [`PageOutputSpec`] per page, preserving manifest order.
pub fn resolve_page_outputs(
  layout: &ProjectLayout,
  pages: &[PageDescriptor],
  mode: BuildMode,
) -> Vec<PageOutputSpec> {
  let favicon_path = layout.favicon_path();
  let minify_options = mode.is_production().then_some(MinifyOptions::PRODUCTION);

  pages
    .iter()
    .map(|page| PageOutputSpec {
      page: page.url.clone(),
      template_path: layout.template_path(&page.url),
      output_path: layout.output_path(&page.url),
      favicon_path: favicon_path.clone(),
      injected_chunk_names: injected_chunk_names(mode, &page.url),
      chunks_sort_mode: ChunksSortMode::Manual,
      minify_options,
      xhtml: true,
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn pages() -> Vec<PageDescriptor> {
    vec![PageDescriptor::new("home"), PageDescriptor::new("about")]
  }

  #[test]
  fn development_pages_inject_only_their_own_chunk() {
    let layout = ProjectLayout::with_defaults("/site");
    let outputs = resolve_page_outputs(&layout, &pages(), BuildMode::Development);

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].injected_chunk_names, vec!["home"]);
    assert_eq!(outputs[1].injected_chunk_names, vec!["about"]);
    assert_eq!(outputs[0].output_path, PathBuf::from("/site/dist/home.html"));
    assert_eq!(outputs[1].output_path, PathBuf::from("/site/dist/about.html"));
    assert!(outputs.iter().all(|page| page.minify_options.is_none()));
  }

  #[test]
  fn production_pages_inject_shared_chunks_first() {
    let layout = ProjectLayout::with_defaults("/site");
    let outputs = resolve_page_outputs(&layout, &pages(), BuildMode::Production);

    assert_eq!(
      outputs[0].injected_chunk_names,
      vec!["vendors", "assets", "home"]
    );
    assert_eq!(
      outputs[1].injected_chunk_names,
      vec!["vendors", "assets", "about"]
    );
    assert!(
      outputs
        .iter()
        .all(|page| page.minify_options == Some(MinifyOptions::PRODUCTION))
    );
  }

  #[test]
  fn every_page_shares_favicon_and_manual_ordering() {
    let layout = ProjectLayout::with_defaults("/site");
    let outputs = resolve_page_outputs(&layout, &pages(), BuildMode::Development);

    for page in &outputs {
      assert_eq!(
        page.favicon_path,
        PathBuf::from("/site/src/assets/img/favicon.ico")
      );
      assert_eq!(page.chunks_sort_mode, ChunksSortMode::Manual);
      assert!(page.xhtml);
    }
    assert_eq!(
      outputs[1].template_path,
      PathBuf::from("/site/src/views/about/index.html")
    );
  }
}
