use crate::models::{EntryMap, PageDescriptor};
use crate::project::ProjectLayout;

/// Map every page identifier to `<views>/<url>/index.<ext>`.
///
/// Entry files are not checked for existence; a missing module surfaces later as a
/// resolution error from the bundler itself.
pub fn resolve_entries(layout: &ProjectLayout, pages: &[PageDescriptor]) -> EntryMap {
  pages
    .iter()
    .map(|page| {
      let entry = layout.entry_path(&page.url);
      tracing::debug!(page = %page.url, entry = %entry.display(), "resolved entry");
      (page.url.clone(), entry)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn one_entry_per_page() {
    let layout = ProjectLayout::with_defaults("/site");
    let pages = vec![PageDescriptor::new("home"), PageDescriptor::new("about")];

    let entries = resolve_entries(&layout, &pages);

    assert_eq!(entries.len(), 2);
    assert_eq!(
      entries["home"],
      PathBuf::from("/site/src/views/home/index.js")
    );
    assert_eq!(
      entries["about"],
      PathBuf::from("/site/src/views/about/index.js")
    );
  }

  #[test]
  fn does_not_require_entry_files_to_exist() {
    let layout = ProjectLayout::with_defaults("/definitely/not/here");
    let entries = resolve_entries(&layout, &[PageDescriptor::new("ghost")]);
    assert!(!entries["ghost"].exists());
  }

  #[test]
  fn nested_urls_resolve_into_nested_directories() {
    let layout = ProjectLayout::with_defaults("/site");
    let entries = resolve_entries(&layout, &[PageDescriptor::new("blog/post")]);
    assert_eq!(
      entries["blog/post"],
      PathBuf::from("/site/src/views/blog/post/index.js")
    );
  }
}
