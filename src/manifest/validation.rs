use std::collections::HashMap;

use crate::manifest::ManifestError;
use crate::models::PageDescriptor;

/// Reject manifests that would collapse two pages onto one entry or output file.
pub fn validate_descriptors(pages: &[PageDescriptor]) -> Result<(), ManifestError> {
  let mut seen: HashMap<&str, usize> = HashMap::with_capacity(pages.len());

  for (index, page) in pages.iter().enumerate() {
    if page.url.trim().is_empty() {
      return Err(ManifestError::EmptyUrl { index });
    }

    if let Some(&first) = seen.get(page.url.as_str()) {
      return Err(ManifestError::DuplicateUrl {
        url: page.url.clone(),
        first,
        duplicate: index,
      });
    }
    seen.insert(&page.url, index);
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pages(urls: &[&str]) -> Vec<PageDescriptor> {
    urls.iter().map(|url| PageDescriptor::new(*url)).collect()
  }

  #[test]
  fn accepts_unique_urls() {
    assert!(validate_descriptors(&pages(&["home", "about", "blog/post"])).is_ok());
  }

  #[test]
  fn accepts_empty_manifest() {
    assert!(validate_descriptors(&[]).is_ok());
  }

  #[test]
  fn reports_both_positions_of_a_duplicate() {
    let err = validate_descriptors(&pages(&["home", "about", "home"])).unwrap_err();
    match err {
      ManifestError::DuplicateUrl {
        url,
        first,
        duplicate,
      } => {
        assert_eq!(url, "home");
        assert_eq!(first, 0);
        assert_eq!(duplicate, 2);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn rejects_blank_urls() {
    let err = validate_descriptors(&pages(&["home", "  "])).unwrap_err();
    assert!(matches!(err, ManifestError::EmptyUrl { index: 1 }));
  }
}
