//! Loading and validating the page manifest.

mod loading;
mod validation;

pub use loading::{ManifestError, load_manifest, parse_manifest};
pub use validation::validate_descriptors;
