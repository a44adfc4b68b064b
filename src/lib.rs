#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod logger;
pub mod manifest;
pub mod mode;
pub mod models;
pub mod project;
pub mod resolve;
pub mod resolver;

pub use config::ProjectConfig;
pub use manifest::{ManifestError, load_manifest};
pub use mode::BuildMode;
pub use models::{EntryMap, MinifyOptions, PageDescriptor, PageOutputSpec};
pub use project::ProjectLayout;
pub use resolver::{BuildConfiguration, ConfigurationResolver};
