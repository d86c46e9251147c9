//! Environment-driven image selection for build jobs.
//!
//! A provider configuration carries `IMAGE_*` settings. [`EnvSelector`]
//! turns them into a lookup table once, then maps each build's dist, group
//! and os to an image name by trying candidate keys from most to least
//! specific.

pub mod config;
pub mod image;

pub use config::{ConfigError, ConfigSource, ProviderConfig};
pub use image::{DEFAULT_IMAGE, EnvSelector, LookupTable, Params, Selector, SelectorError, candidate_keys};
