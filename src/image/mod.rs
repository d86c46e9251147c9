mod candidates;
mod env_selector;
mod lookup;
mod params;

pub use candidates::candidate_keys;
pub use env_selector::EnvSelector;
pub use lookup::{IMAGE_KEY_PREFIX, LookupTable, modify_build_group, normalize_key};
pub use params::Params;

/// Image name returned when no candidate key matches.
pub const DEFAULT_IMAGE: &str = "default";

/// Common interface for anything that maps build parameters to an image name.
#[async_trait::async_trait]
pub trait Selector: Send + Sync {
    async fn select(&self, params: &Params) -> Result<String, SelectorError>;
}

/// ---- Errors ----
///
/// Kept so every `Selector` shares one signature; `EnvSelector` never
/// returns it.
#[derive(thiserror::Error, Debug)]
pub enum SelectorError {
    #[error("image selection unavailable: {0}")]
    Unavailable(String),
}
