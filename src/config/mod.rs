mod models;

use std::collections::{BTreeMap, HashMap};
use std::{env, fs, path::Path};

pub use models::ProviderConfig;

/// Anything that can enumerate configured key/value pairs for a selector.
///
/// Enumeration order is not part of the contract. When a source yields the
/// same key twice, consumers keep the last value they see.
pub trait ConfigSource {
    fn each(&self, f: &mut dyn FnMut(&str, &str));
}

impl ConfigSource for ProviderConfig {
    fn each(&self, f: &mut dyn FnMut(&str, &str)) {
        for (key, value) in self.entries() {
            f(key, value);
        }
    }
}

impl ConfigSource for HashMap<String, String> {
    fn each(&self, f: &mut dyn FnMut(&str, &str)) {
        for (key, value) in self {
            f(key, value);
        }
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn each(&self, f: &mut dyn FnMut(&str, &str)) {
        for (key, value) in self {
            f(key, value);
        }
    }
}

// ---- Loaders (serde hidden from callers) ----

impl ProviderConfig {
    /// Collect every process environment variable starting with `prefix`,
    /// with the prefix removed from the stored key.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_vars(prefix, env::vars())
    }

    /// Same as [`ProviderConfig::from_env`] over an explicit set of pairs.
    pub fn from_vars<I, K, V>(prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        vars.into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), value.into()))
            })
            .collect()
    }

    /// Load from a JSON file holding a flat object of strings.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let parsed: HashMap<String, String> = serde_json::from_str(json).map_err(ConfigError::Json)?;
        Ok(parsed.into_iter().collect())
    }

    /// Load from an env var containing JSON.
    pub fn from_env_json(var: &str) -> Result<Self, ConfigError> {
        let s = env::var(var).map_err(|_| ConfigError::MissingEnv(var.to_string()))?;
        Self::from_json_str(&s)
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
