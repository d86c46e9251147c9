use std::collections::HashMap;

use crate::config::ConfigSource;

/// Only configuration keys carrying this prefix feed the lookup table.
pub const IMAGE_KEY_PREFIX: &str = "IMAGE_";

const POWER_GROUP_UNDERSCORE: &str = "group_power_";
const POWER_GROUP_HYPHEN: &str = "group_power-";

/// Environment variable names cannot carry a `-`, but `power-*` group tags
/// do. Rewrite the first `group_power_` so those groups stay addressable.
/// Later occurrences are left alone.
pub fn modify_build_group(key: &str) -> String {
    if key.contains(POWER_GROUP_UNDERSCORE) {
        return key.replacen(POWER_GROUP_UNDERSCORE, POWER_GROUP_HYPHEN, 1);
    }

    key.to_string()
}

/// Turn a raw configuration key into a lookup key, or `None` when the key is
/// not an image setting.
pub fn normalize_key(raw: &str) -> Option<String> {
    // Only the leading prefix goes; `IMAGE_OS_IMAGE_X` keys as `os_image_x`.
    let rest = raw.strip_prefix(IMAGE_KEY_PREFIX)?;
    Some(modify_build_group(&rest.to_lowercase()))
}

/// Normalized key -> image name. Built once, read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    pub fn build(source: &(impl ConfigSource + ?Sized)) -> Self {
        let mut entries = HashMap::new();

        source.each(&mut |key, value| {
            if let Some(normalized) = normalize_key(key) {
                tracing::trace!(raw = key, key = %normalized, image = value, "image lookup entry");
                entries.insert(normalized, value.to_string());
            }
        });

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key, for stable display.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        out.sort();
        out
    }
}
