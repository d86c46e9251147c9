use serde::{Deserialize, Serialize};

/// Selection criteria carried by a build request.
///
/// Empty fields mean "not specified"; they never produce a candidate key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub dist: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub os: String,
}

impl Params {
    pub fn new(dist: impl Into<String>, group: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            dist: dist.into(),
            group: group.into(),
            os: os.into(),
        }
    }

    pub fn with_dist(mut self, dist: impl Into<String>) -> Self {
        self.dist = dist.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    pub fn has_dist(&self) -> bool {
        !self.dist.is_empty()
    }

    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }

    pub fn has_os(&self) -> bool {
        !self.os.is_empty()
    }
}
