use crate::{ConfigError, ConfigErrorResult, DEFAULT_TAGS};

use serde::Deserialize;

/// Per-deployment submission behavior.
///
/// One binary serves every deployment variant; the differences (whether the
/// DELETE verb exists, which tag vocabulary is accepted) live here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmissionsConfig {
    /// Expose the DELETE verb (remove-by-index)
    pub allow_delete: bool,
    /// Accepted tag vocabulary, uppercase wire names.
    /// Unknown names are rejected at server startup.
    pub tags: Vec<String>,
}

impl Default for SubmissionsConfig {
    fn default() -> Self {
        Self {
            allow_delete: true,
            tags: DEFAULT_TAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SubmissionsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.tags.is_empty() {
            return Err(ConfigError::submissions(
                "submissions.tags must name at least one tag",
            ));
        }

        if let Some(bad) = self.tags.iter().find(|t| t.is_empty()) {
            return Err(ConfigError::submissions(format!(
                "submissions.tags contains an empty entry: {:?}",
                bad
            )));
        }

        Ok(())
    }
}
