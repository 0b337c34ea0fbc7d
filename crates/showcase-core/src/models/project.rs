//! Project entity - one accepted submission on the public list.

use crate::{CoreError, Result as CoreErrorResult, Tag};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_URL_LEN: usize = 500;
pub const MAX_SUBMITTED_BY_LEN: usize = 100;

/// A project submission, in the exact shape it is persisted and served.
/// Field names follow the wire format (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub url: String,
    pub submitted_by: String,
    /// Always non-empty; submitted order and duplicates preserved.
    pub tags: Vec<Tag>,
    /// Milliseconds since epoch, assigned at acceptance time.
    pub timestamp: i64,
}

impl Project {
    /// Validate a raw submission and build the record to persist.
    ///
    /// Checks run in a fixed order:
    /// 1. presence - every field non-empty, `tags` a non-empty sequence
    /// 2. length ceilings on the values as submitted (before trimming)
    /// 3. tag filtering against `vocabulary`; unknown entries are dropped
    ///    silently and the submission is rejected only if nothing survives
    ///
    /// String fields are stored trimmed; the timestamp is taken here, never
    /// from the client.
    #[track_caller]
    pub fn from_submission(
        name: &str,
        url: &str,
        submitted_by: &str,
        tags: &[String],
        vocabulary: &[Tag],
    ) -> CoreErrorResult<Self> {
        if name.is_empty() || url.is_empty() || submitted_by.is_empty() || tags.is_empty() {
            return Err(CoreError::MissingFields {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::check_len("name", name, MAX_NAME_LEN)?;
        Self::check_len("url", url, MAX_URL_LEN)?;
        Self::check_len("submittedBy", submitted_by, MAX_SUBMITTED_BY_LEN)?;

        let filtered: Vec<Tag> = tags
            .iter()
            .filter_map(|t| Tag::from_str(t).ok())
            .filter(|t| vocabulary.contains(t))
            .collect();

        if filtered.is_empty() {
            return Err(CoreError::NoValidTags {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            submitted_by: submitted_by.trim().to_string(),
            tags: filtered,
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    #[track_caller]
    fn check_len(field: &'static str, value: &str, max: usize) -> CoreErrorResult<()> {
        if value.chars().count() > max {
            return Err(CoreError::FieldTooLong {
                field,
                max,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
