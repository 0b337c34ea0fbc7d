use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required fields {location}")]
    MissingFields { location: ErrorLocation },

    #[error("Field too long: {field} exceeds {max} characters {location}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        location: ErrorLocation,
    },

    #[error("No valid tags in submission {location}")]
    NoValidTags { location: ErrorLocation },

    #[error("Invalid tag: {value} {location}")]
    InvalidTag {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
