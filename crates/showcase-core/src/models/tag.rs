use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Submission category label.
///
/// The full vocabulary is fixed; a deployment may accept only a subset
/// (configured via `submissions.tags`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    Whimsy,
    Beauty,
    Productivity,
    Profit,
    Vibes,
    Personal,
}

impl Tag {
    /// Every tag the system knows about, in wire order.
    pub const ALL: [Tag; 6] = [
        Tag::Whimsy,
        Tag::Beauty,
        Tag::Productivity,
        Tag::Profit,
        Tag::Vibes,
        Tag::Personal,
    ];

    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whimsy => "WHIMSY",
            Self::Beauty => "BEAUTY",
            Self::Productivity => "PRODUCTIVITY",
            Self::Profit => "PROFIT",
            Self::Vibes => "VIBES",
            Self::Personal => "PERSONAL",
        }
    }
}

impl FromStr for Tag {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "WHIMSY" => Ok(Self::Whimsy),
            "BEAUTY" => Ok(Self::Beauty),
            "PRODUCTIVITY" => Ok(Self::Productivity),
            "PROFIT" => Ok(Self::Profit),
            "VIBES" => Ok(Self::Vibes),
            "PERSONAL" => Ok(Self::Personal),
            _ => Err(CoreError::InvalidTag {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
