use crate::{CoreError, Tag};

use std::str::FromStr;

#[test]
fn round_trips_wire_names() {
    for tag in Tag::ALL {
        assert_eq!(Tag::from_str(tag.as_str()).unwrap(), tag);
    }
}

#[test]
fn rejects_unknown_and_lowercase_names() {
    assert!(matches!(
        Tag::from_str("BOGUS"),
        Err(CoreError::InvalidTag { .. })
    ));
    // Matching is exact; the wire format is uppercase only
    assert!(Tag::from_str("vibes").is_err());
}

#[test]
fn serde_uses_screaming_case() {
    let json = serde_json::to_string(&Tag::Productivity).unwrap();
    assert_eq!(json, "\"PRODUCTIVITY\"");

    let tag: Tag = serde_json::from_str("\"WHIMSY\"").unwrap();
    assert_eq!(tag, Tag::Whimsy);
}
