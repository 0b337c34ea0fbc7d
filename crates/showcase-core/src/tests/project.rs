use crate::tests::tags;
use crate::{CoreError, MAX_NAME_LEN, Project, Tag};

#[test]
fn valid_submission_is_trimmed_and_filtered() {
    let project = Project::from_submission(
        "  Foo  ",
        " http://x ",
        " Al ",
        &tags(&["VIBES", "BOGUS"]),
        &Tag::ALL,
    )
    .unwrap();

    assert_eq!(project.name, "Foo");
    assert_eq!(project.url, "http://x");
    assert_eq!(project.submitted_by, "Al");
    assert_eq!(project.tags, vec![Tag::Vibes]);
    assert!(project.timestamp > 0);
}

#[test]
fn empty_name_is_missing_fields() {
    let result = Project::from_submission("", "http://x", "Al", &tags(&["VIBES"]), &Tag::ALL);
    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}

#[test]
fn empty_tags_is_missing_fields() {
    let result = Project::from_submission("Foo", "http://x", "Al", &[], &Tag::ALL);
    assert!(matches!(result, Err(CoreError::MissingFields { .. })));
}

#[test]
fn whitespace_only_name_passes_presence_check() {
    // Presence is checked before trimming, so "   " is accepted and stored
    // trimmed. Mirrors the production behavior of the list this backs.
    let project =
        Project::from_submission("   ", "http://x", "Al", &tags(&["VIBES"]), &Tag::ALL).unwrap();
    assert_eq!(project.name, "");
}

#[test]
fn name_over_limit_is_field_too_long() {
    let name = "x".repeat(MAX_NAME_LEN + 1);
    let result = Project::from_submission(&name, "http://x", "Al", &tags(&["VIBES"]), &Tag::ALL);
    assert!(matches!(
        result,
        Err(CoreError::FieldTooLong { field: "name", .. })
    ));
}

#[test]
fn name_at_limit_is_accepted() {
    let name = "x".repeat(MAX_NAME_LEN);
    let result = Project::from_submission(&name, "http://x", "Al", &tags(&["VIBES"]), &Tag::ALL);
    assert!(result.is_ok());
}

#[test]
fn length_limit_counts_characters_not_bytes() {
    // 100 two-byte characters is 200 bytes but still within the limit
    let name = "é".repeat(MAX_NAME_LEN);
    let result = Project::from_submission(&name, "http://x", "Al", &tags(&["VIBES"]), &Tag::ALL);
    assert!(result.is_ok());
}

#[test]
fn all_invalid_tags_is_rejected() {
    let result = Project::from_submission(
        "Foo",
        "http://x",
        "Al",
        &tags(&["BOGUS", "NONSENSE"]),
        &Tag::ALL,
    );
    assert!(matches!(result, Err(CoreError::NoValidTags { .. })));
}

#[test]
fn vocabulary_restricts_accepted_tags() {
    // The PERSONAL-less deployment drops PERSONAL like any unknown tag
    let vocabulary = [
        Tag::Whimsy,
        Tag::Beauty,
        Tag::Productivity,
        Tag::Profit,
        Tag::Vibes,
    ];
    let result =
        Project::from_submission("Foo", "http://x", "Al", &tags(&["PERSONAL"]), &vocabulary);
    assert!(matches!(result, Err(CoreError::NoValidTags { .. })));

    let project = Project::from_submission(
        "Foo",
        "http://x",
        "Al",
        &tags(&["PERSONAL", "VIBES"]),
        &vocabulary,
    )
    .unwrap();
    assert_eq!(project.tags, vec![Tag::Vibes]);
}

#[test]
fn tag_order_and_duplicates_are_preserved() {
    let project = Project::from_submission(
        "Foo",
        "http://x",
        "Al",
        &tags(&["VIBES", "WHIMSY", "VIBES"]),
        &Tag::ALL,
    )
    .unwrap();
    assert_eq!(project.tags, vec![Tag::Vibes, Tag::Whimsy, Tag::Vibes]);
}

#[test]
fn serializes_with_wire_field_names() {
    let project = Project::from_submission(
        "Foo",
        "http://x",
        "Al",
        &tags(&["VIBES"]),
        &Tag::ALL,
    )
    .unwrap();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["name"], "Foo");
    assert_eq!(json["submittedBy"], "Al");
    assert_eq!(json["tags"][0], "VIBES");
    assert!(json["timestamp"].is_i64());
}
