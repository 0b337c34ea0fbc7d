use crate::SubmissionsConfig;

#[test]
fn default_vocabulary_is_the_full_set() {
    let config = SubmissionsConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.tags.contains(&String::from("PERSONAL")));
    assert_eq!(config.tags.len(), 6);
}

#[test]
fn empty_vocabulary_is_rejected() {
    let config = SubmissionsConfig {
        tags: vec![],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn empty_tag_name_is_rejected() {
    let config = SubmissionsConfig {
        tags: vec![String::from("VIBES"), String::new()],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
