mod project;
mod tag;

/// Build an owned tag list from literals
pub(crate) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
