use serde::Deserialize;

/// Raw submission payload.
///
/// Every field is optional at the wire level so that absence is reported as
/// a validation error (400 "Missing required fields") instead of a body
/// parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub submitted_by: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
