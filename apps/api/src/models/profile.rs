use serde::{Deserialize, Serialize};

/// The three answers collected by the assessment wizard.
///
/// Only the wizard builds one, and only after every field has cleared its
/// step's threshold. Field names follow the wire shape used by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub passions: String,
    pub skills: String,
    pub preferred_work_style: String,
}
