use serde::{Deserialize, Serialize};

/// One ranked career recommendation as returned by the provider.
///
/// Never built locally outside tests. `match_score` is kept exactly as
/// received; no clamping to 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
    pub match_score: i64,
    #[serde(rename = "salaryRangeUSD")]
    pub salary_range_usd: String,
    pub education_path: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub why_it_fits: String,
    #[serde(default)]
    pub growth_outlook: String,
}
