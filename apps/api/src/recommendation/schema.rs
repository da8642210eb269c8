use serde_json::{json, Value};

/// Fields every suggestion object must carry. `requiredSkills` and
/// `growthOutlook` are requested but optional.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "title",
    "description",
    "matchScore",
    "salaryRangeUSD",
    "educationPath",
    "whyItFits",
];

/// Provider-side response schema: an ordered array of suggestion objects.
pub fn suggestion_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Job title or Specialty" },
                "description": { "type": "STRING", "description": "Brief description of the role" },
                "matchScore": {
                    "type": "INTEGER",
                    "description": "0 to 100 score of how well it fits the user"
                },
                "salaryRangeUSD": {
                    "type": "STRING",
                    "description": "Estimated annual salary range in USD (e.g. '$100k - $150k')"
                },
                "educationPath": {
                    "type": "STRING",
                    "description": "What degree or certification is needed"
                },
                "requiredSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
                "whyItFits": {
                    "type": "STRING",
                    "description": "Explanation of why this aligns with user passions"
                },
                "growthOutlook": {
                    "type": "STRING",
                    "description": "Future market demand (High, Very High, Stable)"
                }
            },
            "required": REQUIRED_FIELDS
        }
    })
}
