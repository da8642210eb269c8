// Prompt constants for the recommendation call.

use crate::llm_client::prompts::response_language_instruction;
use crate::models::Profile;

/// System instruction sent with every recommendation request.
pub const RECOMMENDATION_SYSTEM: &str =
    "You are a helpful career advisor focusing on high-income opportunities.";

/// Recommendation prompt template.
/// Replace: {passions}, {skills}, {work_style}, {language_instruction}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Act as an expert career counselor and economist.
The user is looking for a career path that combines their passions with High Income Potential.

User Profile:
- Passions/Interests: {passions}
- Current Skills/Strengths: {skills}
- Preferred Work Style: {work_style}

Task:
Analyze this profile and generate a list of 4 distinct, high-paying career paths or specialties.
Prioritize roles that are projected to have high demand and high salaries in the next 10 years.
Be specific (e.g., instead of just "Doctor", suggest "Neurosurgeon" or "Dermatologist" if it fits).

{language_instruction}"#;

/// Fills the template with the profile answers, verbatim.
pub fn build_recommendation_prompt(profile: &Profile) -> String {
    // Answers go in last so placeholder-like text typed by the user is left alone.
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{language_instruction}", &response_language_instruction())
        .replace("{work_style}", &profile.preferred_work_style)
        .replace("{skills}", &profile.skills)
        .replace("{passions}", &profile.passions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_profile() -> Profile {
        Profile {
            passions: "I love solving logic puzzles and building things".to_string(),
            skills: "math, coding".to_string(),
            preferred_work_style: "remote".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_all_three_answers() {
        let prompt = build_recommendation_prompt(&scenario_profile());
        assert!(prompt.contains("- Passions/Interests: I love solving logic puzzles and building things"));
        assert!(prompt.contains("- Current Skills/Strengths: math, coding"));
        assert!(prompt.contains("- Preferred Work Style: remote"));
    }

    #[test]
    fn test_prompt_pins_output_language() {
        let prompt = build_recommendation_prompt(&scenario_profile());
        assert!(prompt.trim_end().ends_with("Return the response in Spanish."));
    }

    #[test]
    fn test_prompt_asks_for_four_suggestions() {
        let prompt = build_recommendation_prompt(&scenario_profile());
        assert!(prompt.contains("list of 4 distinct, high-paying career paths"));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        let prompt = build_recommendation_prompt(&scenario_profile());
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_user_braces_survive_substitution() {
        let mut profile = scenario_profile();
        profile.passions = "templating with {skills} markers is fun".to_string();
        let prompt = build_recommendation_prompt(&profile);
        assert!(prompt.contains("templating with {skills} markers is fun"));
    }
}
