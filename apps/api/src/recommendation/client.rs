//! Recommendation client. Issues one provider call per submitted profile.
//!
//! `AppState` carries an `Arc<dyn Recommender>`; the Gemini-backed
//! implementation is the default, tests swap in a scripted one.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, GeminiClient, LlmError};
use crate::models::{CareerSuggestion, Profile};
use crate::recommendation::prompts::{build_recommendation_prompt, RECOMMENDATION_SYSTEM};
use crate::recommendation::schema::suggestion_list_schema;

/// Failure of a recommendation request. Decode problems are not in here:
/// they come back as an empty list.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Provider call failed: {0}")]
    Provider(LlmError),

    #[error("Recommendation task did not complete: {0}")]
    Interrupted(String),
}

impl From<LlmError> for RequestError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => RequestError::MissingApiKey,
            other => RequestError::Provider(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not a valid suggestion list: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, profile: &Profile) -> Result<Vec<CareerSuggestion>, RequestError>;
}

/// Default recommender backed by Gemini structured output.
pub struct GeminiRecommender {
    llm: GeminiClient,
    schema: Value,
}

impl GeminiRecommender {
    pub fn new(llm: GeminiClient) -> Self {
        Self {
            llm,
            schema: suggestion_list_schema(),
        }
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(&self, profile: &Profile) -> Result<Vec<CareerSuggestion>, RequestError> {
        get_recommendations(&self.llm, &self.schema, profile).await
    }
}

/// Builds the prompt, issues the call and decodes the answer.
///
/// An answer with no text, or text that does not decode as a suggestion
/// list, yields an empty list rather than an error.
pub async fn get_recommendations(
    llm: &GeminiClient,
    schema: &Value,
    profile: &Profile,
) -> Result<Vec<CareerSuggestion>, RequestError> {
    let prompt = build_recommendation_prompt(profile);
    let response = llm
        .generate_structured(&prompt, RECOMMENDATION_SYSTEM, schema)
        .await?;

    let Some(text) = response.text() else {
        warn!(
            "Provider returned no text content (finish reason: {})",
            response.finish_reason().unwrap_or("unknown")
        );
        return Ok(Vec::new());
    };

    match decode_suggestions(&text) {
        Ok(suggestions) => {
            info!("Decoded {} career suggestions", suggestions.len());
            Ok(suggestions)
        }
        Err(e) => {
            warn!("Discarding provider output: {e}");
            Ok(Vec::new())
        }
    }
}

/// Typed parse of the provider text. Keeps "garbage" apart from "empty".
pub fn decode_suggestions(text: &str) -> Result<Vec<CareerSuggestion>, DecodeError> {
    Ok(serde_json::from_str(strip_json_fences(text))?)
}
