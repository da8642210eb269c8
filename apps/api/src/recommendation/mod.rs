// Recommendation client: turns a submitted Profile into ranked career
// suggestions through one schema-constrained provider call.
// All provider traffic goes through llm_client.

pub mod client;
pub mod prompts;
pub mod schema;

pub use client::{GeminiRecommender, Recommender, RequestError};
