// Cross-cutting prompt fragments shared by every structured call.
// Feature-specific prompts live in a prompts.rs next to the feature.

/// Language every generated answer is written in, whatever the UI language.
pub const RESPONSE_LANGUAGE: &str = "Spanish";

/// MIME type that switches the provider into schema-constrained JSON output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Closing instruction that pins the output language.
pub fn response_language_instruction() -> String {
    format!("Return the response in {RESPONSE_LANGUAGE}.")
}
