//! Query engine entry point

/// Response returned until an inference backend is wired in
pub const PLACEHOLDER_RESPONSE: &str = "[Cognexia] Inference engine not implemented yet.";

/// Answer a user query
///
/// This is the stable integration point for future retrieval and inference
/// logic; its signature should not change.
pub fn handle_query(query: &str) -> String {
    log::debug!("Received query ({} chars)", query.chars().count());
    PLACEHOLDER_RESPONSE.to_string()
}
