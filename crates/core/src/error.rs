/// Errors produced while turning an OpenAPI document into code.
///
/// Schema shape problems never surface here; they degrade to looser types.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to parse OpenAPI document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
