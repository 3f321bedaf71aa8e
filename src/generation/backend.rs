use async_trait::async_trait;
use serde_json::Value;

use super::error::BackendError;

/// A single prompt, optionally constrained to a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// When set, the reply must be JSON matching this schema.
    pub schema: Option<Value>,
}

/// Raw text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

/// The hosted model, seen as "prompt in, text out".
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Name for logging.
    fn name(&self) -> &'static str;

    /// One round trip. No retries.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BackendError>;
}
