use async_trait::async_trait;

use super::backend::CompletionBackend;
use super::error::GenerationError;
use super::parse::{parse_quiz, parse_study_plan, FormatError};
use super::prompts::build_request;
use super::types::{ActionKind, GenerationOutcome};

/// Turns document text into a study artifact.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        action: ActionKind,
        text: &str,
    ) -> Result<GenerationOutcome, GenerationError>;
}

/// [`Generator`] over any [`CompletionBackend`].
///
/// This is the error boundary for generation: backend diagnostics are
/// logged here and callers only see [`GenerationError`].
pub struct GenerationClient<B> {
    backend: B,
}

impl<B: CompletionBackend> GenerationClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait]
impl<B: CompletionBackend> Generator for GenerationClient<B> {
    async fn generate(
        &self,
        action: ActionKind,
        text: &str,
    ) -> Result<GenerationOutcome, GenerationError> {
        let request = build_request(action, text);
        let completion = self.backend.complete(request).await.map_err(|source| {
            tracing::error!(
                backend = self.backend.name(),
                action = %action,
                error = %source,
                "Generation request failed"
            );
            GenerationError::Service { action, source }
        })?;

        decode(action, &completion.text).map_err(|source| {
            tracing::warn!(
                backend = self.backend.name(),
                action = %action,
                error = %source,
                "Generation response rejected"
            );
            GenerationError::Format { action, source }
        })
    }
}

/// Interpret raw reply text for `action`.
///
/// Summaries are taken verbatim; plans and quizzes must pass validation.
pub fn decode(action: ActionKind, text: &str) -> Result<GenerationOutcome, FormatError> {
    match action {
        ActionKind::Summary => Ok(GenerationOutcome::Summary(text.to_string())),
        ActionKind::Strategy => parse_study_plan(text).map(GenerationOutcome::Strategy),
        ActionKind::Quiz => parse_quiz(text).map(GenerationOutcome::Quiz),
    }
}
