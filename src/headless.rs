//! One-shot, non-interactive generation for `--action`.

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::document::{ingest, IngestError, PageExtractor, UploadedFile};
use crate::generation::{ActionKind, GenerationOutcome, Generator};
use crate::session::{PreconditionError, RequestState, Session};
use crate::ui::quiz::QuizState;
use crate::ui::results::{answer_key, present, to_plain_text};

/// Failure of a one-shot run. Displays the user-facing message.
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("{}", .0.user_message())]
    Ingest(#[source] IngestError),

    #[error("{}", .0.user_message())]
    Precondition(#[source] PreconditionError),

    #[error("{message}")]
    Generation { message: String },
}

/// Ingest `path`, generate `action` and return the plain-text result.
///
/// Runs through the same [`Session`] transitions as the interactive UI.
/// Quiz output is followed by an answer key.
pub async fn run_once(
    path: &Path,
    action: ActionKind,
    generator: &dyn Generator,
    extractor: Arc<dyn PageExtractor>,
) -> Result<String, HeadlessError> {
    let mut session = Session::new();

    let file = UploadedFile::from_path(path).map_err(|err| HeadlessError::Ingest(err.into()))?;
    let ticket = session.begin_upload(&file).map_err(HeadlessError::Ingest)?;
    let document = match ingest(file, extractor).await {
        Ok(document) => document,
        Err(err) => {
            session.reject_upload(&err);
            return Err(HeadlessError::Ingest(err));
        }
    };
    session.finish_upload(ticket, Ok(document));

    let ticket = session
        .begin_request(action)
        .map_err(HeadlessError::Precondition)?;
    let result = generator.generate(ticket.action, &ticket.text).await;
    session.finish_request(ticket.resolve(result));

    match session.request() {
        RequestState::Failed { message, .. } => Err(HeadlessError::Generation {
            message: message.clone(),
        }),
        request => {
            let mut out = to_plain_text(&present(request, &QuizState::Inactive));
            if let RequestState::Succeeded(GenerationOutcome::Quiz(questions)) = request {
                out.push('\n');
                out.push_str(&answer_key(questions));
            }
            Ok(out)
        }
    }
}
