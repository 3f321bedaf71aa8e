use std::sync::Arc;
use thiserror::Error;

use crate::document::{Document, IngestError, UploadedFile};
use crate::generation::{ActionKind, GenerationError, GenerationOutcome};

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// An action was selected with no document loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no document loaded")]
pub struct PreconditionError;

impl PreconditionError {
    pub fn user_message(&self) -> &'static str {
        "Please upload a PDF first."
    }
}

/// Lifecycle of the current generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(ActionKind),
    /// The outcome's variant identifies the action that produced it.
    Succeeded(GenerationOutcome),
    Failed {
        action: ActionKind,
        message: String,
    },
}

impl RequestState {
    /// Action this state belongs to, if any.
    pub fn action(&self) -> Option<ActionKind> {
        match self {
            RequestState::Idle => None,
            RequestState::InFlight(action) | RequestState::Failed { action, .. } => Some(*action),
            RequestState::Succeeded(outcome) => Some(outcome.action()),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight(_))
    }
}

/// Upload area status, independent of the loaded document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Processing {
        file_name: String,
    },
    Rejected {
        message: String,
    },
}

/// Issued by [`Session::begin_upload`]; hand back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub epoch: u64,
}

/// Issued by [`Session::begin_request`]; carries everything the request needs.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub epoch: u64,
    pub action: ActionKind,
    pub text: Arc<str>,
}

impl RequestTicket {
    /// Pair this ticket with the generation result.
    pub fn resolve(
        &self,
        result: Result<GenerationOutcome, GenerationError>,
    ) -> GenerationResolution {
        GenerationResolution {
            epoch: self.epoch,
            action: self.action,
            result,
        }
    }
}

/// A finished generation call, tagged with the epoch it was issued under.
#[derive(Debug)]
pub struct GenerationResolution {
    pub epoch: u64,
    pub action: ActionKind,
    pub result: Result<GenerationOutcome, GenerationError>,
}

/// Owned state: current document, upload status and request state.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Document>,
    upload: UploadStatus,
    request: RequestState,
    upload_epoch: u64,
    request_epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Validate `file` and, if accepted, start a new upload.
    ///
    /// A rejected file only updates the upload status; document and request
    /// state are left alone.
    pub fn begin_upload(&mut self, file: &UploadedFile) -> Result<UploadTicket, IngestError> {
        if let Err(err) = file.validate() {
            let err = IngestError::from(err);
            self.reject_upload(&err);
            return Err(err);
        }

        self.upload_epoch += 1;
        self.upload = UploadStatus::Processing {
            file_name: file.file_name.clone(),
        };
        Ok(UploadTicket {
            epoch: self.upload_epoch,
        })
    }

    /// Record an upload failure that happened before a ticket was issued.
    pub fn reject_upload(&mut self, err: &IngestError) {
        tracing::warn!(error = %err, "Upload rejected");
        self.upload = UploadStatus::Rejected {
            message: err.user_message().to_string(),
        };
    }

    /// Apply the result of an upload. Returns `false` for stale tickets.
    ///
    /// A new document clears any previous request; in-flight requests for
    /// the old document become stale.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<Document, IngestError>,
    ) -> bool {
        if ticket.epoch != self.upload_epoch {
            tracing::debug!(
                epoch = ticket.epoch,
                current = self.upload_epoch,
                "Dropping stale upload result"
            );
            return false;
        }

        match result {
            Ok(document) => {
                tracing::info!(file = %document.file_name(), "Document loaded");
                self.document = Some(document);
                self.upload = UploadStatus::Idle;
                self.request = RequestState::Idle;
                self.request_epoch += 1;
            }
            Err(err) => self.reject_upload(&err),
        }
        true
    }

    /// Start a request for `action`.
    ///
    /// Supersedes whatever request state was live, including an in-flight one.
    pub fn begin_request(&mut self, action: ActionKind) -> Result<RequestTicket, PreconditionError> {
        let text = self
            .document
            .as_ref()
            .map(Document::shared_text)
            .ok_or(PreconditionError)?;

        self.request_epoch += 1;
        self.request = RequestState::InFlight(action);
        tracing::debug!(action = %action, epoch = self.request_epoch, "Request issued");

        Ok(RequestTicket {
            epoch: self.request_epoch,
            action,
            text,
        })
    }

    /// Apply a generation result. Returns `false` if it was superseded.
    pub fn finish_request(&mut self, resolution: GenerationResolution) -> bool {
        let GenerationResolution {
            epoch,
            action,
            result,
        } = resolution;

        if epoch != self.request_epoch || self.request != RequestState::InFlight(action) {
            tracing::debug!(
                action = %action,
                epoch,
                current = self.request_epoch,
                "Dropping superseded generation result"
            );
            return false;
        }

        self.request = match result {
            Ok(outcome) if outcome.action() == action => RequestState::Succeeded(outcome),
            Ok(outcome) => {
                tracing::error!(
                    action = %action,
                    produced = %outcome.action(),
                    "Generator returned an outcome for a different action"
                );
                RequestState::Failed {
                    action,
                    message: UNKNOWN_ERROR.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(action = %action, error = %err, "Generation failed");
                RequestState::Failed {
                    action,
                    message: err.user_message().to_string(),
                }
            }
        };
        true
    }

    /// Drop the document and any request, regardless of what is in flight.
    pub fn reset(&mut self) {
        self.document = None;
        self.upload = UploadStatus::Idle;
        self.request = RequestState::Idle;
        self.upload_epoch += 1;
        self.request_epoch += 1;
    }
}
