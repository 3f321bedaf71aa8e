use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::document::{ingest, Document, IngestError, PageExtractor, UploadedFile};
use crate::generation::{ActionKind, Generator};

use super::state::{GenerationResolution, PreconditionError, Session, UploadTicket};

/// Completion of background work, to be fed back into [`Orchestrator::apply`].
#[derive(Debug)]
pub enum SessionEvent {
    Ingested {
        ticket: UploadTicket,
        result: Result<Document, IngestError>,
    },
    Generated(GenerationResolution),
}

/// Receives [`SessionEvent`]s from background tasks.
pub type EventSink = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Drives a [`Session`]: starts uploads and requests on a tokio runtime and
/// applies their completions.
pub struct Orchestrator {
    session: Session,
    generator: Arc<dyn Generator>,
    extractor: Arc<dyn PageExtractor>,
    runtime: Handle,
    sink: EventSink,
}

impl Orchestrator {
    pub fn new(
        generator: Arc<dyn Generator>,
        extractor: Arc<dyn PageExtractor>,
        runtime: Handle,
        sink: EventSink,
    ) -> Self {
        Self {
            session: Session::new(),
            generator,
            extractor,
            runtime,
            sink,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Pick the file at `path` for upload.
    pub fn upload_path(&mut self, path: impl AsRef<Path>) -> Result<(), IngestError> {
        match UploadedFile::from_path(path) {
            Ok(file) => self.upload(file),
            Err(err) => {
                let err = IngestError::from(err);
                self.session.reject_upload(&err);
                Err(err)
            }
        }
    }

    /// Validate `file` now and ingest it in the background.
    pub fn upload(&mut self, file: UploadedFile) -> Result<(), IngestError> {
        let ticket = self.session.begin_upload(&file)?;
        let extractor = Arc::clone(&self.extractor);
        let sink = Arc::clone(&self.sink);

        self.runtime.spawn(async move {
            let result = ingest(file, extractor).await;
            sink(SessionEvent::Ingested { ticket, result });
        });
        Ok(())
    }

    /// Issue one generation request for `action`.
    ///
    /// The state is `InFlight(action)` when this returns. A request that is
    /// superseded keeps running; its result is dropped on arrival.
    pub fn select(&mut self, action: ActionKind) -> Result<(), PreconditionError> {
        let ticket = self.session.begin_request(action)?;
        let generator = Arc::clone(&self.generator);
        let sink = Arc::clone(&self.sink);

        self.runtime.spawn(async move {
            let result = generator.generate(ticket.action, &ticket.text).await;
            sink(SessionEvent::Generated(ticket.resolve(result)));
        });
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Apply a completion. Returns `true` if it changed state.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Ingested { ticket, result } => self.session.finish_upload(ticket, result),
            SessionEvent::Generated(resolution) => self.session.finish_request(resolution),
        }
    }
}
