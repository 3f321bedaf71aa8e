//! Document + request state and the orchestration around it.
//!
//! [`Session`] is the single owned state container: current document,
//! upload status and request state. It is synchronous and pure apart from
//! logging. [`Orchestrator`] adds the asynchronous side: it spawns ingestion
//! and generation work and hands completions back as [`SessionEvent`]s, which
//! the owner applies one at a time.
//!
//! Every upload and every request takes a fresh epoch. A completion is only
//! applied if its epoch is still current, so the most recently issued
//! request wins regardless of completion order.

mod orchestrator;
mod state;

pub use orchestrator::{EventSink, Orchestrator, SessionEvent};
pub use state::{
    GenerationResolution, PreconditionError, RequestState, RequestTicket, Session, UploadStatus,
    UploadTicket,
};
