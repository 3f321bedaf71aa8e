//! Generation of study artifacts from document text.
//!
//! # Layers
//!
//! ```text
//! Generator (action + text → outcome)
//!     └── CompletionBackend (prompt + schema → raw text)
//!             └── GeminiBackend (HTTP)
//! ```
//!
//! The backend only moves text. Parsing and shape validation of structured
//! responses happen in [`decode`], so a malformed reply becomes a
//! [`FormatError`] regardless of which backend produced it.

mod backend;
mod client;
mod error;
mod gemini;
mod parse;
mod prompts;
mod types;

pub use backend::{Completion, CompletionBackend, CompletionRequest};
pub use client::{decode, GenerationClient, Generator};
pub use error::{BackendError, GenerationError};
pub use gemini::GeminiBackend;
pub use parse::{parse_quiz, parse_study_plan, FormatError, QUIZ_OPTION_COUNT};
pub use prompts::{build_request, quiz_schema, study_plan_schema};
pub use types::{ActionKind, GenerationOutcome, Question, WeekPlan};
