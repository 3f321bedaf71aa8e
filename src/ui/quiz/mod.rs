//! Quiz attempt: per-question answering and scoring.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - attempt state and per-question answer state
//! - `intent.rs` - answer / retry / focus actions
//! - `reducer.rs` - transitions and scoring

mod intent;
mod reducer;
mod state;

pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{AnswerState, QuizAttempt, QuizState};
