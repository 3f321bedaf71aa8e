//! Intents for the quiz view.

use crate::generation::Question;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// A quiz result arrived; start a fresh attempt.
    Load { questions: Vec<Question> },

    /// The result on screen is no longer a quiz.
    Clear,

    /// Pick option `option` (index into the options) for `question`.
    /// Ignored if the question is already answered.
    SelectOption { question: usize, option: usize },

    /// Start over with the same questions. Only honoured once finished.
    Retry,

    FocusNext,
    FocusPrev,
}

impl Intent for QuizIntent {}
