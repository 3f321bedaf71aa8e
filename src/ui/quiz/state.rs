//! State for the quiz view.

use crate::generation::Question;
use crate::ui::mvi::UiState;

/// Answer state of a single question.
///
/// `Answered` is final until the whole attempt is retried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(String),
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Unanswered => None,
            Self::Answered(option) => Some(option),
        }
    }
}

/// One attempt at a fixed set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    pub(super) questions: Vec<Question>,
    pub(super) answers: Vec<AnswerState>,
    pub(super) score: usize,
    pub(super) focused: usize,
}

impl QuizAttempt {
    /// Fresh attempt: everything unanswered, score 0.
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![AnswerState::Unanswered; questions.len()];
        Self {
            questions,
            answers,
            score: 0,
            focused: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerState] {
        &self.answers
    }

    pub fn answer(&self, question: usize) -> Option<&AnswerState> {
        self.answers.get(question)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Question that option keys apply to.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Every question answered; retry becomes available.
    pub fn is_finished(&self) -> bool {
        self.answers.iter().all(AnswerState::is_answered)
    }
}

/// Quiz view state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    /// No quiz result on screen.
    #[default]
    Inactive,
    Active(QuizAttempt),
}

impl UiState for QuizState {}

impl QuizState {
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        match self {
            Self::Inactive => None,
            Self::Active(attempt) => Some(attempt),
        }
    }

    /// True if this state already holds an attempt at `questions`.
    pub fn is_attempting(&self, questions: &[Question]) -> bool {
        self.attempt()
            .is_some_and(|attempt| attempt.questions() == questions)
    }
}
