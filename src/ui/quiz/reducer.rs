//! Reducer for the quiz view.

use crate::ui::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::{AnswerState, QuizAttempt, QuizState};

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::Load { questions } => QuizState::Active(QuizAttempt::new(questions)),

            QuizIntent::Clear => QuizState::Inactive,

            QuizIntent::SelectOption { question, option } => match state {
                QuizState::Active(attempt) => QuizState::Active(select(attempt, question, option)),
                other => other,
            },

            QuizIntent::Retry => match state {
                QuizState::Active(attempt) if attempt.is_finished() => {
                    QuizState::Active(QuizAttempt::new(attempt.questions))
                }
                other => other,
            },

            QuizIntent::FocusNext => match state {
                QuizState::Active(mut attempt) => {
                    attempt.focused = if attempt.focused + 1 >= attempt.total() {
                        0
                    } else {
                        attempt.focused + 1
                    };
                    QuizState::Active(attempt)
                }
                other => other,
            },

            QuizIntent::FocusPrev => match state {
                QuizState::Active(mut attempt) => {
                    attempt.focused = if attempt.focused == 0 {
                        attempt.total().saturating_sub(1)
                    } else {
                        attempt.focused - 1
                    };
                    QuizState::Active(attempt)
                }
                other => other,
            },
        }
    }
}

/// Answer `question` with option index `option`, scoring at most once.
fn select(mut attempt: QuizAttempt, question: usize, option: usize) -> QuizAttempt {
    let Some(AnswerState::Unanswered) = attempt.answers.get(question) else {
        return attempt;
    };
    let Some(choice) = attempt.questions[question].options.get(option).cloned() else {
        return attempt;
    };

    if attempt.questions[question].is_correct(&choice) {
        attempt.score += 1;
    }
    attempt.answers[question] = AnswerState::Answered(choice);

    // Move on to the next question, if any.
    if question + 1 < attempt.total() {
        attempt.focused = question + 1;
    }
    attempt
}
