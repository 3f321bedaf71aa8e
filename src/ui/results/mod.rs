//! Result presentation.
//!
//! [`present`] maps the request state (and the quiz attempt, for quiz
//! results) to a [`ResultView`]. The view model is rendered to ratatui lines
//! for the interactive screen and to plain text for one-shot output.

mod lines;
mod plain;

use crate::generation::{ActionKind, GenerationOutcome, Question, WeekPlan};
use crate::session::RequestState;
use crate::ui::quiz::{AnswerState, QuizAttempt, QuizState};

pub use lines::{result_lines, SPINNER_FRAMES};
pub use plain::{answer_key, to_plain_text};

pub const PLACEHOLDER_TITLE: &str = "Your results will appear here";
pub const PLACEHOLDER_HINT: &str = "Choose an action above to get started.";

/// What the result pane shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView<'a> {
    Loading { action: ActionKind },
    Error { message: &'a str },
    Placeholder,
    Summary { text: &'a str },
    /// Weeks in ascending week order.
    StudyPlan { weeks: Vec<&'a WeekPlan> },
    Quiz(QuizView),
}

/// How an option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Question not answered yet.
    Selectable,
    /// The designated answer of an answered question.
    Correct,
    /// The user's pick, when it was wrong.
    Incorrect,
    /// Any other option of an answered question.
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub key: char,
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub answered: bool,
    pub focused: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub score: usize,
    pub total: usize,
    /// All questions answered; "Try Again" is offered.
    pub finished: bool,
    pub questions: Vec<QuestionView>,
}

/// Key that answers option `index` ('a', 'b', ...).
pub fn option_key(index: usize) -> char {
    (b'a' + index.min(25) as u8) as char
}

/// Map request state to a view.
///
/// For quiz results `quiz` supplies the attempt; if it holds no attempt at
/// these questions, a fresh one is shown.
pub fn present<'a>(request: &'a RequestState, quiz: &QuizState) -> ResultView<'a> {
    match request {
        RequestState::Idle => ResultView::Placeholder,
        RequestState::InFlight(action) => ResultView::Loading { action: *action },
        RequestState::Failed { message, .. } => ResultView::Error { message },
        RequestState::Succeeded(GenerationOutcome::Summary(text)) => ResultView::Summary { text },
        RequestState::Succeeded(GenerationOutcome::Strategy(weeks)) => {
            let mut weeks: Vec<&WeekPlan> = weeks.iter().collect();
            weeks.sort_by_key(|week| week.week);
            ResultView::StudyPlan { weeks }
        }
        RequestState::Succeeded(GenerationOutcome::Quiz(questions)) => {
            let view = match quiz.attempt() {
                Some(attempt) if attempt.questions() == questions.as_slice() => quiz_view(attempt),
                _ => quiz_view(&QuizAttempt::new(questions.clone())),
            };
            ResultView::Quiz(view)
        }
    }
}

fn quiz_view(attempt: &QuizAttempt) -> QuizView {
    let questions = attempt
        .questions()
        .iter()
        .zip(attempt.answers())
        .enumerate()
        .map(|(index, (question, answer))| QuestionView {
            number: index + 1,
            text: question.question.clone(),
            answered: answer.is_answered(),
            focused: index == attempt.focused(),
            options: option_views(question, answer),
        })
        .collect();

    QuizView {
        score: attempt.score(),
        total: attempt.total(),
        finished: attempt.is_finished(),
        questions,
    }
}

fn option_views(question: &Question, answer: &AnswerState) -> Vec<OptionView> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let mark = match answer.selected() {
                None => OptionMark::Selectable,
                Some(_) if question.is_correct(option) => OptionMark::Correct,
                Some(selected) if selected == option => OptionMark::Incorrect,
                Some(_) => OptionMark::Inert,
            };
            OptionView {
                key: option_key(index),
                text: option.clone(),
                mark,
            }
        })
        .collect()
}
