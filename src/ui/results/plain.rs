//! Plain-text rendering for one-shot (non-interactive) output.

use std::fmt::Write;

use crate::generation::Question;

use super::{OptionMark, ResultView, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

/// Render a view as plain text.
pub fn to_plain_text(view: &ResultView<'_>) -> String {
    let mut out = String::new();
    match view {
        ResultView::Loading { action } => {
            let _ = writeln!(out, "Generating {}...", action);
        }
        ResultView::Error { message } => {
            let _ = writeln!(out, "{}", message);
        }
        ResultView::Placeholder => {
            let _ = writeln!(out, "{}\n{}", PLACEHOLDER_TITLE, PLACEHOLDER_HINT);
        }
        ResultView::Summary { text } => {
            out.push_str("Document Summary\n\n");
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
        ResultView::StudyPlan { weeks } => {
            out.push_str("Your 4-Week Study Plan\n");
            for week in weeks {
                let _ = writeln!(out, "\nWeek {}: {}", week.week, week.title);
                for goal in &week.goals {
                    let _ = writeln!(out, "  - {}", goal);
                }
            }
        }
        ResultView::Quiz(quiz) => {
            let _ = writeln!(out, "Quiz Time!  Score: {} / {}", quiz.score, quiz.total);
            for question in &quiz.questions {
                let _ = writeln!(out, "\n{}. {}", question.number, question.text);
                for option in &question.options {
                    let marker = match option.mark {
                        OptionMark::Correct => " [correct]",
                        OptionMark::Incorrect => " [your answer]",
                        OptionMark::Selectable | OptionMark::Inert => "",
                    };
                    let _ = writeln!(out, "   {}) {}{}", option.key, option.text, marker);
                }
            }
        }
    }
    out
}

/// "Answer key" section listing the correct option of each question.
pub fn answer_key(questions: &[Question]) -> String {
    let mut out = String::from("Answer key\n");
    for (index, question) in questions.iter().enumerate() {
        let key = question
            .options
            .iter()
            .position(|option| question.is_correct(option))
            .map(super::option_key)
            .unwrap_or('?');
        let _ = writeln!(out, "  {}. {}) {}", index + 1, key, question.answer);
    }
    out
}
