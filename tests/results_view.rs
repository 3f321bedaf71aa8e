mod common;

use common::{sample_plan, sample_questions, sample_quiz, sample_summary};
use pdfstudy::generation::{ActionKind, GenerationOutcome, WeekPlan};
use pdfstudy::session::RequestState;
use pdfstudy::ui::mvi::Reducer;
use pdfstudy::ui::quiz::{QuizIntent, QuizReducer, QuizState};
use pdfstudy::ui::results::{
    answer_key, present, to_plain_text, OptionMark, ResultView, PLACEHOLDER_TITLE,
};

#[test]
fn idle_shows_placeholder() {
    let view = present(&RequestState::Idle, &QuizState::Inactive);
    assert_eq!(view, ResultView::Placeholder);
    assert!(to_plain_text(&view).starts_with(PLACEHOLDER_TITLE));
}

#[test]
fn in_flight_shows_loading_for_that_action() {
    let view = present(
        &RequestState::InFlight(ActionKind::Quiz),
        &QuizState::Inactive,
    );
    assert_eq!(to_plain_text(&view), "Generating quiz...\n");
}

#[test]
fn summary_text_is_shown_verbatim() {
    let request = RequestState::Succeeded(sample_summary());
    let view = present(&request, &QuizState::Inactive);
    assert_eq!(
        view,
        ResultView::Summary {
            text: "Photosynthesis converts light into chemical energy."
        }
    );
}

#[test]
fn study_plan_renders_every_week_in_order() {
    let GenerationOutcome::Strategy(mut weeks) = sample_plan() else {
        unreachable!()
    };
    weeks.reverse();
    let request = RequestState::Succeeded(GenerationOutcome::Strategy(weeks));

    let text = to_plain_text(&present(&request, &QuizState::Inactive));
    let positions: Vec<usize> = (1..=4)
        .map(|week| text.find(&format!("Week {}: Week {} topic", week, week)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn quiz_view_follows_attempt() {
    let request = RequestState::Succeeded(sample_quiz());
    let quiz = QuizReducer::reduce(
        QuizState::Inactive,
        QuizIntent::Load {
            questions: sample_questions(),
        },
    );
    let quiz = QuizReducer::reduce(quiz, QuizIntent::SelectOption { question: 1, option: 0 });

    let ResultView::Quiz(view) = present(&request, &quiz) else {
        panic!("expected quiz view");
    };
    assert_eq!((view.score, view.total), (0, 2));
    assert!(!view.finished);
    assert!(!view.questions[0].answered);
    assert_eq!(view.questions[1].options[0].mark, OptionMark::Incorrect);
    assert_eq!(view.questions[1].options[1].mark, OptionMark::Correct);
    assert_eq!(view.questions[1].options[2].mark, OptionMark::Inert);
}

#[test]
fn stale_attempt_is_not_shown_for_new_questions() {
    let old = vec![sample_questions()[0].clone()];
    let quiz = QuizReducer::reduce(QuizState::Inactive, QuizIntent::Load { questions: old });
    let quiz = QuizReducer::reduce(quiz, QuizIntent::SelectOption { question: 0, option: 0 });

    let request = RequestState::Succeeded(sample_quiz());
    let ResultView::Quiz(view) = present(&request, &quiz) else {
        panic!("expected quiz view");
    };
    assert_eq!(view.total, 2);
    assert_eq!(view.score, 0);
}

#[test]
fn failure_message_is_shown() {
    let request = RequestState::Failed {
        action: ActionKind::Summary,
        message: "Failed to generate summary. Please try again.".to_string(),
    };
    assert_eq!(
        to_plain_text(&present(&request, &QuizState::Inactive)),
        "Failed to generate summary. Please try again.\n"
    );
}

#[test]
fn answer_key_lists_letters() {
    assert_eq!(
        answer_key(&sample_questions()),
        "Answer key\n  1. a) Light\n  2. b) Chloroplasts\n"
    );
}

#[test]
fn single_week_plan() {
    let week = WeekPlan {
        week: 3,
        title: "Review".to_string(),
        goals: vec![],
    };
    let text = to_plain_text(&ResultView::StudyPlan { weeks: vec![&week] });
    assert!(text.contains("Week 3: Review"));
}
