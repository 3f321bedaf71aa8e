use crate::generation::{ActionKind, GenerationOutcome};
use crate::session::{Orchestrator, RequestState, Session, SessionEvent, UploadStatus};
use crate::ui::mvi::Reducer;
use crate::ui::path_input::PathInput;
use crate::ui::quiz::{QuizIntent, QuizReducer, QuizState};
use crate::ui::results::{present, ResultView};

/// Which body the UI shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    /// No document loaded: path prompt.
    Upload,
    /// Document loaded: action bar and result pane.
    Document,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    orchestrator: Orchestrator,
    /// Model name shown in the header.
    model: String,
    /// Quiz attempt for the current quiz result (MVI pattern).
    quiz: QuizState,
    path_input: PathInput,
    /// Transient message shown above the result pane.
    notice: Option<String>,
    scroll: u16,
    animation_tick: u64,
}

impl App {
    pub fn new(orchestrator: Orchestrator, model: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            orchestrator,
            model: model.into(),
            quiz: QuizState::default(),
            path_input: PathInput::new(),
            notice: None,
            scroll: 0,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &Session {
        self.orchestrator.session()
    }

    pub fn screen(&self) -> Screen {
        if self.session().document().is_some() {
            Screen::Document
        } else {
            Screen::Upload
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn path_input(&self) -> &PathInput {
        &self.path_input
    }

    pub fn path_input_mut(&mut self) -> &mut PathInput {
        &mut self.path_input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn animation_tick(&self) -> u64 {
        self.animation_tick
    }

    pub fn is_processing_upload(&self) -> bool {
        matches!(self.session().upload_status(), UploadStatus::Processing { .. })
    }

    pub fn result_view(&self) -> ResultView<'_> {
        present(self.session().request(), &self.quiz)
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn on_session_event(&mut self, event: SessionEvent) {
        if self.orchestrator.apply(event) {
            self.sync_quiz();
        }
    }

    /// Upload the file named in the path input.
    pub fn submit_path(&mut self) {
        if self.path_input.is_empty() || self.is_processing_upload() {
            return;
        }
        let path = self.path_input.path().to_string();
        self.upload(&path);
    }

    pub fn upload(&mut self, path: &str) {
        self.notice = None;
        if let Err(err) = self.orchestrator.upload_path(path) {
            tracing::warn!(path, error = %err, "Upload rejected");
        }
    }

    pub fn select_action(&mut self, action: ActionKind) {
        match self.orchestrator.select(action) {
            Ok(()) => {
                self.notice = None;
                self.scroll = 0;
                self.sync_quiz();
            }
            Err(err) => self.notice = Some(err.user_message().to_string()),
        }
    }

    /// Drop the document and go back to the upload prompt.
    pub fn reset(&mut self) {
        self.orchestrator.reset();
        self.path_input.clear();
        self.notice = None;
        self.scroll = 0;
        self.sync_quiz();
    }

    /// Answer the focused question with option `option`.
    pub fn answer(&mut self, option: usize) {
        let Some(attempt) = self.quiz.attempt() else {
            return;
        };
        let question = attempt.focused();
        dispatch_mvi!(
            self,
            quiz,
            QuizReducer,
            QuizIntent::SelectOption { question, option }
        );
    }

    pub fn retry_quiz(&mut self) {
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::Retry);
        self.scroll = 0;
    }

    pub fn focus_next_question(&mut self) {
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::FocusNext);
    }

    pub fn focus_prev_question(&mut self) {
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::FocusPrev);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Keep the quiz attempt in step with the request state.
    fn sync_quiz(&mut self) {
        let questions = match self.orchestrator.session().request() {
            RequestState::Succeeded(GenerationOutcome::Quiz(questions)) => questions,
            _ => {
                dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::Clear);
                return;
            }
        };
        if self.quiz.is_attempting(questions) {
            return;
        }
        let questions = questions.clone();
        dispatch_mvi!(self, quiz, QuizReducer, QuizIntent::Load { questions });
    }
}
