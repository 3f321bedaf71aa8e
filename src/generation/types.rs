use serde::{Deserialize, Serialize};
use std::fmt;

/// The three study artifacts a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ActionKind {
    Summary,
    Strategy,
    Quiz,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Summary, ActionKind::Strategy, ActionKind::Quiz];

    /// Button title.
    pub fn title(self) -> &'static str {
        match self {
            ActionKind::Summary => "Generate Summary",
            ActionKind::Strategy => "Create Study Plan",
            ActionKind::Quiz => "Generate Quiz",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActionKind::Summary => "Get a concise overview of the key points in your document.",
            ActionKind::Strategy => "Receive a structured 4-week plan to master the material.",
            ActionKind::Quiz => "Test your knowledge with randomly generated questions.",
        }
    }

    /// Short name used in messages and logs.
    pub fn noun(self) -> &'static str {
        match self {
            ActionKind::Summary => "summary",
            ActionKind::Strategy => "study plan",
            ActionKind::Quiz => "quiz",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// One week of a study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u8,
    pub title: String,
    pub goals: Vec<String>,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

/// Parsed and validated result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Summary(String),
    /// Weeks sorted by week number.
    Strategy(Vec<WeekPlan>),
    Quiz(Vec<Question>),
}

impl GenerationOutcome {
    /// The action that produces this kind of outcome.
    pub fn action(&self) -> ActionKind {
        match self {
            GenerationOutcome::Summary(_) => ActionKind::Summary,
            GenerationOutcome::Strategy(_) => ActionKind::Strategy,
            GenerationOutcome::Quiz(_) => ActionKind::Quiz,
        }
    }
}
