//! Shape validation for structured replies.
//!
//! The model's text is untrusted. It is parsed into loosely typed raw
//! structs (field presence and JSON types), then checked against the
//! cardinality rules before any [`WeekPlan`] or [`Question`] is built.

use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

use super::types::{Question, WeekPlan};

/// Every quiz question carries exactly this many options.
pub const QUIZ_OPTION_COUNT: usize = 4;

const FIRST_WEEK: i64 = 1;
const LAST_WEEK: i64 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("{0} is empty")]
    Empty(&'static str),

    #[error("week {week} is outside 1..=4")]
    WeekOutOfRange { week: i64 },

    #[error("week {week} appears more than once")]
    DuplicateWeek { week: u8 },

    #[error("week {week} has no goals")]
    NoGoals { week: u8 },

    #[error("question {index} has no text")]
    BlankQuestion { index: usize },

    #[error("question {index} has {count} options, expected 4")]
    OptionCount { index: usize, count: usize },

    #[error("question {index}: answer is not one of the options")]
    AnswerNotAnOption { index: usize },

    #[error("question {index} repeats an option")]
    DuplicateOption { index: usize },
}

#[derive(Deserialize)]
struct RawWeek {
    week: i64,
    title: String,
    goals: Vec<String>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

fn parse_json<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, FormatError> {
    serde_json::from_str(text.trim()).map_err(|e| FormatError::Json(e.to_string()))
}

/// Parse a study plan and return its weeks in ascending week order.
pub fn parse_study_plan(text: &str) -> Result<Vec<WeekPlan>, FormatError> {
    let raw: Vec<RawWeek> = parse_json(text)?;
    if raw.is_empty() {
        return Err(FormatError::Empty("study plan"));
    }

    let mut seen = BTreeSet::new();
    let mut weeks = Vec::with_capacity(raw.len());
    for entry in raw {
        if !(FIRST_WEEK..=LAST_WEEK).contains(&entry.week) {
            return Err(FormatError::WeekOutOfRange { week: entry.week });
        }
        let week = entry.week as u8;
        if !seen.insert(week) {
            return Err(FormatError::DuplicateWeek { week });
        }
        if entry.goals.is_empty() {
            return Err(FormatError::NoGoals { week });
        }
        weeks.push(WeekPlan {
            week,
            title: entry.title,
            goals: entry.goals,
        });
    }

    weeks.sort_by_key(|w| w.week);
    Ok(weeks)
}

/// Parse a quiz. Question order is preserved.
pub fn parse_quiz(text: &str) -> Result<Vec<Question>, FormatError> {
    let raw: Vec<RawQuestion> = parse_json(text)?;
    if raw.is_empty() {
        return Err(FormatError::Empty("quiz"));
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.question.trim().is_empty() {
                return Err(FormatError::BlankQuestion { index });
            }
            if entry.options.len() != QUIZ_OPTION_COUNT {
                return Err(FormatError::OptionCount {
                    index,
                    count: entry.options.len(),
                });
            }
            let distinct: BTreeSet<&str> = entry.options.iter().map(String::as_str).collect();
            if distinct.len() != entry.options.len() {
                return Err(FormatError::DuplicateOption { index });
            }
            if !entry.options.contains(&entry.answer) {
                return Err(FormatError::AnswerNotAnOption { index });
            }
            Ok(Question {
                question: entry.question,
                options: entry.options,
                answer: entry.answer,
            })
        })
        .collect()
}
