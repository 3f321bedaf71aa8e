//! Prompts and response schemas per action.

use serde_json::{json, Value};

use super::backend::CompletionRequest;
use super::parse::QUIZ_OPTION_COUNT;
use super::types::ActionKind;

const QUIZ_QUESTION_COUNT: usize = 5;

/// Build the request for `action` over the full document `text`.
pub fn build_request(action: ActionKind, text: &str) -> CompletionRequest {
    match action {
        ActionKind::Summary => CompletionRequest {
            prompt: format!(
                "Based on the following document, provide a concise and well-structured summary. \
                 Highlight key concepts, important points, and definitions:\n\n---\n\n{}",
                text
            ),
            schema: None,
        },
        ActionKind::Strategy => CompletionRequest {
            prompt: format!(
                "Analyze the provided document and create a comprehensive four-week study strategy. \
                 Break down the topics into manageable weekly modules with clear goals. \
                 The plan should balance reading, revision, and practice sessions.\n\n\
                 Document Content:\n---\n{}\n---\n",
                text
            ),
            schema: Some(study_plan_schema()),
        },
        ActionKind::Quiz => CompletionRequest {
            prompt: format!(
                "Generate a random quiz with {} multiple-choice questions based on the content of \
                 the following document. Each question must have exactly {} options, and one must \
                 be the correct answer.\n\nDocument Content:\n---\n{}\n---\n",
                QUIZ_QUESTION_COUNT, QUIZ_OPTION_COUNT, text
            ),
            schema: Some(quiz_schema()),
        },
    }
}

/// Array of `{week, title, goals}`.
pub fn study_plan_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "week": {
                    "type": "INTEGER",
                    "description": "The week number (1-4)."
                },
                "title": {
                    "type": "STRING",
                    "description": "A concise title for the week's focus."
                },
                "goals": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of specific topics or goals to cover during the week."
                }
            },
            "required": ["week", "title", "goals"]
        }
    })
}

/// Array of `{question, options[4], answer}`.
pub fn quiz_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The question text."
                },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "minItems": QUIZ_OPTION_COUNT,
                    "maxItems": QUIZ_OPTION_COUNT,
                    "description": "An array of 4 possible answers."
                },
                "answer": {
                    "type": "STRING",
                    "description": "The correct answer, which must be one of the options."
                }
            },
            "required": ["question", "options", "answer"]
        }
    })
}
