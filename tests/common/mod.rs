//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use pdfstudy::document::{ExtractError, PageExtractor};
use pdfstudy::generation::{
    ActionKind, BackendError, GenerationError, GenerationOutcome, Generator, Question, WeekPlan,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Extractor returning fixed pages, or failing.
pub struct FakeExtractor {
    pages: Option<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeExtractor {
    pub fn with_pages(pages: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            pages: Some(pages.iter().map(|page| page.to_string()).collect()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            pages: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageExtractor for FakeExtractor {
    fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .clone()
            .ok_or_else(|| ExtractError::new("no text layer"))
    }
}

/// Scripted reply for one action. `None` fails with a service error.
#[derive(Clone)]
struct Script {
    delay: Duration,
    outcome: Option<GenerationOutcome>,
}

/// Generator with per-action canned outcomes and delays.
#[derive(Default)]
pub struct FakeGenerator {
    scripts: Mutex<HashMap<ActionKind, Script>>,
    calls: Mutex<Vec<(ActionKind, String)>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(self, outcome: GenerationOutcome, delay: Duration) -> Self {
        let action = outcome.action();
        self.scripts.lock().unwrap().insert(
            action,
            Script {
                delay,
                outcome: Some(outcome),
            },
        );
        self
    }

    pub fn fail(self, action: ActionKind, delay: Duration) -> Self {
        self.scripts.lock().unwrap().insert(
            action,
            Script {
                delay,
                outcome: None,
            },
        );
        self
    }

    /// Every call so far: action and the document text it received.
    pub fn calls(&self) -> Vec<(ActionKind, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(
        &self,
        action: ActionKind,
        text: &str,
    ) -> Result<GenerationOutcome, GenerationError> {
        self.calls.lock().unwrap().push((action, text.to_string()));
        let script = self.scripts.lock().unwrap().get(&action).cloned();
        let Some(script) = script else {
            return Err(GenerationError::Service {
                action,
                source: BackendError::EmptyResponse,
            });
        };
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        script.outcome.ok_or(GenerationError::Service {
            action,
            source: BackendError::Api {
                status: 503,
                message: "overloaded".to_string(),
            },
        })
    }
}

/// Write `bytes` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write temp file");
    (dir, path)
}

/// A `.pdf` file of exactly `len` bytes (sparse).
pub fn sized_pdf(len: u64) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("big.pdf");
    let file = std::fs::File::create(&path).expect("Failed to create file");
    file.set_len(len).expect("Failed to size file");
    (dir, path)
}

pub fn sample_summary() -> GenerationOutcome {
    GenerationOutcome::Summary("Photosynthesis converts light into chemical energy.".to_string())
}

pub fn sample_plan() -> GenerationOutcome {
    GenerationOutcome::Strategy(
        (1..=4)
            .map(|week| WeekPlan {
                week,
                title: format!("Week {} topic", week),
                goals: vec![format!("Goal for week {}", week)],
            })
            .collect(),
    )
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            question: "What do plants absorb?".to_string(),
            options: vec![
                "Light".to_string(),
                "Sound".to_string(),
                "Heat only".to_string(),
                "Nothing".to_string(),
            ],
            answer: "Light".to_string(),
        },
        Question {
            question: "Where does photosynthesis happen?".to_string(),
            options: vec![
                "Roots".to_string(),
                "Chloroplasts".to_string(),
                "Bark".to_string(),
                "Flowers".to_string(),
            ],
            answer: "Chloroplasts".to_string(),
        },
    ]
}

pub fn sample_quiz() -> GenerationOutcome {
    GenerationOutcome::Quiz(sample_questions())
}

/// Five questions whose answer is always the second option ("b").
pub fn five_questions() -> Vec<Question> {
    (1..=5)
        .map(|n| Question {
            question: format!("Question {n}?"),
            options: ["Wrong", "Right", "Close", "Far"]
                .iter()
                .map(|option| format!("{option} {n}"))
                .collect(),
            answer: format!("Right {n}"),
        })
        .collect()
}
