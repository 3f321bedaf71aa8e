mod common;

use common::{sample_plan, sample_quiz, sample_summary, temp_file, FakeExtractor, FakeGenerator};
use pdfstudy::generation::{ActionKind, GenerationOutcome};
use pdfstudy::session::{EventSink, Orchestrator, RequestState, SessionEvent, UploadStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

const FAST: Duration = Duration::from_millis(10);
const SLOW: Duration = Duration::from_millis(150);

fn orchestrator(generator: FakeGenerator) -> (Orchestrator, UnboundedReceiver<SessionEvent>) {
    let (tx, rx) = unbounded_channel();
    let sink: EventSink = Arc::new(move |event| {
        let _ = tx.send(event);
    });
    let orchestrator = Orchestrator::new(
        Arc::new(generator),
        FakeExtractor::with_pages(&["Chapter 1", "Chapter 2"]),
        tokio::runtime::Handle::current(),
        sink,
    );
    (orchestrator, rx)
}

async fn next_event(rx: &mut UnboundedReceiver<SessionEvent>) -> SessionEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event within timeout")
        .expect("sink alive")
}

async fn upload(orchestrator: &mut Orchestrator, rx: &mut UnboundedReceiver<SessionEvent>) {
    let (_dir, path) = temp_file("notes.pdf", b"%PDF-1.4");
    orchestrator.upload_path(&path).unwrap();
    assert!(matches!(
        orchestrator.session().upload_status(),
        UploadStatus::Processing { .. }
    ));
    let event = next_event(rx).await;
    assert!(orchestrator.apply(event));
    assert!(orchestrator.session().document().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn later_request_wins_when_it_finishes_first() {
    let generator = FakeGenerator::new()
        .succeed(sample_summary(), SLOW)
        .succeed(sample_quiz(), FAST);
    let (mut orchestrator, mut rx) = orchestrator(generator);
    upload(&mut orchestrator, &mut rx).await;

    orchestrator.select(ActionKind::Summary).unwrap();
    orchestrator.select(ActionKind::Quiz).unwrap();
    assert_eq!(
        orchestrator.session().request(),
        &RequestState::InFlight(ActionKind::Quiz)
    );

    let quiz = next_event(&mut rx).await;
    assert!(orchestrator.apply(quiz));
    assert_eq!(
        orchestrator.session().request(),
        &RequestState::Succeeded(sample_quiz())
    );

    let summary = next_event(&mut rx).await;
    assert!(!orchestrator.apply(summary));
    assert_eq!(
        orchestrator.session().request(),
        &RequestState::Succeeded(sample_quiz())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn later_request_wins_when_it_finishes_last() {
    let generator = FakeGenerator::new()
        .succeed(sample_summary(), FAST)
        .succeed(sample_plan(), SLOW);
    let (mut orchestrator, mut rx) = orchestrator(generator);
    upload(&mut orchestrator, &mut rx).await;

    orchestrator.select(ActionKind::Strategy).unwrap();
    orchestrator.select(ActionKind::Summary).unwrap();
    orchestrator.select(ActionKind::Strategy).unwrap();

    // Summary resolves first but was superseded.
    let mut applied = Vec::new();
    for _ in 0..3 {
        let event = next_event(&mut rx).await;
        applied.push(orchestrator.apply(event));
    }
    assert_eq!(applied.iter().filter(|changed| **changed).count(), 1);
    assert!(matches!(
        orchestrator.session().request(),
        RequestState::Succeeded(GenerationOutcome::Strategy(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn generator_receives_document_text() {
    let generator = Arc::new(FakeGenerator::new().succeed(sample_summary(), FAST));
    let (tx, mut rx) = unbounded_channel();
    let sink: EventSink = Arc::new(move |event| {
        let _ = tx.send(event);
    });
    let mut orchestrator = Orchestrator::new(
        generator.clone(),
        FakeExtractor::with_pages(&["Alpha", "Beta"]),
        tokio::runtime::Handle::current(),
        sink,
    );
    upload(&mut orchestrator, &mut rx).await;

    orchestrator.select(ActionKind::Summary).unwrap();
    let event = next_event(&mut rx).await;
    assert!(orchestrator.apply(event));

    assert_eq!(
        generator.calls(),
        vec![(ActionKind::Summary, "Alpha\nBeta\n".to_string())]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_generation_shows_message() {
    let generator = FakeGenerator::new().fail(ActionKind::Strategy, FAST);
    let (mut orchestrator, mut rx) = orchestrator(generator);
    upload(&mut orchestrator, &mut rx).await;

    orchestrator.select(ActionKind::Strategy).unwrap();
    let event = next_event(&mut rx).await;
    assert!(orchestrator.apply(event));
    assert_eq!(
        orchestrator.session().request(),
        &RequestState::Failed {
            action: ActionKind::Strategy,
            message: "Failed to generate study plan. Please try again.".to_string()
        }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn select_before_upload_is_refused() {
    let (mut orchestrator, _rx) = orchestrator(FakeGenerator::new());
    assert!(orchestrator.select(ActionKind::Summary).is_err());
    assert_eq!(orchestrator.session().request(), &RequestState::Idle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reset_discards_in_flight_result() {
    let generator = FakeGenerator::new().succeed(sample_summary(), FAST);
    let (mut orchestrator, mut rx) = orchestrator(generator);
    upload(&mut orchestrator, &mut rx).await;

    orchestrator.select(ActionKind::Summary).unwrap();
    orchestrator.reset();

    let event = next_event(&mut rx).await;
    assert!(!orchestrator.apply(event));
    assert!(orchestrator.session().document().is_none());
    assert_eq!(orchestrator.session().request(), &RequestState::Idle);
}
