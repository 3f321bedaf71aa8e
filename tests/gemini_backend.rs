mod common;

use common::mock_backend::{MockBackend, MockResponse};
use pdfstudy::config::{GenerationConfig, SecureString};
use pdfstudy::generation::{
    ActionKind, BackendError, CompletionBackend, CompletionRequest, GeminiBackend,
    GenerationClient, GenerationError, GenerationOutcome, Generator,
};

fn backend(mock: &MockBackend) -> GeminiBackend {
    let config = GenerationConfig {
        base_url: mock.base_url(),
        model: "gemini-test".to_string(),
        timeout_seconds: Some(5),
        ..GenerationConfig::default()
    };
    GeminiBackend::new(&config, SecureString::new("secret-key".to_string())).unwrap()
}

#[tokio::test]
async fn request_targets_model_endpoint_with_key_header() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::candidate_text("hello"))
        .await;

    let completion = backend(&mock)
        .complete(CompletionRequest {
            prompt: "Say hello".to_string(),
            schema: None,
        })
        .await
        .unwrap();
    assert_eq!(completion.text, "hello");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(request.header("x-goog-api-key"), Some("secret-key"));

    let body = request.json();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Say hello");
    assert!(body.get("generationConfig").is_none());
}

#[tokio::test]
async fn summary_round_trip() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::candidate_text("Key point one.\nKey point two."))
        .await;
    let client = GenerationClient::new(backend(&mock));

    let outcome = client
        .generate(ActionKind::Summary, "Document body")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Summary("Key point one.\nKey point two.".to_string())
    );

    let body = mock.captured_requests().await[0].json();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Document body"));
}

#[tokio::test]
async fn study_plan_request_carries_schema() {
    let plan = r#"[
        {"week": 2, "title": "Practice", "goals": ["Solve problems"]},
        {"week": 1, "title": "Basics", "goals": ["Read chapter 1", "Take notes"]}
    ]"#;
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::candidate_text(plan)).await;
    let client = GenerationClient::new(backend(&mock));

    let outcome = client
        .generate(ActionKind::Strategy, "text")
        .await
        .unwrap();
    let GenerationOutcome::Strategy(weeks) = outcome else {
        panic!("expected a study plan");
    };
    assert_eq!(weeks.iter().map(|w| w.week).collect::<Vec<_>>(), vec![1, 2]);

    let body = mock.captured_requests().await[0].json();
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
}

#[tokio::test]
async fn malformed_quiz_is_a_format_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::candidate_text("Here is your quiz!"))
        .await;
    let client = GenerationClient::new(backend(&mock));

    let err = client.generate(ActionKind::Quiz, "text").await.unwrap_err();
    assert!(matches!(err, GenerationError::Format { .. }));
    assert_eq!(
        err.user_message(),
        "Failed to generate quiz. The model might have returned an unexpected format."
    );
}

#[tokio::test]
async fn api_error_is_a_service_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(503, "The model is overloaded"))
        .await;
    let client = GenerationClient::new(backend(&mock));

    let err = client
        .generate(ActionKind::Summary, "text")
        .await
        .unwrap_err();
    match &err {
        GenerationError::Service {
            source: BackendError::Api { status, message },
            ..
        } => {
            assert_eq!(*status, 503);
            assert!(message.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.user_message(),
        "Failed to generate summary. Please try again."
    );
}

#[tokio::test]
async fn empty_candidates_are_rejected() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"candidates": []}"#))
        .await;

    let err = backend(&mock)
        .complete(CompletionRequest {
            prompt: "p".to_string(),
            schema: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::EmptyResponse));
}
