use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use interview_buddy::application::ports::{
    ArtifactStore, AudioConverter, ConversionError, InterviewRepository, LlmClient,
    LlmClientError, RecognizerError, SpeechRecognizer, SpeechSynthesizer, SynthesisError,
};
use interview_buddy::application::services::{EvaluationService, InterviewService};
use interview_buddy::infrastructure::persistence::InMemoryInterviewRepository;
use interview_buddy::infrastructure::storage::LocalArtifactStore;
use interview_buddy::presentation::{create_router, AppState};

const QUESTION_REPLY: &str = "Tell me about a project you are proud of.";
const EVAL_REPLY: &str = "8 Confident delivery\nGood structure\nSlow down a little\nA model answer here.";

struct MockConverter;

#[async_trait]
impl AudioConverter for MockConverter {
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ConversionError> {
        let output = input.with_extension("wav");
        tokio::fs::copy(input, &output)
            .await
            .map_err(|e| ConversionError::ConversionFailed(e.to_string()))?;
        Ok(output)
    }
}

struct MockRecognizer;

#[async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn recognize(&self, _wav_data: &[u8]) -> Result<String, RecognizerError> {
        Ok("I um built a service that like scaled well".to_string())
    }
}

struct MockLlm;

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        if prompt.starts_with("Generate a clear and concise interview question") {
            Ok(QUESTION_REPLY.to_string())
        } else {
            Ok(EVAL_REPLY.to_string())
        }
    }
}

struct MockSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, SynthesisError> {
        Ok(b"mp3 payload".to_vec())
    }
}

struct FailingConverter;

#[async_trait]
impl AudioConverter for FailingConverter {
    async fn convert_to_wav(&self, _input: &Path) -> Result<PathBuf, ConversionError> {
        Err(ConversionError::ConversionFailed(
            "ffmpeg exited with exit status: 1: unsupported codec".to_string(),
        ))
    }
}

fn test_router(store_dir: &Path) -> (Router, Arc<InMemoryInterviewRepository>) {
    router_with_converter(store_dir, MockConverter)
}

fn router_with_converter<C: AudioConverter + 'static>(
    store_dir: &Path,
    converter: C,
) -> (Router, Arc<InMemoryInterviewRepository>) {
    let repository = Arc::new(InMemoryInterviewRepository::new());
    let repository_dyn: Arc<dyn InterviewRepository> = repository.clone();
    let artifact_store: Arc<dyn ArtifactStore> =
        Arc::new(LocalArtifactStore::new(store_dir).unwrap());
    let llm_client = Arc::new(MockLlm);

    let interview_service = Arc::new(InterviewService::new(
        Arc::clone(&llm_client),
        Arc::new(MockSynthesizer),
        Arc::clone(&repository_dyn),
        Arc::clone(&artifact_store),
    ));

    let evaluation_service = Arc::new(EvaluationService::new(
        Arc::new(converter),
        Arc::new(MockRecognizer),
        llm_client,
        Arc::clone(&repository_dyn),
        Arc::clone(&artifact_store),
    ));

    let state = AppState {
        interview_service,
        evaluation_service,
        artifact_store,
    };

    (create_router(state), repository)
}

fn multipart_body(boundary: &str, question: Option<&str>, audio: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(question) = question {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"question\"\r\n\r\n{}\r\n",
                boundary, question
            )
            .as_bytes(),
        );
    }
    if let Some(audio) = audio {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"audio_file\"; filename=\"answer.webm\"\r\nContent-Type: audio/webm\r\n\r\n",
                boundary
            )
            .as_bytes(),
        );
        body.extend_from_slice(audio);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_service_when_checking_health_then_reports_healthy() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _) = test_router(dir.path());

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn given_missing_job_role_when_starting_interview_then_returns_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = test_router(dir.path());

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"candidate_name":"Ada","job_role":"   ","company_name":"Acme"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Job role is required.");
    assert!(repository.questions().is_empty());
}

#[tokio::test]
async fn given_valid_request_when_starting_interview_then_question_and_audio_are_served() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = test_router(dir.path());

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/interviews")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"candidate_name":"Ada","job_role":"backend engineer","company_name":"Acme"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = response_json(response).await;
    assert_eq!(json["question"], QUESTION_REPLY);
    assert_eq!(repository.questions().len(), 1);

    let audio_filename = json["audio_filename"].as_str().unwrap().to_string();
    let audio_response = router
        .oneshot(
            Request::get(format!("/audio/{}", audio_filename))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(audio_response.status(), StatusCode::OK);
    assert_eq!(
        audio_response.headers()[header::CONTENT_TYPE],
        "audio/mpeg"
    );
}

#[tokio::test]
async fn given_multipart_without_audio_when_submitting_answer_then_returns_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _) = test_router(dir.path());

    let boundary = "test-boundary";
    let body = multipart_body(boundary, Some("Any question?"), None);

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews/answers")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No audio file provided");
}

#[tokio::test]
async fn given_multipart_without_question_when_submitting_answer_then_returns_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = test_router(dir.path());

    let boundary = "test-boundary";
    let body = multipart_body(boundary, None, Some(b"bytes"));

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews/answers")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No question provided");
    assert!(repository.answers().is_empty());
}

#[tokio::test]
async fn given_failing_conversion_when_submitting_answer_then_returns_generic_error() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = router_with_converter(dir.path(), FailingConverter);

    repository
        .insert_question("backend engineer", QUESTION_REPLY)
        .await
        .unwrap();

    let boundary = "test-boundary";
    let body = multipart_body(boundary, Some(QUESTION_REPLY), Some(b"fake webm bytes"));

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews/answers")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    // The converter detail stays in the logs and never reaches the client.
    assert!(!raw.contains("ffmpeg"), "leaked detail: {}", raw);
    assert!(!raw.contains("codec"), "leaked detail: {}", raw);

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["error"], "Error processing audio file");
    assert!(repository.answers().is_empty());
}

#[tokio::test]
async fn given_stored_question_when_submitting_answer_then_returns_full_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = test_router(dir.path());

    repository
        .insert_question("backend engineer", QUESTION_REPLY)
        .await
        .unwrap();

    let boundary = "test-boundary";
    let body = multipart_body(boundary, Some(QUESTION_REPLY), Some(b"fake webm bytes"));

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews/answers")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(
        json["transcription"],
        "I um built a service that like scaled well"
    );
    assert_eq!(json["score"], 8);
    assert_eq!(json["filler_word_counts"]["um"], 1);
    assert_eq!(json["filler_word_counts"]["like"], 1);
    assert_eq!(json["review"], "Good structure\nSlow down a little");
    assert_eq!(json["perfect_answer"], "A model answer here.");

    let answers = repository.answers();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].score, 8);
}

#[tokio::test]
async fn given_unknown_question_when_submitting_answer_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (router, repository) = test_router(dir.path());

    let boundary = "test-boundary";
    let body = multipart_body(boundary, Some("Never stored?"), Some(b"bytes"));

    let response = router
        .oneshot(
            Request::post("/api/v1/interviews/answers")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(repository.answers().is_empty());
}

#[tokio::test]
async fn given_unknown_audio_name_when_fetching_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _) = test_router(dir.path());

    let response = router
        .oneshot(
            Request::get("/audio/doesnotexist.mp3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
