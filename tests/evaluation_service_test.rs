use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use interview_buddy::application::ports::{
    ArtifactStore, AudioConverter, ConversionError, InterviewRepository, LlmClient,
    LlmClientError, RecognizerError, SpeechRecognizer,
};
use interview_buddy::application::services::{
    EvaluationError, EvaluationService, REQUEST_FAILURE_PREFIX, UNINTELLIGIBLE_TRANSCRIPT,
};
use interview_buddy::domain::UploadedAudio;
use interview_buddy::infrastructure::persistence::InMemoryInterviewRepository;
use interview_buddy::infrastructure::storage::LocalArtifactStore;

struct StubConverter;

#[async_trait]
impl AudioConverter for StubConverter {
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ConversionError> {
        let output = input.with_extension("wav");
        tokio::fs::copy(input, &output)
            .await
            .map_err(|e| ConversionError::ConversionFailed(e.to_string()))?;
        Ok(output)
    }
}

struct FailingConverter;

#[async_trait]
impl AudioConverter for FailingConverter {
    async fn convert_to_wav(&self, _input: &Path) -> Result<PathBuf, ConversionError> {
        Err(ConversionError::ConversionFailed(
            "ffmpeg exited with exit status: 1".to_string(),
        ))
    }
}

enum RecognizerOutcome {
    Text(&'static str),
    NoMatch,
    RequestFailed(&'static str),
}

struct StubRecognizer {
    outcome: RecognizerOutcome,
}

#[async_trait]
impl SpeechRecognizer for StubRecognizer {
    async fn recognize(&self, _wav_data: &[u8]) -> Result<String, RecognizerError> {
        match &self.outcome {
            RecognizerOutcome::Text(text) => Ok(text.to_string()),
            RecognizerOutcome::NoMatch => Err(RecognizerError::NoMatch),
            RecognizerOutcome::RequestFailed(detail) => {
                Err(RecognizerError::RequestFailed(detail.to_string()))
            }
        }
    }
}

struct StubLlm {
    reply: &'static str,
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.reply.to_string())
    }
}

const EVAL_REPLY: &str = "7 Good overall\nClear structure\nCut the fillers\nA model answer.";

fn service_with<C: AudioConverter + 'static>(
    converter: C,
    recognizer: StubRecognizer,
    llm_reply: &'static str,
    repository: Arc<InMemoryInterviewRepository>,
    store_dir: &Path,
) -> EvaluationService<C, StubRecognizer, StubLlm> {
    EvaluationService::new(
        Arc::new(converter),
        Arc::new(recognizer),
        Arc::new(StubLlm { reply: llm_reply }),
        repository,
        Arc::new(LocalArtifactStore::new(store_dir).unwrap()),
    )
}

fn upload() -> UploadedAudio {
    UploadedAudio::new("answer.webm".to_string(), b"fake audio bytes".to_vec())
}

#[tokio::test]
async fn given_successful_pipeline_when_evaluating_then_persists_one_scored_answer() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    let question = repository
        .insert_question("backend engineer", "Tell me about a hard bug.")
        .await
        .unwrap();

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::Text("I um fixed it by like reading the logs"),
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    let evaluation = service
        .evaluate("Tell me about a hard bug.", upload())
        .await
        .unwrap();

    assert_eq!(evaluation.transcript, "I um fixed it by like reading the logs");
    assert_eq!(evaluation.score, 7);
    assert!((0..=10).contains(&evaluation.score));
    assert_eq!(evaluation.review, "Clear structure\nCut the fillers");
    assert_eq!(evaluation.perfect_answer, "A model answer.");
    assert_eq!(evaluation.filler_word_counts["um"], 1);
    assert_eq!(evaluation.filler_word_counts["like"], 1);

    let answers = repository.answers();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].question_id, question.id);
    assert_eq!(answers[0].score, 7);
    assert_eq!(answers[0].transcript, evaluation.transcript);
}

#[tokio::test]
async fn given_two_uploads_for_one_question_when_evaluating_then_two_answers_reference_it() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    let question = repository
        .insert_question("data analyst", "Why this role?")
        .await
        .unwrap();

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::Text("because I enjoy the work"),
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    service.evaluate("Why this role?", upload()).await.unwrap();
    service
        .evaluate(
            "Why this role?",
            UploadedAudio::new("take-two.ogg".to_string(), b"other bytes".to_vec()),
        )
        .await
        .unwrap();

    let answers = repository.answers();
    assert_eq!(answers.len(), 2);
    assert_ne!(answers[0].id, answers[1].id);
    assert!(answers.iter().all(|a| a.question_id == question.id));
}

#[tokio::test]
async fn given_unintelligible_audio_when_evaluating_then_transcript_is_the_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    repository
        .insert_question("qa engineer", "Describe your testing process.")
        .await
        .unwrap();

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::NoMatch,
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    let evaluation = service
        .evaluate("Describe your testing process.", upload())
        .await
        .unwrap();

    assert_eq!(evaluation.transcript, UNINTELLIGIBLE_TRANSCRIPT);
    assert_eq!(evaluation.transcript, "Could not understand the audio");
    // The pipeline still completes and persists.
    assert_eq!(repository.answers().len(), 1);
}

#[tokio::test]
async fn given_recognizer_service_failure_when_evaluating_then_transcript_embeds_the_detail() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    repository
        .insert_question("sre", "Walk me through an incident.")
        .await
        .unwrap();

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::RequestFailed("connection reset"),
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    let evaluation = service
        .evaluate("Walk me through an incident.", upload())
        .await
        .unwrap();

    assert_eq!(
        evaluation.transcript,
        format!("{}connection reset", REQUEST_FAILURE_PREFIX)
    );
    assert_eq!(repository.answers().len(), 1);
}

#[tokio::test]
async fn given_conversion_failure_when_evaluating_then_errors_and_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    repository
        .insert_question("pm", "How do you prioritize?")
        .await
        .unwrap();

    let service = service_with(
        FailingConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::Text("unused"),
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    let result = service.evaluate("How do you prioritize?", upload()).await;

    assert!(matches!(result, Err(EvaluationError::Conversion(_))));
    assert!(repository.answers().is_empty());
}

#[tokio::test]
async fn given_unknown_question_when_evaluating_then_fails_and_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::Text("an answer to nothing"),
        },
        EVAL_REPLY,
        Arc::clone(&repository),
        dir.path(),
    );

    let result = service.evaluate("Never stored question?", upload()).await;

    assert!(matches!(result, Err(EvaluationError::QuestionNotFound)));
    assert!(repository.answers().is_empty());
}

#[tokio::test]
async fn given_out_of_range_model_score_when_evaluating_then_score_defaults_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryInterviewRepository::new());
    repository
        .insert_question("designer", "Show me your portfolio.")
        .await
        .unwrap();

    let service = service_with(
        StubConverter,
        StubRecognizer {
            outcome: RecognizerOutcome::Text("here it is"),
        },
        "42 off the scale\nreview line\nperfect line",
        Arc::clone(&repository),
        dir.path(),
    );

    let evaluation = service
        .evaluate("Show me your portfolio.", upload())
        .await
        .unwrap();

    assert_eq!(evaluation.score, 0);
    assert_eq!(repository.answers()[0].score, 0);
}
