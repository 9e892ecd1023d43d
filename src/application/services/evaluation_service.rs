use std::sync::Arc;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, AudioConverter, ConversionError, InterviewRepository,
    LlmClient, LlmClientError, RecognizerError, RepositoryError, SpeechRecognizer,
};
use crate::application::services::{count_filler_words, parse_evaluation};
use crate::domain::{clip_transcript, Evaluation, UploadedAudio};

/// Sentinel transcript substituted when the recognizer cannot make out any
/// speech. Downstream stages always receive a string.
pub const UNINTELLIGIBLE_TRANSCRIPT: &str = "Could not understand the audio";

/// Prefix of the transcript substituted when the recognition service itself
/// fails; the error detail is appended.
pub const REQUEST_FAILURE_PREFIX: &str = "Could not request results; ";

/// Runs the answer-evaluation pipeline: store upload, normalize to WAV,
/// transcribe, count fillers, score and review via the generative service,
/// persist the answer against its question.
pub struct EvaluationService<C, R, L>
where
    C: AudioConverter,
    R: SpeechRecognizer,
    L: LlmClient,
{
    converter: Arc<C>,
    recognizer: Arc<R>,
    llm_client: Arc<L>,
    repository: Arc<dyn InterviewRepository>,
    artifact_store: Arc<dyn ArtifactStore>,
}

impl<C, R, L> EvaluationService<C, R, L>
where
    C: AudioConverter,
    R: SpeechRecognizer,
    L: LlmClient,
{
    pub fn new(
        converter: Arc<C>,
        recognizer: Arc<R>,
        llm_client: Arc<L>,
        repository: Arc<dyn InterviewRepository>,
        artifact_store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            converter,
            recognizer,
            llm_client,
            repository,
            artifact_store,
        }
    }

    /// Evaluates one uploaded answer to a previously generated question.
    ///
    /// Recognizer failures degrade to sentinel transcripts and the pipeline
    /// continues; conversion, generation, and persistence failures abort the
    /// call, and no partial answer row is ever written. The question must
    /// have been generated and stored by this system; an unknown question
    /// text is a caller-contract violation.
    pub async fn evaluate(
        &self,
        question_text: &str,
        upload: UploadedAudio,
    ) -> Result<Evaluation, EvaluationError> {
        let stored = self
            .artifact_store
            .store(&upload.sanitized_extension(), &upload.data)
            .await?;

        let wav_path = self.converter.convert_to_wav(&stored.path).await?;
        let wav_data = tokio::fs::read(&wav_path)
            .await
            .map_err(EvaluationError::NormalizedAudioRead)?;

        let transcript = match self.recognizer.recognize(&wav_data).await {
            Ok(text) => text,
            Err(RecognizerError::NoMatch) => {
                tracing::warn!("Recognizer could not understand the audio");
                UNINTELLIGIBLE_TRANSCRIPT.to_string()
            }
            Err(RecognizerError::RequestFailed(detail)) => {
                tracing::warn!(detail = %detail, "Recognition request failed");
                format!("{}{}", REQUEST_FAILURE_PREFIX, detail)
            }
        };

        let filler_word_counts = count_filler_words(&transcript);

        let raw = self
            .llm_client
            .generate(&evaluation_prompt(question_text, &transcript))
            .await?;
        let parsed = parse_evaluation(&raw);

        let question = self
            .repository
            .find_question_by_text(question_text)
            .await?
            .ok_or(EvaluationError::QuestionNotFound)?;

        let answer = self
            .repository
            .insert_answer(question.id, clip_transcript(&transcript), parsed.score)
            .await?;

        tracing::info!(
            question_id = %question.id,
            answer_id = %answer.id,
            score = parsed.score,
            transcript_chars = transcript.len(),
            "Answer evaluated"
        );

        Ok(Evaluation {
            transcript,
            score: parsed.score,
            filler_word_counts,
            review: parsed.review,
            perfect_answer: parsed.perfect_answer,
        })
    }
}

fn evaluation_prompt(question: &str, answer: &str) -> String {
    format!(
        "Evaluate the following answer to the question '{}': {}. \
         Provide a score between 0 and 10 based on the following factors: \
         Communication, Personality, Professionalism, Culture fit, Dependability, \
         Past experience, and Problem solving. \
         Also, consider the use of filler words like 'uh', 'oh', 'um', 'like', 'you know', 'so', 'actually', \
         'basically', 'literally', 'I mean', 'well', 'sort of', and 'kind of' which are not great for interviews. \
         Explain the reasoning behind the score. \
         Additionally, provide a detailed review of the answer and advice for improvement. \
         Finally, generate the perfect answer to the question.",
        question, answer
    )
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("artifact storage: {0}")]
    Artifact(#[from] ArtifactStoreError),
    #[error("audio conversion: {0}")]
    Conversion(#[from] ConversionError),
    #[error("reading normalized audio: {0}")]
    NormalizedAudioRead(std::io::Error),
    #[error("evaluation generation: {0}")]
    Generation(#[from] LlmClientError),
    #[error("no stored question matches the submitted text")]
    QuestionNotFound,
    #[error("persistence: {0}")]
    Repository(#[from] RepositoryError),
}
