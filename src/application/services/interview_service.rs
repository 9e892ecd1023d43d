use std::sync::Arc;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, InterviewRepository, LlmClient, LlmClientError,
    RepositoryError, SpeechSynthesizer, SynthesisError,
};
use crate::application::services::{parse_generated_question, ResponseParseError};
use crate::domain::Question;

/// A freshly generated question together with the name of its spoken
/// rendition in the artifact store.
#[derive(Debug, Clone)]
pub struct StartedInterview {
    pub question: Question,
    pub audio_filename: String,
}

/// Starts a mock interview: generates a role-specific question, persists
/// it, and synthesizes it to speech.
pub struct InterviewService<L, S>
where
    L: LlmClient,
    S: SpeechSynthesizer,
{
    llm_client: Arc<L>,
    synthesizer: Arc<S>,
    repository: Arc<dyn InterviewRepository>,
    artifact_store: Arc<dyn ArtifactStore>,
}

impl<L, S> InterviewService<L, S>
where
    L: LlmClient,
    S: SpeechSynthesizer,
{
    pub fn new(
        llm_client: Arc<L>,
        synthesizer: Arc<S>,
        repository: Arc<dyn InterviewRepository>,
        artifact_store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            llm_client,
            synthesizer,
            repository,
            artifact_store,
        }
    }

    pub async fn start(
        &self,
        candidate_name: &str,
        job_role: &str,
        company_name: &str,
    ) -> Result<StartedInterview, InterviewError> {
        let raw = self
            .llm_client
            .generate(&question_prompt(candidate_name, job_role, company_name))
            .await?;
        let text = parse_generated_question(&raw)?;

        let question = self.repository.insert_question(job_role, &text).await?;

        let audio = self.synthesizer.synthesize(&question.text).await?;
        let stored = self.artifact_store.store("mp3", &audio).await?;

        tracing::info!(
            question_id = %question.id,
            job_role = %job_role,
            audio = %stored.name,
            "Interview started"
        );

        Ok(StartedInterview {
            question,
            audio_filename: stored.name,
        })
    }
}

fn question_prompt(candidate_name: &str, job_role: &str, company_name: &str) -> String {
    format!(
        "Generate a clear and concise interview question for {} applying for a {} position at {}. \
         The question should be relevant to the job role and assess the candidate's skills and experience. \
         Avoid using special characters, hashtags, or markdown syntax. \
         The text should flow naturally as if it's meant to be spoken.",
        candidate_name, job_role, company_name
    )
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("question generation: {0}")]
    Generation(#[from] LlmClientError),
    #[error("question parsing: {0}")]
    Parse(#[from] ResponseParseError),
    #[error("speech synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("artifact storage: {0}")]
    Artifact(#[from] ArtifactStoreError),
    #[error("persistence: {0}")]
    Repository(#[from] RepositoryError),
}
