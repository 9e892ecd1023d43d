use std::sync::Arc;

use crate::application::ports::{
    ArtifactStore, AudioConverter, LlmClient, SpeechRecognizer, SpeechSynthesizer,
};
use crate::application::services::{EvaluationService, InterviewService};

pub struct AppState<C, R, L, S>
where
    C: AudioConverter,
    R: SpeechRecognizer,
    L: LlmClient,
    S: SpeechSynthesizer,
{
    pub interview_service: Arc<InterviewService<L, S>>,
    pub evaluation_service: Arc<EvaluationService<C, R, L>>,
    pub artifact_store: Arc<dyn ArtifactStore>,
}

impl<C, R, L, S> Clone for AppState<C, R, L, S>
where
    C: AudioConverter,
    R: SpeechRecognizer,
    L: LlmClient,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            interview_service: Arc::clone(&self.interview_service),
            evaluation_service: Arc::clone(&self.evaluation_service),
            artifact_store: Arc::clone(&self.artifact_store),
        }
    }
}
