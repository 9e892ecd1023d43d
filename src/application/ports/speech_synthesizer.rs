use async_trait::async_trait;

/// Text-to-speech service producing an encoded audio stream (MP3) for a
/// generated question.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("service returned an empty audio stream")]
    EmptyAudio,
}
