use async_trait::async_trait;

/// External speech-recognition service. The whole file is submitted as a
/// single recognition unit; no streaming or chunking.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, wav_data: &[u8]) -> Result<String, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    /// The service could not make out any speech in the audio.
    #[error("audio could not be understood")]
    NoMatch,
    #[error("{0}")]
    RequestFailed(String),
}
