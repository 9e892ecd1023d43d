mod artifact_store;
mod audio_converter;
mod interview_repository;
mod llm_client;
mod speech_recognizer;
mod speech_synthesizer;

pub use artifact_store::{ArtifactStore, ArtifactStoreError, StoredArtifact};
pub use audio_converter::{AudioConverter, ConversionError};
pub use interview_repository::{InterviewRepository, RepositoryError};
pub use llm_client::{LlmClient, LlmClientError};
pub use speech_recognizer::{RecognizerError, SpeechRecognizer};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
