use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{RecognizerError, SpeechRecognizer};

const DEFAULT_BASE_URL: &str = "http://www.google.com/speech-api/v2/recognize";
const DEFAULT_LANGUAGE: &str = "en-US";

/// Full-utterance recognizer against the Google speech API v2 endpoint.
///
/// The service responds with one JSON object per line; early lines carry an
/// empty `result` array and the transcript, when there is one, arrives in a
/// later line's first alternative. No alternative at all means the audio
/// was unintelligible.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>, language: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct RecognizeLine {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Deserialize)]
struct RecognizeAlternative {
    transcript: String,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(&self, wav_data: &[u8]) -> Result<String, RecognizerError> {
        tracing::debug!(bytes = wav_data.len(), "Sending audio for recognition");

        let response = self
            .client
            .post(&self.base_url)
            .query(&[
                ("client", "chromium"),
                ("lang", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(wav_data.to_vec())
            .send()
            .await
            .map_err(|e| RecognizerError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognizerError::RequestFailed(format!("body: {}", e)))?;

        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let parsed: RecognizeLine = match serde_json::from_str(line) {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unparseable recognizer line");
                    continue;
                }
            };

            if let Some(alternative) = parsed
                .result
                .first()
                .and_then(|r| r.alternative.first())
            {
                tracing::info!(
                    chars = alternative.transcript.len(),
                    "Speech recognition completed"
                );
                return Ok(alternative.transcript.clone());
            }
        }

        Err(RecognizerError::NoMatch)
    }
}
