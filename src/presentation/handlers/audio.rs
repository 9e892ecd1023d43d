use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{
    ArtifactStoreError, AudioConverter, LlmClient, SpeechRecognizer, SpeechSynthesizer,
};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

/// Serves a stored audio artifact. The artifact store rejects names with
/// path separators or parent references, so arbitrary paths never resolve.
#[tracing::instrument(skip(state))]
pub async fn audio_handler<C, R, L, S>(
    State(state): State<AppState<C, R, L, S>>,
    Path(filename): Path<String>,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    R: SpeechRecognizer + 'static,
    L: LlmClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    match state.artifact_store.fetch(&filename).await {
        Ok(data) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            data,
        )
            .into_response(),
        Err(ArtifactStoreError::NotFound(_)) | Err(ArtifactStoreError::InvalidName(_)) => {
            tracing::warn!(filename = %filename, "Audio artifact not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Audio file not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio artifact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error loading audio file".to_string(),
                }),
            )
                .into_response()
        }
    }
}
