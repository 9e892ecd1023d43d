use std::collections::BTreeMap;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioConverter, LlmClient, SpeechRecognizer, SpeechSynthesizer};
use crate::application::services::EvaluationError;
use crate::domain::UploadedAudio;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct EvaluationResponse {
    pub transcription: String,
    pub score: i64,
    pub filler_word_counts: BTreeMap<String, u32>,
    pub review: String,
    pub perfect_answer: String,
}

/// Accepts a multipart form with a `question` text field and an
/// `audio_file` file field, runs the evaluation pipeline, and returns the
/// scored result. Pipeline failures map to one generic error body; the
/// detail stays in the logs.
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_answer_handler<C, R, L, S>(
    State(state): State<AppState<C, R, L, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    R: SpeechRecognizer + 'static,
    L: LlmClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let mut question: Option<String> = None;
    let mut upload: Option<UploadedAudio> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("question") => match field.text().await {
                Ok(text) => question = Some(text),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read question field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read question field: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            Some("audio_file") => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(data) => {
                        upload = Some(UploadedAudio::new(original_name, data.to_vec()));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read audio file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            _ => continue,
        }
    }

    let Some(question) = question else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No question provided".to_string(),
            }),
        )
            .into_response();
    };

    let Some(upload) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No audio file provided".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(
        upload_bytes = upload.data.len(),
        "Evaluating submitted answer"
    );

    match state.evaluation_service.evaluate(&question, upload).await {
        Ok(evaluation) => (
            StatusCode::OK,
            Json(EvaluationResponse {
                transcription: evaluation.transcript,
                score: evaluation.score,
                filler_word_counts: evaluation.filler_word_counts,
                review: evaluation.review,
                perfect_answer: evaluation.perfect_answer,
            }),
        )
            .into_response(),
        Err(EvaluationError::QuestionNotFound) => {
            tracing::warn!("Submitted answer references an unknown question");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Question not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error processing audio file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error processing audio file".to_string(),
                }),
            )
                .into_response()
        }
    }
}
