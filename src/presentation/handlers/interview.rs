use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioConverter, LlmClient, SpeechRecognizer, SpeechSynthesizer};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct StartInterviewRequest {
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Serialize)]
pub struct StartInterviewResponse {
    pub question_id: i64,
    pub question: String,
    pub audio_filename: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn start_interview_handler<C, R, L, S>(
    State(state): State<AppState<C, R, L, S>>,
    Json(request): Json<StartInterviewRequest>,
) -> impl IntoResponse
where
    C: AudioConverter + 'static,
    R: SpeechRecognizer + 'static,
    L: LlmClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let candidate_name = request.candidate_name.trim();
    let job_role = request.job_role.trim();
    let company_name = request.company_name.trim();

    if job_role.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Job role is required.".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .interview_service
        .start(candidate_name, job_role, company_name)
        .await
    {
        Ok(started) => (
            StatusCode::CREATED,
            Json(StartInterviewResponse {
                question_id: started.question.id.as_i64(),
                question: started.question.text,
                audio_filename: started.audio_filename,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to start interview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error starting interview".to_string(),
                }),
            )
                .into_response()
        }
    }
}
