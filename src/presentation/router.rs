use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioConverter, LlmClient, SpeechRecognizer, SpeechSynthesizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    audio_handler, health_handler, start_interview_handler, submit_answer_handler,
};
use crate::presentation::state::AppState;

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<C, R, L, S>(state: AppState<C, R, L, S>) -> Router
where
    C: AudioConverter + 'static,
    R: SpeechRecognizer + 'static,
    L: LlmClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/interviews",
            post(start_interview_handler::<C, R, L, S>),
        )
        .route(
            "/api/v1/interviews/answers",
            post(submit_answer_handler::<C, R, L, S>),
        )
        .route("/audio/{filename}", get(audio_handler::<C, R, L, S>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
