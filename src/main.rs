use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

use interview_buddy::application::ports::{ArtifactStore, InterviewRepository};
use interview_buddy::application::services::{EvaluationService, InterviewService};
use interview_buddy::infrastructure::audio::FfmpegConverter;
use interview_buddy::infrastructure::llm::GeminiClient;
use interview_buddy::infrastructure::observability::{init_tracing, TracingConfig};
use interview_buddy::infrastructure::persistence::SqliteInterviewRepository;
use interview_buddy::infrastructure::speech::GoogleSpeechRecognizer;
use interview_buddy::infrastructure::storage::LocalArtifactStore;
use interview_buddy::infrastructure::tts::HttpSpeechSynthesizer;
use interview_buddy::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::new(
        environment.to_string(),
        settings.logging.level.clone(),
        settings.logging.enable_json,
    ));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&settings.database.url)
        .await?;

    let repository = Arc::new(SqliteInterviewRepository::new(pool));
    repository.migrate().await?;
    let repository: Arc<dyn InterviewRepository> = repository;

    let artifact_store: Arc<dyn ArtifactStore> =
        Arc::new(LocalArtifactStore::new(&settings.audio.artifact_dir)?);

    let converter = Arc::new(FfmpegConverter::new(&settings.audio.ffmpeg_binary));

    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.recognizer.api_key.clone(),
        settings.recognizer.base_url.clone(),
        Some(settings.recognizer.language.clone()),
    ));

    let mut llm_client = GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
    );
    if let Some(base_url) = settings.gemini.base_url.clone() {
        llm_client = llm_client.with_base_url(base_url);
    }
    let llm_client = Arc::new(llm_client);

    let mut synthesizer = HttpSpeechSynthesizer::new(
        settings.tts.api_key.clone(),
        settings.tts.model.clone(),
        settings.tts.voice.clone(),
    );
    if let Some(base_url) = settings.tts.base_url.clone() {
        synthesizer = synthesizer.with_base_url(base_url);
    }
    let synthesizer = Arc::new(synthesizer);

    let interview_service = Arc::new(InterviewService::new(
        Arc::clone(&llm_client),
        Arc::clone(&synthesizer),
        Arc::clone(&repository),
        Arc::clone(&artifact_store),
    ));

    let evaluation_service = Arc::new(EvaluationService::new(
        converter,
        recognizer,
        Arc::clone(&llm_client),
        Arc::clone(&repository),
        Arc::clone(&artifact_store),
    ));

    let state = AppState {
        interview_service,
        evaluation_service,
        artifact_store,
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
