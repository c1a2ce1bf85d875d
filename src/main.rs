use std::sync::Arc;
use tortoise_tts_server::controllers::tts::TtsController;
use tortoise_tts_server::domain::tts::{ResourceReclaimer, TtsService};
use tortoise_tts_server::infrastructure::config::{AcceleratorMode, Config, LogFormat};
use tortoise_tts_server::infrastructure::http::{create_router, start_http_server};
use tortoise_tts_server::infrastructure::repositories::{
    AcceleratorRuntime, FsVoiceCatalog, HttpAcceleratorRuntime, HttpSynthesisEngine,
    NoopAcceleratorRuntime,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Tortoise TTS server on {}:{}",
        config.host,
        config.port
    );
    if config.is_development() {
        tracing::debug!(config = ?config, "Loaded configuration");
    }

    // === DEPENDENCY INJECTION SETUP ===
    // 1. External collaborators (created once, shared by every request)
    let voice_catalog = Arc::new(FsVoiceCatalog::new(config.voices_dir()));
    tracing::info!(voices_dir = %voice_catalog.root().display(), "Voice catalog configured");

    let engine = Arc::new(HttpSynthesisEngine::new(config.engine_url.clone()));
    tracing::info!(engine_url = %config.engine_url, "Synthesis engine client initialized");

    let accelerator: Arc<dyn AcceleratorRuntime> = match config.accelerator {
        AcceleratorMode::Engine => Arc::new(HttpAcceleratorRuntime::new(config.engine_url.clone())),
        AcceleratorMode::None => Arc::new(NoopAcceleratorRuntime),
    };
    tracing::info!(mode = ?config.accelerator, "Accelerator runtime configured");

    // 2. Services
    let tts_service = Arc::new(TtsService::new(voice_catalog, engine));
    let reclaimer = ResourceReclaimer::new(accelerator);

    // 3. Controllers
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let app = create_router(tts_controller, reclaimer);
    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tortoise_tts_server=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
