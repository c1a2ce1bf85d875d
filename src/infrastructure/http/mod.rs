pub mod reclaim;
pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::domain::tts::ResourceReclaimer;
use crate::infrastructure::config::Config;

pub use reclaim::{reclaim_after_response, ReclaimAccelerator};
pub use request_id::{request_id_middleware, RequestId};

/// Build the application router with all routes and middleware
pub fn create_router(tts_controller: Arc<TtsController>, reclaimer: ResourceReclaimer) -> Router {
    // Synthesis route; reclamation is hooked in after the handler returns
    let tts_routes = Router::new()
        .route("/tts", post(TtsController::synthesize))
        .with_state(tts_controller.clone())
        .layer(middleware::from_fn_with_state(
            reclaimer,
            reclaim_after_response,
        ));

    // Catalog / capability routes
    let listing_routes = Router::new()
        .route("/voices", get(TtsController::list_voices))
        .route("/presets", get(TtsController::list_presets))
        .route("/samplers", get(TtsController::list_samplers))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(tts_routes)
        .merge(listing_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
