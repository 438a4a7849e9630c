pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::OpenAiClient,
    seo::SeoSynchronizer,
    wordpress::WordPressClient,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/generate-and-update-seo",
            post(handlers::generate_and_update_seo),
        )
        .route(
            "/generate-and-update-seo/async",
            post(handlers::generate_and_update_seo_async),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = Arc::new(OpenAiClient::new(config.llm.clone()));
    let wordpress = WordPressClient::new(config.wordpress.clone());

    let app_state = AppState {
        synchronizer: Arc::new(SeoSynchronizer::new(llm_client, wordpress)),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
