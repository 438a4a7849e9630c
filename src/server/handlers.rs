use super::types::{ErrorResponse, GenerationRequest, HealthResponse, MessageResponse};
use crate::seo::SeoSynchronizer;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub synchronizer: Arc<SeoSynchronizer>,
}

pub async fn generate_and_update_seo(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received SEO request for post {} ({} / {})",
        request.post_id, request.team_names, request.title
    );

    let prompt = request.prompt();
    match state.synchronizer.sync(&prompt, request.post_id).await {
        Ok(()) => {
            info!("SEO updated for post {}", request.post_id);
            Ok(Json(MessageResponse {
                message: "SEO updated successfully".to_string(),
            }))
        }
        Err(e) => {
            error!("SEO update for post {} failed: {}", request.post_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { detail: e.detail() }),
            ))
        }
    }
}

/// Schedules the update on a detached task and acknowledges straight away.
/// Failures are only visible in the logs.
pub async fn generate_and_update_seo_async(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Json<MessageResponse> {
    let job_id = Uuid::new_v4();
    info!(
        "Scheduling SEO job {} for post {} ({} / {})",
        job_id, request.post_id, request.team_names, request.title
    );

    let prompt = request.prompt();
    let post_id = request.post_id;
    let synchronizer = state.synchronizer.clone();
    let span = info_span!("seo_job", %job_id, post_id);

    tokio::spawn(
        async move {
            match synchronizer.sync(&prompt, post_id).await {
                Ok(()) => info!("SEO updated for post {}", post_id),
                Err(e) => error!("Background SEO update failed: {}", e.detail()),
            }
        }
        .instrument(span),
    );

    Json(MessageResponse {
        message: "SEO update scheduled".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
