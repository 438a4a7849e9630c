use crate::seo::build_prompt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub team_names: String,
    pub title: String,
    pub post_id: i64,
}

impl GenerationRequest {
    pub fn prompt(&self) -> String {
        build_prompt(&self.team_names, &self.title)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
