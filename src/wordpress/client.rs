use super::types::UpdatePayload;
use crate::{Error, Result, config::WordPressConfig};
use reqwest::StatusCode;
use tracing::debug;

pub struct WordPressClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl WordPressClient {
    pub fn new(config: WordPressConfig) -> Self {
        Self {
            api_url: config.api_url,
            api_key: config.api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Posts the SEO fields for one post. Anything but `200 OK` is an error
    /// carrying the remote status and body.
    pub async fn update_post(&self, payload: &UpdatePayload) -> Result<()> {
        debug!("Sending SEO update for post {}", payload.post_id);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(Error::WordPress {
                status: status.as_u16(),
                body,
            });
        }

        debug!("WordPress accepted SEO update for post {}", payload.post_id);
        Ok(())
    }
}
