use super::{
    parser::{SeoPayload, parse_seo_payload},
    prompt::{MAX_KEYWORDS_LEN, SYSTEM_PROMPT},
};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
    wordpress::{UpdatePayload, WordPressClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

const TEMPERATURE: f32 = 0.7;

/// Generates SEO metadata for a prompt and writes it to a WordPress post.
pub struct SeoSynchronizer {
    llm_client: Arc<dyn LlmClient>,
    wordpress: WordPressClient,
}

impl SeoSynchronizer {
    pub fn new(llm_client: Arc<dyn LlmClient>, wordpress: WordPressClient) -> Self {
        Self {
            llm_client,
            wordpress,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<SeoPayload> {
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: Some(TEMPERATURE),
        };

        let response = self.llm_client.create_chat_completion(request).await?;
        let raw = response
            .first_content()
            .ok_or_else(|| Error::llm("Generation response had no content"))?;

        debug!("Generation response ({} chars): {}", raw.len(), raw);

        let payload = parse_seo_payload(raw)?;
        if payload.keywords.chars().count() > MAX_KEYWORDS_LEN {
            warn!(
                "Generated keywords exceed {} characters ({}), sending as-is",
                MAX_KEYWORDS_LEN,
                payload.keywords.chars().count()
            );
        }

        Ok(payload)
    }

    /// Runs generation then the remote update. Nothing is sent to WordPress
    /// unless the generated payload parsed completely.
    pub async fn sync(&self, prompt: &str, post_id: i64) -> Result<()> {
        let seo = self.generate(prompt).await?;
        let payload = UpdatePayload::from_seo(post_id, &seo);
        self.wordpress.update_post(&payload).await
    }
}
