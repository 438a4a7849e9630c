use crate::seo::SeoPayload;
use serde::{Deserialize, Serialize};

/// Body of the SEO update call. Field names follow the Yoast post meta keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub post_id: i64,
    pub content: String,
    #[serde(rename = "_yoast_wpseo_metadesc")]
    pub meta_description: String,
    #[serde(rename = "_yoast_wpseo_focuskw")]
    pub focus_keyword: String,
}

impl UpdatePayload {
    pub fn from_seo(post_id: i64, seo: &SeoPayload) -> Self {
        Self {
            post_id,
            content: format!(
                "{}\n{}",
                seo.content.join(", "),
                seo.description.join(", ")
            ),
            meta_description: seo.meta_description.clone(),
            focus_keyword: seo.keywords.clone(),
        }
    }
}
