mod parser;
mod prompt;
mod synchronizer;

pub use parser::{SeoPayload, extract_json_block, parse_seo_payload};
pub use prompt::{MAX_KEYWORDS_LEN, SYSTEM_PROMPT, build_prompt};
pub use synchronizer::SeoSynchronizer;
