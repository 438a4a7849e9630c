mod client;
mod types;

pub use client::WordPressClient;
pub use types::UpdatePayload;
