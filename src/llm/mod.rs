mod client;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ResponseMessage, Usage,
};
