use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonDecode(serde_json::Error),

    #[error("Missing key: '{0}'")]
    MissingKey(String),

    #[error("Unexpected shape for '{key}': expected {expected}")]
    UnexpectedShape { key: String, expected: &'static str },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{status}: WordPress update failed: {body}")]
    WordPress { status: u16, body: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Caller-facing message for a failed generate-and-update run.
    ///
    /// Decode and missing-key failures keep their own wording, everything
    /// else is reported as a generic operation failure.
    pub fn detail(&self) -> String {
        match self {
            Self::JsonDecode(_) | Self::MissingKey(_) => self.to_string(),
            other => format!("Operation failed: {}", other),
        }
    }
}
