pub mod config;
pub mod error;
pub mod llm;
pub mod seo;
pub mod server;
pub mod wordpress;

pub use error::{Error, Result};
