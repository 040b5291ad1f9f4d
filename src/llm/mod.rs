pub mod client;
pub mod images;
pub mod types;

pub use client::{LlmClient, OllamaClient};
pub use types::{ChatRequest, ChatResponse, Message};
