//! Client for the Ollama `/api/chat` endpoint.
//!
//! Builds a non-streaming chat request from role-tagged [`Message`]s, which may
//! carry images, and parses the reply back into a [`Message`] with role
//! `"assistant"`.
//!
//! ```no_run
//! use ollama_chat::{LlmClient, Message, OllamaClient};
//!
//! # async fn run() -> ollama_chat::Result<()> {
//! let client = OllamaClient::default();
//! let reply = client
//!     .chat("llama3", &[Message::user("Why is the sky blue?")])
//!     .await?;
//! println!("{}", reply.content());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod llm;

pub use config::{ClientConfig, DEFAULT_HOST_ADDRESS, DEFAULT_HOST_PORT, DEFAULT_TEMPERATURE};
pub use error::{ChatError, Result};
pub use llm::{LlmClient, Message, OllamaClient};
