use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, error};

use super::types::{ChatRequest, ChatResponse, Message};
use crate::config::{ClientConfig, DEFAULT_TEMPERATURE};
use crate::error::{ChatError, Result};

const JSON_UTF8: &str = "application/json; charset=utf-8";

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat_with_temperature(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<Message>;

    async fn chat(&self, model: &str, messages: &[Message]) -> Result<Message> {
        self.chat_with_temperature(model, messages, DEFAULT_TEMPERATURE)
            .await
    }
}

pub struct OllamaClient {
    client: Client,
    config: ClientConfig,
}

impl OllamaClient {
    pub fn new(host_address: impl Into<String>, host_port: u16) -> Self {
        Self::from_config(ClientConfig::new(host_address, host_port))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured `reqwest` client, e.g. one with a request timeout.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::from_config(ClientConfig::default())
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn chat_with_temperature(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<Message> {
        let url = self.endpoint();
        let request = ChatRequest::new(model, messages)?.with_temperature(temperature);
        let body = serde_json::to_vec(&request).map_err(ChatError::Serialize)?;

        debug!(
            "Sending chat request to Ollama: model={} messages={} temperature={}",
            model,
            messages.len(),
            temperature
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Ollama API error {}: {}", status, body);
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;

        let chat_response: ChatResponse = serde_json::from_str(&text).map_err(ChatError::Parse)?;
        let message = chat_response.into_message()?;

        debug!(
            "Ollama response: {} chars, {} images",
            message.content().len(),
            message.images().len()
        );
        Ok(message)
    }
}
