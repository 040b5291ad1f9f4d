use image::DynamicImage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::images::{decode_base64_image, encode_png_base64};
use crate::config::DEFAULT_TEMPERATURE;
use crate::error::{ChatError, Result};

/// A single turn in a conversation.
///
/// The role is free-form; "system", "user" and "assistant" are the usual values
/// but nothing checks them. A message without images holds an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    role: String,
    content: String,
    images: Vec<DynamicImage>,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_images(role, content, Vec::new())
    }

    pub fn with_images(
        role: impl Into<String>,
        content: impl Into<String>,
        images: Vec<DynamicImage>,
    ) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            images,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn images(&self) -> &[DynamicImage] {
        &self.images
    }

    pub fn into_images(self) -> Vec<DynamicImage> {
        self.images
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl WireMessage {
    /// Encodes every image as base64 PNG. An empty image list becomes `None`
    /// so the `images` key is left out of the body.
    pub fn encode(message: &Message) -> Result<Self> {
        let images = if message.images().is_empty() {
            None
        } else {
            Some(
                message
                    .images()
                    .iter()
                    .map(encode_png_base64)
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        Ok(Self {
            role: message.role().to_string(),
            content: message.content().to_string(),
            images,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatOptions {
    pub temperature: f32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: &[Message]) -> Result<Self> {
        Ok(Self {
            model: model.into(),
            messages: messages
                .iter()
                .map(WireMessage::encode)
                .collect::<Result<Vec<_>>>()?,
            stream: false,
            options: ChatOptions::default(),
        })
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = temperature;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
}

/// The server's `role` is not read: replies are always built as "assistant".
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub images: Option<Value>,
}

impl ChatResponse {
    /// Only an `images` array is decoded; any other value, or no key at all,
    /// yields no images. A bad entry inside the array fails the whole reply.
    pub fn into_message(self) -> Result<Message> {
        let entries = match self.message.images {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        };

        let images = entries
            .into_iter()
            .map(|entry| {
                let payload: String = serde_json::from_value(entry).map_err(ChatError::Parse)?;
                decode_base64_image(&payload)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Message::with_images("assistant", self.message.content, images))
    }
}
