use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ollama API request failed with code: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to serialize chat request: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to parse chat response: {0}")]
    Parse(serde_json::Error),

    #[error("Failed to encode image as PNG: {0}")]
    ImageEncode(image::ImageError),

    #[error("Invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decode image: {0}")]
    ImageDecode(image::ImageError),
}

impl ChatError {
    /// HTTP status code for [`ChatError::Status`], `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
