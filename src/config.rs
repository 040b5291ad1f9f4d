pub const DEFAULT_HOST_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_HOST_PORT: u16 = 11434;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Where the Ollama server lives. Fixed once a client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host_address: String,
    pub host_port: u16,
}

impl ClientConfig {
    pub fn new(host_address: impl Into<String>, host_port: u16) -> Self {
        Self {
            host_address: host_address.into(),
            host_port,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/api/chat", self.host_address, self.host_port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_ADDRESS, DEFAULT_HOST_PORT)
    }
}
