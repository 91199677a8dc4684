use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LlmConfig {
    pub model: Option<String>,    // chat model identifier
    pub base_url: Option<String>, // OpenAI-compatible API root
    pub api_key: Option<String>,  // fallback; GROQ_API_KEY env wins
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Bind address for the HTTP server (default `0.0.0.0:3000`).
    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host = self
            .server
            .as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = self.server.as_ref().and_then(|s| s.port).unwrap_or(3000);
        format!("{}:{}", host, port).parse()
    }
}

pub fn load_config<P: AsRef<Path>>(
    path: P,
) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    let cfg: AppConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}
