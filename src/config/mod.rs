//! Worker configuration (env-backed, validated at startup).

use std::time::Duration;

use crate::error::{MinervaError, Result};

/// Default dispatch port, kept in step with the orchestration layer.
pub const DEFAULT_PORT: u16 = 8081;

/// Default realtime speech endpoint.
pub const DEFAULT_REALTIME_URL: &str = "wss://api.openai.com/v1/realtime";

/// Default realtime speech model.
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview";

/// Process-wide worker configuration.
///
/// Every recognized field is enumerated here; `from_env` reads them once at
/// startup and `validate` fails fast on missing credentials. Nothing in this
/// struct is re-read after the worker starts serving.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Bind address for the dispatch listener.
    pub host: String,
    /// Bind port for the dispatch listener.
    pub port: u16,
    /// Base URL of the topic datastore (PostgREST-style).
    pub topic_store_url: Option<String>,
    /// Service key for the topic datastore.
    pub topic_store_key: Option<String>,
    /// API key for the realtime speech provider.
    pub realtime_api_key: Option<String>,
    /// WebSocket endpoint of the realtime speech provider.
    pub realtime_url: String,
    /// Realtime speech model name.
    pub realtime_model: String,
    /// Optional voice preset for spoken responses.
    pub voice: Option<String>,
    /// Default signaling endpoint for room transports; jobs may override.
    pub signaling_url: Option<String>,
    /// Bound on the wait for a remote participant. `None` waits forever.
    pub participant_deadline: Option<Duration>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            topic_store_url: None,
            topic_store_key: None,
            realtime_api_key: None,
            realtime_url: DEFAULT_REALTIME_URL.to_string(),
            realtime_model: DEFAULT_REALTIME_MODEL.to_string(),
            voice: None,
            signaling_url: None,
            participant_deadline: None,
        }
    }
}

impl WorkerConfig {
    /// Load from environment variables (loads `.env` first if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(host) = std::env::var("MINERVA_HOST") {
            config.host = host;
        }
        if let Some(port) = std::env::var("MINERVA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        config.topic_store_url = std::env::var("TOPIC_STORE_URL").ok();
        config.topic_store_key = std::env::var("TOPIC_STORE_KEY").ok();
        config.realtime_api_key = std::env::var("OPENAI_API_KEY").ok();
        if let Ok(url) = std::env::var("MINERVA_REALTIME_URL") {
            config.realtime_url = url;
        }
        if let Ok(model) = std::env::var("MINERVA_REALTIME_MODEL") {
            config.realtime_model = model;
        }
        config.voice = std::env::var("MINERVA_VOICE").ok();
        config.signaling_url = std::env::var("MINERVA_SIGNALING_URL").ok();
        config.participant_deadline = std::env::var("MINERVA_PARTICIPANT_DEADLINE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        config
    }

    /// Check required credentials, fatal at startup when absent.
    pub fn validate(&self) -> Result<()> {
        if self.topic_store_url.as_deref().unwrap_or("").is_empty() {
            return Err(MinervaError::Configuration(
                "TOPIC_STORE_URL is not set".into(),
            ));
        }
        if self.topic_store_key.as_deref().unwrap_or("").is_empty() {
            return Err(MinervaError::Configuration(
                "TOPIC_STORE_KEY is not set".into(),
            ));
        }
        if self.realtime_api_key.as_deref().unwrap_or("").is_empty() {
            return Err(MinervaError::Configuration(
                "OPENAI_API_KEY is not set".into(),
            ));
        }
        Ok(())
    }

    /// Listener bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
