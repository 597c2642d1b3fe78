//! Tests for worker configuration.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use minerva::config::{WorkerConfig, DEFAULT_PORT};
use minerva::error::MinervaError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 10] = [
    "MINERVA_HOST",
    "MINERVA_PORT",
    "TOPIC_STORE_URL",
    "TOPIC_STORE_KEY",
    "OPENAI_API_KEY",
    "MINERVA_REALTIME_URL",
    "MINERVA_REALTIME_MODEL",
    "MINERVA_VOICE",
    "MINERVA_SIGNALING_URL",
    "MINERVA_PARTICIPANT_DEADLINE_SECS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        for key in keys {
            std::env::remove_var(key);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
fn from_env_reads_recognized_fields() {
    let _lock = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    std::env::set_var("MINERVA_HOST", "127.0.0.1");
    std::env::set_var("MINERVA_PORT", "9000");
    std::env::set_var("TOPIC_STORE_URL", "https://db.example.com");
    std::env::set_var("TOPIC_STORE_KEY", "service-key");
    std::env::set_var("OPENAI_API_KEY", "sk-test");
    std::env::set_var("MINERVA_VOICE", "alloy");
    std::env::set_var("MINERVA_PARTICIPANT_DEADLINE_SECS", "45");

    let config = WorkerConfig::from_env();
    assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    assert_eq!(config.topic_store_url.as_deref(), Some("https://db.example.com"));
    assert_eq!(config.voice.as_deref(), Some("alloy"));
    assert_eq!(config.participant_deadline, Some(Duration::from_secs(45)));
    assert!(config.validate().is_ok());
}

#[test]
fn missing_credentials_fail_validation() {
    let _lock = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    let config = WorkerConfig::from_env();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MinervaError::Configuration(_)));
}

#[test]
fn defaults_apply_without_env() {
    let _lock = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    let config = WorkerConfig::from_env();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.realtime_model, "gpt-4o-realtime-preview");
    assert!(config.participant_deadline.is_none());
    assert!(config.signaling_url.is_none());
}

#[test]
fn unparseable_port_falls_back_to_default() {
    let _lock = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    std::env::set_var("MINERVA_PORT", "not-a-port");
    let config = WorkerConfig::from_env();
    assert_eq!(config.port, DEFAULT_PORT);
}
