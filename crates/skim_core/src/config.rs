use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5-8b";
pub const DEFAULT_BULLET: &str = "•";
/// Minimum character count for a static extraction to be accepted without
/// falling back to browser rendering.
pub const DEFAULT_SUFFICIENCY_THRESHOLD: usize = 1000;
/// Upper bound on how long the renderer waits for article content to appear.
pub const DEFAULT_RENDER_WAIT: Duration = Duration::from_secs(10);

/// Runtime configuration, resolved once at startup and handed to the
/// components that need it. Construction fails when no API key is available.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub bullet: String,
    pub sufficiency_threshold: usize,
    pub render_wait: Duration,
}

impl Config {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(Error::Config(
                    "LLM_API_KEY environment variable not set".to_string(),
                ))
            }
        };
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bullet: DEFAULT_BULLET.to_string(),
            sufficiency_threshold: DEFAULT_SUFFICIENCY_THRESHOLD,
            render_wait: DEFAULT_RENDER_WAIT,
        })
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(env::var("LLM_API_KEY").ok())?;
        if let Ok(model) = env::var("LLM_API_MODEL") {
            config.model = model;
        }
        if let Ok(endpoint) = env::var("LLM_API_ENDPOINT") {
            config.endpoint = endpoint;
        }
        Ok(config)
    }
}
