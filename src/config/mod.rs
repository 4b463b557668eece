// src/config/mod.rs
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Runtime settings. The only knob is the base URL of the backend that
/// does the actual video processing and answering.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
}

impl Settings {
    /// Compiled-in defaults overridden by `VIDQA_*` environment
    /// variables (`VIDQA_API_URL` selects the backend host).
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .add_source(config::Environment::with_prefix("VIDQA"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, DEFAULT_API_URL};

    // Single test so the env var mutation cannot race a parallel
    // default-value check.
    #[test]
    fn load_uses_default_then_environment_override() {
        std::env::remove_var("VIDQA_API_URL");
        let settings = Settings::load().unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);

        std::env::set_var("VIDQA_API_URL", "http://example.test:9000");
        let settings = Settings::load().unwrap();
        assert_eq!(settings.api_url, "http://example.test:9000");
        std::env::remove_var("VIDQA_API_URL");
    }
}
