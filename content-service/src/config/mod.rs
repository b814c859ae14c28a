use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text model.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for article generation (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Base URL of the generative-language REST API
    pub api_base: String,
    /// Abort the upstream call after this many milliseconds; unset waits indefinitely
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let api_key = get_env("GOOGLE_API_KEY", None)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GOOGLE_API_KEY is set but empty"
            )));
        }

        let timeout_ms = match env::var("GENAI_TIMEOUT_MS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GENAI_TIMEOUT_MS must be a number of milliseconds: {}",
                    e
                ))
            })?),
            Err(_) => None,
        };

        Ok(ContentConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
                api_base: get_env("GENAI_API_BASE", Some(DEFAULT_API_BASE))?,
                timeout_ms,
            },
            google: GoogleConfig {
                api_key: Secret::new(api_key),
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"))?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
