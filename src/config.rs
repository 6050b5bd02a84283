use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Settings for the Gemini generateContent endpoint.
///
/// `api_key` is optional on purpose: the service must come up without it and
/// answer every chat request with a generic error instead of crashing.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_secs: default_gemini_timeout_secs(),
            generation: GenerationSettings::default(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_gemini_model() -> String { "gemini-1.5-flash".to_string() }
fn default_gemini_timeout_secs() -> u64 { 30 }

/// Fixed generation parameters sent with every provider call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            top_p: default_top_p(),
            top_k: default_top_k(),
        }
    }
}

fn default_temperature() -> f32 { 0.7 }
fn default_max_output_tokens() -> u32 { 500 }
fn default_top_p() -> f32 { 0.8 }
fn default_top_k() -> u32 { 40 }

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

fn default_window_secs() -> u64 { 15 * 60 }
fn default_max_requests() -> u32 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_allowed_origin_suffixes")]
    pub allowed_origin_suffixes: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_origin_suffixes: default_allowed_origin_suffixes(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    let mut origins = vec!["https://your-reunion-website.com".to_string()];
    for port in [3000, 5000, 8000, 8080, 8088] {
        origins.push(format!("http://localhost:{}", port));
        origins.push(format!("http://127.0.0.1:{}", port));
    }
    origins
}

fn default_allowed_origin_suffixes() -> Vec<String> {
    [".netlify.app", ".vercel.app", ".github.io", ".pages.dev"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with REUNION__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with REUNION__)
            // e.g., REUNION__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("REUNION")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the bare env names the hosting platform sets
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("REUNION")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the plain environment variables the hosting platform sets:
/// GEMINI_API_KEY for the provider credential and PORT for the listen port.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let port = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok());

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key {
        builder = builder.set_override("gemini.api_key", key)?;
    }
    if let Some(port) = port {
        builder = builder.set_override("server.port", port as i64)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation_params() {
        let generation = GenerationSettings::default();
        assert_eq!(generation.temperature, 0.7);
        assert_eq!(generation.max_output_tokens, 500);
        assert_eq!(generation.top_p, 0.8);
        assert_eq!(generation.top_k, 40);
    }

    #[test]
    fn test_default_rate_limit_window() {
        let limits = RateLimitSettings::default();
        assert_eq!(limits.window_secs, 900);
        assert_eq!(limits.max_requests, 100);
    }

    #[test]
    fn test_default_cors_covers_local_dev_ports() {
        let cors = CorsSettings::default();
        assert!(cors.allowed_origins.contains(&"http://localhost:8080".to_string()));
        assert!(cors.allowed_origin_suffixes.contains(&".github.io".to_string()));
    }
}
