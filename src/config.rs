//! Server configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://enrollment.db"
//! export LISTEN="127.0.0.1:8000"
//! export GROQ_API_KEY="gsk_..."   # optional, enables generated study tips
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://enrollment.db`, created if missing)
//! - `LISTEN` - Bind address (default: `127.0.0.1:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated browser origins
//!   (default: localhost and 127.0.0.1 on ports 3000, 5173, 5174)
//! - `GROQ_API_KEY` - Groq API key; empty or unset serves default tips
//! - `GROQ_API_URL` - API root (default: `https://api.groq.com/openai/v1`)
//! - `GROQ_MODEL` - Chat model (default: `llama-3.1-8b-instant`)
//! - `GENAI_TIMEOUT_SECONDS` - Completion request timeout (default: 30)
//! - `GENAI_RATE_LIMIT_PER_SECOND` - Token refill period in seconds (default: 1)
//! - `GENAI_RATE_LIMIT_BURST` - Burst size per client IP (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::genai::GroqSettings;
use crate::routes::RouterOptions;

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5174",
    "http://127.0.0.1:5174",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
    pub cors_allowed_origins: Vec<String>,

    // ── Study tips generation ───────────────────────────────────────────────
    /// Groq API key (`GROQ_API_KEY`). `None` serves default tips.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
    pub genai_timeout_seconds: u64,
    pub genai_rate_limit_per_second: u64,
    pub genai_rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://enrollment.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        let cors_allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(list) => parse_origins(&list),
            Err(_) => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let groq_api_key = env::var("GROQ_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let groq_api_url = env::var("GROQ_API_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());
        let groq_model =
            env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".to_string());

        let genai_timeout_seconds = parse_var("GENAI_TIMEOUT_SECONDS", 30)?;
        let genai_rate_limit_per_second = parse_var("GENAI_RATE_LIMIT_PER_SECOND", 1)?;
        let genai_rate_limit_burst = parse_var("GENAI_RATE_LIMIT_BURST", 10)?;

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            cors_allowed_origins,
            groq_api_key,
            groq_api_url,
            groq_model,
            genai_timeout_seconds,
            genai_rate_limit_per_second,
            genai_rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - a CORS origin or `groq_api_url` is not an absolute URL
    /// - a pool, timeout or rate limit setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        for origin in &self.cors_allowed_origins {
            url::Url::parse(origin)
                .with_context(|| format!("CORS_ALLOWED_ORIGINS contains invalid URL '{origin}'"))?;
        }

        url::Url::parse(&self.groq_api_url)
            .with_context(|| format!("GROQ_API_URL is not a valid URL: '{}'", self.groq_api_url))?;

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.genai_timeout_seconds == 0 {
            anyhow::bail!("GENAI_TIMEOUT_SECONDS must be greater than 0");
        }
        if self.genai_rate_limit_per_second == 0 || self.genai_rate_limit_burst == 0 {
            anyhow::bail!("GENAI_RATE_LIMIT_PER_SECOND and GENAI_RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Groq connection settings, if an API key is configured.
    pub fn groq_settings(&self) -> Option<GroqSettings> {
        self.groq_api_key.as_ref().map(|api_key| GroqSettings {
            api_key: api_key.clone(),
            api_url: self.groq_api_url.clone(),
            model: self.groq_model.clone(),
            timeout: Duration::from_secs(self.genai_timeout_seconds),
        })
    }

    /// Router options for [`crate::routes::app_router`].
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            cors_allowed_origins: self.cors_allowed_origins.clone(),
            genai_rate_limit: Some((
                self.genai_rate_limit_per_second,
                self.genai_rate_limit_burst,
            )),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));

        match &self.groq_api_key {
            Some(key) => tracing::info!(
                "  Study tips: {} via {} (key {})",
                self.groq_model,
                self.groq_api_url,
                mask_secret(key)
            ),
            None => tracing::info!("  Study tips: default tips (GROQ_API_KEY not set)"),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{name} has invalid value '{v}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// `gsk_abcdef123` → `gsk_***`
fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
