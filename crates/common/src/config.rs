use crate::error::BookSumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// booksum application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider API key (never serialized, never sent to the browser)
    #[serde(skip)]
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    pub openai_base_url: String,

    /// Chat model used for summaries
    pub llm_model: String,

    /// Upper bound for one provider call, in seconds
    pub llm_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Directory served under /static
    pub static_dir: PathBuf,

    /// Origin allowed to call the API cross-origin
    pub cors_allowed_origin: Option<String>,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "gpt-3.5-turbo".to_string(),
            llm_timeout_secs: 60,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            static_dir: PathBuf::from("./static"),
            cors_allowed_origin: None,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("static_dir", &self.static_dir)
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BookSumError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            llm_model: std::env::var("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: Self::get_env_parsed("LLM_TIMEOUT_SECS")?
                .unwrap_or(defaults.llm_timeout_secs),
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT")?
                .unwrap_or(defaults.server_port),
            static_dir: Self::get_env_path("STATIC_DIR").unwrap_or(defaults.static_dir),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Parse an environment variable, failing loudly on garbage
    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, BookSumError> {
        match std::env::var(key) {
            Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
                BookSumError::config(format!("{} has an invalid value: {:?}", key, raw))
            }),
            Err(_) => Ok(None),
        }
    }

    /// API key, or a configuration error if it was never supplied
    pub fn require_api_key(&self) -> Result<&str, BookSumError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| BookSumError::config("OPENAI_API_KEY must be set"))
    }

    /// Get log file path
    pub fn get_log_path(&self, filename: &str) -> PathBuf {
        self.log_dir.join(filename)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BookSumError> {
        if self.llm_model.trim().is_empty() {
            return Err(BookSumError::config("LLM model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(BookSumError::config(
                "OpenAI base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(BookSumError::config("Server port cannot be 0"));
        }

        if self.llm_timeout_secs == 0 {
            return Err(BookSumError::config("LLM timeout must be at least 1 second"));
        }

        Ok(())
    }
}
