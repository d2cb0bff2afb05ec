//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub backend: BackendConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub billing: BillingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Hotel backend REST API
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL, without trailing slash
    pub url: String,
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Backend token decoding
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JwtConfig {
    /// Shared HS256 secret; without it only structure and expiry are checked
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub leeway_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Company details printed on receipts
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            tax_id: String::new(),
            address: String::new(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "hospeda-console".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_backend_timeout() -> u64 {
    10
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_company_name() -> String {
    "Hospeda+".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let parsed = |key: &'static str| -> Result<Option<u64>, ConfigError> {
            var(key)
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue(key, raw.clone()))
                })
                .transpose()
        };

        let port = parsed("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?;
        let port = u16::try_from(port)
            .map_err(|_| ConfigError::InvalidValue("API_PORT", port.to_string()))?;

        let backend_url = var("BACKEND_URL").ok_or(ConfigError::MissingVar("BACKEND_URL"))?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("BACKEND_URL", backend_url));
        }

        let small = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match parsed(key)? {
                Some(v) => u32::try_from(v).map_err(|_| ConfigError::InvalidValue(key, v.to_string())),
                None => Ok(default),
            }
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            backend: BackendConfig {
                url: backend_url.trim_end_matches('/').to_string(),
                timeout_secs: parsed("BACKEND_TIMEOUT_SECS")?.unwrap_or_else(default_backend_timeout),
            },
            jwt: JwtConfig {
                secret: var("JWT_SECRET"),
                leeway_secs: parsed("JWT_LEEWAY_SECS")?.unwrap_or(0),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: small(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: small("RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            billing: BillingConfig {
                company_name: var("BILLING_COMPANY_NAME").unwrap_or_else(default_company_name),
                tax_id: var("BILLING_TAX_ID").unwrap_or_default(),
                address: var("BILLING_ADDRESS").unwrap_or_default(),
                currency_symbol: var("BILLING_CURRENCY_SYMBOL")
                    .unwrap_or_else(default_currency_symbol),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
