//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BackendConfig, BillingConfig, ConfigError, CorsConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig,
};
