use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use monynha_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MONYNHA__EMAIL__API_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (MONYNHA__EMAIL__API_KEY, etc.)
        builder = builder.add_source(
            Environment::with_prefix("MONYNHA")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the deployment's legacy environment variables
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.endpoint.is_empty() {
            return Err("Email endpoint must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_defaults_point_at_the_studio_inbox() {
        let email = EmailConfig::default();
        assert_eq!(email.endpoint, "https://api.resend.com");
        assert_eq!(email.contact_address, "hello@monynha.com");
        assert!(email.api_key.is_empty());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        };

        assert!(config.validate().is_ok());
    }
}
