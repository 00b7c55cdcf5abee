use crate::error::ConfigError;
use config::{Config, Environment, File};
use lou::providers::configs::{GeminiProviderConfig, GEMINI_HOST, GEMINI_MODEL};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

/// Older deployments set the credential under this name; it is still read as a default.
pub const LEGACY_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_provider_host")]
    pub host: String,
    #[serde(default = "default_model")]
    pub model: String,
    // Absence is reported per request, not at startup
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderSettings {
    pub fn into_config(self) -> GeminiProviderConfig {
        GeminiProviderConfig {
            host: self.host,
            model: self.model,
            api_key: self.api_key,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            host: default_provider_host(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Server defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            // Provider defaults
            .set_default("provider.host", default_provider_host())?
            .set_default("provider.model", default_model())?
            .set_default("provider.timeout_secs", default_timeout_secs())?;

        if let Ok(api_key) = std::env::var(LEGACY_API_KEY_VAR) {
            builder = builder.set_default("provider.api_key", api_key)?;
        }

        let config = builder
            // Optional lou.toml in the working directory
            .add_source(File::with_name("lou").required(false))
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("LOU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(ConfigError::Other)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_provider_host() -> String {
    GEMINI_HOST.to_string()
}

fn default_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("LOU_") || key == LEGACY_API_KEY_VAR {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.provider.host, GEMINI_HOST);
        assert_eq!(settings.provider.model, GEMINI_MODEL);
        assert_eq!(settings.provider.timeout_secs, 60);
        // A missing key is not a startup failure
        assert_eq!(settings.provider.api_key, None);
    }

    #[test]
    #[serial]
    fn test_legacy_api_key_variable() {
        clean_env();
        env::set_var(LEGACY_API_KEY_VAR, "legacy-key");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.provider.api_key.as_deref(), Some("legacy-key"));

        env::remove_var(LEGACY_API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var(LEGACY_API_KEY_VAR, "legacy-key");
        env::set_var("LOU_SERVER__PORT", "8080");
        env::set_var("LOU_PROVIDER__API_KEY", "prefixed-key");
        env::set_var("LOU_PROVIDER__HOST", "http://localhost:9999");
        env::set_var("LOU_PROVIDER__MODEL", "gemini-1.5-pro");
        env::set_var("LOU_PROVIDER__TIMEOUT_SECS", "5");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.provider.api_key.as_deref(), Some("prefixed-key"));

        let config = settings.provider.into_config();
        assert_eq!(config.host, "http://localhost:9999");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(5));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_value_is_reported() {
        clean_env();
        env::set_var("LOU_SERVER__PORT", "not-a-port");

        let result = Settings::new();
        assert!(matches!(result, Err(ConfigError::Other(_))));

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = server_settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");

        let server_settings = ServerSettings {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(matches!(
            server_settings.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
