//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants
//! for default paths and logging. `AppConfig` is the root configuration
//! struct containing all settings.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeting_service=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default listen address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file at the default path is not an error: the built-in
    /// defaults apply, so the binary runs with no files on disk. An
    /// explicitly requested file that cannot be read, or any file that
    /// cannot be parsed, is always an error.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "{}", contents).expect("write config");
        file
    }

    fn load(file: &tempfile::NamedTempFile) -> Result<AppConfig, ConfigError> {
        AppConfig::load_or_default(file.path().to_str().expect("utf-8 path"))
    }

    #[test]
    fn parses_full_config() {
        let file = write_config(
            r#"
[http]
host = "0.0.0.0"
port = 9090

[logging]
format = "json"
"#,
        );

        let config = load(&file).expect("load config");
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config("[http]\nport = 3000\n");

        let config = load(&file).expect("load config");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = write_config("");

        let config = load(&file).expect("load config");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("[http\nport = not a number");

        let err = load(&file).expect_err("load should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_explicit_path_is_an_io_error() {
        let err = AppConfig::load_or_default("/nonexistent/greeting-service.toml")
            .expect_err("load should fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
