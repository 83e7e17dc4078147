//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sandman_web.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use axum_extra::extract::cookie::Key;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Config file and report archive locations.
    pub paths: PathsConfig,
    /// Health probe settings.
    pub health: HealthConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cookie signing secret.
    pub secret: SecretConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Filesystem locations the front-end works against.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// The live config file.
    pub config_file: PathBuf,
    /// The factory-defaults config file.
    pub default_config_file: PathBuf,
    /// Directory the daemon writes daily reports into.
    pub reports_dir: PathBuf,
}

/// Health probe configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// systemd unit name for the sandman daemon probe.
    pub sandman_unit: String,
    /// `host:port` the rhasspy reachability probe connects to.
    pub rhasspy_address: String,
    /// Connect timeout for the rhasspy probe, in milliseconds.
    pub probe_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Cookie signing secret.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecretConfig {
    /// Key material for signing the flash cookie. Empty means a fresh
    /// random key per process, which is enough for the redirect-then-render
    /// flash flow. When set it must be at least 32 bytes.
    pub key: String,
}

impl Config {
    /// Load configuration from `sandman_web.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sandman_web.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SANDMAN_WEB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_CONFIG_FILE") {
            self.paths.config_file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_DEFAULT_CONFIG_FILE") {
            self.paths.default_config_file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_REPORTS_DIR") {
            self.paths.reports_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_SECRET_KEY") {
            self.secret.key = val;
        }
        if let Ok(val) = std::env::var("SANDMAN_WEB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.secret.key.is_empty() && self.secret.key.len() < 32 {
            return Err(ConfigError::Validation(
                "secret key must be at least 32 bytes".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SecretConfig {
    /// Build the cookie signing key: derived from the configured secret, or
    /// freshly generated when none is set.
    ///
    /// # Panics
    ///
    /// Panics when the secret is non-empty but shorter than 32 bytes;
    /// [`Config::load`] validates this before the key is ever built.
    #[must_use]
    pub fn cookie_key(&self) -> Key {
        if self.key.is_empty() {
            Key::generate()
        } else {
            Key::derive_from(self.key.as_bytes())
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("/usr/local/etc/sandman/sandman.conf"),
            default_config_file: PathBuf::from("/usr/local/etc/sandman/default_sandman.conf"),
            reports_dir: PathBuf::from("/var/sandman/reports"),
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            sandman_unit: "sandman".to_string(),
            rhasspy_address: "127.0.0.1:12101".to_string(),
            probe_timeout_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sandman_webd=info,sandman_web=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(
            config.paths.config_file,
            PathBuf::from("/usr/local/etc/sandman/sandman.conf")
        );
        assert_eq!(config.health.rhasspy_address, "127.0.0.1:12101");
        assert!(config.secret.key.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [paths]
            config_file = '/tmp/sandman.conf'
            default_config_file = '/tmp/default_sandman.conf'
            reports_dir = '/tmp/reports'

            [health]
            sandman_unit = 'sandman-dev'
            rhasspy_address = 'rhasspy.local:12101'
            probe_timeout_ms = 250

            [logging]
            filter = 'debug'

            [secret]
            key = '0123456789abcdef0123456789abcdef'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.paths.reports_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.health.sandman_unit, "sandman-dev");
        assert_eq!(config.health.probe_timeout_ms, 250);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.secret.key.len(), 32);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_short_secret_key() {
        let mut config = Config::default();
        config.secret.key = "too short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_empty_or_long_secret_key() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.secret.key = "0123456789abcdef0123456789abcdef".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn should_derive_cookie_key_from_configured_secret() {
        let secret = SecretConfig {
            key: "0123456789abcdef0123456789abcdef".to_string(),
        };
        // Deterministic: the same secret derives the same key.
        assert_eq!(
            secret.cookie_key().signing(),
            secret.cookie_key().signing()
        );
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
