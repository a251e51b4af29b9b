//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `coursecard.toml` in the working directory (or the path named
//! by `COURSECARD_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use coursecard_domain::course::CourseDisplayAttributes;

use crate::catalog;

const DEFAULT_PATH: &str = "coursecard.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Leptos dashboard settings.
    pub dashboard: DashboardConfig,
    /// Courses rendered by the dashboards, in display order.
    pub courses: Vec<CourseDisplayAttributes>,
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

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Leptos dashboard configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Trunk `dist/` directory to serve under `/app`. Disabled when unset.
    pub dist_dir: Option<String>,
}

impl Config {
    /// Load configuration from `coursecard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("COURSECARD_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
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
        if let Ok(val) = std::env::var("COURSECARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("COURSECARD_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("COURSECARD_BIND")
            && let Some((host, port)) = parse_bind(&val)
        {
            self.server.host = host;
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("COURSECARD_DASHBOARD_DIR") {
            self.dashboard.dist_dir = Some(val);
        }
        if let Ok(val) = std::env::var("COURSECARD_LOG") {
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
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Courses to serve: the configured ones, or the demo catalog when the
    /// file lists none.
    #[must_use]
    pub fn catalog(&self) -> Vec<CourseDisplayAttributes> {
        if self.courses.is_empty() {
            catalog::demo()
        } else {
            self.courses.clone()
        }
    }
}

/// Split a `host:port` bind address. Yields nothing unless both halves are
/// usable, so a bad port never leaves a half-applied override.
fn parse_bind(value: &str) -> Option<(String, u16)> {
    let (host, port) = value.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port = port.parse().ok()?;
    Some((host.to_string(), port))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "coursecardd=info,coursecard_adapter_http_axum=info,tower_http=debug"
                .to_string(),
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
        assert_eq!(config.server.port, 3000);
        assert!(config.dashboard.dist_dir.is_none());
        assert!(config.courses.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [dashboard]
            dist_dir = 'crates/adapters/dashboard_leptos/dist'

            [[courses]]
            title = 'Intro to Design'
            instructor = 'J. Doe'
            progress = 42
            nextClass = 'Wed 14:00'
            image = '/img/a.jpg'

            [[courses]]
            title = 'Advanced Typography'
            instructor = 'A. Smith'
            progress = 80
            nextClass = 'Thu 09:00'
            image = '/img/b.jpg'
            students = 57
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.dashboard.dist_dir.as_deref(),
            Some("crates/adapters/dashboard_leptos/dist")
        );
        assert_eq!(config.courses.len(), 2);
        assert_eq!(config.courses[0].students, 24);
        assert_eq!(config.courses[1].students, 57);
    }

    #[test]
    fn should_reject_course_missing_required_field() {
        let toml = "
            [[courses]]
            title = 'Intro to Design'
            progress = 42
            nextClass = 'Wed 14:00'
            image = '/img/a.jpg'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_fall_back_to_demo_catalog_when_no_courses() {
        let config = Config::default();
        assert_eq!(config.catalog(), catalog::demo());
    }

    #[test]
    fn should_prefer_configured_courses() {
        let toml = "
            [[courses]]
            title = 'Only One'
            instructor = 'J. Doe'
            progress = 5
            nextClass = 'Mon 10:00'
            image = '/img/one.jpg'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Only One");
    }

    #[test]
    fn should_parse_bind_address() {
        assert_eq!(
            parse_bind("127.0.0.1:8080"),
            Some(("127.0.0.1".to_string(), 8080))
        );
    }

    #[test]
    fn should_ignore_bind_address_with_invalid_port() {
        assert_eq!(parse_bind("example.com:abc"), None);
        assert_eq!(parse_bind("example.com:70000"), None);
    }

    #[test]
    fn should_ignore_bind_address_without_port_or_host() {
        assert_eq!(parse_bind("example.com"), None);
        assert_eq!(parse_bind(":8080"), None);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
