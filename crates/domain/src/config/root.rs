use super::{
    CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, ResolverConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides, applied on top of the file configuration
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub database_path: Option<String>,
    pub upstream: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file with CLI overrides
    ///
    /// Without an explicit path, `ferrous-lookup.toml` in the working
    /// directory is used when present, otherwise defaults apply.
    pub fn load(config_path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(ConfigError::FileNotFound(path.to_string()));
                }
                Self::from_file(path)?
            }
            None if Path::new("ferrous-lookup.toml").exists() => {
                Self::from_file("ferrous-lookup.toml")?
            }
            None => Config::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(format!("{}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(upstream) = overrides.upstream {
            self.resolver.upstream = upstream;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "Web port cannot be 0".to_string(),
            ));
        }

        self.server
            .bind_address
            .parse::<std::net::IpAddr>()
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "Invalid bind address: {}",
                    self.server.bind_address
                ))
            })?;

        self.resolver.upstream.parse::<SocketAddr>().map_err(|_| {
            ConfigError::Validation(format!(
                "Upstream must be an IP:port socket address, got '{}'",
                self.resolver.upstream
            ))
        })?;

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout must be greater than 0".to_string(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }

        self.cache.tz()?;

        Ok(())
    }
}
