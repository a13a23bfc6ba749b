use super::ConfigError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// IANA timezone used for `last_updated` wall-clock timestamps (default: "UTC")
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl CacheConfig {
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone.parse::<Tz>().map_err(|e| {
            ConfigError::Validation(format!("Unknown timezone '{}': {}", self.timezone, e))
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}
