//! Configuration module for Ferrous Lookup
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `database`: Cache database
//! - `resolver`: Upstream DNS server and query timeout
//! - `cache`: Timestamp timezone
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
