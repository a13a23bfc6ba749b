//! # Ferrous Lookup
//!
//! HTTP endpoint serving a domain's DNS records from a SQLite cache

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ferrous_lookup_domain::CliOverrides;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version = "0.1.0")]
#[command(about = "DNS record lookups served from a per-domain SQLite cache")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    database: Option<String>,

    /// Upstream resolver (IP:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            web_port: self.web_port,
            database_path: self.database.clone(),
            upstream: self.upstream.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Ferrous Lookup");

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::Services::new(&config, pool).await?;

    server::start_web_server(&config.server, services.app_state()).await
}
