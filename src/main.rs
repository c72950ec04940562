use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use book_catalog::{
    catalog::{BookStore, Catalog},
    config::ServiceConfig,
    graphql, logging, metrics, server,
};

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "GraphQL query service over a static book catalog")]
#[command(version)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, env = "BOOK_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "BOOK_CATALOG_HOST")]
    host: Option<String>,

    /// Port to run the server on
    #[arg(short, long, env = "BOOK_CATALOG_PORT")]
    port: Option<u16>,

    /// Emit console logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Prometheus exporter address
    #[arg(long, env = "BOOK_CATALOG_METRICS_ADDR")]
    metrics_addr: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::load(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.log_json {
            config.logging.json = true;
        }
        if self.metrics_addr.is_some() {
            config.metrics.addr = self.metrics_addr;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    let config = Cli::parse().into_config()?;
    logging::init_logging(&config.logging);

    if let Some(addr) = config.metrics.addr.as_deref() {
        if let Err(e) = metrics::init_metrics(addr) {
            warn!("Metrics disabled: {}", e);
        }
    }

    let catalog = Catalog::builtin();
    info!(books = catalog.len(), "Loaded static catalog");

    let store: Arc<dyn BookStore> = Arc::new(catalog);
    let schema = graphql::create_schema(store);

    server::start_server(&config.server, schema).await
}
