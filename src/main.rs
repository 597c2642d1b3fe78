//! Minerva worker binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minerva::config::WorkerConfig;

/// Voice tutoring agent worker.
#[derive(Debug, Parser)]
#[command(name = "minerva", version, about)]
struct Cli {
    /// Bind address for the dispatch listener.
    #[arg(long, env = "MINERVA_HOST")]
    host: Option<String>,

    /// Bind port for the dispatch listener.
    #[arg(long, env = "MINERVA_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("minerva=info")),
        )
        .init();

    let mut config = WorkerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    if let Err(e) = minerva::worker::run(config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
