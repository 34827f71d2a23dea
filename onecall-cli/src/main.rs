//! Binary crate for the `onecall` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Printing DarkSky-shaped JSON for recorded One Call responses

use clap::Parser;
use onecall_core::Config;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    let config = Config::load()?;

    init_tracing(&config);

    cmd.run(config).await
}

/// Logs go to stderr so stdout only ever carries JSON.
///
/// `RUST_LOG` wins over the configured `log_filter`, which wins over `warn`.
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = config.log_filter.as_deref().unwrap_or("warn");
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}
