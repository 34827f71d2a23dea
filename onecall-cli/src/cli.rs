use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, MultiSelect, Text};
use onecall_core::{Config, DarkSkyCompat, Exclude, FileSource, OneCallRequest, RequestParams};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "onecall", version, about = "One Call to DarkSky converter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the default output and logging options.
    Configure,

    /// Print a recorded One Call response in DarkSky's shape.
    Convert {
        /// Path to a One Call JSON document.
        path: PathBuf,

        /// Data blocks to leave out, e.g. `--exclude minutely,hourly`.
        /// Replaces the configured exclusions.
        #[arg(long, value_delimiter = ',', value_parser = parse_exclude)]
        exclude: Option<Vec<Exclude>>,

        /// Single-line JSON, regardless of the configured setting.
        #[arg(long)]
        compact: bool,

        /// Latitude sent with the request. The recorded document keeps its own.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude sent with the request. The recorded document keeps its own.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lon: f64,
    },
}

fn parse_exclude(value: &str) -> Result<Exclude, String> {
    Exclude::try_from(value).map_err(|err| err.to_string())
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(config),
            Command::Convert { path, exclude, compact, lat, lon } => {
                let params = match exclude {
                    Some(blocks) => blocks
                        .into_iter()
                        .fold(RequestParams::default(), |params, block| params.excluding(block)),
                    None => config.request_params(),
                };

                let request = OneCallRequest::new(lat, lon);
                convert(path, request, &params, config.pretty && !compact).await
            }
        }
    }
}

async fn convert(
    path: PathBuf,
    request: OneCallRequest,
    params: &RequestParams,
    pretty: bool,
) -> anyhow::Result<()> {
    let client = DarkSkyCompat::new(FileSource::new(path));
    tracing::info!(path = %client.source().path().display(), "converting recorded forecast");

    let forecast = client.forecast(request, params).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&forecast)
    } else {
        serde_json::to_string(&forecast)
    }
    .context("Failed to serialize DarkSky forecast")?;

    println!("{json}");
    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    config.pretty = Confirm::new("Pretty-print JSON output?")
        .with_default(config.pretty)
        .prompt()
        .context("Failed to read pretty-print answer")?;

    let defaults: Vec<usize> = Exclude::all()
        .iter()
        .enumerate()
        .filter(|(_, block)| config.exclude.contains(block))
        .map(|(i, _)| i)
        .collect();

    let exclude = MultiSelect::new("Data blocks to exclude by default:", Exclude::all().to_vec())
        .with_default(&defaults)
        .prompt()
        .context("Failed to read excluded blocks")?;
    config.set_exclude(exclude);

    let log_filter = Text::new("Log filter (empty for `warn`):")
        .with_default(config.log_filter.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read log filter")?;
    config.log_filter = Some(log_filter.trim().to_string()).filter(|f| !f.is_empty());

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
