use anyhow::Result;
use clap::{Parser, Subcommand};
use model::ForecastHorizon;

pub mod commands;

use commands::{list_regions, serve, show};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "jma-forecast")]
#[command(about = "JMA weather forecast viewer with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    /// Address prefix of the provider's forecast documents
    #[arg(
        long,
        global = true,
        env = "JMA_BASE_URL",
        default_value = compute::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Timestamp presentation: "formatted" (YYYY/MM/DD HH:MM) or "raw"
    #[arg(long, global = true, env = "TIMESTAMP_STYLE", default_value = "formatted")]
    pub timestamps: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Fetch one forecast and print it as plain text
    ///
    /// Examples:
    ///   jma-forecast show --region 270000
    ///   jma-forecast show --region 130000 --horizon weekly
    Show {
        /// Six digit region code (see the `regions` command); empty prints the prompt
        #[arg(short, long, default_value = "")]
        region: String,

        /// Forecast horizon: "short" or "weekly"
        #[arg(long, default_value = "short")]
        horizon: ForecastHorizon,
    },
    /// List the selectable regions and their codes
    Regions,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::new(&self.base_url, &self.timestamps)?;
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&config, &bind_address).await?;
            }
            Commands::Show { region, horizon } => {
                show(&config, &region, horizon).await?;
            }
            Commands::Regions => {
                list_regions();
            }
        }
        Ok(())
    }
}
