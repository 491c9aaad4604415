use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use common::PredictionRequest;
use std::path::PathBuf;
use tracing::debug;

pub mod commands;

use crate::client::HttpForecastClient;
use crate::config::ClientConfig;
use commands::{batch_predict, dashboard, health, models, predict, status};

#[derive(Parser)]
#[command(name = "salescast")]
#[command(about = "Terminal client for the SalesCast sales forecasting service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the forecasting service
    ///
    /// Overrides `api_base_url` from the configuration file and the
    /// SALESCAST_API_BASE_URL environment variable.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to a configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print raw JSON responses instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the service status snapshot
    Status,
    /// Show the detailed health check
    Health,
    /// List the models the service has loaded
    Models,
    /// Request a single sales prediction
    Predict(PredictArgs),
    /// Request predictions for every entry of a JSON file
    ///
    /// The file must contain a JSON array of prediction requests, e.g.
    ///   [{"store_id": 1, "dept_id": 1, "date": "2024-03-15",
    ///     "temperature": 70.0, "fuel_price": 3.5, "cpi": 220.0,
    ///     "unemployment": 7.0}]
    Batch {
        /// Path to the JSON request file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Show the system dashboard (status, health and models fetched concurrently)
    Dashboard,
}

/// Prediction inputs; defaults match the web form.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Store ID (1-45)
    #[arg(long, default_value_t = 1)]
    pub store_id: i32,
    /// Department ID (1-99)
    #[arg(long, default_value_t = 1)]
    pub dept_id: i32,
    /// Week date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Temperature in °F
    #[arg(long, default_value_t = 70.0, allow_negative_numbers = true)]
    pub temperature: f64,
    /// Fuel price in USD
    #[arg(long, default_value_t = 3.5)]
    pub fuel_price: f64,
    /// Consumer price index
    #[arg(long, default_value_t = 220.0)]
    pub cpi: f64,
    /// Unemployment rate in percent
    #[arg(long, default_value_t = 7.0)]
    pub unemployment: f64,
}

impl From<PredictArgs> for PredictionRequest {
    fn from(args: PredictArgs) -> Self {
        let mut request = match args.date {
            Some(date) => PredictionRequest::for_date(date),
            None => PredictionRequest::default(),
        };
        request.store_id = args.store_id;
        request.dept_id = args.dept_id;
        request.temperature = args.temperature;
        request.fuel_price = args.fuel_price;
        request.cpi = args.cpi;
        request.unemployment = args.unemployment;
        request
    }
}

/// What every command needs.
pub struct Session {
    pub client: HttpForecastClient,
    pub json: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::load(self.config.as_deref(), self.api_url.as_deref())?)
    }

    pub async fn run(self, config: ClientConfig) -> Result<()> {
        debug!("API base URL: {}", config.api_base_url);
        let session = Session {
            client: HttpForecastClient::new(&config)?,
            json: self.json,
        };

        match self.command {
            Commands::Status => {
                status(&session).await?;
            }
            Commands::Health => {
                health(&session).await?;
            }
            Commands::Models => {
                models(&session).await?;
            }
            Commands::Predict(args) => {
                predict(&session, args.into()).await?;
            }
            Commands::Batch { file } => {
                batch_predict(&session, &file).await?;
            }
            Commands::Dashboard => {
                dashboard(&session).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_defaults_match_form() {
        let cli = Cli::try_parse_from(["salescast", "predict", "--date", "2024-03-15"]).unwrap();
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let request = PredictionRequest::from(args);
        assert_eq!(
            request,
            PredictionRequest::for_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }

    #[test]
    fn test_predict_flags() {
        let cli = Cli::try_parse_from([
            "salescast",
            "--api-url",
            "http://forecast:8000",
            "predict",
            "--store-id",
            "5",
            "--dept-id",
            "10",
            "--temperature",
            "-4.5",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://forecast:8000"));
        assert!(cli.json);
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.store_id, 5);
        assert_eq!(args.dept_id, 10);
        assert_eq!(args.temperature, -4.5);
    }

    #[test]
    fn test_rejects_malformed_date() {
        assert!(Cli::try_parse_from(["salescast", "predict", "--date", "15/03/2024"]).is_err());
    }
}
