use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::Text;
use tracing::debug;
use weather_core::{Config, config, describe_code, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the geocoding and forecast endpoints.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,

        /// Print the reading as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Describe a weather code.
    Describe {
        /// Weather code as reported by the forecast API.
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { city, json } => {
                let city = validate_city(&city)?;
                let config = Config::load()?;
                debug!(
                    geocoding_url = %config.geocoding_url,
                    forecast_url = %config.forecast_url,
                    default_endpoints = config.uses_default_endpoints(),
                    "Loaded configuration"
                );
                let provider = provider_from_config(&config);

                let reading = provider.lookup_weather(city).await?;

                if json {
                    let out = serde_json::to_string_pretty(&reading)
                        .context("Failed to serialize weather reading")?;
                    println!("{out}");
                } else {
                    println!("{reading}");
                }
            }
            Command::Describe { code } => {
                println!("{}", describe_code(code));
            }
        }

        Ok(())
    }
}

fn validate_city(city: &str) -> anyhow::Result<&str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        bail!("Please enter a city name.");
    }
    Ok(trimmed)
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&cfg.geocoding_url)
        .with_help_message(&format!("Default: {}", config::DEFAULT_GEOCODING_URL))
        .prompt()
        .context("Failed to read geocoding endpoint")?;

    cfg.forecast_url = Text::new("Forecast endpoint:")
        .with_default(&cfg.forecast_url)
        .with_help_message(&format!("Default: {}", config::DEFAULT_FORECAST_URL))
        .prompt()
        .context("Failed to read forecast endpoint")?;

    let path = cfg.save()?;
    debug!(path = %path.display(), "Saved configuration");
    println!("Configuration saved to {}", path.display());

    Ok(())
}
