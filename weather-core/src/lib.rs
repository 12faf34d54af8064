//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - City lookup against the Open-Meteo geocoding and forecast APIs
//! - The weather code table
//! - Configuration of the API endpoints
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use codes::{KNOWN_CODES, UNKNOWN_WEATHER, describe_code};
pub use config::Config;
pub use error::{Api, WeatherError};
pub use model::{GeoResult, WeatherReading};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};

/// Look up current weather for `city` using the public Open-Meteo endpoints.
///
/// The first geocoding match wins. Fails with [`WeatherError::NotFound`] when the
/// geocoder knows no such city and [`WeatherError::Service`] on a non-success status.
pub async fn lookup_weather(city: &str) -> Result<WeatherReading, WeatherError> {
    OpenMeteoProvider::new().lookup_weather(city).await
}
