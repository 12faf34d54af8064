use crate::{Config, WeatherError, WeatherReading, provider::openmeteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Resolves a city name to its current weather.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn lookup_weather(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}

/// Construct a provider using the endpoints from config.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenMeteoProvider::from_config(config))
}
