use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    codes::describe_code,
    config::{Config, DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL},
    error::{Api, WeatherError},
    model::{GeoResult, WeatherReading},
};

use super::WeatherProvider;

/// Open-Meteo geocoding + forecast client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    /// Provider against the public Open-Meteo endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(DEFAULT_GEOCODING_URL, DEFAULT_FORECAST_URL)
    }

    pub fn with_endpoints(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoints(config.geocoding_url.as_str(), config.forecast_url.as_str())
    }

    /// Replace the HTTP client, e.g. to share one connection pool.
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn geocoding_url(&self) -> &str {
        &self.geocoding_url
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    /// Resolve a city name to the first geocoding match.
    pub async fn geocode(&self, city: &str) -> Result<GeoResult, WeatherError> {
        debug!(city, url = %self.geocoding_url, "Requesting geocoding");

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await?;

        let body = success_body(Api::Geocoding, res).await?;
        let parsed: OmGeocodingResponse = serde_json::from_str(&body)?;

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(WeatherError::NotFound)?;

        let latitude = first.latitude.ok_or(WeatherError::IncompleteResponse {
            api: Api::Geocoding,
            field: "latitude",
        })?;
        let longitude = first.longitude.ok_or(WeatherError::IncompleteResponse {
            api: Api::Geocoding,
            field: "longitude",
        })?;

        let location = GeoResult {
            name: first.name.unwrap_or_else(|| city.to_string()),
            latitude,
            longitude,
        };

        debug!(
            "Geocoded '{}' to {} ({:.4}, {:.4})",
            city, location.name, location.latitude, location.longitude
        );

        Ok(location)
    }

    /// Current temperature (°F) and weather code at the location.
    async fn fetch_current_weather(
        &self,
        location: &GeoResult,
    ) -> Result<(f64, i32), WeatherError> {
        debug!(
            url = %self.forecast_url,
            latitude = location.latitude,
            longitude = location.longitude,
            "Requesting current weather"
        );

        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                ("temperature_unit", "fahrenheit"),
            ])
            .send()
            .await?;

        let body = success_body(Api::Forecast, res).await?;
        let parsed: OmForecastResponse = serde_json::from_str(&body)?;

        let current = parsed.current_weather.ok_or(WeatherError::IncompleteResponse {
            api: Api::Forecast,
            field: "current_weather",
        })?;

        let temperature = current.temperature.ok_or(WeatherError::IncompleteResponse {
            api: Api::Forecast,
            field: "temperature",
        })?;
        let weathercode = current.weathercode.ok_or(WeatherError::IncompleteResponse {
            api: Api::Forecast,
            field: "weathercode",
        })?;

        Ok((temperature, weathercode))
    }

    async fn lookup(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let location = self.geocode(city).await?;
        let (temperature, weathercode) = self.fetch_current_weather(&location).await?;

        Ok(WeatherReading {
            city: location.name,
            temperature_fahrenheit: temperature,
            description: describe_code(weathercode).to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResult {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    results: Option<Vec<OmGeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: Option<f64>,
    weathercode: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn lookup_weather(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let result = self.lookup(city).await;

        match &result {
            Ok(reading) => debug!(
                "Weather for {}: {}°F, {}",
                reading.city, reading.temperature_fahrenheit, reading.description
            ),
            Err(err) => warn!(city, error = %err, "Error fetching weather"),
        }

        result
    }
}

/// Body of a success response; any other status becomes `WeatherError::Service`.
async fn success_body(api: Api, res: Response) -> Result<String, WeatherError> {
    let status = res.status();

    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        debug!(%status, body = %truncate_body(&body), "{api} API returned an error status");
        return Err(WeatherError::Service { api, status: status.as_u16() });
    }

    Ok(res.text().await?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
