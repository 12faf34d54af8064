use serde::{Deserialize, Serialize};
use std::fmt;

/// First geocoding match for a city name.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions for a resolved city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature_fahrenheit: f64,
    pub description: String,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.city)?;
        writeln!(f, "Temperature: {}°F", self.temperature_fahrenheit)?;
        write!(f, "Condition: {}", self.description)
    }
}
