use std::fmt;

use thiserror::Error;

/// Remote API a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Geocoding,
    Forecast,
}

impl Api {
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::Geocoding => "Geocoding",
            Api::Forecast => "Weather",
        }
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoder returned no match for the city.
    #[error("City not found. Please check the spelling.")]
    NotFound,

    /// A remote call answered with a non-success status.
    #[error("{api} API error: {status}")]
    Service { api: Api, status: u16 },

    /// A success response lacked a field the lookup needs.
    #[error("{api} API response is missing `{field}`")]
    IncompleteResponse { api: Api, field: &'static str },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    /// HTTP status for `Service` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Which API produced the error, when known.
    pub fn api(&self) -> Option<Api> {
        match self {
            WeatherError::Service { api, .. } | WeatherError::IncompleteResponse { api, .. } => {
                Some(*api)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound)
    }

    /// True when the remote service misbehaved, as opposed to the network or the caller.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            WeatherError::Service { .. } | WeatherError::IncompleteResponse { .. }
        )
    }
}
