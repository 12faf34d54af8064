//! WMO weather interpretation codes as reported by Open-Meteo.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Returned for any code outside the table.
pub const UNKNOWN_WEATHER: &str = "Unknown weather";

/// Codes with a dedicated description.
pub const KNOWN_CODES: [i32; 19] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 80, 81, 82, 95,
];

/// Human-readable label for a weather code. Never fails.
pub fn describe_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        80 => "Rain showers",
        81 => "Heavy rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        _ => UNKNOWN_WEATHER,
    }
}
