use serde::Serialize;
use crate::aggregation::TemperatureStats;

/// The per-city, per-date summary row handed to the persistence sink.
/// Write-only: rows are appended with an auto-assigned id and never read
/// back, so repeated fetches for the same city and date produce
/// duplicate rows.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub city: String,
    pub date: String,
    pub main_weather: String,
    pub current_temp: f64,
    pub feels_like: f64,
    pub avg_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub update_time: String,
}

/// Composes a summary row from the temperature stats of one cycle.
/// Pure construction, no I/O.
///
/// # Arguments
///
/// * 'city' - the city the forecast was fetched for
/// * 'date' - the selected date in ISO format (YYYY-MM-DD)
/// * 'stats' - temperature stats derived from that date's window
/// * 'update_time' - stats.updated_at formatted by the caller
pub fn build_summary(city: &str, date: &str, stats: &TemperatureStats, update_time: &str) -> WeatherSummary {
    WeatherSummary {
        city: city.to_string(),
        date: date.to_string(),
        main_weather: stats.main_condition.clone(),
        current_temp: stats.current,
        feels_like: stats.feels_like,
        avg_temp: stats.avg,
        min_temp: stats.min,
        max_temp: stats.max,
        update_time: update_time.to_string(),
    }
}
