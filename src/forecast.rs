use serde::Serialize;
use crate::errors::CoreError;

/// One 3-hour forecast bucket as delivered by the feed. Temperatures are
/// in Kelvin, wind speed in m/s. Instances are transient, they live for
/// one fetch cycle and are discarded after aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastEntry {
    pub timestamp: i64,
    pub timestamp_text: String,
    pub condition: String,
    pub temp_kelvin: f64,
    pub feels_like_kelvin: f64,
    pub humidity_percent: u8,
    pub wind_speed_ms: f64,
}

impl ForecastEntry {
    /// Returns the date portion of the entry's formatted timestamp, e.g.
    /// "2024-01-01" out of "2024-01-01 09:00:00".
    ///
    /// An entry whose timestamp text carries no date/time separator is
    /// malformed and unusable for date filtering.
    pub fn date_portion(&self) -> Result<&str, CoreError> {
        self.timestamp_text
            .split_once(' ')
            .map(|(date, _)| date)
            .ok_or_else(|| {
                CoreError::MalformedEntry(format!(
                    "unusable timestamp text '{}'", self.timestamp_text
                ))
            })
    }
}

/// Selects the entries belonging to one calendar date, preserving the
/// input order. The feed is assumed pre-sorted ascending by time and is
/// not re-sorted here.
///
/// An empty window is a valid result, it means the requested date is not
/// covered by the feed. A malformed entry aborts the whole window rather
/// than being skipped, so a partial window can never masquerade as a
/// complete day.
///
/// # Arguments
///
/// * 'entries' - the full multi-day forecast sequence
/// * 'date' - target date in ISO format (YYYY-MM-DD)
pub fn day_window(entries: &[ForecastEntry], date: &str) -> Result<Vec<ForecastEntry>, CoreError> {
    let mut window: Vec<ForecastEntry> = Vec::new();

    for entry in entries {
        if entry.date_portion()? == date {
            window.push(entry.clone());
        }
    }

    Ok(window)
}
