use serde::Serialize;
use crate::errors::CoreError;
use crate::forecast::ForecastEntry;
use crate::units::TemperatureUnit;

/// Temperature summary over one day's window, in the selected unit.
///
/// "Current" follows the forecast-bucket convention: it is the first
/// entry of the selected day, not a live reading. `avg` is the midpoint
/// of min and max, which is how the summary has always been computed,
/// and deliberately not the arithmetic mean of the samples.
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureStats {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub main_condition: String,
    pub updated_at: i64,
}

/// Humidity and wind summary over one day's window. Here `avg` and
/// `avg_wind` ARE arithmetic means over all entries, unlike the
/// temperature midpoint above.
#[derive(Debug, Clone, Serialize)]
pub struct HumidityWindStats {
    pub current: u8,
    pub min: u8,
    pub max: u8,
    pub avg: f64,
    pub current_wind: f64,
    pub min_wind: f64,
    pub max_wind: f64,
    pub avg_wind: f64,
}

/// Derives the temperature summary from a day window.
///
/// On an empty window min, max and avg default to 0 rather than failing;
/// current, feels_like and main_condition are then meaningless, so
/// callers should check for data first (see `humidity_wind_stats` which
/// refuses instead).
///
/// # Arguments
///
/// * 'window' - forecast entries of one calendar date, in feed order
/// * 'unit' - the display unit shared across the whole cycle
pub fn temperature_stats(window: &[ForecastEntry], unit: TemperatureUnit) -> TemperatureStats {
    let temperatures: Vec<f64> = window
        .iter()
        .map(|e| unit.from_kelvin(e.temp_kelvin))
        .collect();

    let min = temperatures.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = temperatures.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if temperatures.is_empty() { (0.0, 0.0) } else { (min, max) };
    let avg = (min + max) / 2.0;

    match window.first() {
        Some(first) => TemperatureStats {
            current: unit.from_kelvin(first.temp_kelvin),
            feels_like: unit.from_kelvin(first.feels_like_kelvin),
            min,
            max,
            avg,
            main_condition: first.condition.clone(),
            updated_at: first.timestamp,
        },
        None => TemperatureStats {
            current: 0.0,
            feels_like: 0.0,
            min,
            max,
            avg,
            main_condition: String::new(),
            updated_at: 0,
        },
    }
}

/// Derives the humidity and wind summary from a day window.
///
/// # Arguments
///
/// * 'window' - forecast entries of one calendar date, in feed order
pub fn humidity_wind_stats(window: &[ForecastEntry]) -> Result<HumidityWindStats, CoreError> {
    let first = window.first().ok_or_else(|| {
        CoreError::NoDataForDate("no humidity or wind data available for the selected date".to_string())
    })?;

    let humidities: Vec<u8> = window.iter().map(|e| e.humidity_percent).collect();
    let winds: Vec<f64> = window.iter().map(|e| e.wind_speed_ms).collect();
    let count = window.len() as f64;

    Ok(HumidityWindStats {
        current: first.humidity_percent,
        min: humidities.iter().cloned().min().unwrap_or(0),
        max: humidities.iter().cloned().max().unwrap_or(0),
        avg: humidities.iter().map(|h| *h as f64).sum::<f64>() / count,
        current_wind: first.wind_speed_ms,
        min_wind: winds.iter().cloned().fold(f64::INFINITY, f64::min),
        max_wind: winds.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        avg_wind: winds.iter().sum::<f64>() / count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::tests::entry;

    fn january_window() -> Vec<ForecastEntry> {
        vec![
            entry(1704099600, "2024-01-01 09:00:00", "Clear", 300.0, 299.0, 50, 3.2),
            entry(1704110400, "2024-01-01 12:00:00", "Clouds", 305.0, 304.0, 40, 2.1),
        ]
    }

    #[test]
    fn temperature_stats_in_celsius() {
        let stats = temperature_stats(&january_window(), TemperatureUnit::Celsius);

        assert!((stats.current - 26.85).abs() < 1e-9);
        assert!((stats.feels_like - 25.85).abs() < 1e-9);
        assert!((stats.min - 26.85).abs() < 1e-9);
        assert!((stats.max - 31.85).abs() < 1e-9);
        assert!((stats.avg - 29.35).abs() < 1e-9);
        assert_eq!(stats.main_condition, "Clear");
        assert_eq!(stats.updated_at, 1704099600);
    }

    #[test]
    fn temperature_stats_in_kelvin() {
        let stats = temperature_stats(&january_window(), TemperatureUnit::Kelvin);

        assert_eq!(stats.current, 300.0);
        assert_eq!(stats.feels_like, 299.0);
        assert_eq!(stats.min, 300.0);
        assert_eq!(stats.max, 305.0);
        assert_eq!(stats.avg, 302.5);
    }

    #[test]
    fn avg_is_midpoint_not_sample_mean() {
        // Three samples skewed low: mean is 301.0 but the midpoint is 302.0.
        let window = vec![
            entry(1, "2024-01-01 00:00:00", "Clear", 299.0, 299.0, 50, 1.0),
            entry(2, "2024-01-01 03:00:00", "Clear", 299.0, 299.0, 50, 1.0),
            entry(3, "2024-01-01 06:00:00", "Clear", 305.0, 305.0, 50, 1.0),
        ];
        let stats = temperature_stats(&window, TemperatureUnit::Kelvin);

        assert_eq!(stats.avg, 302.0);
        assert_ne!(stats.avg, 301.0);
    }

    #[test]
    fn empty_window_defaults_to_zero() {
        let stats = temperature_stats(&[], TemperatureUnit::Celsius);

        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.avg, 0.0);
    }

    #[test]
    fn humidity_wind_stats_over_full_window() {
        let stats = humidity_wind_stats(&january_window()).unwrap();

        assert_eq!(stats.current, 50);
        assert_eq!(stats.min, 40);
        assert_eq!(stats.max, 50);
        assert_eq!(stats.avg, 45.0);
        assert!((stats.current_wind - 3.2).abs() < 1e-9);
        assert!((stats.min_wind - 2.1).abs() < 1e-9);
        assert!((stats.max_wind - 3.2).abs() < 1e-9);
        assert!((stats.avg_wind - 2.65).abs() < 1e-9);
    }

    #[test]
    fn humidity_wind_avg_is_arithmetic_mean() {
        // Same skew as the midpoint test above: the mean must NOT be the midpoint here.
        let window = vec![
            entry(1, "2024-01-01 00:00:00", "Clear", 299.0, 299.0, 30, 2.0),
            entry(2, "2024-01-01 03:00:00", "Clear", 299.0, 299.0, 30, 2.0),
            entry(3, "2024-01-01 06:00:00", "Clear", 305.0, 305.0, 90, 8.0),
        ];
        let stats = humidity_wind_stats(&window).unwrap();

        assert_eq!(stats.avg, 50.0);
        assert_eq!(stats.avg_wind, 4.0);
    }

    #[test]
    fn humidity_wind_refuses_empty_window() {
        match humidity_wind_stats(&[]) {
            Err(CoreError::NoDataForDate(_)) => {}
            other => panic!("expected NoDataForDate, got {:?}", other),
        }
    }

    #[test]
    fn full_cycle_filter_aggregate_alert() {
        use crate::alerts::{evaluate_alerts, AlertKind, AlertThresholds, Readings};
        use crate::forecast::day_window;

        let feed = vec![
            entry(1704099600, "2024-01-01 09:00:00", "Clear", 300.0, 299.0, 50, 3.2),
            entry(1704110400, "2024-01-01 12:00:00", "Clouds", 305.0, 304.0, 40, 2.1),
            entry(1704186000, "2024-01-02 09:00:00", "Rain", 298.0, 297.0, 80, 6.0),
        ];

        let window = day_window(&feed, "2024-01-01").unwrap();
        let stats = temperature_stats(&window, TemperatureUnit::Celsius);

        assert!((stats.current - 26.85).abs() < 1e-9);
        assert!((stats.feels_like - 25.85).abs() < 1e-9);
        assert!((stats.min - 26.85).abs() < 1e-9);
        assert!((stats.max - 31.85).abs() < 1e-9);
        assert!((stats.avg - 29.35).abs() < 1e-9);
        assert_eq!(stats.main_condition, "Clear");

        let thresholds = AlertThresholds {
            temperature: Some("25".to_string()),
            ..Default::default()
        };
        let readings = Readings {
            temperature: Some(stats.current),
            feels_like: Some(stats.feels_like),
            ..Default::default()
        };
        let alerts = evaluate_alerts(&thresholds, &readings);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::Temperature);
        assert_eq!(alerts[0].message, "Current temperature 26.85 exceeds the threshold of 25!");
        assert_eq!(alerts[1].kind, AlertKind::FeelsLike);
        assert_eq!(alerts[1].message, "Feels like temperature 25.85 exceeds the threshold of 25!");
    }
}
