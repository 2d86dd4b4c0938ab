use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Local};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::aggregation::{humidity_wind_stats, temperature_stats, HumidityWindStats, TemperatureStats};
use crate::alerts::{evaluate_alerts, AlertEvent, AlertThresholds, Readings};
use crate::forecast::{day_window, ForecastEntry};
use crate::manager_db::DB;
use crate::summary::{build_summary, WeatherSummary};
use crate::units::TemperatureUnit;
use crate::AppState;

#[derive(Deserialize, Debug)]
struct WeatherParams {
    city: String,
    date: String,
    #[serde(default)]
    unit: TemperatureUnit,
    temp_threshold: Option<String>,
    humidity_threshold: Option<String>,
    wind_threshold: Option<String>,
}

#[derive(Deserialize, Debug)]
struct HumidityWindParams {
    city: String,
    date: String,
    humidity_threshold: Option<String>,
    wind_threshold: Option<String>,
}

#[derive(Serialize)]
struct WeatherResponse {
    city: String,
    date: String,
    unit: &'static str,
    stats: TemperatureStats,
    alerts: Vec<AlertEvent>,
    persisted: bool,
}

#[derive(Serialize)]
struct HumidityWindResponse {
    city: String,
    date: String,
    stats: HumidityWindStats,
    alerts: Vec<AlertEvent>,
}

/// Fetches the forecast and narrows it to the requested date. Failures
/// are already mapped to the response to send back.
async fn fetch_window(data: &AppState, city: &str, date: &str) -> Result<Vec<ForecastEntry>, HttpResponse> {
    if !data.cities.iter().any(|c| c == city) {
        return Err(HttpResponse::BadRequest().json(json!({"error": format!("unknown city: {}", city)})));
    }

    let entries = match data.owm.fetch_forecast(city).await {
        Ok(entries) => entries,
        Err(e) => {
            error!("failed to fetch forecast: {}", e);
            return Err(HttpResponse::BadGateway().json(json!({"error": "failed to fetch weather data"})));
        }
    };

    match day_window(&entries, date) {
        Ok(window) => Ok(window),
        Err(e) => {
            error!("forecast feed rejected: {}", e);
            Err(HttpResponse::BadGateway().json(json!({"error": "forecast feed contained a malformed entry"})))
        }
    }
}

/// Runs the summary insert on the blocking pool so the SQLite write
/// never stalls an async worker. A failed write is logged and reported
/// through the returned flag only.
async fn persist_summary(db: DB, summary: WeatherSummary) -> bool {
    match tokio::task::spawn_blocking(move || db.insert_summary(&summary)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!("failed to insert summary: {}", e);
            false
        }
        Err(e) => {
            error!("summary insert task failed: {}", e);
            false
        }
    }
}

/// One full weather cycle: fetch, filter to the date, aggregate
/// temperatures, persist the summary and evaluate temperature alerts.
/// A failed insert is logged and flagged in the response but does not
/// withhold the stats.
#[get("/weather")]
pub async fn weather(params: web::Query<WeatherParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let window = match fetch_window(&data, &params.city, &params.date).await {
        Ok(window) => window,
        Err(response) => return response,
    };
    if window.is_empty() {
        return HttpResponse::NotFound().json(json!({"error": "no forecast data available for the selected date"}));
    }

    let stats = temperature_stats(&window, params.unit);

    let update_time = DateTime::from_timestamp(stats.updated_at, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let summary = build_summary(&params.city, &params.date, &stats, &update_time);
    let persisted = persist_summary(data.db.clone(), summary).await;

    // humidity and wind thresholds are accepted here too, but with no
    // humidity or wind readings on this route those channels stay inactive
    let thresholds = AlertThresholds {
        temperature: params.temp_threshold.clone(),
        humidity: params.humidity_threshold.clone(),
        wind_speed: params.wind_threshold.clone(),
    };
    let readings = Readings {
        temperature: Some(stats.current),
        feels_like: Some(stats.feels_like),
        ..Default::default()
    };
    let alerts = evaluate_alerts(&thresholds, &readings);

    HttpResponse::Ok().json(WeatherResponse {
        city: params.city.clone(),
        date: params.date.clone(),
        unit: params.unit.symbol(),
        stats,
        alerts,
        persisted,
    })
}

/// Humidity and wind cycle for one date: fetch, filter, aggregate and
/// evaluate the humidity and wind speed alerts. Nothing is persisted.
#[get("/humidity_wind")]
pub async fn humidity_wind(params: web::Query<HumidityWindParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let window = match fetch_window(&data, &params.city, &params.date).await {
        Ok(window) => window,
        Err(response) => return response,
    };

    let stats = match humidity_wind_stats(&window) {
        Ok(stats) => stats,
        Err(e) => {
            info!("{}", e);
            return HttpResponse::NotFound().json(json!({"error": "no humidity or wind data available for the selected date"}));
        }
    };

    let thresholds = AlertThresholds {
        humidity: params.humidity_threshold.clone(),
        wind_speed: params.wind_threshold.clone(),
        ..Default::default()
    };
    let readings = Readings {
        humidity: Some(stats.current),
        wind_speed: Some(stats.current_wind),
        ..Default::default()
    };
    let alerts = evaluate_alerts(&thresholds, &readings);

    HttpResponse::Ok().json(HumidityWindResponse {
        city: params.city.clone(),
        date: params.date.clone(),
        stats,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::tempdir;

    fn summary() -> WeatherSummary {
        let stats = TemperatureStats {
            current: 26.85,
            feels_like: 25.85,
            min: 26.85,
            max: 31.85,
            avg: 29.35,
            main_condition: "Clear".to_string(),
            updated_at: 1704099600,
        };
        build_summary("Delhi", "2024-01-01", &stats, "2024-01-01 09:00:00")
    }

    #[tokio::test]
    async fn persist_summary_writes_a_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.db");
        let db = DB::new(path.to_str().unwrap()).unwrap();

        assert!(persist_summary(db, summary()).await);

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM weather_summary", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn persist_summary_flags_a_failed_write() {
        // the database directory disappears before the write
        let db = {
            let dir = tempdir().unwrap();
            DB::new(dir.path().join("weather.db").to_str().unwrap()).unwrap()
        };

        assert!(!persist_summary(db, summary()).await);
    }
}
