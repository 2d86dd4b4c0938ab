pub mod errors;
mod models;

use std::time::Duration;
use reqwest::Client;
use crate::forecast::ForecastEntry;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::FullForecast;

/// Struct for managing weather forecasts produced by OpenWeatherMap
pub struct OWM {
    client: Client,
    api_key: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching and processing weather
    /// forecasts from OpenWeatherMap
    ///
    /// # Arguments
    ///
    /// * 'api_key' - OpenWeatherMap API key
    pub fn new(api_key: &str) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the 5 day / 3 hour forecast for the given city.
    ///
    /// The raw document covers several days; no date filtering happens
    /// here, the full entry sequence is returned in feed order for the
    /// caller to narrow down. Entries keep their Kelvin temperatures.
    ///
    /// # Arguments
    ///
    /// * 'city' - the city to get a forecast for
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, OWMError> {
        let owm_domain = "https://api.openweathermap.org";
        let url = format!("{}/data/2.5/forecast?q={}&appid={}",
                          owm_domain, city, self.api_key);

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::OWM(format!("Error while fetching forecast from OpenWeatherMap: {}", status)));
        }

        let json = req.text().await?;
        parse_forecast(&json)
    }
}

/// Decodes a raw forecast document into the entry sequence the core
/// operates on. An entry without any weather condition is malformed and
/// rejects the whole document.
///
/// # Arguments
///
/// * 'json' - raw forecast document as returned by the API
fn parse_forecast(json: &str) -> Result<Vec<ForecastEntry>, OWMError> {
    let full: FullForecast = serde_json::from_str(json)?;

    let mut entries: Vec<ForecastEntry> = Vec::new();
    for e in full.list {
        let condition = e.weather
            .first()
            .map(|w| w.main.clone())
            .ok_or_else(|| OWMError::Document(format!("forecast entry at {} has no weather condition", e.dt_txt)))?;

        entries.push(ForecastEntry {
            timestamp: e.dt,
            timestamp_text: e.dt_txt,
            condition,
            temp_kelvin: e.main.temp,
            feels_like_kelvin: e.main.feels_like,
            humidity_percent: e.main.humidity,
            wind_speed_ms: e.wind.speed,
        });
    }

    Ok(entries)
}
