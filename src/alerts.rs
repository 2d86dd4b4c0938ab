use serde::Serialize;

/// Raw, unparsed threshold input per alert channel. `None` or an empty
/// string disables the channel; parsing happens lazily at evaluation.
#[derive(Debug, Clone, Default)]
pub struct AlertThresholds {
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
}

/// The current readings alerts are checked against. Temperature values
/// are in the display unit of the running cycle.
#[derive(Debug, Clone, Default)]
pub struct Readings {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    InvalidThreshold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertEvent {
    pub kind: AlertKind,
    pub message: String,
}

impl AlertEvent {
    fn new(kind: AlertKind, message: String) -> Self {
        AlertEvent { kind, message }
    }
}

/// Returns the threshold string if the channel is active, i.e. a
/// non-empty threshold was entered and a reading is available.
fn active<'a, T>(threshold: &'a Option<String>, reading: &Option<T>) -> Option<&'a str> {
    match (threshold, reading) {
        (Some(t), Some(_)) if !t.is_empty() => Some(t.as_str()),
        _ => None,
    }
}

/// Evaluates the readings against the user thresholds and returns the
/// triggered alert events.
///
/// Channels are independent: temperature (with feels-like reusing the
/// same threshold), humidity, wind speed, emitted in that order. A
/// threshold that fails to parse produces a single InvalidThreshold
/// event in place of that channel's numeric events and never aborts the
/// other channels. This function has no side effects, the caller decides
/// when and how to surface the events.
///
/// # Arguments
///
/// * 'thresholds' - raw user threshold input
/// * 'readings' - current readings of the running cycle
pub fn evaluate_alerts(thresholds: &AlertThresholds, readings: &Readings) -> Vec<AlertEvent> {
    let mut events: Vec<AlertEvent> = Vec::new();

    if let Some(raw) = active(&thresholds.temperature, &readings.temperature) {
        match raw.parse::<f64>() {
            Ok(limit) => {
                if let Some(temp) = readings.temperature {
                    if temp > limit {
                        events.push(AlertEvent::new(
                            AlertKind::Temperature,
                            format!("Current temperature {:.2} exceeds the threshold of {}!", temp, raw),
                        ));
                    }
                }
                if let Some(feels_like) = readings.feels_like {
                    if feels_like > limit {
                        events.push(AlertEvent::new(
                            AlertKind::FeelsLike,
                            format!("Feels like temperature {:.2} exceeds the threshold of {}!", feels_like, raw),
                        ));
                    }
                }
            }
            Err(_) => events.push(AlertEvent::new(
                AlertKind::InvalidThreshold,
                "Invalid temperature threshold entered!".to_string(),
            )),
        }
    }

    if let Some(raw) = active(&thresholds.humidity, &readings.humidity) {
        match raw.parse::<f64>() {
            Ok(limit) => {
                if let Some(humidity) = readings.humidity {
                    if humidity as f64 > limit {
                        events.push(AlertEvent::new(
                            AlertKind::Humidity,
                            format!("Humidity {}% exceeds the threshold of {}%!", humidity, raw),
                        ));
                    }
                }
            }
            Err(_) => events.push(AlertEvent::new(
                AlertKind::InvalidThreshold,
                "Invalid humidity threshold entered!".to_string(),
            )),
        }
    }

    if let Some(raw) = active(&thresholds.wind_speed, &readings.wind_speed) {
        match raw.parse::<f64>() {
            Ok(limit) => {
                if let Some(wind_speed) = readings.wind_speed {
                    if wind_speed > limit {
                        events.push(AlertEvent::new(
                            AlertKind::WindSpeed,
                            format!("Wind speed {} m/s exceeds the threshold of {} m/s!", wind_speed, raw),
                        ));
                    }
                }
            }
            Err(_) => events.push(AlertEvent::new(
                AlertKind::InvalidThreshold,
                "Invalid wind speed threshold entered!".to_string(),
            )),
        }
    }

    events
}
