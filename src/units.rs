use serde::Deserialize;

/// Display unit for temperatures. The forecast feed always delivers Kelvin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Celsius
    }
}

impl TemperatureUnit {
    /// Converts a temperature from the feed's native Kelvin to this unit.
    ///
    /// # Arguments
    ///
    /// * 'kelvin' - temperature in Kelvin
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => to_celsius(kelvin),
            TemperatureUnit::Kelvin => to_kelvin(kelvin),
        }
    }

    /// Degree symbol suffix used when formatting values in this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Converts Kelvin to Celsius.
///
/// # Arguments
///
/// * 'kelvin' - temperature in Kelvin
pub fn to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Identity conversion, the feed is already in Kelvin.
///
/// # Arguments
///
/// * 'kelvin' - temperature in Kelvin
pub fn to_kelvin(kelvin: f64) -> f64 {
    kelvin
}
