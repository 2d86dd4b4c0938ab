use serde::Deserialize;

#[derive(Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct WindData {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct WeatherItem {
    pub main: String,
}

#[derive(Deserialize)]
pub struct FullEntry {
    pub dt: i64,
    pub dt_txt: String,
    pub main: MainData,
    pub wind: WindData,
    pub weather: Vec<WeatherItem>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullEntry>,
}
