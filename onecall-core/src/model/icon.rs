use serde::{Deserialize, Serialize};
use std::fmt;

/// OpenWeatherMap condition icon id, e.g. `"10d"`.
///
/// See <https://openweathermap.org/weather-conditions#Weather-Condition-Codes-2>.
/// Codes outside the documented set are kept verbatim in [`WeatherIcon::Other`],
/// so deserializing never fails on a new icon and the raw value survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherIcon {
    ClearSky,
    ClearSkyNight,
    FewClouds,
    FewCloudsNight,
    ScatteredClouds,
    ScatteredCloudsNight,
    BrokenClouds,
    BrokenCloudsNight,
    ShowerRain,
    ShowerRainNight,
    Rain,
    RainNight,
    Thunderstorm,
    ThunderstormNight,
    Snow,
    SnowNight,
    Mist,
    MistNight,
    Other(String),
}

/// Every icon id documented by OpenWeatherMap.
pub static KNOWN_ICONS: [WeatherIcon; 18] = [
    WeatherIcon::ClearSky,
    WeatherIcon::ClearSkyNight,
    WeatherIcon::FewClouds,
    WeatherIcon::FewCloudsNight,
    WeatherIcon::ScatteredClouds,
    WeatherIcon::ScatteredCloudsNight,
    WeatherIcon::BrokenClouds,
    WeatherIcon::BrokenCloudsNight,
    WeatherIcon::ShowerRain,
    WeatherIcon::ShowerRainNight,
    WeatherIcon::Rain,
    WeatherIcon::RainNight,
    WeatherIcon::Thunderstorm,
    WeatherIcon::ThunderstormNight,
    WeatherIcon::Snow,
    WeatherIcon::SnowNight,
    WeatherIcon::Mist,
    WeatherIcon::MistNight,
];

impl WeatherIcon {
    pub fn code(&self) -> &str {
        match self {
            WeatherIcon::ClearSky => "01d",
            WeatherIcon::ClearSkyNight => "01n",
            WeatherIcon::FewClouds => "02d",
            WeatherIcon::FewCloudsNight => "02n",
            WeatherIcon::ScatteredClouds => "03d",
            WeatherIcon::ScatteredCloudsNight => "03n",
            WeatherIcon::BrokenClouds => "04d",
            WeatherIcon::BrokenCloudsNight => "04n",
            WeatherIcon::ShowerRain => "09d",
            WeatherIcon::ShowerRainNight => "09n",
            WeatherIcon::Rain => "10d",
            WeatherIcon::RainNight => "10n",
            WeatherIcon::Thunderstorm => "11d",
            WeatherIcon::ThunderstormNight => "11n",
            WeatherIcon::Snow => "13d",
            WeatherIcon::SnowNight => "13n",
            WeatherIcon::Mist => "50d",
            WeatherIcon::MistNight => "50n",
            WeatherIcon::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WeatherIcon::Other(_))
    }
}

impl From<&str> for WeatherIcon {
    fn from(code: &str) -> Self {
        KNOWN_ICONS
            .iter()
            .find(|icon| icon.code() == code)
            .cloned()
            .unwrap_or_else(|| WeatherIcon::Other(code.to_string()))
    }
}

impl From<String> for WeatherIcon {
    fn from(code: String) -> Self {
        match WeatherIcon::from(code.as_str()) {
            WeatherIcon::Other(_) => WeatherIcon::Other(code),
            known => known,
        }
    }
}

impl From<WeatherIcon> for String {
    fn from(icon: WeatherIcon) -> Self {
        match icon {
            WeatherIcon::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
