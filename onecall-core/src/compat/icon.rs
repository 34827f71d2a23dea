use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::WeatherIcon;

/// Icon values understood by DarkSky consumers.
///
/// There is no 1:1 match with OpenWeatherMap: DarkSky has no day/night split for
/// most conditions, and `sleet` / `wind` have no OpenWeatherMap counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DarkSkyIcon {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Thunderstorm,
}

impl DarkSkyIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkSkyIcon::ClearDay => "clear-day",
            DarkSkyIcon::ClearNight => "clear-night",
            DarkSkyIcon::Rain => "rain",
            DarkSkyIcon::Snow => "snow",
            DarkSkyIcon::Sleet => "sleet",
            DarkSkyIcon::Wind => "wind",
            DarkSkyIcon::Fog => "fog",
            DarkSkyIcon::Cloudy => "cloudy",
            DarkSkyIcon::PartlyCloudyDay => "partly-cloudy-day",
            DarkSkyIcon::PartlyCloudyNight => "partly-cloudy-night",
            DarkSkyIcon::Thunderstorm => "thunderstorm",
        }
    }
}

impl fmt::Display for DarkSkyIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate an OpenWeatherMap icon into its DarkSky equivalent.
///
/// Returns `None` for icons DarkSky has no equivalent for; callers that need the
/// raw value keep the original [`WeatherIcon`] next to it.
pub fn translate_icon(icon: &WeatherIcon) -> Option<DarkSkyIcon> {
    match icon {
        WeatherIcon::ClearSky => Some(DarkSkyIcon::ClearDay),
        WeatherIcon::ClearSkyNight => Some(DarkSkyIcon::ClearNight),
        WeatherIcon::FewClouds | WeatherIcon::FewCloudsNight => Some(DarkSkyIcon::Cloudy),
        WeatherIcon::ScatteredClouds | WeatherIcon::BrokenClouds => {
            Some(DarkSkyIcon::PartlyCloudyDay)
        }
        WeatherIcon::ScatteredCloudsNight | WeatherIcon::BrokenCloudsNight => {
            Some(DarkSkyIcon::PartlyCloudyNight)
        }
        WeatherIcon::ShowerRain
        | WeatherIcon::ShowerRainNight
        | WeatherIcon::Rain
        | WeatherIcon::RainNight => Some(DarkSkyIcon::Rain),
        WeatherIcon::Snow | WeatherIcon::SnowNight => Some(DarkSkyIcon::Snow),
        WeatherIcon::Thunderstorm | WeatherIcon::ThunderstormNight => {
            Some(DarkSkyIcon::Thunderstorm)
        }
        WeatherIcon::Mist | WeatherIcon::MistNight => Some(DarkSkyIcon::Fog),
        WeatherIcon::Other(_) => None,
    }
}

impl WeatherIcon {
    pub fn to_dark_sky(&self) -> Option<DarkSkyIcon> {
        translate_icon(self)
    }
}
