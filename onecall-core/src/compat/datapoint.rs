use serde::{Deserialize, Serialize};

use super::{
    icon::DarkSkyIcon,
    precipitation::{PrecipitationType, resolve_precipitation},
};
use crate::model::{DataPointBase, WeatherIcon};

/// The properties every DarkSky data point carries, whatever its granularity.
///
/// See <https://darksky.net/dev/docs#data-point-object>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyDataPoint {
    /// Unix time, UTC. Mapped from `dt`.
    pub time: i64,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<DarkSkyIcon>,
    pub original_icon: WeatherIcon,
    pub pressure: f64,
    pub humidity: f64,
    /// Mapped from `dew_point`.
    pub dew_point: f64,
    /// Mapped from `clouds`.
    pub cloud_cover: f64,
    pub wind_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    /// Mapped from `wind_deg`.
    pub wind_bearing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precip_type: Option<PrecipitationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precip_intensity: Option<f64>,
}

/// A One Call data point that has a DarkSky counterpart.
pub trait ToDarkSky {
    type Output;

    fn base(&self) -> &DataPointBase;

    fn to_dark_sky(&self) -> Self::Output;
}

/// Map the fields shared by all granularities.
///
/// The summary and icons come from the first weather condition. The API always
/// sends at least one; a point without any maps to an empty summary and icon.
pub fn map_data_point(point: &DataPointBase) -> DarkSkyDataPoint {
    let (summary, original_icon) = match point.primary_weather() {
        Some(weather) => (weather.description.clone(), weather.icon.clone()),
        None => {
            tracing::warn!(dt = point.dt, "data point has no weather conditions");
            (String::new(), WeatherIcon::Other(String::new()))
        }
    };

    let precipitation = resolve_precipitation(point.rain.as_ref(), point.snow.as_ref());

    DarkSkyDataPoint {
        time: point.dt,
        summary,
        icon: original_icon.to_dark_sky(),
        original_icon,
        pressure: point.pressure,
        humidity: point.humidity,
        dew_point: point.dew_point,
        cloud_cover: point.clouds,
        wind_speed: point.wind_speed,
        wind_gust: point.wind_gust,
        wind_bearing: point.wind_deg,
        precip_type: precipitation.precip_type,
        precip_intensity: precipitation.intensity,
    }
}
