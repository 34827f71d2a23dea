use serde::{Deserialize, Serialize};

use super::datapoint::{DarkSkyDataPoint, ToDarkSky, map_data_point};
use crate::model::{CurrentDataPoint, DataPointBase};

/// DarkSky `currently` data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyCurrentDataPoint {
    #[serde(flatten)]
    pub base: DarkSkyDataPoint,
    pub sunrise_time: i64,
    pub sunset_time: i64,
    pub temperature: f64,
    /// Mapped from `feels_like`.
    pub apparent_temperature: f64,
    /// Mapped from `uvi`.
    pub uv_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl ToDarkSky for CurrentDataPoint {
    type Output = DarkSkyCurrentDataPoint;

    fn base(&self) -> &DataPointBase {
        &self.base
    }

    fn to_dark_sky(&self) -> DarkSkyCurrentDataPoint {
        DarkSkyCurrentDataPoint {
            base: map_data_point(&self.base),
            sunrise_time: self.sunrise,
            sunset_time: self.sunset,
            temperature: self.temp,
            apparent_temperature: self.feels_like,
            uv_index: self.uvi,
            visibility: self.visibility,
        }
    }
}

pub fn map_current(current: Option<&CurrentDataPoint>) -> Option<DarkSkyCurrentDataPoint> {
    current.map(ToDarkSky::to_dark_sky)
}
