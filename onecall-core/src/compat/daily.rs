use serde::{Deserialize, Serialize};

use super::{
    block::{DarkSkyDataBlock, map_block},
    datapoint::{DarkSkyDataPoint, ToDarkSky, map_data_point},
};
use crate::model::{DailyDataPoint, DataPointBase, DayPartTemperature};

/// DarkSky `daily` data point.
///
/// One Call reports temperatures per part of the day; DarkSky wants highs, lows
/// and extremes. `temp` carries its own min/max, `feels_like` does not, so the
/// apparent extremes are derived from the four day parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyDailyDataPoint {
    #[serde(flatten)]
    pub base: DarkSkyDataPoint,
    pub sunrise_time: i64,
    pub sunset_time: i64,
    /// `temp.day`
    pub temperature_high: f64,
    /// `temp.night`
    pub temperature_low: f64,
    pub temperature_max: f64,
    pub temperature_min: f64,
    /// `feels_like.day`
    pub apparent_temperature_high: f64,
    /// `feels_like.night`
    pub apparent_temperature_low: f64,
    pub apparent_temperature_max: f64,
    pub apparent_temperature_min: f64,
    pub uv_index: f64,
    pub precip_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

pub type DarkSkyDailyDataBlock = DarkSkyDataBlock<DarkSkyDailyDataPoint>;

/// Highest and lowest of the morning, day, evening and night values.
fn day_part_extremes(parts: &DayPartTemperature) -> (f64, f64) {
    parts
        .values()
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(max, min), &value| {
            (max.max(value), min.min(value))
        })
}

impl ToDarkSky for DailyDataPoint {
    type Output = DarkSkyDailyDataPoint;

    fn base(&self) -> &DataPointBase {
        &self.base
    }

    fn to_dark_sky(&self) -> DarkSkyDailyDataPoint {
        let (apparent_temperature_max, apparent_temperature_min) =
            day_part_extremes(&self.feels_like);

        DarkSkyDailyDataPoint {
            base: map_data_point(&self.base),
            sunrise_time: self.sunrise,
            sunset_time: self.sunset,
            temperature_high: self.temp.parts.day,
            temperature_low: self.temp.parts.night,
            temperature_max: self.temp.max,
            temperature_min: self.temp.min,
            apparent_temperature_high: self.feels_like.day,
            apparent_temperature_low: self.feels_like.night,
            apparent_temperature_max,
            apparent_temperature_min,
            uv_index: self.uvi,
            precip_probability: self.pop,
            visibility: self.visibility,
        }
    }
}

pub fn map_daily(points: Option<&[DailyDataPoint]>) -> Option<DarkSkyDailyDataBlock> {
    map_block(points)
}
