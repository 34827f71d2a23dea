use serde::{Deserialize, Serialize};

use super::{
    block::{DarkSkyDataBlock, map_block},
    datapoint::{DarkSkyDataPoint, ToDarkSky, map_data_point},
};
use crate::model::{DataPointBase, HourlyDataPoint};

/// DarkSky `hourly` data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyHourlyDataPoint {
    #[serde(flatten)]
    pub base: DarkSkyDataPoint,
    pub temperature: f64,
    pub apparent_temperature: f64,
    /// Mapped from `pop`.
    pub precip_probability: f64,
    pub visibility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,
}

pub type DarkSkyHourlyDataBlock = DarkSkyDataBlock<DarkSkyHourlyDataPoint>;

impl ToDarkSky for HourlyDataPoint {
    type Output = DarkSkyHourlyDataPoint;

    fn base(&self) -> &DataPointBase {
        &self.base
    }

    fn to_dark_sky(&self) -> DarkSkyHourlyDataPoint {
        DarkSkyHourlyDataPoint {
            base: map_data_point(&self.base),
            temperature: self.temp,
            apparent_temperature: self.feels_like,
            precip_probability: self.pop,
            visibility: self.visibility,
            uv_index: self.uvi,
        }
    }
}

pub fn map_hourly(points: Option<&[HourlyDataPoint]>) -> Option<DarkSkyHourlyDataBlock> {
    map_block(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{datapoint::fixtures, icon::DarkSkyIcon};

    fn hour(dt: i64, icon: &str) -> HourlyDataPoint {
        HourlyDataPoint {
            base: fixtures::base(dt, icon),
            temp: 3.1,
            feels_like: -1.2,
            pop: 0.4,
            visibility: 8000.0,
            uvi: None,
        }
    }

    #[test]
    fn absent_hourly_has_no_block() {
        assert!(map_hourly(None).is_none());
        assert!(map_hourly(Some(&[][..])).is_none());
    }

    #[test]
    fn maps_hourly_points() {
        let hours = [hour(3600, "10n"), hour(7200, "01n")];

        let block = map_hourly(Some(&hours[..])).expect("block");
        assert_eq!(block.icon, Some(DarkSkyIcon::Rain));
        assert_eq!(block.data.len(), 2);

        let first = &block.data[0];
        assert_eq!(first.temperature, 3.1);
        assert_eq!(first.apparent_temperature, -1.2);
        assert_eq!(first.precip_probability, 0.4);
        assert_eq!(first.visibility, 8000.0);
        assert_eq!(first.uv_index, None);
        assert_eq!(block.data[1].base.icon, Some(DarkSkyIcon::ClearNight));
    }

    #[test]
    fn serializes_required_hourly_keys() {
        let value = serde_json::to_value(hour(3600, "10n").to_dark_sky()).unwrap();

        assert_eq!(value["precipProbability"], 0.4);
        assert_eq!(value["visibility"], 8000.0);
        assert!(value.get("uvIndex").is_none());
    }
}
