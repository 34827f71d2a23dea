use serde::{Deserialize, Serialize};

use super::block::DarkSkyDataBlock;
use crate::model::MinutelyDataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyMinutelyDataPoint {
    pub time: i64,
    /// Precipitation volume in mm, mapped from `precipitation`.
    pub precip_intensity: f64,
}

pub type DarkSkyMinutelyDataBlock = DarkSkyDataBlock<DarkSkyMinutelyDataPoint>;

impl From<&MinutelyDataPoint> for DarkSkyMinutelyDataPoint {
    fn from(point: &MinutelyDataPoint) -> Self {
        Self { time: point.dt, precip_intensity: point.precipitation }
    }
}

/// Minutely points carry no weather conditions, so the block never has a
/// summary or icon.
pub fn map_minutely(points: Option<&[MinutelyDataPoint]>) -> Option<DarkSkyMinutelyDataBlock> {
    let points = points.filter(|points| !points.is_empty())?;

    Some(DarkSkyDataBlock {
        summary: None,
        icon: None,
        original_icon: None,
        data: points.iter().map(DarkSkyMinutelyDataPoint::from).collect(),
    })
}
