use serde::{Deserialize, Serialize};

use super::{datapoint::ToDarkSky, icon::DarkSkyIcon};
use crate::model::WeatherIcon;

/// Weather over a period of time: one entry per minute, hour or day.
///
/// The summary and icons describe the block as a whole and are taken from the
/// first data point, the same "representative entry" convention One Call uses.
/// See <https://darksky.net/dev/docs#data-block-object>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkSkyDataBlock<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<DarkSkyIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_icon: Option<WeatherIcon>,
    pub data: Vec<T>,
}

/// Map a list of One Call points to a DarkSky block.
///
/// Returns `None` when there is nothing to describe the block with: no list, an
/// empty list, or a first point without weather conditions.
pub fn map_block<P: ToDarkSky>(points: Option<&[P]>) -> Option<DarkSkyDataBlock<P::Output>> {
    let points = points?;
    let weather = points.first()?.base().primary_weather()?;

    Some(DarkSkyDataBlock {
        summary: Some(weather.description.clone()),
        icon: weather.icon.to_dark_sky(),
        original_icon: Some(weather.icon.clone()),
        data: points.iter().map(ToDarkSky::to_dark_sky).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::datapoint::{DarkSkyDataPoint, fixtures, map_data_point};
    use crate::model::DataPointBase;

    impl ToDarkSky for DataPointBase {
        type Output = DarkSkyDataPoint;

        fn base(&self) -> &DataPointBase {
            self
        }

        fn to_dark_sky(&self) -> DarkSkyDataPoint {
            map_data_point(self)
        }
    }

    #[test]
    fn absent_or_empty_list_has_no_block() {
        assert!(map_block::<DataPointBase>(None).is_none());
        assert!(map_block::<DataPointBase>(Some(&[][..])).is_none());
    }

    #[test]
    fn first_point_without_weather_has_no_block() {
        let mut first = fixtures::base(1, "01d");
        first.weather.clear();

        let points = [first, fixtures::base(2, "01d")];
        assert!(map_block(Some(&points[..])).is_none());
    }

    #[test]
    fn summary_comes_from_first_point_only() {
        let mut second = fixtures::base(2, "11d");
        second.weather[0].description = "thunderstorm".to_string();
        let points = [fixtures::base(1, "04n"), second];

        let block = map_block(Some(&points[..])).expect("block");
        assert_eq!(block.summary.as_deref(), Some("few clouds"));
        assert_eq!(block.icon, Some(DarkSkyIcon::PartlyCloudyNight));
        assert_eq!(block.original_icon, Some(WeatherIcon::BrokenCloudsNight));
        assert_eq!(block.data.len(), 2);
        assert_eq!(block.data[1].summary, "thunderstorm");
    }

    #[test]
    fn data_keeps_input_order() {
        let points: Vec<_> = (0..5).map(|i| fixtures::base(100 - i, "01d")).collect();

        let block = map_block(Some(points.as_slice())).expect("block");
        let times: Vec<i64> = block.data.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![100, 99, 98, 97, 96]);
    }
}
