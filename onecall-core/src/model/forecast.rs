use serde::{Deserialize, Serialize};

use super::{icon::WeatherIcon, request::Exclude};

/// A One Call API response, see <https://openweathermap.org/api/one-call-api#parameter>.
///
/// Every data block is optional: the API omits blocks that were excluded by the
/// request or that are not available for the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentDataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutely: Option<Vec<MinutelyDataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<HourlyDataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Vec<DailyDataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
}

impl Forecast {
    /// Drop the data blocks listed in `exclude`, the way the API does server-side.
    pub fn without(mut self, exclude: &[Exclude]) -> Self {
        for block in exclude {
            match block {
                Exclude::Currently => self.current = None,
                Exclude::Minutely => self.minutely = None,
                Exclude::Hourly => self.hourly = None,
                Exclude::Daily => self.daily = None,
            }
        }
        self
    }
}

/// A block of user-facing weather information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: WeatherIcon,
}

/// Volume of rain or snow.
///
/// Daily points report a bare number for the whole day, current and hourly
/// points report `{"1h": <mm>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrecipitationVolume {
    Total(f64),
    LastHour(LastHourVolume),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LastHourVolume {
    /// Volume for the last hour, in mm.
    #[serde(rename = "1h", default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
}

/// Fields shared by the current, hourly and daily data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPointBase {
    /// Time of the forecasted data, unix, UTC.
    pub dt: i64,
    /// Atmospheric pressure on the sea level, hPa.
    pub pressure: f64,
    /// Humidity, %.
    pub humidity: f64,
    pub dew_point: f64,
    /// Cloudiness, %.
    pub clouds: f64,
    pub wind_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    /// Wind direction, degrees (meteorological).
    pub wind_deg: f64,
    pub weather: Vec<Weather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<PrecipitationVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<PrecipitationVolume>,
}

impl DataPointBase {
    /// The representative weather condition. The API lists the primary one first.
    pub fn primary_weather(&self) -> Option<&Weather> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDataPoint {
    #[serde(flatten)]
    pub base: DataPointBase,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub uvi: f64,
    /// Average visibility, metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinutelyDataPoint {
    pub dt: i64,
    /// Precipitation volume, mm.
    pub precipitation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyDataPoint {
    #[serde(flatten)]
    pub base: DataPointBase,
    pub temp: f64,
    pub feels_like: f64,
    /// Probability of precipitation, 0..1.
    pub pop: f64,
    pub visibility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uvi: Option<f64>,
}

/// Temperatures for the parts of a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPartTemperature {
    pub morn: f64,
    pub day: f64,
    pub eve: f64,
    pub night: f64,
}

impl DayPartTemperature {
    pub fn values(&self) -> [f64; 4] {
        [self.morn, self.day, self.eve, self.night]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    #[serde(flatten)]
    pub parts: DayPartTemperature,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDataPoint {
    #[serde(flatten)]
    pub base: DataPointBase,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: DailyTemperature,
    pub feels_like: DayPartTemperature,
    pub uvi: f64,
    pub pop: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

/// A national weather alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub event: String,
    pub start: i64,
    pub end: i64,
    pub description: String,
}
