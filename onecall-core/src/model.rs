//! One Call API shapes: the response document and the request side.

pub mod forecast;
pub mod icon;
pub mod request;

pub use forecast::{
    Alert, CurrentDataPoint, DailyDataPoint, DailyTemperature, DataPointBase, DayPartTemperature,
    Forecast, HourlyDataPoint, LastHourVolume, MinutelyDataPoint, PrecipitationVolume, Weather,
};
pub use icon::{KNOWN_ICONS, WeatherIcon};
pub use request::{Exclude, OneCallRequest, RequestParams, Units};
