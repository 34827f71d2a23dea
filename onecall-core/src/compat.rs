//! DarkSky compatibility layer.
//!
//! Maps One Call responses onto the shape of the retired DarkSky API, so code
//! written against DarkSky can keep reading the same fields. See
//! <https://openweathermap.org/darksky-openweather#match> for the field matching.
//!
//! Everything except [`map_forecast_async`] and [`DarkSkyCompat`] is a plain,
//! synchronous function of its input.

pub mod alert;
pub mod block;
pub mod client;
pub mod current;
pub mod daily;
pub mod datapoint;
pub mod forecast;
pub mod hourly;
pub mod icon;
pub mod minutely;
pub mod precipitation;
pub mod request;

pub use alert::{DarkSkyAlert, map_alerts};
pub use block::{DarkSkyDataBlock, map_block};
pub use client::DarkSkyCompat;
pub use current::{DarkSkyCurrentDataPoint, map_current};
pub use daily::{DarkSkyDailyDataBlock, DarkSkyDailyDataPoint, map_daily};
pub use datapoint::{DarkSkyDataPoint, ToDarkSky, map_data_point};
pub use forecast::{DarkSkyForecast, map_forecast, map_forecast_async};
pub use hourly::{DarkSkyHourlyDataBlock, DarkSkyHourlyDataPoint, map_hourly};
pub use icon::{DarkSkyIcon, translate_icon};
pub use minutely::{DarkSkyMinutelyDataBlock, DarkSkyMinutelyDataPoint, map_minutely};
pub use precipitation::{Precipitation, PrecipitationType, resolve_precipitation};
pub use request::{DarkSkyRequest, ForecastRequest};
