use serde::{Deserialize, Serialize};
use std::future::Future;

use super::{
    alert::{DarkSkyAlert, map_alerts},
    current::{DarkSkyCurrentDataPoint, map_current},
    daily::{DarkSkyDailyDataBlock, map_daily},
    hourly::{DarkSkyHourlyDataBlock, map_hourly},
    minutely::{DarkSkyMinutelyDataBlock, map_minutely},
};
use crate::model::Forecast;

/// A forecast in the shape of a DarkSky API response.
///
/// See <https://darksky.net/dev/docs#response-format>. `flags` and `offset` are
/// not produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DarkSkyForecast {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name for the requested location.
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently: Option<DarkSkyCurrentDataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutely: Option<DarkSkyMinutelyDataBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<DarkSkyHourlyDataBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<DarkSkyDailyDataBlock>,
    #[serde(default)]
    pub alerts: Vec<DarkSkyAlert>,
}

/// Map a One Call forecast to its DarkSky equivalent.
pub fn map_forecast(forecast: &Forecast) -> DarkSkyForecast {
    let mapped = DarkSkyForecast {
        latitude: forecast.lat,
        longitude: forecast.lon,
        timezone: forecast.timezone.clone(),
        currently: map_current(forecast.current.as_ref()),
        minutely: map_minutely(forecast.minutely.as_deref()),
        hourly: map_hourly(forecast.hourly.as_deref()),
        daily: map_daily(forecast.daily.as_deref()),
        alerts: map_alerts(forecast.alerts.as_deref()),
    };

    tracing::debug!(
        lat = mapped.latitude,
        lon = mapped.longitude,
        currently = mapped.currently.is_some(),
        minutely = mapped.minutely.is_some(),
        hourly = mapped.hourly.is_some(),
        daily = mapped.daily.is_some(),
        alerts = mapped.alerts.len(),
        "mapped forecast to DarkSky shape"
    );

    mapped
}

/// Wait for a pending forecast and map it.
///
/// The upstream error is returned as-is. Nothing here times out or retries;
/// that belongs to whatever produces `pending`.
pub async fn map_forecast_async<F, E>(pending: F) -> Result<DarkSkyForecast, E>
where
    F: Future<Output = Result<Forecast, E>>,
{
    let forecast = pending.await?;
    Ok(map_forecast(&forecast))
}
