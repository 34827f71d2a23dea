use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{
    forecast::{DarkSkyForecast, map_forecast_async},
    request::ForecastRequest,
};
use crate::{
    error::CompatError,
    model::{Exclude, RequestParams},
    provider::ForecastSource,
};

/// A DarkSky-compatible client on top of any [`ForecastSource`].
///
/// Accepts requests in either shape and answers with DarkSky-shaped forecasts.
///
/// ```no_run
/// # async fn run() -> anyhow::Result<()> {
/// use onecall_core::{DarkSkyCompat, DarkSkyRequest, FileSource, RequestParams};
///
/// let client = DarkSkyCompat::new(FileSource::new("onecall.json"));
/// let request = DarkSkyRequest { latitude: 42.98, longitude: -81.24, time: None };
/// let forecast = client.forecast(request, &RequestParams::default()).await?;
/// println!("{:?}", forecast.currently);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DarkSkyCompat<S> {
    source: S,
}

impl<S: ForecastSource> DarkSkyCompat<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a forecast and map it. Errors from the source come back untouched.
    pub async fn forecast(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        let request = request.into().into_one_call();
        request.validate()?;

        map_forecast_async(self.source.fetch(&request, params)).await
    }

    /// Forecast for a specific point in time.
    pub async fn time_machine(
        &self,
        request: impl Into<ForecastRequest>,
        time: DateTime<Utc>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        let request = request.into().into_one_call().at(time);
        self.forecast(request, params).await
    }

    /// Current conditions only.
    pub async fn current(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        self.only(request, params, Exclude::Currently).await
    }

    /// Day-by-day forecast for the week only.
    pub async fn week(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        self.only(request, params, Exclude::Daily).await
    }

    /// Hour-by-hour forecast only.
    pub async fn day(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        self.only(request, params, Exclude::Hourly).await
    }

    /// Minute-by-minute forecast for the next hour only.
    pub async fn hour(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
    ) -> Result<DarkSkyForecast> {
        self.only(request, params, Exclude::Minutely).await
    }

    async fn only(
        &self,
        request: impl Into<ForecastRequest>,
        params: &RequestParams,
        block: Exclude,
    ) -> Result<DarkSkyForecast> {
        let forecast = self.forecast(request, &params.only(block)).await?;

        let present = match block {
            Exclude::Currently => forecast.currently.is_some(),
            Exclude::Minutely => forecast.minutely.is_some(),
            Exclude::Hourly => forecast.hourly.is_some(),
            Exclude::Daily => forecast.daily.is_some(),
        };

        if !present {
            tracing::debug!(%block, "requested block missing from forecast");
            return Err(CompatError::MissingBlock(block).into());
        }

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::request::DarkSkyRequest;
    use crate::model::{Forecast, MinutelyDataPoint, OneCallRequest, Units};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// Hands out a fixed forecast and remembers what it was asked for.
    #[derive(Debug)]
    struct Recorded {
        forecast: Option<Forecast>,
        seen: Mutex<Vec<(OneCallRequest, RequestParams)>>,
    }

    impl Recorded {
        fn new(forecast: Forecast) -> Self {
            Self { forecast: Some(forecast), seen: Mutex::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { forecast: None, seen: Mutex::new(Vec::new()) }
        }

        fn last_seen(&self) -> (OneCallRequest, RequestParams) {
            self.seen.lock().unwrap().last().cloned().expect("source was called")
        }
    }

    #[async_trait]
    impl ForecastSource for Recorded {
        async fn fetch(
            &self,
            request: &OneCallRequest,
            params: &RequestParams,
        ) -> anyhow::Result<Forecast> {
            self.seen.lock().unwrap().push((*request, params.clone()));
            match &self.forecast {
                Some(forecast) => Ok(forecast.clone().without(&params.exclude)),
                None => Err(anyhow::anyhow!("upstream returned 503")),
            }
        }
    }

    fn forecast() -> Forecast {
        Forecast {
            lat: 42.0,
            lon: 24.0,
            timezone: "Europe/Sofia".to_string(),
            timezone_offset: Some(7200),
            current: None,
            minutely: Some(vec![MinutelyDataPoint { dt: 60, precipitation: 0.2 }]),
            hourly: None,
            daily: None,
            alerts: None,
        }
    }

    #[tokio::test]
    async fn maps_dark_sky_request_to_one_call() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));
        let request = DarkSkyRequest { latitude: 42.0, longitude: 24.0, time: None };

        let mapped = client.forecast(request, &RequestParams::default()).await.expect("forecast");

        let (seen, _) = client.source().last_seen();
        assert_eq!(seen, OneCallRequest::new(42.0, 24.0));
        assert_eq!(mapped.latitude, 42.0);
        assert!(mapped.minutely.is_some());
    }

    #[tokio::test]
    async fn time_machine_sets_request_time() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));
        let when = Utc.timestamp_opt(123, 0).unwrap();

        client
            .time_machine(OneCallRequest::new(42.0, 24.0), when, &RequestParams::default())
            .await
            .expect("forecast");

        let (seen, _) = client.source().last_seen();
        assert_eq!(seen.time, Some(when));
    }

    #[tokio::test]
    async fn source_errors_pass_through() {
        let client = DarkSkyCompat::new(Recorded::failing());

        let err = client
            .forecast(OneCallRequest::new(42.0, 24.0), &RequestParams::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "upstream returned 503");
    }

    #[tokio::test]
    async fn invalid_coordinates_never_reach_the_source() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));

        let err = client
            .forecast(OneCallRequest::new(142.0, 24.0), &RequestParams::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CompatError>(),
            Some(CompatError::InvalidCoordinates { .. })
        ));
        assert!(client.source().seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn hour_requests_only_minutely() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));

        let mapped = client
            .hour(OneCallRequest::new(42.0, 24.0), &RequestParams::default())
            .await
            .expect("minutely present");

        let (_, params) = client.source().last_seen();
        assert_eq!(params, RequestParams::default().only(Exclude::Minutely));
        assert!(mapped.minutely.is_some());
    }

    #[tokio::test]
    async fn hour_overrides_a_caller_exclusion_of_minutely() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));
        let params =
            RequestParams::default().excluding(Exclude::Minutely).with_units(Units::Metric);

        let mapped = client
            .hour(OneCallRequest::new(42.0, 24.0), &params)
            .await
            .expect("minutely present");

        let (_, seen) = client.source().last_seen();
        assert!(!seen.is_excluded(Exclude::Minutely));
        assert_eq!(seen.units, Some(Units::Metric));
        assert!(mapped.minutely.is_some());
    }

    #[tokio::test]
    async fn week_fails_when_daily_is_missing() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));

        let err = client
            .week(OneCallRequest::new(42.0, 24.0), &RequestParams::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CompatError>(),
            Some(CompatError::MissingBlock(Exclude::Daily))
        ));
    }

    #[tokio::test]
    async fn current_and_day_fail_without_their_blocks() {
        let client = DarkSkyCompat::new(Recorded::new(forecast()));
        let request = OneCallRequest::new(42.0, 24.0);

        assert!(client.current(request, &RequestParams::default()).await.is_err());
        assert!(client.day(request, &RequestParams::default()).await.is_err());
    }
}
