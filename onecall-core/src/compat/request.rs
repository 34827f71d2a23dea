use chrono::{DateTime, Utc};

use crate::model::OneCallRequest;

/// A request in DarkSky's shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkSkyRequest {
    /// Decimal degrees, positive is north.
    pub latitude: f64,
    /// Decimal degrees, positive is east.
    pub longitude: f64,
    pub time: Option<DateTime<Utc>>,
}

impl From<DarkSkyRequest> for OneCallRequest {
    fn from(request: DarkSkyRequest) -> Self {
        Self { lat: request.latitude, lon: request.longitude, time: request.time }
    }
}

/// Either request shape accepted by [`DarkSkyCompat`](super::client::DarkSkyCompat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForecastRequest {
    OneCall(OneCallRequest),
    DarkSky(DarkSkyRequest),
}

impl ForecastRequest {
    pub fn into_one_call(self) -> OneCallRequest {
        match self {
            ForecastRequest::OneCall(request) => request,
            ForecastRequest::DarkSky(request) => request.into(),
        }
    }
}

impl From<OneCallRequest> for ForecastRequest {
    fn from(request: OneCallRequest) -> Self {
        ForecastRequest::OneCall(request)
    }
}

impl From<DarkSkyRequest> for ForecastRequest {
    fn from(request: DarkSkyRequest) -> Self {
        ForecastRequest::DarkSky(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn maps_dark_sky_request_to_one_call() {
        let time = Utc.timestamp_opt(3, 0).unwrap();
        let request = DarkSkyRequest { latitude: 1.0, longitude: 2.0, time: Some(time) };

        let mapped = ForecastRequest::from(request).into_one_call();
        assert_eq!(mapped, OneCallRequest { lat: 1.0, lon: 2.0, time: Some(time) });
    }

    #[test]
    fn one_call_request_passes_through() {
        let request = OneCallRequest::new(42.0, 24.0);

        assert_eq!(ForecastRequest::from(request).into_one_call(), request);
    }
}
