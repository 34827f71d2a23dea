//! Where One Call forecasts come from.
//!
//! The HTTP client that talks to OpenWeatherMap lives outside this crate; it
//! plugs in by implementing [`ForecastSource`].

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::CompatError,
    model::{Forecast, OneCallRequest, RequestParams},
};

pub mod file;

pub use file::FileSource;

#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(
        &self,
        request: &OneCallRequest,
        params: &RequestParams,
    ) -> anyhow::Result<Forecast>;
}

/// Parse a One Call response body.
pub fn parse_forecast(body: &str) -> Result<Forecast, CompatError> {
    Ok(serde_json::from_str(body)?)
}
