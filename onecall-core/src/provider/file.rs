use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::model::{Forecast, OneCallRequest, RequestParams};

use super::{ForecastSource, parse_forecast};

/// Replays a One Call response recorded to disk.
///
/// The request coordinates are not checked against the document; excluded
/// blocks are dropped the way the API would drop them.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Forecast> {
        let body = tokio::fs::read_to_string(&self.path).await.with_context(|| {
            format!("Failed to read One Call document: {}", self.path.display())
        })?;

        let forecast = parse_forecast(&body).with_context(|| {
            format!("Failed to parse One Call document: {}", self.path.display())
        })?;

        Ok(forecast)
    }
}

#[async_trait]
impl ForecastSource for FileSource {
    async fn fetch(&self, request: &OneCallRequest, params: &RequestParams) -> Result<Forecast> {
        tracing::debug!(
            path = %self.path.display(),
            lat = request.lat,
            lon = request.lon,
            time_machine = request.is_time_machine(),
            exclude = ?params.exclude,
            units = ?params.units,
            lang = ?params.lang,
            "replaying recorded forecast"
        );

        let forecast = self.load().await?;
        Ok(forecast.without(&params.exclude))
    }
}
