//! Core library for the `onecall` tool.
//!
//! This crate defines:
//! - The OpenWeatherMap One Call response and request models
//! - The DarkSky compatibility layer that reshapes One Call responses
//! - An abstraction over forecast sources, plus a source replaying recorded responses
//! - Configuration handling
//!
//! It is used by `onecall-cli`, but can also be reused by other binaries or services.

pub mod compat;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use compat::{
    DarkSkyCompat, DarkSkyForecast, DarkSkyRequest, ForecastRequest, map_forecast,
    map_forecast_async,
};
pub use config::Config;
pub use error::CompatError;
pub use model::{Exclude, Forecast, OneCallRequest, RequestParams, Units};
pub use provider::{FileSource, ForecastSource, parse_forecast};
