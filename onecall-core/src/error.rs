use thiserror::Error;

use crate::model::Exclude;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Forecast response did not contain a '{0}' data block")]
    MissingBlock(Exclude),

    #[error("Invalid coordinates: latitude {lat}, longitude {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Failed to parse One Call JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
