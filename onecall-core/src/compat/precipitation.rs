use serde::{Deserialize, Serialize};

use crate::model::PrecipitationVolume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationType {
    Rain,
    Snow,
}

/// DarkSky `precipType` / `precipIntensity` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Precipitation {
    pub precip_type: Option<PrecipitationType>,
    pub intensity: Option<f64>,
}

impl PrecipitationVolume {
    /// A zero (or NaN) total counts as "no precipitation"; a per-hour record always counts.
    pub fn is_measurable(&self) -> bool {
        match self {
            PrecipitationVolume::Total(volume) => *volume != 0.0 && !volume.is_nan(),
            PrecipitationVolume::LastHour(_) => true,
        }
    }

    pub fn volume(&self) -> Option<f64> {
        match self {
            PrecipitationVolume::Total(volume) => Some(*volume),
            PrecipitationVolume::LastHour(record) => record.one_hour,
        }
    }
}

/// Work out the precipitation type and intensity from a point's `rain` and `snow`.
///
/// Rain wins whenever both are set. The type only needs a measurable value,
/// the intensity reads whichever field is present.
pub fn resolve_precipitation(
    rain: Option<&PrecipitationVolume>,
    snow: Option<&PrecipitationVolume>,
) -> Precipitation {
    let precip_type = if rain.is_some_and(PrecipitationVolume::is_measurable) {
        Some(PrecipitationType::Rain)
    } else if snow.is_some_and(PrecipitationVolume::is_measurable) {
        Some(PrecipitationType::Snow)
    } else {
        None
    };

    let intensity = rain.or(snow).and_then(PrecipitationVolume::volume);

    Precipitation { precip_type, intensity }
}
