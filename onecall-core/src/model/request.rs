use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CompatError;

/// Location (and optionally the point in time) a One Call forecast is requested for.
///
/// A request with `time` set is a "time machine" request for historical data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneCallRequest {
    pub lat: f64,
    pub lon: f64,
    pub time: Option<DateTime<Utc>>,
}

impl OneCallRequest {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, time: None }
    }

    pub fn at(self, time: DateTime<Utc>) -> Self {
        Self { time: Some(time), ..self }
    }

    pub fn is_time_machine(&self) -> bool {
        self.time.is_some()
    }

    /// Reject coordinates the API would refuse.
    pub fn validate(&self) -> Result<(), CompatError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);

        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(CompatError::InvalidCoordinates { lat: self.lat, lon: self.lon })
        }
    }
}

/// Data blocks that can be left out of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclude {
    Currently,
    Minutely,
    Hourly,
    Daily,
}

impl Exclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclude::Currently => "currently",
            Exclude::Minutely => "minutely",
            Exclude::Hourly => "hourly",
            Exclude::Daily => "daily",
        }
    }

    pub const fn all() -> &'static [Exclude] {
        &[Exclude::Currently, Exclude::Minutely, Exclude::Hourly, Exclude::Daily]
    }
}

impl fmt::Display for Exclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Exclude {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        Exclude::all()
            .iter()
            .copied()
            .find(|block| block.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown data block '{value}'. Supported blocks: currently, minutely, hourly, daily."
                )
            })
    }
}

/// Unit system the measurements are reported in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin, metre/sec.
    #[default]
    Standard,
    /// Celsius, metre/sec.
    Metric,
    /// Fahrenheit, miles/hour.
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters passed along with a forecast request.
///
/// `units` and `lang` are handed to the source untouched; the mapping does not
/// convert values or translate summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    #[serde(default)]
    pub exclude: Vec<Exclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    /// Language code for summaries, e.g. `"fr"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl RequestParams {
    /// Also exclude `block`. Existing exclusions keep their order; duplicates are ignored.
    pub fn excluding(&self, block: Exclude) -> Self {
        let mut params = self.clone();
        if !params.exclude.contains(&block) {
            params.exclude.push(block);
        }
        params
    }

    /// Exclude every block except `include`. Earlier exclusions are replaced,
    /// `units` and `lang` are kept.
    pub fn only(&self, include: Exclude) -> Self {
        let exclude = Exclude::all().iter().copied().filter(|block| *block != include).collect();
        Self { exclude, ..self.clone() }
    }

    pub fn with_units(&self, units: Units) -> Self {
        Self { units: Some(units), ..self.clone() }
    }

    pub fn with_lang(&self, lang: impl Into<String>) -> Self {
        Self { lang: Some(lang.into()), ..self.clone() }
    }

    pub fn is_excluded(&self, block: Exclude) -> bool {
        self.exclude.contains(&block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn exclude_as_str_roundtrip() {
        for block in Exclude::all() {
            let parsed = Exclude::try_from(block.as_str()).expect("roundtrip should succeed");
            assert_eq!(*block, parsed);
        }
    }

    #[test]
    fn unknown_block_error() {
        let err = Exclude::try_from("weekly").unwrap_err();
        assert!(err.to_string().contains("Unknown data block"));
    }

    #[test]
    fn excluding_ignores_duplicates() {
        let params = RequestParams::default()
            .excluding(Exclude::Daily)
            .excluding(Exclude::Hourly)
            .excluding(Exclude::Daily);

        assert_eq!(params.exclude, vec![Exclude::Daily, Exclude::Hourly]);
    }

    #[test]
    fn only_excludes_everything_else() {
        let params = RequestParams::default().only(Exclude::Hourly);

        assert!(!params.is_excluded(Exclude::Hourly));
        assert!(params.is_excluded(Exclude::Currently));
        assert!(params.is_excluded(Exclude::Minutely));
        assert!(params.is_excluded(Exclude::Daily));
        assert_eq!(params.exclude.len(), 3);
    }

    #[test]
    fn only_replaces_earlier_exclusions() {
        let params = RequestParams::default()
            .excluding(Exclude::Daily)
            .excluding(Exclude::Minutely)
            .only(Exclude::Daily);

        assert!(!params.is_excluded(Exclude::Daily));
        assert_eq!(params.exclude, vec![Exclude::Currently, Exclude::Minutely, Exclude::Hourly]);
    }

    #[test]
    fn only_keeps_units_and_lang() {
        let params = RequestParams::default()
            .with_units(Units::Metric)
            .with_lang("fr")
            .only(Exclude::Currently);

        assert_eq!(params.units, Some(Units::Metric));
        assert_eq!(params.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn units_serialize_lowercase() {
        let params = RequestParams::default().with_units(Units::Imperial);
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["units"], "imperial");
        assert!(value.get("lang").is_none());
        assert_eq!(Units::default(), Units::Standard);
    }

    #[test]
    fn only_leaves_original_untouched() {
        let base = RequestParams::default().excluding(Exclude::Minutely);
        let _ = base.only(Exclude::Daily);

        assert_eq!(base.exclude, vec![Exclude::Minutely]);
    }

    #[test]
    fn time_machine_request() {
        let when = Utc.with_ymd_and_hms(2020, 8, 13, 18, 0, 0).unwrap();
        let request = OneCallRequest::new(42.0, -81.0).at(when);

        assert!(request.is_time_machine());
        assert!(!OneCallRequest::new(42.0, -81.0).is_time_machine());
    }

    #[test]
    fn validate_rejects_out_of_range_coordinates() {
        assert!(OneCallRequest::new(42.9849, -81.2453).validate().is_ok());

        let err = OneCallRequest::new(91.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, CompatError::InvalidCoordinates { .. }));
        assert!(OneCallRequest::new(0.0, f64::NAN).validate().is_err());
    }
}
