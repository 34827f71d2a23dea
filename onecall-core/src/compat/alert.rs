use serde::{Deserialize, Serialize};

use crate::model::Alert;

/// A severe weather warning issued by a governmental authority.
///
/// `regions`, `severity` and `url` exist for consumers that read them; One Call
/// has no equivalent data, so they are always `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DarkSkyAlert {
    pub title: String,
    pub description: String,
    /// Unix time the alert was issued.
    pub time: i64,
    /// Unix time the alert expires.
    pub expires: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&Alert> for DarkSkyAlert {
    fn from(alert: &Alert) -> Self {
        Self {
            title: alert.event.clone(),
            description: alert.description.clone(),
            time: alert.start,
            expires: alert.end,
            regions: None,
            severity: None,
            url: None,
        }
    }
}

/// Unlike data blocks, a missing alert list maps to an empty list.
pub fn map_alerts(alerts: Option<&[Alert]>) -> Vec<DarkSkyAlert> {
    alerts.unwrap_or_default().iter().map(DarkSkyAlert::from).collect()
}
