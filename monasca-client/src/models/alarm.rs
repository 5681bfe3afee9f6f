use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Envelope, Link};
use super::metric::Metric;

/// Short form of the definition an alarm was created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDefinitionSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Alarm resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub alarm_definition: AlarmDefinitionSummary,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub state: String,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    pub state_updated_timestamp: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    pub updated_timestamp: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    pub created_timestamp: Option<DateTime<Utc>>,
}

pub type AlarmsResponse = Envelope<Alarm>;

/// Body for update and patch of an alarm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
