use serde::{Deserialize, Serialize};

use super::common::{Envelope, Link};

/// Notification method resource (`EMAIL`, `WEBHOOK`, `PAGERDUTY`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMethod {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub name: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub address: String,
    /// Re-notification period in seconds; `0` disables it.
    #[serde(default)]
    pub period: i64,
}

pub type NotificationsResponse = Envelope<NotificationMethod>;

/// Body for create, update and patch of a notification method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
}
