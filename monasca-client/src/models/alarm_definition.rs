use serde::{Deserialize, Serialize};

use super::common::{Envelope, Link};

/// Alarm definition resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDefinition {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub expression: String,
    #[serde(default)]
    pub deterministic: bool,
    #[serde(default)]
    pub match_by: Vec<String>,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub actions_enabled: bool,
    #[serde(default)]
    pub alarm_actions: Vec<String>,
    #[serde(default)]
    pub ok_actions: Vec<String>,
    #[serde(default)]
    pub undetermined_actions: Vec<String>,
}

pub type AlarmDefinitionsResponse = Envelope<AlarmDefinition>;

/// Body for create, update and patch of an alarm definition.
///
/// Unset fields are left out of the JSON, which is what `PATCH` needs.
/// `PUT` expects every field the API requires to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDefinitionRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deterministic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undetermined_actions: Option<Vec<String>>,
}
