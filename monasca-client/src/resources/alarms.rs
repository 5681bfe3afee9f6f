//! `v2.0/alarms`

use crate::client::MonascaClient;
use crate::error::Result;
use crate::models::{Alarm, AlarmRequestBody, AlarmsResponse};
use crate::query::{AlarmQuery, QueryParams, ToQueryParams};
use crate::url_builder::resource_path;

use super::ALARMS_PATH;

impl MonascaClient {
    /// List alarms matching `query` (`None` lists all).
    pub async fn get_alarms(&self, query: Option<&AlarmQuery>) -> Result<AlarmsResponse> {
        self.get(ALARMS_PATH, &query.to_query_params()).await
    }

    pub async fn get_alarm(&self, alarm_id: &str) -> Result<Alarm> {
        self.get(&resource_path(ALARMS_PATH, alarm_id)?, &QueryParams::new())
            .await
    }

    /// Replace the mutable alarm fields (`PUT`).
    pub async fn update_alarm(&self, alarm_id: &str, body: &AlarmRequestBody) -> Result<Alarm> {
        self.put(&resource_path(ALARMS_PATH, alarm_id)?, body).await
    }

    pub async fn patch_alarm(&self, alarm_id: &str, body: &AlarmRequestBody) -> Result<Alarm> {
        self.patch(&resource_path(ALARMS_PATH, alarm_id)?, body)
            .await
    }

    pub async fn delete_alarm(&self, alarm_id: &str) -> Result<()> {
        self.delete(&resource_path(ALARMS_PATH, alarm_id)?).await
    }
}
