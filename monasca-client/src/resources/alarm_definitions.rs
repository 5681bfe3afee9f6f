//! `v2.0/alarm-definitions`

use crate::client::MonascaClient;
use crate::error::Result;
use crate::models::{AlarmDefinition, AlarmDefinitionRequestBody, AlarmDefinitionsResponse};
use crate::query::{AlarmDefinitionQuery, QueryParams, ToQueryParams};
use crate::url_builder::resource_path;

use super::ALARM_DEFINITIONS_PATH;

impl MonascaClient {
    /// List alarm definitions matching `query` (`None` lists all).
    pub async fn get_alarm_definitions(
        &self,
        query: Option<&AlarmDefinitionQuery>,
    ) -> Result<AlarmDefinitionsResponse> {
        self.get(ALARM_DEFINITIONS_PATH, &query.to_query_params())
            .await
    }

    pub async fn get_alarm_definition(&self, alarm_definition_id: &str) -> Result<AlarmDefinition> {
        self.get(
            &resource_path(ALARM_DEFINITIONS_PATH, alarm_definition_id)?,
            &QueryParams::new(),
        )
        .await
    }

    pub async fn create_alarm_definition(
        &self,
        body: &AlarmDefinitionRequestBody,
    ) -> Result<AlarmDefinition> {
        self.post(ALARM_DEFINITIONS_PATH, body).await
    }

    /// Replace an alarm definition (`PUT`).
    pub async fn update_alarm_definition(
        &self,
        alarm_definition_id: &str,
        body: &AlarmDefinitionRequestBody,
    ) -> Result<AlarmDefinition> {
        self.put(
            &resource_path(ALARM_DEFINITIONS_PATH, alarm_definition_id)?,
            body,
        )
        .await
    }

    /// Change only the fields set in `body` (`PATCH`).
    pub async fn patch_alarm_definition(
        &self,
        alarm_definition_id: &str,
        body: &AlarmDefinitionRequestBody,
    ) -> Result<AlarmDefinition> {
        self.patch(
            &resource_path(ALARM_DEFINITIONS_PATH, alarm_definition_id)?,
            body,
        )
        .await
    }

    pub async fn delete_alarm_definition(&self, alarm_definition_id: &str) -> Result<()> {
        self.delete(&resource_path(ALARM_DEFINITIONS_PATH, alarm_definition_id)?)
            .await
    }
}
