//! `v2.0/notification-methods`

use crate::client::MonascaClient;
use crate::error::Result;
use crate::models::{NotificationMethod, NotificationRequestBody, NotificationsResponse};
use crate::query::{NotificationQuery, QueryParams, ToQueryParams};
use crate::url_builder::resource_path;

use super::NOTIFICATION_METHODS_PATH;

impl MonascaClient {
    pub async fn get_notification_methods(
        &self,
        query: Option<&NotificationQuery>,
    ) -> Result<NotificationsResponse> {
        self.get(NOTIFICATION_METHODS_PATH, &query.to_query_params())
            .await
    }

    pub async fn get_notification_method(
        &self,
        notification_method_id: &str,
    ) -> Result<NotificationMethod> {
        self.get(
            &resource_path(NOTIFICATION_METHODS_PATH, notification_method_id)?,
            &QueryParams::new(),
        )
        .await
    }

    pub async fn create_notification_method(
        &self,
        body: &NotificationRequestBody,
    ) -> Result<NotificationMethod> {
        self.post(NOTIFICATION_METHODS_PATH, body).await
    }

    pub async fn update_notification_method(
        &self,
        notification_method_id: &str,
        body: &NotificationRequestBody,
    ) -> Result<NotificationMethod> {
        self.put(
            &resource_path(NOTIFICATION_METHODS_PATH, notification_method_id)?,
            body,
        )
        .await
    }

    pub async fn patch_notification_method(
        &self,
        notification_method_id: &str,
        body: &NotificationRequestBody,
    ) -> Result<NotificationMethod> {
        self.patch(
            &resource_path(NOTIFICATION_METHODS_PATH, notification_method_id)?,
            body,
        )
        .await
    }

    pub async fn delete_notification_method(&self, notification_method_id: &str) -> Result<()> {
        self.delete(&resource_path(NOTIFICATION_METHODS_PATH, notification_method_id)?)
            .await
    }
}
