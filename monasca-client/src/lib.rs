//! # monasca-client
//!
//! Async client for the [Monasca](https://wiki.openstack.org/wiki/Monasca)
//! monitoring API v2.0.
//!
//! ## Supported Resources
//!
//! | Resource | Path | Operations |
//! |----------|------|------------|
//! | Alarm definitions | `v2.0/alarm-definitions` | list, get, create, update, patch, delete |
//! | Alarms | `v2.0/alarms` | list, get, update, patch, delete |
//! | Metrics | `v2.0/metrics` | list, create |
//! | Statistics | `v2.0/metrics/statistics` | query |
//! | Measurements | `v2.0/metrics/measurements` | query |
//! | Dimension names / values | `v2.0/metrics/dimensions/names[/values]` | query |
//! | Notification methods | `v2.0/notification-methods` | list, get, create, update, patch, delete |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! use monasca_client::{ClientConfig, MetricQuery, MonascaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://monasca.example.com:8070")
//!         .with_timeout(Duration::from_secs(5))
//!         .with_auth_token("keystone-token");
//!     let client = MonascaClient::new(config)?;
//!
//!     let query = MetricQuery {
//!         name: Some("cpu.idle_perc".to_string()),
//!         dimensions: Some(HashMap::from([("hostname".to_string(), "devstack".to_string())])),
//!         ..Default::default()
//!     };
//!     for metric in client.get_metrics(Some(&query)).await? {
//!         println!("{} {:?}", metric.name, metric.dimensions);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, MonascaError>`](MonascaError):
//!
//! - [`MonascaError::InvalidUrl`] / [`MonascaError::InvalidHeader`]: bad configuration
//! - [`MonascaError::Network`] / [`MonascaError::Timeout`]: no response received
//! - [`MonascaError::Api`]: status other than 200/201/204, with the raw body
//! - [`MonascaError::Decode`]: the body did not match the expected JSON shape
//!
//! Nothing is retried.

mod client;
mod config;
pub mod defaults;
mod error;
mod http_client;
mod models;
mod query;
mod resources;
mod url_builder;
mod utils;

pub use client::MonascaClient;
pub use config::{AUTH_TOKEN_HEADER, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{MonascaError, Result};
pub use models::{
    Alarm, AlarmDefinition, AlarmDefinitionRequestBody, AlarmDefinitionSummary,
    AlarmDefinitionsResponse, AlarmRequestBody, AlarmsResponse, DimensionName,
    DimensionNamesResponse, DimensionValue, DimensionValuesResponse, Envelope, Link, Measurement,
    MeasurementsResponse, Metric, MetricRequestBody, MetricsResponse, NotificationMethod,
    NotificationRequestBody, NotificationsResponse, Statistic, StatisticsResponse,
};
pub use query::{
    AlarmDefinitionQuery, AlarmQuery, DimensionNameQuery, DimensionValueQuery, Dimensions,
    MeasurementQuery, MetricQuery, NotificationQuery, QueryParams, StatisticQuery, ToQueryParams,
    encode_dimensions,
};
pub use url_builder::build_url;

// Re-export utils module
pub use utils::datetime;
