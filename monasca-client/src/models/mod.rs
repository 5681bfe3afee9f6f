//! Request and response bodies of the Monasca v2.0 API.

mod alarm;
mod alarm_definition;
mod common;
mod metric;
mod notification;

pub use alarm::{Alarm, AlarmDefinitionSummary, AlarmRequestBody, AlarmsResponse};
pub use alarm_definition::{
    AlarmDefinition, AlarmDefinitionRequestBody, AlarmDefinitionsResponse,
};
pub use common::{Envelope, Link};
pub use metric::{
    DimensionName, DimensionNamesResponse, DimensionValue, DimensionValuesResponse, Measurement,
    MeasurementsResponse, Metric, MetricRequestBody, MetricsResponse, Statistic,
    StatisticsResponse,
};
pub use notification::{NotificationMethod, NotificationRequestBody, NotificationsResponse};
