//! Resource operations, one module per API collection.

mod alarm_definitions;
mod alarms;
mod metrics;
mod notifications;

pub(crate) const ALARM_DEFINITIONS_PATH: &str = "v2.0/alarm-definitions";
pub(crate) const ALARMS_PATH: &str = "v2.0/alarms";
pub(crate) const METRICS_PATH: &str = "v2.0/metrics";
pub(crate) const STATISTICS_PATH: &str = "v2.0/metrics/statistics";
pub(crate) const MEASUREMENTS_PATH: &str = "v2.0/metrics/measurements";
pub(crate) const DIMENSION_NAMES_PATH: &str = "v2.0/metrics/dimensions/names";
pub(crate) const DIMENSION_VALUES_PATH: &str = "v2.0/metrics/dimensions/names/values";
pub(crate) const NOTIFICATION_METHODS_PATH: &str = "v2.0/notification-methods";
