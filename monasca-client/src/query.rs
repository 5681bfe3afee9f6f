//! Query parameters and per-endpoint query descriptors.
//!
//! Every descriptor implements [`ToQueryParams`] by hand, listing each field
//! with the wire name it serializes to. Unset fields emit nothing.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::utils::datetime::format_time;

/// Dimension filter: tag name to tag value.
pub type Dimensions = HashMap<String, String>;

/// Wire name of the dimension filter parameter.
pub const DIMENSIONS_PARAM: &str = "dimensions";

/// Encode a dimension set as `key:value` pairs joined by `,`, sorted by key.
///
/// The result does not depend on the map's iteration order.
pub fn encode_dimensions(dimensions: &Dimensions) -> String {
    let mut pairs: Vec<(&String, &String)> = dimensions.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Query string parameters, kept in key order.
///
/// Multiple values per key are allowed and keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    pub fn add_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.add(key, value);
        }
    }

    pub fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.add(key, value.to_string());
        }
    }

    pub fn add_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.add(key, value.to_string());
        }
    }

    pub fn add_time(&mut self, key: &str, value: Option<&DateTime<Utc>>) {
        if let Some(value) = value {
            self.add(key, format_time(value));
        }
    }

    /// Add the `dimensions` parameter; `None` and empty maps are skipped.
    pub fn add_dimensions(&mut self, value: Option<&Dimensions>) {
        if let Some(dimensions) = value.filter(|d| !d.is_empty()) {
            self.add(DIMENSIONS_PARAM, encode_dimensions(dimensions));
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// All `(key, value)` pairs, keys in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

/// Conversion of a query descriptor into query parameters.
pub trait ToQueryParams {
    fn to_query_params(&self) -> QueryParams;
}

impl<T: ToQueryParams> ToQueryParams for Option<&T> {
    fn to_query_params(&self) -> QueryParams {
        self.map(ToQueryParams::to_query_params).unwrap_or_default()
    }
}

// ============ Alarm definitions ============

/// Filters for `GET v2.0/alarm-definitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmDefinitionQuery {
    pub name: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub severity: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for AlarmDefinitionQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("name", self.name.as_deref());
        params.add_dimensions(self.dimensions.as_ref());
        params.add_str("severity", self.severity.as_deref());
        params.add_str("sort_by", self.sort_by.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

// ============ Alarms ============

/// Filters for `GET v2.0/alarms`.
///
/// `metric_dimensions` is sent as the `dimensions` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmQuery {
    pub alarm_definition_id: Option<String>,
    pub metric_name: Option<String>,
    pub metric_dimensions: Option<Dimensions>,
    pub state: Option<String>,
    pub severity: Option<String>,
    pub lifecycle_state: Option<String>,
    pub link: Option<String>,
    pub state_updated_start_time: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for AlarmQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("alarm_definition_id", self.alarm_definition_id.as_deref());
        params.add_str("metric_name", self.metric_name.as_deref());
        params.add_dimensions(self.metric_dimensions.as_ref());
        params.add_str("state", self.state.as_deref());
        params.add_str("severity", self.severity.as_deref());
        params.add_str("lifecycle_state", self.lifecycle_state.as_deref());
        params.add_str("link", self.link.as_deref());
        params.add_time(
            "state_updated_start_time",
            self.state_updated_start_time.as_ref(),
        );
        params.add_str("sort_by", self.sort_by.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

// ============ Metrics ============

/// Filters for `GET v2.0/metrics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricQuery {
    pub tenant_id: Option<String>,
    pub name: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for MetricQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("tenant_id", self.tenant_id.as_deref());
        params.add_str("name", self.name.as_deref());
        params.add_dimensions(self.dimensions.as_ref());
        params.add_time("start_time", self.start_time.as_ref());
        params.add_time("end_time", self.end_time.as_ref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

/// Filters for `GET v2.0/metrics/statistics`.
///
/// `statistics` is a comma-separated list such as `avg,max`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticQuery {
    pub tenant_id: Option<String>,
    pub name: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub statistics: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Aggregation period in seconds.
    pub period: Option<i64>,
    pub merge_metrics: Option<bool>,
    pub group_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for StatisticQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("tenant_id", self.tenant_id.as_deref());
        params.add_str("name", self.name.as_deref());
        params.add_dimensions(self.dimensions.as_ref());
        params.add_str("statistics", self.statistics.as_deref());
        params.add_time("start_time", self.start_time.as_ref());
        params.add_time("end_time", self.end_time.as_ref());
        params.add_int("period", self.period);
        params.add_bool("merge_metrics", self.merge_metrics);
        params.add_str("group_by", self.group_by.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

/// Filters for `GET v2.0/metrics/measurements`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementQuery {
    pub tenant_id: Option<String>,
    pub name: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub merge_metrics: Option<bool>,
    pub group_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for MeasurementQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("tenant_id", self.tenant_id.as_deref());
        params.add_str("name", self.name.as_deref());
        params.add_dimensions(self.dimensions.as_ref());
        params.add_time("start_time", self.start_time.as_ref());
        params.add_time("end_time", self.end_time.as_ref());
        params.add_bool("merge_metrics", self.merge_metrics);
        params.add_str("group_by", self.group_by.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

/// Filters for `GET v2.0/metrics/dimensions/names`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionNameQuery {
    pub metric_name: Option<String>,
    pub tenant_id: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for DimensionNameQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("metric_name", self.metric_name.as_deref());
        params.add_str("tenant_id", self.tenant_id.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

/// Filters for `GET v2.0/metrics/dimensions/names/values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionValueQuery {
    pub metric_name: Option<String>,
    pub dimension_name: Option<String>,
    pub tenant_id: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for DimensionValueQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("metric_name", self.metric_name.as_deref());
        params.add_str("dimension_name", self.dimension_name.as_deref());
        params.add_str("tenant_id", self.tenant_id.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

// ============ Notification methods ============

/// Filters for `GET v2.0/notification-methods`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub sort_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<i64>,
}

impl ToQueryParams for NotificationQuery {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add_str("sort_by", self.sort_by.as_deref());
        params.add_str("offset", self.offset.as_deref());
        params.add_int("limit", self.limit);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dims(pairs: &[(&str, &str)]) -> Dimensions {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    // ---- encode_dimensions ----

    #[test]
    fn dimensions_sorted_by_key() {
        assert_eq!(encode_dimensions(&dims(&[("b", "2"), ("a", "1")])), "a:1,b:2");
    }

    #[test]
    fn dimensions_independent_of_insertion_order() {
        let forward = dims(&[("hostname", "h1"), ("service", "monitoring"), ("az", "1")]);
        let mut backward = Dimensions::new();
        backward.insert("az".into(), "1".into());
        backward.insert("service".into(), "monitoring".into());
        backward.insert("hostname".into(), "h1".into());
        assert_eq!(encode_dimensions(&forward), encode_dimensions(&backward));
        assert_eq!(
            encode_dimensions(&forward),
            "az:1,hostname:h1,service:monitoring"
        );
    }

    #[test]
    fn dimensions_sort_on_key_not_pair_text() {
        // "a-b:2" < "a:1" as text, but key "a" < "a-b"
        assert_eq!(
            encode_dimensions(&dims(&[("a-b", "2"), ("a", "1")])),
            "a:1,a-b:2"
        );
    }

    #[test]
    fn empty_dimensions_are_omitted() {
        let mut params = QueryParams::new();
        params.add_dimensions(Some(&Dimensions::new()));
        params.add_dimensions(None);
        assert!(params.is_empty());
    }

    // ---- field kinds ----

    #[test]
    fn unset_fields_are_omitted() {
        assert!(AlarmQuery::default().to_query_params().is_empty());
        assert!(AlarmDefinitionQuery::default().to_query_params().is_empty());
        assert!(MetricQuery::default().to_query_params().is_empty());
        assert!(StatisticQuery::default().to_query_params().is_empty());
        assert!(MeasurementQuery::default().to_query_params().is_empty());
        assert!(DimensionNameQuery::default().to_query_params().is_empty());
        assert!(DimensionValueQuery::default().to_query_params().is_empty());
        assert!(NotificationQuery::default().to_query_params().is_empty());
    }

    #[test]
    fn missing_descriptor_means_no_filters() {
        let none: Option<&MetricQuery> = None;
        assert!(none.to_query_params().is_empty());
    }

    #[test]
    fn only_set_fields_are_emitted() {
        let query = AlarmQuery {
            state: Some("ALARM".into()),
            limit: Some(5),
            ..Default::default()
        };
        let params = query.to_query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("state"), Some("ALARM"));
        assert_eq!(params.get("limit"), Some("5"));
        assert!(!params.contains("severity"));
    }

    #[test]
    fn statistic_query_kinds() {
        let query = StatisticQuery {
            name: Some("cpu.idle_perc".into()),
            statistics: Some("avg,max".into()),
            start_time: Some(Utc.with_ymd_and_hms(2017, 1, 2, 3, 4, 5).unwrap()),
            period: Some(300),
            merge_metrics: Some(true),
            dimensions: Some(dims(&[("hostname", "devstack")])),
            ..Default::default()
        };
        let params = query.to_query_params();
        assert_eq!(params.get("name"), Some("cpu.idle_perc"));
        assert_eq!(params.get("statistics"), Some("avg,max"));
        assert_eq!(params.get("start_time"), Some("2017-01-02T03:04:05Z"));
        assert_eq!(params.get("period"), Some("300"));
        assert_eq!(params.get("merge_metrics"), Some("true"));
        assert_eq!(params.get("dimensions"), Some("hostname:devstack"));
        assert!(!params.contains("end_time"));
    }

    #[test]
    fn alarm_metric_dimensions_use_dimensions_param() {
        let query = AlarmQuery {
            metric_dimensions: Some(dims(&[("b", "2"), ("a", "1")])),
            ..Default::default()
        };
        assert_eq!(query.to_query_params().get("dimensions"), Some("a:1,b:2"));
    }

    #[test]
    fn false_bool_is_still_sent() {
        let query = MeasurementQuery {
            merge_metrics: Some(false),
            ..Default::default()
        };
        assert_eq!(query.to_query_params().get("merge_metrics"), Some("false"));
    }

    #[test]
    fn iter_is_alphabetical_with_repeats_in_order() {
        let mut params = QueryParams::new();
        params.add("z", "1");
        params.add("a", "2");
        params.add("z", "0");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "2"), ("z", "1"), ("z", "0")]);
    }
}
