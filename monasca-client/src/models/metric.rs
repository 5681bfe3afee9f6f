use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Envelope;
use crate::query::Dimensions;

/// Metric definition as returned by `GET v2.0/metrics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dimensions: Dimensions,
}

pub type MetricsResponse = Envelope<Metric>;

/// Body of `POST v2.0/metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRequestBody {
    pub name: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_meta: Option<HashMap<String, String>>,
}

/// One series of `GET v2.0/metrics/statistics`.
///
/// Each row of `statistics` lines up with `columns`; the first column is
/// normally `timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub statistics: Vec<Vec<Value>>,
}

pub type StatisticsResponse = Envelope<Statistic>;

/// One series of `GET v2.0/metrics/measurements`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub measurements: Vec<Vec<Value>>,
}

pub type MeasurementsResponse = Envelope<Measurement>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionName {
    pub dimension_name: String,
}

pub type DimensionNamesResponse = Envelope<DimensionName>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionValue {
    pub dimension_value: String,
}

pub type DimensionValuesResponse = Envelope<DimensionValue>;
