//! Metric, statistics, measurement and dimension endpoints against a mock server.

mod common;

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use common::MockServer;
use monasca_client::{
    DimensionNameQuery, DimensionValueQuery, MeasurementQuery, MetricQuery, MetricRequestBody,
    MonascaError, StatisticQuery,
};

#[tokio::test]
async fn get_metrics_returns_elements() {
    let server = MockServer::respond(
        200,
        r#"{"links":[],"elements":[{"name":"cpu","dimensions":{"hostname":"h1"}}]}"#,
    )
    .await;
    let query = MetricQuery {
        name: Some("cpu".to_string()),
        start_time: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        ..Default::default()
    };
    let metrics = require_ok!(server.client().get_metrics(Some(&query)).await);

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].name, "cpu");
    assert_eq!(metrics[0].dimensions["hostname"], "h1");

    let request = server.request().await;
    assert_eq!(
        request.target,
        "/v2.0/metrics?name=cpu&start_time=2024-01-02T03%3A04%3A05Z"
    );
}

#[tokio::test]
async fn create_metric_posts_body_and_tenant() {
    let server = MockServer::respond(204, "").await;
    let metric = MetricRequestBody {
        name: "cpu.idle_perc".to_string(),
        dimensions: HashMap::from([("hostname".to_string(), "h1".to_string())]),
        timestamp: 1_430_000_000_000,
        value: 97.5,
        value_meta: None,
    };
    let result = server.client().create_metric(Some("tenant-1"), &metric).await;
    assert_eq!(result, Ok(()));

    let request = server.request().await;
    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/v2.0/metrics?tenant_id=tenant-1");
    let body = request.json_body();
    assert_eq!(body["name"], "cpu.idle_perc");
    assert_eq!(body["timestamp"], 1_430_000_000_000_i64);
    assert_eq!(body["value"], 97.5);
    assert!(body.get("value_meta").is_none());
}

#[tokio::test]
async fn create_metrics_posts_array() {
    let server = MockServer::respond(204, "").await;
    let metrics = vec![
        MetricRequestBody {
            name: "a".to_string(),
            timestamp: 1,
            value: 1.0,
            ..Default::default()
        },
        MetricRequestBody {
            name: "b".to_string(),
            timestamp: 2,
            value: 2.0,
            ..Default::default()
        },
    ];
    require_ok!(server.client().create_metrics(None, &metrics).await);

    let request = server.request().await;
    assert_eq!(request.target, "/v2.0/metrics");
    let body = request.json_body();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["name"], "b");
}

#[tokio::test]
async fn statistics_query() {
    let server = MockServer::respond(
        200,
        r#"{"links":[],"elements":[{"id":"0","name":"cpu","dimensions":{},
            "columns":["timestamp","avg"],
            "statistics":[["2024-01-02T03:00:00Z",12.5]]}]}"#,
    )
    .await;
    let query = StatisticQuery {
        name: Some("cpu".to_string()),
        statistics: Some("avg".to_string()),
        period: Some(300),
        merge_metrics: Some(true),
        ..Default::default()
    };
    let response = require_ok!(server.client().get_statistics(Some(&query)).await);
    let stat = &response.elements[0];
    assert_eq!(stat.columns, vec!["timestamp", "avg"]);
    assert_eq!(stat.statistics[0][1], 12.5);

    let request = server.request().await;
    assert_eq!(request.path(), "/v2.0/metrics/statistics");
    assert_eq!(
        request.query(),
        Some("merge_metrics=true&name=cpu&period=300&statistics=avg")
    );
}

#[tokio::test]
async fn measurements_query() {
    let server = MockServer::respond(
        200,
        r#"{"elements":[{"name":"cpu","dimensions":{"hostname":"h1"},
            "columns":["timestamp","value","value_meta"],
            "measurements":[["2024-01-02T03:00:00.000Z",1.0,{}]]}]}"#,
    )
    .await;
    let query = MeasurementQuery {
        name: Some("cpu".to_string()),
        group_by: Some("*".to_string()),
        ..Default::default()
    };
    let response = require_ok!(server.client().get_measurements(Some(&query)).await);
    assert_eq!(response.elements[0].measurements.len(), 1);

    let request = server.request().await;
    assert_eq!(request.target, "/v2.0/metrics/measurements?group_by=*&name=cpu");
}

#[tokio::test]
async fn dimension_names_and_values() {
    let server = MockServer::respond(
        200,
        r#"{"elements":[{"dimension_name":"hostname"},{"dimension_name":"service"}]}"#,
    )
    .await;
    let query = DimensionNameQuery {
        metric_name: Some("cpu".to_string()),
        ..Default::default()
    };
    let names = require_ok!(server.client().get_dimension_names(Some(&query)).await);
    assert_eq!(names, vec!["hostname", "service"]);
    assert_eq!(
        server.request().await.target,
        "/v2.0/metrics/dimensions/names?metric_name=cpu"
    );

    let server = MockServer::respond(200, r#"{"elements":[{"dimension_value":"h1"}]}"#).await;
    let query = DimensionValueQuery {
        dimension_name: Some("hostname".to_string()),
        ..Default::default()
    };
    let values = require_ok!(server.client().get_dimension_values(Some(&query)).await);
    assert_eq!(values, vec!["h1"]);
    assert_eq!(
        server.request().await.target,
        "/v2.0/metrics/dimensions/names/values?dimension_name=hostname"
    );
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::respond(200, r#"{"elements":"nope"}"#).await;
    let err = server.client().get_metrics(None).await.unwrap_err();
    assert!(matches!(err, MonascaError::Decode(_)), "got {err:?}");
}
