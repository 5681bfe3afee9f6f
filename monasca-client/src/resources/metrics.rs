//! `v2.0/metrics` and its statistics, measurements and dimension sub-resources.

use crate::client::MonascaClient;
use crate::error::Result;
use crate::models::{
    DimensionNamesResponse, DimensionValuesResponse, MeasurementsResponse, Metric,
    MetricRequestBody, MetricsResponse, StatisticsResponse,
};
use crate::query::{
    DimensionNameQuery, DimensionValueQuery, MeasurementQuery, MetricQuery, QueryParams,
    StatisticQuery, ToQueryParams,
};

use super::{
    DIMENSION_NAMES_PATH, DIMENSION_VALUES_PATH, MEASUREMENTS_PATH, METRICS_PATH,
    STATISTICS_PATH,
};

impl MonascaClient {
    /// Metric definitions matching `query`.
    pub async fn get_metrics(&self, query: Option<&MetricQuery>) -> Result<Vec<Metric>> {
        let response: MetricsResponse = self.get(METRICS_PATH, &query.to_query_params()).await?;
        Ok(response.into_elements())
    }

    /// Store one metric. `tenant_id` posts on behalf of another tenant.
    pub async fn create_metric(
        &self,
        tenant_id: Option<&str>,
        metric: &MetricRequestBody,
    ) -> Result<()> {
        self.post_no_content(METRICS_PATH, &tenant_params(tenant_id), metric)
            .await
    }

    /// Store several metrics in one request.
    pub async fn create_metrics(
        &self,
        tenant_id: Option<&str>,
        metrics: &[MetricRequestBody],
    ) -> Result<()> {
        self.post_no_content(METRICS_PATH, &tenant_params(tenant_id), &metrics)
            .await
    }

    /// Aggregated statistics; the whole envelope is returned.
    pub async fn get_statistics(
        &self,
        query: Option<&StatisticQuery>,
    ) -> Result<StatisticsResponse> {
        self.get(STATISTICS_PATH, &query.to_query_params()).await
    }

    /// Raw measurements; the whole envelope is returned.
    pub async fn get_measurements(
        &self,
        query: Option<&MeasurementQuery>,
    ) -> Result<MeasurementsResponse> {
        self.get(MEASUREMENTS_PATH, &query.to_query_params()).await
    }

    /// Dimension names in use, optionally restricted to one metric.
    pub async fn get_dimension_names(
        &self,
        query: Option<&DimensionNameQuery>,
    ) -> Result<Vec<String>> {
        let response: DimensionNamesResponse = self
            .get(DIMENSION_NAMES_PATH, &query.to_query_params())
            .await?;
        Ok(response
            .into_elements()
            .into_iter()
            .map(|d| d.dimension_name)
            .collect())
    }

    /// Values seen for one dimension name.
    pub async fn get_dimension_values(
        &self,
        query: Option<&DimensionValueQuery>,
    ) -> Result<Vec<String>> {
        let response: DimensionValuesResponse = self
            .get(DIMENSION_VALUES_PATH, &query.to_query_params())
            .await?;
        Ok(response
            .into_elements()
            .into_iter()
            .map(|d| d.dimension_value)
            .collect())
    }
}

fn tenant_params(tenant_id: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    params.add_str("tenant_id", tenant_id);
    params
}
