//! Country Map: region data with a display name for the metric.

use crate::config::CountryMapOptions;
use crate::models::{ChartProps, Datasource, MetricRef, QueryData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMapProps {
    pub width: f64,
    pub height: f64,
    pub data: QueryData,
    pub country: Option<String>,
    pub linear_color_scheme: Option<String>,
    pub number_format: Option<String>,
    #[serde(rename = "metric_name")]
    pub metric_name: String,
}

/// Human readable metric name: the verbose name of a bare metric id, the label of a
/// labeled metric, otherwise the id itself. `"Metric"` when no usable metric is configured.
pub fn metric_display_name(metric: Option<&MetricRef>, datasource: &Datasource) -> String {
    match metric {
        Some(MetricRef::Name(id)) => datasource
            .verbose_map
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.clone()),
        Some(MetricRef::Labeled { label, .. }) => label.clone(),
        Some(MetricRef::Other(_)) | None => "Metric".to_string(),
    }
}

pub fn transform(props: &ChartProps, opts: &CountryMapOptions) -> CountryMapProps {
    CountryMapProps {
        width: props.width,
        height: props.height,
        data: props.payload.data.clone(),
        country: opts.select_country.clone(),
        linear_color_scheme: opts.linear_color_scheme.clone(),
        number_format: opts.number_format.clone(),
        metric_name: metric_display_name(opts.metric.as_ref(), &props.datasource),
    }
}
