use crate::config::SunburstOptions;
use crate::models::{ChartProps, MetricRef, QueryData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunburstProps {
    pub width: f64,
    pub height: f64,
    pub data: QueryData,
    pub color_scheme: Option<String>,
    /// `[metric, secondaryMetric]`; the secondary metric colors the arcs.
    pub metrics: [Option<MetricRef>; 2],
    pub compare_suffix: Option<String>,
    pub number_format: Option<String>,
}

pub fn transform(props: &ChartProps, opts: &SunburstOptions) -> SunburstProps {
    SunburstProps {
        width: props.width,
        height: props.height,
        data: props.payload.data.clone(),
        color_scheme: opts.color_scheme.clone(),
        metrics: [opts.metric.clone(), opts.secondary_metric.clone()],
        compare_suffix: opts.compare_suffix.clone(),
        number_format: opts.number_format.clone(),
    }
}
