use crate::config::RadarOptions;
use crate::models::{ChartProps, QueryData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarProps {
    pub width: f64,
    pub height: f64,
    pub data: QueryData,
    pub color_scheme: Option<String>,
    pub number_format: Option<String>,
    pub radar_scale: Option<String>,
    pub radar_fill_area: bool,
    pub radar_line_smooth: bool,
    pub radar_show_legend: bool,
    pub radar_levels: Option<f64>,
    pub radar_label_dist: Option<f64>,
    pub radar_label_wrap: Option<f64>,
    pub chart_id: Option<i64>,
}

pub fn transform(props: &ChartProps, opts: &RadarOptions) -> RadarProps {
    RadarProps {
        width: props.width,
        height: props.height,
        data: props.payload.data.clone(),
        color_scheme: opts.color_scheme.clone(),
        number_format: opts.number_format.clone(),
        radar_scale: opts.radar_scale.clone(),
        radar_fill_area: opts.radar_fill_area,
        radar_line_smooth: opts.radar_line_smooth,
        radar_show_legend: opts.radar_show_legend,
        radar_levels: opts.radar_levels,
        radar_label_dist: opts.radar_label_dist,
        radar_label_wrap: opts.radar_label_wrap,
        chart_id: opts.slice_id,
    }
}
