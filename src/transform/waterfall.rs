//! Waterfall: period-over-period bars with fixed total/positive/negative colors.

use crate::config::WaterfallOptions;
use crate::models::{ChartProps, QueryData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallProps {
    pub width: f64,
    pub height: f64,
    pub data: QueryData,
    pub number_format: Option<String>,
    pub chart_id: Option<i64>,
    #[serde(rename = "ColorTotal")]
    pub color_total: String,
    #[serde(rename = "ColorPositive")]
    pub color_positive: String,
    #[serde(rename = "ColorNegative")]
    pub color_negative: String,
    pub date_time_format: Option<String>,
    pub waterfall_label_rotate: Option<f64>,
    /// Number of periods between the compared bars.
    pub waterfall_time_shift: u32,
    pub waterfall_hide_control: bool,
}

pub fn transform(props: &ChartProps, opts: &WaterfallOptions) -> WaterfallProps {
    WaterfallProps {
        width: props.width,
        height: props.height,
        data: props.payload.data.clone(),
        number_format: opts.number_format.clone(),
        chart_id: opts.slice_id,
        color_total: opts.waterfall_color_total.to_hex(),
        color_positive: opts.waterfall_color_positive.to_hex(),
        color_negative: opts.waterfall_color_negative.to_hex(),
        date_time_format: opts.date_time_format.clone(),
        waterfall_label_rotate: opts.waterfall_label_rotate,
        waterfall_time_shift: opts.waterfall_time_shift,
        waterfall_hide_control: opts.waterfall_hide_control,
    }
}
