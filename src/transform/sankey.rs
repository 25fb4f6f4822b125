use crate::config::SankeyOptions;
use crate::models::{ChartProps, QueryData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyProps {
    pub width: f64,
    pub height: f64,
    pub data: QueryData,
    pub color_scheme: Option<String>,
    pub number_format: Option<String>,
}

pub fn transform(props: &ChartProps, opts: &SankeyOptions) -> SankeyProps {
    SankeyProps {
        width: props.width,
        height: props.height,
        data: props.payload.data.clone(),
        color_scheme: opts.color_scheme.clone(),
        number_format: opts.number_format.clone(),
    }
}
