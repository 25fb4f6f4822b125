//! Pivot Table: pre-rendered HTML plus the display settings the table renderer applies.

use crate::config::PivotTableOptions;
use crate::error::StepParseError;
use crate::models::{ChartProps, QueryData};
use crate::steps::{CategoryClasses, StepConfig, parse_category_classes, parse_step_config};
use serde::Serialize;
use std::collections::BTreeMap;

/// Cell format used when neither the column nor the chart names one.
pub const DEFAULT_CELL_FORMAT: &str = ".3s";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTableProps {
    pub height: f64,
    pub data: QueryData,
    pub column_formats: BTreeMap<String, String>,
    pub num_groups: usize,
    pub number_format: Option<String>,
    pub verbose_map: BTreeMap<String, String>,
    pub json_parameter: String,
    pub json_parameter2: String,
    pub show_progress_bar: bool,
    pub align_positive_negative: bool,
    pub color_positive_negative: bool,
}

impl PivotTableProps {
    /// Number format for a metric column: its own format, then the chart's, then `.3s`.
    pub fn cell_format(&self, column: &str) -> &str {
        self.column_formats
            .get(column)
            .map(String::as_str)
            .or(self.number_format.as_deref().filter(|f| !f.is_empty()))
            .unwrap_or(DEFAULT_CELL_FORMAT)
    }

    /// Header text for a column or row key.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.verbose_map.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Value-range classes from `jsonParameter`.
    pub fn range_classes(&self) -> Result<StepConfig, StepParseError> {
        parse_step_config(&self.json_parameter)
    }

    /// Row-header classes from `jsonParameter2`.
    pub fn category_classes(&self) -> Result<Option<CategoryClasses>, StepParseError> {
        parse_category_classes(&self.json_parameter2)
    }
}

pub fn transform(props: &ChartProps, opts: &PivotTableOptions) -> PivotTableProps {
    PivotTableProps {
        height: props.height,
        data: props.payload.data.clone(),
        column_formats: props.datasource.column_formats.clone(),
        num_groups: opts.groupby.len(),
        number_format: opts.number_format.clone(),
        verbose_map: props.datasource.verbose_map.clone(),
        json_parameter: opts.json_parameter.clone(),
        json_parameter2: opts.json_parameter2.clone(),
        show_progress_bar: opts.show_progress_bar,
        align_positive_negative: opts.align_pn,
        color_positive_negative: opts.color_pn,
    }
}
