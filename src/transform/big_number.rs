//! Big Number: a headline value, an optional period-over-period subheader and trend line.
//!
//! Two variants share this transform. `big_number` sorts the series by time, shows the most
//! recent value and can compare it with the value `compareLag` periods earlier.
//! `big_number_total` shows the first row's value and may recolor it through a step
//! configuration.

use crate::config::{BigNumberOptions, ChartKind, SignSource, TrendChart};
use crate::error::ChartError;
use crate::format::{Formatters, NumberFormatter, PERCENT_CHANGE_1_POINT, TimeFormatter};
use crate::models::{ChartProps, MetricRef, Row, TIME_COLUMN, TrendPoint, value_as_f64};
use crate::steps::StepConfig;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Positive/negative styling class. Serializes as its CSS class name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignClass {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl SignClass {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            SignClass::Positive
        } else if value < 0.0 {
            SignClass::Negative
        } else {
            SignClass::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignClass::Neutral => "",
            SignClass::Positive => "positive",
            SignClass::Negative => "negative",
        }
    }
}

impl Serialize for SignClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Tooltip for trend-line points, bound to the chart's value and time formatters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendTooltip {
    pub value: NumberFormatter,
    pub time: TimeFormatter,
}

impl TrendTooltip {
    pub fn render(&self, point: &TrendPoint) -> String {
        let date = point.x.map(|x| self.time.format_millis(x)).unwrap_or_default();
        let value = point.y.map(|y| self.value.format(y)).unwrap_or_default();
        format!(
            "<div style=\"padding: 4px 8px\">{}<br /><strong>{}</strong></div>",
            date, value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BigNumberProps {
    pub width: f64,
    pub height: f64,
    pub big_number: Option<f64>,
    pub class_name: SignClass,
    pub format_big_number: NumberFormatter,
    /// Left out when unset so the renderer's brand color applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_color: Option<String>,
    pub render_tooltip: TrendTooltip,
    pub show_trend_line: bool,
    pub start_y_axis_at_zero: bool,
    pub subheader: String,
    pub trend_line_data: Option<Vec<TrendPoint>>,
    pub fill_background: bool,
    pub show_perc: bool,
    pub select_chart: TrendChart,
}

/// The latest value set against the value `lag` periods earlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub compare_value: Option<f64>,
    /// `(latest - compare) / |compare|`, 0 when the compare value is 0.
    pub percent_change: Option<f64>,
}

/// Compare the last value of an ascending series with the one `lag` steps before it.
///
/// `None` when `lag` is 0 or the series is too short.
pub fn compare_with_lag(series: &[Option<f64>], lag: u32) -> Option<Comparison> {
    if lag == 0 {
        return None;
    }
    let index = series.len().checked_sub(lag as usize + 1)?;
    let latest = *series.last()?;
    let compare_value = series[index];
    let percent_change = match (latest, compare_value) {
        (_, Some(c)) if c == 0.0 => Some(0.0),
        (Some(l), Some(c)) => Some((l - c) / c.abs()),
        _ => None,
    };
    Some(Comparison {
        compare_value,
        percent_change,
    })
}

fn timestamp(row: &Row) -> Option<f64> {
    row.get(TIME_COLUMN).and_then(value_as_f64)
}

/// Rows in ascending `__timestamp` order. Rows without a timestamp sort first; ties keep
/// their original order.
pub fn sort_by_timestamp(rows: &[Row]) -> Vec<&Row> {
    let mut sorted: Vec<&Row> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        timestamp(a)
            .partial_cmp(&timestamp(b))
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

pub fn transform(
    props: &ChartProps,
    kind: ChartKind,
    opts: &BigNumberOptions,
    formatters: &Formatters,
) -> Result<BigNumberProps, ChartError> {
    let rows = props
        .payload
        .data
        .rows()
        .ok_or(ChartError::ExpectedRows { kind: kind.as_str() })?;
    let metric_name = opts.metric.as_ref().and_then(MetricRef::name);
    let metric = |row: &Row| metric_name.and_then(|m| row.get(m)).and_then(value_as_f64);

    let mut main_color = opts.color_picker.map(|c| c.to_hex());
    let negative_color = opts
        .fill_color_picker
        .map(|c| c.to_hex())
        .or_else(|| main_color.clone());

    let supports_trend_line = kind == ChartKind::BigNumber;
    let show_trend_line = supports_trend_line && opts.show_trend_line;

    let mut big_number;
    let mut percent_change = 0.0;
    let mut subheader = opts.subheader.clone();
    let mut trend_line_data = None;

    if supports_trend_line {
        let sorted = sort_by_timestamp(rows);
        let series: Vec<Option<f64>> = sorted.iter().copied().map(metric).collect();
        big_number = series.last().copied().flatten();

        if let Some(cmp) = compare_with_lag(&series, opts.compare_lag) {
            if let Some(pct) = cmp.percent_change {
                percent_change = pct;
                let fmt = formatters.number(Some(PERCENT_CHANGE_1_POINT));
                subheader = if opts.compare_suffix.is_empty() {
                    fmt.format(pct)
                } else {
                    format!("{} {}", fmt.format(pct), opts.compare_suffix)
                };
            }
            if opts.show_perc {
                big_number = big_number.zip(cmp.compare_value).map(|(b, c)| b - c);
            }
        }

        if show_trend_line {
            trend_line_data = Some(
                sorted
                    .into_iter()
                    .map(|r| TrendPoint {
                        x: timestamp(r),
                        y: metric(r),
                    })
                    .collect(),
            );
        }
    } else {
        big_number = rows.first().and_then(metric);
    }

    let sign_value = match opts.sign_source {
        SignSource::PercentChange => Some(percent_change),
        SignSource::Value => big_number,
    };
    let class_name = sign_value.map(SignClass::of).unwrap_or_default();
    if class_name == SignClass::Negative {
        main_color = negative_color;
    }

    if !supports_trend_line && let Some(value) = big_number {
        let steps = StepConfig::from_input_or_disabled(&opts.steps);
        if let Some(color) = steps.lookup(value) {
            main_color = Some(color.to_string());
        }
    }

    let format_value = formatters.number(opts.y_axis_format.as_deref());
    let format_time = formatters.time(opts.date_time_format.as_deref());

    Ok(BigNumberProps {
        width: props.width,
        height: props.height,
        big_number,
        class_name,
        format_big_number: format_value.clone(),
        main_color,
        render_tooltip: TrendTooltip {
            value: format_value,
            time: format_time,
        },
        show_trend_line,
        start_y_axis_at_zero: opts.start_y_axis_at_zero,
        subheader,
        trend_line_data,
        fill_background: opts.fill_background,
        show_perc: opts.show_perc,
        select_chart: opts.select_chart,
    })
}
