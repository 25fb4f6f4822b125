//! Typed chart configuration.
//!
//! `formData` arrives as an untyped bag of control values. [`ChartConfig::resolve`] turns it
//! into one options struct per chart kind, with every recognized key and its default spelled
//! out, so transforms never poke at raw JSON.

use crate::error::ChartError;
use crate::models::{
    ChartProps, MetricRef, Rgba, de_lag, de_lenient_string, de_null_default, de_opt_f64_lenient,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Chart types with a props transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Headline number with an optional trend line and period-over-period change.
    BigNumber,
    /// Headline number of the first row, optionally colored by value steps.
    BigNumberTotal,
    CountryMap,
    PivotTable,
    Sankey,
    Sunburst,
    Radar,
    Waterfall,
}

impl ChartKind {
    pub const ALL: [ChartKind; 8] = [
        ChartKind::BigNumber,
        ChartKind::BigNumberTotal,
        ChartKind::CountryMap,
        ChartKind::PivotTable,
        ChartKind::Sankey,
        ChartKind::Sunburst,
        ChartKind::Radar,
        ChartKind::Waterfall,
    ];

    /// The `vizType` string the chart is registered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::BigNumber => "big_number",
            ChartKind::BigNumberTotal => "big_number_total",
            ChartKind::CountryMap => "country_map",
            ChartKind::PivotTable => "pivot_table",
            ChartKind::Sankey => "sankey",
            ChartKind::Sunburst => "sunburst",
            ChartKind::Radar => "radar",
            ChartKind::Waterfall => "waterfall",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| ChartError::UnknownChartKind(s.to_string()))
    }
}

/// Which number decides the positive/negative styling of a Big Number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignSource {
    /// Sign of the period-over-period change (always 0 without a comparison).
    #[default]
    PercentChange,
    /// Sign of the displayed number.
    Value,
}

/// Series type drawn under a Big Number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendChart {
    #[default]
    Area,
    Bar,
    Line,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BigNumberOptions {
    pub metric: Option<MetricRef>,
    pub color_picker: Option<Rgba>,
    pub fill_color_picker: Option<Rgba>,
    #[serde(deserialize_with = "de_lag")]
    pub compare_lag: u32,
    #[serde(deserialize_with = "de_null_default")]
    pub compare_suffix: String,
    #[serde(deserialize_with = "de_null_default")]
    pub subheader: String,
    #[serde(deserialize_with = "de_null_default")]
    pub show_trend_line: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub start_y_axis_at_zero: bool,
    pub y_axis_format: Option<String>,
    pub date_time_format: Option<String>,
    #[serde(deserialize_with = "de_null_default")]
    pub fill_background: bool,
    /// Show the delta to the comparison value instead of the value itself.
    #[serde(deserialize_with = "de_null_default")]
    pub show_perc: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub select_chart: TrendChart,
    /// Color-step JSON (see `steps`); only read by the total variant.
    #[serde(deserialize_with = "de_lenient_string")]
    pub steps: String,
    #[serde(deserialize_with = "de_null_default")]
    pub sign_source: SignSource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryMapOptions {
    pub metric: Option<MetricRef>,
    pub linear_color_scheme: Option<String>,
    pub number_format: Option<String>,
    pub select_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PivotTableOptions {
    #[serde(deserialize_with = "de_null_default")]
    pub groupby: Vec<Value>,
    pub number_format: Option<String>,
    /// Range-class JSON, `{"range": [...], "classname": [...]}`.
    #[serde(deserialize_with = "de_lenient_string")]
    pub json_parameter: String,
    /// Category-class JSON, `{"keys": [...], "classname": [...]}`.
    #[serde(deserialize_with = "de_lenient_string")]
    pub json_parameter2: String,
    #[serde(deserialize_with = "de_null_default")]
    pub show_progress_bar: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub align_pn: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub color_pn: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SankeyOptions {
    pub color_scheme: Option<String>,
    pub number_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SunburstOptions {
    pub color_scheme: Option<String>,
    pub metric: Option<MetricRef>,
    pub secondary_metric: Option<MetricRef>,
    pub compare_suffix: Option<String>,
    pub number_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadarOptions {
    pub color_scheme: Option<String>,
    pub number_format: Option<String>,
    /// `min`, `middle` or `max`.
    pub radar_scale: Option<String>,
    #[serde(deserialize_with = "de_null_default")]
    pub radar_fill_area: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub radar_line_smooth: bool,
    #[serde(deserialize_with = "de_null_default")]
    pub radar_show_legend: bool,
    #[serde(deserialize_with = "de_opt_f64_lenient")]
    pub radar_levels: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64_lenient")]
    pub radar_label_dist: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64_lenient")]
    pub radar_label_wrap: Option<f64>,
    pub slice_id: Option<i64>,
}

/// Waterfall options. The three colors have no default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallOptions {
    #[serde(default)]
    pub number_format: Option<String>,
    #[serde(default)]
    pub slice_id: Option<i64>,
    pub waterfall_color_total: Rgba,
    pub waterfall_color_positive: Rgba,
    pub waterfall_color_negative: Rgba,
    #[serde(default)]
    pub date_time_format: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub waterfall_label_rotate: Option<f64>,
    #[serde(default, deserialize_with = "de_lag")]
    pub waterfall_time_shift: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub waterfall_hide_control: bool,
}

/// `formData` resolved for one chart kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartConfig {
    BigNumber(BigNumberOptions),
    BigNumberTotal(BigNumberOptions),
    CountryMap(CountryMapOptions),
    PivotTable(PivotTableOptions),
    Sankey(SankeyOptions),
    Sunburst(SunburstOptions),
    Radar(RadarOptions),
    Waterfall(WaterfallOptions),
}

fn options<T: serde::de::DeserializeOwned>(
    kind: ChartKind,
    form_data: &Value,
) -> Result<T, ChartError> {
    // an absent formData behaves like an empty one
    let form_data = match form_data {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(form_data).map_err(|source| ChartError::InvalidOptions {
        kind: kind.as_str(),
        source,
    })
}

impl ChartConfig {
    /// Resolve raw `formData` for `kind`. Unknown keys are ignored.
    pub fn resolve(kind: ChartKind, form_data: &Value) -> Result<Self, ChartError> {
        Ok(match kind {
            ChartKind::BigNumber => ChartConfig::BigNumber(options(kind, form_data)?),
            ChartKind::BigNumberTotal => ChartConfig::BigNumberTotal(options(kind, form_data)?),
            ChartKind::CountryMap => ChartConfig::CountryMap(options(kind, form_data)?),
            ChartKind::PivotTable => ChartConfig::PivotTable(options(kind, form_data)?),
            ChartKind::Sankey => ChartConfig::Sankey(options(kind, form_data)?),
            ChartKind::Sunburst => ChartConfig::Sunburst(options(kind, form_data)?),
            ChartKind::Radar => ChartConfig::Radar(options(kind, form_data)?),
            ChartKind::Waterfall => ChartConfig::Waterfall(options(kind, form_data)?),
        })
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfig::BigNumber(_) => ChartKind::BigNumber,
            ChartConfig::BigNumberTotal(_) => ChartKind::BigNumberTotal,
            ChartConfig::CountryMap(_) => ChartKind::CountryMap,
            ChartConfig::PivotTable(_) => ChartKind::PivotTable,
            ChartConfig::Sankey(_) => ChartKind::Sankey,
            ChartConfig::Sunburst(_) => ChartKind::Sunburst,
            ChartConfig::Radar(_) => ChartKind::Radar,
            ChartConfig::Waterfall(_) => ChartKind::Waterfall,
        }
    }
}

impl ChartProps {
    /// Chart kind named by `formData.vizType`.
    pub fn kind(&self) -> Result<ChartKind, ChartError> {
        self.form_data
            .get("vizType")
            .and_then(Value::as_str)
            .ok_or(ChartError::MissingVizType)?
            .parse()
    }

    /// Resolve `formData` for the chart kind it names.
    pub fn resolve(&self) -> Result<ChartConfig, ChartError> {
        ChartConfig::resolve(self.kind()?, &self.form_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_round_trip_through_their_names() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
        assert!(matches!(
            "line".parse::<ChartKind>(),
            Err(ChartError::UnknownChartKind(_))
        ));
    }

    #[test]
    fn big_number_defaults_and_coercions() {
        let cfg = ChartConfig::resolve(
            ChartKind::BigNumber,
            &json!({"metric": "sales", "compareLag": "2", "subheader": null, "vizType": "big_number"}),
        )
        .unwrap();
        let ChartConfig::BigNumber(o) = cfg else { panic!("wrong variant") };
        assert_eq!(o.compare_lag, 2);
        assert_eq!(o.subheader, "");
        assert_eq!(o.compare_suffix, "");
        assert_eq!(o.select_chart, TrendChart::Area);
        assert_eq!(o.sign_source, SignSource::PercentChange);
        assert_eq!(o.metric, Some(MetricRef::from("sales")));
    }

    #[test]
    fn bad_lag_reads_as_zero() {
        let ChartConfig::BigNumber(o) =
            ChartConfig::resolve(ChartKind::BigNumber, &json!({"compareLag": "abc"})).unwrap()
        else {
            panic!("wrong variant")
        };
        assert_eq!(o.compare_lag, 0);
    }

    #[test]
    fn waterfall_requires_its_colors() {
        let err = ChartConfig::resolve(ChartKind::Waterfall, &json!({"numberFormat": ".2f"}))
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidOptions { kind: "waterfall", .. }));
    }

    #[test]
    fn null_form_data_is_empty() {
        let cfg = ChartConfig::resolve(ChartKind::Sankey, &Value::Null).unwrap();
        assert_eq!(cfg, ChartConfig::Sankey(SankeyOptions::default()));
        assert_eq!(cfg.kind(), ChartKind::Sankey);
    }
}
