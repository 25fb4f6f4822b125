use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved row key holding the time index (epoch milliseconds).
pub const TIME_COLUMN: &str = "__timestamp";

/// One query-result row, keyed by column or metric name.
pub type Row = Map<String, Value>;

/// A chart render request as handed over by the chart framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    pub width: f64,
    pub height: f64,
    /// Flat bag of control values. Resolved into a typed `ChartConfig` once per call.
    #[serde(default)]
    pub form_data: Value,
    pub payload: Payload,
    #[serde(default)]
    pub datasource: Datasource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub data: QueryData,
}

/// The query result. Table-like renderers receive pre-rendered HTML instead of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryData {
    Rows(Vec<Row>),
    Table { html: String, columns: Vec<Value> },
    Other(Value),
}

impl QueryData {
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            QueryData::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Datasource {
    /// Internal column/metric id -> human readable name.
    pub verbose_map: BTreeMap<String, String>,
    /// Column/metric id -> number format id.
    pub column_formats: BTreeMap<String, String>,
}

/// A metric referenced either by bare name or by an object carrying a `label`.
/// Anything else (an adhoc metric without a label, a number) is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricRef {
    Name(String),
    Labeled {
        label: String,
        #[serde(flatten)]
        rest: Map<String, Value>,
    },
    Other(Value),
}

impl MetricRef {
    /// The key used to look the metric up in a row (`metric.label || metric`).
    /// `None` for an `Other` metric, which names no row key.
    pub fn name(&self) -> Option<&str> {
        match self {
            MetricRef::Name(n) => Some(n),
            MetricRef::Labeled { label, .. } => Some(label),
            MetricRef::Other(_) => None,
        }
    }
}

impl From<&str> for MetricRef {
    fn from(s: &str) -> Self {
        MetricRef::Name(s.to_string())
    }
}

/// Color-picker control value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    #[serde(deserialize_with = "de_u8_from_string_or_number")]
    pub r: u8,
    #[serde(deserialize_with = "de_u8_from_string_or_number")]
    pub g: u8,
    #[serde(deserialize_with = "de_u8_from_string_or_number")]
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// One `{x, y}` point of a trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Numeric value of a JSON cell. Numeric strings count; anything else is missing.
pub fn value_as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Serde helper: parse a color channel from a JSON number or a numeric string.
fn de_u8_from_string_or_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct ChannelVisitor;

    fn channel<E: de::Error>(v: f64) -> Result<u8, E> {
        if !(0.0..=255.0).contains(&v) {
            return Err(E::custom(format!("color channel out of range: {}", v)));
        }
        Ok(v.round() as u8)
    }

    impl<'de> Visitor<'de> for ChannelVisitor {
        type Value = u8;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a color channel between 0 and 255")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            channel(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            channel(v as f64)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            channel(v)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<f64>().map_err(E::custom).and_then(channel)
        }
    }

    deserializer.deserialize_any(ChannelVisitor)
}

/// Serde helper: optional number given as a JSON number, a numeric string, or null.
/// Blank strings read as absent; anything else non-numeric is dropped with a warning.
pub(crate) fn de_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => {
            let n = value_as_f64(&v);
            if n.is_none() {
                log::warn!("ignoring non-numeric option value {}", v);
            }
            n
        }
    })
}

/// Serde helper: a JSON-document option that must be a string. `null` reads as empty,
/// any other shape is dropped with a warning so the feature stays disabled.
pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            log::warn!("ignoring option that is not a string: {}", other);
            String::new()
        }
    })
}

/// Serde helper: `+input || 0` for lag-like options. Unparseable input becomes 0.
pub(crate) fn de_lag<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    let n = v.as_ref().and_then(value_as_f64).unwrap_or(0.0);
    if n.is_finite() && n > 0.0 {
        Ok(n.trunc() as u32)
    } else {
        Ok(0)
    }
}

/// Serde helper: explicit `null` reads as the type's default.
pub(crate) fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
