//! chart_props
//!
//! The data-transform layer of a dashboard charting frontend. Each chart type takes the
//! generic render request (size, user-configured `formData`, query payload, datasource
//! metadata) and produces the exact props its renderer consumes. Pairs with the
//! `chart-props` CLI.
//!
//! ### Features
//! - Typed per-chart configuration resolved once from the raw `formData` bag
//! - Big Number trend/compare logic, color steps and sign styling
//! - Pass-through transforms for Country Map, Pivot Table, Sankey, Sunburst, Radar, Waterfall
//! - Locale-bound number (d3-format style) and time formatters, passed in explicitly
//!
//! ### Example
//! ```no_run
//! use chart_props::{Formatters, storage, transform_props};
//!
//! let props = storage::load_chart_props("big_number.json")?;
//! let out = transform_props(&props, &Formatters::for_tag("ru"))?;
//! storage::save_json(&out, "big_number.props.json")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod steps;
pub mod storage;
pub mod transform;

pub use config::{ChartConfig, ChartKind};
pub use error::ChartError;
pub use format::Formatters;
pub use models::{ChartProps, MetricRef, QueryData, Rgba};
pub use transform::{RenderProps, transform_props, transform_props_as};
