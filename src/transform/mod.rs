//! Props transforms: chart request + query result -> the props a renderer consumes.
//!
//! Every transform is a pure function of its inputs. Field names of the produced props are
//! the renderer contract and serialize exactly as the renderers read them.
//!
//! ```
//! use chart_props::{ChartProps, Formatters, RenderProps, transform_props};
//! use serde_json::json;
//!
//! let props: ChartProps = serde_json::from_value(json!({
//!     "width": 400, "height": 300,
//!     "formData": {"vizType": "big_number", "metric": "sales", "compareLag": 1},
//!     "payload": {"data": [
//!         {"__timestamp": 1, "sales": 10},
//!         {"__timestamp": 2, "sales": 20}
//!     ]}
//! }))?;
//! let RenderProps::BigNumber(out) = transform_props(&props, &Formatters::default())? else {
//!     unreachable!()
//! };
//! assert_eq!(out.big_number, Some(20.0));
//! assert_eq!(out.subheader, "+100.0%");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod big_number;
pub mod country_map;
pub mod pivot_table;
pub mod radar;
pub mod sankey;
pub mod sunburst;
pub mod waterfall;

pub use big_number::{BigNumberProps, Comparison, SignClass, TrendTooltip};
pub use country_map::CountryMapProps;
pub use pivot_table::PivotTableProps;
pub use radar::RadarProps;
pub use sankey::SankeyProps;
pub use sunburst::SunburstProps;
pub use waterfall::WaterfallProps;

use crate::config::{ChartConfig, ChartKind};
use crate::error::ChartError;
use crate::format::Formatters;
use crate::models::ChartProps;
use serde::Serialize;

/// Renderer input for one chart. Serializes as the inner props object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderProps {
    BigNumber(BigNumberProps),
    CountryMap(CountryMapProps),
    PivotTable(PivotTableProps),
    Sankey(SankeyProps),
    Sunburst(SunburstProps),
    Radar(RadarProps),
    Waterfall(WaterfallProps),
}

/// Transform a chart request for the kind named in `formData.vizType`.
pub fn transform_props(
    props: &ChartProps,
    formatters: &Formatters,
) -> Result<RenderProps, ChartError> {
    transform_props_as(props.kind()?, props, formatters)
}

/// Transform a chart request for an explicitly chosen kind.
pub fn transform_props_as(
    kind: ChartKind,
    props: &ChartProps,
    formatters: &Formatters,
) -> Result<RenderProps, ChartError> {
    let config = ChartConfig::resolve(kind, &props.form_data)?;
    log::debug!("transforming {} ({}x{})", kind, props.width, props.height);
    transform_config(&config, props, formatters)
}

/// Transform with an already resolved configuration.
pub fn transform_config(
    config: &ChartConfig,
    props: &ChartProps,
    formatters: &Formatters,
) -> Result<RenderProps, ChartError> {
    Ok(match config {
        ChartConfig::BigNumber(o) => RenderProps::BigNumber(big_number::transform(
            props,
            ChartKind::BigNumber,
            o,
            formatters,
        )?),
        ChartConfig::BigNumberTotal(o) => RenderProps::BigNumber(big_number::transform(
            props,
            ChartKind::BigNumberTotal,
            o,
            formatters,
        )?),
        ChartConfig::CountryMap(o) => RenderProps::CountryMap(country_map::transform(props, o)),
        ChartConfig::PivotTable(o) => RenderProps::PivotTable(pivot_table::transform(props, o)),
        ChartConfig::Sankey(o) => RenderProps::Sankey(sankey::transform(props, o)),
        ChartConfig::Sunburst(o) => RenderProps::Sunburst(sunburst::transform(props, o)),
        ChartConfig::Radar(o) => RenderProps::Radar(radar::transform(props, o)),
        ChartConfig::Waterfall(o) => RenderProps::Waterfall(waterfall::transform(props, o)),
    })
}
