use chart_props::models::{Datasource, QueryData, value_as_f64};
use chart_props::{ChartConfig, ChartError, ChartKind, ChartProps, MetricRef, Rgba};
use serde_json::json;

#[test]
fn rgba_channels_accept_string_or_number() {
    let c: Rgba = serde_json::from_str(r#"{"r":"12","g":34,"b":56.0}"#).unwrap();
    assert_eq!((c.r, c.g, c.b), (12, 34, 56));
    assert_eq!(c.a, 1.0);
    assert_eq!(c.to_hex(), "#0c2238");

    assert!(serde_json::from_str::<Rgba>(r#"{"r":-1,"g":0,"b":0}"#).is_err());
    assert!(serde_json::from_str::<Rgba>(r#"{"r":"red","g":0,"b":0}"#).is_err());
}

#[test]
fn metric_ref_is_name_or_labeled_object() {
    let m: MetricRef = serde_json::from_value(json!("sum__num")).unwrap();
    assert_eq!(m, MetricRef::from("sum__num"));
    assert_eq!(m.name(), Some("sum__num"));

    let m: MetricRef = serde_json::from_value(json!({
        "label": "SUM(num)",
        "expressionType": "SIMPLE",
        "column": {"column_name": "num"}
    }))
    .unwrap();
    assert_eq!(m.name(), Some("SUM(num)"));
    // extra keys survive a round trip to the renderer
    assert_eq!(serde_json::to_value(&m).unwrap()["expressionType"], json!("SIMPLE"));

    let adhoc = json!({"expressionType": "SQL", "sqlExpression": "SUM(num)"});
    let m: MetricRef = serde_json::from_value(adhoc.clone()).unwrap();
    assert_eq!(m, MetricRef::Other(adhoc.clone()));
    assert_eq!(m.name(), None);
    assert_eq!(serde_json::to_value(&m).unwrap(), adhoc);
}

#[test]
fn malformed_optional_settings_degrade_instead_of_failing() {
    let ChartConfig::BigNumberTotal(o) = ChartConfig::resolve(
        ChartKind::BigNumberTotal,
        &json!({"steps": {"value": [0], "color": ["red"]}}),
    )
    .unwrap() else {
        panic!("wrong variant")
    };
    assert_eq!(o.steps, "");

    let ChartConfig::PivotTable(o) = ChartConfig::resolve(
        ChartKind::PivotTable,
        &json!({"jsonParameter": [1, 2], "jsonParameter2": 7}),
    )
    .unwrap() else {
        panic!("wrong variant")
    };
    assert_eq!(o.json_parameter, "");
    assert_eq!(o.json_parameter2, "");

    let ChartConfig::Radar(o) = ChartConfig::resolve(
        ChartKind::Radar,
        &json!({"radarLevels": "auto", "radarLabelDist": {"x": 1}, "radarLabelWrap": "12"}),
    )
    .unwrap() else {
        panic!("wrong variant")
    };
    assert_eq!(o.radar_levels, None);
    assert_eq!(o.radar_label_dist, None);
    assert_eq!(o.radar_label_wrap, Some(12.0));
}

#[test]
fn numeric_cells_include_numeric_strings() {
    assert_eq!(value_as_f64(&json!(3)), Some(3.0));
    assert_eq!(value_as_f64(&json!(" 2.5 ")), Some(2.5));
    assert_eq!(value_as_f64(&json!("n/a")), None);
    assert_eq!(value_as_f64(&json!(null)), None);
    assert_eq!(value_as_f64(&json!(true)), None);
}

#[test]
fn chart_props_defaults_optional_sections() {
    let props: ChartProps = serde_json::from_value(json!({
        "width": 10, "height": 20,
        "payload": {"data": [{"a": 1}]}
    }))
    .unwrap();
    assert_eq!(props.datasource, Datasource::default());
    assert!(props.form_data.is_null());
    assert_eq!(props.payload.data.rows().map(<[_]>::len), Some(1));
    assert!(matches!(props.kind(), Err(ChartError::MissingVizType)));

    let table: QueryData =
        serde_json::from_value(json!({"html": "<table/>", "columns": ["a"]})).unwrap();
    assert!(table.rows().is_none());
}

#[test]
fn form_data_resolves_by_viz_type() {
    let props: ChartProps = serde_json::from_value(json!({
        "width": 10, "height": 20,
        "formData": {"vizType": "big_number_total", "metric": "m", "compareLag": 3.7},
        "payload": {"data": []}
    }))
    .unwrap();
    assert_eq!(props.kind().unwrap(), ChartKind::BigNumberTotal);
    let ChartConfig::BigNumberTotal(opts) = props.resolve().unwrap() else {
        panic!("wrong variant")
    };
    assert_eq!(opts.compare_lag, 3);
    assert_eq!(opts.metric.as_ref().and_then(MetricRef::name), Some("m"));
}

#[test]
fn mistyped_option_is_reported_with_its_kind() {
    let err = ChartConfig::resolve(ChartKind::Radar, &json!({"radarFillArea": "yes"})).unwrap_err();
    assert!(err.to_string().starts_with("invalid options for radar"));
}
