use chart_props::config::{SignSource, TrendChart};
use chart_props::models::TrendPoint;
use chart_props::transform::{BigNumberProps, SignClass};
use chart_props::{ChartProps, Formatters, RenderProps, transform_props};
use serde_json::{Value, json};

fn props(form_data: Value, data: Value) -> ChartProps {
    serde_json::from_value(json!({
        "width": 400,
        "height": 300,
        "formData": form_data,
        "payload": { "data": data },
    }))
    .unwrap()
}

fn run(form_data: Value, data: Value) -> BigNumberProps {
    match transform_props(&props(form_data, data), &Formatters::default()).unwrap() {
        RenderProps::BigNumber(p) => p,
        other => panic!("expected big number props, got {:?}", other),
    }
}

fn sales() -> Value {
    // deliberately out of order
    json!([
        {"__timestamp": 2, "sales": 20},
        {"__timestamp": 1, "sales": 10},
    ])
}

#[test]
fn latest_value_without_comparison() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "showTrendLine": true, "subheader": "YTD"}),
        sales(),
    );
    assert_eq!(out.big_number, Some(20.0));
    assert_eq!(out.subheader, "YTD");
    assert_eq!(out.class_name, SignClass::Neutral);
    assert!(out.show_trend_line);
    assert_eq!(
        out.trend_line_data,
        Some(vec![
            TrendPoint { x: Some(1.0), y: Some(10.0) },
            TrendPoint { x: Some(2.0), y: Some(20.0) },
        ])
    );
}

#[test]
fn trend_line_is_omitted_unless_enabled() {
    let out = run(json!({"vizType": "big_number", "metric": "sales"}), sales());
    assert!(!out.show_trend_line);
    assert_eq!(out.trend_line_data, None);
}

#[test]
fn labeled_metric_resolves_like_bare_name() {
    let bare = run(json!({"vizType": "big_number", "metric": "sales", "compareLag": 1}), sales());
    let labeled = run(
        json!({"vizType": "big_number", "metric": {"label": "sales", "expressionType": "SIMPLE"}, "compareLag": 1}),
        sales(),
    );
    assert_eq!(bare.big_number, labeled.big_number);
    assert_eq!(bare.subheader, labeled.subheader);
}

#[test]
fn compare_lag_formats_percent_change() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": 1, "compareSuffix": "WoW"}),
        sales(),
    );
    assert_eq!(out.big_number, Some(20.0));
    assert_eq!(out.subheader, "+100.0% WoW");
    assert_eq!(out.class_name, SignClass::Positive);
}

#[test]
fn suffix_is_kept_verbatim() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": 1, "compareSuffix": "vs. last week "}),
        sales(),
    );
    assert_eq!(out.subheader, "+100.0% vs. last week ");
}

#[test]
fn adhoc_metric_without_label_has_no_value() {
    let out = run(
        json!({
            "vizType": "big_number", "metric": {"expressionType": "SQL", "sqlExpression": "SUM(x)"},
            "compareLag": 1, "showTrendLine": true
        }),
        sales(),
    );
    assert_eq!(out.big_number, None);
    assert_eq!(out.subheader, "");
    assert_eq!(
        out.trend_line_data,
        Some(vec![
            TrendPoint { x: Some(1.0), y: None },
            TrendPoint { x: Some(2.0), y: None },
        ])
    );
}

#[test]
fn non_string_steps_are_ignored() {
    let out = run(
        json!({
            "vizType": "big_number_total", "metric": "m",
            "steps": {"value": [0], "color": ["red", "green"]},
            "colorPicker": {"r": 0, "g": 0, "b": 255}
        }),
        json!([{"m": 5}]),
    );
    assert_eq!(out.big_number, Some(5.0));
    assert_eq!(out.main_color.as_deref(), Some("#0000ff"));
}

#[test]
fn zero_baseline_yields_zero_change() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": 1}),
        json!([{"__timestamp": 1, "sales": 0}, {"__timestamp": 2, "sales": 5}]),
    );
    assert_eq!(out.subheader, "+0.0%");
    assert_eq!(out.class_name, SignClass::Neutral);
}

#[test]
fn lag_longer_than_series_keeps_default_subheader() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": "5", "subheader": "total"}),
        sales(),
    );
    assert_eq!(out.subheader, "total");
    assert_eq!(out.big_number, Some(20.0));
}

#[test]
fn show_perc_displays_the_delta() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": 1, "showPerc": true}),
        sales(),
    );
    assert_eq!(out.big_number, Some(10.0));
    assert!(out.show_perc);
}

#[test]
fn negative_change_switches_to_negative_color() {
    let data = json!([{"__timestamp": 1, "sales": 20}, {"__timestamp": 2, "sales": 15}]);
    let out = run(
        json!({
            "vizType": "big_number", "metric": "sales", "compareLag": 1,
            "colorPicker": {"r": 84, "g": 160, "b": 92, "a": 1},
            "fillColorPicker": {"r": 214, "g": 63, "b": 43, "a": 1}
        }),
        data.clone(),
    );
    assert_eq!(out.class_name, SignClass::Negative);
    assert_eq!(out.main_color.as_deref(), Some("#d63f2b"));
    assert_eq!(out.subheader, "-25.0%");

    // without an explicit negative color the positive one is kept
    let out = run(
        json!({
            "vizType": "big_number", "metric": "sales", "compareLag": 1,
            "colorPicker": {"r": 84, "g": 160, "b": 92}
        }),
        data,
    );
    assert_eq!(out.class_name, SignClass::Negative);
    assert_eq!(out.main_color.as_deref(), Some("#54a05c"));
}

#[test]
fn sign_source_value_uses_the_displayed_number() {
    let data = json!([{"__timestamp": 1, "sales": -4}]);
    let by_change = run(json!({"vizType": "big_number", "metric": "sales"}), data.clone());
    assert_eq!(by_change.class_name, SignClass::Neutral);

    let by_value = run(
        json!({"vizType": "big_number", "metric": "sales", "signSource": "value"}),
        data,
    );
    assert_eq!(by_value.class_name, SignClass::Negative);
    assert_eq!(SignSource::default(), SignSource::PercentChange);
}

#[test]
fn total_variant_uses_first_row_and_no_trend_line() {
    let out = run(
        json!({"vizType": "big_number_total", "metric": "sales", "showTrendLine": true, "compareLag": 1}),
        json!([{"sales": 7}, {"sales": 99}]),
    );
    assert_eq!(out.big_number, Some(7.0));
    assert!(!out.show_trend_line);
    assert_eq!(out.trend_line_data, None);
    assert_eq!(out.subheader, "");
}

#[test]
fn total_variant_color_steps() {
    let steps = r#"{"value":[0,10],"color":["red","yellow","green"]}"#;
    let color = |v: f64| {
        run(
            json!({"vizType": "big_number_total", "metric": "m", "steps": steps}),
            json!([{ "m": v }]),
        )
        .main_color
    };
    assert_eq!(color(5.0).as_deref(), Some("yellow"));
    assert_eq!(color(15.0).as_deref(), Some("green"));
    assert_eq!(color(-1.0).as_deref(), Some("red"));
}

#[test]
fn malformed_steps_leave_color_untouched() {
    let out = run(
        json!({
            "vizType": "big_number_total", "metric": "m", "steps": "{value: [0,",
            "colorPicker": {"r": 0, "g": 0, "b": 255}
        }),
        json!([{"m": 5}]),
    );
    assert_eq!(out.main_color.as_deref(), Some("#0000ff"));
}

#[test]
fn empty_or_missing_data_degrades_to_no_number() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "compareLag": 1, "showTrendLine": true}),
        json!([]),
    );
    assert_eq!(out.big_number, None);
    assert_eq!(out.trend_line_data, Some(vec![]));

    let out = run(
        json!({"vizType": "big_number", "metric": "revenue", "compareLag": 1}),
        sales(),
    );
    assert_eq!(out.big_number, None);
    assert_eq!(out.subheader, "");
    assert_eq!(out.class_name, SignClass::Neutral);
}

#[test]
fn serialized_props_use_renderer_field_names() {
    let out = run(
        json!({
            "vizType": "big_number", "metric": "sales", "yAxisFormat": ".3s",
            "dateTimeFormat": "%Y", "selectChart": "bar", "showTrendLine": true
        }),
        sales(),
    );
    assert_eq!(out.select_chart, TrendChart::Bar);
    let v = serde_json::to_value(RenderProps::BigNumber(out)).unwrap();
    assert_eq!(v["bigNumber"], json!(20.0));
    assert_eq!(v["className"], json!(""));
    assert_eq!(v["formatBigNumber"], json!(".3s"));
    assert_eq!(v["renderTooltip"], json!({"value": ".3s", "time": "%Y"}));
    assert_eq!(v["selectChart"], json!("bar"));
    assert_eq!(v["trendLineData"][1], json!({"x": 2.0, "y": 20.0}));
    // unset color stays out of the props so the renderer default applies
    assert!(v.get("mainColor").is_none());
}

#[test]
fn tooltip_is_bound_to_chart_formatters() {
    let out = run(
        json!({"vizType": "big_number", "metric": "sales", "yAxisFormat": ",d", "dateTimeFormat": "%Y-%m-%d"}),
        sales(),
    );
    let html = out.render_tooltip.render(&TrendPoint {
        x: Some(1_546_300_800_000.0),
        y: Some(1234.0),
    });
    assert!(html.contains("2019-01-01"));
    assert!(html.contains("<strong>1,234</strong>"));
    assert_eq!(out.format_big_number.format(20.0), "20");
}
