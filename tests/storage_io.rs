use chart_props::models::QueryData;
use chart_props::{ChartProps, Formatters, storage, transform_props};
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_request_and_save_props() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("waterfall.json");
    fs::write(
        &request,
        json!({
            "width": 640, "height": 480,
            "formData": {
                "vizType": "waterfall",
                "waterfallColorTotal": {"r": 102, "g": 102, "b": 102},
                "waterfallColorPositive": {"r": 90, "g": 193, "b": 137},
                "waterfallColorNegative": {"r": 255, "g": 90, "b": 95}
            },
            "payload": {"data": [{"__timestamp": 1, "x": 3}]},
            "datasource": {"verboseMap": {"x": "Revenue"}}
        })
        .to_string(),
    )
    .unwrap();

    let props = storage::load_chart_props(&request).unwrap();
    assert_eq!(props.datasource.verbose_map["x"], "Revenue");

    let out = transform_props(&props, &Formatters::default()).unwrap();
    let path = dir.path().join("props.json");
    storage::save_json(&out, &path).unwrap();

    let v: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["ColorTotal"], json!("#666666"));
    assert_eq!(v["data"][0]["x"], json!(3));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = storage::load_chart_props(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[test]
fn malformed_request_is_an_error() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("broken.json");
    fs::write(&p, r#"{"width": 1, "height": 1}"#).unwrap();
    assert!(storage::load_chart_props(&p).is_err());
}

#[test]
fn csv_rows_drive_a_transform() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("rows.csv");
    fs::write(&p, "region, sales\nNorth, 12\nSouth, 7.5\n").unwrap();
    let rows = storage::load_rows_csv(&p).unwrap();
    assert_eq!(rows[1]["sales"], json!(7.5));
    assert_eq!(rows[0]["region"], json!("North"));

    let mut props: ChartProps = serde_json::from_value(json!({
        "width": 1, "height": 1,
        "formData": {"vizType": "big_number_total", "metric": "sales"},
        "payload": {"data": null}
    }))
    .unwrap();
    props.payload.data = QueryData::Rows(rows);
    let v = serde_json::to_value(transform_props(&props, &Formatters::default()).unwrap()).unwrap();
    assert_eq!(v["bigNumber"], json!(12.0));
}
