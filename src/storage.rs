use crate::models::{ChartProps, Row};
use crate::transform::RenderProps;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::{Number, Value};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Load a chart request from a JSON file.
pub fn load_chart_props<P: AsRef<Path>>(path: P) -> Result<ChartProps> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let props = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse chart props from {}", path.display()))?;
    Ok(props)
}

/// Load query rows from a CSV file with a header row.
///
/// Numeric cells become JSON numbers, empty cells `null`, everything else a string.
pub fn load_rows_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, cell)| (h.to_string(), cell_value(cell)))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn cell_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::Number(i.into());
    }
    match cell.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(cell.to_string()),
    }
}

/// Save render props as pretty JSON.
pub fn save_json<P: AsRef<Path>>(props: &RenderProps, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(props)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
