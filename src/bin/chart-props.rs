use anyhow::{Context, Result};
use chart_props::format::{Formatters, NumberFormatter};
use chart_props::models::QueryData;
use chart_props::{ChartKind, storage, transform_props, transform_props_as};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chart-props",
    version,
    about = "Turn chart requests into renderer-ready chart props"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform a chart request (JSON) into render props (JSON).
    Transform(TransformArgs),
    /// List the supported chart kinds.
    Kinds,
    /// Format a single value with a number or time format id.
    Format(FormatArgs),
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// Chart request file: {width, height, formData, payload, datasource}
    input: PathBuf,
    /// Chart kind (defaults to formData.vizType)
    #[arg(short, long)]
    kind: Option<String>,
    /// Replace payload.data with the rows of this CSV file.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Locale for number and time formatting (en, ru).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Write the props to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Format id, e.g. ",.2f", ".3s", "+.1%", "%Y-%m-%d" or SMART_NUMBER
    pattern: String,
    /// Number to format (epoch milliseconds with --time)
    #[arg(allow_hyphen_values = true)]
    value: f64,
    /// Treat the value as a timestamp and the pattern as a time format.
    #[arg(long, default_value_t = false)]
    time: bool,
    /// Locale for number and time formatting (en, ru).
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Transform(args) => cmd_transform(args),
        Command::Kinds => {
            for kind in ChartKind::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
        Command::Format(args) => cmd_format(args),
    }
}

fn cmd_transform(args: TransformArgs) -> Result<()> {
    let mut props = storage::load_chart_props(&args.input)?;
    if let Some(csv_path) = args.data.as_ref() {
        let rows = storage::load_rows_csv(csv_path)?;
        log::info!("loaded {} rows from {}", rows.len(), csv_path.display());
        props.payload.data = QueryData::Rows(rows);
    }

    let formatters = Formatters::for_tag(&args.locale);
    let out = match args.kind.as_deref() {
        Some(k) => transform_props_as(k.parse::<ChartKind>()?, &props, &formatters)?,
        None => transform_props(&props, &formatters)?,
    };

    match args.out.as_ref() {
        Some(path) => {
            storage::save_json(&out, path)
                .with_context(|| format!("write {}", path.display()))?;
            eprintln!("Wrote props to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&out)?),
    }
    Ok(())
}

fn cmd_format(args: FormatArgs) -> Result<()> {
    let formatters = Formatters::for_tag(&args.locale);
    let s = if args.time {
        formatters.time(Some(&args.pattern)).format_millis(args.value)
    } else {
        NumberFormatter::parse(&args.pattern, formatters.locale())?.format(args.value)
    };
    println!("{}", s);
    Ok(())
}
