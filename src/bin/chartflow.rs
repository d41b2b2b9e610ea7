use anyhow::{Context, Result};
use chartflow::models::{DataValue, Row};
use chartflow::{ChartConfig, ChartEngine, Metadata};
use chartflow::{export, stats};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chartflow",
    version,
    about = "Classify, color, window & summarize tabular chart data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a CSV file through a chart configuration (and optionally
    /// save, list the legend, and print stats).
    Classify(ClassifyArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Chart configuration file (JSON with a "charts" list).
    #[arg(short, long)]
    config: PathBuf,
    /// Input data as CSV with a header row.
    #[arg(short, long)]
    data: PathBuf,
    /// Column types separated by comma or semicolon, aligned to the CSV
    /// header (e.g., linear,ordinal,time).
    #[arg(short, long)]
    types: String,
    /// Save classified output to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print legend entries (name, color, chart index) to stdout.
    #[arg(long, default_value_t = false)]
    legend: bool,
    /// Print per-series statistics to stdout.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_cell(s: &str) -> DataValue {
    let t = s.trim();
    if t.is_empty() {
        DataValue::Null
    } else if let Ok(n) = t.parse::<f64>() {
        DataValue::Number(n)
    } else {
        DataValue::Text(t.to_string())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
    }
}

fn cmd_classify(args: ClassifyArgs) -> Result<()> {
    let config_file = File::open(&args.config)
        .with_context(|| format!("cannot open config {}", args.config.display()))?;
    let config: ChartConfig =
        serde_json::from_reader(config_file).context("invalid chart configuration")?;

    let mut rdr = csv::Reader::from_path(&args.data)
        .with_context(|| format!("cannot open data {}", args.data.display()))?;
    let names: Vec<String> = rdr
        .headers()
        .context("data file has no header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let types = parse_list(&args.types);
    if types.len() != names.len() {
        anyhow::bail!(
            "--types lists {} types but the data has {} columns",
            types.len(),
            names.len()
        );
    }
    let metadata = Metadata::parse(names, &types)?;

    let mut rows: Vec<Row> = Vec::new();
    for record in rdr.records() {
        let record = record.context("invalid CSV record")?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    let mut engine = ChartEngine::new(config);
    engine.update(&metadata, &rows)?;
    eprintln!(
        "Classified {} rows into {} series (x scale: {})",
        rows.len(),
        engine.data_sets().len(),
        engine.x_scale()
    );

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => export::save_csv(&engine, path)?,
            "json" => export::save_json(&engine, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved output to {}", path.display());
    }

    if args.legend {
        for item in engine.legend_items(&[]) {
            println!("{}  {}  chart={}", item.color, item.name, item.chart_index);
        }
    }

    if args.summary {
        let summaries = stats::series_summary(engine.data_sets());
        for s in summaries {
            println!(
                "{}  count={} non_numeric={}  min={} max={} mean={} median={}",
                s.series,
                s.count,
                s.non_numeric,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
