use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tabchart::data::Dataset;
use tabchart::pipeline::{self, ChartResult};
use tabchart::{export, render, Canvas, ChartType};

#[derive(Parser, Debug)]
#[command(name = "tabchart")]
#[command(about = "Chart ad-hoc JSON records as a bar, line, or pie PNG", long_about = None)]
struct Args {
    /// JSON file containing an array of objects (stdin if omitted)
    input: Option<PathBuf>,

    /// Chart form to render
    #[arg(long, value_enum, default_value_t = ChartType::Bar)]
    chart: ChartType,

    /// Explicit X (category) column, overriding inference
    #[arg(long)]
    x: Option<String>,

    /// Explicit Y (value) column, overriding inference
    #[arg(long)]
    y: Option<String>,

    /// Output PNG path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the raw dataset as CSV to this path
    #[arg(long)]
    export_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let raw = read_input(args.input.as_deref())?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let dataset = Dataset::from_json(&value).context("Failed to decode dataset")?;

    if let Some(path) = &args.export_csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        export::write_csv(&dataset, file).context("Failed to export CSV")?;
    }

    let canvas = Canvas::default();
    let result = pipeline::build_chart(
        &dataset,
        args.chart,
        args.x.as_deref(),
        args.y.as_deref(),
        &canvas,
    );

    match result {
        ChartResult::Chart(geometry) => {
            let png_bytes = render::render_png(&geometry, &canvas)
                .context("Failed to render chart")?;
            write_output(args.output.as_deref(), &png_bytes)?;
        }
        ChartResult::Empty(reason) => {
            // A partially chartable dataset is a normal outcome, not a
            // failure: report it and exit cleanly.
            eprintln!("{}", reason);
        }
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read JSON from stdin")?;
            Ok(raw)
        }
    }
}

fn write_output(path: Option<&std::path::Path>, png_bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, png_bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(png_bytes)
                .context("Failed to write PNG to stdout")?;
            handle.flush().context("Failed to flush stdout")
        }
    }
}
