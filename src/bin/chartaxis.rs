use anyhow::{Context, Result};
use chartaxis::axis::{AxisLayout, PlacedMarker};
use chartaxis::style::ChartStyle;
use chartaxis::{DataSet, HeuristicTextMeasurer, RenderFrame, stats};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "chartaxis",
    version,
    about = "Resolve chart axis ranges, labels and point-of-interest markers"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute range, axis labels and marker placement for a frame; prints JSON.
    Layout(LayoutArgs),
    /// Print summary statistics of a data file.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Data file: JSON array of series (`[{"values": [..]}]` or `[[..]]`).
    #[arg(short, long)]
    data: PathBuf,
    /// Chart style JSON file. Defaults apply when omitted.
    #[arg(short, long)]
    style: Option<PathBuf>,
    /// Width of the plotting frame in pixels.
    #[arg(long, default_value_t = 600.0)]
    width: f64,
    /// Height of the plotting frame in pixels.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(short, long)]
    data: PathBuf,
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    #[serde(flatten)]
    layout: &'a AxisLayout,
    display_labels: Vec<String>,
    markers: Vec<PlacedMarker>,
}

fn read_data(path: &Path) -> Result<DataSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    DataSet::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn fmt_num(x: f64) -> String {
    // Up to 4 decimals, trailing zeros and trailing dot trimmed.
    let s = format!("{:.4}", x);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> Result<()> {
    let data = read_data(&args.data)?;
    let style = match &args.style {
        Some(path) => ChartStyle::from_path(path)
            .with_context(|| format!("loading style {}", path.display()))?,
        None => ChartStyle::default(),
    };
    log::debug!("style: {style:?}");

    let layout = AxisLayout::measure(&data, &style, &HeuristicTextMeasurer)?;
    let markers = layout.place_markers(RenderFrame::new(args.width, args.height))?;
    let report = LayoutReport {
        layout: &layout,
        display_labels: layout.display_labels(),
        markers,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let data = read_data(&args.data)?;
    let s = stats::summary(&data)?;
    println!(
        "series={} count={} skipped={}  min={} max={} mean={} median={}",
        s.series,
        s.count,
        s.skipped,
        fmt_num(s.min),
        fmt_num(s.max),
        fmt_num(s.mean),
        fmt_num(s.median)
    );
    Ok(())
}
