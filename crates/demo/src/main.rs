// File: crates/demo/src/main.rs
// Summary: Demo loads an OHLC CSV and writes chart.js configs (line of closes, bar of deltas, bubbles of ranges).
// Usage: chartjs-demo [input.csv] [out_dir]

use anyhow::{Context, Result};
use chartjs_core::{Axis, AxisPosition, AxisType, Chart, ChartType, Dataset, JsonOptions, Rgba};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One OHLC row; `t` is the epoch time in seconds or the row index.
#[derive(Clone, Copy, Debug)]
struct Candle {
    t: f64,
    o: f64,
    h: f64,
    l: f64,
    c: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let raw = args
        .next()
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string());
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let (path, used_alt) = resolve_path(&raw)?;
    info!(input = %path.display(), swapped_extension = used_alt, "using input file");

    let candles = load_ohlc_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = candles.len(), "loaded candles");
    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let opts = JsonOptions::default().with_precision(4).pretty();

    write_chart(&close_line_chart(&candles), &out_name_with(&out_dir, &path, "close"), &opts)?;
    write_chart(&delta_bar_chart(&candles), &out_name_with(&out_dir, &path, "delta"), &opts)?;
    write_chart(&range_bubble_chart(&candles), &out_name_with(&out_dir, &path, "range"), &opts)?;
    Ok(())
}

/// Line chart of close prices against time.
fn close_line_chart(candles: &[Candle]) -> Chart {
    let xy: Vec<(f64, f64)> = candles.iter().map(|c| (c.t, c.c)).collect();
    let mut chart = Chart::new(ChartType::Line).with_label("Close");
    chart.add_dataset(
        Dataset::new(xy)
            .with_label("close")
            .with_border_color(Rgba::opaque(64, 160, 255))
            .with_fill(false)
            .with_point_radius(0.0)
            .with_line_tension(0.0),
    );
    chart.add_x_axis(Axis::new(AxisType::Linear).with_position(AxisPosition::Bottom).with_label("time"));
    chart.add_y_axis(Axis::new(AxisType::Linear).with_position(AxisPosition::Left).with_label("price"));
    chart
}

/// Bar chart of close-open per row, split into up and down datasets over shared category labels.
fn delta_bar_chart(candles: &[Candle]) -> Chart {
    let mut chart = Chart::new(ChartType::Bar).with_label("Close - Open");
    let mut up = Vec::with_capacity(candles.len());
    let mut down = Vec::with_capacity(candles.len());
    for (i, c) in candles.iter().enumerate() {
        chart.add_label(i.to_string());
        let d = c.c - c.o;
        up.push(d.max(0.0));
        down.push(d.min(0.0));
    }
    chart.add_dataset(Dataset::new(up).with_label("up").with_background_color(Rgba::new(40, 200, 120, 200)));
    chart.add_dataset(Dataset::new(down).with_label("down").with_background_color(Rgba::new(220, 80, 80, 200)));
    chart.add_x_axis(Axis::new(AxisType::Category).with_stacked(true));
    chart.add_y_axis(Axis::new(AxisType::Linear).with_stacked(true));
    chart
}

/// Bubble chart of close prices sized by the high-low range.
fn range_bubble_chart(candles: &[Candle]) -> Chart {
    let max_range = candles.iter().map(|c| c.h - c.l).fold(0.0_f64, f64::max);
    let scale = if max_range > 0.0 { 20.0 / max_range } else { 1.0 };
    let pts: Vec<(f64, f64, f64)> = candles.iter().map(|c| (c.t, c.c, (c.h - c.l) * scale)).collect();

    let mut chart = Chart::new(ChartType::Bubble).with_label("Range");
    chart.add_dataset(
        Dataset::new(pts)
            .with_label("high - low")
            .with_background_color(Rgba::new(255, 230, 70, 120))
            .with_border_color(Rgba::opaque(180, 160, 40)),
    );
    chart.add_x_axis(Axis::new(AxisType::Linear));
    chart.add_y_axis(Axis::new(AxisType::Linear).with_grid_lines(false));
    chart
}

fn write_chart(chart: &Chart, out: &Path, opts: &JsonOptions) -> Result<()> {
    let file = std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut w = BufWriter::new(file);
    chart
        .write_json(&mut w, opts)
        .with_context(|| format!("writing {}", out.display()))?;
    w.flush()?;
    info!(output = %out.display(), datasets = chart.data.datasets.len(), "wrote chart");
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like <out_dir>/chart_<stem>_<suffix>.json
fn out_name_with(out_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    if short.is_empty() {
        out_dir.join(format!("chart_{suffix}.json"))
    } else {
        out_dir.join(format!("chart_{short}_{suffix}.json"))
    }
}

/// Load Binance-like OHLC CSV rows.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok());
        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_f64)
            .unwrap_or(row as f64);
        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            out.push(Candle { t, o, h, l, c });
        }
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let n = s.trim().parse::<i64>().ok()?;
    // epoch ms -> sec
    if n > 10_i64.pow(12) {
        return Some(n as f64 / 1000.0);
    }
    Some(n as f64)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
