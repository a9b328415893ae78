// File: crates/demo/src/main.rs
// Summary: Dashboard shell; loads samples (CSV or synthetic day) and renders a sparkline to PNG and SVG.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use log::{info, warn};
use sparkline_core::{
    theme, ChartPoint, DataProvider, RasterSurface, RenderHost, RenderOptions, RenderOutcome,
    SvgSurface,
};
use sparkline_core::types::{HEIGHT, WIDTH};
use std::path::{Path, PathBuf};

/// Static data service: points loaded once up front, handed out on demand.
struct DataService {
    points: Vec<ChartPoint>,
}

impl DataProvider for DataService {
    fn points(&self) -> Vec<ChartPoint> { self.points.clone() }
}

fn main() -> Result<()> {
    env_logger::init();

    let service = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            let points = load_points_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if points.is_empty() {
                anyhow::bail!("no samples loaded; check headers/delimiter.");
            }
            DataService { points }
        }
        None => {
            println!("No input file given; synthesizing one day of samples");
            DataService { points: synthetic_day(Utc::now()) }
        }
    };
    println!("Loaded {} samples", service.points.len());

    let theme_name = std::env::var("SPARKLINE_THEME").unwrap_or_else(|_| "dark".to_string());
    let width = env_i32("SPARKLINE_WIDTH")?.unwrap_or(WIDTH);
    let height = env_i32("SPARKLINE_HEIGHT")?.unwrap_or(HEIGHT);
    let opts = RenderOptions::default();

    let mut raster = RasterSurface::new(width, height, theme::find(&theme_name))?;
    let mut svg = SvgSurface::new(width, height);

    let out_png = PathBuf::from("target/out/sparkline.png");
    let out_svg = out_png.with_extension("svg");

    {
        let mut host = RenderHost::new(opts);
        host.mount(&mut raster)?;
        report(host.render_from(&service)?);
        host.unmount();
    }
    raster.write_png(&out_png)?;
    println!("Wrote {}", out_png.display());

    {
        let mut host = RenderHost::new(opts);
        host.mount(&mut svg)?;
        host.render_from(&service)?;
        host.unmount();
    }
    svg.write_svg(&out_svg)?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

fn report(outcome: RenderOutcome) {
    match outcome {
        RenderOutcome::Empty => println!("Nothing to draw"),
        RenderOutcome::Drawn { value_domain, gridlines, out_of_order } => {
            println!(
                "Value range: [{:.4}, {:.4}], {} gridlines",
                value_domain.min, value_domain.max, gridlines
            );
            if let Some(o) = out_of_order {
                println!("  (samples out of chronological order from row {})", o.index);
            }
        }
    }
}

fn env_i32(key: &str) -> Result<Option<i32>> {
    match std::env::var(key) {
        Ok(v) => {
            let n = v.trim().parse::<i32>().with_context(|| format!("{key} must be an integer, got '{v}'"))?;
            Ok(Some(n))
        }
        Err(_) => Ok(None),
    }
}

/// Half-hourly samples over the 24 hours ending at `now` (rounded down to the hour).
fn synthetic_day(now: DateTime<Utc>) -> Vec<ChartPoint> {
    let end = Utc
        .timestamp_opt(now.timestamp() - now.timestamp().rem_euclid(3600), 0)
        .single()
        .unwrap_or(now);
    let start = end - Duration::hours(24);
    (0..=48)
        .map(|i| {
            let x = i as f64 / 48.0 * std::f64::consts::TAU;
            let v = (x.sin() * 0.6 + (3.0 * x).cos() * 0.25 + 1.0).max(0.0) * 40.0;
            ChartPoint::new(start + Duration::minutes(30 * i), v.round())
        })
        .collect()
}

/// Load `date,value` style CSV into chart points.
fn load_points_csv(path: &Path) -> Result<Vec<ChartPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!("CSV headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "time", "timestamp", "datetime"])
        .context("missing date column (date/time/timestamp/datetime)")?;
    let i_value = idx(&["value", "v", "close"]).context("missing value column (value/v/close)")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(parse_time);
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        match (date, value) {
            (Some(date), Some(value)) => out.push(ChartPoint::new(date, value)),
            _ => warn!("skipping unparseable row {}", row + 1),
        }
    }
    Ok(out)
}

/// RFC 3339, or integer epoch seconds / milliseconds.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> ms, otherwise seconds
        return if n > 10_i64.pow(12) {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        };
    }
    DateTime::parse_from_rfc3339(s).ok().map(|d| d.with_timezone(&Utc))
}
