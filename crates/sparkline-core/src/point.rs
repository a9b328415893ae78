// File: crates/sparkline-core/src/point.rs
// Summary: ChartPoint sample type, the DataProvider input seam, and input validation.

use chrono::{DateTime, Utc};

use crate::error::{Result, SparklineError};

/// One timestamped sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl ChartPoint {
    pub const fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// Supplies the point sequence for a render pass.
///
/// Points are expected in chronological order. The core never sorts them.
pub trait DataProvider {
    fn points(&self) -> Vec<ChartPoint>;
}

impl DataProvider for [ChartPoint] {
    fn points(&self) -> Vec<ChartPoint> { self.to_vec() }
}

impl DataProvider for Vec<ChartPoint> {
    fn points(&self) -> Vec<ChartPoint> { self.clone() }
}

/// Timestamps went backwards at `index` (relative to `index - 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonMonotonicTime {
    pub index: usize,
}

/// Validate a sequence before any domain is computed.
///
/// Non-finite values are rejected. Out-of-order timestamps are reported
/// (first offending index) but not rejected: the line is drawn in input order.
pub fn validate_points(points: &[ChartPoint]) -> Result<Option<NonMonotonicTime>> {
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.value.is_finite()) {
        return Err(SparklineError::InvalidNumericValue { index, value: p.value });
    }
    let backwards = points
        .windows(2)
        .position(|w| w[1].date < w[0].date)
        .map(|i| NonMonotonicTime { index: i + 1 });
    Ok(backwards)
}
