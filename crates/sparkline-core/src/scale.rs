// File: crates/sparkline-core/src/scale.rs
// Summary: Time (X) and value (Y) scales binding domains to pixel ranges.

use chrono::{DateTime, Utc};

use crate::domain::Domain;
use crate::geometry::PlotRect;

/// Continuous, monotonic, invertible mapping between a domain and pixels.
pub trait ScaleTransform {
    type Input;
    fn to_px(&self, v: Self::Input) -> f32;
    fn from_px(&self, px: f32) -> Self::Input;
}

/// Linear map from `[d0, d1]` onto `[r0, r1]`.
/// A zero-width domain maps everything to the middle of the range.
/// Works on half-extents so domains wider than `f64::MAX` stay finite.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Linear {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl Linear {
    #[inline]
    fn map(&self, v: f64) -> f32 {
        let half_span = self.d1 / 2.0 - self.d0 / 2.0;
        if half_span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        let t = (v / 2.0 - self.d0 / 2.0) / half_span;
        self.r0 + t as f32 * (self.r1 - self.r0)
    }

    #[inline]
    fn invert(&self, px: f32) -> f64 {
        let r = self.r1 - self.r0;
        if r == 0.0 {
            return self.d0;
        }
        let t = ((px - self.r0) / r) as f64;
        self.d0 * (1.0 - t) + self.d1 * t
    }
}

/// Horizontal calendar-time scale, linear in milliseconds since the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: Domain<DateTime<Utc>>,
    lin: Linear,
}

impl TimeScale {
    pub fn new(domain: Domain<DateTime<Utc>>, left_px: f32, right_px: f32) -> Self {
        let lin = Linear {
            d0: domain.min.timestamp_millis() as f64,
            d1: domain.max.timestamp_millis() as f64,
            r0: left_px,
            r1: right_px,
        };
        Self { domain, lin }
    }

    pub fn range(&self) -> (f32, f32) { (self.lin.r0, self.lin.r1) }
}

impl ScaleTransform for TimeScale {
    type Input = DateTime<Utc>;

    fn to_px(&self, t: DateTime<Utc>) -> f32 {
        self.lin.map(t.timestamp_millis() as f64)
    }

    fn from_px(&self, px: f32) -> DateTime<Utc> {
        let ms = self.lin.invert(px).round() as i64;
        DateTime::from_timestamp_millis(ms).unwrap_or(self.domain.min)
    }
}

/// Vertical value scale: `vmin` sits at `bottom_px`, `vmax` at `top_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub domain: Domain<f64>,
    lin: Linear,
}

impl ValueScale {
    pub fn new(domain: Domain<f64>, top_px: f32, bottom_px: f32) -> Self {
        let lin = Linear { d0: domain.min, d1: domain.max, r0: bottom_px, r1: top_px };
        Self { domain, lin }
    }

    /// (top, bottom) in pixels.
    pub fn range(&self) -> (f32, f32) { (self.lin.r1, self.lin.r0) }
}

impl ScaleTransform for ValueScale {
    type Input = f64;

    fn to_px(&self, y: f64) -> f32 { self.lin.map(y) }

    fn from_px(&self, py: f32) -> f64 { self.lin.invert(py) }
}

/// Bind both domains to the plot rectangle. Called once per render pass.
pub fn bind_scales(
    time: Domain<DateTime<Utc>>,
    value: Domain<f64>,
    plot: PlotRect,
) -> (TimeScale, ValueScale) {
    (
        TimeScale::new(time, plot.left, plot.right),
        ValueScale::new(value, plot.top, plot.bottom),
    )
}
