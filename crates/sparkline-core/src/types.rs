// File: crates/sparkline-core/src/types.rs
// Summary: Shared types and render configuration (sizes, paddings, tick policy).

use crate::ticks::{TickFormat, TickInterval};

/// Default surface width in pixels.
pub const WIDTH: i32 = 240;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 64;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for the hour labels along the bottom edge only.
    fn default() -> Self {
        Self::new(4, 4, 4, 16)
    }
}

/// Per-host render configuration. The surface decides the pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub insets: Insets,
    pub tick_interval: TickInterval,
    pub tick_format: TickFormat,
    /// Emit X tick labels. Disable for pixel-exact comparisons across platforms.
    pub draw_labels: bool,
    pub label_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            tick_interval: TickInterval::default(),
            tick_format: TickFormat::HOUR_OF_DAY,
            draw_labels: true,
            label_size: 10.0,
        }
    }
}
