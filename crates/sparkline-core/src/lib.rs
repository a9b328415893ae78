// File: crates/sparkline-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline pipeline and drawing surfaces.

pub mod chart;
pub mod curve;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layer;
pub mod point;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{compose, AxisOrient, ChartConfig, RenderedChart};
pub use curve::Curve;
pub use domain::{compute_time_domain, compute_value_domain, Domain};
pub use error::{Result, SparklineError};
pub use host::{RenderHost, RenderOutcome};
pub use layer::{gridlines, line_series, main_line, GridlineLayer, Layer, LineLayer};
pub use point::{validate_points, ChartPoint, DataProvider, NonMonotonicTime};
pub use raster::RasterSurface;
pub use scale::{bind_scales, ScaleTransform, TimeScale, ValueScale};
pub use scene::{Scene, SceneItem, Shape, StyleClass};
pub use surface::{DrawingSurface, SceneRecorder};
pub use svg::SvgSurface;
pub use theme::Theme;
pub use ticks::{TickFormat, TickInterval};
pub use types::{Insets, RenderOptions};
