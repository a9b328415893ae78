// File: crates/sparkline-core/src/chart.rs
// Summary: Chart composition: scales + tick policy + layers -> RenderedChart -> Scene.

use chrono::{DateTime, Utc};

use crate::geometry::{PlotRect, Point};
use crate::layer::{gridlines, main_line, Layer};
use crate::point::ChartPoint;
use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::scene::{Scene, Shape, StyleClass};
use crate::ticks::{TickFormat, TickInterval};
use crate::types::RenderOptions;

/// Where an axis is drawn. `None` suppresses the axis and its labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrient {
    Left,
    Right,
    #[default]
    None,
}

/// Everything needed to compose a chart. Plain data, no builder state.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub tick_interval: TickInterval,
    pub tick_format: TickFormat,
    pub y_orient: AxisOrient,
    /// Font size of tick labels; `None` draws no labels.
    pub label_size: Option<f32>,
    pub layers: Vec<Layer>,
}

impl ChartConfig {
    /// Gridlines + main line with the tick policy from `opts` and no Y axis.
    pub fn sparkline(x_scale: TimeScale, y_scale: ValueScale, opts: &RenderOptions) -> Self {
        Self {
            x_scale,
            y_scale,
            tick_interval: opts.tick_interval,
            tick_format: opts.tick_format,
            y_orient: AxisOrient::None,
            label_size: opts.draw_labels.then_some(opts.label_size),
            layers: vec![gridlines(opts.tick_interval).into(), main_line().into()],
        }
    }
}

/// A composed chart, ready to be bound to one data set.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    config: ChartConfig,
}

/// Compose the chart. Layers are stably ordered by draw order so gridlines
/// always end up underneath the series, whatever order they were given in.
pub fn compose(mut config: ChartConfig) -> RenderedChart {
    config.layers.sort_by_key(Layer::draw_order);
    RenderedChart { config }
}

impl RenderedChart {
    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn layers(&self) -> &[Layer] { &self.config.layers }

    pub fn plot_rect(&self) -> PlotRect {
        let (left, right) = self.config.x_scale.range();
        let (top, bottom) = self.config.y_scale.range();
        PlotRect::from_ltrb(left, top, right, bottom)
    }

    /// X axis tick instants for the bound time domain.
    pub fn x_ticks(&self) -> Vec<DateTime<Utc>> {
        self.config.tick_interval.ticks(&self.config.x_scale.domain)
    }

    /// Bind `points` and produce the display list for a `width` x `height` surface.
    pub fn scene(&self, points: &[ChartPoint], width: i32, height: i32) -> Scene {
        let cfg = &self.config;
        let plot = self.plot_rect();
        let mut scene = Scene::new(width, height);

        for layer in &cfg.layers {
            match layer {
                Layer::Gridlines(g) => g.draw(&mut scene, &cfg.x_scale, &cfg.y_scale, plot),
                Layer::Line(l) => l.draw(&mut scene, points, &cfg.x_scale, &cfg.y_scale),
            }
        }

        if let Some(size) = cfg.label_size {
            for t in self.x_ticks() {
                scene.push(StyleClass::TICK_LABEL, Shape::Text {
                    text: cfg.tick_format.format(&t),
                    at: Point::new(cfg.x_scale.to_px(t), plot.bottom + size + 2.0),
                    size,
                });
            }
            self.push_y_labels(&mut scene, plot, size);
        }
        scene
    }

    fn push_y_labels(&self, scene: &mut Scene, plot: PlotRect, size: f32) {
        let x = match self.config.y_orient {
            AxisOrient::None => return,
            AxisOrient::Left => plot.left - size,
            AxisOrient::Right => plot.right + size,
        };
        let y = &self.config.y_scale;
        for v in [y.domain.min, y.domain.max] {
            scene.push(StyleClass::TICK_LABEL, Shape::Text {
                text: format!("{v}"),
                at: Point::new(x, y.to_px(v) + size * 0.35),
                size,
            });
        }
    }
}
