// File: crates/sparkline-core/src/layer.rs
// Summary: Declarative plot layers (gridlines, line series) and their scene output.

use chrono::{DateTime, Utc};

use crate::curve::Curve;
use crate::geometry::{PlotRect, Point};
use crate::point::ChartPoint;
use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::scene::{Scene, Shape, StyleClass};
use crate::ticks::TickInterval;

/// Background reference lines: one vertical line per X tick, plus `y_ticks`
/// evenly spaced horizontal lines (0 for a sparkline).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridlineLayer {
    pub x_ticks: TickInterval,
    pub y_ticks: usize,
    pub class: StyleClass,
}

impl GridlineLayer {
    pub fn draw(&self, scene: &mut Scene, x: &TimeScale, y: &ValueScale, plot: PlotRect) {
        for t in self.x_ticks.ticks(&x.domain) {
            let px = x.to_px(t);
            scene.push(self.class, Shape::Line {
                from: Point::new(px, plot.top),
                to: Point::new(px, plot.bottom),
            });
        }
        for v in linspace(y.domain.min, y.domain.max, self.y_ticks) {
            let py = y.to_px(v);
            scene.push(self.class, Shape::Line {
                from: Point::new(plot.left, py),
                to: Point::new(plot.right, py),
            });
        }
    }
}

/// Evenly spaced values from `start` to `end` inclusive; `steps == 1` gives the midpoint.
fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![(start + end) * 0.5],
        n => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// A single line series: `cross_value` on X, `main_value` on Y, joined in input order.
#[derive(Clone, Copy, Debug)]
pub struct LineLayer {
    pub curve: Curve,
    pub class: StyleClass,
    pub cross_value: fn(&ChartPoint) -> DateTime<Utc>,
    pub main_value: fn(&ChartPoint) -> f64,
}

impl LineLayer {
    pub fn draw(&self, scene: &mut Scene, points: &[ChartPoint], x: &TimeScale, y: &ValueScale) {
        let px: Vec<Point> = points
            .iter()
            .map(|p| Point::new(x.to_px((self.cross_value)(p)), y.to_px((self.main_value)(p))))
            .collect();
        let cmds = self.curve.path(&px);
        if cmds.len() >= 2 {
            scene.push(self.class, Shape::Path(cmds));
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Layer {
    Gridlines(GridlineLayer),
    Line(LineLayer),
}

impl Layer {
    /// Lower draws first. Gridlines are background, series are foreground.
    pub fn draw_order(&self) -> u8 {
        match self {
            Layer::Gridlines(_) => 0,
            Layer::Line(_) => 1,
        }
    }

    pub fn class(&self) -> StyleClass {
        match self {
            Layer::Gridlines(g) => g.class,
            Layer::Line(l) => l.class,
        }
    }
}

impl From<GridlineLayer> for Layer {
    fn from(g: GridlineLayer) -> Self { Layer::Gridlines(g) }
}

impl From<LineLayer> for Layer {
    fn from(l: LineLayer) -> Self { Layer::Line(l) }
}

/// Sparkline gridlines: X ticks at `x_ticks`, no Y ticks, tagged `"gridlines"`.
pub fn gridlines(x_ticks: TickInterval) -> GridlineLayer {
    GridlineLayer { x_ticks, y_ticks: 0, class: StyleClass::GRIDLINES }
}

/// Monotone line over `date` / `value`, tagged with `class`.
pub fn line_series(class: StyleClass) -> LineLayer {
    LineLayer {
        curve: Curve::MonotoneX,
        class,
        cross_value: |p| p.date,
        main_value: |p| p.value,
    }
}

/// The sparkline's one series, tagged `"main line"`.
pub fn main_line() -> LineLayer {
    line_series(StyleClass::MAIN_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use chrono::TimeZone;

    fn hour(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap()
    }

    fn scales() -> (TimeScale, ValueScale, PlotRect) {
        let plot = PlotRect::from_ltrb(0.0, 0.0, 120.0, 40.0);
        let x = TimeScale::new(Domain::new(hour(0), hour(12)), plot.left, plot.right);
        let y = ValueScale::new(Domain::new(0.0, 1.0), plot.top, plot.bottom);
        (x, y, plot)
    }

    #[test]
    fn gridlines_are_vertical_and_tagged() {
        let (x, y, plot) = scales();
        let mut scene = Scene::new(120, 40);
        gridlines(TickInterval::hours(4)).draw(&mut scene, &x, &y, plot);

        assert_eq!(scene.items.len(), 3);
        let xs: Vec<f32> = scene
            .items
            .iter()
            .map(|i| match &i.shape {
                Shape::Line { from, to } => {
                    assert_eq!(from.x, to.x);
                    assert_eq!((from.y, to.y), (0.0, 40.0));
                    from.x
                }
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(xs, vec![0.0, 40.0, 80.0]);
        assert!(scene.items.iter().all(|i| i.class == StyleClass::GRIDLINES));
    }

    #[test]
    fn y_ticks_add_horizontal_lines() {
        let (x, y, plot) = scales();
        let mut g = gridlines(TickInterval::hours(24));
        g.y_ticks = 3;
        let mut scene = Scene::new(120, 40);
        g.draw(&mut scene, &x, &y, plot);
        // one X tick at midnight, three Y lines
        assert_eq!(scene.items.len(), 4);
        if let Shape::Line { from, to } = &scene.items[2].shape {
            assert_eq!(from.y, 20.0);
            assert_eq!(to.y, 20.0);
        }
    }

    #[test]
    fn main_line_builds_one_path() {
        let (x, y, _) = scales();
        let pts = [
            ChartPoint::new(hour(0), 0.0),
            ChartPoint::new(hour(6), 1.0),
            ChartPoint::new(hour(12), 0.5),
        ];
        let mut scene = Scene::new(120, 40);
        main_line().draw(&mut scene, &pts, &x, &y);
        assert_eq!(scene.items.len(), 1);
        assert_eq!(scene.items[0].class.as_str(), "main line");
    }

    #[test]
    fn single_point_draws_nothing() {
        let (x, y, _) = scales();
        let mut scene = Scene::new(120, 40);
        main_line().draw(&mut scene, &[ChartPoint::new(hour(3), 0.5)], &x, &y);
        assert!(scene.is_empty());
    }

    #[test]
    fn draw_order_puts_gridlines_first() {
        let g: Layer = gridlines(TickInterval::default()).into();
        let l: Layer = main_line().into();
        assert!(g.draw_order() < l.draw_order());
        assert_eq!(g.class(), StyleClass::GRIDLINES);
    }
}
