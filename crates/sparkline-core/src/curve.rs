// File: crates/sparkline-core/src/curve.rs
// Summary: Monotone-in-X cubic interpolation (Steffen-style slopes, no overshoot).

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// Interpolation applied by a line layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Straight segments between points.
    Linear,
    /// Smooth cubic segments that preserve monotonicity in y between samples.
    #[default]
    MonotoneX,
}

impl Curve {
    pub fn path(self, pts: &[Point]) -> Vec<PathCmd> {
        match self {
            Curve::Linear => linear(pts),
            Curve::MonotoneX => monotone_x(pts),
        }
    }
}

fn linear(pts: &[Point]) -> Vec<PathCmd> {
    let mut out = Vec::with_capacity(pts.len());
    for (i, &p) in pts.iter().enumerate() {
        out.push(if i == 0 { PathCmd::MoveTo(p) } else { PathCmd::LineTo(p) });
    }
    out
}

#[inline]
fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Zero denominators keep the sign of the neighbouring interval so the
/// resulting infinite slope points the right way.
#[inline]
fn denom(h: f32, other: f32) -> f32 {
    if h != 0.0 && !h.is_nan() {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

/// Tangent at `p1` given its neighbours.
fn slope3(p0: Point, p1: Point, p2: Point) -> f32 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = (p1.y - p0.y) / denom(h0, h1);
    let s1 = (p2.y - p1.y) / denom(h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let (a, b, c) = (s0.abs(), s1.abs(), 0.5 * p.abs());
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return 0.0;
    }
    let t = (sign(s0) + sign(s1)) * a.min(b).min(c);
    if t.is_nan() { 0.0 } else { t }
}

/// One-sided tangent at an end point, from the neighbouring tangent `t`.
fn slope2(p0: Point, p1: Point, t: f32) -> f32 {
    let h = p1.x - p0.x;
    if h != 0.0 && !h.is_nan() { (3.0 * (p1.y - p0.y) / h - t) / 2.0 } else { t }
}

fn hermite(p0: Point, p1: Point, t0: f32, t1: f32) -> PathCmd {
    let dx = (p1.x - p0.x) / 3.0;
    PathCmd::CubicTo(
        Point::new(p0.x + dx, p0.y + dx * t0),
        Point::new(p1.x - dx, p1.y - dx * t1),
        p1,
    )
}

/// Builds the path for points in the given order. Consecutive duplicates are
/// skipped; a single point yields only a `MoveTo`.
pub fn monotone_x(pts: &[Point]) -> Vec<PathCmd> {
    let mut out = Vec::with_capacity(pts.len());
    let mut seen: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts {
        if seen.last() == Some(&p) {
            continue;
        }
        seen.push(p);
    }

    match seen.len() {
        0 => return out,
        1 => {
            out.push(PathCmd::MoveTo(seen[0]));
            return out;
        }
        2 => {
            out.push(PathCmd::MoveTo(seen[0]));
            out.push(PathCmd::LineTo(seen[1]));
            return out;
        }
        _ => {}
    }

    out.push(PathCmd::MoveTo(seen[0]));
    let mut t_prev = f32::NAN;
    for i in 2..seen.len() {
        let (p0, p1, p2) = (seen[i - 2], seen[i - 1], seen[i]);
        let t1 = slope3(p0, p1, p2);
        let t0 = if i == 2 { slope2(p0, p1, t1) } else { t_prev };
        out.push(hermite(p0, p1, t0, t1));
        t_prev = t1;
    }
    let n = seen.len();
    let (p0, p1) = (seen[n - 2], seen[n - 1]);
    out.push(hermite(p0, p1, t_prev, slope2(p0, p1, t_prev)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f32, f32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn degenerate_inputs() {
        assert!(monotone_x(&[]).is_empty());
        assert_eq!(monotone_x(&pts(&[(1.0, 2.0)])), vec![PathCmd::MoveTo(Point::new(1.0, 2.0))]);
        assert_eq!(monotone_x(&pts(&[(0.0, 0.0), (1.0, 1.0)])).len(), 2);
    }

    #[test]
    fn one_cubic_per_segment() {
        let cmds = monotone_x(&pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0)]));
        assert_eq!(cmds.len(), 4);
        assert!(matches!(cmds[0], PathCmd::MoveTo(_)));
        assert!(cmds[1..].iter().all(|c| matches!(c, PathCmd::CubicTo(..))));
        if let PathCmd::CubicTo(_, _, end) = cmds[3] {
            assert_eq!(end, Point::new(3.0, 3.0));
        }
    }

    #[test]
    fn no_overshoot_on_monotone_data() {
        let data = pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, 5.0), (3.0, 5.1), (4.0, 9.0)]);
        let cmds = monotone_x(&data);
        let mut prev = data[0];
        for c in &cmds[1..] {
            if let PathCmd::CubicTo(c1, c2, end) = *c {
                let (lo, hi) = (prev.y.min(end.y), prev.y.max(end.y));
                for cp in [c1, c2] {
                    assert!(cp.y >= lo - 1e-5 && cp.y <= hi + 1e-5, "{cp:?} outside [{lo}, {hi}]");
                }
                prev = end;
            }
        }
    }

    #[test]
    fn flat_data_stays_flat() {
        let cmds = monotone_x(&pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]));
        for c in &cmds[1..] {
            if let PathCmd::CubicTo(c1, c2, end) = *c {
                assert_eq!((c1.y, c2.y, end.y), (5.0, 5.0, 5.0));
            }
        }
    }

    #[test]
    fn local_extremum_has_flat_tangent() {
        let cmds = monotone_x(&pts(&[(0.0, 0.0), (1.0, 4.0), (2.0, 0.0)]));
        if let PathCmd::CubicTo(_, c2, end) = cmds[1] {
            assert_eq!(end.y, 4.0);
            assert_eq!(c2.y, 4.0);
        } else {
            panic!("expected cubic");
        }
    }

    #[test]
    fn duplicates_are_skipped() {
        let cmds = monotone_x(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(cmds, vec![
            PathCmd::MoveTo(Point::new(0.0, 0.0)),
            PathCmd::LineTo(Point::new(1.0, 1.0)),
        ]);
    }

    #[test]
    fn linear_curve_is_polyline() {
        let cmds = Curve::Linear.path(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]));
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[2], PathCmd::LineTo(_)));
    }
}
