// File: crates/sparkline-core/src/domain.rs
// Summary: Value and time extents of a point sequence.

use chrono::{DateTime, Utc};

use crate::point::ChartPoint;

/// Values always folded into the value domain so an all-zero or flat series
/// still gets a non-zero vertical extent.
pub const VALUE_DOMAIN_INCLUDE: [f64; 2] = [0.0, 1.0];

/// Closed `[min, max]` extent of one data dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain<T> {
    pub min: T,
    pub max: T,
}

impl<T> Domain<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl Domain<f64> {
    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

impl Domain<DateTime<Utc>> {
    pub fn span(&self) -> chrono::Duration { self.max - self.min }
}

/// `[min(0, min(values)), max(1, max(values))]`. Empty input yields `[0, 1]`.
///
/// Values are assumed finite (see `validate_points`).
pub fn compute_value_domain(points: &[ChartPoint]) -> Domain<f64> {
    let [lo, hi] = VALUE_DOMAIN_INCLUDE;
    points.iter().fold(Domain::new(lo, hi), |d, p| {
        Domain::new(d.min.min(p.value), d.max.max(p.value))
    })
}

/// Tight `[min(dates), max(dates)]`, no padding. `None` for an empty sequence.
pub fn compute_time_domain(points: &[ChartPoint]) -> Option<Domain<DateTime<Utc>>> {
    let first = points.first()?.date;
    let d = points.iter().skip(1).fold(Domain::new(first, first), |d, p| {
        Domain::new(d.min.min(p.date), d.max.max(p.date))
    });
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, v: f64) -> ChartPoint {
        ChartPoint::new(Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap(), v)
    }

    #[test]
    fn empty_sequence_defaults() {
        assert_eq!(compute_value_domain(&[]), Domain::new(0.0, 1.0));
        assert_eq!(compute_time_domain(&[]), None);
    }

    #[test]
    fn all_zero_values_keep_unit_height() {
        let pts = [at(0, 0.0), at(4, 0.0), at(8, 0.0)];
        assert_eq!(compute_value_domain(&pts), Domain::new(0.0, 1.0));
    }

    #[test]
    fn inside_unit_interval_is_widened_to_it() {
        let pts = [at(0, 0.25), at(1, 0.75)];
        assert_eq!(compute_value_domain(&pts), Domain::new(0.0, 1.0));
    }

    #[test]
    fn natural_extremes_win_over_guard() {
        let pts = [at(0, -5.0), at(12, 10.0)];
        assert_eq!(compute_value_domain(&pts), Domain::new(-5.0, 10.0));
    }

    #[test]
    fn all_negative_values_keep_one_as_upper_bound() {
        let pts = [at(0, -3.0), at(1, -7.5)];
        let d = compute_value_domain(&pts);
        assert_eq!(d, Domain::new(-7.5, 1.0));
        assert!(d.contains(0.0));
    }

    #[test]
    fn time_domain_is_tight_even_when_unordered() {
        let pts = [at(6, 1.0), at(2, 1.0), at(9, 1.0)];
        let d = compute_time_domain(&pts).unwrap();
        assert_eq!(d.min, at(2, 0.0).date);
        assert_eq!(d.max, at(9, 0.0).date);
        assert_eq!(d.span(), chrono::Duration::hours(7));
    }

    #[test]
    fn single_point_time_domain_collapses() {
        let d = compute_time_domain(&[at(5, 2.0)]).unwrap();
        assert_eq!(d.min, d.max);
    }
}
