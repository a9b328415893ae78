// File: crates/sparkline-core/tests/host_lifecycle.rs
// Purpose: Mount/render/unmount behaviour: idempotent passes, replace-not-append, blank on failure.

use chrono::{Duration, TimeZone, Utc};
use sparkline_core::{ChartPoint, RenderHost, SceneRecorder, SparklineError, StyleClass};

fn series(values: &[f64]) -> Vec<ChartPoint> {
    let start = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ChartPoint::new(start + Duration::hours(2 * i as i64), v))
        .collect()
}

#[test]
fn same_data_twice_gives_identical_scene() {
    let data = series(&[1.0, 3.0, 2.0, 5.0, 4.0]);
    let mut rec = SceneRecorder::new(200, 50);
    let mut host = RenderHost::default();
    host.mount(&mut rec).unwrap();

    host.render(&data).unwrap();
    let rec = host.unmount().unwrap();
    let first = rec.current().cloned().unwrap();

    let mut host = RenderHost::default();
    host.mount(rec).unwrap();
    host.render(&data).unwrap();
    let rec = host.unmount().unwrap();

    assert_eq!(rec.current(), Some(&first));
    assert_eq!(rec.presents(), 2);
}

#[test]
fn second_render_replaces_first() {
    let a = series(&[1.0, 3.0, 2.0]);
    let b = series(&[-4.0, 0.0, 8.0, 6.0]);

    let mut fresh = SceneRecorder::new(200, 50);
    let mut host = RenderHost::default();
    host.mount(&mut fresh).unwrap();
    host.render(&b).unwrap();
    let only_b = host.unmount().unwrap().current().cloned().unwrap();

    let mut rec = SceneRecorder::new(200, 50);
    let mut host = RenderHost::default();
    host.mount(&mut rec).unwrap();
    host.render(&a).unwrap();
    host.render(&b).unwrap();
    let after = host.unmount().unwrap().current().cloned().unwrap();

    assert_eq!(after, only_b);
    assert_eq!(after.items_with(StyleClass::MAIN_LINE).count(), 1);
}

#[test]
fn no_draws_after_unmount() {
    let mut rec = SceneRecorder::new(200, 50);
    let mut host = RenderHost::default();
    host.mount(&mut rec).unwrap();
    host.render(&series(&[1.0, 2.0])).unwrap();
    assert!(host.unmount().is_some());

    assert!(!host.is_mounted());
    assert!(matches!(host.render(&series(&[5.0, 6.0])), Err(SparklineError::NotMounted)));
    assert_eq!(host.passes(), 1);
    drop(host);
    assert_eq!(rec.presents(), 1);
}

#[test]
fn remount_after_unmount() {
    let mut first = SceneRecorder::new(200, 50);
    let mut second = SceneRecorder::new(100, 30);
    let mut host = RenderHost::default();

    host.mount(&mut first).unwrap();
    host.unmount();
    host.mount(&mut second).unwrap();
    host.render(&series(&[0.0, 1.0, 0.5])).unwrap();
    let scene = host.unmount().unwrap().current().cloned().unwrap();
    assert_eq!((scene.width, scene.height), (100, 30));
    drop(host);
    assert!(first.current().is_none());
}

#[test]
fn single_point_renders_flat_chart() {
    let mut rec = SceneRecorder::new(200, 50);
    let mut host = RenderHost::default();
    host.mount(&mut rec).unwrap();
    host.render(&series(&[7.0])).unwrap();
    let scene = host.unmount().unwrap().current().cloned().unwrap();
    assert_eq!(scene.items_with(StyleClass::MAIN_LINE).count(), 0);
    // 00:00 is on the 4h cadence
    assert_eq!(scene.items_with(StyleClass::GRIDLINES).count(), 1);
}
