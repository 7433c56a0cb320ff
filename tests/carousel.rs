use portfolio_site::carousel::{duplicate, page_target, AutoScroll, Direction};

const FRAME_MS: f64 = 20.0;

/// Drives the loop frame by frame from `start` to `end` (inclusive) and
/// returns every offset it produced.
fn run(scroll: &mut AutoScroll, start: f64, end: f64, width: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut now = start;
    while now <= end {
        if let Some(offset) = scroll.tick(now, width) {
            out.push(offset);
        }
        now += FRAME_MS;
    }
    out
}

#[test]
fn first_tick_starts_at_zero() {
    let mut scroll = AutoScroll::new(100.0);
    assert_eq!(scroll.tick(5_000.0, 1200.0), Some(0.0));
    assert_eq!(scroll.tick(6_000.0, 1200.0), Some(100.0));
}

#[test]
fn fifteen_seconds_over_a_1200px_track() {
    // 8 cards duplicated into a 1200px track: one lap is 600px.
    let cards = duplicate(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert_eq!(cards.len(), 16);

    let mut jump = AutoScroll::new(100.0);
    jump.tick(0.0, 1200.0);
    assert_eq!(jump.tick(15_000.0, 1200.0), Some(1500.0 % 600.0));

    let mut framed = AutoScroll::new(100.0);
    let offsets = run(&mut framed, 0.0, 15_000.0, 1200.0);
    let last = *offsets.last().unwrap();
    assert!((last - 300.0).abs() < 1e-6, "offset after 15s was {last}");
}

#[test]
fn offset_stays_below_midpoint() {
    let mut scroll = AutoScroll::new(100.0);
    for offset in run(&mut scroll, 0.0, 60_000.0, 1200.0) {
        assert!((0.0..600.0).contains(&offset), "offset {offset} out of range");
    }
}

#[test]
fn hover_freezes_the_offset() {
    let mut scroll = AutoScroll::new(100.0);
    run(&mut scroll, 0.0, 2_000.0, 1200.0);
    scroll.pause();
    assert!(scroll.is_paused());
    assert!(run(&mut scroll, 2_020.0, 12_000.0, 1200.0).is_empty());
}

#[test]
fn leaving_restarts_from_zero() {
    let mut scroll = AutoScroll::new(100.0);
    run(&mut scroll, 0.0, 3_000.0, 1200.0);
    scroll.pause();
    scroll.resume();
    assert!(!scroll.is_paused());
    assert_eq!(scroll.tick(9_000.0, 1200.0), Some(0.0));
    assert_eq!(scroll.tick(10_000.0, 1200.0), Some(100.0));
}

#[test]
fn narrow_track_does_not_scroll() {
    let mut scroll = AutoScroll::new(100.0);
    assert_eq!(scroll.tick(0.0, 0.0), None);
    assert_eq!(scroll.tick(1_000.0, 1.5), None);
    assert_eq!(scroll.tick(2_000.0, f64::NAN), None);
    // Growing again starts a new lap rather than jumping ahead.
    assert_eq!(scroll.tick(3_000.0, 1200.0), Some(0.0));
}

#[test]
fn shrinking_track_keeps_offset_in_range() {
    let mut scroll = AutoScroll::new(100.0);
    run(&mut scroll, 0.0, 5_000.0, 1200.0);
    let offset = scroll.tick(5_100.0, 400.0).unwrap();
    assert!((0.0..200.0).contains(&offset));
}

#[test]
fn paging_moves_by_step_and_stops_at_zero() {
    assert_eq!(page_target(500.0, Direction::Right, 300.0), 800.0);
    assert_eq!(page_target(500.0, Direction::Left, 300.0), 200.0);
    assert_eq!(page_target(100.0, Direction::Left, 300.0), 0.0);
}
