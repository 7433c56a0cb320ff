//! Auto-scrolling loop for the video track.
//!
//! The track holds the card list twice, back to back. Scrolling through the
//! first copy and jumping back to the start looks like an endless strip, so
//! the offset is kept in `[0, scroll_width / 2)`.

/// Half-widths below this are treated as "nothing to scroll".
pub const MIN_HALF_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct AutoScroll {
    px_per_sec: f64,
    /// Timestamp (ms) of the start of the current lap.
    origin: Option<f64>,
    paused: bool,
}

impl AutoScroll {
    pub fn new(px_per_sec: f64) -> Self {
        Self {
            px_per_sec: px_per_sec.max(0.0),
            origin: None,
            paused: false,
        }
    }

    /// Offset to apply at frame time `now_ms`, or `None` while paused or when
    /// the track is too narrow to scroll.
    ///
    /// The first tick after construction or [`resume`](Self::resume) starts
    /// a lap at offset zero.
    pub fn tick(&mut self, now_ms: f64, scroll_width: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        let half = scroll_width / 2.0;
        if !(half >= MIN_HALF_WIDTH) {
            self.origin = None;
            return None;
        }

        let origin = *self.origin.get_or_insert(now_ms);
        let travelled = (now_ms - origin).max(0.0) * self.px_per_sec / 1000.0;
        if travelled < half {
            return Some(travelled);
        }

        // Rebase onto the lap we are in; any distance past the midpoint
        // carries into the new lap.
        let laps = (travelled / half).floor();
        let lap_ms = half * 1000.0 / self.px_per_sec;
        self.origin = Some(origin + laps * lap_ms);
        let offset = travelled - laps * half;
        Some(if (0.0..half).contains(&offset) { offset } else { 0.0 })
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.origin = None;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.origin = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Scroll target for one press of a paging button. Never negative.
pub fn page_target(current: f64, direction: Direction, step: f64) -> f64 {
    let target = match direction {
        Direction::Left => current - step,
        Direction::Right => current + step,
    };
    target.max(0.0)
}

/// The list followed by a copy of itself.
pub fn duplicate<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}
