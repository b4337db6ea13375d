//! Fixed-interval tick scheduling.
//!
//! Wall-clock frame time is fed into an accumulator that releases one
//! simulation tick per elapsed interval. Oversized frames are clamped so a
//! stalled host drops ticks instead of replaying a long backlog.

use std::time::{Duration, Instant};

use tracing::warn;

/// Default interval between ticks: 50 ms (20 ticks per second).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Largest frame time credited to the accumulator in one call, in seconds.
///
/// Intervals longer than this raise the limit to one interval.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Drives the simulation at a fixed tick interval.
///
/// Call [`frame`](Self::frame) whenever the host wakes up; it runs as many
/// ticks as the elapsed time allows.
pub struct TickLoop {
    interval: f64,
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    tick_count: u64,
    dropped_time: f64,
}

impl TickLoop {
    /// Creates a loop ticking every `interval`, starting from now.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval: interval.as_secs_f64(),
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            tick_count: 0,
            dropped_time: 0.0,
        }
    }

    /// Measures time since the previous frame and runs due ticks.
    ///
    /// `update_fn(tick)` receives the 1-based tick number. Returns the number
    /// of ticks run.
    pub fn frame(&mut self, update_fn: impl FnMut(u64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Runs due ticks for an explicit frame time in seconds.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(u64)) -> u32 {
        let max_frame_time = self.max_frame_time();
        let mut frame_time = frame_time.max(0.0);
        if frame_time > max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, dropping {:.1}ms",
                frame_time * 1000.0,
                (frame_time - max_frame_time) * 1000.0
            );
            self.dropped_time += frame_time - max_frame_time;
            frame_time = max_frame_time;
        }

        self.accumulator += frame_time;

        let mut ran = 0;
        while self.accumulator >= self.interval {
            self.tick_count += 1;
            update_fn(self.tick_count);
            self.accumulator -= self.interval;
            ran += 1;
        }

        self.frame_count += 1;
        ran
    }

    /// Frame-time clamp: [`MAX_FRAME_TIME`], or one interval if that is longer.
    pub fn max_frame_time(&self) -> f64 {
        MAX_FRAME_TIME.max(self.interval)
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        Duration::from_secs_f64((self.interval - self.accumulator).max(0.0))
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    /// Frames processed.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Ticks run.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Wall-clock seconds discarded by the frame-time clamp.
    pub fn dropped_time(&self) -> f64 {
        self.dropped_time
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
