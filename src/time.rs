//! Fixed-timestep clock using an accumulator pattern.
//!
//! `draw_web()` fires at ~60fps with a variable delta. `TickClock` converts
//! the wall-clock timestamps into a fixed number of discrete ticks per second
//! so toast dwell times count down deterministically and are testable without
//! a browser.

pub struct TickClock {
    /// Milliseconds per tick (100ms = 10 ticks/sec).
    ms_per_tick: f64,
    /// Milliseconds accumulated but not yet consumed as ticks.
    accumulator: f64,
    /// Timestamp of the previous update, None before the first frame.
    last_timestamp: Option<f64>,
}

impl TickClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`). Returns how
    /// many whole ticks elapsed since the previous call; the remainder stays
    /// in the accumulator.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            // Clamp so a backgrounded tab doesn't flush a burst of ticks
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}
