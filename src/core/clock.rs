use std::time::Instant;

/// Per-frame timing clock.
/// Tracks the previous frame timestamp and hands out the elapsed delta;
/// the first tick after construction or reset reports 0.0 so the first
/// frame never integrates a bogus startup interval.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    primed: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            primed: false,
        }
    }

    /// Advance the clock and return elapsed seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = if self.primed {
            now.duration_since(self.last_tick).as_secs_f32()
        } else {
            self.primed = true;
            0.0
        };
        self.last_tick = now;
        delta
    }

    /// Forget the previous timestamp; the next tick reports 0.0 again.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.primed = false;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
