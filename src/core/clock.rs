use std::time::{Duration, Instant};

/// Longest step handed to the rig; longer stalls are truncated.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Host-side frame clock - measures elapsed time between rig updates
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    max_step: Duration,
    frames: u64,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::with_max_step(MAX_FRAME_STEP)
    }

    pub fn with_max_step(max_step: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            max_step,
            frames: 0,
        }
    }

    /// Seconds since the previous tick, capped at the max step
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).min(self.max_step);
        self.last_tick = now;
        self.frames += 1;
        delta.as_secs_f32()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Restart timing, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
