//! Game clock - frame-driven gravity timer
//!
//! The host calls [`GameClock::advance`] once per frame with a monotonically
//! increasing timestamp in milliseconds. Elapsed time accumulates until it
//! exceeds the current drop interval. While paused nothing accumulates, and the
//! first frame after resuming only re-establishes the baseline, so time spent
//! paused is discarded.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameClock {
    last_frame_ms: Option<u64>,
    accumulator_ms: u64,
    paused: bool,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Time gathered since the last drop
    pub fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Feed a frame timestamp; returns the elapsed time that was added.
    ///
    /// Returns 0 while paused, on the first frame after a rebaseline, and for
    /// timestamps older than the previous frame.
    pub fn advance(&mut self, now_ms: u64) -> u64 {
        if self.paused {
            return 0;
        }
        let elapsed = match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms.max(self.last_frame_ms.unwrap_or(0)));
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed);
        elapsed
    }

    /// Whether the accumulated time has gone past `interval_ms`
    pub fn is_due(&self, interval_ms: u32) -> bool {
        self.accumulator_ms > interval_ms as u64
    }

    pub fn reset_accumulator(&mut self) {
        self.accumulator_ms = 0;
    }

    /// Forget the previous frame timestamp
    pub fn rebaseline(&mut self) {
        self.last_frame_ms = None;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume with a fresh baseline
    pub fn resume(&mut self) {
        self.paused = false;
        self.rebaseline();
    }

    /// Back to the initial state, keeping the pause flag
    pub fn reset(&mut self) {
        self.last_frame_ms = None;
        self.accumulator_ms = 0;
    }
}
