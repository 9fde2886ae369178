use std::time::Duration;

pub const SIM_FPS: u32 = 60;
pub const DT: f32 = 1.0 / SIM_FPS as f32;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Longest stretch of real time one frame may catch up on; anything beyond
/// (window dragged, debugger pause) is dropped instead of replayed.
const MAX_BACKLOG: Duration = Duration::from_millis(250);

/// Accumulator that turns real elapsed time into whole fixed-rate tics.
#[derive(Debug, Default)]
pub struct TicClock {
    backlog: Duration,
}

impl TicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` real time and return how many tics are now due.
    /// The remainder carries over to the next frame.
    pub fn pump(&mut self, elapsed: Duration) -> u32 {
        self.backlog = (self.backlog + elapsed).min(MAX_BACKLOG);
        let mut tics = 0;
        while self.backlog >= TIC {
            self.backlog -= TIC;
            tics += 1;
        }
        tics
    }

    #[inline]
    pub fn backlog(&self) -> Duration {
        self.backlog
    }
}
