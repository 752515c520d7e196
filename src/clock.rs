//! Frame pacing — sleep away the remainder of each frame budget.

use std::time::{Duration, Instant};

/// Bounds wall-clock frame duration to `1 / fps` seconds.  A frame that
/// overruns its budget shortens or skips the sleep; no debt is carried
/// into the next frame.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> FrameClock {
        FrameClock {
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self, fps: u32) {
        let budget = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.last = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}
