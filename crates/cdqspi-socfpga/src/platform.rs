//! [`Platform`] for a Linux process

use std::thread;
use std::time::{Duration, Instant};

use cdqspi_core::Platform;

/// Tick rate of [`LinuxPlatform`]: one tick per millisecond
pub const LINUX_TICK_HZ: u32 = 1000;

/// Millisecond ticks from a monotonic clock, sleeping with the scheduler
///
/// A user-space process cannot mask interrupts, so the masking hooks keep
/// their no-op defaults.
#[derive(Debug, Clone, Copy)]
pub struct LinuxPlatform {
    start: Instant,
}

impl LinuxPlatform {
    /// Start the tick counter at zero
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for LinuxPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for LinuxPlatform {
    fn now(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn tick_hz(&self) -> u32 {
        LINUX_TICK_HZ
    }

    fn sleep(&self, ticks: u32) {
        thread::sleep(Duration::from_millis(ticks as u64));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdqspi_core::Deadline;

    #[test]
    fn test_ticks_follow_sleep() {
        let platform = LinuxPlatform::new();
        let deadline = Deadline::after(&platform, 5);
        assert!(!deadline.expired(&platform));
        platform.sleep(6);
        assert!(deadline.expired(&platform));
        assert!(platform.now() >= 6);
    }
}
