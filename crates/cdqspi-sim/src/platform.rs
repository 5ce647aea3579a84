//! Virtual time for the simulator
//!
//! The tick counter only moves when the driver sleeps, or on every read
//! when auto-advance is set. Busy-wait loops therefore never expire by
//! accident in tests, while timeout paths can be driven on purpose.

use std::sync::atomic::{AtomicU32, Ordering};

use cdqspi_core::Platform;

/// Default tick rate, 1 ms per tick
pub const SIM_TICK_HZ: u32 = 1000;

/// [`Platform`] with a virtual tick counter
#[derive(Debug)]
pub struct SimPlatform {
    ticks: AtomicU32,
    tick_hz: u32,
    auto_advance: AtomicU32,
    slept: AtomicU32,
    irq_depth: AtomicU32,
    irq_saves: AtomicU32,
}

impl Default for SimPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPlatform {
    /// Frozen clock at tick 0
    pub fn new() -> Self {
        Self::with_tick_hz(SIM_TICK_HZ)
    }

    /// Frozen clock running at `tick_hz`
    pub fn with_tick_hz(tick_hz: u32) -> Self {
        Self {
            ticks: AtomicU32::new(0),
            tick_hz,
            auto_advance: AtomicU32::new(0),
            slept: AtomicU32::new(0),
            irq_depth: AtomicU32::new(0),
            irq_saves: AtomicU32::new(0),
        }
    }

    /// Advance the counter by `ticks` on every [`Platform::now`]
    pub fn set_auto_advance(&self, ticks: u32) {
        self.auto_advance.store(ticks, Ordering::Relaxed);
    }

    /// Move the clock forward
    pub fn advance(&self, ticks: u32) {
        self.ticks.fetch_add(ticks, Ordering::Relaxed);
    }

    /// Total ticks spent in [`Platform::sleep`]
    pub fn slept(&self) -> u32 {
        self.slept.load(Ordering::Relaxed)
    }

    /// Number of [`Platform::irq_save`] calls
    pub fn irq_saves(&self) -> u32 {
        self.irq_saves.load(Ordering::Relaxed)
    }

    /// Returns true while interrupts are masked
    pub fn irqs_masked(&self) -> bool {
        self.irq_depth.load(Ordering::Relaxed) != 0
    }
}

impl Platform for SimPlatform {
    fn now(&self) -> u32 {
        let step = self.auto_advance.load(Ordering::Relaxed);
        self.ticks.fetch_add(step, Ordering::Relaxed)
    }

    fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    fn sleep(&self, ticks: u32) {
        self.slept.fetch_add(ticks, Ordering::Relaxed);
        self.ticks.fetch_add(ticks, Ordering::Relaxed);
    }

    fn irq_save(&self) -> u32 {
        self.irq_saves.fetch_add(1, Ordering::Relaxed);
        self.irq_depth.fetch_add(1, Ordering::Relaxed)
    }

    fn irq_restore(&self, state: u32) {
        self.irq_depth.store(state, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdqspi_core::Deadline;

    #[test]
    fn test_frozen_until_sleep() {
        let p = SimPlatform::new();
        let d = Deadline::after(&p, 10);
        assert!(!d.expired(&p));
        p.sleep(9);
        assert!(!d.expired(&p));
        p.sleep(1);
        assert!(d.expired(&p));
        assert_eq!(p.slept(), 10);
    }

    #[test]
    fn test_auto_advance() {
        let p = SimPlatform::new();
        p.set_auto_advance(4);
        let d = Deadline::after(&p, 10);
        assert!(!d.expired(&p));
        assert!(!d.expired(&p));
        assert!(d.expired(&p));
    }

    #[test]
    fn test_irq_nesting() {
        let p = SimPlatform::new();
        let outer = p.irq_save();
        assert!(p.irqs_masked());
        p.irq_restore(outer);
        assert!(!p.irqs_masked());
        assert_eq!(p.irq_saves(), 1);
    }
}
