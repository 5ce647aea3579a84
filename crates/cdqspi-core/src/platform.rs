//! Platform services the driver depends on
//!
//! The driver does not own a timer, an interrupt controller or a DMA engine.
//! It reaches them through the traits in this module:
//!
//! - [`Platform`] - tick counter, sleeping, local interrupt masking
//! - [`Dma`] - peripheral-to-memory transfers out of the RX FIFO
//! - [`Signal`] - the binary semaphore posted from the interrupt handler

/// How long a blocking wait may last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Check once, never block
    Poll,
    /// Block until the condition holds
    Forever,
    /// Block for at most this many platform ticks
    Ticks(u32),
}

/// Timer and interrupt services
pub trait Platform {
    /// Current value of the free-running tick counter
    fn now(&self) -> u32;

    /// Tick counter frequency
    fn tick_hz(&self) -> u32;

    /// Suspend the calling task for `ticks` ticks
    fn sleep(&self, ticks: u32);

    /// Mask local interrupts, returning the state to restore
    fn irq_save(&self) -> u32 {
        0
    }

    /// Restore the interrupt state returned by [`Platform::irq_save`]
    fn irq_restore(&self, _state: u32) {}
}

/// Convert milliseconds to ticks, rounding up, with a floor of `min` ticks
pub fn ms_to_ticks(tick_hz: u32, ms: u64, min: u32) -> u32 {
    let ticks = (ms * tick_hz as u64).div_ceil(1000);
    let ticks = ticks.min(u32::MAX as u64 / 16) as u32;
    ticks.max(min)
}

/// An expiry point on the platform tick counter
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expiry: u32,
}

impl Deadline {
    /// Deadline `ticks` ticks from now
    pub fn after<P: Platform + ?Sized>(platform: &P, ticks: u32) -> Self {
        Self {
            expiry: platform.now().wrapping_add(ticks),
        }
    }

    /// Returns true once the tick counter has reached the expiry
    pub fn expired<P: Platform + ?Sized>(&self, platform: &P) -> bool {
        platform.now().wrapping_sub(self.expiry) as i32 >= 0
    }

    /// Ticks left before expiry, zero if already expired
    pub fn remaining<P: Platform + ?Sized>(&self, platform: &P) -> u32 {
        let left = self.expiry.wrapping_sub(platform.now()) as i32;
        left.max(0) as u32
    }
}

/// A DMA channel able to drain the RX FIFO into memory
pub trait Dma {
    /// Copy `dst.len()` bytes from the FIFO at bus address `src` into `dst`
    ///
    /// `dst.len()` is a multiple of 4. `burst` is the number of bytes the
    /// controller requests per DMA handshake. Blocks until the transfer
    /// completes or `timeout` expires; failures return the DMA layer's code.
    fn fifo_to_memory(
        &mut self,
        src: usize,
        dst: &mut [u8],
        burst: u32,
        timeout: Timeout,
    ) -> core::result::Result<(), i32>;

    /// Abort any transfer in flight on this channel
    fn kill(&mut self);
}

/// Placeholder channel type for registries built without DMA
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDma;

impl Dma for NoDma {
    fn fifo_to_memory(
        &mut self,
        _src: usize,
        _dst: &mut [u8],
        _burst: u32,
        _timeout: Timeout,
    ) -> core::result::Result<(), i32> {
        Err(-1)
    }

    fn kill(&mut self) {}
}

/// Binary semaphore posted by the interrupt handler
pub trait Signal {
    /// Drop any pending post
    fn reset(&self);

    /// Post the semaphore (callable from interrupt context)
    fn post(&self);

    /// Wait for a post, consuming it. Returns false on timeout.
    fn wait(&self, timeout: Timeout) -> bool;
}

#[cfg(feature = "std")]
pub use self::std_signal::CondvarSignal;

#[cfg(feature = "std")]
mod std_signal {
    use super::{Signal, Timeout};
    use std::sync::{Condvar, Mutex};
    use std::time::Duration;

    /// [`Signal`] built on a mutex and a condition variable
    #[derive(Debug)]
    pub struct CondvarSignal {
        posted: Mutex<bool>,
        cond: Condvar,
        tick: Duration,
    }

    impl CondvarSignal {
        /// Create a signal whose tick timeouts follow a `tick_hz` counter
        pub fn new(tick_hz: u32) -> Self {
            Self {
                posted: Mutex::new(false),
                cond: Condvar::new(),
                tick: Duration::from_nanos(1_000_000_000 / tick_hz.max(1) as u64),
            }
        }
    }

    impl Signal for CondvarSignal {
        fn reset(&self) {
            *self.posted.lock().unwrap_or_else(|e| e.into_inner()) = false;
        }

        fn post(&self) {
            *self.posted.lock().unwrap_or_else(|e| e.into_inner()) = true;
            self.cond.notify_one();
        }

        fn wait(&self, timeout: Timeout) -> bool {
            let guard = self.posted.lock().unwrap_or_else(|e| e.into_inner());
            let mut guard = match timeout {
                Timeout::Poll => guard,
                Timeout::Forever => self
                    .cond
                    .wait_while(guard, |posted| !*posted)
                    .unwrap_or_else(|e| e.into_inner()),
                Timeout::Ticks(ticks) => {
                    self.cond
                        .wait_timeout_while(guard, self.tick * ticks, |posted| !*posted)
                        .unwrap_or_else(|e| e.into_inner())
                        .0
                }
            };
            let posted = *guard;
            *guard = false;
            posted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Ticker(Cell<u32>);

    impl Platform for Ticker {
        fn now(&self) -> u32 {
            self.0.get()
        }
        fn tick_hz(&self) -> u32 {
            1000
        }
        fn sleep(&self, ticks: u32) {
            self.0.set(self.0.get().wrapping_add(ticks));
        }
    }

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(1000, 0, 3), 3);
        assert_eq!(ms_to_ticks(1000, 36, 2), 36);
        assert_eq!(ms_to_ticks(100, 36, 2), 4);
        assert_eq!(ms_to_ticks(100, 1, 2), 2);
    }

    #[test]
    fn test_deadline_wraps() {
        let p = Ticker(Cell::new(u32::MAX - 1));
        let d = Deadline::after(&p, 4);
        assert!(!d.expired(&p));
        assert_eq!(d.remaining(&p), 4);
        p.sleep(3);
        assert!(!d.expired(&p));
        p.sleep(1);
        assert!(d.expired(&p));
        assert_eq!(d.remaining(&p), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_condvar_signal() {
        let s = CondvarSignal::new(1000);
        assert!(!s.wait(Timeout::Poll));
        s.post();
        assert!(s.wait(Timeout::Ticks(1)));
        assert!(!s.wait(Timeout::Ticks(1)));
        s.post();
        s.reset();
        assert!(!s.wait(Timeout::Poll));
    }
}
