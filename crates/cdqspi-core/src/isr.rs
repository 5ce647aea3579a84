//! Interrupt entry
//!
//! The controller raises a single interrupt line shared by every core of
//! the HPS. The handler body must run once per event: the first core to
//! claim the event acknowledges it, masks further watermark interrupts and
//! posts the semaphore the transfer is blocked on. The waiting task does
//! the FIFO work itself once it wakes up.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::platform::Signal;
use crate::regs::{Hardware, Reg};

/// Transfer currently waiting on the interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// No transfer in flight
    Idle = 0,
    /// Indirect read draining the RX FIFO
    Read = 1,
    /// Indirect write filling the TX FIFO
    Write = 2,
}

impl Direction {
    fn from_u8(value: u8) -> Direction {
        match value {
            1 => Direction::Read,
            2 => Direction::Write,
            _ => Direction::Idle,
        }
    }
}

/// Per-controller interrupt state
#[derive(Debug)]
pub struct IrqChannel<S> {
    claim: AtomicBool,
    direction: AtomicU8,
    signal: S,
}

impl<S: Signal> IrqChannel<S> {
    /// Create an idle channel around a semaphore
    pub const fn new(signal: S) -> Self {
        Self {
            claim: AtomicBool::new(false),
            direction: AtomicU8::new(Direction::Idle as u8),
            signal,
        }
    }

    /// Semaphore posted by the handler
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Record which transfer is waiting
    pub fn set_direction(&self, direction: Direction) {
        self.direction.store(direction as u8, Ordering::Release);
    }

    /// Transfer currently waiting
    pub fn direction(&self) -> Direction {
        Direction::from_u8(self.direction.load(Ordering::Acquire))
    }

    /// Drop any stale post and unmask the watermark interrupt
    pub fn arm<H: Hardware + ?Sized>(&self, hw: &H, direction: Direction) {
        self.set_direction(direction);
        hw.write(Reg::IrqStat, 0xFFFF_FFFF);
        self.signal.reset();
        hw.write(Reg::IrqMask, crate::regs::IRQ_WATERMARK);
    }

    /// Interrupt handler body
    ///
    /// Returns false when another core already owns this event. Never
    /// takes the controller lock: the transfer holding it is the one
    /// waiting for the post.
    pub fn handle<H: Hardware + ?Sized>(&self, hw: &H) -> bool {
        if self
            .claim
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return false;
        }

        let status = hw.read(Reg::IrqStat);
        hw.write(Reg::IrqStat, status);
        hw.write(Reg::IrqMask, 0);
        if self.direction() != Direction::Idle {
            self.signal.post();
        }

        self.claim.store(false, Ordering::Release);
        true
    }

    /// Returns true while a core is inside [`IrqChannel::handle`]
    pub fn is_claimed(&self) -> bool {
        self.claim.load(Ordering::Acquire)
    }

    /// Take the claim as if a core were running the handler (used to
    /// model a second core losing the race)
    pub fn try_claim(&self) -> bool {
        self.claim
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Release a claim taken with [`IrqChannel::try_claim`]
    pub fn release(&self) {
        self.claim.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::MockHw;
    use crate::platform::Timeout;
    use core::cell::Cell;

    #[derive(Default)]
    struct Flag {
        posts: Cell<u32>,
    }

    impl Signal for Flag {
        fn reset(&self) {
            self.posts.set(0);
        }
        fn post(&self) {
            self.posts.set(self.posts.get() + 1);
        }
        fn wait(&self, _timeout: Timeout) -> bool {
            let posted = self.posts.get() > 0;
            self.posts.set(0);
            posted
        }
    }

    #[test]
    fn test_handle_acknowledges_and_posts() {
        let hw = MockHw::new();
        let irq = IrqChannel::new(Flag::default());
        irq.arm(&hw, Direction::Read);
        hw.write(Reg::IrqStat, 0x40);

        assert!(irq.handle(&hw));
        assert_eq!(irq.signal().posts.get(), 1);
        assert_eq!(hw.read(Reg::IrqMask), 0);
        assert!(!irq.is_claimed());
    }

    #[test]
    fn test_idle_does_not_post() {
        let hw = MockHw::new();
        let irq = IrqChannel::new(Flag::default());
        assert!(irq.handle(&hw));
        assert_eq!(irq.signal().posts.get(), 0);
    }

    #[test]
    fn test_losing_core_returns() {
        let hw = MockHw::new();
        let irq = IrqChannel::new(Flag::default());
        irq.set_direction(Direction::Write);

        assert!(irq.try_claim());
        assert!(!irq.handle(&hw));
        assert_eq!(irq.signal().posts.get(), 0);
        irq.release();

        assert!(irq.handle(&hw));
        assert_eq!(irq.signal().posts.get(), 1);
    }
}
