//! Bulk transfer engine
//!
//! Reads and writes go through the controller's indirect access path: the
//! driver programs a start address and a byte count, then moves data
//! through the SRAM FIFOs via the AHB data window. Reads are split at die
//! boundaries, writes at page boundaries.

mod read;
pub mod strategy;
mod write;

use crate::bringup::SlaveConfig;
use crate::command::Session;
use crate::error::Result;
use crate::isr::IrqChannel;
use crate::platform::{ms_to_ticks, Dma, Platform, Signal};
use crate::regs::Hardware;

pub use strategy::Strategy;

/// Size of the window a 3-byte address can reach
pub(crate) const BANK_SIZE: u32 = 1 << 24;

/// One slave's transfer context, valid while the controller lock is held
pub struct Engine<'a, H: ?Sized, P: ?Sized, S, D> {
    pub(crate) s: &'a Session<'a, H, P>,
    pub(crate) slave: &'a SlaveConfig,
    pub(crate) irq: &'a IrqChannel<S>,
    pub(crate) dma: Option<&'a mut D>,
}

impl<'a, H, P, S, D> Engine<'a, H, P, S, D>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
    S: Signal,
    D: Dma,
{
    /// Bind a slave to a locked controller
    pub fn new(
        s: &'a Session<'a, H, P>,
        slave: &'a SlaveConfig,
        irq: &'a IrqChannel<S>,
        dma: Option<&'a mut D>,
    ) -> Self {
        Self {
            s,
            slave,
            irq,
            dma,
        }
    }

    /// Largest chunk starting at `addr` that stays inside one `boundary`
    /// sized region, and inside one 16 MiB bank when the part is driven
    /// with 3-byte addresses
    fn chunk_len(&self, addr: u32, left: usize, boundary: u32) -> usize {
        let mut room = boundary - addr % boundary;
        if self.banked() {
            room = room.min(BANK_SIZE - addr % BANK_SIZE);
        }
        left.min(room as usize)
    }

    /// Returns true when addresses above 16 MiB go through a bank register
    fn banked(&self) -> bool {
        self.slave.part.is_large() && !self.s.config.four_byte_address
    }

    /// Select the bank for a chunk starting at `addr`
    fn select_bank(&self, addr: u32) -> Result<()> {
        if self.banked() {
            self.s
                .extend_address(self.slave.part, self.slave.family, addr)?;
        }
        Ok(())
    }

    /// Tick bound for moving `bytes` at `ns_per_byte`
    fn transfer_ticks(&self, bytes: usize, ns_per_byte: u32) -> u32 {
        let ms = ((bytes as u64) * ns_per_byte as u64) >> 17;
        ms_to_ticks(self.s.platform.tick_hz(), ms, 3)
    }
}
