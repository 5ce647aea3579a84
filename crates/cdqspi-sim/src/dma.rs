//! Simulated DMA channel
//!
//! Moves words out of the controller's data window, one request of
//! `burst` bytes at a time, the way a peripheral-to-memory channel
//! answering the controller's DMA handshake would.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use cdqspi_core::regs::CFG_DMA;
use cdqspi_core::{Dma, Hardware, Reg, Timeout};

use crate::controller::SimController;

/// Error code returned when the controller never raised a DMA request
pub const DMA_NOT_ENABLED: i32 = -5;

/// DMA channel wired to a [`SimController`]
pub struct SimDma {
    hw: Arc<SimController>,
    fail_with: Option<i32>,
    transfers: Arc<AtomicU32>,
    kills: Arc<AtomicU32>,
}

impl SimDma {
    /// Channel serving `hw`
    pub fn new(hw: Arc<SimController>) -> Self {
        Self {
            hw,
            fail_with: None,
            transfers: Arc::new(AtomicU32::new(0)),
            kills: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Fail every transfer with `code`
    pub fn failing(mut self, code: i32) -> Self {
        self.fail_with = Some(code);
        self
    }

    /// Shared counter of completed transfers
    pub fn transfers(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.transfers)
    }

    /// Shared counter of kill requests
    pub fn kills(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.kills)
    }
}

impl Dma for SimDma {
    fn fifo_to_memory(
        &mut self,
        src: usize,
        dst: &mut [u8],
        burst: u32,
        _timeout: Timeout,
    ) -> Result<(), i32> {
        if let Some(code) = self.fail_with {
            return Err(code);
        }
        if self.hw.peek(Reg::Cfg) & CFG_DMA == 0 {
            return Err(DMA_NOT_ENABLED);
        }
        log::trace!(
            "sim dma: {} bytes from 0x{:08X} in {}-byte bursts",
            dst.len(),
            src,
            burst
        );
        for word in dst.chunks_mut(4) {
            let bytes = self.hw.read_fifo().to_le_bytes();
            word.copy_from_slice(&bytes[..word.len()]);
        }
        self.transfers.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn kill(&mut self) {
        self.kills.fetch_add(1, Ordering::Relaxed);
    }
}
