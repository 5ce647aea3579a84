//! RX FIFO drain strategies
//!
//! A read chunk is drained one of three ways. All three leave the same
//! bytes in the destination buffer; they differ in how the CPU waits for
//! the FIFO to fill.

use super::Engine;
use crate::config::{Operation, QspiConfig};
use crate::error::{Error, Result};
use crate::isr::Direction;
use crate::platform::{Deadline, Dma, Platform, Signal, Timeout};
use crate::regs::{
    rx_fill_words, Hardware, Reg, CFG_DMA, IND_DONE, IND_START, RX_FIFO_SIZE,
};

/// How the RX FIFO of one chunk is drained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Spin on the fill level
    Polling,
    /// Sleep on the watermark interrupt, drain when woken
    Interrupt,
    /// Let the DMA channel move whole words, poll the tail
    Dma,
}

impl Strategy {
    /// Pick the strategy for a chunk of `len` bytes
    pub fn select(config: &QspiConfig, has_dma: bool, len: usize) -> Strategy {
        let len = len as u64;
        if config.operation.contains(Operation::RX_DMA)
            && has_dma
            && len >= config.min_rx_dma as u64
            && len >= RX_FIFO_SIZE as u64
        {
            Strategy::Dma
        } else if config.operation.contains(Operation::RX_ISR) && len >= config.min_rx_isr as u64 {
            Strategy::Interrupt
        } else {
            Strategy::Polling
        }
    }

    /// Arm the strategy and start the indirect read
    pub(crate) fn start_chunk<H, P, S, D>(
        self,
        eng: &mut Engine<'_, H, P, S, D>,
        rx: &mut RxChunk<'_>,
    ) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
        S: Signal,
        D: Dma,
    {
        let hw = eng.s.hw;
        match self {
            Strategy::Polling => {}
            Strategy::Interrupt => {
                rx.water = interrupt_watermark(eng.s.config, rx.left());
                hw.write(Reg::IndRdWater, rx.water);
                eng.irq.arm(hw, Direction::Read);
            }
            Strategy::Dma => {
                hw.modify(Reg::Cfg, CFG_DMA, 0);
                rx.burst = dma_burst(eng.s.config, rx.left());
                hw.write(Reg::IndRdWater, rx.burst - 1);
                hw.modify(Reg::Cfg, 0, CFG_DMA);
            }
        }
        hw.write(Reg::IndRd, IND_DONE | IND_START);
        Ok(())
    }

    /// Move the chunk into the destination buffer
    pub(crate) fn pump_or_wait<H, P, S, D>(
        self,
        eng: &mut Engine<'_, H, P, S, D>,
        rx: &mut RxChunk<'_>,
    ) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
        S: Signal,
        D: Dma,
    {
        match self {
            Strategy::Polling => poll(eng, rx),
            Strategy::Interrupt => {
                let hw = eng.s.hw;
                let platform = eng.s.platform;
                while rx.left() > 0 {
                    if rx_fill_words(hw.read(Reg::SramFill)) * 4 <= rx.water {
                        let ticks = rx.deadline.remaining(platform);
                        if !eng.irq.signal().wait(Timeout::Ticks(ticks)) {
                            log::warn!("RX watermark interrupt never came, {} bytes left", rx.left());
                            return Err(Error::Timeout);
                        }
                    }
                    rx.drain(hw);
                    if rx.left() > 0 {
                        rx.water = interrupt_watermark(eng.s.config, rx.left());
                        hw.write(Reg::IndRdWater, rx.water);
                        eng.irq.arm(hw, Direction::Read);
                    }
                }
                Ok(())
            }
            Strategy::Dma => {
                let hw = eng.s.hw;
                let platform = eng.s.platform;
                let whole = rx.buf.len() & !3;
                if let Some(dma) = eng.dma.as_deref_mut() {
                    let timeout = Timeout::Ticks(rx.deadline.remaining(platform));
                    let dst = &mut rx.buf[rx.pos..whole];
                    if let Err(code) = dma.fifo_to_memory(hw.fifo_bus_address(), dst, rx.burst, timeout)
                    {
                        dma.kill();
                        log::warn!("RX DMA failed with code {}", code);
                        return Err(Error::Dma(code));
                    }
                    rx.pos = whole;
                }
                poll(eng, rx)
            }
        }
    }

    /// Undo what `start_chunk` armed
    pub(crate) fn finish<H, P, S, D>(self, eng: &mut Engine<'_, H, P, S, D>)
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
        S: Signal,
        D: Dma,
    {
        let hw = eng.s.hw;
        match self {
            Strategy::Polling => {}
            Strategy::Interrupt => {
                hw.write(Reg::IrqMask, 0);
                eng.irq.set_direction(Direction::Idle);
            }
            Strategy::Dma => hw.modify(Reg::Cfg, CFG_DMA, 0),
        }
    }
}

/// Destination of one read chunk
pub(crate) struct RxChunk<'b> {
    pub buf: &'b mut [u8],
    pub pos: usize,
    pub deadline: Deadline,
    water: u32,
    burst: u32,
}

impl<'b> RxChunk<'b> {
    pub fn new(buf: &'b mut [u8], deadline: Deadline) -> Self {
        Self {
            buf,
            pos: 0,
            deadline,
            water: 0,
            burst: 0,
        }
    }

    /// Bytes still to read
    pub fn left(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Pop every word the FIFO currently holds, up to what is left
    ///
    /// Whole words are copied first; a partial tail word only delivers the
    /// bytes still wanted.
    pub fn drain<H: Hardware + ?Sized>(&mut self, hw: &H) {
        let mut words = rx_fill_words(hw.read(Reg::SramFill)) as usize;
        let whole = words.min(self.left() / 4);
        for _ in 0..whole {
            let word = hw.read_fifo().to_le_bytes();
            self.buf[self.pos..self.pos + 4].copy_from_slice(&word);
            self.pos += 4;
        }
        words -= whole;

        while words > 0 && self.left() > 0 {
            let word = hw.read_fifo().to_le_bytes();
            let n = self.left().min(4);
            self.buf[self.pos..self.pos + n].copy_from_slice(&word[..n]);
            self.pos += n;
            words -= 1;
        }
    }
}

/// Spin on the fill level until the chunk is complete or the deadline
/// passes, optionally with local interrupts masked
fn poll<H, P, S, D>(eng: &mut Engine<'_, H, P, S, D>, rx: &mut RxChunk<'_>) -> Result<()>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
    S: Signal,
    D: Dma,
{
    let hw = eng.s.hw;
    let platform = eng.s.platform;
    let masked = eng.s.config.operation.contains(Operation::RX_IRQ_MASK);

    let mut state = if masked { platform.irq_save() } else { 0 };
    let mut expired = false;
    while rx.left() > 0 && !expired {
        if masked {
            platform.irq_restore(state);
            expired = rx.deadline.expired(platform);
            state = platform.irq_save();
        } else {
            expired = rx.deadline.expired(platform);
        }
        rx.drain(hw);
    }
    if masked {
        platform.irq_restore(state);
    }

    if rx.left() > 0 {
        log::warn!("RX FIFO starved, {} bytes outstanding", rx.left());
        return Err(Error::Timeout);
    }
    Ok(())
}

/// Watermark for the interrupt strategy: the whole remainder when it fits
/// in the FIFO, the configured level otherwise. The interrupt fires past
/// the watermark, hence the minus one.
pub(crate) fn interrupt_watermark(config: &QspiConfig, left: usize) -> u32 {
    let level = if left <= RX_FIFO_SIZE as usize {
        left as u32
    } else {
        config.rx_watermark()
    };
    level.max(1) - 1
}

/// Bytes per DMA request
pub(crate) fn dma_burst(config: &QspiConfig, len: usize) -> u32 {
    ((RX_FIFO_SIZE - 1) & !3)
        .min(4 * config.dma_max_burst)
        .min(len.min(u32::MAX as usize) as u32)
        .max(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::MockHw;

    fn config(bits: u32) -> QspiConfig {
        QspiConfig {
            operation: Operation::from_bits_retain(bits),
            ..QspiConfig::default()
        }
    }

    #[test]
    fn test_select() {
        let all = config(0x7);
        assert_eq!(Strategy::select(&all, true, 4096), Strategy::Dma);
        // DMA needs a channel and at least a FIFO's worth
        assert_eq!(Strategy::select(&all, false, 4096), Strategy::Interrupt);
        assert_eq!(Strategy::select(&all, true, 200), Strategy::Interrupt);
        // Below the ISR minimum
        assert_eq!(Strategy::select(&all, true, 63), Strategy::Polling);

        let polling = config(0x1);
        assert_eq!(Strategy::select(&polling, true, 4096), Strategy::Polling);
    }

    #[test]
    fn test_interrupt_watermark() {
        let cfg = QspiConfig::default();
        assert_eq!(interrupt_watermark(&cfg, 4096), 125);
        assert_eq!(interrupt_watermark(&cfg, 256), 255);
        assert_eq!(interrupt_watermark(&cfg, 3), 2);
        assert_eq!(interrupt_watermark(&cfg, 0), 0);
    }

    #[test]
    fn test_dma_burst() {
        let cfg = QspiConfig::default();
        assert_eq!(dma_burst(&cfg, 4096), 252);
        let cfg = QspiConfig {
            dma_max_burst: 16,
            ..QspiConfig::default()
        };
        assert_eq!(dma_burst(&cfg, 4096), 64);
    }

    struct Fifo {
        hw: MockHw,
        words: core::cell::RefCell<heapless::Deque<u32, 16>>,
    }

    impl Hardware for Fifo {
        fn read(&self, reg: Reg) -> u32 {
            match reg {
                Reg::SramFill => self.words.borrow().len() as u32,
                _ => self.hw.read(reg),
            }
        }
        fn write(&self, reg: Reg, value: u32) {
            self.hw.write(reg, value)
        }
        fn read_fifo(&self) -> u32 {
            self.words.borrow_mut().pop_front().unwrap_or(0)
        }
        fn write_fifo(&self, _value: u32) {}
        fn fifo_bus_address(&self) -> usize {
            0
        }
        fn reset(&self) {}
    }

    #[test]
    fn test_drain_tail_bytes() {
        let fifo = Fifo {
            hw: MockHw::new(),
            words: core::cell::RefCell::new(heapless::Deque::new()),
        };
        fifo.words.borrow_mut().push_back(0x4433_2211).unwrap();
        fifo.words.borrow_mut().push_back(0x8877_6655).unwrap();

        let mut buf = [0u8; 6];
        let deadline = Deadline::after(&crate::command::tests::Clock, 10);
        let mut rx = RxChunk::new(&mut buf, deadline);
        rx.drain(&fifo);
        assert_eq!(rx.left(), 0);
        assert_eq!(buf, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    }
}
