use super::Engine;
use crate::config::Operation;
use crate::error::{Error, Result};
use crate::isr::Direction;
use crate::platform::{Deadline, Dma, Platform, Signal, Timeout};
use crate::regs::{
    tx_fill_words, Hardware, Reg, DEVRD_INST_WIDTH, IND_BUSY, IND_DONE, IND_START, TX_FIFO_SIZE,
    TX_SRAM_PART,
};

/// Opcode and 4 address bytes on top of the data
const WRITE_OVERHEAD: usize = 5;

/// Erased flash value; padding with it leaves bytes untouched
const ERASED: u8 = 0xFF;

impl<H, P, S, D> Engine<'_, H, P, S, D>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
    S: Signal,
    D: Dma,
{
    /// Program `data` starting at `addr`, one page at a time
    pub fn write(&mut self, addr: u32, data: &[u8]) -> Result<()> {
        let hw = self.s.hw;
        let slave = self.slave;

        hw.write(Reg::Cfg, slave.cfg_wr);
        hw.modify(
            Reg::DevRd,
            DEVRD_INST_WIDTH,
            slave.part.write_op & DEVRD_INST_WIDTH,
        );
        hw.write(Reg::DevWr, slave.dev_wr);
        hw.write(Reg::Delay, slave.delay);
        hw.write(Reg::DevSz, slave.dev_sz);
        hw.write(Reg::RdDataCap, slave.rd_cap);
        hw.write(Reg::SramPart, TX_SRAM_PART);
        hw.write(Reg::IndAddrTrig, 0);

        let page = slave.part.page_size().max(1);
        let mut done = 0;
        while done < data.len() {
            let at = addr.wrapping_add(done as u32);
            let len = self.chunk_len(at, data.len() - done, page);
            self.select_bank(at)?;
            self.write_chunk(at, &data[done..done + len])?;
            done += len;
        }
        Ok(())
    }

    fn write_chunk(&mut self, addr: u32, src: &[u8]) -> Result<()> {
        let hw = self.s.hw;
        let platform = self.s.platform;
        let config = self.s.config;

        hw.write(Reg::IndWrWater, 0xFFFF_FFFF);
        hw.write(Reg::IndWrStAddr, addr);
        hw.write(Reg::IndWrCnt, src.len() as u32);

        let ticks = self.transfer_ticks(src.len() + WRITE_OVERHEAD, self.slave.ns_per_byte_wr);
        let use_isr = config.operation.contains(Operation::TX_ISR)
            && src.len() as u64 >= config.min_tx_isr as u64;
        if use_isr {
            let water = config.tx_watermark().min(src.len() as u32);
            hw.write(Reg::IndWrWater, water);
            self.irq.arm(hw, Direction::Write);
        }
        log::debug!(
            "write 0x{:08X}+{} ({}, {} ticks)",
            addr,
            src.len(),
            if use_isr { "interrupt" } else { "polling" },
            ticks
        );

        let result = self.fill_and_wait(addr, src, ticks, use_isr);
        if use_isr {
            hw.write(Reg::IrqMask, 0);
            self.irq.set_direction(Direction::Idle);
        }
        result?;

        if !self
            .s
            .wait_ready(self.slave.family, Timeout::Ticks(platform.tick_hz()))?
        {
            log::warn!("Flash still busy one second after programming 0x{:08X}", addr);
            return Err(Error::Timeout);
        }
        Ok(())
    }

    /// Start the indirect write, feed the TX FIFO and wait for the
    /// controller to shift everything out
    fn fill_and_wait(&mut self, addr: u32, src: &[u8], ticks: u32, use_isr: bool) -> Result<()> {
        let hw = self.s.hw;
        let platform = self.s.platform;
        let masked = self.s.config.operation.contains(Operation::TX_IRQ_MASK);

        self.s.write_enable()?;
        let deadline = Deadline::after(platform, ticks);
        hw.write(Reg::IndWr, IND_DONE | IND_START);

        let mut state = if masked { platform.irq_save() } else { 0 };
        let mut pos = 0;
        let mut expired = false;
        while pos < src.len() && !expired {
            if masked {
                platform.irq_restore(state);
                expired = deadline.expired(platform);
                state = platform.irq_save();
            } else {
                expired = deadline.expired(platform);
            }

            let used = tx_fill_words(hw.read(Reg::SramFill)) * 4;
            let mut room = ((TX_FIFO_SIZE & !3).saturating_sub(used)) as usize;
            while room >= 4 && pos < src.len() {
                let n = (src.len() - pos).min(4);
                let mut word = [ERASED; 4];
                word[..n].copy_from_slice(&src[pos..pos + n]);
                hw.write_fifo(u32::from_le_bytes(word));
                pos += n;
                room -= 4;
            }
        }
        if masked {
            platform.irq_restore(state);
        }
        if pos < src.len() {
            log::warn!("TX FIFO stalled at 0x{:08X}, {} bytes unsent", addr, src.len() - pos);
            return Err(Error::Timeout);
        }

        if use_isr
            && !deadline.expired(platform)
            && tx_fill_words(hw.read(Reg::SramFill)) * 4 > hw.read(Reg::IndWrWater)
            && !self
                .irq
                .signal()
                .wait(Timeout::Ticks(ticks.saturating_mul(100)))
        {
            log::warn!("TX watermark interrupt never came at 0x{:08X}", addr);
            return Err(Error::Timeout);
        }

        while hw.read(Reg::IndWr) & IND_BUSY != 0 {
            if deadline.expired(platform) {
                log::warn!("Indirect write at 0x{:08X} still busy", addr);
                return Err(Error::Timeout);
            }
        }
        Ok(())
    }
}
