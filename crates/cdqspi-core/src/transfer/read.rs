use super::strategy::{RxChunk, Strategy};
use super::Engine;
use crate::error::{Error, Result};
use crate::platform::{Deadline, Dma, Platform, Signal};
use crate::regs::{Hardware, Reg, IND_DONE, RX_SRAM_PART};

/// Opcode, 4 address bytes and a mode byte on top of the data
const READ_OVERHEAD: usize = 6;

impl<H, P, S, D> Engine<'_, H, P, S, D>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
    S: Signal,
    D: Dma,
{
    /// Read `buf.len()` bytes starting at `addr`
    pub fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        let hw = self.s.hw;
        let slave = self.slave;

        hw.write(Reg::Cfg, slave.cfg_rd);
        hw.write(Reg::DevRd, slave.dev_rd);
        hw.write(Reg::Delay, slave.delay);
        hw.write(Reg::DevSz, slave.dev_sz);
        hw.write(Reg::RdDataCap, slave.rd_cap);
        hw.write(Reg::ModeBit, slave.mode_byte);
        hw.write(Reg::SramPart, RX_SRAM_PART);
        hw.write(Reg::IndAddrTrig, 0);

        let die = slave.part.die_size().max(1);
        let mut done = 0;
        while done < buf.len() {
            let at = addr.wrapping_add(done as u32);
            let len = self.chunk_len(at, buf.len() - done, die);
            self.select_bank(at)?;
            self.read_chunk(at, &mut buf[done..done + len])?;
            done += len;
        }
        Ok(())
    }

    fn read_chunk(&mut self, addr: u32, dst: &mut [u8]) -> Result<()> {
        let hw = self.s.hw;
        let platform = self.s.platform;

        hw.write(Reg::IndRdWater, 0);
        hw.write(Reg::IndRdStAddr, addr);
        hw.write(Reg::IndRdCnt, dst.len() as u32);

        let ticks = self.transfer_ticks(dst.len() + READ_OVERHEAD, self.slave.ns_per_byte_rd);
        let strategy = Strategy::select(self.s.config, self.dma.is_some(), dst.len());
        log::debug!(
            "read 0x{:08X}+{} ({:?}, {} ticks)",
            addr,
            dst.len(),
            strategy,
            ticks
        );

        let mut rx = RxChunk::new(dst, Deadline::after(platform, ticks));
        let mut result = strategy.start_chunk(self, &mut rx);
        if result.is_ok() {
            result = strategy.pump_or_wait(self, &mut rx);
        }
        strategy.finish(self);
        result?;

        while hw.read(Reg::IndRd) & IND_DONE == 0 {
            if rx.deadline.expired(platform) {
                log::warn!("Indirect read at 0x{:08X} never reported done", addr);
                return Err(Error::Timeout);
            }
        }
        Ok(())
    }
}
