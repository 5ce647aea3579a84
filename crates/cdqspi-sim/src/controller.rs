//! Register-level model of the Cadence QSPI controller
//!
//! The model keeps a register file, an RX FIFO that the "hardware" keeps
//! topped up during an indirect read, a TX path that drains instantly, and
//! the FLASHCMD engine. Flash commands and indirect transfers are routed to
//! the [`SimFlash`] selected by the chip select field of CFG.
//!
//! When the unmasked interrupt status is non-zero after an access, the
//! registered interrupt hook runs on the accessing thread, after the model's
//! own lock has been released.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::thread::ThreadId;

use cdqspi_core::regs::{
    CFG_CS_MASK, CFG_CS_SHIFT, CFG_IDLE, FLASHCMD_OPCODE_SHIFT, FLASHCMD_PENDING,
    FLASHCMD_RD_BYTES_SHIFT, FLASHCMD_RD_EN, FLASHCMD_START, FLASHCMD_WR_BYTES_SHIFT,
    FLASHCMD_WR_EN, IND_BUSY, IND_DONE, IND_START, IRQ_WATERMARK, REG_BLOCK_SIZE, RX_FIFO_SIZE,
};
use cdqspi_core::{Hardware, Reg, MAX_SLAVES};

use crate::flash::SimFlash;

/// Bus address reported for the AHB data window
pub const SIM_FIFO_BUS_ADDRESS: usize = 0xFFA0_0000;

/// Where an access landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// A controller register
    Reg(Reg),
    /// The AHB data window
    Fifo,
}

/// One logged access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Thread that made the access
    pub thread: ThreadId,
    /// Register or data window
    pub port: Port,
    /// True for writes
    pub write: bool,
    /// Value read or written
    pub value: u32,
}

type IrqHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
struct IndirectRead {
    cs: usize,
    addr: usize,
    left: u32,
}

#[derive(Debug)]
struct IndirectWrite {
    cs: usize,
    addr: usize,
    count: u32,
    received: Vec<u8>,
}

#[derive(Debug)]
struct Inner {
    regs: [u32; REG_BLOCK_SIZE / 4],
    flashes: [Option<SimFlash>; MAX_SLAVES],
    rx: VecDeque<u32>,
    read: Option<IndirectRead>,
    read_done: bool,
    write: Option<IndirectWrite>,
    stuck: bool,
    rx_starved: bool,
    resets: u32,
    log: Option<Vec<Access>>,
}

impl Inner {
    fn reg(&self, reg: Reg) -> u32 {
        self.regs[reg.offset() / 4]
    }

    fn set(&mut self, reg: Reg, value: u32) {
        self.regs[reg.offset() / 4] = value;
    }

    fn chip_select(&self) -> usize {
        ((self.reg(Reg::Cfg) & CFG_CS_MASK) >> CFG_CS_SHIFT) as usize % MAX_SLAVES
    }

    /// Address bytes sent on indirect accesses, from DEVSZ
    fn address_bytes(&self) -> usize {
        (self.reg(Reg::DevSz) & 0xF) as usize + 1
    }

    fn record(&mut self, port: Port, write: bool, value: u32) {
        if let Some(log) = self.log.as_mut() {
            log.push(Access {
                thread: std::thread::current().id(),
                port,
                write,
                value,
            });
        }
    }

    fn irq_level(&self) -> u32 {
        let rx_above = self.read.is_some()
            && self.rx.len() as u32 * 4 > self.reg(Reg::IndRdWater);
        if rx_above || self.write.is_some() {
            IRQ_WATERMARK
        } else {
            0
        }
    }

    fn irq_pending(&self) -> bool {
        (self.reg(Reg::IrqStat) | self.irq_level()) & self.reg(Reg::IrqMask) != 0
    }

    fn read_reg(&mut self, reg: Reg) -> u32 {
        match reg {
            Reg::Cfg if !self.stuck => self.reg(reg) | CFG_IDLE,
            Reg::FlashCmd if self.stuck => self.reg(reg) | FLASHCMD_PENDING,
            Reg::SramFill => self.rx.len() as u32,
            Reg::IrqStat => self.reg(reg) | self.irq_level(),
            Reg::IndRd => {
                let mut value = self.reg(reg) & !(IND_DONE | IND_BUSY | IND_START);
                if self.read_done {
                    value |= IND_DONE;
                } else if self.read.is_some() {
                    value |= IND_BUSY;
                }
                value
            }
            Reg::IndWr => {
                let mut value = self.reg(reg) & !(IND_BUSY | IND_START);
                if self.write.is_some() {
                    value |= IND_BUSY;
                }
                value
            }
            _ => self.reg(reg),
        }
    }

    fn write_reg(&mut self, reg: Reg, value: u32) {
        match reg {
            Reg::Cfg => self.set(reg, value & !CFG_IDLE),
            Reg::IrqStat => {
                let stat = self.reg(reg) & !value;
                self.set(reg, stat);
            }
            Reg::FlashCmd => {
                self.set(reg, value & !(FLASHCMD_START | FLASHCMD_PENDING));
                if value & FLASHCMD_START != 0 && !self.stuck {
                    self.flash_command(value);
                }
            }
            Reg::IndRd => {
                if value & IND_DONE != 0 {
                    self.read_done = false;
                }
                self.set(reg, value & !(IND_DONE | IND_START));
                if value & IND_START != 0 {
                    self.start_read();
                }
            }
            Reg::IndWr => {
                self.set(reg, value & !(IND_DONE | IND_START));
                if value & IND_START != 0 {
                    self.start_write();
                }
            }
            _ => self.set(reg, value),
        }
    }

    fn flash_command(&mut self, word: u32) {
        let opcode = (word >> FLASHCMD_OPCODE_SHIFT) as u8;
        let read_len = if word & FLASHCMD_RD_EN != 0 {
            ((word >> FLASHCMD_RD_BYTES_SHIFT) & 7) as usize + 1
        } else {
            0
        };
        let write_len = if word & FLASHCMD_WR_EN != 0 {
            ((word >> FLASHCMD_WR_BYTES_SHIFT) & 7) as usize + 1
        } else {
            0
        };
        let mut data = [0u8; 8];
        data[..4].copy_from_slice(&self.reg(Reg::WrDataLo).to_le_bytes());
        data[4..].copy_from_slice(&self.reg(Reg::WrDataUp).to_le_bytes());

        let cs = self.chip_select();
        let out = match self.flashes[cs].as_mut() {
            Some(flash) => flash.command(opcode, &data[..write_len], read_len),
            // Nothing drives the data lines
            None => [0xFF; 8],
        };
        self.set(
            Reg::RdDataLo,
            u32::from_le_bytes([out[0], out[1], out[2], out[3]]),
        );
        self.set(
            Reg::RdDataUp,
            u32::from_le_bytes([out[4], out[5], out[6], out[7]]),
        );
    }

    fn start_read(&mut self) {
        let cs = self.chip_select();
        let addr_bytes = self.address_bytes();
        let start = self.reg(Reg::IndRdStAddr);
        let addr = match self.flashes[cs].as_ref() {
            Some(flash) => flash.effective_address(start, addr_bytes),
            None => start as usize,
        };
        self.rx.clear();
        self.read_done = false;
        self.read = Some(IndirectRead {
            cs,
            addr,
            left: self.reg(Reg::IndRdCnt),
        });
        self.refill();
    }

    /// Move flash data into the RX FIFO until it is full or the read is
    /// exhausted
    fn refill(&mut self) {
        if self.rx_starved {
            return;
        }
        let Some(read) = self.read.as_mut() else {
            return;
        };
        while read.left > 0 && (self.rx.len() as u32) < RX_FIFO_SIZE / 4 {
            let n = read.left.min(4) as usize;
            let mut word = [0xFFu8; 4];
            if let Some(flash) = self.flashes[read.cs].as_ref() {
                for (i, byte) in word.iter_mut().take(n).enumerate() {
                    *byte = flash.read_byte(read.addr + i);
                }
            }
            self.rx.push_back(u32::from_le_bytes(word));
            read.addr += n;
            read.left -= n as u32;
        }
    }

    fn pop_fifo(&mut self) -> u32 {
        let word = self.rx.pop_front().unwrap_or(0);
        self.refill();
        if self.rx.is_empty() && self.read.as_ref().is_some_and(|r| r.left == 0) {
            self.read = None;
            self.read_done = true;
        }
        word
    }

    fn start_write(&mut self) {
        let cs = self.chip_select();
        let addr_bytes = self.address_bytes();
        let start = self.reg(Reg::IndWrStAddr);
        let addr = match self.flashes[cs].as_ref() {
            Some(flash) => flash.effective_address(start, addr_bytes),
            None => start as usize,
        };
        let count = self.reg(Reg::IndWrCnt);
        self.write = Some(IndirectWrite {
            cs,
            addr,
            count,
            received: Vec::with_capacity(count as usize),
        });
    }

    fn push_fifo(&mut self, value: u32) {
        let Some(write) = self.write.as_mut() else {
            log::warn!("sim: TX FIFO write with no indirect write in progress");
            return;
        };
        let want = (write.count as usize - write.received.len()).min(4);
        write.received.extend_from_slice(&value.to_le_bytes()[..want]);
        if write.received.len() < write.count as usize {
            return;
        }

        if let Some(write) = self.write.take() {
            if let Some(flash) = self.flashes[write.cs].as_mut() {
                flash.program(write.addr, &write.received);
            }
        }
    }
}

/// Simulated QSPI controller with up to four flash parts
pub struct SimController {
    inner: Mutex<Inner>,
    hook: RwLock<Option<IrqHook>>,
    writes: AtomicU64,
}

impl Default for SimController {
    fn default() -> Self {
        Self::new()
    }
}

impl SimController {
    /// Controller with no flash attached
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                regs: [0; REG_BLOCK_SIZE / 4],
                flashes: Default::default(),
                rx: VecDeque::new(),
                read: None,
                read_done: false,
                write: None,
                stuck: false,
                rx_starved: false,
                resets: 0,
                log: None,
            }),
            hook: RwLock::new(None),
            writes: AtomicU64::new(0),
        }
    }

    /// Attach `flash` to chip select `cs`
    pub fn with_flash(self, cs: usize, flash: SimFlash) -> Self {
        self.attach(cs, flash);
        self
    }

    /// Attach `flash` to chip select `cs`, replacing whatever was there
    pub fn attach(&self, cs: usize, flash: SimFlash) {
        self.lock().flashes[cs % MAX_SLAVES] = Some(flash);
    }

    /// Run `f` on the flash at chip select `cs`
    pub fn flash<R>(&self, cs: usize, f: impl FnOnce(&mut SimFlash) -> R) -> Option<R> {
        self.lock().flashes.get_mut(cs)?.as_mut().map(f)
    }

    /// Call `hook` whenever an unmasked interrupt is pending
    pub fn set_irq_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.hook.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(hook));
    }

    /// Remove the interrupt hook
    pub fn clear_irq_hook(&self) {
        *self.hook.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Start recording every access
    pub fn enable_access_log(&self) {
        self.lock().log = Some(Vec::new());
    }

    /// Accesses recorded since [`SimController::enable_access_log`]
    pub fn access_log(&self) -> Vec<Access> {
        self.lock().log.clone().unwrap_or_default()
    }

    /// Never report idle and never complete commands
    pub fn set_stuck(&self, stuck: bool) {
        self.lock().stuck = stuck;
    }

    /// Stop moving flash data into the RX FIFO
    pub fn set_rx_starved(&self, starved: bool) {
        self.lock().rx_starved = starved;
    }

    /// Number of register and FIFO writes so far
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Number of reset pulses
    pub fn reset_count(&self) -> u32 {
        self.lock().resets
    }

    /// Raw register value, without side effects
    pub fn peek(&self, reg: Reg) -> u32 {
        self.lock().reg(reg)
    }

    /// Snapshot of the whole register file
    pub fn registers(&self) -> [u32; REG_BLOCK_SIZE / 4] {
        self.lock().regs
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run the hook if the access left an interrupt pending
    fn after_access(&self, pending: bool) {
        if !pending {
            return;
        }
        let hook = self.hook.read().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl Hardware for SimController {
    fn read(&self, reg: Reg) -> u32 {
        let (value, pending) = {
            let mut inner = self.lock();
            let value = inner.read_reg(reg);
            inner.record(Port::Reg(reg), false, value);
            (value, inner.irq_pending())
        };
        self.after_access(pending);
        value
    }

    fn write(&self, reg: Reg, value: u32) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        let pending = {
            let mut inner = self.lock();
            inner.record(Port::Reg(reg), true, value);
            inner.write_reg(reg, value);
            inner.irq_pending()
        };
        self.after_access(pending);
    }

    fn read_fifo(&self) -> u32 {
        let (value, pending) = {
            let mut inner = self.lock();
            let value = inner.pop_fifo();
            inner.record(Port::Fifo, false, value);
            (value, inner.irq_pending())
        };
        self.after_access(pending);
        value
    }

    fn write_fifo(&self, value: u32) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        let pending = {
            let mut inner = self.lock();
            inner.record(Port::Fifo, true, value);
            inner.push_fifo(value);
            inner.irq_pending()
        };
        self.after_access(pending);
    }

    fn fifo_bus_address(&self) -> usize {
        SIM_FIFO_BUS_ADDRESS
    }

    fn reset(&self) {
        let mut inner = self.lock();
        inner.regs = [0; REG_BLOCK_SIZE / 4];
        inner.rx.clear();
        inner.read = None;
        inner.read_done = false;
        inner.write = None;
        inner.resets += 1;
    }
}
