//! Legacy flash command interface
//!
//! Single commands (status reads, register writes, write enable, erase) go
//! through the FLASHCMD register: up to 8 bytes of read or write data, no
//! address phase. A [`Session`] bundles what every command needs while the
//! controller lock is held: the register block, the platform services and
//! the driver configuration.

use crate::config::{CmdClock, QspiConfig};
use crate::error::{Error, Result};
use crate::opcodes::WREN;
use crate::platform::Platform;
use crate::regs::{
    Hardware, Reg, CFG_BAUD_MASK, CFG_ENABLE, CFG_IDLE, FLASHCMD_OPCODE_SHIFT, FLASHCMD_PENDING,
    FLASHCMD_RD_BYTES_SHIFT, FLASHCMD_RD_EN, FLASHCMD_START, FLASHCMD_WR_BYTES_SHIFT,
    FLASHCMD_WR_EN,
};

/// Spin bound on the FLASHCMD pending bit
pub const CMD_SPIN_LIMIT: u32 = 4 * 1024 * 1024;

/// Largest data phase of a single command
pub const CMD_MAX_BYTES: usize = 8;

/// Borrowed view of one controller while its lock is held
pub struct Session<'a, H: ?Sized, P: ?Sized> {
    pub(crate) hw: &'a H,
    pub(crate) platform: &'a P,
    pub(crate) config: &'a QspiConfig,
}

impl<'a, H, P> Session<'a, H, P>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    /// Wrap a locked controller
    pub fn new(hw: &'a H, platform: &'a P, config: &'a QspiConfig) -> Self {
        Self {
            hw,
            platform,
            config,
        }
    }

    /// Register block
    pub fn hw(&self) -> &'a H {
        self.hw
    }

    /// Platform services
    pub fn platform(&self) -> &'a P {
        self.platform
    }

    /// Driver configuration
    pub fn config(&self) -> &'a QspiConfig {
        self.config
    }

    /// Send `opcode` and read `buf.len()` bytes back
    pub fn command_read(&self, opcode: u8, buf: &mut [u8]) -> Result<()> {
        if buf.len() > CMD_MAX_BYTES {
            return Err(Error::InvalidArgument);
        }
        let mut word = (opcode as u32) << FLASHCMD_OPCODE_SHIFT;
        if !buf.is_empty() {
            word |= FLASHCMD_RD_EN | ((buf.len() as u32 - 1) << FLASHCMD_RD_BYTES_SHIFT);
        }

        log::trace!("cmd read 0x{:02X} ({} bytes)", opcode, buf.len());
        self.with_command_clock(|| {
            self.hw.write(Reg::FlashCmd, word);
            self.execute(opcode)?;

            let lo = self.hw.read(Reg::RdDataLo).to_le_bytes();
            let hi = self.hw.read(Reg::RdDataUp).to_le_bytes();
            for (i, byte) in buf.iter_mut().enumerate() {
                *byte = if i < 4 { lo[i] } else { hi[i - 4] };
            }
            Ok(())
        })
    }

    /// Send `opcode` followed by `data`
    pub fn command_write(&self, opcode: u8, data: &[u8]) -> Result<()> {
        if data.len() > CMD_MAX_BYTES {
            return Err(Error::InvalidArgument);
        }
        let mut word = (opcode as u32) << FLASHCMD_OPCODE_SHIFT;
        if !data.is_empty() {
            word |= FLASHCMD_WR_EN | ((data.len() as u32 - 1) << FLASHCMD_WR_BYTES_SHIFT);
        }
        let (lo, hi) = pack_data(data);

        log::trace!("cmd write 0x{:02X} {:02X?}", opcode, data);
        self.with_command_clock(|| {
            self.hw.write(Reg::FlashCmd, word);
            self.hw.write(Reg::WrDataLo, lo);
            self.hw.write(Reg::WrDataUp, hi);
            self.execute(opcode)
        })
    }

    /// Read a single byte register
    pub fn read_register(&self, opcode: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.command_read(opcode, &mut buf)?;
        Ok(buf[0])
    }

    /// Set the write enable latch
    pub fn write_enable(&self) -> Result<()> {
        self.command_write(WREN, &[])
    }

    /// Set the start bit and spin until the command leaves the controller
    fn execute(&self, opcode: u8) -> Result<()> {
        self.hw.modify(Reg::FlashCmd, 0, FLASHCMD_START);
        for _ in 0..CMD_SPIN_LIMIT {
            if self.hw.read(Reg::FlashCmd) & FLASHCMD_PENDING == 0
                || self.hw.read(Reg::Cfg) & CFG_IDLE != 0
            {
                return Ok(());
            }
        }
        log::warn!("Command 0x{:02X} still pending after {} polls", opcode, CMD_SPIN_LIMIT);
        Err(Error::Timeout)
    }

    /// Run `f` with the bus clock selected by the command clock policy
    fn with_command_clock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let saved = self.hw.read(Reg::Cfg) & !CFG_IDLE;
        match self.config.cmd_clock {
            CmdClock::Current => return f(),
            CmdClock::SlowestToggled => {
                self.hw.write(Reg::Cfg, saved & !CFG_ENABLE);
                self.hw.write(Reg::Cfg, CFG_BAUD_MASK | (saved & !CFG_ENABLE));
                self.hw.modify(Reg::Cfg, 0, CFG_ENABLE);
            }
            CmdClock::Slowest => self.hw.write(Reg::Cfg, saved | CFG_BAUD_MASK),
        }

        let result = f();

        match self.config.cmd_clock {
            CmdClock::SlowestToggled => {
                self.hw.write(Reg::Cfg, saved & !CFG_ENABLE);
                self.hw.modify(Reg::Cfg, 0, CFG_ENABLE);
            }
            _ => self.hw.write(Reg::Cfg, saved),
        }
        result
    }
}

/// Pack up to 8 bytes little-endian into the WRDATALO/WRDATAUP pair
pub(crate) fn pack_data(data: &[u8]) -> (u32, u32) {
    let mut bytes = [0u8; CMD_MAX_BYTES];
    let n = data.len().min(CMD_MAX_BYTES);
    bytes[..n].copy_from_slice(&data[..n]);
    (
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};

    /// Register file that completes commands instantly and records writes
    pub(crate) struct MockHw {
        pub regs: RefCell<[u32; 64]>,
        pub writes: RefCell<heapless::Vec<(Reg, u32), 256>>,
        pub reply: Cell<u64>,
    }

    impl MockHw {
        pub fn new() -> Self {
            Self {
                regs: RefCell::new([0; 64]),
                writes: RefCell::new(heapless::Vec::new()),
                reply: Cell::new(0),
            }
        }
    }

    impl Hardware for MockHw {
        fn read(&self, reg: Reg) -> u32 {
            match reg {
                Reg::RdDataLo => self.reply.get() as u32,
                Reg::RdDataUp => (self.reply.get() >> 32) as u32,
                Reg::FlashCmd => self.regs.borrow()[reg.offset() / 4] & !FLASHCMD_PENDING,
                _ => self.regs.borrow()[reg.offset() / 4],
            }
        }
        fn write(&self, reg: Reg, value: u32) {
            self.regs.borrow_mut()[reg.offset() / 4] = value;
            let _ = self.writes.borrow_mut().push((reg, value));
        }
        fn read_fifo(&self) -> u32 {
            0
        }
        fn write_fifo(&self, _value: u32) {}
        fn fifo_bus_address(&self) -> usize {
            0
        }
        fn reset(&self) {}
    }

    pub(crate) struct Clock;

    impl Platform for Clock {
        fn now(&self) -> u32 {
            0
        }
        fn tick_hz(&self) -> u32 {
            1000
        }
        fn sleep(&self, _ticks: u32) {}
    }

    fn writes_to(hw: &MockHw, reg: Reg) -> heapless::Vec<u32, 32> {
        hw.writes
            .borrow()
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }

    #[test]
    fn test_pack_data() {
        assert_eq!(pack_data(&[]), (0, 0));
        assert_eq!(pack_data(&[0x12, 0x34]), (0x3412, 0));
        assert_eq!(
            pack_data(&[1, 2, 3, 4, 5, 6]),
            (0x0403_0201, 0x0000_0605)
        );
    }

    #[test]
    fn test_read_word_layout() {
        let hw = MockHw::new();
        let cfg = QspiConfig {
            cmd_clock: CmdClock::Current,
            ..QspiConfig::default()
        };
        hw.reply.set(0x0000_0016_4020_EF);
        let s = Session::new(&hw, &Clock, &cfg);
        let mut id = [0u8; 5];
        s.command_read(0x9F, &mut id).unwrap();
        assert_eq!(id, [0xEF, 0x20, 0x40, 0x16, 0x00]);

        let cmds = writes_to(&hw, Reg::FlashCmd);
        assert_eq!(cmds[0], 0x9F << 24 | 1 << 23 | 4 << 20);
        assert_eq!(cmds[1], cmds[0] | FLASHCMD_START);
    }

    #[test]
    fn test_write_word_layout() {
        let hw = MockHw::new();
        let cfg = QspiConfig {
            cmd_clock: CmdClock::Current,
            ..QspiConfig::default()
        };
        let s = Session::new(&hw, &Clock, &cfg);
        s.command_write(0x01, &[0x00, 0x02]).unwrap();
        assert_eq!(writes_to(&hw, Reg::FlashCmd)[0], 0x01 << 24 | 1 << 15 | 1 << 12);
        assert_eq!(writes_to(&hw, Reg::WrDataLo)[0], 0x0200);

        s.write_enable().unwrap();
        assert_eq!(writes_to(&hw, Reg::FlashCmd)[2], 0x06 << 24);
    }

    #[test]
    fn test_too_long() {
        let hw = MockHw::new();
        let cfg = QspiConfig::default();
        let s = Session::new(&hw, &Clock, &cfg);
        let mut buf = [0u8; 9];
        assert_eq!(s.command_read(0x05, &mut buf), Err(Error::InvalidArgument));
        assert_eq!(s.command_write(0x01, &buf), Err(Error::InvalidArgument));
        assert!(hw.writes.borrow().is_empty());
    }

    #[test]
    fn test_slowest_clock_restores_cfg() {
        let hw = MockHw::new();
        let cfg = QspiConfig::default();
        hw.write(Reg::Cfg, 0x0008_0401);
        hw.writes.borrow_mut().clear();

        let s = Session::new(&hw, &Clock, &cfg);
        s.write_enable().unwrap();
        assert_eq!(
            writes_to(&hw, Reg::Cfg).as_slice(),
            &[0x0008_0401 | CFG_BAUD_MASK, 0x0008_0401]
        );
    }

    #[test]
    fn test_toggled_clock_sequence() {
        let hw = MockHw::new();
        let cfg = QspiConfig {
            cmd_clock: CmdClock::SlowestToggled,
            ..QspiConfig::default()
        };
        hw.write(Reg::Cfg, 0x0008_0401);
        hw.writes.borrow_mut().clear();

        let s = Session::new(&hw, &Clock, &cfg);
        s.write_enable().unwrap();
        assert_eq!(
            writes_to(&hw, Reg::Cfg).as_slice(),
            &[
                0x0008_0400,
                0x0008_0400 | CFG_BAUD_MASK,
                0x0008_0401 | CFG_BAUD_MASK,
                0x0008_0400,
                0x0008_0401,
            ]
        );
    }
}
