//! [`Hardware`] implementation over `/dev/mem`

use std::thread;
use std::time::Duration;

use cdqspi_core::regs::REG_BLOCK_SIZE;
use cdqspi_core::{Hardware, Reg};

use crate::error::Result;
use crate::physmap::PhysMap;
use crate::soc::{Soc, SocLayout};

/// Bytes of the AHB data window mapped; indirect transfers only use the
/// trigger address at its base
const DATA_WINDOW: usize = 0x1000;

/// How long the reset line is held
const RESET_PULSE: Duration = Duration::from_micros(10);

/// One controller of the HPS, reached through mapped physical memory
pub struct DevMemHardware {
    soc: Soc,
    layout: SocLayout,
    regs: PhysMap,
    data: PhysMap,
    reset: PhysMap,
}

impl DevMemHardware {
    /// Map the controller of `soc`
    pub fn open(soc: Soc) -> Result<Self> {
        let layout = soc.layout();
        let regs = PhysMap::new(layout.regs, REG_BLOCK_SIZE)?;
        let data = PhysMap::new(layout.data, DATA_WINDOW)?;
        let reset = PhysMap::new(layout.reset_reg, 4)?;
        log::info!(
            "Opened {} QSPI controller at {:#010x} (data window {:#010x})",
            soc,
            layout.regs,
            layout.data
        );
        Ok(Self {
            soc,
            layout,
            regs,
            data,
            reset,
        })
    }

    /// Variant this controller belongs to
    pub fn soc(&self) -> Soc {
        self.soc
    }

    /// Reference clock of the controller, in Hz
    pub fn clock_hz(&self) -> u32 {
        self.layout.clock_hz
    }
}

impl Hardware for DevMemHardware {
    fn read(&self, reg: Reg) -> u32 {
        self.regs.read32(reg as usize)
    }

    fn write(&self, reg: Reg, value: u32) {
        self.regs.write32(reg as usize, value)
    }

    fn read_fifo(&self) -> u32 {
        self.data.read32(0)
    }

    fn write_fifo(&self, value: u32) {
        self.data.write32(0, value)
    }

    fn fifo_bus_address(&self) -> usize {
        self.data.phys_addr() as usize
    }

    fn reset(&self) {
        let bit = 1 << self.layout.reset_bit;
        let value = self.reset.read32(0);
        self.reset.write32(0, value | bit);
        thread::sleep(RESET_PULSE);
        self.reset.write32(0, value & !bit);
        log::debug!("{} QSPI controller reset pulsed", self.soc);
    }
}
