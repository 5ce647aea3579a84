//! Cadence QSPI controller register map
//!
//! Register offsets and bit definitions for the QSPI flash controller found
//! in the Altera Cyclone V and Arria 10 HPS, plus the [`Hardware`] trait
//! through which the driver reaches the register block and the AHB data
//! window.

/// Controller registers, as byte offsets from the block base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Reg {
    /// Configuration
    Cfg = 0x00,
    /// Device read instruction
    DevRd = 0x04,
    /// Device write instruction
    DevWr = 0x08,
    /// Chip select delays
    Delay = 0x0C,
    /// Read data capture
    RdDataCap = 0x10,
    /// Device size (address bytes, page size, block size)
    DevSz = 0x14,
    /// SRAM partition (RX words)
    SramPart = 0x18,
    /// Indirect AHB trigger address
    IndAddrTrig = 0x1C,
    /// DMA peripheral request sizes
    DmaPer = 0x20,
    /// Remap address
    RemapAddr = 0x24,
    /// Mode bits sent after the address
    ModeBit = 0x28,
    /// SRAM fill level (RX words low half, TX words high half)
    SramFill = 0x2C,
    /// TX threshold
    TxThresh = 0x30,
    /// RX threshold
    RxThresh = 0x34,
    /// Interrupt status
    IrqStat = 0x40,
    /// Interrupt mask
    IrqMask = 0x44,
    /// Lower write protection
    LowWrProt = 0x50,
    /// Upper write protection
    UppWrProt = 0x54,
    /// Write protection control
    WrProt = 0x58,
    /// Indirect read control
    IndRd = 0x60,
    /// Indirect read watermark
    IndRdWater = 0x64,
    /// Indirect read start address
    IndRdStAddr = 0x68,
    /// Indirect read byte count
    IndRdCnt = 0x6C,
    /// Indirect write control
    IndWr = 0x70,
    /// Indirect write watermark
    IndWrWater = 0x74,
    /// Indirect write start address
    IndWrStAddr = 0x78,
    /// Indirect write byte count
    IndWrCnt = 0x7C,
    /// Flash command control
    FlashCmd = 0x90,
    /// Flash command address
    FlashCmdAddr = 0x94,
    /// Flash command read data, lower word
    RdDataLo = 0xA0,
    /// Flash command read data, upper word
    RdDataUp = 0xA4,
    /// Flash command write data, lower word
    WrDataLo = 0xA8,
    /// Flash command write data, upper word
    WrDataUp = 0xAC,
}

impl Reg {
    /// Every register, in offset order
    pub const ALL: [Reg; 33] = [
        Reg::Cfg,
        Reg::DevRd,
        Reg::DevWr,
        Reg::Delay,
        Reg::RdDataCap,
        Reg::DevSz,
        Reg::SramPart,
        Reg::IndAddrTrig,
        Reg::DmaPer,
        Reg::RemapAddr,
        Reg::ModeBit,
        Reg::SramFill,
        Reg::TxThresh,
        Reg::RxThresh,
        Reg::IrqStat,
        Reg::IrqMask,
        Reg::LowWrProt,
        Reg::UppWrProt,
        Reg::WrProt,
        Reg::IndRd,
        Reg::IndRdWater,
        Reg::IndRdStAddr,
        Reg::IndRdCnt,
        Reg::IndWr,
        Reg::IndWrWater,
        Reg::IndWrStAddr,
        Reg::IndWrCnt,
        Reg::FlashCmd,
        Reg::FlashCmdAddr,
        Reg::RdDataLo,
        Reg::RdDataUp,
        Reg::WrDataLo,
        Reg::WrDataUp,
    ];

    /// Byte offset from the block base
    pub const fn offset(self) -> usize {
        self as usize
    }

    /// Register at a byte offset, if any
    pub fn from_offset(offset: usize) -> Option<Reg> {
        Self::ALL.iter().copied().find(|r| r.offset() == offset)
    }
}

/// Size of the register block mapping
pub const REG_BLOCK_SIZE: usize = 0x100;

// CFG bits
/// Controller enable
pub const CFG_ENABLE: u32 = 1 << 0;
/// Peripheral chip select decode (external 4-to-16 decoder)
pub const CFG_PERSELDEC: u32 = 1 << 9;
/// Chip select field shift
pub const CFG_CS_SHIFT: u32 = 10;
/// Chip select field mask
pub const CFG_CS_MASK: u32 = 0xF << CFG_CS_SHIFT;
/// DMA peripheral interface enable
pub const CFG_DMA: u32 = 1 << 15;
/// Baud divider field shift
pub const CFG_BAUD_SHIFT: u32 = 19;
/// Baud divider field mask (also the slowest setting, /32)
pub const CFG_BAUD_MASK: u32 = 0xF << CFG_BAUD_SHIFT;
/// Controller idle
pub const CFG_IDLE: u32 = 1 << 31;

// DEVRD bits
/// Mode bit enable
pub const DEVRD_MODE_EN: u32 = 1 << 20;
/// Instruction width bits, shared by the read and write instruction registers
pub const DEVRD_INST_WIDTH: u32 = 3 << 8;
/// Dummy clock field shift
pub const DEVRD_DUMMY_SHIFT: u32 = 24;

// RDDATACAP bits
/// Bypass the read data capture logic
pub const RDDATACAP_BYPASS: u32 = 1 << 0;

// DEVSZ fields
/// Address bytes minus one: 3-byte addressing
pub const DEVSZ_ADDR3: u32 = 2;
/// Address bytes minus one: 4-byte addressing
pub const DEVSZ_ADDR4: u32 = 3;

// IRQ bits
/// Indirect transfer watermark reached
pub const IRQ_WATERMARK: u32 = 1 << 6;

// INDRD/INDWR bits
/// Start an indirect operation
pub const IND_START: u32 = 1 << 0;
/// Indirect operation in progress (write side)
pub const IND_BUSY: u32 = 1 << 2;
/// Indirect operation done (write 1 to clear)
pub const IND_DONE: u32 = 1 << 5;

// FLASHCMD bits
/// Execute the command
pub const FLASHCMD_START: u32 = 1 << 0;
/// Command in progress
pub const FLASHCMD_PENDING: u32 = 1 << 1;
/// Write data byte count field shift
pub const FLASHCMD_WR_BYTES_SHIFT: u32 = 12;
/// Write data enable
pub const FLASHCMD_WR_EN: u32 = 1 << 15;
/// Read data byte count field shift
pub const FLASHCMD_RD_BYTES_SHIFT: u32 = 20;
/// Read data enable
pub const FLASHCMD_RD_EN: u32 = 1 << 23;
/// Opcode field shift
pub const FLASHCMD_OPCODE_SHIFT: u32 = 24;

// DMAPER: 4-byte single and burst requests (2^2)
/// DMA peripheral request configuration written at bring-up
pub const DMAPER_4_BYTES: u32 = (2 << 8) | 2;

// ============================================================================
// SRAM
// ============================================================================

/// Total SRAM shared by the RX and TX FIFOs, in bytes
pub const SRAM_SIZE: u32 = 512;
/// RX FIFO size in bytes
pub const RX_FIFO_SIZE: u32 = 256;
/// TX FIFO size in bytes
pub const TX_FIFO_SIZE: u32 = 256;
/// SRAMPART value for reads (RX words)
pub const RX_SRAM_PART: u32 = (RX_FIFO_SIZE + 3) / 4;
/// SRAMPART value for writes
pub const TX_SRAM_PART: u32 = (SRAM_SIZE - TX_FIFO_SIZE + 3) / 4;

/// RX words currently held in the SRAM, from a SRAMFILL value
pub const fn rx_fill_words(sram_fill: u32) -> u32 {
    sram_fill & 0xFFFF
}

/// TX words currently held in the SRAM, from a SRAMFILL value
pub const fn tx_fill_words(sram_fill: u32) -> u32 {
    (sram_fill >> 16) & 0xFFFF
}

/// Access to one controller instance
///
/// Implementations map the register block and the AHB data window. All
/// methods take `&self`: the hardware is shared state and the driver
/// serializes access with the controller lock.
pub trait Hardware {
    /// Read a 32-bit register
    fn read(&self, reg: Reg) -> u32;

    /// Write a 32-bit register
    fn write(&self, reg: Reg, value: u32);

    /// Pop one word from the RX FIFO through the AHB data window
    fn read_fifo(&self) -> u32;

    /// Push one word into the TX FIFO through the AHB data window
    fn write_fifo(&self, value: u32);

    /// Bus address of the AHB data window, as seen by a DMA engine
    fn fifo_bus_address(&self) -> usize;

    /// Pulse the controller reset line
    fn reset(&self);

    /// Read-modify-write helper: `reg = (reg & !clear) | set`
    fn modify(&self, reg: Reg, clear: u32, set: u32) {
        let value = self.read(reg);
        self.write(reg, (value & !clear) | set);
    }

    /// Clear the enable bit, leaving the rest of CFG untouched
    fn disable(&self) {
        self.modify(Reg::Cfg, CFG_ENABLE, 0);
    }
}

impl<T: Hardware + ?Sized> Hardware for &T {
    fn read(&self, reg: Reg) -> u32 {
        (**self).read(reg)
    }
    fn write(&self, reg: Reg, value: u32) {
        (**self).write(reg, value)
    }
    fn read_fifo(&self) -> u32 {
        (**self).read_fifo()
    }
    fn write_fifo(&self, value: u32) {
        (**self).write_fifo(value)
    }
    fn fifo_bus_address(&self) -> usize {
        (**self).fifo_bus_address()
    }
    fn reset(&self) {
        (**self).reset()
    }
}

#[cfg(feature = "alloc")]
impl<T: Hardware + ?Sized> Hardware for alloc::sync::Arc<T> {
    fn read(&self, reg: Reg) -> u32 {
        (**self).read(reg)
    }
    fn write(&self, reg: Reg, value: u32) {
        (**self).write(reg, value)
    }
    fn read_fifo(&self) -> u32 {
        (**self).read_fifo()
    }
    fn write_fifo(&self, value: u32) {
        (**self).write_fifo(value)
    }
    fn fifo_bus_address(&self) -> usize {
        (**self).fifo_bus_address()
    }
    fn reset(&self) {
        (**self).reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Reg::SramFill.offset(), 0x2C);
        assert_eq!(Reg::IndWrCnt.offset(), 0x7C);
        assert_eq!(Reg::WrDataUp.offset(), 0xAC);
        assert_eq!(Reg::from_offset(0x60), Some(Reg::IndRd));
        assert_eq!(Reg::from_offset(0x3C), None);
    }

    #[test]
    fn test_sram_partition() {
        assert_eq!(RX_SRAM_PART, 64);
        assert_eq!(TX_SRAM_PART, 64);
        assert_eq!(rx_fill_words(0x0003_0010), 0x10);
        assert_eq!(tx_fill_words(0x0003_0010), 3);
    }
}
