//! In-memory NOR flash model
//!
//! A [`SimFlash`] answers the single commands the driver sends through
//! FLASHCMD and serves the indirect reads and writes the controller model
//! forwards to it. Status registers, the write enable latch, 4-byte mode
//! and the extended address byte behave like the real parts closely enough
//! for every family recipe to run.

use cdqspi_core::opcodes::{
    BRRD, BRWR, EN4B, EWSR, EX4B, RDCR, RDEVCR, RDFSR, RDID, RDSR, RDSR2, RDSR3, RDVCR,
    RESET_SPANSION, RST, RSTEN, WRDI, WREAR, WREN, WREVCR, WRSR, WRVCR,
};
use cdqspi_core::{Part, Tier};

/// Status register 1: write in progress
const SR_WIP: u8 = 1 << 0;
/// Status register 1: write enable latch
const SR_WEL: u8 = 1 << 1;
/// Flag status register: ready
const FSR_READY: u8 = 1 << 7;
/// Bank address register: 4-byte addressing
const BAR_EXTADD: u8 = 1 << 7;

/// Power-on value of the Micron volatile configuration register
const VCR_DEFAULT: u8 = 0xFB;
/// Power-on value of the Micron enhanced volatile configuration register
const EVCR_DEFAULT: u8 = 0xDF;

/// One command received through FLASHCMD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCommand {
    /// Opcode byte
    pub opcode: u8,
    /// Bytes sent after the opcode
    pub data: Vec<u8>,
}

/// A flash part on one chip select
#[derive(Debug, Clone)]
pub struct SimFlash {
    part: &'static Part,
    jedec: [u8; 5],
    data: Vec<u8>,
    status: [u8; 3],
    vcr: u8,
    evcr: u8,
    bar: u8,
    ear: u8,
    wel: bool,
    volatile_write: bool,
    reset_enabled: bool,
    four_byte: bool,
    busy: u32,
    stuck_busy: bool,
    erase_busy_polls: u32,
    program_busy_polls: u32,
    log: Vec<SimCommand>,
    erases: u32,
    programs: u32,
}

impl SimFlash {
    /// Blank (erased) part answering with the ID of a table entry
    pub fn from_part(part: &'static Part) -> Self {
        let id = part.id;
        let jedec = [id as u8, (id >> 8) as u8, (id >> 16) as u8, 0, (id >> 24) as u8];
        Self {
            part,
            jedec,
            data: vec![0xFF; part.device_size() as usize],
            status: [0; 3],
            vcr: VCR_DEFAULT,
            evcr: EVCR_DEFAULT,
            bar: 0,
            ear: 0,
            wel: false,
            volatile_write: false,
            reset_enabled: false,
            four_byte: false,
            busy: 0,
            stuck_busy: false,
            erase_busy_polls: 2,
            program_busy_polls: 1,
            log: Vec::new(),
            erases: 0,
            programs: 0,
        }
    }

    /// Part answering with an arbitrary JEDEC ID, sized like `like`
    pub fn with_jedec(like: &'static Part, jedec: [u8; 5]) -> Self {
        let mut flash = Self::from_part(like);
        flash.jedec = jedec;
        flash
    }

    /// Pre-load the array from `image`, starting at offset 0
    pub fn load(&mut self, image: &[u8]) {
        let n = image.len().min(self.data.len());
        self.data[..n].copy_from_slice(&image[..n]);
    }

    /// Table entry the part was built from
    pub fn part(&self) -> &'static Part {
        self.part
    }

    /// Memory array
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable memory array
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Status registers 1-3 as last written (WIP/WEL not included)
    pub fn status(&self) -> [u8; 3] {
        self.status
    }

    /// Set the status registers
    pub fn set_status(&mut self, status: [u8; 3]) {
        self.status = status;
    }

    /// Micron volatile and enhanced volatile configuration registers
    pub fn volatile_config(&self) -> (u8, u8) {
        (self.vcr, self.evcr)
    }

    /// Spansion bank address register
    pub fn bank_register(&self) -> u8 {
        self.bar
    }

    /// Extended address register
    pub fn extended_address(&self) -> u8 {
        self.ear
    }

    /// Returns true in 4-byte address mode
    pub fn four_byte(&self) -> bool {
        self.four_byte
    }

    /// Returns true while the write enable latch is set
    pub fn write_enabled(&self) -> bool {
        self.wel
    }

    /// Keep reporting busy forever
    pub fn set_stuck_busy(&mut self, stuck: bool) {
        self.stuck_busy = stuck;
    }

    /// Status polls an erase (resp. program) stays busy for
    pub fn set_busy_polls(&mut self, erase: u32, program: u32) {
        self.erase_busy_polls = erase;
        self.program_busy_polls = program;
    }

    /// Commands received through FLASHCMD, oldest first
    pub fn commands(&self) -> &[SimCommand] {
        &self.log
    }

    /// Forget the command log
    pub fn clear_commands(&mut self) {
        self.log.clear();
    }

    /// Number of erase commands accepted
    pub fn erase_count(&self) -> u32 {
        self.erases
    }

    /// Number of indirect page programs accepted
    pub fn program_count(&self) -> u32 {
        self.programs
    }

    /// Returns true while an erase or program is in progress
    pub fn is_busy(&self) -> bool {
        self.stuck_busy || self.busy > 0
    }

    /// Absolute address of an access that sent `addr_bytes` address bytes
    pub(crate) fn effective_address(&self, addr: u32, addr_bytes: usize) -> usize {
        if addr_bytes >= 4 {
            return addr as usize;
        }
        let bank = self.ear | (self.bar & !BAR_EXTADD);
        ((bank as usize) << 24) | (addr as usize & 0xFF_FFFF)
    }

    /// Byte at an absolute address; the array wraps like the real part
    pub(crate) fn read_byte(&self, addr: usize) -> u8 {
        self.data[addr % self.data.len()]
    }

    /// Complete an indirect page program
    pub(crate) fn program(&mut self, addr: usize, bytes: &[u8]) {
        if !self.wel {
            log::warn!("{}: page program at 0x{:08X} without WEL", self.part.name, addr);
            return;
        }
        // Programming only clears bits
        let len = self.data.len();
        for (i, byte) in bytes.iter().enumerate() {
            self.data[(addr + i) % len] &= byte;
        }
        self.wel = false;
        self.busy = self.program_busy_polls;
        self.programs += 1;
    }

    /// Execute one FLASHCMD command; returns the bytes read back
    pub(crate) fn command(&mut self, opcode: u8, data: &[u8], read_len: usize) -> [u8; 8] {
        self.log.push(SimCommand {
            opcode,
            data: data.to_vec(),
        });
        let mut out = [0u8; 8];

        match opcode {
            RDID => out[..5].copy_from_slice(&self.jedec),
            RDSR => {
                let mut sr = self.status[0];
                if self.is_busy() {
                    sr |= SR_WIP;
                    self.busy = self.busy.saturating_sub(1);
                }
                if self.wel {
                    sr |= SR_WEL;
                }
                out[0] = sr;
            }
            RDSR2 => out[0] = self.status[1],
            RDSR3 => out[0] = self.status[2],
            RDCR => {
                out[0] = self.status[1];
                out[1] = self.status[2];
            }
            RDFSR => {
                if !self.is_busy() {
                    out[0] = FSR_READY;
                }
            }
            RDVCR => out[0] = self.vcr,
            RDEVCR => {
                out[0] = self.evcr;
                out[1] = self.evcr;
            }
            BRRD => out[0] = self.bar,

            WREN => self.wel = true,
            WRDI => self.wel = false,
            EWSR => self.volatile_write = true,
            WRSR => {
                if self.wel || self.volatile_write {
                    if let Some(&sr) = data.first() {
                        self.status[0] = sr & !(SR_WIP | SR_WEL);
                    }
                    for (reg, byte) in self.status[1..].iter_mut().zip(data.iter().skip(1)) {
                        *reg = *byte;
                    }
                    self.busy = 1;
                } else {
                    log::warn!("{}: WRSR ignored, not write enabled", self.part.name);
                }
                self.wel = false;
                self.volatile_write = false;
            }
            WRVCR => self.write_latched(data, |f, v| f.vcr = v),
            WREVCR => self.write_latched(data, |f, v| f.evcr = v),
            WREAR => self.write_latched(data, |f, v| f.ear = v),
            BRWR => self.write_latched(data, |f, v| {
                f.bar = v;
                f.four_byte = v & BAR_EXTADD != 0;
            }),
            EN4B => self.four_byte = true,
            EX4B => self.four_byte = false,

            RSTEN => self.reset_enabled = true,
            RST => {
                if self.reset_enabled {
                    self.soft_reset();
                }
            }
            RESET_SPANSION => self.soft_reset(),

            op => {
                if !self.erase(op, data) {
                    log::debug!("{}: ignoring opcode 0x{:02X}", self.part.name, op);
                }
            }
        }

        if opcode != RSTEN {
            self.reset_enabled = false;
        }
        for byte in out.iter_mut().skip(read_len) {
            *byte = 0;
        }
        out
    }

    /// Register write gated by the write enable latch
    fn write_latched(&mut self, data: &[u8], set: impl FnOnce(&mut Self, u8)) {
        match data.first() {
            Some(&value) if self.wel => set(self, value),
            _ => log::warn!("{}: register write ignored", self.part.name),
        }
        self.wel = false;
    }

    fn soft_reset(&mut self) {
        self.wel = false;
        self.volatile_write = false;
        self.four_byte = false;
        self.ear = 0;
        self.vcr = VCR_DEFAULT;
        self.evcr = EVCR_DEFAULT;
    }

    /// Run `opcode` as an erase if the part has a tier for it
    fn erase(&mut self, opcode: u8, data: &[u8]) -> bool {
        let Some(tier) = Tier::ALL
            .iter()
            .copied()
            .find(|t| self.part.erase_op[t.index()] == opcode)
        else {
            return false;
        };
        if !self.wel {
            log::warn!("{}: erase 0x{:02X} without WEL", self.part.name, opcode);
            return true;
        }

        let (start, size) = if tier == Tier::Device {
            (0, self.data.len())
        } else {
            let addr = data.iter().fold(0u32, |acc, b| (acc << 8) | *b as u32);
            let size = self.part.size(tier) as usize;
            let start = self.effective_address(addr, data.len()) & !(size - 1);
            (start % self.data.len(), size)
        };
        let end = (start + size).min(self.data.len());
        self.data[start..end].fill(0xFF);

        self.wel = false;
        self.busy = self.erase_busy_polls;
        self.erases += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdqspi_core::find_part;

    fn w25q16() -> SimFlash {
        SimFlash::from_part(find_part(0x001540EF).unwrap())
    }

    #[test]
    fn test_jedec_bytes() {
        let mut flash = w25q16();
        let id = flash.command(RDID, &[], 5);
        assert_eq!(&id[..5], &[0xEF, 0x40, 0x15, 0x00, 0x00]);

        let spansion = SimFlash::from_part(find_part(0x01182001).unwrap());
        assert_eq!(spansion.jedec, [0x01, 0x20, 0x18, 0x00, 0x01]);
    }

    #[test]
    fn test_erase_needs_wel() {
        let mut flash = w25q16();
        flash.data_mut()[0x1000] = 0x00;
        flash.command(0x20, &[0x00, 0x10, 0x00], 0);
        assert_eq!(flash.data()[0x1000], 0x00);

        flash.command(WREN, &[], 0);
        flash.command(0x20, &[0x00, 0x10, 0x00], 0);
        assert_eq!(flash.data()[0x1000], 0xFF);
        assert_eq!(flash.erase_count(), 1);
        assert!(!flash.write_enabled());
    }

    #[test]
    fn test_busy_countdown() {
        let mut flash = w25q16();
        flash.command(WREN, &[], 0);
        flash.command(0xC7, &[], 0);
        assert_eq!(flash.command(RDSR, &[], 1)[0] & SR_WIP, SR_WIP);
        assert_eq!(flash.command(RDSR, &[], 1)[0] & SR_WIP, SR_WIP);
        assert_eq!(flash.command(RDSR, &[], 1)[0] & SR_WIP, 0);
    }

    #[test]
    fn test_program_only_clears_bits() {
        let mut flash = w25q16();
        flash.command(WREN, &[], 0);
        flash.program(0x10, &[0xF0, 0x0F]);
        flash.command(WREN, &[], 0);
        flash.program(0x10, &[0x3C, 0xFF]);
        assert_eq!(&flash.data()[0x10..0x12], &[0x30, 0x0F]);
    }

    #[test]
    fn test_volatile_status_write() {
        let mut flash = w25q16();
        flash.command(EWSR, &[], 0);
        flash.command(WRSR, &[0x00, 0x02], 0);
        assert_eq!(flash.status(), [0x00, 0x02, 0x00]);
    }

    #[test]
    fn test_bank_addressing() {
        let mut flash = SimFlash::from_part(find_part(0x0019BA20).unwrap());
        assert_eq!(flash.effective_address(0x00_1000, 3), 0x1000);
        flash.command(WREN, &[], 0);
        flash.command(WREAR, &[0x01], 0);
        assert_eq!(flash.effective_address(0x00_1000, 3), 0x0100_1000);
        assert_eq!(flash.effective_address(0x00_1000, 4), 0x1000);
    }
}
