//! Part families and their bring-up recipes
//!
//! Every family reads its status/configuration registers, computes the
//! values the driver needs (write protection off, quad enable when an
//! opcode uses 4 lanes, dummy cycles matching the read frequency) and
//! writes them back only when they differ.

use super::types::Part;
use crate::command::Session;
use crate::error::{Error, Result};
use crate::opcodes::{
    BRRD, BRWR, EN4B, EWSR, EX4B, RDCR, RDEVCR, RDSR, RDSR2, RDSR3, RDVCR, READ4_2IO, READ4_2OUT,
    READ4_4IO, READ4_4OUT, READ4_FAST, READ_2IO, READ_2OUT, READ_4IO, READ_4OUT, READ_FAST,
    RESET_SPANSION, RST, RSTEN, WREVCR, WRSR, WRVCR,
};
use crate::platform::{Platform, Timeout};
use crate::regs::Hardware;

/// How a part reaches addresses above 16 MiB in 3-byte mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressExtension {
    /// Write enable, then the bank byte to the extended address register (0xC5)
    ExtendedAddressRegister,
    /// Read-modify-write of the bank address register (0x16/0x17)
    BankRegister,
}

/// Flash family, resolved from the JEDEC ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Macronix MX25L and MX25U
    Macronix,
    /// Macronix MX25R (ultra low power / high performance)
    MacronixR,
    /// Macronix MX25V
    MacronixV,
    /// Micron M45PE
    MicronM45PE,
    /// Micron M25P, M25PE and M25PX
    MicronM25P,
    /// Micron N25Q
    MicronN25Q,
    /// Spansion S25FL208K
    SpansionS25FL208K,
    /// Spansion S25FL-K
    SpansionS25FLK,
    /// Spansion S25FL-P
    SpansionS25FLP,
    /// Spansion S25FL-S
    SpansionS25FLS,
    /// SST 25 series
    Sst,
    /// Winbond W25Q
    WinbondQ,
    /// Winbond W25X
    WinbondX,
    /// No bring-up recipe
    Unsupported,
}

/// Values resolved by bring-up that the recipes need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    /// Dummy cycles programmed for reads
    pub dummy_cycles: u32,
    /// Keep parts above 16 MiB in 4-byte address mode
    pub four_byte_address: bool,
    /// MX25R: stay in ultra low power mode
    pub low_power: bool,
}

impl Family {
    /// Family of a table ID
    pub const fn from_id(id: u32) -> Family {
        let two = id & 0xFFFF;
        let three = id & 0x00FF_FFFF;
        match two {
            0x20C2 | 0x22C2 | 0x24C2 | 0x25C2 => Family::Macronix,
            0x28C2 => Family::MacronixR,
            0x23C2 => Family::MacronixV,
            0x4020 => Family::MicronM45PE,
            0x2020 | 0x8020 | 0x7120 => Family::MicronM25P,
            0xBA20 | 0xBB20 => Family::MicronN25Q,
            0x4001 if three == 0x14_4001 => Family::SpansionS25FL208K,
            0x4001 => Family::SpansionS25FLK,
            0x0201 | 0x2001 if id & 0xF000_0000 != 0 => Family::SpansionS25FLP,
            0x0201 | 0x2001 => Family::SpansionS25FLS,
            0x25BF => Family::Sst,
            0x40EF | 0x60EF => Family::WinbondQ,
            0x30EF => Family::WinbondX,
            _ => Family::Unsupported,
        }
    }

    /// Returns true when readiness also needs the flag status register
    pub const fn has_flag_status(self) -> bool {
        matches!(self, Family::MicronN25Q)
    }

    /// Mechanism used to select the upper address byte, if the family has one
    pub const fn address_extension(self) -> Option<AddressExtension> {
        match self {
            Family::Macronix | Family::MicronN25Q | Family::WinbondQ => {
                Some(AddressExtension::ExtendedAddressRegister)
            }
            Family::SpansionS25FLS | Family::SpansionS25FLP => Some(AddressExtension::BankRegister),
            _ => None,
        }
    }

    /// Program the part's registers for the resolved configuration
    pub fn configure<H, P>(self, s: &Session<'_, H, P>, part: &Part, tuning: &Tuning) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
    {
        let quad = part.needs_quad();
        let dummy = tuning.dummy_cycles;

        match self {
            Family::Macronix => {
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let new0 = if quad { 0x40 } else { 0x00 };

                let has_cr = part.id & 0xFF00_0000 != 0;
                let (ori1, new1) = if has_cr {
                    let shift = (part.id >> 28) & 0xF;
                    let field: u32 = if part.device_size() >= 16 * 1024 * 1024 {
                        0x0B
                    } else {
                        0x01
                    };
                    let ori = s.read_register(RDCR)?;
                    let new = (ori as u32 & !(field << shift)) | (((part.id >> 24) & 0xF) << shift);
                    (ori, new as u8)
                } else {
                    (0, 0)
                };

                if (ori0, ori1) != (new0, new1) {
                    s.write_enable()?;
                    if has_cr {
                        s.command_write(WRSR, &[new0, new1])?;
                    } else {
                        s.command_write(WRSR, &[new0])?;
                    }
                    self.settle(s)?;
                }
                self.address_mode(s, part, tuning, false)?;
            }

            Family::MacronixR => {
                self.software_reset(s)?;
                self.settle(s)?;
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let mut cr = [0u8; 2];
                s.command_read(RDCR, &mut cr)?;

                let new0 = (ori0 & 0x03) | if quad { 0x40 } else { 0x00 };
                let new2 = (cr[1] & 0xFD) | if tuning.low_power { 0x00 } else { 0x02 };
                if ori0 != new0 || cr[1] != new2 {
                    s.write_enable()?;
                    s.command_write(WRSR, &[new0, cr[0], new2])?;
                    self.settle(s)?;
                }
            }

            Family::MacronixV => {
                self.software_reset(s)?;
                self.settle(s)?;
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let mut cr = [0u8; 2];
                s.command_read(RDCR, &mut cr)?;

                let new0 = (ori0 & 0x03) | if quad { 0x40 } else { 0x00 };
                let mut new1 = cr[0] & 0xBF;
                if (part.read_op == READ_2IO && dummy == 4) || (part.read_op == READ_4IO && dummy == 8)
                {
                    new1 |= 0x40;
                }
                if ori0 != new0 || cr[0] != new1 {
                    s.write_enable()?;
                    s.command_write(WRSR, &[new0, new1])?;
                    self.settle(s)?;
                }
            }

            Family::MicronM45PE => {}

            Family::MicronM25P => self.write_status(s, 0x60, false)?,

            Family::MicronN25Q => {
                self.software_reset(s)?;
                self.write_status(s, 0x43, false)?;

                let vcr = s.read_register(RDVCR)?;
                let new = (vcr & 0x0F) | ((dummy << 4) as u8);
                if vcr != new {
                    s.write_enable()?;
                    s.command_write(WRVCR, &[new])?;
                    self.settle(s)?;
                }

                let mut evcr = [0u8; 2];
                s.command_read(RDEVCR, &mut evcr)?;
                let new = evcr[0] | 0xC0;
                if evcr[0] != new {
                    s.write_enable()?;
                    s.command_write(WREVCR, &[new])?;
                    self.settle(s)?;
                }
                self.address_mode(s, part, tuning, true)?;
            }

            Family::SpansionS25FL208K => self.write_status(s, 0x40, false)?,

            Family::SpansionS25FLK => {
                self.software_reset(s)?;
                self.settle(s)?;
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let ori1 = s.read_register(RDSR2)? & 0x3F;
                let ori2 = s.read_register(RDSR3)?;

                let new0 = 0x00;
                let new1 = (ori1 & 0x3C) | if quad { 0x02 } else { 0x00 };
                let new2 = (ori2 & 0x80) | 0x10 | dummy as u8;
                if (ori0, ori1, ori2) != (new0, new1, new2) {
                    s.command_write(EWSR, &[])?;
                    s.command_write(WRSR, &[new0, new1, new2])?;
                    self.settle(s)?;
                }
            }

            Family::SpansionS25FLP => self.write_status(s, 0x00, false)?,

            Family::SpansionS25FLS => {
                s.write_enable()?;
                s.command_write(RESET_SPANSION, &[])?;
                self.settle(s)?;
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let ori1 = s.read_register(RDSR2)?;

                let new0 = 0x00;
                let mut lc = spansion_latency_code(part, dummy);
                if quad {
                    lc |= 0x02;
                }
                let new1 = ((ori1 | 0x08) & 0x3D) | lc;
                if ori0 != new0 || ori1 != new1 {
                    s.write_enable()?;
                    s.command_write(WRSR, &[new0, new1])?;
                    self.settle(s)?;
                }

                if part.is_large() {
                    let bar = s.read_register(BRRD)?;
                    let new = if tuning.four_byte_address {
                        bar | 0x80
                    } else {
                        bar & 0x7F
                    };
                    if bar != new {
                        s.write_enable()?;
                        s.command_write(BRWR, &[new])?;
                        self.settle(s)?;
                    }
                }
            }

            Family::Sst => self.write_status(s, 0x43, true)?,

            Family::WinbondQ => {
                let ori0 = s.read_register(RDSR)? & 0xFC;
                let ori1 = s.read_register(RDSR2)? & 0x7F;

                let new0 = ori0 & 0x64;
                let new1 = (ori1 & 0x40) | if quad { 0x02 } else { 0x00 };
                if ori0 != new0 || ori1 != new1 {
                    s.command_write(EWSR, &[])?;
                    s.command_write(WRSR, &[new0, new1])?;
                    self.settle(s)?;
                }
                self.address_mode(s, part, tuning, false)?;
            }

            Family::WinbondX => self.write_status(s, 0x40, true)?,

            Family::Unsupported => return Err(Error::UnsupportedPart { id: part.id }),
        }
        Ok(())
    }

    /// Keep only `keep` of status register 1 (WEL/WIP ignored)
    ///
    /// Parts with a volatile status register take EWSR instead of WREN.
    fn write_status<H, P>(self, s: &Session<'_, H, P>, keep: u8, volatile: bool) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
    {
        let ori = s.read_register(RDSR)? & 0xFC;
        let new = ori & keep;
        if ori != new {
            if volatile {
                s.command_write(EWSR, &[])?;
            } else {
                s.write_enable()?;
            }
            s.command_write(WRSR, &[new])?;
            self.settle(s)?;
        }
        Ok(())
    }

    fn software_reset<H, P>(self, s: &Session<'_, H, P>) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
    {
        s.command_write(RSTEN, &[])?;
        s.command_write(RST, &[])
    }

    /// Enter or leave 4-byte address mode on parts above 16 MiB
    fn address_mode<H, P>(
        self,
        s: &Session<'_, H, P>,
        part: &Part,
        tuning: &Tuning,
        write_enable: bool,
    ) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
    {
        if !part.is_large() {
            return Ok(());
        }
        if write_enable {
            s.write_enable()?;
        }
        if tuning.four_byte_address {
            s.command_write(EN4B, &[])?;
            self.settle(s)
        } else {
            s.command_write(EX4B, &[])
        }
    }

    /// Give a register write up to one second to complete
    fn settle<H, P>(self, s: &Session<'_, H, P>) -> Result<()>
    where
        H: Hardware + ?Sized,
        P: Platform + ?Sized,
    {
        let second = Timeout::Ticks(s.platform().tick_hz());
        if !s.wait_ready(self, second)? {
            log::warn!("{:?}: part still busy after a register write", self);
        }
        Ok(())
    }
}

/// Latency code bits (CR1 bits 6-7) of a Spansion S part for its read
/// opcode and dummy cycle count
pub fn spansion_latency_code(part: &Part, dummy: u32) -> u8 {
    let code: u32 = match part.read_op {
        READ_FAST | READ4_FAST | READ_2OUT | READ4_2OUT | READ_4OUT | READ4_4OUT => {
            if dummy == 0 {
                3
            } else {
                0
            }
        }
        READ_2IO | READ4_2IO => {
            if part.has_mode_byte() {
                dummy
            } else {
                match dummy {
                    5 => 1,
                    6 => 2,
                    _ => 0,
                }
            }
        }
        READ_4IO | READ4_4IO => match dummy {
            5 => 2,
            1 => 3,
            _ => 0,
        },
        _ => 0,
    };
    (code << 6) as u8
}
