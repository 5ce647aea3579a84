//! Address map of the supported HPS variants

use std::fmt;
use std::str::FromStr;

use crate::error::SocError;

/// Hard processor system hosting the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Soc {
    /// Cyclone V / Arria V HPS
    CycloneV,
    /// Arria 10 HPS
    Arria10,
}

/// Where one controller instance lives in the physical address map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocLayout {
    /// QSPI register block
    pub regs: u64,
    /// AHB data window used for indirect transfers
    pub data: u64,
    /// Reset manager register holding the QSPI reset bit
    pub reset_reg: u64,
    /// QSPI bit in that register
    pub reset_bit: u32,
    /// Controller reference clock, in Hz
    pub clock_hz: u32,
}

impl Soc {
    /// Every supported variant
    pub const ALL: [Soc; 2] = [Soc::CycloneV, Soc::Arria10];

    /// Physical layout of the variant
    pub const fn layout(self) -> SocLayout {
        match self {
            Soc::CycloneV => SocLayout {
                regs: 0xFF70_5000,
                data: 0xFFA0_0000,
                reset_reg: 0xFFD0_5014,
                reset_bit: 5,
                clock_hz: 370_000_000,
            },
            Soc::Arria10 => SocLayout {
                regs: 0xFF80_9000,
                data: 0xFFA0_0000,
                reset_reg: 0xFFD0_5024,
                reset_bit: 6,
                clock_hz: 400_000_000,
            },
        }
    }

    /// Short name accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Soc::CycloneV => "cyclone5",
            Soc::Arria10 => "arria10",
        }
    }
}

impl fmt::Display for Soc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Soc {
    type Err = SocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyclone5" | "cyclonev" | "c5" | "arria5" => Ok(Soc::CycloneV),
            "arria10" | "a10" => Ok(Soc::Arria10),
            _ => Err(SocError::UnknownSoc(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("cyclone5".parse::<Soc>().unwrap(), Soc::CycloneV);
        assert_eq!("A10".parse::<Soc>().unwrap(), Soc::Arria10);
        assert!(matches!("stratix10".parse::<Soc>(), Err(SocError::UnknownSoc(_))));
        for soc in Soc::ALL {
            assert_eq!(soc.name().parse::<Soc>().unwrap(), soc);
        }
    }

    #[test]
    fn test_layouts_are_word_aligned() {
        for soc in Soc::ALL {
            let layout = soc.layout();
            assert_eq!(layout.regs & 0xFFF, 0);
            assert_eq!(layout.reset_reg & 3, 0);
            assert!(layout.reset_bit < 32);
        }
    }
}
