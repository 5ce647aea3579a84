//! Flash part descriptor

/// Index of each size tier in [`Part::sizes`], [`Part::erase_op`] and
/// [`Part::erase_ms`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum Tier {
    /// Program page
    Page = 0,
    /// Sub-sector (typically 4 KiB)
    Subsector = 1,
    /// Sector (typically 64 KiB)
    Sector = 2,
    /// Die: the largest region a single indirect read can cover
    Die = 3,
    /// Whole device
    Device = 4,
}

impl Tier {
    /// Every tier, smallest first
    pub const ALL: [Tier; 5] = [
        Tier::Page,
        Tier::Subsector,
        Tier::Sector,
        Tier::Die,
        Tier::Device,
    ];

    /// Position in the per-tier arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier at an array position
    pub const fn from_index(index: usize) -> Option<Tier> {
        match index {
            0 => Some(Tier::Page),
            1 => Some(Tier::Subsector),
            2 => Some(Tier::Sector),
            3 => Some(Tier::Die),
            4 => Some(Tier::Device),
            _ => None,
        }
    }
}

/// Static description of one flash part
///
/// `read_op` and `write_op` are opcode words (see [`crate::opcodes`]).
/// `mode_byte` is non-zero when the read sends a mode byte after the
/// address; its low byte is the value sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    /// Vendor name
    pub vendor: &'static str,
    /// Part name
    pub name: &'static str,
    /// JEDEC ID: manufacturer in bits 0-7, then memory type and capacity.
    /// Bits 24-31 carry variant information on some vendors.
    pub id: u32,
    /// Size of each tier in bytes, non-decreasing
    pub sizes: [u32; 5],
    /// Erase opcode per tier, 0 when the tier cannot be erased directly
    pub erase_op: [u8; 5],
    /// Typical erase time per tier, in ms
    pub erase_ms: [u32; 5],
    /// Opcode word for bulk reads
    pub read_op: u32,
    /// Mode byte sent after the address (0 = none)
    pub mode_byte: u32,
    /// Opcode word for page programming
    pub write_op: u32,
    /// Maximum bus frequency for programming, in MHz
    pub write_max_mhz: u32,
    /// Read logic delay, in ns
    pub read_delay_ns: u32,
    /// Chip select delays in ns: CSSOT, CSEOT, CSDADS, CSDA
    pub delays_ns: [u8; 4],
    /// Maximum read frequency in MHz reachable with `i` dummy cycles
    pub dummy_mhz: [u16; 16],
    /// Ultra low power variant of this part, if it has one
    pub low_power: Option<&'static Part>,
}

impl Part {
    /// Size of a tier in bytes
    pub const fn size(&self, tier: Tier) -> u32 {
        self.sizes[tier.index()]
    }

    /// Program page size
    pub const fn page_size(&self) -> u32 {
        self.size(Tier::Page)
    }

    /// Die size
    pub const fn die_size(&self) -> u32 {
        self.size(Tier::Die)
    }

    /// Device size
    pub const fn device_size(&self) -> u32 {
        self.size(Tier::Device)
    }

    /// Returns true when addresses need a fourth byte
    pub const fn is_large(&self) -> bool {
        self.device_size() > 16 * 1024 * 1024
    }

    /// Number of address bytes sent with erase commands
    pub const fn address_bytes(&self) -> usize {
        if self.is_large() {
            4
        } else {
            3
        }
    }

    /// Smallest tier that has an erase opcode
    pub fn min_erase_tier(&self) -> Option<Tier> {
        Tier::ALL
            .iter()
            .copied()
            .find(|t| self.erase_op[t.index()] != 0)
    }

    /// Smallest directly erasable unit, falling back to the device size
    ///
    /// Only tiers below the device are considered.
    pub fn block_size(&self) -> u32 {
        Tier::ALL[..4]
            .iter()
            .find(|t| self.erase_op[t.index()] != 0)
            .map(|t| self.size(*t))
            .unwrap_or(self.device_size())
    }

    /// Maximum read frequency in MHz (the last dummy breakpoint)
    pub const fn read_max_mhz(&self) -> u32 {
        self.dummy_mhz[15] as u32
    }

    /// Returns true when the read sends a mode byte
    pub const fn has_mode_byte(&self) -> bool {
        self.mode_byte != 0
    }

    /// Returns true when either opcode runs a phase on 4 lanes
    pub const fn needs_quad(&self) -> bool {
        crate::opcodes::needs_quad(self.read_op, self.write_op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::table::PARTS;

    #[test]
    fn test_sizes_non_decreasing() {
        for part in PARTS {
            for pair in part.sizes.windows(2) {
                assert!(pair[0] <= pair[1], "{} {:?}", part.name, part.sizes);
            }
        }
    }

    #[test]
    fn test_erase_tiers_are_powers_of_two() {
        for part in PARTS {
            for tier in Tier::ALL {
                if part.erase_op[tier.index()] != 0 {
                    let size = part.size(tier);
                    assert!(size.is_power_of_two(), "{} tier {:?}", part.name, tier);
                    assert_eq!(part.device_size() % size, 0, "{}", part.name);
                }
            }
        }
    }

    #[test]
    fn test_read_max_is_last_breakpoint() {
        for part in PARTS {
            assert!(part.read_max_mhz() > 0, "{}", part.name);
        }
        let mx = PARTS.iter().find(|p| p.name == "MX25R512").unwrap();
        assert_eq!(mx.read_max_mhz(), 75);
    }

    #[test]
    fn test_block_size() {
        let m25p = PARTS.iter().find(|p| p.name == "M25P80").unwrap();
        assert_eq!(m25p.block_size(), 64 * 1024);
        assert_eq!(m25p.min_erase_tier(), Some(Tier::Sector));

        let pe = PARTS.iter().find(|p| p.name == "M25PE80").unwrap();
        assert_eq!(pe.block_size(), 256);
        assert_eq!(pe.min_erase_tier(), Some(Tier::Page));
    }

    #[test]
    fn test_tier_index_roundtrip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_index(tier.index()), Some(tier));
        }
        assert_eq!(Tier::from_index(5), None);
    }
}
