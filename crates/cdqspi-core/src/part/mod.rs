//! Flash part database
//!
//! The table is static and searched once per bring-up. Lookups match on
//! the JEDEC ID read from the part, masked according to the vendor (see
//! [`JedecId::from_bytes`]).

mod family;
mod table;
mod types;

pub use family::{spansion_latency_code, AddressExtension, Family, Tuning};
pub use table::PARTS;
pub use types::{Part, Tier};

/// Spansion S parts whose sector layout is encoded in the fifth ID byte
const SPANSION_VARIANT_IDS: [u32; 2] = [0x0018_2001, 0x0019_0201];

/// Manufacturer ID of Macronix
const MACRONIX: u8 = 0xC2;

/// JEDEC ID as read from a part, with the mask to apply to table IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JedecId {
    /// Assembled ID
    pub id: u32,
    /// Mask applied to table IDs before comparing
    pub mask: u32,
}

impl JedecId {
    /// Assemble the ID from the 5 bytes returned by RDID
    ///
    /// The first three bytes form the ID. Spansion S parts add the fifth
    /// byte in bits 24-27. Macronix table entries carry dummy cycle
    /// information in their top byte, which the match ignores.
    pub fn from_bytes(bytes: [u8; 5]) -> Self {
        let mut id = bytes[0] as u32 | (bytes[1] as u32) << 8 | (bytes[2] as u32) << 16;
        let mut mask = u32::MAX;
        if SPANSION_VARIANT_IDS.contains(&id) {
            id |= (bytes[4] as u32) << 24;
            mask = 0x0FFF_FFFF;
        } else if bytes[0] == MACRONIX {
            mask = 0x00FF_FFFF;
        }
        Self { id, mask }
    }

    /// Table entry matching this ID
    pub fn lookup(&self) -> Option<&'static Part> {
        PARTS.iter().find(|p| p.id & self.mask == self.id)
    }
}

/// Table entry with exactly this ID
pub fn find_part(id: u32) -> Option<&'static Part> {
    PARTS.iter().find(|p| p.id == id)
}

/// Table entries of one vendor (case-insensitive)
pub fn parts_by_vendor<'a>(vendor: &'a str) -> impl Iterator<Item = &'static Part> + 'a {
    PARTS
        .iter()
        .filter(move |p| p.vendor.eq_ignore_ascii_case(vendor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_id() {
        let id = JedecId::from_bytes([0xEF, 0x40, 0x15, 0x00, 0x00]);
        assert_eq!(id.id, 0x001540EF);
        assert_eq!(id.mask, u32::MAX);
        assert_eq!(id.lookup().map(|p| p.name), Some("W25Q16"));
    }

    #[test]
    fn test_spansion_variant_byte() {
        let id = JedecId::from_bytes([0x01, 0x20, 0x18, 0x4D, 0x01]);
        assert_eq!(id.id, 0x01182001);
        assert_eq!(id.mask, 0x0FFF_FFFF);
        assert_eq!(id.lookup().map(|p| p.id), Some(0x01182001));

        let id = JedecId::from_bytes([0x01, 0x20, 0x18, 0x4D, 0x00]);
        assert_eq!(id.lookup().map(|p| p.id), Some(0x00182001));
    }

    #[test]
    fn test_macronix_mask() {
        let id = JedecId::from_bytes([0xC2, 0x20, 0x18, 0x00, 0x00]);
        assert_eq!(id.mask, 0x00FF_FFFF);
        assert_eq!(id.lookup().map(|p| p.id & 0xFFFFFF), Some(0x1820C2));
    }

    #[test]
    fn test_unknown_id() {
        let id = JedecId::from_bytes([0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(id.lookup().is_none());
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in PARTS.iter().enumerate() {
            for b in &PARTS[i + 1..] {
                assert_ne!(a.id, b.id, "{} / {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_vendor_filter() {
        assert!(parts_by_vendor("winbond").count() > 5);
        assert!(parts_by_vendor("winbond").all(|p| p.vendor == "Winbond"));
        assert_eq!(parts_by_vendor("nobody").count(), 0);
    }
}
