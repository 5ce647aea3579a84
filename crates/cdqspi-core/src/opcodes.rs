//! Flash opcodes and controller opcode words
//!
//! Raw command bytes are plain `u8` constants. Bulk read and program
//! operations are described with a 20-bit opcode word in the layout the
//! controller's DEVRD/DEVWR registers expect:
//!
//! ```text
//!   bits 16..19  data lanes         (0 = 1 lane, 1 = 2 lanes, 2 = 4 lanes)
//!   bits 12..15  address lanes
//!   bits  8..11  instruction lanes
//!   bits  0..7   opcode byte
//! ```

// ============================================================================
// Write control
// ============================================================================

/// Write Enable - required before any write/erase operation
pub const WREN: u8 = 0x06;
/// Write Disable - clears WEL bit in status register
pub const WRDI: u8 = 0x04;
/// Enable Write Status Register (volatile status write on SST, Winbond, Spansion K)
pub const EWSR: u8 = 0x50;

// ============================================================================
// Status and configuration registers
// ============================================================================

/// Read Status Register 1
pub const RDSR: u8 = 0x05;
/// Read Status Register 2 (Winbond, Spansion K) / Configuration Register (Spansion S)
pub const RDSR2: u8 = 0x35;
/// Read Status Register 3 (Spansion K)
pub const RDSR3: u8 = 0x33;
/// Read Configuration Register (Macronix)
pub const RDCR: u8 = 0x15;
/// Write Status Register (followed by the extra registers on most families)
pub const WRSR: u8 = 0x01;
/// Read Flag Status Register (Micron N25Q)
pub const RDFSR: u8 = 0x70;
/// Read Volatile Configuration Register (Micron N25Q)
pub const RDVCR: u8 = 0x85;
/// Write Volatile Configuration Register (Micron N25Q)
pub const WRVCR: u8 = 0x81;
/// Read Enhanced Volatile Configuration Register (Micron N25Q)
pub const RDEVCR: u8 = 0x65;
/// Write Enhanced Volatile Configuration Register (Micron N25Q)
pub const WREVCR: u8 = 0x61;

// ============================================================================
// Identification
// ============================================================================

/// Read JEDEC ID (manufacturer + device ID)
pub const RDID: u8 = 0x9F;
/// Number of ID bytes read at bring-up (the 5th byte carries Spansion variants)
pub const RDID_LEN: usize = 5;

// ============================================================================
// Address extension
// ============================================================================

/// Enter 4-byte address mode
pub const EN4B: u8 = 0xB7;
/// Exit 4-byte address mode
pub const EX4B: u8 = 0xE9;
/// Write Extended Address Register (Macronix, Micron, Winbond)
pub const WREAR: u8 = 0xC5;
/// Read Bank Address Register (Spansion S)
pub const BRRD: u8 = 0x16;
/// Write Bank Address Register (Spansion S)
pub const BRWR: u8 = 0x17;

// ============================================================================
// Reset
// ============================================================================

/// Reset Enable
pub const RSTEN: u8 = 0x66;
/// Reset Memory
pub const RST: u8 = 0x99;
/// Software Reset (Spansion S)
pub const RESET_SPANSION: u8 = 0xF0;

// ============================================================================
// Opcode words - read
// ============================================================================

/// Read (1-1-1)
pub const READ: u32 = 0x0_0003;
/// Fast Read (1-1-1)
pub const READ_FAST: u32 = 0x0_000B;
/// Dual Output Read (1-1-2)
pub const READ_2OUT: u32 = 0x1_003B;
/// Quad Output Read (1-1-4)
pub const READ_4OUT: u32 = 0x2_006B;
/// Dual I/O Read (1-2-2)
pub const READ_2IO: u32 = 0x1_10BB;
/// Quad I/O Read (1-4-4)
pub const READ_4IO: u32 = 0x2_20EB;

/// Read with 4-byte address (1-1-1)
pub const READ4: u32 = 0x0_0013;
/// Fast Read with 4-byte address (1-1-1)
pub const READ4_FAST: u32 = 0x0_000C;
/// Dual Output Read with 4-byte address (1-1-2)
pub const READ4_2OUT: u32 = 0x1_003C;
/// Quad Output Read with 4-byte address (1-1-4)
pub const READ4_4OUT: u32 = 0x2_006C;
/// Dual I/O Read with 4-byte address (1-2-2)
pub const READ4_2IO: u32 = 0x1_10BC;
/// Quad I/O Read with 4-byte address (1-4-4)
pub const READ4_4IO: u32 = 0x2_20EC;

// ============================================================================
// Opcode words - program
// ============================================================================

/// Page Program (1-1-1)
pub const PAGE_PGM: u32 = 0x0_0002;
/// Dual Input Page Program (1-1-2)
pub const PAGE_PGM_2OUT: u32 = 0x1_00A2;
/// Quad Input Page Program (1-1-4)
pub const PAGE_PGM_4OUT: u32 = 0x2_0032;
/// Macronix 4x I/O Page Program (1-4-4)
pub const PAGE_PGM_4IO_MX: u32 = 0x2_2038;

/// Mask of the lane nibbles that select 4 lanes
pub const QUAD_LANES_MASK: u32 = 0x2_2200;

/// Opcode byte of an opcode word
pub const fn opcode(word: u32) -> u8 {
    (word & 0xFF) as u8
}

/// Decode a lane nibble: 0 -> 1 lane, 1 -> 2 lanes, 2 -> 4 lanes
const fn lanes(nibble: u32) -> u32 {
    if nibble == 2 {
        4
    } else {
        nibble + 1
    }
}

/// Number of lanes used for the instruction phase
pub const fn instruction_lanes(word: u32) -> u32 {
    lanes((word >> 8) & 0xF)
}

/// Number of lanes used for the address phase
pub const fn address_lanes(word: u32) -> u32 {
    lanes((word >> 12) & 0xF)
}

/// Number of lanes used for the data phase
pub const fn data_lanes(word: u32) -> u32 {
    lanes((word >> 16) & 0xF)
}

/// Returns true if any phase of either word runs on 4 lanes
///
/// Quad operation needs the part's QE bit set at bring-up.
pub const fn needs_quad(read_op: u32, write_op: u32) -> bool {
    (read_op | write_op) & QUAD_LANES_MASK != 0
}
