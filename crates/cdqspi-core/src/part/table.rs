//! Supported flash parts
//!
//! One entry per JEDEC ID. Parts sold in several ID variants (bottom/top
//! boot, 64K/256K sector Spansion S) carry one entry per variant. The
//! Macronix MX25R parts also carry an ultra low power variant, selected
//! at bring-up.

use super::types::Part;
use crate::opcodes::{
    PAGE_PGM, PAGE_PGM_2OUT, PAGE_PGM_4IO_MX, PAGE_PGM_4OUT, READ_2IO, READ_2OUT, READ_4IO,
    READ_FAST,
};

const KIB: u32 = 1024;
const MIB: u32 = 1024 * 1024;

/// Every part the driver knows how to bring up
pub static PARTS: &[Part] = &[
    Part {
        vendor: "Macronix",
        name: "MX25L512",
        id: 0x001020C2,
        sizes: [256, 4 * KIB, 64 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 360],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L5121",
        id: 0x001022C2,
        sizes: [256, 4 * KIB, 64 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 900, 0, 900],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 25,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 45, 45, 45, 45, 45, 45, 45, 45],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L10XX",
        id: 0x001120C2,
        sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 720],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [20, 20, 40, 40],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L10XX",
        id: 0x001122C2,
        sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 900, 0, 1350],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 25,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 45, 45, 45, 45, 45, 45, 45, 45],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L20XX",
        id: 0x001220C2,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 1530],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 86,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L40XX",
        id: 0x001320C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 1530],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 86,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L80XX",
        id: 0x001420C2,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 54, 360, 0, 3150],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 86,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L16XX",
        id: 0x001520C2,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 5850],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L16XX",
        id: 0x001524C2,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 36, 360, 0, 4500],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L16XX",
        id: 0x001525C2,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 360, 0, 5400],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L3206",
        id: 0x001620C2,
        sizes: [256, 4 * KIB, 64 * KIB, 4 * MIB, 4 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 225, 0, 9000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 86, 86, 86, 86, 86, 86, 86, 86],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L64XX",
        id: 0x001720C2,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 30, 300, 0, 18000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 86,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 86, 86, 86, 86, 86, 86, 86, 86],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L64XX",
        id: 0x001725C2,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 225, 0, 18000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 86, 86, 86, 86, 86, 86, 86, 86],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L128XX",
        id: 0x001820C2,
        sizes: [256, 4 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 180, 0, 34000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 84, 84, 84, 84, 84, 84, 84, 84],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L256XX",
        id: 0x001920C2,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 32 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 15, 180, 0, 100000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 120,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25L512XX",
        id: 0x001A20C2,
        sizes: [256, 4 * KIB, 64 * KIB, 64 * MIB, 64 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 15, 180, 0, 100000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 120,
        read_delay_ns: 10,
        delays_ns: [20, 20, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25R512",
        id: 0x001028C2,
        sizes: [256, 4 * KIB, 64 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 612],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 75],
        low_power: Some(&MX25R512_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R1035",
        id: 0x001128C2,
        sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 612],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: Some(&MX25R1035_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R2035",
        id: 0x001228C2,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 2430],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 75],
        low_power: Some(&MX25R2035_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R4035",
        id: 0x001328C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 2430],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: Some(&MX25R4035_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R8035",
        id: 0x001428C2,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 4860],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: Some(&MX25R8035_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R1635",
        id: 0x001528C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 10800],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: Some(&MX25R1635_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R3235",
        id: 0x001628C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 4 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 21600],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: Some(&MX25R3235_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25R6435",
        id: 0x001728C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 40000],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: Some(&MX25R6435_LP),
    },
    Part {
        vendor: "Macronix",
        name: "MX25V512",
        id: 0x001023C2,
        sizes: [256, 4 * KIB, 64 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 630],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25V1035",
        id: 0x001123C2,
        sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 630],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25V2035",
        id: 0x001223C2,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 2520],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25V4035",
        id: 0x001323C2,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 2250],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25V8035",
        id: 0x001423C2,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 4500],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Macronix",
        name: "MX25V1635",
        id: 0x001523C2,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 33, 400, 0, 10800],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4IO_MX,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 30, 30],
        dummy_mhz: [0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P05A",
        id: 0x00102020,
        sizes: [256, 32 * KIB, 32 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 585, 0, 765],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 40,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 40, 40, 40, 40, 40, 40, 40, 40],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P10A",
        id: 0x00112020,
        sizes: [256, 32 * KIB, 32 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 585, 0, 1530],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 50,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 50, 50, 50, 50, 50, 50, 50, 50],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P20",
        id: 0x00122020,
        sizes: [256, 64 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 900, 0, 2520],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P40",
        id: 0x00132020,
        sizes: [256, 64 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 540, 0, 4050],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P80",
        id: 0x00142020,
        sizes: [256, 64 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 540, 0, 7200],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P16",
        id: 0x00152020,
        sizes: [256, 64 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 540, 0, 11700],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P32",
        id: 0x00162020,
        sizes: [256, 64 * KIB, 64 * KIB, 4 * MIB, 4 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 540, 0, 11700],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P64",
        id: 0x00172020,
        sizes: [256, 32 * KIB, 32 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 450, 0, 31500],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25P128",
        id: 0x00182020,
        sizes: [256, 256 * KIB, 256 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 1440, 0, 50400],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 50,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 50, 50, 50, 50, 50, 50, 50, 50],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PE10",
        id: 0x00118020,
        sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0xDB, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [8, 72, 1350, 0, 4050],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PE20",
        id: 0x00128020,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0xDB, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [8, 72, 1350, 0, 4050],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PE40",
        id: 0x00138020,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0xDB, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [8, 72, 1350, 0, 4050],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PE80",
        id: 0x00148020,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0xDB, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [8, 45, 900, 0, 9000],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PE16",
        id: 0x00158020,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0xDB, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [8, 45, 900, 0, 22500],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PX80",
        id: 0x00147120,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 63, 540, 0, 7200],
        read_op: READ_2OUT,
        mode_byte: 0x000,
        write_op: PAGE_PGM_2OUT,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 80, 80],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PX16",
        id: 0x00157120,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 63, 540, 0, 13500],
        read_op: READ_2OUT,
        mode_byte: 0x000,
        write_op: PAGE_PGM_2OUT,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 80, 80],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M25PX32",
        id: 0x00167120,
        sizes: [256, 4 * KIB, 64 * KIB, 4 * MIB, 4 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 63, 630, 0, 30600],
        read_op: READ_2OUT,
        mode_byte: 0x000,
        write_op: PAGE_PGM_2OUT,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 80, 80],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M45PE10",
        id: 0x00114020,
        sizes: [256, 64 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0xDB, 0, 0xD8, 0, 0],
        erase_ms: [9, 0, 1350, 0, 0],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M45PE20",
        id: 0x00124020,
        sizes: [256, 64 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0xDB, 0, 0xD8, 0, 0],
        erase_ms: [9, 0, 1350, 0, 0],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M45PE40",
        id: 0x00134020,
        sizes: [256, 64 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0xDB, 0, 0xD8, 0, 0],
        erase_ms: [9, 0, 1350, 0, 0],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M45PE80",
        id: 0x00144020,
        sizes: [256, 64 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0xDB, 0, 0xD8, 0, 0],
        erase_ms: [9, 0, 900, 0, 0],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "M45PE16",
        id: 0x00154020,
        sizes: [256, 64 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0xDB, 0, 0xD8, 0, 0],
        erase_ms: [9, 0, 900, 0, 0],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 75,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 75, 75, 75, 75, 75, 75, 75, 75],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q032",
        id: 0x0016BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 4 * MIB, 4 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 225, 540, 0, 22500],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q064",
        id: 0x0017BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 225, 540, 0, 45000],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 20, 39, 49, 59, 69, 78, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q064",
        id: 0x0017BB20,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 225, 540, 0, 45000],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 20, 39, 49, 59, 69, 78, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q128",
        id: 0x0018BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 54, 270, 0, 41400],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q128",
        id: 0x0018BB20,
        sizes: [256, 4 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 54, 270, 0, 41400],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q256",
        id: 0x0019BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 32 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 225, 540, 0, 180000],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q256",
        id: 0x0019BB20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 32 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 225, 540, 0, 180000],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q512",
        id: 0x0020BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 64 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0],
        erase_ms: [0, 225, 540, 0, 0],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q512",
        id: 0x0020BB20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 64 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0],
        erase_ms: [0, 225, 540, 0, 0],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q00",
        id: 0x0021BA20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 128 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0],
        erase_ms: [0, 225, 540, 0, 0],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Micron",
        name: "N25Q00",
        id: 0x0021BB20,
        sizes: [256, 4 * KIB, 64 * KIB, 32 * MIB, 128 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0],
        erase_ms: [0, 225, 540, 0, 0],
        read_op: READ_4IO,
        mode_byte: 0x000,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 30, 40, 50, 60, 70, 80, 86, 95, 105, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL127S/128S/128P",
        id: 0x01182001,
        sizes: [256, 64 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 475, 0, 29700],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [3, 3, 50, 50],
        dummy_mhz: [0, 50, 50, 50, 80, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL127S/128S/128P",
        id: 0x00182001,
        sizes: [256, 256 * KIB, 256 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 475, 0, 29700],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [3, 3, 50, 50],
        dummy_mhz: [0, 50, 50, 50, 80, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL256S/256P",
        id: 0x01190201,
        sizes: [256, 64 * KIB, 64 * KIB, 32 * MIB, 32 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 475, 0, 59400],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [3, 3, 50, 50],
        dummy_mhz: [0, 50, 50, 50, 80, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL256S/256P",
        id: 0x00190201,
        sizes: [256, 256 * KIB, 256 * KIB, 32 * MIB, 32 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0xC7],
        erase_ms: [0, 0, 475, 0, 59400],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [3, 3, 50, 50],
        dummy_mhz: [0, 50, 50, 50, 80, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL512S",
        id: 0x00200201,
        sizes: [256, 256 * KIB, 256 * KIB, 64 * MIB, 64 * MIB],
        erase_op: [0, 0, 0xD8, 0, 0x60],
        erase_ms: [0, 0, 475, 0, 92700],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [3, 3, 50, 50],
        dummy_mhz: [0, 50, 50, 50, 80, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 90],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL116K",
        id: 0x00154001,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0x60],
        erase_ms: [0, 45, 475, 0, 10080],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 40, 40],
        dummy_mhz: [0, 49, 59, 69, 78, 86, 95, 108, 108, 108, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL132K",
        id: 0x00164001,
        sizes: [256, 4 * KIB, 64 * KIB, 4 * MIB, 4 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0x60],
        erase_ms: [0, 45, 475, 0, 28800],
        read_op: READ_2IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 40, 40],
        dummy_mhz: [0, 94, 105, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 80],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL164K",
        id: 0x00174001,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0x60],
        erase_ms: [0, 45, 475, 0, 57600],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 108,
        read_delay_ns: 10,
        delays_ns: [5, 5, 40, 40],
        dummy_mhz: [0, 49, 59, 69, 78, 86, 95, 108, 108, 108, 108, 108, 108, 108, 108, 108],
        low_power: None,
    },
    Part {
        vendor: "Spansion",
        name: "S25FL208K",
        id: 0x00144001,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 45, 475, 0, 6300],
        read_op: READ_2OUT,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 76,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 76, 76, 76, 76, 76, 76, 76, 60],
        low_power: None,
    },
    Part {
        vendor: "SST",
        name: "S25FV016K",
        id: 0x004125BF,
        sizes: [1, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 22, 22, 0, 50],
        read_op: READ_FAST,
        mode_byte: 0x000,
        write_op: PAGE_PGM,
        write_max_mhz: 80,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 0, 0, 0, 0, 80, 80, 80, 80, 80, 80, 80, 80],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q20",
        id: 0x001240EF,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 135, 0, 450],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q40",
        id: 0x001340EF,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 135, 0, 900],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q80",
        id: 0x001440EF,
        sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 40, 135, 0, 1800],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q16",
        id: 0x001540EF,
        sizes: [256, 4 * KIB, 64 * KIB, 2 * MIB, 2 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 135, 0, 2700],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 50],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q64",
        id: 0x001740EF,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 40, 135, 0, 18000],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q64",
        id: 0x001760EF,
        sizes: [256, 4 * KIB, 64 * KIB, 8 * MIB, 8 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 40, 135, 0, 18000],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q128",
        id: 0x001840EF,
        sizes: [256, 4 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 40, 135, 0, 36000],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [10, 10, 100, 100],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25Q128",
        id: 0x001860EF,
        sizes: [256, 4 * KIB, 64 * KIB, 16 * MIB, 16 * MIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 40, 135, 0, 36000],
        read_op: READ_4IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM_4OUT,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 50, 50],
        dummy_mhz: [0, 0, 0, 0, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25X05",
        id: 0x001030EF,
        sizes: [256, 4 * KIB, 32 * KIB, 64 * KIB, 64 * KIB],
        erase_op: [0, 0x20, 0x52, 0, 0xC7],
        erase_ms: [0, 27, 108, 0, 225],
        read_op: READ_2IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25X10",
        id: 0x001130EF,
        sizes: [256, 4 * KIB, 32 * KIB, 128 * KIB, 128 * KIB],
        erase_op: [0, 0x20, 0x52, 0, 0xC7],
        erase_ms: [0, 27, 108, 0, 225],
        read_op: READ_2IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25X20",
        id: 0x001230EF,
        sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 135, 0, 450],
        read_op: READ_2IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 10,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
    Part {
        vendor: "Winbond",
        name: "W25X40",
        id: 0x001330EF,
        sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
        erase_op: [0, 0x20, 0xD8, 0, 0xC7],
        erase_ms: [0, 27, 135, 0, 900],
        read_op: READ_2IO,
        mode_byte: 0x100,
        write_op: PAGE_PGM,
        write_max_mhz: 104,
        read_delay_ns: 7,
        delays_ns: [5, 5, 100, 100],
        dummy_mhz: [104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104, 104],
        low_power: None,
    },
];

// ============================================================================
// MX25R ultra low power variants
// ============================================================================

static MX25R512_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R512",
    id: 0x001028C2,
    sizes: [256, 4 * KIB, 64 * KIB, 64 * KIB, 64 * KIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 612],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16],
    low_power: None,
};

static MX25R1035_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R1035",
    id: 0x001128C2,
    sizes: [256, 4 * KIB, 64 * KIB, 128 * KIB, 128 * KIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 612],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16],
    low_power: None,
};

static MX25R2035_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R2035",
    id: 0x001228C2,
    sizes: [256, 4 * KIB, 64 * KIB, 256 * KIB, 256 * KIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 2430],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16],
    low_power: None,
};

static MX25R4035_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R4035",
    id: 0x001328C2,
    sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 512 * KIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 2430],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16],
    low_power: None,
};

static MX25R8035_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R8035",
    id: 0x001428C2,
    sizes: [256, 4 * KIB, 64 * KIB, 1 * MIB, 1 * MIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 4860],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16],
    low_power: None,
};

static MX25R1635_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R1635",
    id: 0x001528C2,
    sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 2 * MIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 10800],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8],
    low_power: None,
};

static MX25R3235_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R3235",
    id: 0x001628C2,
    sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 4 * MIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 21600],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8],
    low_power: None,
};

static MX25R6435_LP: Part = Part {
    vendor: "Macronix",
    name: "MX25R6435",
    id: 0x001728C2,
    sizes: [256, 4 * KIB, 64 * KIB, 512 * KIB, 8 * MIB],
    erase_op: [0, 0x20, 0xD8, 0, 0xC7],
    erase_ms: [0, 33, 400, 0, 40000],
    read_op: READ_4IO,
    mode_byte: 0x100,
    write_op: PAGE_PGM_4IO_MX,
    write_max_mhz: 33,
    read_delay_ns: 10,
    delays_ns: [5, 5, 30, 30],
    dummy_mhz: [0, 0, 0, 0, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8],
    low_power: None,
};
