//! Device bring-up
//!
//! [`bring_up`] identifies the part on a chip select, derives every
//! per-slave register value from the part table and runs the family
//! recipe. The derivations are plain functions so they can be checked
//! without hardware.

use crate::command::Session;
use crate::config::{Mode, QspiConfig};
use crate::error::{Error, Result};
use crate::opcodes::{data_lanes, RDID, RDID_LEN};
use crate::part::{Family, JedecId, Part, Tuning};
use crate::platform::Platform;
use crate::regs::{
    Hardware, Reg, CFG_BAUD_SHIFT, CFG_CS_SHIFT, CFG_ENABLE, CFG_IDLE, CFG_PERSELDEC,
    DEVRD_DUMMY_SHIFT, DEVRD_MODE_EN, DEVSZ_ADDR3, DEVSZ_ADDR4, DMAPER_4_BYTES,
    RDDATACAP_BYPASS,
};

/// Spin bound waiting for the controller to come out of reset
pub const RESET_SPIN_LIMIT: u32 = 100_000;

/// Largest divider the controller supports
pub const MAX_DIVIDER: u32 = 32;

/// Largest read capture delay (4-bit field)
pub const MAX_READ_CAPTURE: u32 = 15;

/// Everything the transfer engine needs about one initialized slave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaveConfig {
    /// Table entry of the part
    pub part: &'static Part,
    /// Family of the part
    pub family: Family,
    /// Options passed to `init`
    pub mode: Mode,
    /// CFG for bulk reads
    pub cfg_rd: u32,
    /// CFG for writes, erases and commands
    pub cfg_wr: u32,
    /// DEVRD register
    pub dev_rd: u32,
    /// DEVWR register
    pub dev_wr: u32,
    /// DELAY register
    pub delay: u32,
    /// DEVSZ register
    pub dev_sz: u32,
    /// RDDATACAP register
    pub rd_cap: u32,
    /// MODEBIT register
    pub mode_byte: u32,
    /// Nanoseconds per byte on reads
    pub ns_per_byte_rd: u32,
    /// Nanoseconds per byte on writes
    pub ns_per_byte_wr: u32,
    /// Dummy cycles programmed for reads
    pub dummy_cycles: u32,
    /// Bus clock on reads, in Hz
    pub read_hz: u32,
    /// Bus clock on writes, in Hz
    pub write_hz: u32,
}

/// Divider reaching at most `mhz` from a `clock_hz` reference
///
/// The controller only divides by even values; the returned divider may be
/// odd, callers use `div / 2` for the register field and `div & !1` for the
/// effective clock.
pub fn divider(clock_hz: u32, mhz: u32) -> u32 {
    let target = mhz.max(1) as u64 * 1_000_000;
    let div = (clock_hz as u64).div_ceil(target) + 1;
    div.min(MAX_DIVIDER as u64) as u32
}

/// CFG value for a divider
pub fn cfg_value(div: u32, slave: usize, mode: Mode) -> u32 {
    let mut cfg = (((div / 2).max(1) - 1) << CFG_BAUD_SHIFT)
        | ((slave as u32) << CFG_CS_SHIFT)
        | CFG_ENABLE;
    if mode.contains(Mode::CS_DECODE) {
        cfg |= CFG_PERSELDEC;
    }
    cfg
}

/// Bus clock for a divider
pub fn bus_hz(clock_hz: u32, div: u32) -> u32 {
    clock_hz / (div & !1).max(2)
}

/// Nanoseconds needed to clock 8 bits on one lane
pub fn ns_per_byte(clock_hz: u32, div: u32) -> u32 {
    8 * (1_000_000_000 / bus_hz(clock_hz, div).max(1))
}

/// Dummy cycles needed at `freq_hz`: the first breakpoint fast enough
pub fn dummy_cycles(part: &Part, freq_hz: u32) -> u32 {
    part.dummy_mhz
        .iter()
        .position(|&mhz| freq_hz as u64 <= mhz as u64 * 1_000_000)
        .unwrap_or(part.dummy_mhz.len() - 1) as u32
}

/// DELAY register: each byte is a delay in controller clocks, rounded up
pub fn delay_register(clock_mhz: u32, delays_ns: [u8; 4]) -> u32 {
    delays_ns
        .iter()
        .enumerate()
        .fold(0, |reg, (i, &ns)| {
            let clocks = (clock_mhz * ns as u32).div_ceil(1000);
            reg | (clocks << (8 * i))
        })
}

/// RDDATACAP register for a read logic delay in ns
pub fn read_capture(clock_mhz: u32, delay_ns: u32) -> u32 {
    let clocks = ((clock_mhz * delay_ns + 500) / 1000).min(MAX_READ_CAPTURE);
    (clocks << 1) | RDDATACAP_BYPASS
}

/// DEVSZ register
pub fn device_size_register(part: &Part, four_byte_address: bool) -> u32 {
    let addr = if part.is_large() && four_byte_address {
        DEVSZ_ADDR4
    } else {
        DEVSZ_ADDR3
    };
    let pages_per_block = part.sizes[1] / part.page_size().max(1);
    addr | (part.page_size() << 4) | (pages_per_block << 16)
}

impl SlaveConfig {
    /// Derive the slave configuration from a table entry
    pub fn resolve(
        part: &'static Part,
        dev: usize,
        slave: usize,
        mode: Mode,
        config: &QspiConfig,
    ) -> SlaveConfig {
        let cap = |mhz: u32| match config.max_bus_mhz {
            0 => mhz,
            max => mhz.min(max),
        };
        let clock_hz = config.clock_hz;
        let clock_mhz = config.clock_mhz();

        let div_wr = divider(clock_hz, cap(part.write_max_mhz));
        let write_hz = bus_hz(clock_hz, div_wr);

        let div_rd = divider(clock_hz, cap(part.read_max_mhz()));
        let read_hz = bus_hz(clock_hz, div_rd);
        let dummy = dummy_cycles(part, read_hz);

        let mut dev_rd = (dummy << DEVRD_DUMMY_SHIFT) | (part.read_op & 0xF_FFFF);
        if part.has_mode_byte() {
            dev_rd |= DEVRD_MODE_EN;
        }

        let rd_dly = config
            .read_delay_for(dev, slave)
            .unwrap_or(part.read_delay_ns);

        SlaveConfig {
            part,
            family: Family::from_id(part.id),
            mode,
            cfg_rd: cfg_value(div_rd, slave, mode),
            cfg_wr: cfg_value(div_wr, slave, mode),
            dev_rd,
            dev_wr: part.write_op & 0xF_FFFF,
            delay: delay_register(clock_mhz, part.delays_ns),
            dev_sz: device_size_register(part, config.four_byte_address),
            rd_cap: read_capture(clock_mhz, rd_dly),
            mode_byte: part.mode_byte & 0xFF,
            // Read time is scaled by the program opcode's data lanes
            ns_per_byte_rd: ns_per_byte(clock_hz, div_rd) / data_lanes(part.write_op),
            ns_per_byte_wr: ns_per_byte(clock_hz, div_wr),
            dummy_cycles: dummy,
            read_hz,
            write_hz,
        }
    }
}

/// Pulse the controller reset and wait for it to report idle
pub fn reset_controller<H: Hardware + ?Sized>(hw: &H) -> Result<()> {
    hw.reset();
    if !(0..=RESET_SPIN_LIMIT).any(|_| hw.read(Reg::Cfg) & CFG_IDLE != 0) {
        log::error!("QSPI controller not idle after reset");
        return Err(Error::ControllerStuck);
    }
    hw.write(Reg::Cfg, 0);
    hw.write(Reg::RemapAddr, 0);
    hw.write(Reg::Delay, 0);
    Ok(())
}

/// Identify and configure the part on `slave`
///
/// The caller holds the controller lock and disables the controller
/// afterwards, whatever the outcome.
pub fn bring_up<H, P>(
    s: &Session<'_, H, P>,
    dev: usize,
    slave: usize,
    mode: Mode,
) -> Result<SlaveConfig>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    let hw = s.hw();
    let config = s.config();

    hw.write(Reg::IrqMask, 0);
    hw.write(Reg::RemapAddr, 0);
    hw.write(Reg::DmaPer, DMAPER_4_BYTES);
    hw.write(Reg::DevRd, 0);
    hw.write(Reg::Delay, 0x4040_4040);
    hw.write(
        Reg::Cfg,
        crate::regs::CFG_BAUD_MASK | ((slave as u32) << CFG_CS_SHIFT) | CFG_ENABLE,
    );
    hw.write(Reg::FlashCmd, 0);

    let mut raw = [0u8; RDID_LEN];
    s.command_read(RDID, &mut raw)?;
    let jedec = JedecId::from_bytes(raw);

    if config.id_only {
        log::info!(
            "QSPI {}:{} JEDEC ID 0x{:08X} ({})",
            dev,
            slave,
            jedec.id,
            jedec.lookup().map(|p| p.name).unwrap_or("not in table")
        );
        return Err(Error::IdOnly { id: jedec.id });
    }

    let Some(mut part) = jedec.lookup() else {
        log::error!("QSPI {}:{} unknown JEDEC ID 0x{:08X}", dev, slave, jedec.id);
        return Err(Error::UnknownPart { id: jedec.id });
    };
    let family = Family::from_id(part.id);
    if family == Family::MacronixR && config.mx25r_low_power {
        if let Some(low_power) = part.low_power {
            part = low_power;
        }
    }

    let slv = SlaveConfig::resolve(part, dev, slave, mode, config);
    hw.write(Reg::Delay, slv.delay);
    hw.write(Reg::RdDataCap, slv.rd_cap);

    let tuning = Tuning {
        dummy_cycles: slv.dummy_cycles,
        four_byte_address: config.four_byte_address,
        low_power: config.mx25r_low_power,
    };
    if let Err(e) = family.configure(s, part, &tuning) {
        log::error!("QSPI {}:{} {} bring-up failed: {}", dev, slave, part.name, e);
        return Err(e);
    }

    log::debug!(
        "QSPI {}:{} {} {} ({} bytes), {:?}",
        dev,
        slave,
        part.vendor,
        part.name,
        part.device_size(),
        family
    );
    log::debug!(
        "  read:  {} Hz, {} dummy cycles, CFG 0x{:08X} DEVRD 0x{:08X}, {} ns/byte",
        slv.read_hz,
        slv.dummy_cycles,
        slv.cfg_rd,
        slv.dev_rd,
        slv.ns_per_byte_rd
    );
    log::debug!(
        "  write: {} Hz, CFG 0x{:08X} DEVWR 0x{:08X}, {} ns/byte",
        slv.write_hz,
        slv.cfg_wr,
        slv.dev_wr,
        slv.ns_per_byte_wr
    );
    log::debug!(
        "  DELAY 0x{:08X} RDDATACAP 0x{:08X} DEVSZ 0x{:08X}",
        slv.delay,
        slv.rd_cap,
        slv.dev_sz
    );

    Ok(slv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::find_part;

    #[test]
    fn test_divider() {
        // 370 MHz down to 104 MHz: ceil(3.56) + 1 = 5, /4 effective
        assert_eq!(divider(370_000_000, 104), 5);
        assert_eq!(bus_hz(370_000_000, 5), 92_500_000);
        assert_eq!(cfg_value(5, 0, Mode::empty()) >> CFG_BAUD_SHIFT, 1);

        // Slow parts clamp at /32
        assert_eq!(divider(370_000_000, 1), 32);
        assert_eq!(cfg_value(32, 0, Mode::empty()) >> CFG_BAUD_SHIFT, 0xF);

        // Zero is treated as 1 MHz
        assert_eq!(divider(370_000_000, 0), 32);
    }

    #[test]
    fn test_cfg_chip_select() {
        let cfg = cfg_value(4, 2, Mode::CS_DECODE);
        assert_eq!(cfg & 1, 1);
        assert_eq!((cfg >> CFG_CS_SHIFT) & 0xF, 2);
        assert_ne!(cfg & CFG_PERSELDEC, 0);
        assert_eq!(cfg_value(4, 2, Mode::empty()) & CFG_PERSELDEC, 0);
    }

    #[test]
    fn test_ns_per_byte() {
        // 92.5 MHz: 10 ns per bit after integer division
        assert_eq!(ns_per_byte(370_000_000, 5), 80);
        assert_eq!(ns_per_byte(370_000_000, 32), 8 * (1_000_000_000 / 11_562_500));
    }

    #[test]
    fn test_delay_register_rounds_up() {
        // 370 MHz: 20 ns -> 7.4 -> 8 clocks, 100 ns -> 37 clocks
        assert_eq!(delay_register(370, [20, 20, 100, 100]), 0x2525_0808);
        assert_eq!(delay_register(370, [0, 0, 0, 0]), 0);
    }

    #[test]
    fn test_read_capture() {
        assert_eq!(read_capture(370, 10), (4 << 1) | 1);
        assert_eq!(read_capture(370, 1000), (15 << 1) | 1);
        assert_eq!(read_capture(370, 0), 1);
    }

    #[test]
    fn test_dummy_cycles() {
        let part = find_part(0x001540EF).unwrap();
        let max = part.read_max_mhz() * 1_000_000;
        let dummy = dummy_cycles(part, max);
        assert!(part.dummy_mhz[dummy as usize] as u32 * 1_000_000 >= max);
        assert!(dummy == 0 || (part.dummy_mhz[dummy as usize - 1] as u32) * 1_000_000 < max);
    }

    #[test]
    fn test_device_size_register() {
        let small = find_part(0x001540EF).unwrap();
        assert_eq!(device_size_register(small, true), 2 | 256 << 4 | 16 << 16);

        let large = find_part(0x0019BA20).unwrap();
        assert_eq!(device_size_register(large, true) & 0xF, 3);
        assert_eq!(device_size_register(large, false) & 0xF, 2);
    }

    #[test]
    fn test_resolve() {
        let part = find_part(0x001540EF).unwrap();
        let config = QspiConfig::default();
        let slv = SlaveConfig::resolve(part, 0, 1, Mode::empty(), &config);

        assert_eq!(slv.family, Family::WinbondQ);
        assert_eq!((slv.cfg_wr >> CFG_CS_SHIFT) & 0xF, 1);
        assert_eq!(slv.dev_wr, part.write_op);
        assert_eq!(slv.dev_rd & 0xF_FFFF, part.read_op & 0xF_FFFF);
        assert_eq!(slv.dev_rd >> DEVRD_DUMMY_SHIFT, slv.dummy_cycles);
        assert_eq!(slv.mode_byte, part.mode_byte & 0xFF);
        assert!(slv.read_hz <= part.read_max_mhz() * 1_000_000);
        assert!(slv.write_hz <= part.write_max_mhz * 1_000_000);
    }

    #[test]
    fn test_bus_cap_and_rddly_override() {
        let part = find_part(0x001540EF).unwrap();
        let mut config = QspiConfig {
            max_bus_mhz: 10,
            ..QspiConfig::default()
        };
        config.read_delay_override[0][0] = Some(0);

        let slv = SlaveConfig::resolve(part, 0, 0, Mode::empty(), &config);
        assert!(slv.read_hz <= 10_000_000);
        assert!(slv.write_hz <= 10_000_000);
        assert_eq!(slv.rd_cap, 1);

        // The override only covers the first controller
        let other = SlaveConfig::resolve(part, 1, 0, Mode::empty(), &config);
        assert_eq!(other.rd_cap, read_capture(370, part.read_delay_ns));
    }
}
