//! Part identification and family recipes

mod common;

use std::sync::Arc;

use cdqspi_core::regs::{CFG_ENABLE, CFG_PERSELDEC};
use cdqspi_core::{Error, Mode, Qspi, QspiConfig, Reg};
use cdqspi_sim::{SimController, SimFlash, SimPlatform};
use common::{part, ready, rig, MX25R1635, N25Q256, S25FL256S, W25Q16};

#[test]
fn test_identifies_and_sizes_the_part() {
    let rig = ready(W25Q16, QspiConfig::default());

    assert_eq!(rig.qspi.size(0, 0), Ok(2 * 1024 * 1024));
    assert_eq!(rig.qspi.block_size(0, 0), Ok(4096));
    let slave = rig.qspi.slave_config(0, 0).unwrap();
    assert_eq!(slave.part.name, "W25Q16");
    assert_eq!(rig.hw.reset_count(), 1);
    assert_eq!(rig.hw.peek(Reg::Cfg) & CFG_ENABLE, 0);
}

#[test]
fn test_unknown_part() {
    let hw = Arc::new(
        SimController::new().with_flash(0, SimFlash::with_jedec(part(W25Q16), [0x12, 0x34, 0x56, 0, 0])),
    );
    let qspi = Qspi::builder(SimPlatform::new(), QspiConfig::default())
        .controller(Arc::clone(&hw))
        .build()
        .unwrap();

    assert_eq!(qspi.init(0, 0, Mode::empty()), Err(Error::UnknownPart { id: 0x0056_3412 }));
    assert_eq!(qspi.size(0, 0), Err(Error::NotInitialized));
    assert_eq!(qspi.read(0, 0, 0, &mut [0u8; 4]), Err(Error::NotInitialized));
    assert_eq!(hw.peek(Reg::Cfg) & CFG_ENABLE, 0);
}

#[test]
fn test_id_only_probe() {
    let config = QspiConfig {
        id_only: true,
        ..QspiConfig::default()
    };
    let rig = rig(W25Q16, config);

    assert_eq!(rig.qspi.init(0, 0, Mode::empty()), Err(Error::IdOnly { id: W25Q16 }));
    assert_eq!(rig.qspi.size(0, 0), Err(Error::NotInitialized));
    assert_eq!(rig.commands().len(), 1);
}

#[test]
fn test_stuck_controller() {
    let rig = rig(W25Q16, QspiConfig::default());
    rig.hw.set_stuck(true);
    assert_eq!(rig.qspi.init(0, 0, Mode::empty()), Err(Error::ControllerStuck));

    // The reset is retried by the next init
    rig.hw.set_stuck(false);
    rig.qspi.init(0, 0, Mode::empty()).unwrap();
    assert_eq!(rig.hw.reset_count(), 2);
}

#[test]
fn test_winbond_sets_quad_enable() {
    let rig = ready(W25Q16, QspiConfig::default());

    assert_eq!(rig.flash(|f| f.status())[1] & 0x02, 0x02);
    let ops: Vec<u8> = rig.commands().iter().map(|c| c.opcode).collect();
    let ewsr = ops.iter().position(|&op| op == 0x50).unwrap();
    assert_eq!(ops[ewsr + 1], 0x01);

    // Already configured: a second init leaves the status alone
    rig.clear_commands();
    rig.qspi.init(0, 0, Mode::empty()).unwrap();
    assert!(!rig.commands().iter().any(|c| c.opcode == 0x01));
    assert_eq!(rig.hw.reset_count(), 1);
}

#[test]
fn test_micron_volatile_config() {
    let rig = ready(N25Q256, QspiConfig::default());
    let slave = rig.qspi.slave_config(0, 0).unwrap();

    rig.flash(|f| {
        let (vcr, evcr) = f.volatile_config();
        assert_eq!(vcr >> 4, slave.dummy_cycles as u8);
        assert_eq!(vcr & 0x0F, 0x0B);
        assert_eq!(evcr & 0xC0, 0xC0);
        assert!(f.four_byte());
    });
    assert_eq!(slave.dev_sz & 0xF, 3);
}

#[test]
fn test_micron_three_byte_mode() {
    let config = QspiConfig {
        four_byte_address: false,
        ..QspiConfig::default()
    };
    let rig = ready(N25Q256, config);

    assert!(!rig.flash(|f| f.four_byte()));
    assert!(rig.commands().iter().any(|c| c.opcode == 0xE9));
    assert_eq!(rig.qspi.slave_config(0, 0).unwrap().dev_sz & 0xF, 2);
}

#[test]
fn test_spansion_bank_register() {
    let rig = ready(S25FL256S, QspiConfig::default());
    assert_eq!(rig.flash(|f| f.bank_register()) & 0x80, 0x80);
    assert!(rig.flash(|f| f.four_byte()));
}

#[test]
fn test_mx25r_power_mode() {
    let rig = ready(MX25R1635, QspiConfig::default());
    assert_eq!(rig.flash(|f| f.status())[2] & 0x02, 0x02);
    assert_eq!(rig.flash(|f| f.status())[0] & 0x40, 0x40);

    let config = QspiConfig {
        mx25r_low_power: true,
        ..QspiConfig::default()
    };
    let rig = ready(MX25R1635, config);
    assert_eq!(rig.flash(|f| f.status())[2] & 0x02, 0);
    let slave = rig.qspi.slave_config(0, 0).unwrap();
    assert!(slave.read_hz <= part(MX25R1635).read_max_mhz() * 1_000_000);
}

#[test]
fn test_chip_select_decode() {
    let hw = Arc::new(
        SimController::new()
            .with_flash(1, SimFlash::from_part(part(W25Q16)))
            .with_flash(2, SimFlash::from_part(part(MX25R1635))),
    );
    let qspi = Qspi::builder(SimPlatform::new(), QspiConfig::default())
        .controller(Arc::clone(&hw))
        .build()
        .unwrap();

    qspi.init(0, 1, Mode::empty()).unwrap();
    qspi.init(0, 2, Mode::CS_DECODE).unwrap();

    assert_eq!(qspi.size(0, 1), Ok(2 * 1024 * 1024));
    assert_eq!(qspi.size(0, 2), Ok(2 * 1024 * 1024));
    assert_eq!(qspi.slave_config(0, 1).unwrap().part.name, "W25Q16");
    assert_eq!(qspi.slave_config(0, 2).unwrap().part.name, "MX25R1635");
    assert_eq!(qspi.slave_config(0, 1).unwrap().cfg_wr & CFG_PERSELDEC, 0);
    assert_ne!(qspi.slave_config(0, 2).unwrap().cfg_wr & CFG_PERSELDEC, 0);
    assert_eq!(qspi.size(0, 0), Err(Error::NotInitialized));
    assert_eq!(hw.reset_count(), 1);
}

#[test]
fn test_argument_validation() {
    let rig = ready(W25Q16, QspiConfig::default());
    assert_eq!(rig.qspi.init(1, 0, Mode::empty()), Err(Error::InvalidArgument));
    assert_eq!(rig.qspi.init(0, 4, Mode::empty()), Err(Error::InvalidArgument));
    assert_eq!(rig.qspi.size(0, 4), Err(Error::InvalidArgument));
    assert_eq!(rig.qspi.size(2, 0), Err(Error::InvalidArgument));
}
