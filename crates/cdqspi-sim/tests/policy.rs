//! Request validation and the read-only policy

mod common;

use cdqspi_core::{Error, QspiConfig, ERASE_ALL};
use common::{pattern, ready, W25Q16};

#[test]
fn test_read_only_rejects_modifications() {
    let config = QspiConfig {
        read_only: true,
        ..QspiConfig::default()
    };
    let rig = ready(W25Q16, config);
    rig.flash(|f| f.load(&pattern(0x1000, 11)));
    let writes = rig.hw.write_count();

    assert_eq!(rig.qspi.write(0, 0, 0, &[0u8; 16]), Err(Error::ReadOnly));
    assert_eq!(rig.qspi.erase(0, 0, 0, 0x1000), Err(Error::ReadOnly));
    // Empty requests are refused too
    assert_eq!(rig.qspi.write(0, 0, 0, &[]), Err(Error::ReadOnly));
    assert_eq!(rig.qspi.erase(0, 0, 0, 0), Err(Error::ReadOnly));
    assert_eq!(rig.qspi.erase(0, 0, ERASE_ALL, 0), Err(Error::ReadOnly));
    assert_eq!(rig.hw.write_count(), writes);

    let mut buf = [0u8; 64];
    rig.qspi.read(0, 0, 0, &mut buf).unwrap();
    assert_eq!(&buf[..], &pattern(0x1000, 11)[..64]);
}

#[test]
fn test_out_of_bounds_requests_touch_nothing() {
    let rig = ready(W25Q16, QspiConfig::default());
    let writes = rig.hw.write_count();
    let regs = rig.hw.registers();

    let mut buf = [0u8; 32];
    assert_eq!(rig.qspi.read(0, 0, 0x1F_FFF0, &mut buf), Err(Error::SizeExceeded));
    assert_eq!(rig.qspi.write(0, 0, 0x1F_FFF0, &buf), Err(Error::SizeExceeded));
    assert_eq!(rig.qspi.read(0, 0, u32::MAX, &mut buf), Err(Error::SizeExceeded));

    assert_eq!(rig.hw.write_count(), writes);
    assert_eq!(rig.hw.registers(), regs);
    assert_eq!(rig.flash(|f| f.program_count()), 0);
}

#[test]
fn test_unchecked_reads_wrap_around() {
    let config = QspiConfig {
        check_args: false,
        ..QspiConfig::default()
    };
    let rig = ready(W25Q16, config);
    let image = pattern(0x20_0000, 12);
    rig.flash(|f| f.load(&image));

    let mut buf = [0u8; 32];
    rig.qspi.read(0, 0, 0x1F_FFF0, &mut buf).unwrap();
    assert_eq!(&buf[..16], &image[0x1F_FFF0..]);
    assert_eq!(&buf[16..], &image[..16]);
}
