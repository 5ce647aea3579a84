//! Reads and writes through the simulated controller

mod common;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use cdqspi_core::regs::{CFG_DMA, CFG_ENABLE, CFG_IDLE};
use cdqspi_core::{Error, Mode, Operation, QspiConfig, Reg};
use cdqspi_sim::{Access, Port, SimDma};
use common::{pattern, ready, rig, rig_with_dma, MX25R1635, W25Q16};

#[test]
fn test_write_then_read_back() {
    let rig = ready(W25Q16, QspiConfig::default());
    let data = pattern(1000, 1);

    rig.qspi.write(0, 0, 0x123, &data).unwrap();
    let mut back = vec![0u8; data.len()];
    rig.qspi.read(0, 0, 0x123, &mut back).unwrap();

    assert_eq!(back, data);
    rig.flash(|f| {
        assert_eq!(&f.data()[0x123..0x123 + 1000], &data[..]);
        assert!(f.data()[..0x123].iter().all(|&b| b == 0xFF));
        assert_eq!(f.data()[0x123 + 1000], 0xFF);
    });
}

#[test]
fn test_odd_lengths() {
    let rig = ready(W25Q16, QspiConfig::default());
    let image = pattern(0x2000, 2);
    rig.flash(|f| f.load(&image));

    for len in [1usize, 2, 3, 5, 7, 255, 257, 4099] {
        let mut buf = vec![0u8; len];
        rig.qspi.read(0, 0, 0x11, &mut buf).unwrap();
        assert_eq!(&buf[..], &image[0x11..0x11 + len], "length {}", len);
    }
}

#[test]
fn test_empty_transfers_are_no_ops() {
    let rig = ready(W25Q16, QspiConfig::default());
    let writes = rig.hw.write_count();
    rig.qspi.read(0, 0, 0, &mut []).unwrap();
    rig.qspi.write(0, 0, 0, &[]).unwrap();
    assert_eq!(rig.hw.write_count(), writes);
}

#[test]
fn test_write_splits_on_pages() {
    let rig = ready(W25Q16, QspiConfig::default());
    rig.hw.enable_access_log();

    rig.qspi.write(0, 0, 0x1F0, &pattern(0x220, 3)).unwrap();

    let counts: Vec<u32> = rig
        .hw
        .access_log()
        .iter()
        .filter(|a| a.write && a.port == Port::Reg(Reg::IndWrCnt))
        .map(|a| a.value)
        .collect();
    assert_eq!(counts, vec![0x10, 0x100, 0x100, 0x10]);
    assert_eq!(rig.flash(|f| f.program_count()), 4);
}

#[test]
fn test_read_splits_on_dies() {
    let rig = ready(MX25R1635, QspiConfig::default());
    let image = pattern(0x20_0000, 4);
    rig.flash(|f| f.load(&image));
    rig.hw.enable_access_log();

    let mut buf = vec![0u8; 0x200];
    rig.qspi.read(0, 0, 0x7_FF00, &mut buf).unwrap();
    assert_eq!(&buf[..], &image[0x7_FF00..0x8_0100]);

    let log = rig.hw.access_log();
    let written = |reg| -> Vec<u32> {
        log.iter()
            .filter(|a| a.write && a.port == Port::Reg(reg))
            .map(|a| a.value)
            .collect()
    };
    assert_eq!(written(Reg::IndRdStAddr), vec![0x7_FF00, 0x8_0000]);
    assert_eq!(written(Reg::IndRdCnt), vec![0x100, 0x100]);
}

/// Register writes with the strategy-specific FIFO handling left out
///
/// CFG writes are kept only when they change CFG apart from the DMA
/// request bit and the read-only idle bit.
fn logical_writes(log: &[Access], noise: &[Reg]) -> Vec<(Reg, u32)> {
    let mut cfg = None;
    let mut out = Vec::new();
    for access in log.iter().filter(|a| a.write) {
        let Port::Reg(reg) = access.port else {
            continue;
        };
        if noise.contains(&reg) {
            continue;
        }
        let mut value = access.value;
        if reg == Reg::Cfg {
            value &= !(CFG_DMA | CFG_IDLE);
            if cfg == Some(value) {
                continue;
            }
            cfg = Some(value);
        }
        out.push((reg, value));
    }
    out
}

const RX_NOISE: [Reg; 3] = [Reg::IndRdWater, Reg::IrqMask, Reg::IrqStat];
const TX_NOISE: [Reg; 3] = [Reg::IndWrWater, Reg::IrqMask, Reg::IrqStat];

fn read_with(operation: Operation, dma: bool) -> (Vec<u8>, Vec<(Reg, u32)>, common::Rig) {
    let config = QspiConfig {
        operation,
        ..QspiConfig::default()
    };
    let rig = if dma {
        rig_with_dma(W25Q16, config)
    } else {
        rig(W25Q16, config)
    };
    rig.qspi.init(0, 0, Mode::empty()).unwrap();
    rig.flash(|f| f.load(&pattern(0x4000, 5)));
    rig.hw.enable_access_log();

    let mut buf = vec![0u8; 5000];
    rig.qspi.read(0, 0, 0x1003, &mut buf).unwrap();
    let writes = logical_writes(&rig.hw.access_log(), &RX_NOISE);
    (buf, writes, rig)
}

#[test]
fn test_strategies_read_identically() {
    let expected = pattern(0x4000, 5)[0x1003..0x1003 + 5000].to_vec();

    let (polled, polled_writes, rig) = read_with(Operation::RX_IRQ_MASK, false);
    assert_eq!(polled, expected);
    assert!(rig.platform().irq_saves() > 0);
    assert!(!rig.platform().irqs_masked());
    assert!(polled_writes.contains(&(Reg::IndRdCnt, 5000)));

    let (irq, irq_writes, rig) = read_with(Operation::RX_ISR, false);
    assert_eq!(irq, expected);
    assert_eq!(rig.platform().irq_saves(), 0);
    assert_eq!(irq_writes, polled_writes);

    let (dma, dma_writes, rig) = read_with(Operation::RX_DMA, true);
    assert_eq!(dma, expected);
    assert_eq!(rig.hw.peek(Reg::Cfg) & CFG_DMA, 0);
    assert_eq!(dma_writes, polled_writes);
}

fn write_with(operation: Operation) -> (Vec<u8>, Vec<(Reg, u32)>) {
    let config = QspiConfig {
        operation,
        ..QspiConfig::default()
    };
    let rig = ready(W25Q16, config);
    rig.hw.enable_access_log();

    rig.qspi.write(0, 0, 0x7F0, &pattern(600, 8)).unwrap();
    let writes = logical_writes(&rig.hw.access_log(), &TX_NOISE);
    let image = rig.flash(|f| f.data()[..0x1000].to_vec());
    (image, writes)
}

#[test]
fn test_strategies_write_identically() {
    let (polled_image, polled_writes) = write_with(Operation::empty());
    let (irq_image, irq_writes) = write_with(Operation::TX_ISR);

    assert_eq!(&polled_image[0x7F0..0x7F0 + 600], &pattern(600, 8)[..]);
    assert_eq!(irq_image, polled_image);
    assert_eq!(irq_writes, polled_writes);
    assert!(polled_writes.contains(&(Reg::IndWrCnt, 0x10)));
}

#[test]
fn test_starved_fifo_times_out_under_every_strategy() {
    for operation in [Operation::empty(), Operation::RX_IRQ_MASK, Operation::RX_ISR] {
        let rig = ready(
            W25Q16,
            QspiConfig {
                operation,
                ..QspiConfig::default()
            },
        );
        rig.platform().set_auto_advance(1);
        rig.hw.set_rx_starved(true);

        let mut buf = [0u8; 64];
        assert_eq!(
            rig.qspi.read(0, 0, 0, &mut buf),
            Err(Error::Timeout),
            "{:?}",
            operation
        );
        assert_eq!(rig.hw.peek(Reg::Cfg) & CFG_ENABLE, 0);

        // Once data flows again the same call succeeds
        rig.hw.set_rx_starved(false);
        rig.qspi.read(0, 0, 0, &mut buf).unwrap();
    }
}

#[test]
fn test_interrupt_strategy_takes_interrupts() {
    let config = QspiConfig {
        operation: Operation::RX_ISR | Operation::TX_ISR,
        ..QspiConfig::default()
    };
    let rig = rig(W25Q16, config);
    rig.qspi.init(0, 0, Mode::empty()).unwrap();

    let taken = Arc::new(AtomicU32::new(0));
    let weak = Arc::downgrade(&rig.qspi);
    let counter = Arc::clone(&taken);
    rig.hw.set_irq_hook(move || {
        if let Some(qspi) = weak.upgrade() {
            if qspi.on_interrupt(0) {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    let data = pattern(600, 6);
    rig.qspi.write(0, 0, 0x800, &data).unwrap();
    let mut back = vec![0u8; 600];
    rig.qspi.read(0, 0, 0x800, &mut back).unwrap();

    assert_eq!(back, data);
    assert!(taken.load(Ordering::Relaxed) > 0);
    assert_eq!(rig.hw.peek(Reg::IrqMask), 0);
}

#[test]
fn test_dma_failure_is_reported() {
    let config = QspiConfig {
        operation: Operation::RX_DMA,
        ..QspiConfig::default()
    };
    let hw = Arc::new(
        cdqspi_sim::SimController::new()
            .with_flash(0, cdqspi_sim::SimFlash::from_part(common::part(W25Q16))),
    );
    let dma = SimDma::new(Arc::clone(&hw)).failing(-110);
    let kills = dma.kills();
    let qspi = cdqspi_core::Qspi::builder_with_dma(cdqspi_sim::SimPlatform::new(), config)
        .controller_with_dma(Arc::clone(&hw), dma)
        .build()
        .unwrap();
    qspi.init(0, 0, Mode::empty()).unwrap();

    let mut buf = vec![0u8; 1024];
    assert_eq!(qspi.read(0, 0, 0, &mut buf), Err(Error::Dma(-110)));
    assert_eq!(kills.load(Ordering::Relaxed), 1);
    assert_eq!(hw.peek(Reg::Cfg) & CFG_DMA, 0);

    // The controller is usable again
    let mut small = [0u8; 16];
    qspi.read(0, 0, 0, &mut small).unwrap();
}

#[test]
fn test_stuck_program_times_out() {
    let rig = ready(W25Q16, QspiConfig::default());
    rig.flash(|f| f.set_stuck_busy(true));
    rig.platform().set_auto_advance(1);

    assert_eq!(rig.qspi.write(0, 0, 0, &[0x55; 16]), Err(Error::Timeout));
    assert_eq!(rig.hw.peek(Reg::Cfg) & CFG_ENABLE, 0);
}

#[test]
fn test_commands_through_the_registry() {
    let rig = ready(W25Q16, QspiConfig::default());

    let mut id = [0u8; 3];
    rig.qspi.command_read(0, 0, 0x9F, &mut id).unwrap();
    assert_eq!(id, [0xEF, 0x40, 0x15]);

    rig.qspi.command_write(0, 0, 0x06, &[]).unwrap();
    assert!(rig.flash(|f| f.write_enabled()));

    let mut long = [0u8; 9];
    assert_eq!(
        rig.qspi.command_read(0, 0, 0x9F, &mut long),
        Err(Error::InvalidArgument)
    );
}
