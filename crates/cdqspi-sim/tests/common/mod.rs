//! Shared test rig: one simulated controller registered with the driver
#![allow(dead_code)]

use std::sync::Arc;

use cdqspi_core::{find_part, Mode, Part, Qspi, QspiConfig};
use cdqspi_sim::{connect_interrupt, SimCommand, SimController, SimDma, SimFlash, SimPlatform};

pub const W25Q16: u32 = 0x001540EF;
pub const MX25R1635: u32 = 0x001528C2;
pub const N25Q256: u32 = 0x0019BA20;
pub const S25FL256S: u32 = 0x01190201;

pub type SimQspi = Qspi<Arc<SimController>, SimPlatform, SimDma>;

pub struct Rig {
    pub hw: Arc<SimController>,
    pub qspi: Arc<SimQspi>,
}

pub fn part(id: u32) -> &'static Part {
    find_part(id).expect("part in table")
}

/// Controller with the part `id` on chip select 0, not yet initialized
pub fn rig(id: u32, config: QspiConfig) -> Rig {
    build(id, config, false)
}

/// Same as [`rig`], with a DMA channel attached
pub fn rig_with_dma(id: u32, config: QspiConfig) -> Rig {
    build(id, config, true)
}

fn build(id: u32, config: QspiConfig, dma: bool) -> Rig {
    let hw = Arc::new(SimController::new().with_flash(0, SimFlash::from_part(part(id))));
    let builder = Qspi::builder_with_dma(SimPlatform::new(), config);
    let builder = if dma {
        builder.controller_with_dma(Arc::clone(&hw), SimDma::new(Arc::clone(&hw)))
    } else {
        builder.controller(Arc::clone(&hw))
    };
    let qspi = Arc::new(builder.build().expect("registry"));
    connect_interrupt(&hw, &qspi, 0);
    Rig { hw, qspi }
}

/// Controller with the part `id` on chip select 0, initialized
pub fn ready(id: u32, config: QspiConfig) -> Rig {
    let rig = rig(id, config);
    rig.qspi.init(0, 0, Mode::empty()).expect("init");
    rig
}

impl Rig {
    pub fn platform(&self) -> &SimPlatform {
        self.qspi.platform()
    }

    pub fn flash<R>(&self, f: impl FnOnce(&mut SimFlash) -> R) -> R {
        self.hw.flash(0, f).expect("flash on chip select 0")
    }

    pub fn commands(&self) -> Vec<SimCommand> {
        self.flash(|f| f.commands().to_vec())
    }

    /// Commands other than status polling
    pub fn commands_without_polls(&self) -> Vec<SimCommand> {
        self.commands()
            .into_iter()
            .filter(|c| c.opcode != 0x05 && c.opcode != 0x70)
            .collect()
    }

    pub fn clear_commands(&self) {
        self.flash(|f| f.clear_commands());
    }
}

pub fn cmd(opcode: u8, data: &[u8]) -> SimCommand {
    SimCommand {
        opcode,
        data: data.to_vec(),
    }
}

/// Deterministic non-trivial test data
pub fn pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut x = seed.wrapping_mul(2_654_435_761).max(1);
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        })
        .collect()
}
