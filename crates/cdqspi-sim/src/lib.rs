//! cdqspi-sim - Simulated Cadence QSPI controller for testing
//!
//! This crate emulates the controller's register block, its SRAM FIFOs and
//! up to four flash parts in memory, so the driver can run without
//! hardware. It also provides a virtual clock and a DMA channel.
//!
//! # Example
//!
//! ```ignore
//! let hw = Arc::new(SimController::new().with_flash(0, SimFlash::from_part(part)));
//! let qspi = Arc::new(
//!     Qspi::builder(SimPlatform::new(), QspiConfig::default())
//!         .controller(Arc::clone(&hw))
//!         .build()?,
//! );
//! connect_interrupt(&hw, &qspi, 0);
//! qspi.init(0, 0, Mode::empty())?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod controller;
mod dma;
mod flash;
mod platform;

use std::sync::{Arc, Weak};

use cdqspi_core::{Dma, Platform, Qspi};

pub use controller::{Access, Port, SimController, SIM_FIFO_BUS_ADDRESS};
pub use dma::{SimDma, DMA_NOT_ENABLED};
pub use flash::{SimCommand, SimFlash};
pub use platform::{SimPlatform, SIM_TICK_HZ};

/// Route the controller's interrupt line to `qspi.on_interrupt(dev)`
///
/// The hook only holds a weak reference, so the registry can still be
/// dropped.
pub fn connect_interrupt<P, D>(
    hw: &SimController,
    qspi: &Arc<Qspi<Arc<SimController>, P, D>>,
    dev: usize,
) where
    P: Platform + Send + Sync + 'static,
    D: Dma + Send + 'static,
{
    let weak: Weak<Qspi<Arc<SimController>, P, D>> = Arc::downgrade(qspi);
    hw.set_irq_hook(move || {
        if let Some(qspi) = weak.upgrade() {
            qspi.on_interrupt(dev);
        }
    });
}
