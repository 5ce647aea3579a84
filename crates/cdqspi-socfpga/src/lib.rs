//! cdqspi-socfpga - Intel/Altera SoC FPGA backend for cdqspi
//!
//! Maps the QSPI controller of a Cyclone V or Arria 10 hard processor
//! system through `/dev/mem` and provides a millisecond [`Platform`]
//! backed by the process clock. Interrupts and DMA are not available from
//! user space, so transfers use the polling strategy.
//!
//! # Example
//!
//! ```ignore
//! use cdqspi_core::{Mode, Qspi, QspiConfig};
//! use cdqspi_socfpga::{DevMemHardware, LinuxPlatform, Soc};
//!
//! let hw = DevMemHardware::open(Soc::CycloneV)?;
//! let config = QspiConfig { clock_hz: hw.clock_hz(), ..QspiConfig::default() };
//! let qspi = Qspi::builder(LinuxPlatform::new(), config).controller(hw).build()?;
//! qspi.init(0, 0, Mode::empty())?;
//! ```
//!
//! [`Platform`]: cdqspi_core::Platform

#![warn(rust_2018_idioms)]

mod error;
mod hardware;
mod physmap;
mod platform;
mod soc;

pub use error::{Result, SocError};
pub use hardware::DevMemHardware;
pub use platform::{LinuxPlatform, LINUX_TICK_HZ};
pub use soc::{Soc, SocLayout};
