//! cdqspi-core - Driver for the Cadence QSPI flash controller
//!
//! This crate drives serial NOR flash parts attached to the Cadence QSPI
//! controller found in the Cyclone V and Arria 10 HPS. It identifies the
//! part from its JEDEC ID, configures it from a static part table, and
//! reads, programs and erases it through the controller's indirect access
//! path.
//!
//! The driver itself is `no_std`. Register access, timers, interrupt
//! masking and DMA are reached through the traits in [`regs`] and
//! [`platform`].
//!
//! # Features
//!
//! - `std` - Enable the controller registry ([`Qspi`]), the condvar
//!   semaphore and the RON configuration loader (includes `alloc`)
//! - `alloc` - Implement [`Hardware`] for `Arc<T>`
//!
//! # Example
//!
//! ```ignore
//! use cdqspi_core::{Mode, Qspi, QspiConfig};
//!
//! let qspi = Qspi::builder(platform, QspiConfig::default())
//!     .controller(hw)
//!     .build()?;
//! qspi.init(0, 0, Mode::empty())?;
//! println!("{} bytes", qspi.size(0, 0)?);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bringup;
pub mod command;
pub mod config;
#[cfg(feature = "std")]
pub mod controller;
pub mod erase;
pub mod error;
pub mod isr;
pub mod opcodes;
pub mod part;
pub mod platform;
pub mod ready;
pub mod regs;
pub mod transfer;

pub use bringup::SlaveConfig;
pub use config::{CmdClock, Mode, Operation, QspiConfig, MAX_SLAVES};
#[cfg(feature = "std")]
pub use config::ConfigError;
#[cfg(feature = "std")]
pub use controller::{Qspi, QspiBuilder, MAX_CONTROLLERS};
pub use erase::ERASE_ALL;
pub use error::{Error, Result};
pub use part::{find_part, Family, JedecId, Part, Tier, PARTS};
pub use platform::{Deadline, Dma, NoDma, Platform, Signal, Timeout};
pub use regs::{Hardware, Reg};
