//! Driver tunables
//!
//! [`QspiConfig`] carries every policy knob of the driver: which transfer
//! strategies are enabled, FIFO thresholds, the controller clock, the
//! command clock policy and a few part-specific options. The defaults
//! match the stock build of the driver for the Cyclone V / Arria 10 HPS.
//!
//! With the `std` feature the configuration can be loaded from RON:
//!
//! ```ignore
//! (
//!     clock_hz: 370000000,
//!     operation: 0x10206,
//!     cmd_clock: SlowestToggled,
//!     lock_timeout_ms: Some(500),
//! )
//! ```

use bitflags::bitflags;

use crate::regs::{RX_FIFO_SIZE, TX_FIFO_SIZE};

/// Number of slaves (chip selects) per controller
pub const MAX_SLAVES: usize = 4;

/// Number of controllers whose RdDly can be overridden
pub const RDDLY_OVERRIDE_DEVICES: usize = 1;

bitflags! {
    /// Transfer policy bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Operation: u32 {
        /// Mask local interrupts while polling the RX FIFO
        const RX_IRQ_MASK = 1 << 0;
        /// Drain the RX FIFO from the watermark interrupt
        const RX_ISR = 1 << 1;
        /// Drain the RX FIFO with the DMA channel
        const RX_DMA = 1 << 2;
        /// Mask local interrupts while filling the TX FIFO
        const TX_IRQ_MASK = 1 << 8;
        /// Wait for the TX watermark interrupt instead of spinning
        const TX_ISR = 1 << 9;
        /// Sleep instead of spinning while an erase completes
        const ERASE_SLEEP = 1 << 16;
    }
}

bitflags! {
    /// Options passed to `init`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mode: u32 {
        /// Chip selects go through an external N-to-2^N decoder
        const CS_DECODE = 1 << 0;
    }
}

/// Bus clock used for the legacy command interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
pub enum CmdClock {
    /// Commands run at the divider already programmed for the slave
    Current,
    /// Disable the controller, select the slowest divider, re-enable,
    /// issue the command, then restore the original configuration
    SlowestToggled,
    /// Select the slowest divider around the command without toggling
    /// the enable bit
    #[default]
    Slowest,
}

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct QspiConfig {
    /// Controller reference clock, in Hz
    pub clock_hz: u32,
    /// Transfer policy
    #[cfg_attr(feature = "std", serde(deserialize_with = "de_operation"))]
    pub operation: Operation,
    /// RX watermark as a percentage of the RX FIFO
    pub rx_isr_threshold_pct: u32,
    /// TX watermark as a percentage of the TX FIFO
    pub tx_isr_threshold_pct: u32,
    /// Smallest read chunk handed to the DMA channel
    pub min_rx_dma: u32,
    /// Smallest read chunk drained from the interrupt
    pub min_rx_isr: u32,
    /// Smallest write chunk that waits on the interrupt
    pub min_tx_isr: u32,
    /// Upper bound on the SPI bus frequency in MHz (0 = part maximum)
    pub max_bus_mhz: u32,
    /// Reject every write and erase
    pub read_only: bool,
    /// Check requests against the device size
    pub check_args: bool,
    /// Bus clock policy for single commands
    pub cmd_clock: CmdClock,
    /// Keep parts above 16 MiB in 4-byte address mode
    pub four_byte_address: bool,
    /// Stop bring-up after reading the JEDEC ID
    pub id_only: bool,
    /// Run MX25R parts in ultra low power mode
    pub mx25r_low_power: bool,
    /// Read logic delay override in ns, per controller and slave
    pub read_delay_override: [[Option<u32>; MAX_SLAVES]; RDDLY_OVERRIDE_DEVICES],
    /// Give up on the controller lock after this many milliseconds
    pub lock_timeout_ms: Option<u32>,
    /// Largest DMA burst, in words
    pub dma_max_burst: u32,
}

impl Default for QspiConfig {
    fn default() -> Self {
        Self {
            clock_hz: 370_000_000,
            operation: Operation::RX_IRQ_MASK | Operation::TX_IRQ_MASK | Operation::ERASE_SLEEP,
            rx_isr_threshold_pct: 50,
            tx_isr_threshold_pct: 32,
            min_rx_dma: 64,
            min_rx_isr: 64,
            min_tx_isr: 16,
            max_bus_mhz: 0,
            read_only: false,
            check_args: true,
            cmd_clock: CmdClock::Slowest,
            four_byte_address: true,
            id_only: false,
            mx25r_low_power: false,
            read_delay_override: [[None; MAX_SLAVES]; RDDLY_OVERRIDE_DEVICES],
            lock_timeout_ms: None,
            dma_max_burst: 64,
        }
    }
}

impl QspiConfig {
    /// RX watermark in bytes
    pub fn rx_watermark(&self) -> u32 {
        watermark(RX_FIFO_SIZE, self.rx_isr_threshold_pct)
    }

    /// TX watermark in bytes
    pub fn tx_watermark(&self) -> u32 {
        watermark(TX_FIFO_SIZE, self.tx_isr_threshold_pct)
    }

    /// Controller clock in whole MHz
    pub fn clock_mhz(&self) -> u32 {
        self.clock_hz / 1_000_000
    }

    /// RdDly override for a controller/slave pair, if any
    ///
    /// Only the first controller can be overridden.
    pub fn read_delay_for(&self, dev: usize, slave: usize) -> Option<u32> {
        self.read_delay_override
            .get(dev)
            .and_then(|slaves| slaves.get(slave))
            .copied()
            .flatten()
    }
}

fn watermark(fifo: u32, pct: u32) -> u32 {
    (((fifo - 4) * pct) / 100).max(1)
}

#[cfg(feature = "std")]
fn de_operation<'de, D>(deserializer: D) -> core::result::Result<Operation, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bits = <u32 as serde::Deserialize>::deserialize(deserializer)?;
    Ok(Operation::from_bits_retain(bits))
}

#[cfg(feature = "std")]
pub use self::loader::ConfigError;

#[cfg(feature = "std")]
mod loader {
    use super::QspiConfig;
    use std::path::Path;

    /// Error loading a configuration file
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        /// The file could not be read
        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
        /// The file is not valid RON for [`QspiConfig`]
        #[error("parse error: {0}")]
        Parse(#[from] ron::error::SpannedError),
    }

    impl QspiConfig {
        /// Parse a configuration from a RON string
        pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
            Ok(ron::from_str(s)?)
        }

        /// Load a configuration from a RON file
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let text = std::fs::read_to_string(path)?;
            let config = Self::from_ron_str(&text)?;
            log::debug!("Loaded QSPI configuration from {}", path.display());
            Ok(config)
        }
    }
}
