//! Error types for the SoC FPGA backend

use thiserror::Error;

/// Errors raised while opening the controller
#[derive(Debug, Error)]
pub enum SocError {
    /// /dev/mem could not be opened or mapped
    #[error("failed to map {size:#x} bytes of physical memory at {address:#x}: {source}")]
    MemoryMap {
        address: u64,
        size: usize,
        #[source]
        source: std::io::Error,
    },

    /// SoC name not recognized
    #[error("unknown SoC '{0}' (expected cyclone5 or arria10)")]
    UnknownSoc(String),

    /// Not available on this host
    #[error("not supported: {0}")]
    NotSupported(&'static str),
}

/// Result type for the SoC FPGA backend
pub type Result<T> = std::result::Result<T, SocError>;
