//! Error types for cdqspi-core
//!
//! This module provides a no_std compatible error type shared by every
//! driver entry point.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Argument errors
    /// Controller or slave index out of range, or an empty registry slot
    InvalidArgument,
    /// The controller/slave pair has not been brought up with `init`
    NotInitialized,
    /// The request crosses the end of the device
    SizeExceeded,

    // Locking
    /// The controller lock could not be taken (poisoned or timed out)
    LockFailed,

    // Transfer errors
    /// The hardware did not complete within the computed bound
    Timeout,
    /// The DMA channel reported a failure (code from the DMA layer)
    Dma(i32),

    // Erase errors
    /// Address or length does not match the smallest erase granularity
    UnalignedErase,
    /// The part declares no erasable tier
    NoEraseCapability,

    // Bring-up errors
    /// The JEDEC ID has no entry in the part table
    UnknownPart {
        /// Masked JEDEC ID as read from the part
        id: u32,
    },
    /// The part is in the table but its family has no bring-up recipe
    UnsupportedPart {
        /// JEDEC ID of the table entry
        id: u32,
    },
    /// The controller did not report idle after reset
    ControllerStuck,
    /// Bring-up stopped after reading the ID (ID-only probing)
    IdOnly {
        /// Masked JEDEC ID as read from the part
        id: u32,
    },

    // Policy
    /// Write or erase attempted while the read-only policy is on
    ReadOnly,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid controller or slave index"),
            Self::NotInitialized => write!(f, "slave not initialized"),
            Self::SizeExceeded => write!(f, "request exceeds the device size"),
            Self::LockFailed => write!(f, "failed to acquire the controller lock"),
            Self::Timeout => write!(f, "operation timed out"),
            Self::Dma(code) => write!(f, "DMA transfer failed (code {})", code),
            Self::UnalignedErase => write!(f, "erase region not aligned to the erase block size"),
            Self::NoEraseCapability => write!(f, "part has no erase capability"),
            Self::UnknownPart { id } => write!(f, "unknown flash part (JEDEC ID 0x{:08X})", id),
            Self::UnsupportedPart { id } => {
                write!(f, "flash part 0x{:08X} has no bring-up support", id)
            }
            Self::ControllerStuck => write!(f, "controller did not become idle after reset"),
            Self::IdOnly { id } => write!(f, "ID-only probe: JEDEC ID 0x{:08X}", id),
            Self::ReadOnly => write!(f, "driver is configured read-only"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
