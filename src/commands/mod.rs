//! CLI command implementations
//!
//! Every command works on a [`FlashTarget`](crate::backend::FlashTarget),
//! so the same code drives the simulator and real hardware.

mod flash;
mod list;

pub use flash::{run_erase, run_info, run_probe, run_read, run_verify, run_write};
pub use list::{list_backends, list_parts};
