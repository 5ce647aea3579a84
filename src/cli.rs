//! CLI argument parsing

use crate::backend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
pub fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Generate dynamic help text for the backend argument
fn backend_help() -> String {
    format!(
        "Backend to use [available: {}]",
        backend::backend_names_short()
    )
}

#[derive(Parser)]
#[command(name = "cdqspi")]
#[command(author, version, about = "NOR flash tool for the Cadence QSPI controller", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Driver configuration file (RON format)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options selecting the flash to operate on
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Backend to use, with options (e.g. sim:part=N25Q256 or socfpga:soc=arria10)
    #[arg(short, long, default_value = "sim", help = backend_help())]
    pub backend: String,

    /// Chip select of the flash
    #[arg(long, default_value_t = 0)]
    pub cs: usize,

    /// Chip selects go through an external decoder
    #[arg(long)]
    pub cs_decode: bool,

    /// Refuse to write or erase
    #[arg(long)]
    pub read_only: bool,
}

/// Region options shared by read, erase and verify
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RegionArgs {
    /// Start address (hex with 0x prefix, or decimal)
    #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
    pub offset: u32,

    /// Number of bytes (defaults to the rest of the flash)
    #[arg(long, value_parser = parse_hex_u32)]
    pub length: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the flash part
    Probe {
        #[command(flatten)]
        target: TargetArgs,

        /// Stop after reading the JEDEC ID
        #[arg(long)]
        id_only: bool,
    },

    /// Show the part and the derived controller settings
    Info {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Read flash contents to file
    Read {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        region: RegionArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write a file to flash
    Write {
        #[command(flatten)]
        target: TargetArgs,

        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Start address (hex with 0x prefix, or decimal)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        offset: u32,

        /// Do not erase before writing
        #[arg(long)]
        no_erase: bool,

        /// Read back and compare after writing
        #[arg(long)]
        verify: bool,
    },

    /// Erase flash
    Erase {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        region: RegionArgs,
    },

    /// Compare flash contents with a file
    Verify {
        #[command(flatten)]
        target: TargetArgs,

        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Start address (hex with 0x prefix, or decimal)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0")]
        offset: u32,
    },

    /// List supported flash parts
    ListParts {
        /// Filter by vendor name
        #[arg(long)]
        vendor: Option<String>,
    },

    /// List available backends
    ListBackends,
}
