//! cdqspi - NOR flash tool for the Cadence QSPI controller
//!
//! Drives the QSPI controller found in the Cyclone V and Arria 10 hard
//! processor systems, or a simulated one, through the `cdqspi-core` driver.
//!
//! # Architecture
//!
//! A backend string selects the hardware (`sim` or `socfpga`) and its
//! options. The backend registers one controller with the driver, brings
//! up the requested chip select and hands the commands a
//! [`FlashTarget`](backend::FlashTarget).

mod backend;
mod cli;
mod commands;

use cdqspi_core::{Error as DriverError, Mode, QspiConfig};
use clap::Parser;
use cli::{Cli, Commands, TargetArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.verbose {
        0 => {}
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let config = match &cli.config {
        Some(path) => QspiConfig::load(path)?,
        None => QspiConfig::default(),
    };

    match cli.command {
        Commands::Probe { target, id_only } => {
            let config = QspiConfig { id_only, ..config };
            match open(&target, config) {
                Ok(flash) => commands::run_probe(flash.as_ref()),
                Err(backend::BackendError::Driver(DriverError::IdOnly { id })) => {
                    let b = id.to_le_bytes();
                    let name = cdqspi_core::JedecId::from_bytes([b[0], b[1], b[2], 0, b[3]])
                        .lookup()
                        .map(|p| p.name)
                        .unwrap_or("not in the part table");
                    println!("JEDEC ID 0x{:08X} ({})", id, name);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Info { target } => with_target(&target, config, |t| commands::run_info(t)),
        Commands::Read {
            target,
            region,
            output,
        } => with_target(&target, config, |t| {
            commands::run_read(t, &output, region.offset, region.length)
        }),
        Commands::Write {
            target,
            input,
            offset,
            no_erase,
            verify,
        } => with_target(&target, config, |t| {
            commands::run_write(t, &input, offset, no_erase, verify)
        }),
        Commands::Erase { target, region } => with_target(&target, config, |t| {
            commands::run_erase(t, region.offset, region.length)
        }),
        Commands::Verify {
            target,
            input,
            offset,
        } => with_target(&target, config, |t| commands::run_verify(t, &input, offset)),
        Commands::ListParts { vendor } => {
            commands::list_parts(vendor.as_deref());
            Ok(())
        }
        Commands::ListBackends => {
            commands::list_backends();
            Ok(())
        }
    }
}

fn open(
    args: &TargetArgs,
    mut config: QspiConfig,
) -> Result<Box<dyn backend::FlashTarget>, backend::BackendError> {
    config.read_only |= args.read_only;
    let mode = if args.cs_decode {
        Mode::CS_DECODE
    } else {
        Mode::empty()
    };
    backend::open_target(&args.backend, config, args.cs, mode)
}

/// Open the target, run `f`, then close the target
fn with_target(
    args: &TargetArgs,
    config: QspiConfig,
    f: impl FnOnce(&dyn backend::FlashTarget) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = open(args, config)?;
    f(target.as_ref())?;
    target.close()?;
    Ok(())
}
