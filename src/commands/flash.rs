//! Read, write, erase, verify and identification commands

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::backend::FlashTarget;
use crate::commands::list::format_size;

/// Chunk handed to the driver per call, so progress can be reported
const CHUNK_SIZE: usize = 64 * 1024;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Create a standard progress bar style
fn create_progress_bar_style() -> Result<ProgressStyle, Box<dyn std::error::Error>> {
    Ok(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}")?
        .progress_chars("#>-"))
}

fn progress(total: u64, phase: &'static str) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(total);
    pb.set_style(create_progress_bar_style()?);
    pb.set_message(phase);
    Ok(pb)
}

/// Read file contents into a Vec
fn read_file(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    println!("Read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Resolve `--offset`/`--length` against the device size
fn region(target: &dyn FlashTarget, offset: u32, length: Option<u32>) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let size = target.size()?;
    if offset as u64 > size {
        return Err(format!("Offset 0x{:X} is beyond the flash size ({} bytes)", offset, size).into());
    }
    let length = length.unwrap_or((size - offset as u64) as u32);
    if offset as u64 + length as u64 > size {
        return Err(format!(
            "Region 0x{:X}+0x{:X} exceeds the flash size ({} bytes)",
            offset, length, size
        )
        .into());
    }
    Ok((offset, length))
}

/// Read `buf.len()` bytes at `addr` in chunks, advancing `pb`
fn read_chunked(target: &dyn FlashTarget, addr: u32, buf: &mut [u8], pb: &ProgressBar) -> CmdResult {
    for (i, chunk) in buf.chunks_mut(CHUNK_SIZE).enumerate() {
        target.read(addr + (i * CHUNK_SIZE) as u32, chunk)?;
        pb.inc(chunk.len() as u64);
    }
    Ok(())
}

/// Identify the part
pub fn run_probe(target: &dyn FlashTarget) -> CmdResult {
    let slave = target.slave()?;
    println!(
        "Found {} {} (JEDEC ID 0x{:08X}, {}) on {}",
        slave.part.vendor,
        slave.part.name,
        slave.part.id,
        format_size(slave.part.device_size()),
        target.name()
    );
    Ok(())
}

/// Show the part and the derived controller settings
pub fn run_info(target: &dyn FlashTarget) -> CmdResult {
    let slave = target.slave()?;
    let part = slave.part;

    println!("Flash Part Information");
    println!("======================");
    println!();
    println!("Backend:         {}", target.name());
    println!("Vendor:          {}", part.vendor);
    println!("Name:            {}", part.name);
    println!("JEDEC ID:        0x{:08X}", part.id);
    println!("Family:          {:?}", slave.family);
    println!(
        "Size:            {} bytes ({})",
        part.device_size(),
        format_size(part.device_size())
    );
    println!("Page size:       {} bytes", part.page_size());
    println!("Die size:        {}", format_size(part.die_size()));
    println!("Erase unit:      {}", format_size(target.block_size()?));
    println!();
    println!("Erase opcodes:");
    for tier in cdqspi_core::Tier::ALL {
        let op = part.erase_op[tier.index()];
        if op != 0 {
            println!(
                "  0x{:02X}: {:>8} ({} ms typical)",
                op,
                format_size(part.size(tier)),
                part.erase_ms[tier.index()]
            );
        }
    }
    println!();
    println!("Controller settings:");
    println!(
        "  Read:   {:.1} MHz, {} dummy cycles, CFG 0x{:08X}, DEVRD 0x{:08X}",
        slave.read_hz as f32 / 1e6,
        slave.dummy_cycles,
        slave.cfg_rd,
        slave.dev_rd
    );
    println!(
        "  Write:  {:.1} MHz, CFG 0x{:08X}, DEVWR 0x{:08X}",
        slave.write_hz as f32 / 1e6,
        slave.cfg_wr,
        slave.dev_wr
    );
    println!(
        "  DELAY 0x{:08X}  RDDATACAP 0x{:08X}  DEVSZ 0x{:08X}",
        slave.delay, slave.rd_cap, slave.dev_sz
    );
    Ok(())
}

/// Read a region to a file
pub fn run_read(target: &dyn FlashTarget, output: &Path, offset: u32, length: Option<u32>) -> CmdResult {
    let (offset, length) = region(target, offset, length)?;
    let mut data = vec![0u8; length as usize];

    let pb = progress(length as u64, "Reading")?;
    read_chunked(target, offset, &mut data, &pb)?;
    pb.finish_with_message("Read complete");

    let mut file = File::create(output)?;
    file.write_all(&data)?;
    println!("Wrote {} bytes to {:?}", data.len(), output);
    Ok(())
}

/// Write a file, preserving the rest of every erase unit it touches
pub fn run_write(
    target: &dyn FlashTarget,
    input: &Path,
    offset: u32,
    no_erase: bool,
    verify: bool,
) -> CmdResult {
    let data = read_file(input)?;
    region(target, offset, Some(data.len() as u32))?;
    if data.is_empty() {
        println!("Nothing to write");
        return Ok(());
    }

    let (start, image) = if no_erase {
        (offset, data.clone())
    } else {
        let block = target.block_size()?;
        let start = offset - offset % block;
        let end = (offset + data.len() as u32).div_ceil(block) * block;
        let mut image = vec![0u8; (end - start) as usize];

        let pb = progress(image.len() as u64, "Reading")?;
        read_chunked(target, start, &mut image, &pb)?;
        pb.finish_with_message("Read complete");

        let at = (offset - start) as usize;
        if image[at..at + data.len()] == data[..] {
            println!("Flash already contains the desired data - no changes needed");
            return Ok(());
        }
        image[at..at + data.len()].copy_from_slice(&data);

        println!("Erasing 0x{:08X}+0x{:X}...", start, end - start);
        target.erase(start, end - start)?;
        (start, image)
    };

    let pb = progress(image.len() as u64, "Writing")?;
    for (i, chunk) in image.chunks(CHUNK_SIZE).enumerate() {
        target.write(start + (i * CHUNK_SIZE) as u32, chunk)?;
        pb.inc(chunk.len() as u64);
    }
    pb.finish_with_message("Write complete");

    if verify {
        compare(target, &image, start)?;
        println!("Verification passed");
    }
    Ok(())
}

/// Erase a region
pub fn run_erase(target: &dyn FlashTarget, offset: u32, length: Option<u32>) -> CmdResult {
    let (offset, length) = region(target, offset, length)?;
    let size = target.size()?;

    if offset == 0 && length as u64 == size {
        println!("Erasing the whole chip...");
        target.erase(cdqspi_core::ERASE_ALL, 0)?;
    } else {
        println!("Erasing 0x{:08X}+0x{:X}...", offset, length);
        target.erase(offset, length)?;
    }
    println!("Erase complete");
    Ok(())
}

/// Compare flash contents with a file
pub fn run_verify(target: &dyn FlashTarget, input: &Path, offset: u32) -> CmdResult {
    let data = read_file(input)?;
    region(target, offset, Some(data.len() as u32))?;
    compare(target, &data, offset)?;
    println!("Verification passed");
    Ok(())
}

fn compare(target: &dyn FlashTarget, expected: &[u8], offset: u32) -> CmdResult {
    let mut actual = vec![0u8; expected.len()];
    let pb = progress(expected.len() as u64, "Verifying")?;
    read_chunked(target, offset, &mut actual, &pb)?;
    pb.finish_and_clear();

    if let Some(pos) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        return Err(format!(
            "Verification failed at 0x{:08X}: expected 0x{:02X}, read 0x{:02X}",
            offset as usize + pos,
            expected[pos],
            actual[pos]
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdqspi_core::{Error, Result as DriverResult, SlaveConfig};
    use std::cell::RefCell;

    /// 64 KiB of flash with 4 KiB erase units, recording erase calls
    struct MemTarget {
        data: RefCell<Vec<u8>>,
        erases: RefCell<Vec<(u32, u32)>>,
    }

    impl MemTarget {
        fn new() -> Self {
            Self {
                data: RefCell::new(vec![0xA5; 0x10000]),
                erases: RefCell::new(Vec::new()),
            }
        }
    }

    impl FlashTarget for MemTarget {
        fn name(&self) -> &str {
            "memory"
        }
        fn slave(&self) -> DriverResult<SlaveConfig> {
            Err(Error::NotInitialized)
        }
        fn size(&self) -> DriverResult<u64> {
            Ok(self.data.borrow().len() as u64)
        }
        fn block_size(&self) -> DriverResult<u32> {
            Ok(0x1000)
        }
        fn read(&self, addr: u32, buf: &mut [u8]) -> DriverResult<()> {
            let addr = addr as usize;
            buf.copy_from_slice(&self.data.borrow()[addr..addr + buf.len()]);
            Ok(())
        }
        fn write(&self, addr: u32, data: &[u8]) -> DriverResult<()> {
            let addr = addr as usize;
            for (cell, byte) in self.data.borrow_mut()[addr..addr + data.len()].iter_mut().zip(data) {
                *cell &= byte;
            }
            Ok(())
        }
        fn erase(&self, addr: u32, len: u32) -> DriverResult<()> {
            self.erases.borrow_mut().push((addr, len));
            let (addr, len) = (addr as usize, len as usize);
            self.data.borrow_mut()[addr..addr + len].fill(0xFF);
            Ok(())
        }
    }

    #[test]
    fn test_write_erases_touched_units_in_one_call() {
        let target = MemTarget::new();
        let input = std::env::temp_dir().join(format!("cdqspi-write-{}.bin", std::process::id()));
        std::fs::write(&input, vec![0x3C; 0x2100]).unwrap();

        let result = run_write(&target, &input, 0x1800, false, true);
        std::fs::remove_file(&input).unwrap();
        result.unwrap();

        assert_eq!(target.erases.borrow().as_slice(), &[(0x1000, 0x3000)]);
        let data = target.data.borrow();
        assert!(data[0x1000..0x1800].iter().all(|&b| b == 0xA5));
        assert!(data[0x1800..0x3900].iter().all(|&b| b == 0x3C));
        assert!(data[0x3900..0x4000].iter().all(|&b| b == 0xA5));
        assert_eq!(data[0x4000], 0xA5);
    }
}
