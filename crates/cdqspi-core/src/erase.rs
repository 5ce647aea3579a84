//! Erase planner
//!
//! A region is erased with the fewest commands: at every step the largest
//! erase tier whose size fits in what is left and to which the current
//! address is aligned is used. Planning is pure; [`run`] walks the plan
//! and drives the flash.
//!
//! With 4 KiB subsectors and 64 KiB sectors, `0xC000..0x38000` becomes 4
//! subsector erases, 2 sector erases and 8 subsector erases.

use crate::bringup::SlaveConfig;
use crate::command::Session;
use crate::config::Operation;
use crate::error::{Error, Result};
use crate::part::{Part, Tier};
use crate::platform::{ms_to_ticks, Deadline, Platform, Timeout};
use crate::regs::{Hardware, Reg};

/// Address sentinel selecting the whole device (with a zero length)
pub const ERASE_ALL: u32 = 0xFFFF_FFFF;

/// Bound on an erase, as a multiple of the part's typical erase time
const EXPIRY_FACTOR: u32 = 10;

/// Floor on the short sleeps between polls, in ticks
const MIN_SHORT_SLEEP: u32 = 2;

/// One erase command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseStep {
    /// Tier erased
    pub tier: Tier,
    /// Erase opcode
    pub opcode: u8,
    /// First byte erased
    pub addr: u32,
    /// Bytes erased
    pub size: u32,
    /// Typical duration, in ms
    pub ms: u32,
}

/// Apply the whole-device sentinel and the bounds check
///
/// Returns the region to erase, possibly empty.
pub fn resolve_region(part: &Part, addr: u32, len: u32, check_args: bool) -> Result<(u32, u32)> {
    let (addr, len) = if addr == ERASE_ALL && len == 0 {
        (0, part.device_size())
    } else {
        (addr, len)
    };
    if check_args && addr as u64 + len as u64 > part.device_size() as u64 {
        return Err(Error::SizeExceeded);
    }
    Ok((addr, len))
}

/// Check that the region can be covered by the smallest erase tier
pub fn check_alignment(part: &Part, addr: u32, len: u32) -> Result<()> {
    let Some(tier) = part.min_erase_tier() else {
        return Err(Error::NoEraseCapability);
    };
    let mask = part.size(tier) - 1;
    if addr & mask != 0 || len & mask != 0 {
        return Err(Error::UnalignedErase);
    }
    Ok(())
}

/// Decompose a region into erase commands
pub fn plan(part: &Part, addr: u32, len: u32) -> Plan<'_> {
    Plan {
        part,
        addr,
        left: len,
        failed: false,
    }
}

/// Iterator over the erase commands covering a region
///
/// Yields `Err(UnalignedErase)` once, then stops, if some step has no tier
/// that fits.
#[derive(Debug, Clone)]
pub struct Plan<'p> {
    part: &'p Part,
    addr: u32,
    left: u32,
    failed: bool,
}

impl Iterator for Plan<'_> {
    type Item = Result<EraseStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 || self.failed {
            return None;
        }

        let best = Tier::ALL
            .iter()
            .copied()
            .filter(|&t| {
                let size = self.part.size(t);
                self.part.erase_op[t.index()] != 0
                    && size != 0
                    && self.left >= size
                    && self.addr % size == 0
            })
            .last();

        let Some(tier) = best else {
            self.failed = true;
            return Some(Err(Error::UnalignedErase));
        };
        let step = EraseStep {
            tier,
            opcode: self.part.erase_op[tier.index()],
            addr: self.addr,
            size: self.part.size(tier),
            ms: self.part.erase_ms[tier.index()],
        };
        self.addr = self.addr.wrapping_add(step.size);
        self.left -= step.size;
        Some(Ok(step))
    }
}

/// Erase execution state
#[derive(Debug, Clone, Copy)]
enum State {
    SelectTier,
    IssueErase(EraseStep),
    AwaitComplete(EraseStep),
    Done,
}

/// Erase `len` bytes at `addr`, already validated
pub fn run<H, P>(s: &Session<'_, H, P>, slave: &SlaveConfig, addr: u32, len: u32) -> Result<()>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    s.hw().write(Reg::Cfg, slave.cfg_wr);

    let mut steps = plan(slave.part, addr, len);
    let mut state = State::SelectTier;
    loop {
        state = match state {
            State::SelectTier => match steps.next() {
                Some(Ok(step)) => State::IssueErase(step),
                Some(Err(e)) => return Err(e),
                None => State::Done,
            },
            State::IssueErase(step) => {
                issue(s, slave, &step)?;
                State::AwaitComplete(step)
            }
            State::AwaitComplete(step) => {
                if !await_complete(s, slave, &step)? {
                    log::warn!(
                        "{:?} erase at 0x{:08X} did not complete in time",
                        step.tier,
                        step.addr
                    );
                    return Err(Error::Timeout);
                }
                State::SelectTier
            }
            State::Done => return Ok(()),
        }
    }
}

fn issue<H, P>(s: &Session<'_, H, P>, slave: &SlaveConfig, step: &EraseStep) -> Result<()>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    log::trace!(
        "erase {:?} 0x{:08X}+0x{:X} opcode 0x{:02X}",
        step.tier,
        step.addr,
        step.size,
        step.opcode
    );
    if step.tier == Tier::Device {
        s.write_enable()?;
        return s.command_write(step.opcode, &[]);
    }

    s.extend_address(slave.part, slave.family, step.addr)?;
    let bytes = step.addr.to_be_bytes();
    let n = s.address_bytes(slave.part);
    s.write_enable()?;
    s.command_write(step.opcode, &bytes[4 - n..])
}

/// Wait for the erase to finish; false on expiry
fn await_complete<H, P>(s: &Session<'_, H, P>, slave: &SlaveConfig, step: &EraseStep) -> Result<bool>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    let platform = s.platform();
    let rated = ms_to_ticks(platform.tick_hz(), step.ms as u64, 2);
    let bound = rated.saturating_mul(EXPIRY_FACTOR);

    if !s.config().operation.contains(Operation::ERASE_SLEEP) {
        return s.wait_ready(slave.family, Timeout::Ticks(bound));
    }

    // Sleep most of the typical time first, then poll at a finer grain
    let deadline = Deadline::after(platform, bound);
    let mut nap = rated - rated / 5;
    let short = (rated >> 5).max(MIN_SHORT_SLEEP);
    loop {
        platform.sleep(nap);
        nap = short;
        let expired = deadline.expired(platform);
        if s.wait_ready(slave.family, Timeout::Poll)? {
            return Ok(true);
        }
        if expired {
            return Ok(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::find_part;

    fn w25q16() -> &'static Part {
        find_part(0x001540EF).unwrap()
    }

    fn opcodes(part: &Part, addr: u32, len: u32) -> heapless::Vec<(u8, u32), 64> {
        plan(part, addr, len)
            .map(|s| s.map(|s| (s.opcode, s.addr)).unwrap())
            .collect()
    }

    #[test]
    fn test_worked_example() {
        let steps = opcodes(w25q16(), 0xC000, 0x2C000);
        let ops: heapless::Vec<u8, 64> = steps.iter().map(|s| s.0).collect();
        assert_eq!(
            ops.as_slice(),
            &[0x20, 0x20, 0x20, 0x20, 0xD8, 0xD8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20]
        );
        assert_eq!(steps[0].1, 0xC000);
        assert_eq!(steps[4].1, 0x10000);
        assert_eq!(steps[6].1, 0x30000);
        assert_eq!(steps[13].1, 0x37000);
    }

    #[test]
    fn test_whole_device_uses_chip_erase() {
        let part = w25q16();
        let steps = opcodes(part, 0, part.device_size());
        assert_eq!(steps.as_slice(), &[(0xC7, 0)]);
    }

    #[test]
    fn test_plan_covers_region() {
        let part = w25q16();
        let mut next = 0x1000;
        let mut total = 0;
        for step in plan(part, 0x1000, 0x1F_0000) {
            let step = step.unwrap();
            assert_eq!(step.addr, next);
            assert_eq!(step.addr % step.size, 0);
            next += step.size;
            total += step.size;
        }
        assert_eq!(total, 0x1F_0000);
    }

    #[test]
    fn test_plan_reports_misfit() {
        let part = w25q16();
        let mut steps = plan(part, 0x800, 0x1000);
        assert_eq!(steps.next(), Some(Err(Error::UnalignedErase)));
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn test_resolve_region() {
        let part = w25q16();
        assert_eq!(resolve_region(part, ERASE_ALL, 0, true), Ok((0, 2 * 1024 * 1024)));
        assert_eq!(resolve_region(part, 0x1F_F000, 0x2000, true), Err(Error::SizeExceeded));
        assert_eq!(resolve_region(part, 0x1F_F000, 0x2000, false), Ok((0x1F_F000, 0x2000)));
        assert_eq!(resolve_region(part, 0x1000, 0, true), Ok((0x1000, 0)));
    }

    #[test]
    fn test_alignment() {
        let part = w25q16();
        assert_eq!(check_alignment(part, 1, 4096), Err(Error::UnalignedErase));
        assert_eq!(check_alignment(part, 0, 100), Err(Error::UnalignedErase));
        assert_eq!(check_alignment(part, 0x3000, 0x1000), Ok(()));

        let mut none = *part;
        none.erase_op = [0; 5];
        assert_eq!(check_alignment(&none, 0, 4096), Err(Error::NoEraseCapability));
    }
}
