//! Flash readiness polling and upper address byte handling

use crate::command::Session;
use crate::error::Result;
use crate::opcodes::{BRRD, BRWR, RDFSR, RDSR, WREAR};
use crate::part::{AddressExtension, Family, Part};
use crate::platform::{Deadline, Platform, Timeout};
use crate::regs::Hardware;

/// Status register 1: write in progress
const SR_WIP: u8 = 1 << 0;
/// Flag status register: program/erase controller ready
const FSR_READY: u8 = 1 << 7;
/// Bank address register: extended address enable
const BAR_EXTADD: u8 = 1 << 7;

impl<H, P> Session<'_, H, P>
where
    H: Hardware + ?Sized,
    P: Platform + ?Sized,
{
    /// Poll the flash until it reports ready or `timeout` runs out
    ///
    /// Returns `Ok(false)` when the part is still busy at the end of the
    /// wait. Micron N25Q parts must also report ready in the flag status
    /// register.
    pub fn wait_ready(&self, family: Family, timeout: Timeout) -> Result<bool> {
        let deadline = match timeout {
            Timeout::Ticks(ticks) => Some(Deadline::after(self.platform, ticks)),
            _ => None,
        };

        if !self.poll_until(timeout, deadline, || {
            Ok(self.read_register(RDSR)? & SR_WIP == 0)
        })? {
            return Ok(false);
        }
        if family.has_flag_status() {
            return self.poll_until(timeout, deadline, || {
                Ok(self.read_register(RDFSR)? & FSR_READY != 0)
            });
        }
        Ok(true)
    }

    /// Run `ready` until it holds; the expiry is sampled before each poll
    fn poll_until(
        &self,
        timeout: Timeout,
        deadline: Option<Deadline>,
        mut ready: impl FnMut() -> Result<bool>,
    ) -> Result<bool> {
        loop {
            let expired = match (timeout, deadline) {
                (Timeout::Poll, _) => true,
                (_, Some(deadline)) => deadline.expired(self.platform),
                _ => false,
            };
            if ready()? {
                return Ok(true);
            }
            if expired {
                return Ok(false);
            }
        }
    }

    /// Select the 16 MiB bank holding `addr` on parts driven with 3-byte
    /// addresses
    ///
    /// Nothing is sent when the part fits in 24 bits or the driver keeps
    /// large parts in 4-byte address mode.
    pub fn extend_address(&self, part: &Part, family: Family, addr: u32) -> Result<()> {
        if self.config.four_byte_address || !part.is_large() {
            return Ok(());
        }
        let bank = (addr >> 24) as u8;
        match family.address_extension() {
            Some(AddressExtension::ExtendedAddressRegister) => {
                self.write_enable()?;
                self.command_write(WREAR, &[bank])
            }
            Some(AddressExtension::BankRegister) => {
                let bar = self.read_register(BRRD)?;
                self.write_enable()?;
                self.command_write(BRWR, &[(bar & BAR_EXTADD) | bank])
            }
            None => Ok(()),
        }
    }

    /// Number of address bytes the flash expects
    pub fn address_bytes(&self, part: &Part) -> usize {
        if part.is_large() && self.config.four_byte_address {
            4
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::{Clock, MockHw};
    use crate::config::{CmdClock, QspiConfig};
    use crate::part::find_part;
    use crate::regs::Reg;

    fn config() -> QspiConfig {
        QspiConfig {
            cmd_clock: CmdClock::Current,
            four_byte_address: false,
            ..QspiConfig::default()
        }
    }

    fn opcodes(hw: &MockHw) -> heapless::Vec<u8, 32> {
        hw.writes
            .borrow()
            .iter()
            .filter(|(r, v)| *r == Reg::FlashCmd && v & 1 == 0)
            .map(|(_, v)| (v >> 24) as u8)
            .collect()
    }

    #[test]
    fn test_ready_poll() {
        let hw = MockHw::new();
        let cfg = config();
        let s = Session::new(&hw, &Clock, &cfg);

        hw.reply.set(0x01);
        assert!(!s.wait_ready(Family::WinbondQ, Timeout::Poll).unwrap());
        hw.reply.set(0x00);
        assert!(s.wait_ready(Family::WinbondQ, Timeout::Poll).unwrap());
    }

    #[test]
    fn test_flag_status_polarity() {
        let hw = MockHw::new();
        let cfg = config();
        let s = Session::new(&hw, &Clock, &cfg);

        // WIP clear, FSR bit 7 clear: still busy
        hw.reply.set(0x00);
        assert!(!s.wait_ready(Family::MicronN25Q, Timeout::Poll).unwrap());
        hw.reply.set(0x80);
        assert!(s.wait_ready(Family::MicronN25Q, Timeout::Poll).unwrap());
        assert_eq!(opcodes(&hw).as_slice(), &[0x05, 0x70, 0x05, 0x70]);
    }

    #[test]
    fn test_extend_address_small_part_is_noop() {
        let hw = MockHw::new();
        let cfg = config();
        let s = Session::new(&hw, &Clock, &cfg);
        let part = find_part(0x001740EF).unwrap();
        s.extend_address(part, Family::WinbondQ, 0x00FF_0000).unwrap();
        assert!(hw.writes.borrow().is_empty());
    }

    #[test]
    fn test_extend_address_ear() {
        let hw = MockHw::new();
        let cfg = config();
        let s = Session::new(&hw, &Clock, &cfg);
        let part = find_part(0x0019BA20).unwrap();
        s.extend_address(part, Family::MicronN25Q, 0x0100_0000).unwrap();
        assert_eq!(opcodes(&hw).as_slice(), &[0x06, 0xC5]);
        let data: heapless::Vec<u32, 8> = hw
            .writes
            .borrow()
            .iter()
            .filter(|(r, _)| *r == Reg::WrDataLo)
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(data.last(), Some(&1));
    }

    #[test]
    fn test_extend_address_bank_keeps_extadd() {
        let hw = MockHw::new();
        let cfg = config();
        let s = Session::new(&hw, &Clock, &cfg);
        let part = find_part(0x00190201).unwrap();
        hw.reply.set(0x81);
        s.extend_address(part, Family::SpansionS25FLS, 0x0100_0000).unwrap();
        assert_eq!(opcodes(&hw).as_slice(), &[0x16, 0x06, 0x17]);
        let data = hw
            .writes
            .borrow()
            .iter()
            .rev()
            .find(|(r, _)| *r == Reg::WrDataLo)
            .map(|(_, v)| *v);
        assert_eq!(data, Some(0x81));
    }

    #[test]
    fn test_address_bytes() {
        let hw = MockHw::new();
        let part = find_part(0x0019BA20).unwrap();
        let cfg = config();
        assert_eq!(Session::new(&hw, &Clock, &cfg).address_bytes(part), 3);
        let cfg = QspiConfig::default();
        assert_eq!(Session::new(&hw, &Clock, &cfg).address_bytes(part), 4);
    }
}
