//! Controller registry and public API
//!
//! [`Qspi`] owns a fixed set of controllers, each addressed by its index
//! (`dev`), with up to [`MAX_SLAVES`] chip selects (`slave`) each. Every
//! operation validates its arguments, takes the controller lock, programs
//! the block for the slave, and disables the controller again before the
//! lock is released, whatever the outcome.
//!
//! ```ignore
//! let qspi = Qspi::builder(platform, QspiConfig::default())
//!     .controller(hw)
//!     .build()?;
//! qspi.init(0, 0, Mode::empty())?;
//! let mut buf = [0u8; 256];
//! qspi.read(0, 0, 0x1000, &mut buf)?;
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, TryLockError};
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;

use crate::bringup::{bring_up, reset_controller, SlaveConfig};
use crate::command::{Session, CMD_MAX_BYTES};
use crate::config::{Mode, QspiConfig, MAX_SLAVES};
use crate::erase;
use crate::error::{Error, Result};
use crate::isr::IrqChannel;
use crate::platform::{CondvarSignal, Dma, NoDma, Platform};
use crate::regs::{Hardware, Reg};
use crate::transfer::Engine;

/// Number of controllers a registry can hold
pub const MAX_CONTROLLERS: usize = 2;

/// State only touched with the controller lock held
#[derive(Debug)]
struct Bus<D> {
    dma: Option<D>,
    hw_ready: bool,
}

/// State created by the first `init` naming the controller
#[derive(Debug)]
struct SharedState {
    slaves: [RwLock<Option<SlaveConfig>>; MAX_SLAVES],
    init_mask: AtomicU32,
    irq: IrqChannel<CondvarSignal>,
}

impl SharedState {
    fn new(tick_hz: u32) -> Self {
        Self {
            slaves: Default::default(),
            init_mask: AtomicU32::new(0),
            irq: IrqChannel::new(CondvarSignal::new(tick_hz)),
        }
    }

    fn is_initialized(&self, slave: usize) -> bool {
        self.init_mask.load(Ordering::Acquire) & (1 << slave) != 0
    }
}

/// One controller instance
#[derive(Debug)]
struct Controller<H, D> {
    hw: H,
    bus: Mutex<Bus<D>>,
    state: OnceCell<SharedState>,
}

/// Registry of QSPI controllers
pub struct Qspi<H, P, D = NoDma> {
    platform: P,
    config: QspiConfig,
    controllers: heapless::Vec<Controller<H, D>, MAX_CONTROLLERS>,
}

/// Builder for [`Qspi`]
pub struct QspiBuilder<H, P, D> {
    platform: P,
    config: QspiConfig,
    controllers: heapless::Vec<Controller<H, D>, MAX_CONTROLLERS>,
    overflow: bool,
}

impl<H, P> Qspi<H, P, NoDma>
where
    H: Hardware,
    P: Platform,
{
    /// Start a registry whose controllers have no DMA channel
    pub fn builder(platform: P, config: QspiConfig) -> QspiBuilder<H, P, NoDma> {
        QspiBuilder::new(platform, config)
    }
}

impl<H, P, D> Qspi<H, P, D>
where
    H: Hardware,
    P: Platform,
    D: Dma,
{
    /// Start a registry whose controllers may carry a `D` DMA channel
    pub fn builder_with_dma(platform: P, config: QspiConfig) -> QspiBuilder<H, P, D> {
        QspiBuilder::new(platform, config)
    }
}

impl<H, P, D> QspiBuilder<H, P, D>
where
    H: Hardware,
    P: Platform,
    D: Dma,
{
    fn new(platform: P, config: QspiConfig) -> Self {
        Self {
            platform,
            config,
            controllers: heapless::Vec::new(),
            overflow: false,
        }
    }

    fn push(mut self, hw: H, dma: Option<D>) -> Self {
        let ctl = Controller {
            hw,
            bus: Mutex::new(Bus {
                dma,
                hw_ready: false,
            }),
            state: OnceCell::new(),
        };
        if self.controllers.push(ctl).is_err() {
            log::warn!("QSPI registry full ({} controllers)", MAX_CONTROLLERS);
            self.overflow = true;
        }
        self
    }

    /// Add a controller without a DMA channel
    pub fn controller(self, hw: H) -> Self {
        self.push(hw, None)
    }

    /// Add a controller whose reads may be drained by `dma`
    pub fn controller_with_dma(self, hw: H, dma: D) -> Self {
        self.push(hw, Some(dma))
    }

    /// Finish the registry
    ///
    /// Fails with `InvalidArgument` when more than [`MAX_CONTROLLERS`]
    /// controllers were added.
    pub fn build(self) -> Result<Qspi<H, P, D>> {
        if self.overflow {
            return Err(Error::InvalidArgument);
        }
        Ok(Qspi {
            platform: self.platform,
            config: self.config,
            controllers: self.controllers,
        })
    }
}

impl<H, P, D> Qspi<H, P, D>
where
    H: Hardware,
    P: Platform,
    D: Dma,
{
    /// Driver configuration
    pub fn config(&self) -> &QspiConfig {
        &self.config
    }

    /// Platform services
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Number of controllers in the registry
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Register block of controller `dev`
    pub fn hardware(&self, dev: usize) -> Option<&H> {
        self.controllers.get(dev).map(|ctl| &ctl.hw)
    }

    /// Identify and configure the flash on `slave` of controller `dev`
    ///
    /// The first `init` of a controller also resets it. On failure the
    /// slave is left uninitialized.
    pub fn init(&self, dev: usize, slave: usize, mode: Mode) -> Result<()> {
        let ctl = self.controllers.get(dev).ok_or(Error::InvalidArgument)?;
        if slave >= MAX_SLAVES {
            return Err(Error::InvalidArgument);
        }
        let state = ctl
            .state
            .get_or_init(|| SharedState::new(self.platform.tick_hz()));

        let mut bus = self.lock(ctl)?;
        state.init_mask.fetch_and(!(1 << slave), Ordering::AcqRel);

        let s = Session::new(&ctl.hw, &self.platform, &self.config);
        let result = if bus.hw_ready {
            bring_up(&s, dev, slave, mode)
        } else {
            reset_controller(&ctl.hw).and_then(|()| {
                bus.hw_ready = true;
                bring_up(&s, dev, slave, mode)
            })
        };
        ctl.hw.disable();
        let slv = result?;

        *state.slaves[slave].write().map_err(|_| Error::LockFailed)? = Some(slv);
        state.init_mask.fetch_or(1 << slave, Ordering::AcqRel);
        log::info!(
            "QSPI {}:{} {} {} ready ({} KiB)",
            dev,
            slave,
            slv.part.vendor,
            slv.part.name,
            slv.part.device_size() / 1024
        );
        Ok(())
    }

    /// Read `buf.len()` bytes at `addr`
    pub fn read(&self, dev: usize, slave: usize, addr: u32, buf: &mut [u8]) -> Result<()> {
        let (ctl, state, slv) = self.slave(dev, slave)?;
        self.check_bounds(&slv, addr, buf.len() as u64)?;
        if buf.is_empty() {
            return Ok(());
        }

        self.locked(ctl, |s, bus| {
            Engine::new(s, &slv, &state.irq, bus.dma.as_mut()).read(addr, buf)
        })
    }

    /// Program `data` at `addr`; the region must already be erased
    pub fn write(&self, dev: usize, slave: usize, addr: u32, data: &[u8]) -> Result<()> {
        let (ctl, state, slv) = self.slave(dev, slave)?;
        self.check_bounds(&slv, addr, data.len() as u64)?;
        if self.config.read_only {
            return Err(Error::ReadOnly);
        }
        if data.is_empty() {
            return Ok(());
        }

        self.locked(ctl, |s, bus| {
            Engine::new(s, &slv, &state.irq, bus.dma.as_mut()).write(addr, data)
        })
    }

    /// Erase `len` bytes at `addr`
    ///
    /// `addr` = [`erase::ERASE_ALL`] with `len` = 0 erases the whole device.
    pub fn erase(&self, dev: usize, slave: usize, addr: u32, len: u32) -> Result<()> {
        let (ctl, _, slv) = self.slave(dev, slave)?;
        let (addr, len) = erase::resolve_region(slv.part, addr, len, self.config.check_args)?;
        if self.config.read_only {
            return Err(Error::ReadOnly);
        }
        if len == 0 {
            return Ok(());
        }
        erase::check_alignment(slv.part, addr, len)?;

        self.locked(ctl, |s, _| erase::run(s, &slv, addr, len))
    }

    /// Device size in bytes
    pub fn size(&self, dev: usize, slave: usize) -> Result<u64> {
        let (_, _, slv) = self.slave(dev, slave)?;
        Ok(slv.part.device_size() as u64)
    }

    /// Smallest directly erasable unit in bytes
    pub fn block_size(&self, dev: usize, slave: usize) -> Result<u32> {
        let (_, _, slv) = self.slave(dev, slave)?;
        Ok(slv.part.block_size())
    }

    /// Resolved configuration of an initialized slave
    pub fn slave_config(&self, dev: usize, slave: usize) -> Result<SlaveConfig> {
        self.slave(dev, slave).map(|(_, _, slv)| slv)
    }

    /// Send a raw command and read up to 8 bytes back
    pub fn command_read(&self, dev: usize, slave: usize, opcode: u8, buf: &mut [u8]) -> Result<()> {
        if buf.len() > CMD_MAX_BYTES {
            return Err(Error::InvalidArgument);
        }
        let (ctl, _, slv) = self.slave(dev, slave)?;
        self.locked(ctl, |s, _| {
            s.hw().write(Reg::Cfg, slv.cfg_wr);
            s.command_read(opcode, buf)
        })
    }

    /// Send a raw command followed by up to 8 bytes
    pub fn command_write(&self, dev: usize, slave: usize, opcode: u8, data: &[u8]) -> Result<()> {
        if data.len() > CMD_MAX_BYTES {
            return Err(Error::InvalidArgument);
        }
        let (ctl, _, slv) = self.slave(dev, slave)?;
        self.locked(ctl, |s, _| {
            s.hw().write(Reg::Cfg, slv.cfg_wr);
            s.command_write(opcode, data)
        })
    }

    /// Interrupt entry for controller `dev`
    ///
    /// Safe to call from every core that sees the interrupt; only the one
    /// that claims the event runs the handler. Returns true for that core.
    pub fn on_interrupt(&self, dev: usize) -> bool {
        let Some(ctl) = self.controllers.get(dev) else {
            return false;
        };
        match ctl.state.get() {
            Some(state) => state.irq.handle(&ctl.hw),
            None => false,
        }
    }

    /// Interrupt channel of controller `dev`, once it has been initialized
    pub fn irq_channel(&self, dev: usize) -> Option<&IrqChannel<CondvarSignal>> {
        self.controllers.get(dev)?.state.get().map(|state| &state.irq)
    }

    fn slave(&self, dev: usize, slave: usize) -> Result<(&Controller<H, D>, &SharedState, SlaveConfig)> {
        let ctl = self.controllers.get(dev).ok_or(Error::InvalidArgument)?;
        if slave >= MAX_SLAVES {
            return Err(Error::InvalidArgument);
        }
        let state = ctl.state.get().ok_or(Error::NotInitialized)?;
        if !state.is_initialized(slave) {
            return Err(Error::NotInitialized);
        }
        let slv = *state.slaves[slave].read().map_err(|_| Error::LockFailed)?;
        let slv = slv.ok_or(Error::NotInitialized)?;
        Ok((ctl, state, slv))
    }

    fn check_bounds(&self, slv: &SlaveConfig, addr: u32, len: u64) -> Result<()> {
        if self.config.check_args && addr as u64 + len > slv.part.device_size() as u64 {
            return Err(Error::SizeExceeded);
        }
        Ok(())
    }

    /// Run `f` with the controller lock held, then disable the controller
    fn locked<T>(
        &self,
        ctl: &Controller<H, D>,
        f: impl FnOnce(&Session<'_, H, P>, &mut Bus<D>) -> Result<T>,
    ) -> Result<T> {
        let mut bus = self.lock(ctl)?;
        let s = Session::new(&ctl.hw, &self.platform, &self.config);
        let result = f(&s, &mut bus);
        ctl.hw.disable();
        result
    }

    fn lock<'c>(&self, ctl: &'c Controller<H, D>) -> Result<MutexGuard<'c, Bus<D>>> {
        let Some(ms) = self.config.lock_timeout_ms else {
            return ctl.bus.lock().map_err(|_| {
                log::warn!("QSPI controller lock poisoned");
                Error::LockFailed
            });
        };

        let deadline = Instant::now() + Duration::from_millis(ms as u64);
        loop {
            match ctl.bus.try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::Poisoned(_)) => {
                    log::warn!("QSPI controller lock poisoned");
                    return Err(Error::LockFailed);
                }
                Err(TryLockError::WouldBlock) => {
                    if Instant::now() >= deadline {
                        log::warn!("QSPI controller lock not acquired within {} ms", ms);
                        return Err(Error::LockFailed);
                    }
                    std::thread::yield_now();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::{Clock, MockHw};
    use std::cell::Cell;

    /// Register file that behaves enough like the block to get through
    /// reset and report a W25Q16 on every chip select. Every register
    /// other than the ID reads back as zero, so the part is never busy.
    struct IdleHw {
        inner: MockHw,
        resets: Cell<u32>,
    }

    impl IdleHw {
        fn new() -> Self {
            let inner = MockHw::new();
            inner.reply.set(0x00_00_15_40_EF);
            Self {
                inner,
                resets: Cell::new(0),
            }
        }
    }

    impl Hardware for IdleHw {
        fn read(&self, reg: Reg) -> u32 {
            let opcode = self.inner.read(Reg::FlashCmd) >> 24;
            match reg {
                Reg::Cfg => self.inner.read(reg) | crate::regs::CFG_IDLE,
                Reg::RdDataLo | Reg::RdDataUp if opcode != crate::opcodes::RDID as u32 => 0,
                _ => self.inner.read(reg),
            }
        }
        fn write(&self, reg: Reg, value: u32) {
            self.inner.write(reg, value)
        }
        fn read_fifo(&self) -> u32 {
            0
        }
        fn write_fifo(&self, _value: u32) {}
        fn fifo_bus_address(&self) -> usize {
            0
        }
        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    fn registry() -> Qspi<IdleHw, Clock> {
        Qspi::builder(Clock, QspiConfig::default())
            .controller(IdleHw::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_capacity() {
        let full = Qspi::builder(Clock, QspiConfig::default())
            .controller(IdleHw::new())
            .controller(IdleHw::new())
            .controller(IdleHw::new())
            .build();
        assert!(matches!(full, Err(Error::InvalidArgument)));
    }

    #[test]
    fn test_argument_validation() {
        let qspi = registry();
        assert_eq!(qspi.init(1, 0, Mode::empty()), Err(Error::InvalidArgument));
        assert_eq!(qspi.init(0, 4, Mode::empty()), Err(Error::InvalidArgument));
        assert_eq!(qspi.size(0, 0), Err(Error::NotInitialized));
        let mut buf = [0u8; 4];
        assert_eq!(qspi.read(0, 0, 0, &mut buf), Err(Error::NotInitialized));
        assert_eq!(
            qspi.command_read(0, 0, 0x05, &mut [0u8; 9]),
            Err(Error::InvalidArgument)
        );
        assert!(!qspi.on_interrupt(0));
    }

    #[test]
    fn test_init_resets_once_and_disables() {
        let qspi = registry();
        qspi.init(0, 0, Mode::empty()).unwrap();
        qspi.init(0, 1, Mode::empty()).unwrap();

        let hw = qspi.hardware(0).unwrap();
        assert_eq!(hw.resets.get(), 1);
        assert_eq!(hw.inner.read(Reg::Cfg) & crate::regs::CFG_ENABLE, 0);
        assert_eq!(qspi.size(0, 1), Ok(2 * 1024 * 1024));
        assert_eq!(qspi.block_size(0, 1), Ok(4096));
    }

    #[test]
    fn test_failed_init_clears_slave() {
        let qspi = registry();
        qspi.init(0, 0, Mode::empty()).unwrap();

        qspi.hardware(0).unwrap().inner.reply.set(0x00_00_99_99_99);
        assert_eq!(
            qspi.init(0, 0, Mode::empty()),
            Err(Error::UnknownPart { id: 0x0099_9999 })
        );
        assert_eq!(qspi.size(0, 0), Err(Error::NotInitialized));
    }

    #[test]
    fn test_bounds_checked_before_lock() {
        let qspi = registry();
        qspi.init(0, 0, Mode::empty()).unwrap();
        let hw = qspi.hardware(0).unwrap();
        let writes = hw.inner.writes.borrow().len();

        let mut buf = [0u8; 16];
        assert_eq!(qspi.read(0, 0, 0x1F_FFF8, &mut buf), Err(Error::SizeExceeded));
        assert_eq!(qspi.write(0, 0, 0x1F_FFF8, &buf), Err(Error::SizeExceeded));
        assert_eq!(qspi.erase(0, 0, 0x1F_F000, 0x2000), Err(Error::SizeExceeded));
        assert_eq!(qspi.erase(0, 0, 0x1000, 0), Ok(()));
        assert_eq!(qspi.erase(0, 0, 1, 4096), Err(Error::UnalignedErase));
        assert_eq!(hw.inner.writes.borrow().len(), writes);
    }

    #[test]
    fn test_read_only_policy() {
        let config = QspiConfig {
            read_only: true,
            ..QspiConfig::default()
        };
        let qspi = Qspi::builder(Clock, config)
            .controller(IdleHw::new())
            .build()
            .unwrap();
        qspi.init(0, 0, Mode::empty()).unwrap();
        assert_eq!(qspi.write(0, 0, 0, &[0u8; 4]), Err(Error::ReadOnly));
        assert_eq!(qspi.erase(0, 0, 0, 4096), Err(Error::ReadOnly));
        assert_eq!(qspi.erase(0, 0, erase::ERASE_ALL, 0), Err(Error::ReadOnly));
        assert_eq!(qspi.erase(0, 0, 0x1000, 0), Err(Error::ReadOnly));
    }

    #[test]
    fn test_lock_timeout() {
        let config = QspiConfig {
            lock_timeout_ms: Some(5),
            ..QspiConfig::default()
        };
        let qspi = Qspi::builder(Clock, config)
            .controller(IdleHw::new())
            .build()
            .unwrap();
        qspi.init(0, 0, Mode::empty()).unwrap();

        let ctl = &qspi.controllers[0];
        let held = ctl.bus.lock().unwrap();
        assert_eq!(qspi.size(0, 0), Ok(2 * 1024 * 1024));
        assert_eq!(
            qspi.command_write(0, 0, 0x06, &[]),
            Err(Error::LockFailed)
        );
        drop(held);
        assert_eq!(qspi.command_write(0, 0, 0x06, &[]), Ok(()));
    }
}
