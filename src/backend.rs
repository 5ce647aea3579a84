//! Backend registration and dispatch
//!
//! A backend string names the hardware and its options, e.g.
//! `sim:part=N25Q256,image=flash.bin` or `socfpga:soc=arria10`.

use std::path::PathBuf;
use std::sync::Arc;

use cdqspi_core::{
    Dma, Hardware, Mode, Platform, Qspi, QspiConfig, Result as DriverResult, SlaveConfig,
};
use thiserror::Error;

/// Errors raised while opening a backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// No backend of that name is compiled in
    #[error("unknown backend '{0}' (available: {1})")]
    Unknown(String, String),

    /// An option the backend does not take, or a malformed one
    #[error("invalid option '{option}' for backend {backend}")]
    BadOption {
        backend: &'static str,
        option: String,
    },

    /// The named part is not in the table
    #[error("no flash part named '{0}'")]
    UnknownPart(String),

    /// File access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The driver rejected the setup
    #[error(transparent)]
    Driver(#[from] cdqspi_core::Error),

    /// The SoC backend could not map the controller
    #[cfg(feature = "socfpga")]
    #[error(transparent)]
    Soc(#[from] cdqspi_socfpga::SocError),
}

/// Information about a backend
pub struct BackendInfo {
    /// Name used in backend strings
    pub name: &'static str,
    /// Short description, with options
    pub description: &'static str,
}

/// Backends enabled at compile time
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_backends() -> Vec<BackendInfo> {
    let mut backends = Vec::new();

    #[cfg(feature = "sim")]
    backends.push(BackendInfo {
        name: "sim",
        description: "Simulated controller and flash (part=<name|0xID>,image=<file>,save=<file>)",
    });

    #[cfg(feature = "socfpga")]
    backends.push(BackendInfo {
        name: "socfpga",
        description: "Cyclone V / Arria 10 HPS controller via /dev/mem (soc=<cyclone5|arria10>) - requires root",
    });

    backends
}

/// Short list of backend names for CLI help
pub fn backend_names_short() -> String {
    let names: Vec<&str> = available_backends().iter().map(|b| b.name).collect();
    names.join(", ")
}

/// Split `name:key=value,key=value`
fn parse_backend_string(s: &str) -> (&str, Vec<(&str, &str)>) {
    let (name, rest) = s.split_once(':').unwrap_or((s, ""));
    let options = rest
        .split(',')
        .filter(|o| !o.is_empty())
        .map(|o| o.split_once('=').unwrap_or((o, "")))
        .collect();
    (name, options)
}

/// An initialized flash behind one chip select
pub trait FlashTarget {
    /// Backend description for messages
    fn name(&self) -> &str;
    /// Resolved slave configuration
    fn slave(&self) -> DriverResult<SlaveConfig>;
    /// Device size in bytes
    fn size(&self) -> DriverResult<u64>;
    /// Smallest erase unit
    fn block_size(&self) -> DriverResult<u32>;
    /// Read `buf.len()` bytes at `addr`
    fn read(&self, addr: u32, buf: &mut [u8]) -> DriverResult<()>;
    /// Program `data` at `addr`
    fn write(&self, addr: u32, data: &[u8]) -> DriverResult<()>;
    /// Erase `len` bytes at `addr`
    fn erase(&self, addr: u32, len: u32) -> DriverResult<()>;
    /// Called once the command is done
    fn close(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

type CloseHook = Box<dyn Fn() -> Result<(), BackendError>>;

struct Target<H, P, D> {
    name: String,
    qspi: Arc<Qspi<H, P, D>>,
    cs: usize,
    on_close: Option<CloseHook>,
}

impl<H, P, D> FlashTarget for Target<H, P, D>
where
    H: Hardware,
    P: Platform,
    D: Dma,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn slave(&self) -> DriverResult<SlaveConfig> {
        self.qspi.slave_config(0, self.cs)
    }

    fn size(&self) -> DriverResult<u64> {
        self.qspi.size(0, self.cs)
    }

    fn block_size(&self) -> DriverResult<u32> {
        self.qspi.block_size(0, self.cs)
    }

    fn read(&self, addr: u32, buf: &mut [u8]) -> DriverResult<()> {
        self.qspi.read(0, self.cs, addr, buf)
    }

    fn write(&self, addr: u32, data: &[u8]) -> DriverResult<()> {
        self.qspi.write(0, self.cs, addr, data)
    }

    fn erase(&self, addr: u32, len: u32) -> DriverResult<()> {
        self.qspi.erase(0, self.cs, addr, len)
    }

    fn close(&self) -> Result<(), BackendError> {
        match &self.on_close {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}

/// Open the backend, register its controller and bring up chip select `cs`
pub fn open_target(
    spec: &str,
    config: QspiConfig,
    cs: usize,
    mode: Mode,
) -> Result<Box<dyn FlashTarget>, BackendError> {
    let (name, options) = parse_backend_string(spec);
    match name {
        #[cfg(feature = "sim")]
        "sim" => open_sim(&options, config, cs, mode),
        #[cfg(feature = "socfpga")]
        "socfpga" => open_socfpga(&options, config, cs, mode),
        _ => Err(BackendError::Unknown(name.to_string(), backend_names_short())),
    }
}

#[cfg(feature = "sim")]
fn find_part_by_name(name: &str) -> Option<&'static cdqspi_core::Part> {
    if let Some(hex) = name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
        let id = u32::from_str_radix(hex, 16).ok()?;
        return cdqspi_core::find_part(id);
    }
    cdqspi_core::PARTS.iter().find(|p| {
        p.name.eq_ignore_ascii_case(name)
            || p.name.split('/').next().is_some_and(|n| n.eq_ignore_ascii_case(name))
    })
}

#[cfg(feature = "sim")]
fn open_sim(
    options: &[(&str, &str)],
    config: QspiConfig,
    cs: usize,
    mode: Mode,
) -> Result<Box<dyn FlashTarget>, BackendError> {
    use cdqspi_sim::{connect_interrupt, SimController, SimDma, SimFlash, SimPlatform};

    let mut part_name = "W25Q16";
    let mut image = None;
    let mut save = None;
    for &(key, value) in options {
        match key {
            "part" => part_name = value,
            "image" => image = Some(PathBuf::from(value)),
            "save" => save = Some(PathBuf::from(value)),
            _ => {
                return Err(BackendError::BadOption {
                    backend: "sim",
                    option: key.to_string(),
                })
            }
        }
    }

    let part = find_part_by_name(part_name)
        .ok_or_else(|| BackendError::UnknownPart(part_name.to_string()))?;
    let mut flash = SimFlash::from_part(part);
    if let Some(path) = &image {
        let data = std::fs::read(path).map_err(|source| BackendError::Io {
            path: path.clone(),
            source,
        })?;
        flash.load(&data);
        log::info!("Loaded {} bytes into the simulated {}", data.len(), part.name);
    }

    let hw = Arc::new(SimController::new());
    hw.attach(cs.min(cdqspi_core::MAX_SLAVES - 1), flash);
    let qspi = Arc::new(
        Qspi::builder_with_dma(SimPlatform::new(), config)
            .controller_with_dma(Arc::clone(&hw), SimDma::new(Arc::clone(&hw)))
            .build()?,
    );
    connect_interrupt(&hw, &qspi, 0);
    qspi.init(0, cs, mode)?;

    let on_close: Option<CloseHook> = save.map(|path| {
        let hw = Arc::clone(&hw);
        Box::new(move || {
            let data = hw.flash(cs, |f| f.data().to_vec()).unwrap_or_default();
            std::fs::write(&path, &data).map_err(|source| BackendError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("Saved the simulated flash to {}", path.display());
            Ok(())
        }) as CloseHook
    });

    Ok(Box::new(Target {
        name: format!("sim ({})", part.name),
        qspi,
        cs,
        on_close,
    }))
}

#[cfg(feature = "socfpga")]
fn open_socfpga(
    options: &[(&str, &str)],
    mut config: QspiConfig,
    cs: usize,
    mode: Mode,
) -> Result<Box<dyn FlashTarget>, BackendError> {
    use cdqspi_socfpga::{DevMemHardware, LinuxPlatform, Soc};

    let mut soc = Soc::CycloneV;
    for &(key, value) in options {
        match key {
            "soc" => soc = value.parse()?,
            _ => {
                return Err(BackendError::BadOption {
                    backend: "socfpga",
                    option: key.to_string(),
                })
            }
        }
    }

    let hw = DevMemHardware::open(soc)?;
    if config.clock_hz == QspiConfig::default().clock_hz {
        config.clock_hz = hw.clock_hz();
    }
    let qspi = Arc::new(
        Qspi::builder(LinuxPlatform::new(), config)
            .controller(hw)
            .build()?,
    );
    qspi.init(0, cs, mode)?;

    Ok(Box::new(Target {
        name: format!("socfpga ({})", soc),
        qspi,
        cs,
        on_close: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_string() {
        let (name, options) = parse_backend_string("sim:part=N25Q256,image=a.bin");
        assert_eq!(name, "sim");
        assert_eq!(options, vec![("part", "N25Q256"), ("image", "a.bin")]);

        let (name, options) = parse_backend_string("socfpga");
        assert_eq!(name, "socfpga");
        assert!(options.is_empty());
    }

    #[cfg(feature = "sim")]
    #[test]
    fn test_find_part_by_name() {
        assert_eq!(find_part_by_name("w25q16").map(|p| p.id), Some(0x001540EF));
        assert_eq!(find_part_by_name("0x0019BA20").map(|p| p.name), Some("N25Q256"));
        assert_eq!(find_part_by_name("S25FL256S").map(|p| p.vendor), Some("Spansion"));
        assert!(find_part_by_name("nonexistent").is_none());
    }

    #[cfg(feature = "sim")]
    #[test]
    fn test_open_sim_round_trip() {
        let target = open_target("sim:part=W25Q16", QspiConfig::default(), 0, Mode::empty())
            .unwrap();
        assert_eq!(target.size().unwrap(), 2 * 1024 * 1024);
        target.erase(0, 0x1000).unwrap();
        target.write(0x10, b"cdqspi").unwrap();
        let mut buf = [0u8; 6];
        target.read(0x10, &mut buf).unwrap();
        assert_eq!(&buf, b"cdqspi");
        target.close().unwrap();
    }

    #[test]
    fn test_unknown_backend() {
        let err = open_target("ch341a", QspiConfig::default(), 0, Mode::empty())
            .err()
            .unwrap();
        assert!(matches!(err, BackendError::Unknown(..)));
    }
}
