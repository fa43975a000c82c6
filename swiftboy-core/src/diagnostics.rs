use std::fmt::Formatter;

/// Recoverable conditions raised by the bus and the console. None of these are fatal; they are
/// reported so that a host (or a test) can observe degraded behavior without the emulation
/// core failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An image with no bytes was supplied; nothing was modified.
    EmptyImage,
    /// The image was larger than the ROM window and only the leading `kept` bytes were copied.
    RomTruncated { supplied: usize, kept: usize },
    RomLoaded { len: usize, first_bytes: Vec<u8> },
    /// A write landed in the ROM window. This is where MBC register writes will be intercepted.
    RomWriteIgnored { address: u16, value: u8 },
    UnmappedAccess { address: u16 },
    /// A frame was requested before any image was loaded.
    FrameWithoutImage,
    EntryPoint { value: u8 },
    InputsChanged { mask: u8 },
    Reset,
}

impl Diagnostic {
    #[must_use]
    pub fn level(&self) -> log::Level {
        match self {
            Self::EmptyImage => log::Level::Error,
            Self::RomTruncated { .. } | Self::FrameWithoutImage | Self::UnmappedAccess { .. } => {
                log::Level::Warn
            }
            Self::RomLoaded { .. } | Self::EntryPoint { .. } | Self::Reset => log::Level::Info,
            Self::InputsChanged { .. } => log::Level::Debug,
            Self::RomWriteIgnored { .. } => log::Level::Trace,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImage => write!(f, "empty ROM image, nothing loaded"),
            Self::RomTruncated { supplied, kept } => write!(
                f,
                "ROM size ({supplied}) exceeds maximum ({kept}), truncating"
            ),
            Self::RomLoaded { len, first_bytes } => {
                write!(f, "loaded {len} ROM bytes, first bytes: {first_bytes:02X?}")
            }
            Self::RomWriteIgnored { address, value } => {
                write!(f, "ROM write ignored: {address:04X} = {value:02X}")
            }
            Self::UnmappedAccess { address } => {
                write!(f, "access to unmapped address {address:04X}")
            }
            Self::FrameWithoutImage => write!(f, "frame advance requested but no ROM loaded"),
            Self::EntryPoint { value } => write!(f, "ROM entry point (0x0100): {value:02X}"),
            Self::InputsChanged { mask } => write!(f, "button state: {mask:02X}"),
            Self::Reset => write!(f, "console reset"),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards every diagnostic to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl DiagnosticSink for LoggingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::log!(diagnostic.level(), "{diagnostic}");
    }
}
