//
// Cartridge header addresses
//

pub const ENTRY_POINT: u16 = 0x0100;

//
// Address space boundaries
//

pub const ROM_START: u16 = 0x0000;
pub const ROM_END: u16 = 0x7FFF;

pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;

pub const EXTERNAL_RAM_START: u16 = 0xA000;
pub const EXTERNAL_RAM_END: u16 = 0xBFFF;

pub const WORKING_RAM_START: u16 = 0xC000;
pub const WORKING_RAM_END: u16 = 0xDFFF;

pub const ECHO_RAM_START: u16 = 0xE000;
pub const ECHO_RAM_END: u16 = 0xFDFF;

pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;

pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;

pub const IO_REGISTERS_START: u16 = 0xFF00;
pub const IO_REGISTERS_END: u16 = 0xFF7F;

pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;

pub const IE_REGISTER: u16 = 0xFFFF;

/// The backing region a bus address resolves to, with the offset into that region already
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedAddress {
    Rom(usize),
    Vram(usize),
    ExternalRam,
    // Echo RAM resolves here too, with the mirrored offset
    WorkingRam(usize),
    Oam(usize),
    Unusable,
    IoRegister(usize),
    Hram(usize),
    IeRegister,
    Unmapped,
}

impl MappedAddress {
    #[must_use]
    pub fn from_address(address: u16) -> Self {
        match address {
            ROM_START..=ROM_END => Self::Rom(usize::from(address)),
            VRAM_START..=VRAM_END => Self::Vram(usize::from(address - VRAM_START)),
            EXTERNAL_RAM_START..=EXTERNAL_RAM_END => Self::ExternalRam,
            WORKING_RAM_START..=WORKING_RAM_END => {
                Self::WorkingRam(usize::from(address - WORKING_RAM_START))
            }
            ECHO_RAM_START..=ECHO_RAM_END => {
                Self::WorkingRam(usize::from(address - ECHO_RAM_START))
            }
            OAM_START..=OAM_END => Self::Oam(usize::from(address - OAM_START)),
            UNUSABLE_START..=UNUSABLE_END => Self::Unusable,
            IO_REGISTERS_START..=IO_REGISTERS_END => {
                Self::IoRegister(usize::from(address - IO_REGISTERS_START))
            }
            HRAM_START..=HRAM_END => Self::Hram(usize::from(address - HRAM_START)),
            IE_REGISTER => Self::IeRegister,
            // Only reachable if the bus address type is ever widened past 16 bits
            #[allow(unreachable_patterns)]
            _ => Self::Unmapped,
        }
    }

    /// Whether a CPU write to this address lands in backing storage.
    #[must_use]
    pub fn is_writable(self) -> bool {
        !matches!(
            self,
            Self::Rom(_) | Self::ExternalRam | Self::Unusable | Self::Unmapped
        )
    }
}
