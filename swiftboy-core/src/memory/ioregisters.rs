use crate::memory::address;

pub const IO_REGISTERS_LEN: usize = 0x80;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoRegister {
    JOYP,
    SB,
    SC,
    DIV,
    TIMA,
    TMA,
    TAC,
    IF,
    NR10,
    NR11,
    NR12,
    NR13,
    NR14,
    NR21,
    NR22,
    NR23,
    NR24,
    NR30,
    NR31,
    NR32,
    NR33,
    NR34,
    NR41,
    NR42,
    NR43,
    NR44,
    NR50,
    NR51,
    NR52,
    LCDC,
    STAT,
    SCY,
    SCX,
    LY,
    LYC,
    DMA,
    BGP,
    OBP0,
    OBP1,
    WY,
    WX,
}

impl IoRegister {
    pub const ALL: [Self; 41] = [
        Self::JOYP,
        Self::SB,
        Self::SC,
        Self::DIV,
        Self::TIMA,
        Self::TMA,
        Self::TAC,
        Self::IF,
        Self::NR10,
        Self::NR11,
        Self::NR12,
        Self::NR13,
        Self::NR14,
        Self::NR21,
        Self::NR22,
        Self::NR23,
        Self::NR24,
        Self::NR30,
        Self::NR31,
        Self::NR32,
        Self::NR33,
        Self::NR34,
        Self::NR41,
        Self::NR42,
        Self::NR43,
        Self::NR44,
        Self::NR50,
        Self::NR51,
        Self::NR52,
        Self::LCDC,
        Self::STAT,
        Self::SCY,
        Self::SCX,
        Self::LY,
        Self::LYC,
        Self::DMA,
        Self::BGP,
        Self::OBP0,
        Self::OBP1,
        Self::WY,
        Self::WX,
    ];

    /// Offset of this register relative to the start of the I/O register bank (0xFF00).
    #[must_use]
    pub fn offset(self) -> usize {
        match self {
            Self::JOYP => 0x00,
            Self::SB => 0x01,
            Self::SC => 0x02,
            Self::DIV => 0x04,
            Self::TIMA => 0x05,
            Self::TMA => 0x06,
            Self::TAC => 0x07,
            Self::IF => 0x0F,
            // Sound registers are contiguous apart from the gaps at 0x15 and 0x1F
            Self::NR10 => 0x10,
            Self::NR11 => 0x11,
            Self::NR12 => 0x12,
            Self::NR13 => 0x13,
            Self::NR14 => 0x14,
            Self::NR21 => 0x16,
            Self::NR22 => 0x17,
            Self::NR23 => 0x18,
            Self::NR24 => 0x19,
            Self::NR30 => 0x1A,
            Self::NR31 => 0x1B,
            Self::NR32 => 0x1C,
            Self::NR33 => 0x1D,
            Self::NR34 => 0x1E,
            Self::NR41 => 0x20,
            Self::NR42 => 0x21,
            Self::NR43 => 0x22,
            Self::NR44 => 0x23,
            Self::NR50 => 0x24,
            Self::NR51 => 0x25,
            Self::NR52 => 0x26,
            Self::LCDC => 0x40,
            Self::STAT => 0x41,
            Self::SCY => 0x42,
            Self::SCX => 0x43,
            Self::LY => 0x44,
            Self::LYC => 0x45,
            Self::DMA => 0x46,
            Self::BGP => 0x47,
            Self::OBP0 => 0x48,
            Self::OBP1 => 0x49,
            Self::WY => 0x4A,
            Self::WX => 0x4B,
        }
    }

    /// Return the address for this hardware register.
    #[must_use]
    pub fn to_address(self) -> u16 {
        address::IO_REGISTERS_START + self.offset() as u16
    }

    /// Return the hardware register at the given address, if there is one.
    #[must_use]
    pub fn from_address(address: u16) -> Option<Self> {
        let offset = usize::from(address.checked_sub(address::IO_REGISTERS_START)?);
        Self::ALL
            .into_iter()
            .find(|register| register.offset() == offset)
    }
}

/// The I/O register bank. Registers are stored as a flat byte array; none of them have
/// hardware side effects yet, so writes are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoRegisters {
    contents: [u8; IO_REGISTERS_LEN],
}

impl IoRegisters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            contents: [0; IO_REGISTERS_LEN],
        }
    }

    #[must_use]
    pub fn read_address(&self, offset: usize) -> u8 {
        self.contents[offset]
    }

    pub fn write_address(&mut self, offset: usize, value: u8) {
        self.contents[offset] = value;
    }

    #[must_use]
    pub fn read_register(&self, register: IoRegister) -> u8 {
        self.contents[register.offset()]
    }

    pub fn write_register(&mut self, register: IoRegister, value: u8) {
        self.contents[register.offset()] = value;
    }
}

impl Default for IoRegisters {
    fn default() -> Self {
        Self::new()
    }
}
