pub mod address;
pub mod ioregisters;

#[cfg(test)]
mod tests;

use crate::diagnostics::{Diagnostic, DiagnosticSink, LoggingSink};
use crate::memory::address::MappedAddress;
use crate::memory::ioregisters::IoRegisters;
use std::fmt::Formatter;
use std::rc::Rc;

pub const ROM_WINDOW_LEN: usize = 0x8000;
pub const VRAM_LEN: usize = 0x2000;
pub const WORKING_RAM_LEN: usize = 0x2000;
pub const OAM_LEN: usize = 0xA0;
pub const HRAM_LEN: usize = 0x7F;

// Value returned for reads that don't hit any backing storage
const OPEN_BUS: u8 = 0xFF;

/// The memory bus. Owns every memory region and resolves each 16-bit address to exactly one
/// backing byte (or to open bus for the unusable and unimplemented ranges).
pub struct AddressSpace {
    rom: Vec<u8>,
    loaded_rom_len: usize,
    vram: [u8; VRAM_LEN],
    working_ram: [u8; WORKING_RAM_LEN],
    oam: [u8; OAM_LEN],
    io_registers: IoRegisters,
    hram: [u8; HRAM_LEN],
    ie_register: u8,
    sink: Rc<dyn DiagnosticSink>,
}

impl AddressSpace {
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Rc::new(LoggingSink))
    }

    #[must_use]
    pub fn with_sink(sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            rom: vec![0; ROM_WINDOW_LEN],
            loaded_rom_len: 0,
            vram: [0; VRAM_LEN],
            working_ram: [0; WORKING_RAM_LEN],
            oam: [0; OAM_LEN],
            io_registers: IoRegisters::new(),
            hram: [0; HRAM_LEN],
            ie_register: 0,
            sink,
        }
    }

    /// Copy a cartridge image into the ROM window.
    ///
    /// Returns false without modifying anything if the image is empty. Images larger than the
    /// ROM window are truncated rather than rejected. Bytes past the end of the image keep
    /// whatever value they held before, so loading a shorter image over a longer one leaves the
    /// tail of the longer image in place.
    pub fn load_rom(&mut self, image: &[u8]) -> bool {
        log::debug!("loading ROM image of {} bytes", image.len());

        if image.is_empty() {
            self.sink.report(&Diagnostic::EmptyImage);
            return false;
        }

        let len = image.len().min(ROM_WINDOW_LEN);
        if len < image.len() {
            self.sink.report(&Diagnostic::RomTruncated {
                supplied: image.len(),
                kept: len,
            });
        }

        self.rom[..len].copy_from_slice(&image[..len]);
        self.loaded_rom_len = len;

        self.sink.report(&Diagnostic::RomLoaded {
            len,
            first_bytes: self.rom[..len.min(4)].to_vec(),
        });

        true
    }

    #[must_use]
    pub fn loaded_rom_len(&self) -> usize {
        self.loaded_rom_len
    }

    #[must_use]
    pub fn read_address_u8(&self, address: u16) -> u8 {
        match MappedAddress::from_address(address) {
            MappedAddress::Rom(offset) => self.rom[offset],
            MappedAddress::Vram(offset) => self.vram[offset],
            MappedAddress::WorkingRam(offset) => self.working_ram[offset],
            MappedAddress::Oam(offset) => self.oam[offset],
            MappedAddress::IoRegister(offset) => self.io_registers.read_address(offset),
            MappedAddress::Hram(offset) => self.hram[offset],
            MappedAddress::IeRegister => self.ie_register,
            // TODO read from cartridge RAM once MBC support exists
            MappedAddress::ExternalRam | MappedAddress::Unusable => OPEN_BUS,
            MappedAddress::Unmapped => {
                self.sink.report(&Diagnostic::UnmappedAccess { address });
                OPEN_BUS
            }
        }
    }

    pub fn write_address_u8(&mut self, address: u16, value: u8) {
        match MappedAddress::from_address(address) {
            MappedAddress::Rom(_) => {
                self.sink
                    .report(&Diagnostic::RomWriteIgnored { address, value });
            }
            MappedAddress::Vram(offset) => {
                self.vram[offset] = value;
            }
            MappedAddress::WorkingRam(offset) => {
                self.working_ram[offset] = value;
            }
            MappedAddress::Oam(offset) => {
                self.oam[offset] = value;
            }
            MappedAddress::IoRegister(offset) => {
                self.io_registers.write_address(offset, value);
            }
            MappedAddress::Hram(offset) => {
                self.hram[offset] = value;
            }
            MappedAddress::IeRegister => {
                self.ie_register = value;
            }
            MappedAddress::ExternalRam | MappedAddress::Unusable => {}
            MappedAddress::Unmapped => {
                self.sink.report(&Diagnostic::UnmappedAccess { address });
            }
        }
    }

    /// Read a little-endian 16-bit value. The high byte address wraps from 0xFFFF to 0x0000.
    #[must_use]
    pub fn read_address_u16(&self, address: u16) -> u16 {
        let lsb = self.read_address_u8(address);
        let msb = self.read_address_u8(address.wrapping_add(1));
        u16::from_le_bytes([lsb, msb])
    }

    pub fn write_address_u16(&mut self, address: u16, value: u16) {
        let [lsb, msb] = value.to_le_bytes();
        self.write_address_u8(address, lsb);
        self.write_address_u8(address.wrapping_add(1), msb);
    }

    #[must_use]
    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    #[must_use]
    pub fn oam(&self) -> &[u8] {
        &self.oam
    }

    #[must_use]
    pub fn io_registers(&self) -> &IoRegisters {
        &self.io_registers
    }

    pub fn io_registers_mut(&mut self) -> &mut IoRegisters {
        &mut self.io_registers
    }

    #[must_use]
    pub fn ie_register(&self) -> u8 {
        self.ie_register
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AddressSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSpace")
            .field("loaded_rom_len", &self.loaded_rom_len)
            .field("ie_register", &self.ie_register)
            .finish_non_exhaustive()
    }
}
