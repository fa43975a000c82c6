use crate::diagnostics::testing::RecordingSink;
use crate::diagnostics::Diagnostic;
use crate::memory::address::MappedAddress;
use crate::memory::ioregisters::IoRegister;
use crate::memory::{AddressSpace, ROM_WINDOW_LEN};
use rand::Rng;
use std::rc::Rc;

fn address_space_with_sink() -> (AddressSpace, Rc<RecordingSink>) {
    let sink = Rc::new(RecordingSink::default());
    let address_space = AddressSpace::with_sink(Rc::<RecordingSink>::clone(&sink));
    (address_space, sink)
}

fn snapshot(address_space: &AddressSpace) -> Vec<u8> {
    (0..=u16::MAX)
        .map(|address| address_space.read_address_u8(address))
        .collect()
}

#[test]
fn fresh_address_space_is_zeroed() {
    let address_space = AddressSpace::new();

    for address in 0..=u16::MAX {
        let expected = match MappedAddress::from_address(address) {
            MappedAddress::ExternalRam | MappedAddress::Unusable => 0xFF,
            _ => 0x00,
        };
        assert_eq!(
            expected,
            address_space.read_address_u8(address),
            "address {address:04X}"
        );
    }
}

#[test]
fn write_then_read_round_trips_every_writable_address() {
    let mut address_space = AddressSpace::new();

    for address in 0..=u16::MAX {
        if !MappedAddress::from_address(address).is_writable() {
            continue;
        }

        let value = (address as u8) ^ 0x5A;
        address_space.write_address_u8(address, value);
        assert_eq!(
            value,
            address_space.read_address_u8(address),
            "address {address:04X}"
        );
    }
}

#[test]
fn random_round_trips() {
    let mut rng = rand::thread_rng();
    let mut address_space = AddressSpace::new();

    for _ in 0..10_000 {
        let address: u16 = rng.gen();
        if !MappedAddress::from_address(address).is_writable() {
            continue;
        }

        let value: u8 = rng.gen();
        address_space.write_address_u8(address, value);
        assert_eq!(value, address_space.read_address_u8(address));
    }
}

#[test]
fn echo_ram_mirrors_working_ram() {
    let mut rng = rand::thread_rng();
    let mut address_space = AddressSpace::new();

    for _ in 0..1000 {
        let working_ram_address = rng.gen_range(0xC000..=0xDDFF_u16);
        let echo_address = working_ram_address + 0x2000;

        let value: u8 = rng.gen();
        address_space.write_address_u8(working_ram_address, value);
        assert_eq!(value, address_space.read_address_u8(echo_address));

        let value: u8 = rng.gen();
        address_space.write_address_u8(echo_address, value);
        assert_eq!(value, address_space.read_address_u8(working_ram_address));
    }
}

#[test]
fn echo_ram_does_not_mirror_top_of_working_ram() {
    let mut address_space = AddressSpace::new();

    // 0xDE00-0xDFFF have no echo counterpart; 0xFE00 is OAM
    address_space.write_address_u8(0xDE00, 0x12);
    assert_eq!(0x00, address_space.read_address_u8(0xFE00));
}

#[test]
fn rom_writes_are_discarded() {
    let (mut address_space, sink) = address_space_with_sink();
    assert!(address_space.load_rom(&[0x11, 0x22, 0x33]));

    address_space.write_address_u8(0x0001, 0x99);
    address_space.write_address_u8(0x2000, 0x05);

    assert_eq!(0x22, address_space.read_address_u8(0x0001));
    assert_eq!(0x00, address_space.read_address_u8(0x2000));
    assert!(sink.contains(&Diagnostic::RomWriteIgnored {
        address: 0x2000,
        value: 0x05
    }));
}

#[test]
fn unusable_and_external_ram_read_open_bus() {
    let mut address_space = AddressSpace::new();

    address_space.write_address_u8(0xFEA0, 0x00);
    address_space.write_address_u8(0xFEFF, 0x12);
    address_space.write_address_u8(0xA000, 0x34);
    address_space.write_address_u8(0xBFFF, 0x56);

    assert_eq!(0xFF, address_space.read_address_u8(0xFEA0));
    assert_eq!(0xFF, address_space.read_address_u8(0xFEFF));
    assert_eq!(0xFF, address_space.read_address_u8(0xA000));
    assert_eq!(0xFF, address_space.read_address_u8(0xBFFF));
}

#[test]
fn ie_register_is_separate_from_hram() {
    let mut address_space = AddressSpace::new();

    address_space.write_address_u8(0xFFFF, 0x1F);
    address_space.write_address_u8(0xFFFE, 0xAB);

    assert_eq!(0x1F, address_space.read_address_u8(0xFFFF));
    assert_eq!(0x1F, address_space.ie_register());
    assert_eq!(0xAB, address_space.read_address_u8(0xFFFE));
}

#[test]
fn io_registers_visible_through_bus() {
    let mut address_space = AddressSpace::new();

    address_space.write_address_u8(0xFF40, 0x91);
    assert_eq!(
        0x91,
        address_space.io_registers().read_register(IoRegister::LCDC)
    );

    address_space
        .io_registers_mut()
        .write_register(IoRegister::IF, 0x04);
    assert_eq!(0x04, address_space.read_address_u8(0xFF0F));
}

#[test]
fn vram_and_oam_views() {
    let mut address_space = AddressSpace::new();

    address_space.write_address_u8(0x8010, 0x7E);
    address_space.write_address_u8(0xFE9F, 0x42);

    assert_eq!(0x7E, address_space.vram()[0x10]);
    assert_eq!(0x42, address_space.oam()[0x9F]);
}

#[test]
fn u16_access_is_little_endian() {
    let mut address_space = AddressSpace::new();

    address_space.write_address_u16(0xC100, 0xBEEF);
    assert_eq!(0xEF, address_space.read_address_u8(0xC100));
    assert_eq!(0xBE, address_space.read_address_u8(0xC101));
    assert_eq!(0xBEEF, address_space.read_address_u16(0xC100));

    // High byte wraps around to 0x0000
    address_space.write_address_u16(0xFFFF, 0x1234);
    assert_eq!(0x34, address_space.ie_register());
}

#[test]
fn load_rom_scenario() {
    let (mut address_space, sink) = address_space_with_sink();

    assert!(address_space.load_rom(&[0x00, 0xC3, 0x50, 0x01]));

    assert_eq!(0x00, address_space.read_address_u8(0x0000));
    assert_eq!(0xC3, address_space.read_address_u8(0x0001));
    assert_eq!(0x50, address_space.read_address_u8(0x0002));
    assert_eq!(0x01, address_space.read_address_u8(0x0003));
    assert_eq!(0x00, address_space.read_address_u8(0x0100));
    assert_eq!(4, address_space.loaded_rom_len());

    assert_eq!(
        vec![Diagnostic::RomLoaded {
            len: 4,
            first_bytes: vec![0x00, 0xC3, 0x50, 0x01]
        }],
        sink.diagnostics()
    );
}

#[test]
fn load_empty_rom_fails_without_mutation() {
    let (mut address_space, sink) = address_space_with_sink();
    assert!(address_space.load_rom(&[0xAA; 0x200]));
    address_space.write_address_u8(0xC000, 0x01);
    sink.clear();

    let before = snapshot(&address_space);
    assert!(!address_space.load_rom(&[]));

    assert_eq!(before, snapshot(&address_space));
    assert_eq!(0x200, address_space.loaded_rom_len());
    assert_eq!(vec![Diagnostic::EmptyImage], sink.diagnostics());
}

#[test]
fn oversized_rom_is_truncated() {
    let (mut address_space, sink) = address_space_with_sink();
    let image: Vec<u8> = (0..ROM_WINDOW_LEN + 0x4000)
        .map(|i| (i % 251) as u8)
        .collect();

    assert!(address_space.load_rom(&image));

    assert_eq!(ROM_WINDOW_LEN, address_space.loaded_rom_len());
    for address in 0..ROM_WINDOW_LEN as u16 {
        assert_eq!(image[usize::from(address)], address_space.read_address_u8(address));
    }
    // Nothing spills past the ROM window
    assert_eq!(0x00, address_space.read_address_u8(0x8000));

    assert!(sink.contains(&Diagnostic::RomTruncated {
        supplied: ROM_WINDOW_LEN + 0x4000,
        kept: ROM_WINDOW_LEN
    }));
}

#[test]
fn reload_keeps_tail_of_previous_image() {
    let mut address_space = AddressSpace::new();

    assert!(address_space.load_rom(&[0xAA; 0x300]));
    assert!(address_space.load_rom(&[0xBB; 0x100]));

    assert_eq!(0x100, address_space.loaded_rom_len());
    assert_eq!(0xBB, address_space.read_address_u8(0x0000));
    assert_eq!(0xBB, address_space.read_address_u8(0x00FF));
    assert_eq!(0xAA, address_space.read_address_u8(0x0100));
    assert_eq!(0xAA, address_space.read_address_u8(0x02FF));
    assert_eq!(0x00, address_space.read_address_u8(0x0300));
}
