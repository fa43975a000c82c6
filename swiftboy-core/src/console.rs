use crate::audio::AudioBuffer;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LoggingSink};
use crate::graphics::FrameBuffer;
use crate::input::InputLatch;
use crate::memory::{address, AddressSpace};
use std::rc::Rc;

/// Number of CPU clock cycles in one video frame (154 scanlines of 456 cycles each).
pub const CYCLES_PER_FRAME: u32 = 70_224;

pub const FRAME_RATE_HZ: f64 = 59.7;

/// The emulated console. Owns the memory bus and the output staging buffers, and is the only
/// thing a host drives.
///
/// The views returned by [`Console::video_frame`] and [`Console::audio_samples`] borrow the
/// console's own storage, so they cannot be held across a call that mutates it.
pub struct Console {
    address_space: AddressSpace,
    frame_buffer: FrameBuffer,
    audio_buffer: AudioBuffer,
    inputs: InputLatch,
    rom_loaded: bool,
    sink: Rc<dyn DiagnosticSink>,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Rc::new(LoggingSink))
    }

    #[must_use]
    pub fn with_sink(sink: Rc<dyn DiagnosticSink>) -> Self {
        log::debug!("initializing console");

        Self {
            address_space: AddressSpace::with_sink(Rc::clone(&sink)),
            frame_buffer: FrameBuffer::test_pattern(),
            audio_buffer: AudioBuffer::new(),
            inputs: InputLatch::default(),
            rom_loaded: false,
            sink,
        }
    }

    /// Load a cartridge image. Returns false if the image is empty, in which case nothing changes.
    pub fn load_image(&mut self, image: &[u8]) -> bool {
        if image.is_empty() {
            self.sink.report(&Diagnostic::EmptyImage);
            return false;
        }

        self.rom_loaded = self.address_space.load_rom(image);

        if self.rom_loaded {
            let entry_point = self.address_space.read_address_u8(address::ENTRY_POINT);
            self.sink
                .report(&Diagnostic::EntryPoint { value: entry_point });
        }

        self.rom_loaded
    }

    /// Run the console for one video frame.
    ///
    /// Without a CPU, PPU, or APU this only checks that an image is loaded. Once those exist it
    /// will step them in order for [`CYCLES_PER_FRAME`] cycles, each taking the bus for the
    /// duration of its step.
    pub fn advance_frame(&mut self) {
        if !self.rom_loaded {
            self.sink.report(&Diagnostic::FrameWithoutImage);
            return;
        }

        log::trace!("running frame ({CYCLES_PER_FRAME} cycles)");
    }

    /// Clear the input latch and the audio cursor.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.audio_buffer.clear();

        self.sink.report(&Diagnostic::Reset);
    }

    #[must_use]
    pub fn video_frame(&self) -> &[u8] {
        self.frame_buffer.as_bytes()
    }

    #[must_use]
    pub fn audio_samples(&self) -> (&[i16], usize) {
        self.audio_buffer.samples()
    }

    pub fn set_inputs(&mut self, mask: u8) {
        self.inputs.set(mask);
        self.sink.report(&Diagnostic::InputsChanged { mask });
    }

    #[must_use]
    pub fn inputs(&self) -> InputLatch {
        self.inputs
    }

    #[must_use]
    pub fn is_rom_loaded(&self) -> bool {
        self.rom_loaded
    }

    #[must_use]
    pub fn address_space(&self) -> &AddressSpace {
        &self.address_space
    }

    pub fn address_space_mut(&mut self) -> &mut AddressSpace {
        &mut self.address_space
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
