pub mod audio;
mod console;
pub mod diagnostics;
pub mod graphics;
pub mod input;
pub mod memory;
mod startup;

pub use console::{Console, CYCLES_PER_FRAME, FRAME_RATE_HZ};
pub use diagnostics::{Diagnostic, DiagnosticSink, LoggingSink};
pub use input::{Button, InputLatch, ParseButtonError};
pub use memory::AddressSpace;
pub use startup::{init_console, load_image_file, StartupError};
