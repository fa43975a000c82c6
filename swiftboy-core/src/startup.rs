use crate::console::Console;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("error reading ROM image from {file_path}: {source}")]
    FileRead {
        file_path: String,
        #[source]
        source: io::Error,
    },
    #[error("ROM image at {file_path} is empty")]
    EmptyImage { file_path: String },
}

pub fn load_image_file<P>(file_path: P) -> Result<Vec<u8>, StartupError>
where
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();
    let image = fs::read(file_path).map_err(|source| StartupError::FileRead {
        file_path: file_path.display().to_string(),
        source,
    })?;

    log::info!("read {} bytes from {}", image.len(), file_path.display());

    Ok(image)
}

/// Read a ROM image from disk and construct a console with it loaded.
pub fn init_console<P>(file_path: P) -> Result<Console, StartupError>
where
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();
    let image = load_image_file(file_path)?;

    let mut console = Console::new();
    if !console.load_image(&image) {
        return Err(StartupError::EmptyImage {
            file_path: file_path.display().to_string(),
        });
    }

    Ok(console)
}
