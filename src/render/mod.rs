//! Image export backends

mod png;

use crate::{canvas::PixelBuffer, errors::Error};
use std::path::Path;
use strum::Display;

/// Supported raster output formats, keyed by filename extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImageFormat {
    #[strum(serialize = "png")]
    Png,
}

impl ImageFormat {
    /// Pick a format from the filename extension, if recognized
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Encode the buffer and write it to `path`
    pub fn write(self, path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<(), Error> {
        match self {
            ImageFormat::Png => png::write(path, buffer),
        }
    }
}
