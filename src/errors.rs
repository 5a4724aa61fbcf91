//! Save pipeline errors

use std::{error, fmt, io};

/// Failure while saving a drawing.
///
/// The turtle itself is never corrupted by a failed save; all variants are
/// terminal for the one `save` call only.
#[derive(Debug)]
pub enum Error {
    /// The output filename's extension maps to no known image format
    UnsupportedFormat(String),
    /// The output file could not be created
    Create(io::Error),
    /// Encoding the image data failed
    Encode(image::ImageError),
    /// Writing or flushing the output file failed
    Write(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedFormat(ext) => write!(f, "unknown file extension: '{ext}'"),
            Error::Create(e) => write!(f, "can't create output file: {e}"),
            Error::Encode(e) => write!(f, "can't encode image: {e}"),
            Error::Write(e) => write!(f, "can't write output file: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::UnsupportedFormat(_) => None,
            Error::Create(e) => Some(e),
            Error::Encode(e) => Some(e),
            Error::Write(e) => Some(e),
        }
    }
}
