//! PNG export

use crate::{canvas::PixelBuffer, errors::Error};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Encode the buffer as RGBA PNG and write it to `path`.
///
/// The buffer is flushed explicitly; a small image can sit entirely in
/// the writer's buffer, so dropping it unflushed would lose the storage
/// error.
pub fn write(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<(), Error> {
    let fd = File::create(path).map_err(Error::Create)?;
    let mut fd = BufWriter::new(fd);
    PngEncoder::new(&mut fd)
        .write_image(
            &buffer.to_bytes(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
        )
        .map_err(Error::Encode)?;
    fd.flush().map_err(Error::Write)
}

#[cfg(test)]
mod tests {
    use super::write;
    use crate::{canvas::PixelBuffer, errors::Error};
    use std::{env, fs};

    #[test]
    #[cfg(unix)]
    fn write_propagates_flush_failure() {
        // every write to /dev/full fails with ENOSPC; a tiny image fits
        // the writer's buffer, so only the explicit flush can see it
        let path = env::temp_dir().join(format!("turtledraw-{}-full.png", std::process::id()));
        fs::remove_file(&path).ok();
        std::os::unix::fs::symlink("/dev/full", &path).unwrap();

        let buffer = PixelBuffer::new(4, 4);
        match write(&path, &buffer) {
            Err(Error::Write(_)) => (),
            other => panic!("expected a write failure, got {other:?}"),
        }

        fs::remove_file(&path).ok();
    }
}
