use std::{
    fmt::Debug,
    io::{self, ErrorKind},
    path::Path,
};

use crate::error::Result;

/// Where [`from_path`](crate::from_path) reads declaration blocks from.
///
/// Replace it to serve styles from memory, an archive or a sandbox.
pub trait Fs: Debug {
    /// Whether `path` names a regular file that [`Fs::read`] can open
    fn is_file(&self, path: &Path) -> bool;

    /// The full contents of the file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from disk with [`std::fs`]. This is the default.
#[derive(Debug)]
pub struct StdFs;

impl Fs for StdFs {
    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Has no files at all, for callers that only convert in-memory input with
/// [`parse_declarations`](crate::parse_declarations).
#[derive(Debug)]
pub struct NullFs;

impl Fs for NullFs {
    #[inline]
    fn is_file(&self, _path: &Path) -> bool {
        false
    }

    #[inline]
    fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "NullFs, there is no file system",
        ))
    }
}

/// Load a declaration block as UTF-8 text
pub(crate) fn read_source(fs: &dyn Fs, path: &Path) -> Result<String> {
    if !fs.is_file(path) {
        return Err(io::Error::new(
            ErrorKind::NotFound,
            format!("Cannot open \"{}\": not a file.", path.display()),
        )
        .into());
    }

    Ok(String::from_utf8(fs.read(path)?)?)
}
