//! source.rs
//! Payload sources for the packers.
//!
//! The payload is opaque: a source only hands out its bytes. Building the
//! archive from a directory happens elsewhere.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Something that can yield the archive payload, possibly more than once.
pub trait InputSource {
    /// Fresh reader positioned at the first payload byte.
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>>;

    /// Entire payload as one buffer.
    fn read(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.open_stream()?.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Stream the payload into `output`, returning the number of bytes copied.
    fn copy_to(&self, output: &mut dyn Write) -> io::Result<u64> {
        let mut stream = self.open_stream()?;
        io::copy(&mut stream, output)
    }
}

/// Payload held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedSource {
    bytes: Vec<u8>,
}

impl BufferedSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }
}

impl From<Vec<u8>> for BufferedSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for BufferedSource {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl InputSource for BufferedSource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.bytes.as_slice())))
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn copy_to(&self, output: &mut dyn Write) -> io::Result<u64> {
        output.write_all(&self.bytes)?;
        Ok(self.bytes.len() as u64)
    }
}

/// Payload read from a file each time it is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileSource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}
