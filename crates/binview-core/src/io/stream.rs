use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::info;

use crate::error::{BinviewError, Result};

/// Seekable byte source backing the viewport.
///
/// Reads are allowed to come up short at the end of the data: the returned
/// count tells the caller how much is valid, and [`at_end`](Self::at_end)
/// reports whether the most recent read hit the end. Seeking clears that flag.
pub struct ByteStream<R = File> {
    inner: R,
    position: u64,
    size: u64,
    at_end: bool,
}

impl ByteStream<File> {
    /// Open a file and record its size.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => BinviewError::NotFound {
                path: path.to_path_buf(),
            },
            _ => BinviewError::Io(e),
        })?;
        let size = file.metadata()?.len();
        info!(path = %path.display(), size, "Opened byte stream");

        Ok(Self {
            inner: file,
            position: 0,
            size,
            at_end: false,
        })
    }
}

impl<R: Read + Seek> ByteStream<R> {
    /// Wrap any seekable reader, sizing it by seeking to its end and back.
    pub fn from_reader(mut inner: R) -> Result<Self> {
        let size = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner,
            position: 0,
            size,
            at_end: false,
        })
    }

    /// Fill `buf` as far as the data allows. Returns the number of bytes read;
    /// fewer than `buf.len()` means the end was reached, zero means the stream
    /// was already there.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.position += filled as u64;
                    return Err(e.into());
                }
            }
        }
        self.position += filled as u64;
        self.at_end = filled < buf.len();
        Ok(filled)
    }

    /// Move the cursor. A target before the start of the stream is an error;
    /// clamping is the caller's job. Targets past the end are allowed and
    /// simply read as empty.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset as i128),
            SeekFrom::Current(delta) => Some(self.position as i128 + delta as i128),
            SeekFrom::End(_) => None,
        };
        if let Some(target) = target {
            if target < 0 {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("seek to negative offset {target}"),
                )
                .into());
            }
        }

        self.position = self.inner.seek(pos)?;
        self.at_end = false;
        Ok(self.position)
    }

    /// Whether the most recent read reached the end of the stream.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    /// Bytes from the start of the stream to the cursor.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total size in bytes, fixed when the stream was opened.
    pub fn size(&self) -> u64 {
        self.size
    }
}
