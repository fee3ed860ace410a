//! I/O adapter that checksums bytes as they are written.
//!
//! Only bytes the inner writer actually accepted are hashed, so short
//! writes are handled correctly.

use std::io::{self, Write};

use crate::checksum::Checksum;
use crate::crc::Crc32;

/// Wraps a writer and keeps a running CRC-32 of everything passed through.
///
/// ```
/// use std::io::Write;
/// use crc32_core::{crc32, io::ChecksumWriter};
///
/// let mut writer = ChecksumWriter::new(Vec::new());
/// writer.write_all(b"Hello World")?;
/// assert_eq!(writer.crc(), crc32(b"Hello World"));
/// assert_eq!(writer.into_inner(), b"Hello World");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ChecksumWriter<W> {
    inner: W,
    crc: Crc32,
}

impl<W> ChecksumWriter<W> {
    /// Wrap `inner` with a fresh accumulator.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            crc: Crc32::new(),
        }
    }

    /// CRC-32 of the bytes written so far.
    pub fn crc(&self) -> u32 {
        self.crc.finalize()
    }

    /// [`Self::crc`] as a [`Checksum`].
    pub fn checksum(&self) -> Checksum {
        self.crc.checksum()
    }

    /// Borrow the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap, discarding the checksum.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Unwrap into the inner writer and the final checksum.
    pub fn into_parts(self) -> (W, Checksum) {
        let sum = self.crc.checksum();
        (self.inner, sum)
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        let written = buf.get(..n).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("inner writer reported {n} bytes written out of {}", buf.len()),
            )
        })?;
        self.crc.update(written);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc32;

    /// Accepts at most `limit` bytes per call.
    struct Trickle {
        out: Vec<u8>,
        limit: usize,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_passes_bytes_through() {
        let mut writer = ChecksumWriter::new(Vec::new());
        writer.write_all(b"Hello ").unwrap();
        writer.write_all(b"World").unwrap();
        writer.flush().unwrap();

        let (out, sum) = writer.into_parts();
        assert_eq!(out, b"Hello World");
        assert_eq!(sum.to_string(), "4a17b156");
    }

    #[test]
    fn short_writes_hash_only_accepted_bytes() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let mut writer = ChecksumWriter::new(Trickle {
            out: Vec::new(),
            limit: 3,
        });

        let n = writer.write(data).unwrap();
        assert_eq!(n, 3);
        assert_eq!(writer.crc(), crc32(&data[..3]));

        writer.write_all(&data[3..]).unwrap();
        assert_eq!(writer.crc(), 0x414F_A339);
        assert_eq!(writer.get_ref().out, data);
    }

    /// Claims to have written more than it was given.
    struct Overreport;

    impl Write for Overreport {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len() + 1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn overreported_write_is_an_error() {
        let mut writer = ChecksumWriter::new(Overreport);
        let err = writer.write(b"abc").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(writer.crc(), 0);
    }

    #[test]
    fn empty_writer_has_empty_checksum() {
        let writer = ChecksumWriter::new(io::sink());
        assert_eq!(writer.checksum().value(), 0);
    }
}
