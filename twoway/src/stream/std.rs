use std::io;

use rancor::{ResultExt as _, Source};

use crate::stream::{Positional, Reader, Writer};

/// Wraps a type that implements [`io::Write`](std::io::Write) and equips it
/// with [`Writer`].
///
/// # Examples
/// ```
/// use twoway::{
///     rancor::Error,
///     stream::{IoWriter, Positional, Writer},
/// };
///
/// let mut io_writer = IoWriter::new(Vec::new());
/// assert_eq!(io_writer.pos(), 0);
/// Writer::<Error>::write(&mut io_writer, &[0u8, 1u8, 2u8, 3u8]).unwrap();
/// assert_eq!(io_writer.pos(), 4);
/// let buf = io_writer.into_inner();
/// assert_eq!(buf, vec![0u8, 1u8, 2u8, 3u8]);
/// ```
#[derive(Debug)]
pub struct IoWriter<W> {
    inner: W,
    pos: usize,
}

impl<W> IoWriter<W> {
    /// Creates a new writer from an [`io::Write`](std::io::Write).
    #[inline]
    pub fn new(inner: W) -> Self {
        Self::with_pos(inner, 0)
    }

    /// Creates a new writer, and assumes that the underlying writer is
    /// currently at the given position.
    #[inline]
    pub fn with_pos(inner: W, pos: usize) -> Self {
        Self { inner, pos }
    }

    /// Returns a reference to the underlying writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer and returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> IoWriter<W> {
    /// Flushes the underlying writer.
    pub fn flush<E: Source>(&mut self) -> Result<(), E> {
        self.inner.flush().into_error()
    }
}

impl<W> Positional for IoWriter<W> {
    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }
}

impl<W: io::Write, E: Source> Writer<E> for IoWriter<W> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.inner.write_all(bytes).into_error()?;
        self.pos += bytes.len();
        Ok(())
    }
}

/// Wraps a type that implements [`io::Read`](std::io::Read) and equips it
/// with [`Reader`].
///
/// Reads are retried until the requested number of bytes has arrived or the
/// underlying reader reports the end of its input.
///
/// # Examples
/// ```
/// use twoway::{
///     rancor::Error,
///     stream::{IoReader, Positional, Reader},
/// };
///
/// let mut io_reader = IoReader::new(&[4u8, 5, 6][..]);
/// let mut out = [0u8; 4];
/// let read = Reader::<Error>::read(&mut io_reader, &mut out).unwrap();
/// assert_eq!(read, 3);
/// assert_eq!(io_reader.pos(), 3);
/// ```
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
    pos: usize,
}

impl<R> IoReader<R> {
    /// Creates a new reader from an [`io::Read`](std::io::Read).
    #[inline]
    pub fn new(inner: R) -> Self {
        Self::with_pos(inner, 0)
    }

    /// Creates a new reader, and assumes that the underlying reader is
    /// currently at the given position.
    #[inline]
    pub fn with_pos(inner: R, pos: usize) -> Self {
        Self { inner, pos }
    }

    /// Returns a reference to the underlying reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the reader and returns the underlying reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Positional for IoReader<R> {
    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }
}

impl<R: io::Read, E: Source> Reader<E> for IoReader<R> {
    fn read(&mut self, out: &mut [u8]) -> Result<usize, E> {
        let mut filled = 0;
        while filled < out.len() {
            match self.inner.read(&mut out[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => return Err(E::new(e)),
            }
        }
        self.pos += filled;
        Ok(filled)
    }
}
